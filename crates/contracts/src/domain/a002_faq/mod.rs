//! Static FAQ dataset.
//!
//! The entries are authored in `faq.json` and turned into a `&'static` slice by
//! `build.rs`, so the dataset is loaded exactly once and never mutated.

pub mod aggregate;

mod faq_gen {
    use super::aggregate::{FaqEntry, LocalizedText};

    include!(concat!(env!("OUT_DIR"), "/faq_gen.rs"));
}

pub use aggregate::{FaqEntry, LocalizedText};
pub use faq_gen::FAQ_ENTRIES;

/// Все записи FAQ в порядке справочника
pub fn faq_entries() -> &'static [FaqEntry] {
    FAQ_ENTRIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Language;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_is_not_empty() {
        assert!(faq_entries().len() >= 3);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = faq_entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), faq_entries().len());
    }

    #[test]
    fn test_every_entry_is_bilingual() {
        for entry in faq_entries() {
            assert!(!entry.question.get(Language::Mk).trim().is_empty(), "{}", entry.id);
            assert!(!entry.question.get(Language::En).trim().is_empty(), "{}", entry.id);
            assert!(!entry.category.get(Language::En).trim().is_empty(), "{}", entry.id);
            assert!(!entry.icon.is_empty(), "{}", entry.id);
        }
    }

    #[test]
    fn test_dataset_order_follows_json() {
        let first = &faq_entries()[0];
        assert_eq!(first.id, "faq-01");
        assert_eq!(faq_entries()[2].icon, "cross");
    }
}
