use crate::enums::Language;

/// Текст на обоих языках интерфейса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub mk: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Mk => self.mk,
            Language::En => self.en,
        }
    }
}

/// Запись статического справочника FAQ (только чтение)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub category: LocalizedText,
    pub question: LocalizedText,
    /// Имя иконки из набора фронтенда
    pub icon: &'static str,
}
