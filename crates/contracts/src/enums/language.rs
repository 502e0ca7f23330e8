use serde::{Deserialize, Serialize};

/// Язык интерфейса виджета
///
/// Влияет только на отображаемые строки: вопрос уходит в `/ask` как есть.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "MK")]
    Mk,
    #[serde(rename = "EN")]
    En,
}

impl Language {
    /// Код языка для переключателя в шапке
    pub fn code(&self) -> &'static str {
        match self {
            Language::Mk => "MK",
            Language::En => "EN",
        }
    }

    /// Все языки в порядке отображения
    pub fn all() -> Vec<Language> {
        vec![Language::Mk, Language::En]
    }

}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_macedonian() {
        assert_eq!(Language::default(), Language::Mk);
    }

    #[test]
    fn test_all_in_display_order() {
        let codes: Vec<&str> = Language::all().iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["MK", "EN"]);
        assert_eq!(Language::En.to_string(), "EN");
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::Mk).unwrap(), "\"MK\"");
        let lang: Language = serde_json::from_str("\"EN\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
