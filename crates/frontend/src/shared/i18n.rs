//! Localized UI strings (MK/EN).
//!
//! Language only changes what is displayed. Outgoing questions are sent as the
//! plain text the user picked or typed.

use contracts::enums::Language;

/// All display strings of the widget for one language
#[derive(Debug)]
pub struct UiText {
    pub assistant_name: &'static str,
    pub welcome_title: &'static str,
    pub welcome_body: &'static str,
    pub input_placeholder: &'static str,
    pub send: &'static str,
    pub thinking: &'static str,
    pub error_prefix: &'static str,
    pub sources_heading: &'static str,
    pub article: &'static str,
    pub accuracy: &'static str,
    pub more_questions: &'static str,
    pub faq_title: &'static str,
    pub back: &'static str,
    pub expand: &'static str,
    pub close: &'static str,
    pub open_chat: &'static str,
}

static MK: UiText = UiText {
    assistant_name: "Ви асистент",
    welcome_title: "Ви Асистент",
    welcome_body: "Прашај ме се што те интересира за здравство!",
    input_placeholder: "Внеси порака...",
    send: "Испрати",
    thinking: "Размислувам...",
    error_prefix: "Грешка",
    sources_heading: "Извори (подредени по релевантност):",
    article: "Член",
    accuracy: "точност",
    more_questions: "Повеќе прашања",
    faq_title: "Често поставувани прашања",
    back: "Назад",
    expand: "Зголеми",
    close: "Затвори",
    open_chat: "Отвори разговор",
};

static EN: UiText = UiText {
    assistant_name: "AI assistant",
    welcome_title: "AI Assistant",
    welcome_body: "Ask me anything you are interested in regarding healthcare!",
    input_placeholder: "Type a message...",
    send: "Send",
    thinking: "Thinking...",
    error_prefix: "Error",
    sources_heading: "Sources (ranked by relevance):",
    article: "Article",
    accuracy: "accuracy",
    more_questions: "More questions",
    faq_title: "Frequently asked questions",
    back: "Back",
    expand: "Expand",
    close: "Close",
    open_chat: "Open chat",
};

pub fn texts(language: Language) -> &'static UiText {
    match language {
        Language::Mk => &MK,
        Language::En => &EN,
    }
}

/// Chat line shown when a request fails, e.g. "Грешка: HTTP 500"
pub fn error_message(language: Language, detail: &str) -> String {
    format!("{}: {}", texts(language).error_prefix, detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_text() {
        assert_eq!(texts(Language::Mk).thinking, "Размислувам...");
        assert_eq!(texts(Language::En).thinking, "Thinking...");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(Language::Mk, "HTTP 500"), "Грешка: HTTP 500");
        assert_eq!(
            error_message(Language::En, "network down"),
            "Error: network down"
        );
    }

    #[test]
    fn test_languages_differ() {
        let mk = texts(Language::Mk);
        let en = texts(Language::En);
        assert_ne!(mk.input_placeholder, en.input_placeholder);
        assert_ne!(mk.sources_heading, en.sources_heading);
    }
}
