use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID сообщения чата, уникален в пределах сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Вид сообщения ассистента
///
/// `Thinking` живёт только пока запрос в полёте и заменяется на `Reply` или `Error`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Reply,
    Thinking,
    Error,
}

/// Источник ответа, как его вернул сервис `/ask`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub pdf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<u32>,
    /// Релевантность в диапазоне [0, 1]
    pub relevance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Сообщение чата. После добавления в ленту не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: ChatRole,
    #[serde(default)]
    pub kind: MessageKind,
    pub content: String,
    /// Источники в порядке, полученном от сервиса (без пересортировки)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::new_v4(),
            role: ChatRole::User,
            kind: MessageKind::Reply,
            content: content.into(),
            sources: Vec::new(),
            created_at,
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        sources: Vec<Source>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MessageId::new_v4(),
            role: ChatRole::Assistant,
            kind: MessageKind::Reply,
            content: content.into(),
            sources,
            created_at,
        }
    }

    pub fn thinking(content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            kind: MessageKind::Thinking,
            ..Self::assistant(content, Vec::new(), created_at)
        }
    }

    pub fn error(content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            kind: MessageKind::Error,
            ..Self::assistant(content, Vec::new(), created_at)
        }
    }

    pub fn is_thinking(&self) -> bool {
        self.kind == MessageKind::Thinking
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_assign_fresh_ids() {
        let now = Utc::now();
        let a = ChatMessage::user("здраво", now);
        let b = ChatMessage::user("здраво", now);
        assert_ne!(a.id, b.id);
        assert_eq!(a.role, ChatRole::User);
    }

    #[test]
    fn test_placeholder_and_error_are_assistant_messages() {
        let now = Utc::now();
        let thinking = ChatMessage::thinking("Thinking...", now);
        assert_eq!(thinking.role, ChatRole::Assistant);
        assert!(thinking.is_thinking());

        let error = ChatMessage::error("Error: boom", now);
        assert_eq!(error.role, ChatRole::Assistant);
        assert_eq!(error.kind, MessageKind::Error);
        assert!(!error.has_sources());
    }

    #[test]
    fn test_source_optional_fields() {
        let source: Source =
            serde_json::from_str(r#"{"pdf": "zakon.pdf", "relevance": 0.42}"#).unwrap();
        assert_eq!(source.article, None);
        assert_eq!(source.preview, None);

        let json = serde_json::to_value(&source).unwrap();
        assert!(json.get("article").is_none());
    }
}
