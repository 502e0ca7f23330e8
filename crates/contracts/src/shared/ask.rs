//! Wire DTOs of the assistant service `POST /ask` endpoint.

use crate::domain::a001_assistant_chat::aggregate::Source;
use serde::{Deserialize, Serialize};

/// Количество фрагментов, которые просим у сервиса по умолчанию
pub const DEFAULT_TOP_K: u32 = 5;

/// Тело запроса `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub top_k: u32,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, top_k: u32) -> Self {
        Self {
            question: question.into(),
            top_k,
        }
    }
}

/// Ответ `POST /ask`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    /// Отсутствующее или `null` поле читается как пустой список
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<Source>,
}

/// Тело ошибки в стиле FastAPI: `{"detail": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Source>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<Source>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(AskRequest::new("Што е БПО?", DEFAULT_TOP_K)).unwrap();
        assert_eq!(body, serde_json::json!({"question": "Што е БПО?", "top_k": 5}));
    }

    #[test]
    fn test_response_without_sources() {
        let resp: AskResponse = serde_json::from_str(r#"{"answer": "Да."}"#).unwrap();
        assert_eq!(resp.answer, "Да.");
        assert!(resp.sources.is_empty());

        let resp: AskResponse =
            serde_json::from_str(r#"{"answer": "Да.", "sources": null}"#).unwrap();
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn test_response_keeps_source_order() {
        let resp: AskResponse = serde_json::from_str(
            r#"{
                "answer": "...",
                "sources": [
                    {"pdf": "b.pdf", "relevance": 0.4},
                    {"pdf": "a.pdf", "article": 12, "relevance": 0.95, "preview": "Член 12"}
                ]
            }"#,
        )
        .unwrap();
        let pdfs: Vec<&str> = resp.sources.iter().map(|s| s.pdf.as_str()).collect();
        assert_eq!(pdfs, vec!["b.pdf", "a.pdf"]);
        assert_eq!(resp.sources[1].article, Some(12));
    }

    #[test]
    fn test_error_detail() {
        let err: ErrorDetail =
            serde_json::from_str(r#"{"detail": "Question cannot be empty"}"#).unwrap();
        assert_eq!(err.detail, "Question cannot be empty");
    }
}
