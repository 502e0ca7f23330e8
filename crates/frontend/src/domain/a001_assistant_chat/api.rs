//! Client of the assistant service `POST /ask` endpoint.

use crate::shared::api_utils::api_url;
use crate::shared::config::AppConfig;
use contracts::shared::ask::{AskRequest, AskResponse, ErrorDetail};
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибки запроса к ассистенту. Текст `Display` попадает в сообщение чата.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AskError {
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("{0}")]
    Network(String),
    #[error("HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
}

impl AskError {
    /// Build a status error from the raw response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorDetail>(body)
            .map(|e| e.detail)
            .ok()
            .or_else(|| {
                let body = body.trim();
                (!body.is_empty() && body.len() <= 200).then(|| body.to_string())
            });
        AskError::Status { status, detail }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Отправить вопрос ассистенту
pub async fn ask(config: &AppConfig, question: &str) -> Result<AskResponse, AskError> {
    let url = api_url(&config.api_base, "/ask");
    let body = AskRequest::new(question, config.top_k);

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| AskError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| AskError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(AskError::from_status(status, &text));
    }

    response
        .json::<AskResponse>()
        .await
        .map_err(|e| AskError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_uses_fastapi_detail() {
        let err = AskError::from_status(400, r#"{"detail": "Question cannot be empty"}"#);
        assert_eq!(err.to_string(), "HTTP 400: Question cannot be empty");
    }

    #[test]
    fn test_status_error_plain_body() {
        assert_eq!(
            AskError::from_status(502, "Bad Gateway").to_string(),
            "HTTP 502: Bad Gateway"
        );
        assert_eq!(AskError::from_status(500, "").to_string(), "HTTP 500");
    }

    #[test]
    fn test_network_error_text_is_passed_through() {
        let err = AskError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), "TypeError: Failed to fetch");
    }
}
