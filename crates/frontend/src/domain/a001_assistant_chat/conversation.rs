//! Conversation state and the per-request lifecycle.
//!
//! Every question goes through `Pending -> Resolved | Failed`. While a request
//! is pending exactly one thinking placeholder is in the message list and new
//! questions are refused, so sends are serialized.

use crate::shared::i18n::{error_message, texts};
use chrono::{DateTime, Utc};
use contracts::domain::a001_assistant_chat::aggregate::{ChatMessage, MessageId};
use contracts::enums::Language;
use contracts::shared::ask::AskResponse;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Pending,
    Resolved,
    Failed,
}

/// Handle of one in-flight question, returned by [`Conversation::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub request_id: Uuid,
    pub placeholder_id: MessageId,
    /// Trimmed question text, sent as-is
    pub question: String,
    /// Language at submit time, used for the error text
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLifecycle {
    pub ticket: RequestTicket,
    pub phase: RequestPhase,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    current: Option<RequestLifecycle>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == Some(RequestPhase::Pending)
    }

    /// Phase of the most recent request, `None` before the first one
    pub fn phase(&self) -> Option<RequestPhase> {
        self.current.as_ref().map(|c| c.phase)
    }

    /// Append the user's question and a thinking placeholder.
    ///
    /// Returns `None` without touching state when the trimmed text is empty or
    /// another request is still pending.
    pub fn submit(
        &mut self,
        text: &str,
        language: Language,
        now: DateTime<Utc>,
    ) -> Option<RequestTicket> {
        let question = text.trim();
        if question.is_empty() || self.is_pending() {
            return None;
        }

        let placeholder = ChatMessage::thinking(texts(language).thinking, now);
        let ticket = RequestTicket {
            request_id: Uuid::new_v4(),
            placeholder_id: placeholder.id,
            question: question.to_string(),
            language,
        };

        self.messages.push(ChatMessage::user(question, now));
        self.messages.push(placeholder);
        self.current = Some(RequestLifecycle {
            ticket: ticket.clone(),
            phase: RequestPhase::Pending,
        });

        Some(ticket)
    }

    /// Replace the placeholder with the assistant's answer
    pub fn resolve(&mut self, ticket: &RequestTicket, response: AskResponse, now: DateTime<Utc>) -> bool {
        self.settle(
            ticket,
            RequestPhase::Resolved,
            ChatMessage::assistant(response.answer, response.sources, now),
        )
    }

    /// Replace the placeholder with a localized error line embedding `detail`
    pub fn fail(&mut self, ticket: &RequestTicket, detail: &str, now: DateTime<Utc>) -> bool {
        self.settle(
            ticket,
            RequestPhase::Failed,
            ChatMessage::error(error_message(ticket.language, detail), now),
        )
    }

    fn settle(&mut self, ticket: &RequestTicket, phase: RequestPhase, reply: ChatMessage) -> bool {
        let Some(current) = self.current.as_mut() else {
            return false;
        };
        if current.phase != RequestPhase::Pending || current.ticket.request_id != ticket.request_id {
            log::warn!("ignoring stale settlement of request {}", ticket.request_id);
            return false;
        }

        self.messages.retain(|m| m.id != ticket.placeholder_id);
        self.messages.push(reply);
        current.phase = phase;
        true
    }
}
