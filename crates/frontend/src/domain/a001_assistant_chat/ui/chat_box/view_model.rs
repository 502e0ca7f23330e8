//! Chat Box - View Model
//!
//! Lives in context above the presentation variants, so switching between the
//! mobile overlay and the desktop panel keeps the conversation.

use crate::domain::a001_assistant_chat::api::ask;
use crate::domain::a001_assistant_chat::conversation::Conversation;
use crate::shared::config::AppConfig;
use chrono::Utc;
use contracts::domain::a001_assistant_chat::aggregate::ChatMessage;
use contracts::enums::Language;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatBoxVm {
    pub conversation: RwSignal<Conversation>,
    pub language: RwSignal<Language>,
    config: StoredValue<AppConfig>,
}

impl ChatBoxVm {
    pub fn new(config: AppConfig) -> Self {
        Self {
            conversation: RwSignal::new(Conversation::new()),
            language: RwSignal::new(Language::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.conversation.with(|c| c.messages().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.conversation.with(|c| c.is_empty())
    }

    pub fn is_pending(&self) -> bool {
        self.conversation.with(|c| c.is_pending())
    }

    pub fn set_language(&self, language: Language) {
        if self.language.get_untracked() != language {
            log::debug!("language switched to {}", language);
            self.language.set(language);
        }
    }

    /// Submit a question and settle it when the assistant answers
    pub fn send_message(&self, text: String) {
        let language = self.language.get_untracked();
        let ticket = self
            .conversation
            .try_update(|c| c.submit(&text, language, Utc::now()))
            .flatten();
        let Some(ticket) = ticket else {
            log::debug!("send ignored: empty question or a request is in flight");
            return;
        };

        log::info!("asking assistant, request {}", ticket.request_id);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let config = vm.config.get_value();
            let result = ask(&config, &ticket.question).await;
            vm.conversation.update(|c| match result {
                Ok(response) => {
                    log::info!(
                        "request {} answered with {} sources",
                        ticket.request_id,
                        response.sources.len()
                    );
                    c.resolve(&ticket, response, Utc::now());
                }
                Err(e) => {
                    log::warn!("request {} failed: {}", ticket.request_id, e);
                    c.fail(&ticket, &e.to_string(), Utc::now());
                }
            });
        });
    }
}
