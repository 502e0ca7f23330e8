use crate::domain::a001_assistant_chat::ui::chat_box::ChatBoxVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::ChatWidget;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!(
        "assistant widget starting, api_base={}, top_k={}",
        config.api_base,
        config.top_k
    );

    // Conversation state sits above both presentation variants
    provide_context(ChatBoxVm::new(config.clone()));
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <ChatWidget />
    }
}
