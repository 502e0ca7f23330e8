use crate::shared::i18n::texts;
use contracts::enums::Language;
use leptos::prelude::*;

const LAUNCHER_AVATAR: &str = "/assets/assistant-avatar-noborder.svg";

/// Floating button shown while the chat is closed
#[component]
pub fn ChatLauncher(
    #[prop(into)] language: Signal<Language>,
    on_open: Callback<()>,
) -> impl IntoView {
    let hovered = RwSignal::new(false);
    let label = move || texts(language.get()).open_chat;

    view! {
        <button
            class="chat-launcher"
            type="button"
            aria-label=label
            on:click=move |_| on_open.run(())
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <img class="chat-launcher__avatar" src=LAUNCHER_AVATAR alt="" />
            <span class="chat-launcher__label" class:chat-launcher__label--visible=move || hovered.get()>
                {label}
            </span>
        </button>
    }
}
