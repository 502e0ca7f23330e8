//! Message list: user turns verbatim, assistant turns as markdown with sources.

use crate::domain::a001_assistant_chat::sources::decorate;
use crate::shared::i18n::texts;
use crate::shared::icons::icon;
use crate::shared::markdown::render_markdown;
use contracts::domain::a001_assistant_chat::aggregate::{ChatMessage, ChatRole, MessageKind, Source};
use contracts::enums::Language;
use leptos::prelude::*;

pub const ASSISTANT_AVATAR: &str = "/assets/assistant-avatar.svg";

#[component]
pub fn ChatMessageList(
    #[prop(into)] messages: Signal<Vec<ChatMessage>>,
    #[prop(into)] language: Signal<Language>,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        let count = messages.with(|m| m.len());
        if let Some(container) = container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
        count
    });

    view! {
        <div class="message-list" node_ref=container_ref>
            <For
                each=move || messages.get()
                key=|msg| msg.id
                let:msg
            >
                <ChatMessageItem message=msg language=language />
            </For>
        </div>
    }
}

#[component]
fn ChatMessageItem(message: ChatMessage, language: Signal<Language>) -> impl IntoView {
    match (message.role, message.kind) {
        (ChatRole::User, _) => view! {
            <div class="message message--user">
                <div class="message__bubble message__bubble--user">{message.content}</div>
                <div class="message__avatar message__avatar--user">{icon("user")}</div>
            </div>
        }
        .into_any(),
        (ChatRole::Assistant, MessageKind::Thinking) => view! {
            <div class="message message--assistant">
                <AssistantAvatar />
                <div class="message__bubble message__bubble--thinking" aria-live="polite">
                    <span class="typing-indicator" aria-hidden="true">
                        <span></span><span></span><span></span>
                    </span>
                    <span class="message__thinking-label">{move || texts(language.get()).thinking}</span>
                </div>
            </div>
        }
        .into_any(),
        (ChatRole::Assistant, MessageKind::Error) => view! {
            <div class="message message--assistant">
                <AssistantAvatar />
                <div class="message__bubble message__bubble--error" role="alert">{message.content}</div>
            </div>
        }
        .into_any(),
        (ChatRole::Assistant, MessageKind::Reply) => {
            let html = render_markdown(&message.content);
            let has_sources = message.has_sources();
            let sources = message.sources;
            view! {
                <div class="message message--assistant">
                    <AssistantAvatar />
                    <div class="message__body">
                        <div class="message__bubble message__bubble--assistant">
                            <div class="markdown" inner_html=html></div>
                        </div>
                        {has_sources.then(|| view! { <SourceList sources=sources language=language /> })}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn AssistantAvatar() -> impl IntoView {
    view! {
        <div class="message__avatar">
            <img src=ASSISTANT_AVATAR alt="Assistant Avatar" width="40" height="40" />
        </div>
    }
}

#[component]
fn SourceList(sources: Vec<Source>, language: Signal<Language>) -> impl IntoView {
    let rows = decorate(&sources)
        .into_iter()
        .map(|row| {
            let rank = row.rank_label();
            let pdf = row.source.pdf.clone();
            let preview = row.source.preview.clone().unwrap_or_default();
            let relevance_class = format!("source__relevance {}", row.tier.css_class());
            let article_row = row.clone();
            view! {
                <div class="source" title=preview>
                    <span class="source__rank">{rank}</span>
                    <span class="source__pdf">{pdf}</span>
                    {move || {
                        article_row
                            .article_label(language.get())
                            .map(|label| view! { <span class="source__article">{label}</span> })
                    }}
                    <span class=relevance_class>{move || row.accuracy_label(language.get())}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="sources">
            <div class="sources__heading">
                {icon("book")}
                <span>{move || texts(language.get()).sources_heading}</span>
            </div>
            <div class="sources__list">{rows}</div>
        </div>
    }
}
