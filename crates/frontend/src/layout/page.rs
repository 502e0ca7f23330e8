use super::global_context::AppGlobalContext;
use super::launcher::ChatLauncher;
use super::mobile_overlay::{MobileChatWrapper, OverlayHandle};
use crate::domain::a001_assistant_chat::ui::chat_box::{ChatBox, ChatBoxVm};
use crate::shared::config::AppConfig;
use crate::shared::platform::{BrowserPlatform, Platform};
use leptos::ev;
use leptos::prelude::*;

const BACKGROUND_IMAGE: &str = "/assets/background.svg";

/// How the open chat is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// Full-screen overlay with swipe and back-button handling
    Mobile,
    /// Fixed panel in the corner of the page
    Desktop,
}

impl PresentationMode {
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Unknown width counts as desktop
    pub fn detect(platform: &impl Platform, breakpoint: f64) -> Self {
        platform
            .viewport_width()
            .map(|w| Self::for_width(w, breakpoint))
            .unwrap_or(Self::Desktop)
    }

    /// New mode after a resize, `None` if the breakpoint was not crossed
    pub fn after_resize(self, platform: &impl Platform, breakpoint: f64) -> Option<Self> {
        let next = Self::detect(platform, breakpoint);
        (next != self).then_some(next)
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Root of the widget: background page, launcher and the open chat.
///
/// Conversation state lives in `ChatBoxVm` above this component, so crossing
/// the breakpoint swaps the frame around the chat without losing messages.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = use_context::<ChatBoxVm>().expect("ChatBoxVm context not found");
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    let breakpoint = config.mobile_breakpoint;
    let close_delay_ms = config.close_delay_ms;
    let mode = RwSignal::new(PresentationMode::detect(&BrowserPlatform, breakpoint));

    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(next) = mode.get_untracked().after_resize(&BrowserPlatform, breakpoint) {
            log::debug!("presentation mode -> {next:?}");
            mode.set(next);
        }
    });
    on_cleanup(move || resize.remove());

    let open = Callback::new(move |_: ()| ctx.open_chat());
    let close = Callback::new(move |_: ()| ctx.close_chat());

    view! {
        <div class="chat-widget" style=format!("background-image: url('{BACKGROUND_IMAGE}');")>
            <Show
                when=move || ctx.chat_open.get()
                fallback=move || view! { <ChatLauncher language=vm.language on_open=open /> }
            >
                <Show
                    when=move || mode.get().is_mobile()
                    fallback=move || view! { <DesktopChatPanel on_close=close /> }
                >
                    <MobileChatWrapper on_close=close close_delay_ms=close_delay_ms>
                        <MobileChatBody />
                    </MobileChatWrapper>
                </Show>
            </Show>
        </div>
    }
}

/// Chat inside the mobile overlay; its close button runs the overlay's exit sequence
#[component]
fn MobileChatBody() -> impl IntoView {
    let handle = use_context::<OverlayHandle>().expect("OverlayHandle context not found");
    view! { <ChatBox on_close=handle.close show_expand=false /> }
}

#[component]
fn DesktopChatPanel(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    view! {
        <div
            class="desktop-panel"
            class:desktop-panel--expanded=move || ctx.chat_expanded.get()
        >
            <ChatBox on_close=on_close />
        </div>
    }
}
