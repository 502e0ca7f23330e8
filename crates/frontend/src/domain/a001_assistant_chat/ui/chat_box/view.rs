//! Chat Box - View Component

use super::view_model::ChatBoxVm;
use crate::domain::a001_assistant_chat::ui::header::ChatHeader;
use crate::domain::a001_assistant_chat::ui::input::ChatInput;
use crate::domain::a001_assistant_chat::ui::message_list::ChatMessageList;
use crate::domain::a001_assistant_chat::ui::welcome::WelcomePanel;
use crate::layout::global_context::AppGlobalContext;
use contracts::enums::Language;
use leptos::prelude::*;

#[component]
pub fn ChatBox(
    on_close: Callback<()>,
    #[prop(default = true)] show_expand: bool,
) -> impl IntoView {
    let vm = use_context::<ChatBoxVm>().expect("ChatBoxVm context not found");
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let language = vm.language;
    let busy = Signal::derive(move || vm.is_pending());
    let messages = Signal::derive(move || vm.messages());
    let send = Callback::new(move |text: String| vm.send_message(text));

    log::debug!("ChatBox mounted");
    on_cleanup(|| log::debug!("ChatBox unmounted"));

    view! {
        <div class="chat-box" class:chat-box--expanded=move || ctx.chat_expanded.get()>
            <ChatHeader
                language=language
                expanded=ctx.chat_expanded
                show_expand=show_expand
                on_language=Callback::new(move |lang: Language| vm.set_language(lang))
                on_toggle_expand=Callback::new(move |_: ()| ctx.toggle_expanded())
                on_close=on_close
            />

            <div class="chat-box__content">
                <Show
                    when=move || vm.is_empty()
                    fallback=move || view! { <ChatMessageList messages=messages language=language /> }
                >
                    <WelcomePanel language=language busy=busy on_send=send />
                </Show>
            </div>

            <ChatInput language=language busy=busy on_send=send />
        </div>
    }
}
