//! Chat header: language toggle, expand/collapse, close.

use crate::shared::i18n::texts;
use crate::shared::icons::icon;
use contracts::enums::Language;
use leptos::prelude::*;

#[component]
pub fn ChatHeader(
    #[prop(into)] language: Signal<Language>,
    #[prop(into)] expanded: Signal<bool>,
    /// The mobile overlay is always full screen, so it hides the expand control
    #[prop(default = true)]
    show_expand: bool,
    on_language: Callback<Language>,
    on_toggle_expand: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    // Hover only, not the expanded state
    let hovering_expand = RwSignal::new(false);

    view! {
        <header class="chat-header">
            <div class="chat-header__languages">
                {Language::all()
                    .into_iter()
                    .enumerate()
                    .map(|(i, lang)| {
                        let is_active = move || language.get() == lang;
                        view! {
                            {(i > 0).then(|| view! { <span class="chat-header__separator">"/"</span> })}
                            <span
                                class="chat-header__language"
                                class:chat-header__language--active=is_active
                                role="button"
                                on:click=move |_| on_language.run(lang)
                            >
                                {lang.code()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="chat-header__actions">
                {show_expand.then(|| view! {
                    <button
                        class="chat-header__button chat-header__expand"
                        class:chat-header__expand--hover=move || hovering_expand.get()
                        title=move || texts(language.get()).expand
                        on:mouseenter=move |_| hovering_expand.set(true)
                        on:mouseleave=move |_| hovering_expand.set(false)
                        on:click=move |_| on_toggle_expand.run(())
                    >
                        {move || if expanded.get() { icon("collapse") } else { icon("expand") }}
                    </button>
                })}
                <button
                    class="chat-header__button chat-header__close"
                    title=move || texts(language.get()).close
                    on:click=move |_| on_close.run(())
                >
                    {icon("close")}
                </button>
            </div>
        </header>
    }
}
