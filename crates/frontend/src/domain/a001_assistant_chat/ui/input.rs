use crate::shared::i18n::texts;
use crate::shared::icons::icon;
use contracts::enums::Language;
use leptos::prelude::*;

/// Trimmed draft, or `None` when there is nothing to send
pub fn prepare_submission(draft: &str) -> Option<String> {
    let text = draft.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Single-line input; emits the trimmed text and clears itself
#[component]
pub fn ChatInput(
    #[prop(into)] language: Signal<Language>,
    #[prop(into)] busy: Signal<bool>,
    on_send: Callback<String>,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let can_submit = move || !busy.get() && draft.with(|d| prepare_submission(d).is_some());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if let Some(text) = draft.with_untracked(|d| prepare_submission(d)) {
            on_send.run(text);
            draft.set(String::new());
        }
    };

    view! {
        <footer class="chat-input">
            <form class="chat-input__form" on:submit=on_submit>
                <input
                    type="text"
                    class="chat-input__field"
                    placeholder=move || texts(language.get()).input_placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="chat-input__send"
                    title=move || texts(language.get()).send
                    disabled=move || !can_submit()
                >
                    {icon("send")}
                </button>
            </form>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_submission() {
        assert_eq!(prepare_submission("  здраво  "), Some("здраво".to_string()));
        assert_eq!(prepare_submission(""), None);
        assert_eq!(prepare_submission(" \t\n"), None);
    }
}
