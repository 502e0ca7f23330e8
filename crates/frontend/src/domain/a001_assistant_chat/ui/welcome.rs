//! Welcome panel shown while the conversation is empty.
//!
//! Two views toggled locally: the quick start (three canned questions plus a
//! "more questions" launcher) and the full FAQ list with a back action.

use super::message_list::ASSISTANT_AVATAR;
use crate::shared::i18n::texts;
use crate::shared::icons::icon;
use contracts::domain::a002_faq::{faq_entries, LocalizedText};
use contracts::enums::Language;
use leptos::prelude::*;

/// Canned question of the quick start view
#[derive(Debug, Clone, Copy)]
pub struct QuickQuestion {
    pub title: LocalizedText,
    pub question: LocalizedText,
    pub icon: &'static str,
}

pub const QUICK_QUESTIONS: [QuickQuestion; 3] = [
    QuickQuestion {
        title: LocalizedText {
            mk: "Специјализации и Пракса",
            en: "Specializations and Practice",
        },
        question: LocalizedText {
            mk: "Како да аплицирам за платена специјализација или пракса?",
            en: "How can I apply for a paid specialization or practice?",
        },
        icon: "stethoscope",
    },
    QuickQuestion {
        title: LocalizedText {
            mk: "Имунизација",
            en: "Immunization",
        },
        question: LocalizedText {
            mk: "Зошто е важно да се следи Календарот за имунизација?",
            en: "Why is it important to follow the Immunization Calendar?",
        },
        icon: "cross",
    },
    QuickQuestion {
        title: LocalizedText {
            mk: "Гестациски носител (БПО)",
            en: "Gestational carrier (ART)",
        },
        question: LocalizedText {
            mk: "Кој има право да поведе постапка на БПО со гестациски носител?",
            en: "Who has the right to initiate a surrogacy procedure?",
        },
        icon: "heart",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomeView {
    #[default]
    QuickStart,
    FullFaq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Ask(&'static str),
    ShowFaq,
    ShowQuickStart,
}

/// One clickable row of the welcome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub icon: &'static str,
    pub action: ShortcutAction,
}

impl WelcomeView {
    /// View shown after `action`; `Ask` leaves the view as it is
    pub fn after(self, action: ShortcutAction) -> Self {
        match action {
            ShortcutAction::ShowFaq => WelcomeView::FullFaq,
            ShortcutAction::ShowQuickStart => WelcomeView::QuickStart,
            ShortcutAction::Ask(_) => self,
        }
    }
}

pub fn shortcuts(view: WelcomeView, language: Language) -> Vec<Shortcut> {
    let t = texts(language);
    match view {
        WelcomeView::QuickStart => QUICK_QUESTIONS
            .iter()
            .map(|q| Shortcut {
                title: q.title.get(language),
                subtitle: Some(q.question.get(language)),
                icon: q.icon,
                action: ShortcutAction::Ask(q.question.get(language)),
            })
            .chain(std::iter::once(Shortcut {
                title: t.more_questions,
                subtitle: None,
                icon: "list",
                action: ShortcutAction::ShowFaq,
            }))
            .collect(),
        WelcomeView::FullFaq => std::iter::once(Shortcut {
            title: t.back,
            subtitle: None,
            icon: "back",
            action: ShortcutAction::ShowQuickStart,
        })
        .chain(faq_entries().iter().map(|entry| Shortcut {
            title: entry.question.get(language),
            subtitle: Some(entry.category.get(language)),
            icon: entry.icon,
            action: ShortcutAction::Ask(entry.question.get(language)),
        }))
        .collect(),
    }
}

#[component]
pub fn WelcomePanel(
    #[prop(into)] language: Signal<Language>,
    /// Question shortcuts are disabled while a request is in flight
    #[prop(into)]
    busy: Signal<bool>,
    on_send: Callback<String>,
) -> impl IntoView {
    let view_state = RwSignal::new(WelcomeView::default());

    let run = move |action: ShortcutAction| match action {
        ShortcutAction::Ask(question) => on_send.run(question.to_string()),
        other => view_state.update(|v| *v = v.after(other)),
    };

    view! {
        <div class="welcome">
            <Show when=move || view_state.get() == WelcomeView::QuickStart>
                <div class="welcome__intro">
                    <div class="welcome__title">
                        <img src=ASSISTANT_AVATAR alt=move || texts(language.get()).assistant_name width="52" height="52" />
                        <h2>{move || texts(language.get()).welcome_title}</h2>
                    </div>
                    <p class="welcome__body">{move || texts(language.get()).welcome_body}</p>
                </div>
            </Show>
            <Show when=move || view_state.get() == WelcomeView::FullFaq>
                <h3 class="welcome__faq-title">{move || texts(language.get()).faq_title}</h3>
            </Show>

            <div
                class="welcome__shortcuts"
                class:welcome__shortcuts--faq=move || view_state.get() == WelcomeView::FullFaq
            >
                {move || {
                    shortcuts(view_state.get(), language.get())
                        .into_iter()
                        .map(|shortcut| {
                            let is_question = matches!(shortcut.action, ShortcutAction::Ask(_));
                            view! {
                                <button
                                    class="shortcut"
                                    class:shortcut--nav=!is_question
                                    disabled=move || is_question && busy.get()
                                    on:click=move |_| run(shortcut.action)
                                >
                                    <span class="shortcut__icon">{icon(shortcut.icon)}</span>
                                    <span class="shortcut__text">
                                        <span class="shortcut__title">{shortcut.title}</span>
                                        {shortcut.subtitle.map(|s| view! { <span class="shortcut__subtitle">{s}</span> })}
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(items: &[Shortcut], pred: impl Fn(&ShortcutAction) -> bool) -> usize {
        items.iter().filter(|s| pred(&s.action)).count()
    }

    #[test]
    fn test_quick_start_has_three_questions_and_faq_launcher() {
        for language in Language::all() {
            let items = shortcuts(WelcomeView::QuickStart, language);
            assert_eq!(items.len(), 4);
            assert_eq!(count(&items, |a| matches!(a, ShortcutAction::Ask(_))), 3);
            assert_eq!(items.last().map(|s| s.action), Some(ShortcutAction::ShowFaq));
        }
    }

    #[test]
    fn test_faq_view_lists_whole_dataset_with_back() {
        let items = shortcuts(WelcomeView::FullFaq, Language::En);
        assert_eq!(items[0].action, ShortcutAction::ShowQuickStart);
        assert_eq!(
            count(&items, |a| matches!(a, ShortcutAction::Ask(_))),
            faq_entries().len()
        );
    }

    #[test]
    fn test_launcher_and_back_toggle_views() {
        let view = WelcomeView::default();
        let view = view.after(ShortcutAction::ShowFaq);
        assert_eq!(view, WelcomeView::FullFaq);
        assert_eq!(view.after(ShortcutAction::Ask("q")), WelcomeView::FullFaq);
        assert_eq!(view.after(ShortcutAction::ShowQuickStart), WelcomeView::QuickStart);
    }

    #[test]
    fn test_questions_follow_language() {
        let mk = shortcuts(WelcomeView::QuickStart, Language::Mk);
        let en = shortcuts(WelcomeView::QuickStart, Language::En);
        assert_eq!(
            mk[1].action,
            ShortcutAction::Ask("Зошто е важно да се следи Календарот за имунизација?")
        );
        assert_eq!(
            en[1].action,
            ShortcutAction::Ask("Why is it important to follow the Immunization Calendar?")
        );
    }
}
