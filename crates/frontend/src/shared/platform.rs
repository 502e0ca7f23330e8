//! Browser integration behind a small trait.
//!
//! The mobile overlay and page composition talk to the viewport and the
//! history API only through [`Platform`], so their rules are testable with
//! [`fake::FakePlatform`] instead of a real browser.

use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Key of the marker we put into `history.state`
const CHAT_STATE_KEY: &str = "chatOpen";

thread_local! {
    /// Set by `history_back`, cleared by the `popstate` it produces
    static BACK_PENDING: Cell<bool> = const { Cell::new(false) };
}

pub trait Platform {
    /// Current viewport width in CSS px, `None` when unknown
    fn viewport_width(&self) -> Option<f64>;

    /// Push the synthetic "chat is open" history entry
    fn push_chat_entry(&self);

    /// Whether the synthetic entry is the current history entry
    fn chat_entry_is_current(&self) -> bool;

    /// Step back one entry. The browser applies it asynchronously.
    fn history_back(&self);

    /// A `history_back` has been issued and its `popstate` has not arrived yet
    fn back_pending(&self) -> bool;
}

/// `Platform` over the real `window`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

impl BrowserPlatform {
    fn history() -> Option<web_sys::History> {
        web_sys::window().and_then(|w| w.history().ok())
    }
}

impl Platform for BrowserPlatform {
    fn viewport_width(&self) -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    fn push_chat_entry(&self) {
        let Some(history) = Self::history() else {
            log::warn!("history API unavailable, back button will not close the chat");
            return;
        };
        let state = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&state, &JsValue::from_str(CHAT_STATE_KEY), &JsValue::TRUE);
        if let Err(e) = history.push_state(&state, "") {
            log::warn!("history.pushState failed: {e:?}");
        }
    }

    fn chat_entry_is_current(&self) -> bool {
        Self::history()
            .and_then(|h| h.state().ok())
            .filter(|state| state.is_object())
            .and_then(|state| js_sys::Reflect::get(&state, &JsValue::from_str(CHAT_STATE_KEY)).ok())
            .and_then(|flag| flag.as_bool())
            .unwrap_or(false)
    }

    fn history_back(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };

        let settled = Closure::once_into_js(|| BACK_PENDING.with(|p| p.set(false)));
        let options = web_sys::AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "popstate",
            settled.unchecked_ref(),
            &options,
        ) {
            log::warn!("could not watch popstate: {e:?}");
        }

        match history.back() {
            Ok(()) => BACK_PENDING.with(|p| p.set(true)),
            Err(e) => log::warn!("history.back failed: {e:?}"),
        }
    }

    fn back_pending(&self) -> bool {
        BACK_PENDING.with(|p| p.get())
    }
}

#[cfg(test)]
pub mod fake {
    use super::Platform;
    use std::cell::{Cell, RefCell};

    /// In-memory history stack: `true` marks the synthetic chat entry.
    ///
    /// Like the browser, `history_back` only queues the step; tests apply it
    /// with `deliver_pending_back`.
    #[derive(Debug)]
    pub struct FakePlatform {
        pub width: Cell<Option<f64>>,
        pub entries: RefCell<Vec<bool>>,
        pub back_calls: Cell<usize>,
        pending_backs: Cell<usize>,
    }

    impl FakePlatform {
        pub fn with_width(width: f64) -> Self {
            Self {
                width: Cell::new(Some(width)),
                entries: RefCell::new(vec![false]),
                back_calls: Cell::new(0),
                pending_backs: Cell::new(0),
            }
        }

        pub fn chat_entries(&self) -> usize {
            self.entries.borrow().iter().filter(|e| **e).count()
        }

        /// What the browser does when the user presses back
        pub fn user_presses_back(&self) {
            let mut entries = self.entries.borrow_mut();
            if entries.len() > 1 {
                entries.pop();
            }
        }

        /// Apply one queued `history_back`; `false` if none was queued
        pub fn deliver_pending_back(&self) -> bool {
            let pending = self.pending_backs.get();
            if pending == 0 {
                return false;
            }
            self.pending_backs.set(pending - 1);
            self.user_presses_back();
            true
        }
    }

    impl Platform for FakePlatform {
        fn viewport_width(&self) -> Option<f64> {
            self.width.get()
        }

        fn push_chat_entry(&self) {
            self.entries.borrow_mut().push(true);
        }

        fn chat_entry_is_current(&self) -> bool {
            self.entries.borrow().last().copied().unwrap_or(false)
        }

        fn history_back(&self) {
            self.back_calls.set(self.back_calls.get() + 1);
            self.pending_backs.set(self.pending_backs.get() + 1);
        }

        fn back_pending(&self) -> bool {
            self.pending_backs.get() > 0
        }
    }

    impl<P: Platform> Platform for &P {
        fn viewport_width(&self) -> Option<f64> {
            (**self).viewport_width()
        }
        fn push_chat_entry(&self) {
            (**self).push_chat_entry()
        }
        fn chat_entry_is_current(&self) -> bool {
            (**self).chat_entry_is_current()
        }
        fn history_back(&self) {
            (**self).history_back()
        }
        fn back_pending(&self) -> bool {
            (**self).back_pending()
        }
    }
}
