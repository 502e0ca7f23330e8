use leptos::prelude::*;

/// Widget-level UI state shared by the launcher and both presentation variants
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub chat_open: RwSignal<bool>,
    pub chat_expanded: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            chat_open: RwSignal::new(false),
            chat_expanded: RwSignal::new(false),
        }
    }

    pub fn open_chat(&self) {
        log::debug!("chat opened");
        self.chat_open.set(true);
    }

    pub fn close_chat(&self) {
        log::debug!("chat closed");
        self.chat_open.set(false);
    }

    pub fn toggle_expanded(&self) {
        self.chat_expanded.update(|expanded| *expanded = !*expanded);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
