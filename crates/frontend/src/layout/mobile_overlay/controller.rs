//! History and visibility rules of the mobile overlay.

use crate::shared::platform::Platform;

/// State of one mounted overlay.
///
/// Owns the synthetic history entry: pushed on mount, consumed either by the
/// browser (user pressed back) or by us when the overlay closes itself.
#[derive(Debug)]
pub struct OverlayController<P: Platform> {
    platform: P,
    close_delay_ms: u32,
    visible: bool,
    closing: bool,
    /// A step back issued by a previous overlay is still in flight; its
    /// `popstate` is not a request to close this one
    ignore_next_back: bool,
}

impl<P: Platform> OverlayController<P> {
    pub fn new(platform: P, close_delay_ms: u32) -> Self {
        Self {
            platform,
            close_delay_ms,
            visible: true,
            closing: false,
            ignore_next_back: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Push the synthetic entry unless one is already current, so repeated
    /// open/close cycles never stack entries.
    ///
    /// `history.back()` is asynchronous: right after a close the old entry
    /// still looks current. In that case push a fresh entry and swallow the
    /// late `popstate`.
    pub fn mount(&mut self) {
        if !self.visible {
            return;
        }
        if self.platform.back_pending() {
            self.platform.push_chat_entry();
            self.ignore_next_back = true;
        } else if !self.platform.chat_entry_is_current() {
            self.platform.push_chat_entry();
        }
    }

    /// Back button/gesture. The browser has already popped an entry.
    pub fn on_back(&mut self) -> Option<u32> {
        if std::mem::take(&mut self.ignore_next_back) {
            log::debug!("ignoring popstate from a previous overlay");
            return None;
        }
        self.request_close()
    }

    /// Start the close sequence. Returns the exit animation length after
    /// which `finish_close` must run, `None` if hidden or already closing.
    pub fn request_close(&mut self) -> Option<u32> {
        if !self.visible || self.closing {
            return None;
        }
        self.closing = true;
        Some(self.close_delay_ms)
    }

    /// End of the exit animation
    pub fn finish_close(&mut self) {
        self.visible = false;
        self.closing = false;
        if self.platform.chat_entry_is_current() {
            self.platform.history_back();
        }
    }

    /// Overlay removed without closing (e.g. viewport became desktop-sized)
    pub fn detach(&mut self) {
        if self.visible {
            self.finish_close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DEFAULT_CLOSE_DELAY_MS;
    use crate::shared::gesture::{SwipeOutcome, SwipeTracker};
    use crate::shared::platform::fake::FakePlatform;

    fn overlay(platform: &FakePlatform) -> OverlayController<&FakePlatform> {
        let mut overlay = OverlayController::new(platform, DEFAULT_CLOSE_DELAY_MS);
        overlay.mount();
        overlay
    }

    #[test]
    fn test_mount_pushes_one_entry() {
        let platform = FakePlatform::with_width(375.0);
        let mut overlay = overlay(&platform);
        overlay.mount();
        assert_eq!(platform.chat_entries(), 1);
    }

    #[test]
    fn test_close_button_steps_back() {
        let platform = FakePlatform::with_width(375.0);
        let mut overlay = overlay(&platform);

        assert_eq!(overlay.request_close(), Some(300));
        assert!(overlay.is_closing());
        assert!(overlay.is_visible());
        assert_eq!(overlay.request_close(), None);

        overlay.finish_close();
        assert!(!overlay.is_visible());
        assert_eq!(platform.back_calls.get(), 1);

        assert!(platform.deliver_pending_back());
        assert_eq!(platform.chat_entries(), 0);
    }

    #[test]
    fn test_swipe_down_closes_after_exit_delay() {
        let platform = FakePlatform::with_width(375.0);
        let mut overlay = overlay(&platform);
        let mut tracker = SwipeTracker::new();

        tracker.start(100.0, 100.0);
        assert!(tracker.moved(105.0, 180.0).is_some());
        assert_eq!(tracker.end(110.0, 240.0), SwipeOutcome::Close);

        let delay = overlay.request_close();
        assert_eq!(delay, Some(DEFAULT_CLOSE_DELAY_MS));
        // Still on screen while the exit animation plays
        assert!(overlay.is_visible());

        overlay.finish_close();
        assert!(!overlay.is_visible());
        assert_eq!(platform.back_calls.get(), 1);
    }

    #[test]
    fn test_short_swipe_keeps_overlay_open() {
        let platform = FakePlatform::with_width(375.0);
        let overlay = overlay(&platform);
        let mut tracker = SwipeTracker::new();

        tracker.start(100.0, 100.0);
        assert_eq!(tracker.end(100.0, 180.0), SwipeOutcome::Reset);
        assert!(!overlay.is_closing());
        assert_eq!(platform.chat_entries(), 1);
    }

    #[test]
    fn test_back_button_closes_without_extra_back() {
        let platform = FakePlatform::with_width(375.0);
        let mut overlay = overlay(&platform);

        platform.user_presses_back();
        assert_eq!(overlay.on_back(), Some(300));
        overlay.finish_close();

        assert_eq!(platform.back_calls.get(), 0);
        assert_eq!(platform.entries.borrow().len(), 1);
    }

    #[test]
    fn test_back_after_close_is_ignored() {
        let platform = FakePlatform::with_width(375.0);
        let mut overlay = overlay(&platform);
        overlay.request_close();
        overlay.finish_close();

        assert_eq!(overlay.on_back(), None);
        assert!(!overlay.is_closing());
    }

    #[test]
    fn test_reopen_cycles_do_not_leak_entries() {
        let platform = FakePlatform::with_width(375.0);
        for _ in 0..5 {
            let mut overlay = overlay(&platform);
            overlay.request_close();
            overlay.finish_close();
            platform.deliver_pending_back();
        }
        assert_eq!(platform.entries.borrow().len(), 1);
        assert_eq!(platform.chat_entries(), 0);
    }

    #[test]
    fn test_reopen_before_back_lands_stays_open() {
        let platform = FakePlatform::with_width(375.0);
        let mut first = overlay(&platform);
        first.request_close();
        first.finish_close();

        // Reopened before the browser processed the step back
        let mut second = overlay(&platform);
        assert!(platform.deliver_pending_back());
        assert_eq!(second.on_back(), None);
        assert!(second.is_visible());
        assert!(!second.is_closing());
        assert!(platform.chat_entry_is_current());

        // A real back press afterwards still closes it
        platform.user_presses_back();
        assert_eq!(second.on_back(), Some(300));
    }

    #[test]
    fn test_detach_cleans_up_history() {
        let platform = FakePlatform::with_width(375.0);
        let mut overlay = overlay(&platform);
        overlay.detach();
        platform.deliver_pending_back();
        assert_eq!(platform.chat_entries(), 0);

        // Already closed: nothing more to undo
        overlay.detach();
        assert_eq!(platform.back_calls.get(), 1);
    }
}
