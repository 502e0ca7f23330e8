use super::controller::OverlayController;
use crate::shared::gesture::{DragFrame, SwipeOutcome, SwipeTracker};
use crate::shared::icons::icon;
use crate::shared::platform::BrowserPlatform;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Lets overlay content start the animated close (e.g. the header close button)
#[derive(Clone, Copy)]
pub struct OverlayHandle {
    pub close: Callback<()>,
}

fn first_point(touches: web_sys::TouchList) -> Option<(f64, f64)> {
    touches
        .get(0)
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
}

/// Mobile overlay around the chat.
///
/// Closes on the close button, on a downward swipe and on the browser back
/// button. `on_close` fires once the exit animation has finished.
#[component]
pub fn MobileChatWrapper(
    on_close: Callback<()>,
    /// Exit animation length, ms
    close_delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let overlay = RwSignal::new(OverlayController::new(BrowserPlatform, close_delay_ms));
    let tracker = StoredValue::new(SwipeTracker::new());
    let drag = RwSignal::new(None::<DragFrame>);

    overlay.update_untracked(|o| o.mount());

    // Runs the exit animation, then hands control back to the page
    let play_exit = move |delay_ms: u32| {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if overlay.try_update(|o| o.finish_close()).is_some() {
                on_close.run(());
            }
        });
    };

    let close = Callback::new(move |_: ()| {
        if let Some(delay_ms) = overlay.try_update(|o| o.request_close()).flatten() {
            log::debug!("mobile overlay closing");
            play_exit(delay_ms);
        }
    });

    let popstate = window_event_listener(ev::popstate, move |_| {
        if let Some(delay_ms) = overlay.try_update(|o| o.on_back()).flatten() {
            log::debug!("mobile overlay closed by back navigation");
            play_exit(delay_ms);
        }
    });

    on_cleanup(move || {
        popstate.remove();
        overlay.try_update(|o| o.detach());
    });

    provide_context(OverlayHandle { close });

    let on_touch_start = move |ev: ev::TouchEvent| {
        if let Some((x, y)) = first_point(ev.touches()) {
            tracker.update_value(|t| t.start(x, y));
        }
    };

    let on_touch_move = move |ev: ev::TouchEvent| {
        let Some((x, y)) = first_point(ev.touches()) else {
            return;
        };
        if let Some(frame) = tracker.with_value(|t| t.moved(x, y)) {
            drag.set(Some(frame));
        }
    };

    let on_touch_end = move |ev: ev::TouchEvent| {
        if !tracker.with_value(|t| t.is_tracking()) {
            return;
        }
        let Some((x, y)) = first_point(ev.changed_touches()) else {
            tracker.update_value(|t| t.cancel());
            drag.set(Some(DragFrame::REST));
            return;
        };
        let mut outcome = SwipeOutcome::Reset;
        tracker.update_value(|t| outcome = t.end(x, y));
        match outcome {
            SwipeOutcome::Close => close.run(()),
            SwipeOutcome::Reset => drag.set(Some(DragFrame::REST)),
        }
    };

    let on_touch_cancel = move |_: ev::TouchEvent| {
        tracker.update_value(|t| t.cancel());
        drag.set(Some(DragFrame::REST));
    };

    view! {
        <div
            class="mobile-overlay"
            class:mobile-overlay--closing=move || overlay.with(|o| o.is_closing())
            style=move || drag.get().map(|f| f.to_style()).unwrap_or_default()
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            <div class="mobile-overlay__swipe-indicator"></div>
            <button
                class="mobile-overlay__close"
                type="button"
                aria-label="Close"
                on:click=move |_| close.run(())
            >
                {icon("close")}
            </button>
            <div class="mobile-overlay__body">
                {children()}
            </div>
        </div>
    }
}
