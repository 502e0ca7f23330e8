//! Full-screen chat overlay for narrow viewports.
//!
//! `controller` keeps the history/visibility rules free of DOM code,
//! `view` wires them to touch events, `popstate` and the exit animation.

pub mod controller;
pub mod view;

pub use controller::OverlayController;
pub use view::{MobileChatWrapper, OverlayHandle};
