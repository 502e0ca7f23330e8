//! Page composition of the widget.
//!
//! ```text
//! ChatWidget
//! ├── ChatLauncher          (chat closed)
//! ├── MobileChatWrapper     (open, viewport < breakpoint)
//! │   └── ChatBox
//! └── DesktopChatPanel      (open, viewport >= breakpoint)
//!     └── ChatBox
//! ```

pub mod global_context;
pub mod launcher;
pub mod mobile_overlay;
pub mod page;

pub use page::{ChatWidget, PresentationMode};
