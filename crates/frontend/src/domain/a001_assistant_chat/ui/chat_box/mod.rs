//! Chat Box UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: ChatBoxVm with RwSignals, owns conversation and language
//! - view.rs: Main component ChatBox

mod view;
mod view_model;

pub use view::ChatBox;
pub use view_model::ChatBoxVm;
