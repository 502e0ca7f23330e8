pub mod api;
pub mod conversation;
pub mod sources;
pub mod ui;
