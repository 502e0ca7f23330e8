pub mod chat_box;
pub mod header;
pub mod input;
pub mod message_list;
pub mod welcome;
