pub mod a001_assistant_chat;
pub mod a002_faq;
