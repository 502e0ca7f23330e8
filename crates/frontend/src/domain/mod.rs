pub mod a001_assistant_chat;
