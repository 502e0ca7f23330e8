pub mod api_utils;
pub mod config;
pub mod gesture;
pub mod i18n;
pub mod icons;
pub mod markdown;
pub mod platform;
