rust_i18n::i18n!("locales", fallback = "en-US");

pub mod about;
pub mod assets;
pub mod components;
pub mod error;
pub mod host;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod throttle;
pub mod views;
