// Persistent application state

pub mod config;
pub mod settings;

pub use config::ConfigManager;
pub use settings::{AppSettings, DEFAULT_RELEASES_API, UpdateSettings};
