//! Application settings with persistence.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// GitHub releases endpoint polled by the updater.
pub const DEFAULT_RELEASES_API: &str =
    "https://api.github.com/repos/kangfenmao/cherry-studio/releases";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppSettings {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub update: UpdateSettings,
}

/// Update checking and download settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateSettings {
    /// Start downloading as soon as a newer release is found.
    #[serde(default = "default_true")]
    pub auto_download: bool,
    #[serde(default = "default_releases_api")]
    pub releases_api: String,
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self { auto_download: true, releases_api: default_releases_api() }
    }
}

fn default_true() -> bool {
    true
}

fn default_releases_api() -> String {
    DEFAULT_RELEASES_API.to_string()
}
