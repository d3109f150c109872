//! Host services consumed by views: app metadata, update checks, external links.
//!
//! Views only talk to the [`Host`] trait so they can run against a fake in tests.

pub mod desktop;
pub mod events;

pub use desktop::DesktopHost;
pub use events::{EventSubscription, UpdateEvent, UpdateEventBus, UpdateEventKind};

/// Static information about the running build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppInfo {
    pub version: String,
    pub git_sha: Option<String>,
}

impl AppInfo {
    /// Metadata compiled into this binary.
    pub fn current() -> Self {
        let sha = env!("CHERRY_GIT_SHA");
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_sha: (!sha.is_empty()).then(|| sha.to_string()),
        }
    }
}

pub trait Host: Send + Sync {
    fn app_info(&self) -> AppInfo;

    /// Short OS identifier reported in feedback mails.
    fn platform(&self) -> String {
        current_platform().to_string()
    }

    /// Start an update check. Returns immediately; the outcome arrives as
    /// [`UpdateEvent`]s on the host's bus.
    ///
    /// Calling this while a check is already running must not leave the caller
    /// waiting forever: the host either starts a new check or lets the running
    /// one answer, and every subscriber sees its final event.
    fn check_for_update(&self);

    fn open_website(&self, url: &str);
}

/// OS identifier using the names release tooling and bug reports expect.
pub fn current_platform() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}
