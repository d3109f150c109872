//! Shared fixtures for integration tests.
//!
//! `MockHost` stands in for the native host: it records every call instead of
//! touching the network or the system browser.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cherry_about::about::AboutController;
use cherry_about::host::{AppInfo, Host};
use cherry_about::i18n::{I18n, Language};
use parking_lot::Mutex;

pub struct MockHost {
    pub version: String,
    pub platform: String,
    check_calls: AtomicUsize,
    opened: Mutex<Vec<String>>,
}

impl MockHost {
    pub fn new(version: &str, platform: &str) -> Arc<Self> {
        Arc::new(Self {
            version: version.to_string(),
            platform: platform.to_string(),
            check_calls: AtomicUsize::new(0),
            opened: Mutex::new(Vec::new()),
        })
    }

    pub fn check_calls(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl Host for MockHost {
    fn app_info(&self) -> AppInfo {
        AppInfo { version: self.version.clone(), git_sha: None }
    }

    fn platform(&self) -> String {
        self.platform.clone()
    }

    fn check_for_update(&self) {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn open_website(&self, url: &str) {
        self.opened.lock().push(url.to_string());
    }
}

/// Mounted controller wired to a fresh mock host, English strings.
pub fn mounted_controller() -> (AboutController, Arc<MockHost>) {
    let host = MockHost::new("1.4.0", "darwin");
    let mut controller = AboutController::new(host.clone(), Arc::new(I18n::new(Language::EnUs)));
    controller.mount();
    (controller, host)
}
