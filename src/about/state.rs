//! Display state of the About panel and its reaction to update events.

use crate::host::UpdateEvent;

/// Where the update lifecycle stands, as seen by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    Idle,
    Checking,
    Downloading,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    pub version: String,
    pub checking: bool,
    pub downloading: bool,
    /// Download progress, 0–100.
    pub percent: f32,
}

/// Something the panel has to surface outside its own layout.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The running build is the latest one.
    UpToDate,
    /// Check or download failed; `message` as reported by the host.
    Failed { message: Option<String> },
}

impl DisplayState {
    pub fn is_busy(&self) -> bool {
        self.checking || self.downloading
    }

    pub fn show_progress(&self) -> bool {
        self.percent > 0.0
    }

    pub fn phase(&self) -> UpdatePhase {
        if self.downloading {
            UpdatePhase::Downloading
        } else if self.checking {
            UpdatePhase::Checking
        } else {
            UpdatePhase::Idle
        }
    }

    /// Enter `Checking` for a user-triggered check.
    pub fn begin_check(&mut self) {
        self.percent = 0.0;
        self.checking = true;
    }

    pub fn apply(&mut self, event: &UpdateEvent) -> Option<UpdateOutcome> {
        match event {
            UpdateEvent::NotAvailable => {
                self.checking = false;
                Some(UpdateOutcome::UpToDate)
            }
            UpdateEvent::Available { .. } => {
                self.checking = false;
                None
            }
            UpdateEvent::DownloadStarted => {
                self.checking = false;
                self.downloading = true;
                None
            }
            UpdateEvent::DownloadProgress { percent } => {
                self.percent = percent.clamp(0.0, 100.0);
                None
            }
            UpdateEvent::Error { message } => {
                self.checking = false;
                self.downloading = false;
                self.percent = 0.0;
                Some(UpdateOutcome::Failed { message: message.clone() })
            }
        }
    }
}
