//! Update lifecycle events pushed from the host to views.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// A single update lifecycle notification.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateEvent {
    /// The check finished and the running build is current.
    NotAvailable,
    /// A newer release exists.
    Available { version: String },
    /// The host started downloading the release.
    DownloadStarted,
    /// Download progress in percent (0–100).
    DownloadProgress { percent: f32 },
    /// Check or download failed. `message` may be absent.
    Error { message: Option<String> },
}

impl UpdateEvent {
    pub fn kind(&self) -> UpdateEventKind {
        match self {
            UpdateEvent::NotAvailable => UpdateEventKind::UpdateNotAvailable,
            UpdateEvent::Available { .. } => UpdateEventKind::UpdateAvailable,
            UpdateEvent::DownloadStarted => UpdateEventKind::DownloadUpdate,
            UpdateEvent::DownloadProgress { .. } => UpdateEventKind::DownloadProgress,
            UpdateEvent::Error { .. } => UpdateEventKind::UpdateError,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        UpdateEvent::Error { message: Some(message.into()) }
    }
}

/// Named channels a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateEventKind {
    UpdateNotAvailable,
    UpdateAvailable,
    DownloadUpdate,
    DownloadProgress,
    UpdateError,
}

impl UpdateEventKind {
    pub const ALL: [UpdateEventKind; 5] = [
        UpdateEventKind::UpdateNotAvailable,
        UpdateEventKind::UpdateAvailable,
        UpdateEventKind::DownloadUpdate,
        UpdateEventKind::DownloadProgress,
        UpdateEventKind::UpdateError,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UpdateEventKind::UpdateNotAvailable => "update-not-available",
            UpdateEventKind::UpdateAvailable => "update-available",
            UpdateEventKind::DownloadUpdate => "download-update",
            UpdateEventKind::DownloadProgress => "download-progress",
            UpdateEventKind::UpdateError => "update-error",
        }
    }
}

impl fmt::Display for UpdateEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown update event: {s}"))
    }
}

type Handler = Arc<dyn Fn(&UpdateEvent) + Send + Sync>;

struct Listener {
    id: u64,
    kind: UpdateEventKind,
    handler: Handler,
}

#[derive(Default)]
struct BusInner {
    next_id: AtomicU64,
    listeners: Mutex<Vec<Listener>>,
}

/// Fan-out of host update events to per-kind listeners.
///
/// Cloning is cheap; clones share the same listener table. Events may be
/// emitted from any thread.
#[derive(Clone, Default)]
pub struct UpdateEventBus {
    inner: Arc<BusInner>,
}

impl UpdateEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`. The listener stays registered until the
    /// returned guard is dropped.
    pub fn on(
        &self,
        kind: UpdateEventKind,
        handler: impl Fn(&UpdateEvent) + Send + Sync + 'static,
    ) -> EventSubscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push(Listener { id, kind, handler: Arc::new(handler) });
        log::debug!("Subscribed listener {id} to {kind}");
        EventSubscription { id, bus: Arc::downgrade(&self.inner) }
    }

    /// Deliver `event` to every listener registered for its kind.
    pub fn emit(&self, event: UpdateEvent) {
        let kind = event.kind();
        // Handlers run outside the lock so they may subscribe or unsubscribe
        let handlers: Vec<Handler> = self
            .inner
            .listeners
            .lock()
            .iter()
            .filter(|listener| listener.kind == kind)
            .map(|listener| listener.handler.clone())
            .collect();

        if handlers.is_empty() {
            log::debug!("No listeners for {kind}");
        }
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}

/// Scoped registration on an [`UpdateEventBus`]. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct EventSubscription {
    id: u64,
    bus: Weak<BusInner>,
}

impl EventSubscription {
    /// Explicitly release the listener. Equivalent to dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner.listeners.lock().retain(|listener| listener.id != self.id);
            log::debug!("Unsubscribed listener {}", self.id);
        }
    }
}
