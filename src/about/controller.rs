use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::about::links::AboutLinks;
use crate::about::state::{DisplayState, UpdateOutcome};
use crate::host::{EventSubscription, Host, UpdateEvent, UpdateEventBus, UpdateEventKind};
use crate::i18n::I18n;
use crate::throttle::LeadingThrottle;

/// Minimum spacing between two accepted "check for update" clicks.
pub const CHECK_THROTTLE: Duration = Duration::from_secs(2);

/// Localized message the view must show on top of its own layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Transient toast.
    Success(String),
    /// Blocking dialog with a single acknowledge button.
    Dialog { title: String, message: String },
}

/// UI-agnostic logic behind the About panel.
pub struct AboutController {
    host: Arc<dyn Host>,
    i18n: Arc<I18n>,
    links: AboutLinks,
    state: DisplayState,
    throttle: LeadingThrottle,
    mounted: bool,
}

impl AboutController {
    pub fn new(host: Arc<dyn Host>, i18n: Arc<I18n>) -> Self {
        Self {
            host,
            i18n,
            links: AboutLinks::default(),
            state: DisplayState::default(),
            throttle: LeadingThrottle::new(CHECK_THROTTLE),
            mounted: false,
        }
    }

    pub fn with_links(mut self, links: AboutLinks) -> Self {
        self.links = links;
        self
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn links(&self) -> &AboutLinks {
        &self.links
    }

    pub fn t(&self, key: &str) -> String {
        self.i18n.t(key)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start accepting events and load the version from the host.
    pub fn mount(&mut self) {
        self.mounted = true;
        self.state.version = self.host.app_info().version;
    }

    /// Stop reacting to events. State is left as it was.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn check_for_update(&mut self) -> bool {
        self.check_for_update_at(Instant::now())
    }

    /// Ask the host for an update check. Returns `true` when the host was called.
    ///
    /// `checking` is only cleared by the events the host sends back.
    pub fn check_for_update_at(&mut self, now: Instant) -> bool {
        if !self.throttle.try_acquire_at(now) {
            log::debug!("Update check throttled");
            return false;
        }
        if self.state.is_busy() {
            log::debug!("Update check ignored while {:?}", self.state.phase());
            return false;
        }

        self.state.begin_check();
        self.host.check_for_update();
        true
    }

    pub fn open_external(&self, url: &str) {
        self.host.open_website(url);
    }

    pub fn feedback_mailto(&self) -> String {
        let version = self.host.app_info().version;
        let platform = self.host.platform();
        self.links.feedback_mailto(&version, &platform)
    }

    /// Open the user's mail client with a prefilled feedback message.
    pub fn compose_feedback(&self) {
        let url = self.feedback_mailto();
        self.open_external(&url);
    }

    /// Fold a host event into the display state. Ignored while unmounted.
    pub fn handle_event(&mut self, event: &UpdateEvent) -> Option<Notice> {
        if !self.mounted {
            log::debug!("Dropping {} after unmount", event.kind());
            return None;
        }

        match self.state.apply(event)? {
            UpdateOutcome::UpToDate => {
                Some(Notice::Success(self.t("settings.about.updateNotAvailable")))
            }
            UpdateOutcome::Failed { message } => {
                let title = self.t("settings.about.updateError");
                let message =
                    message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| title.clone());
                log::warn!("Update failed: {message}");
                Some(Notice::Dialog { title, message })
            }
        }
    }
}

/// Register `sink` for every update event kind. All listeners are released
/// when the returned guards drop.
pub fn subscribe_update_events(
    bus: &UpdateEventBus,
    sink: impl Fn(UpdateEvent) + Clone + Send + Sync + 'static,
) -> Vec<EventSubscription> {
    UpdateEventKind::ALL
        .into_iter()
        .map(|kind| {
            let sink = sink.clone();
            bus.on(kind, move |event| sink(event.clone()))
        })
        .collect()
}
