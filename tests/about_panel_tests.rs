//! Integration tests for the About panel controller and its event wiring.
//!
//! No window is needed: the controller is driven directly and host events go
//! through a real `UpdateEventBus`.

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use cherry_about::about::{
    AboutController, AboutLinks, CHECK_THROTTLE, Notice, UpdatePhase, subscribe_update_events,
};
use cherry_about::host::{EventSubscription, UpdateEvent, UpdateEventBus};
use cherry_about::i18n::{I18n, Language};
use common::{MockHost, mounted_controller};
use parking_lot::Mutex;

// =============================================================================
// Mounting
// =============================================================================

#[test]
fn test_mount_loads_version_from_host() {
    let host = MockHost::new("2.0.1", "linux");
    let mut controller = AboutController::new(host, Arc::new(I18n::new(Language::EnUs)));
    assert!(controller.state().version.is_empty());

    controller.mount();

    assert!(controller.is_mounted());
    assert_eq!(controller.state().version, "2.0.1");
    assert_eq!(controller.state().phase(), UpdatePhase::Idle);
    assert_eq!(controller.state().percent, 0.0);
}

// =============================================================================
// check_for_update
// =============================================================================

#[test]
fn test_double_click_within_window_calls_host_once() {
    let (mut controller, host) = mounted_controller();
    let start = Instant::now();

    assert!(controller.check_for_update_at(start));
    // The first check is answered before the second click
    controller.handle_event(&UpdateEvent::NotAvailable);
    assert!(!controller.check_for_update_at(start + Duration::from_millis(800)));

    assert_eq!(host.check_calls(), 1);
}

#[test]
fn test_click_after_window_reaches_host_again() {
    let (mut controller, host) = mounted_controller();
    let start = Instant::now();

    assert!(controller.check_for_update_at(start));
    controller.handle_event(&UpdateEvent::NotAvailable);
    assert!(controller.check_for_update_at(start + CHECK_THROTTLE));

    assert_eq!(host.check_calls(), 2);
}

#[test]
fn test_check_sets_checking_until_host_answers() {
    let (mut controller, _host) = mounted_controller();

    controller.check_for_update_at(Instant::now());
    assert!(controller.state().checking);
    assert_eq!(controller.state().phase(), UpdatePhase::Checking);

    controller.handle_event(&UpdateEvent::Available { version: "1.5.0".into() });
    assert!(!controller.state().checking);
}

#[test]
fn test_busy_panel_never_calls_host() {
    let (mut controller, host) = mounted_controller();
    let start = Instant::now();

    // checking = true
    assert!(controller.check_for_update_at(start));
    assert!(!controller.check_for_update_at(start + Duration::from_secs(5)));
    assert_eq!(host.check_calls(), 1);

    // downloading = true
    controller.handle_event(&UpdateEvent::DownloadStarted);
    assert!(controller.state().downloading);
    assert!(!controller.check_for_update_at(start + Duration::from_secs(10)));
    assert_eq!(host.check_calls(), 1);
}

#[test]
fn test_new_check_resets_percent() {
    let (mut controller, _host) = mounted_controller();
    controller.handle_event(&UpdateEvent::DownloadProgress { percent: 55.0 });
    controller.handle_event(&UpdateEvent::Error { message: None });

    controller.handle_event(&UpdateEvent::DownloadProgress { percent: 10.0 });
    controller.check_for_update_at(Instant::now());
    assert_eq!(controller.state().percent, 0.0);
}

// =============================================================================
// Host events
// =============================================================================

#[test]
fn test_download_progress_shows_indicator() {
    let (mut controller, _host) = mounted_controller();
    assert!(!controller.state().show_progress());

    let notice = controller.handle_event(&UpdateEvent::DownloadProgress { percent: 42.0 });

    assert_eq!(notice, None);
    assert_eq!(controller.state().percent, 42.0);
    assert!(controller.state().show_progress());
}

#[test]
fn test_error_without_message_uses_fallback() {
    let (mut controller, _host) = mounted_controller();
    controller.check_for_update_at(Instant::now());
    controller.handle_event(&UpdateEvent::DownloadStarted);
    controller.handle_event(&UpdateEvent::DownloadProgress { percent: 73.0 });

    let notice = controller.handle_event(&UpdateEvent::Error { message: None });

    assert_eq!(
        notice,
        Some(Notice::Dialog { title: "Update Error".into(), message: "Update Error".into() })
    );
    let state = controller.state();
    assert_eq!(state.percent, 0.0);
    assert!(!state.checking);
    assert!(!state.downloading);
    assert!(!state.show_progress());
}

#[test]
fn test_error_with_message_shows_it() {
    let (mut controller, _host) = mounted_controller();
    let notice = controller.handle_event(&UpdateEvent::error("net::ERR_CONNECTION_RESET"));
    assert_eq!(
        notice,
        Some(Notice::Dialog {
            title: "Update Error".into(),
            message: "net::ERR_CONNECTION_RESET".into(),
        })
    );
}

#[test]
fn test_blank_error_message_uses_fallback() {
    let (mut controller, _host) = mounted_controller();
    let notice = controller.handle_event(&UpdateEvent::error("  "));
    assert!(matches!(notice, Some(Notice::Dialog { ref message, .. }) if message == "Update Error"));
}

#[test]
fn test_not_available_only_clears_checking() {
    let (mut controller, _host) = mounted_controller();
    controller.handle_event(&UpdateEvent::DownloadStarted);
    controller.handle_event(&UpdateEvent::DownloadProgress { percent: 30.0 });

    let notice = controller.handle_event(&UpdateEvent::NotAvailable);

    assert_eq!(notice, Some(Notice::Success("You are using the latest version".into())));
    let state = controller.state();
    assert!(!state.checking);
    assert!(state.downloading);
    assert_eq!(state.percent, 30.0);
}

#[test]
fn test_notices_follow_language() {
    let host = MockHost::new("1.0.0", "win32");
    let mut controller = AboutController::new(host, Arc::new(I18n::new(Language::ZhCn)));
    controller.mount();

    assert_eq!(
        controller.handle_event(&UpdateEvent::NotAvailable),
        Some(Notice::Success("你的软件已是最新版本".into()))
    );
}

// =============================================================================
// Links and feedback
// =============================================================================

#[test]
fn test_open_external_delegates_to_host() {
    let (controller, host) = mounted_controller();
    let releases = controller.links().releases.clone();

    controller.open_external(&releases);

    assert_eq!(host.opened(), vec![releases]);
}

#[test]
fn test_compose_feedback_opens_mailto() {
    let (controller, host) = mounted_controller();

    controller.compose_feedback();

    let opened = host.opened();
    assert_eq!(opened.len(), 1);
    let url = &opened[0];
    assert!(url.starts_with("mailto:kangfenmao@qq.com?subject="));
    assert!(url.contains("Version%3A%201.4.0"));
    assert!(url.contains("Platform%3A%20darwin"));
}

#[test]
fn test_custom_links_are_used() {
    let host = MockHost::new("0.1.0", "linux");
    let links = AboutLinks {
        feedback_email: "team@example.com".into(),
        feedback_subject: "Hi".into(),
        ..AboutLinks::default()
    };
    let controller =
        AboutController::new(host, Arc::new(I18n::new(Language::EnUs))).with_links(links);

    assert_eq!(
        controller.feedback_mailto(),
        "mailto:team@example.com?subject=Hi&body=%0A%0AVersion%3A%200.1.0%20%7C%20Platform%3A%20linux"
    );
}

// =============================================================================
// Subscription lifecycle
// =============================================================================

type Wired = (Arc<Mutex<AboutController>>, UpdateEventBus, Vec<EventSubscription>);

fn wired() -> Wired {
    let (controller, _host) = mounted_controller();
    let controller = Arc::new(Mutex::new(controller));
    let bus = UpdateEventBus::new();

    let target = controller.clone();
    let subscriptions = subscribe_update_events(&bus, move |event| {
        target.lock().handle_event(&event);
    });
    (controller, bus, subscriptions)
}

#[test]
fn test_bus_events_reach_controller() {
    let (controller, bus, _subscriptions) = wired();
    assert_eq!(bus.listener_count(), 5);

    bus.emit(UpdateEvent::DownloadStarted);
    bus.emit(UpdateEvent::DownloadProgress { percent: 64.0 });

    let guard = controller.lock();
    assert!(guard.state().downloading);
    assert_eq!(guard.state().percent, 64.0);
}

#[test]
fn test_no_mutation_after_unmount() {
    let (controller, bus, subscriptions) = wired();
    bus.emit(UpdateEvent::DownloadProgress { percent: 20.0 });
    let before = controller.lock().state().clone();

    drop(subscriptions);
    controller.lock().unmount();
    assert_eq!(bus.listener_count(), 0);

    bus.emit(UpdateEvent::DownloadStarted);
    bus.emit(UpdateEvent::DownloadProgress { percent: 90.0 });
    bus.emit(UpdateEvent::Error { message: None });

    assert_eq!(controller.lock().state(), &before);
}

#[test]
fn test_unmounted_controller_ignores_direct_events() {
    let (mut controller, _host) = mounted_controller();
    controller.unmount();

    assert_eq!(controller.handle_event(&UpdateEvent::NotAvailable), None);
    controller.handle_event(&UpdateEvent::DownloadProgress { percent: 50.0 });

    assert_eq!(controller.state().percent, 0.0);
}
