#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::sync::Arc;

use cherry_about::assets::Assets;
use cherry_about::host::{DesktopHost, Host, UpdateEventBus};
use cherry_about::i18n::I18n;
use cherry_about::state::{AppSettings, ConfigManager};
use cherry_about::views::AboutPanel;
use gpui::*;
use gpui_component::Root;

fn load_settings() -> AppSettings {
    let loaded = ConfigManager::new().and_then(|config| config.load_settings());
    loaded.unwrap_or_else(|err| {
        log::warn!("Using default settings: {err:#}");
        AppSettings::default()
    })
}

fn main() {
    env_logger::init();

    let settings = load_settings();
    rust_i18n::set_locale(settings.language.code());
    let i18n = Arc::new(I18n::new(settings.language));
    let bus = UpdateEventBus::new();
    let host: Arc<dyn Host> = Arc::new(DesktopHost::new(bus.clone(), settings.update.clone()));

    Application::new().with_assets(Assets).run(move |cx: &mut gpui::App| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(None, size(px(640.0), px(480.0)), cx);
        let title = i18n.t("settings.about.title");

        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions { title: Some(title.into()), ..Default::default() }),
                ..Default::default()
            },
            move |window, cx| {
                window.on_window_should_close(cx, |_window, cx| {
                    cx.quit();
                    true
                });

                let panel = cx.new(|cx| AboutPanel::new(host, &bus, i18n, window, cx));
                cx.new(|cx| Root::new(panel, window, cx))
            },
        );

        if let Err(err) = opened {
            log::error!("Failed to open window: {err}");
            cx.quit();
        }
    });
}
