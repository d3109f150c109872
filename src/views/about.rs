//! About settings page: branding, version, update checks and feedback links.

use std::sync::Arc;

use futures::StreamExt as _;
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::button::Button;
use gpui_component::notification::Notification;
use gpui_component::progress::Progress;
use gpui_component::scroll::ScrollableElement as _;
use gpui_component::{ActiveTheme as _, Root, Sizable as _, WindowExt as _};

use crate::about::{AboutController, DisplayState, Notice, subscribe_update_events};
use crate::assets::LOGO;
use crate::components::{open_info_dialog, progress_ring};
use crate::host::{EventSubscription, Host, UpdateEvent, UpdateEventBus};
use crate::i18n::I18n;
use crate::theme::{borders, colors, sizing, spacing};

pub struct AboutPanel {
    controller: AboutController,
    // Dropped before the pump so no listener outlives its receiver
    _update_subscriptions: Vec<EventSubscription>,
    _event_pump: Task<()>,
}

impl AboutPanel {
    pub fn new(
        host: Arc<dyn Host>,
        bus: &UpdateEventBus,
        i18n: Arc<I18n>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut controller = AboutController::new(host, i18n);
        controller.mount();

        // Host events may arrive on any thread; funnel them onto the UI thread
        let (tx, mut rx) = futures::channel::mpsc::unbounded::<UpdateEvent>();
        let subscriptions = subscribe_update_events(bus, move |event| {
            let _ = tx.unbounded_send(event);
        });

        let event_pump = cx.spawn_in(window, async move |this, cx| {
            while let Some(event) = rx.next().await {
                let delivered = this.update_in(cx, |this, window, cx| {
                    if let Some(notice) = this.controller.handle_event(&event) {
                        this.show_notice(notice, window, cx);
                    }
                    cx.notify();
                });
                if delivered.is_err() {
                    break;
                }
            }
        });

        log::debug!("About panel mounted, version {}", controller.state().version);

        Self { controller, _update_subscriptions: subscriptions, _event_pump: event_pump }
    }

    pub fn state(&self) -> &DisplayState {
        self.controller.state()
    }

    fn show_notice(&self, notice: Notice, window: &mut Window, cx: &mut Context<Self>) {
        match notice {
            Notice::Success(message) => {
                window.push_notification(Notification::success(message), cx);
            }
            Notice::Dialog { title, message } => {
                let ok = self.controller.t("common.ok");
                open_info_dialog(window, cx, title, message, ok);
            }
        }
    }

    fn check_for_update(&mut self, cx: &mut Context<Self>) {
        if self.controller.check_for_update() {
            cx.notify();
        }
    }

    fn open_link(&self, url: &str) {
        self.controller.open_external(url);
    }

    fn render_branding(&self, cx: &mut Context<Self>) -> Div {
        let state = self.controller.state();
        let links = self.controller.links();
        let show_progress = state.show_progress();
        let percent = state.percent;
        let ring_color = colors::progress_ring(cx);

        let logo = div()
            .id("about-logo")
            .relative()
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .size(sizing::progress_ring())
            .cursor_pointer()
            .on_click(cx.listener(|this, _: &ClickEvent, _window, _cx| {
                let url = this.controller.links().repository.clone();
                this.open_link(&url);
            }))
            .when(show_progress, |el| {
                el.child(
                    progress_ring(percent, sizing::progress_ring_stroke(), ring_color)
                        .absolute()
                        .top_0()
                        .left_0()
                        .size_full(),
                )
            })
            .child(img(LOGO).size(sizing::logo()).rounded_full());

        let version_tag = div()
            .id("about-version")
            .mt(spacing::sm())
            .px(spacing::sm())
            .py(px(1.0))
            .rounded(borders::radius_sm())
            .border_1()
            .border_color(colors::border_version_tag(cx))
            .bg(colors::bg_version_tag(cx))
            .text_xs()
            .text_color(cx.theme().cyan)
            .cursor_pointer()
            .on_click(cx.listener(|this, _: &ClickEvent, _window, _cx| {
                let url = this.controller.links().releases.clone();
                this.open_link(&url);
            }))
            .child(format!("v{}", state.version));

        let details = div()
            .flex()
            .flex_col()
            .justify_center()
            .items_start()
            .min_h(sizing::logo())
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(cx.theme().foreground)
                    .mb(px(5.0))
                    .child(links.app_name.clone()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(self.controller.t("settings.about.description")),
            )
            .child(version_tag)
            .when(show_progress, |el| {
                el.child(
                    div()
                        .w(px(160.0))
                        .h(sizing::progress_bar_height())
                        .mt(spacing::sm())
                        .child(Progress::new().value(percent)),
                )
            });

        let check_label = if state.downloading {
            self.controller.t("settings.about.downloading")
        } else {
            self.controller.t("settings.about.checkUpdate")
        };
        let check_button = Button::new("check-update")
            .small()
            .label(check_label)
            .loading(state.checking)
            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.check_for_update(cx);
            }));

        div()
            .flex()
            .items_center()
            .justify_between()
            .w_full()
            .py(px(5.0))
            .child(div().flex().items_center().gap(spacing::md()).child(logo).child(details))
            .child(check_button)
    }

    fn render_link_row(
        &self,
        id: &'static str,
        key: &str,
        url: String,
        cx: &mut Context<Self>,
    ) -> Div {
        let button = Button::new(id)
            .small()
            .label(self.controller.t(&format!("{key}.button")))
            .on_click(cx.listener(move |this, _: &ClickEvent, _window, _cx| {
                this.open_link(&url);
            }));
        setting_row(&self.controller.t(&format!("{key}.title")), button, cx)
    }
}

impl Render for AboutPanel {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let links = self.controller.links().clone();
        let dialog_layer = Root::render_dialog_layer(window, cx);
        let notification_layer = Root::render_notification_layer(window, cx);

        let header = div()
            .flex()
            .items_center()
            .justify_between()
            .h(sizing::header_height())
            .px(spacing::lg())
            .bg(cx.theme().tab_bar)
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(cx.theme().foreground)
                    .child(self.controller.t("settings.about.title")),
            );

        let branding = self.render_branding(cx);
        let releases =
            self.render_link_row("open-releases", "settings.about.releases", links.releases, cx);
        let website =
            self.render_link_row("open-website", "settings.about.website", links.website, cx);
        let feedback =
            self.render_link_row("open-issues", "settings.about.feedback", links.issues, cx);

        let contact = setting_row(
            &self.controller.t("settings.about.contact.title"),
            Button::new("compose-feedback")
                .small()
                .label(self.controller.t("settings.about.contact.button"))
                .on_click(cx.listener(|this, _: &ClickEvent, _window, _cx| {
                    this.controller.compose_feedback();
                })),
            cx,
        );

        div()
            .flex()
            .flex_col()
            .size_full()
            .relative()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(header)
            .child(
                div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .gap(spacing::md())
                    .p(spacing::lg())
                    .overflow_y_scrollbar()
                    .child(branding)
                    .child(divider(cx))
                    .child(releases)
                    .child(divider(cx))
                    .child(website)
                    .child(divider(cx))
                    .child(feedback)
                    .child(divider(cx))
                    .child(contact)
                    .child(divider(cx)),
            )
            // Overlays queued by push_notification / open_dialog
            .children(dialog_layer)
            .children(notification_layer)
    }
}

// Helper functions for building UI

fn divider(cx: &App) -> Div {
    div().h(px(1.0)).w_full().bg(cx.theme().border)
}

fn setting_row(label: &str, control: impl IntoElement, cx: &App) -> Div {
    div()
        .flex()
        .items_center()
        .justify_between()
        .gap(spacing::md())
        .child(div().text_sm().text_color(cx.theme().secondary_foreground).child(label.to_string()))
        .child(control)
}
