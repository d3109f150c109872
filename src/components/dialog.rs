use gpui::*;
use gpui_component::{ActiveTheme as _, WindowExt as _};
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::dialog::Dialog;

use crate::theme::spacing;

/// Blocking informational dialog with a single acknowledge button.
pub fn open_info_dialog(
    window: &mut Window,
    cx: &mut App,
    title: impl Into<SharedString>,
    message: impl Into<SharedString>,
    ok_label: impl Into<SharedString>,
) {
    let title: SharedString = title.into();
    let message: SharedString = message.into();
    let ok_label: SharedString = ok_label.into();

    window.open_dialog(cx, move |dialog: Dialog, _window: &mut Window, cx: &mut App| {
        let muted = cx.theme().muted_foreground;
        dialog
            .title(title.clone())
            .min_w(px(420.0))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap(spacing::sm())
                    .p(spacing::md())
                    .child(div().text_sm().text_color(muted).child(message.clone())),
            )
            .footer({
                let ok_label = ok_label.clone();
                move |_ok_fn, _cancel_fn, _window, _cx| {
                    vec![
                        Button::new("info-dialog-ok")
                            .primary()
                            .label(ok_label.clone())
                            .on_click(|_: &ClickEvent, window: &mut Window, cx: &mut App| {
                                window.close_dialog(cx);
                            })
                            .into_any_element(),
                    ]
                }
            })
    });
}
