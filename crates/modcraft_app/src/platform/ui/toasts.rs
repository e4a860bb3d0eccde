use dioxus::prelude::*;
use modcraft_core::{Msg, Notification, Severity};

use super::constants::*;

fn accent(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => ACCENT_INFO,
        Severity::Success => ACCENT_PRIMARY,
        Severity::Error => ACCENT_ERROR,
    }
}

/// Bottom-right stack of transient notifications.
#[component]
pub fn Toasts(notifications: Vec<Notification>, on_msg: EventHandler<Msg>) -> Element {
    rsx! {
        div {
            style: "position: fixed; right: 24px; bottom: 24px; display: flex; flex-direction: column; gap: 8px; z-index: 1000;",
            for notification in notifications.iter() {
                div {
                    key: "{notification.id}",
                    style: "min-width: 280px; max-width: 360px; display: flex; align-items: center; justify-content: space-between; gap: 12px; padding: 12px 16px; border-radius: 8px; background-color: {BG_CARD}; border: 1px solid {BORDER_DEFAULT}; border-left: 4px solid {accent(notification.severity)}; box-shadow: 0 10px 25px rgba(0,0,0,0.4); font-size: 14px;",
                    span { "{notification.text}" }
                    button {
                        style: "border: none; background: transparent; color: {TEXT_DIM}; cursor: pointer; font-size: 14px;",
                        onclick: {
                            let id = notification.id;
                            move |_| on_msg.call(Msg::NotificationDismissed { id })
                        },
                        "✕"
                    }
                }
            }
        }
    }
}
