use dioxus::prelude::*;
use modcraft_core::{ItemKind, Msg, ResultView};

use super::constants::*;

fn kind_style(kind: ItemKind) -> (&'static str, &'static str) {
    match kind {
        ItemKind::Block => (ACCENT_BLOCK, "▦"),
        ItemKind::Item => (ACCENT_ITEM, "◆"),
        ItemKind::Entity => (ACCENT_ENTITY, "✹"),
    }
}

#[component]
pub fn ResultCard(result: ResultView, on_msg: EventHandler<Msg>) -> Element {
    rsx! {
        section {
            style: "background-color: {BG_CARD}; border: 2px solid {BORDER_SUCCESS}; border-radius: 12px; padding: 24px; display: flex; flex-direction: column; gap: 24px;",
            div {
                h3 { style: "margin: 0 0 6px 0; font-size: 20px; color: {ACCENT_PRIMARY};", "✔ Done!" }
                p {
                    style: "margin: 0; color: {TEXT_MUTED}; font-size: 14px;",
                    "Your mod \"{result.mod_name}\" has been created"
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px;",
                h4 { style: "margin: 0; font-size: 14px; color: {TEXT_MUTED};", "Added elements:" }
                for (idx, item) in result.items.iter().enumerate() {
                    div {
                        key: "{idx}",
                        style: "display: flex; align-items: flex-start; gap: 12px; padding: 12px; border-radius: 8px; border: 1px solid {BORDER_DEFAULT}; background-color: {BG_BASE};",
                        div {
                            style: "width: 40px; height: 40px; border-radius: 8px; background-color: {BG_ACCENT}; color: {kind_style(item.kind).0}; display: flex; align-items: center; justify-content: center; font-size: 20px;",
                            "{kind_style(item.kind).1}"
                        }
                        div {
                            style: "flex: 1; min-width: 0;",
                            div {
                                style: "display: flex; align-items: center; gap: 8px; margin-bottom: 4px;",
                                p { style: "margin: 0; font-size: 14px; font-weight: 500;", "{item.name}" }
                                span {
                                    style: "font-size: 11px; padding: 2px 8px; border: 1px solid {BORDER_DEFAULT}; border-radius: 999px;",
                                    "{item.kind.badge()}"
                                }
                            }
                            p { style: "margin: 0; font-size: 12px; color: {TEXT_MUTED};", "{item.description}" }
                        }
                    }
                }
            }
            hr { style: "border: none; border-top: 1px solid {BORDER_DEFAULT}; margin: 0;" }
            div {
                style: "display: flex; gap: 12px;",
                button {
                    style: "flex: 1; padding: 14px; border: none; border-radius: 8px; background-color: {ACCENT_PRIMARY}; color: {BG_BASE}; font-size: 16px; font-weight: 600; cursor: pointer;",
                    onclick: move |_| on_msg.call(Msg::DownloadClicked),
                    "⤓ Download .jar file"
                }
                button {
                    style: "padding: 14px 20px; border: 1px solid {BORDER_DEFAULT}; border-radius: 8px; background-color: transparent; color: {TEXT_PRIMARY}; font-size: 16px; cursor: pointer;",
                    onclick: move |_| on_msg.call(Msg::AddComponentClicked),
                    "+ Add new"
                }
            }
        }
    }
}
