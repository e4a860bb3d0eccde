use dioxus::prelude::*;
use modcraft_core::{Msg, Section};

use super::constants::*;

fn glyph(section: Section) -> &'static str {
    match section {
        Section::Generator => "✦",
        Section::Downloads => "⤓",
        Section::Versions => "▣",
        Section::Updates => "↻",
        Section::Profile => "☺",
    }
}

fn nav_style(active: bool) -> String {
    let (background, color, weight) = if active {
        (BG_ACCENT, TEXT_PRIMARY, 600)
    } else {
        ("transparent", TEXT_MUTED, 500)
    };
    format!(
        "display: flex; align-items: center; gap: 12px; width: 100%; padding: 12px 16px; \
         border: none; border-radius: 8px; background-color: {background}; color: {color}; \
         font-weight: {weight}; cursor: pointer; text-align: left;"
    )
}

#[component]
pub fn Sidebar(section: Section, forge_version: String, on_msg: EventHandler<Msg>) -> Element {
    rsx! {
        aside {
            style: "width: 256px; background-color: {BG_SIDEBAR}; border-right: 1px solid {BORDER_DEFAULT}; display: flex; flex-direction: column;",
            div {
                style: "padding: 24px; border-bottom: 1px solid {BORDER_DEFAULT}; display: flex; align-items: center; gap: 12px;",
                div {
                    style: "width: 40px; height: 40px; border-radius: 8px; background-color: {ACCENT_PRIMARY}; display: flex; align-items: center; justify-content: center; font-size: 22px; color: {BG_BASE};",
                    "▦"
                }
                div {
                    h1 { style: "margin: 0; font-size: 18px; font-weight: 700;", "ModCraft" }
                    p { style: "margin: 0; font-size: 12px; color: {TEXT_DIM};", "Generator" }
                }
            }
            nav {
                style: "flex: 1; padding: 16px; display: flex; flex-direction: column; gap: 4px;",
                for entry in Section::ALL {
                    button {
                        key: "{entry.label()}",
                        style: "{nav_style(entry == section)}",
                        onclick: move |_| on_msg.call(Msg::SectionSelected(entry)),
                        span { style: "width: 20px; text-align: center;", "{glyph(entry)}" }
                        span { "{entry.label()}" }
                    }
                }
            }
            div {
                style: "padding: 16px; border-top: 1px solid {BORDER_DEFAULT};",
                div {
                    style: "padding: 16px; border-radius: 8px; background-color: {BG_MUTED}; border: 1px solid {BORDER_DEFAULT};",
                    p { style: "margin: 0 0 8px 0; font-size: 12px; color: {TEXT_MUTED};", "Forge {forge_version}" }
                    span {
                        style: "font-size: 11px; padding: 2px 8px; border: 1px solid {BORDER_DEFAULT}; border-radius: 999px;",
                        "Active"
                    }
                }
            }
        }
    }
}
