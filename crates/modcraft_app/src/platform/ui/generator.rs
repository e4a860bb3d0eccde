use dioxus::prelude::*;
use modcraft_core::{AppViewModel, Msg};

use super::constants::*;

const PROMPT_PLACEHOLDER: &str =
    "For example: add magic blocks, new biomes with dragons and a potion crafting system...";

#[component]
pub fn GeneratorCard(view: AppViewModel, on_msg: EventHandler<Msg>) -> Element {
    let locked = view.generating;
    let status_icon = if locked { "◌" } else { "✔" };
    let status_color = if locked { ACCENT_INFO } else { ACCENT_PRIMARY };
    let button_opacity = if locked { "0.5" } else { "1" };

    rsx! {
        section {
            style: "background-color: {BG_CARD}; border: 2px solid {BORDER_DEFAULT}; border-radius: 12px; padding: 24px; display: flex; flex-direction: column; gap: 24px;",
            div {
                h3 { style: "margin: 0 0 6px 0; font-size: 20px;", "Create a mod" }
                p {
                    style: "margin: 0; color: {TEXT_MUTED}; font-size: 14px;",
                    "Describe the mod you want and pick a Forge version"
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                label { style: "font-size: 14px; font-weight: 500;", "Mod description" }
                textarea {
                    rows: "4",
                    placeholder: PROMPT_PLACEHOLDER,
                    value: "{view.prompt}",
                    disabled: locked,
                    style: "resize: none; padding: 12px; border-radius: 8px; border: 1px solid {BORDER_DEFAULT}; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; font-size: 14px;",
                    oninput: move |e| on_msg.call(Msg::PromptChanged(e.value())),
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                label { style: "font-size: 14px; font-weight: 500;", "Forge version" }
                select {
                    disabled: locked,
                    style: "padding: 10px 12px; border-radius: 8px; border: 1px solid {BORDER_DEFAULT}; background-color: {BG_BASE}; color: {TEXT_PRIMARY};",
                    onchange: move |e| on_msg.call(Msg::VersionSelected(e.value())),
                    for version in view.versions.iter() {
                        option {
                            key: "{version.id}",
                            value: version.id,
                            disabled: !version.available,
                            selected: version.selected,
                            "{version.label}"
                        }
                    }
                }
            }
            if view.show_progress {
                div {
                    style: "padding: 16px; border-radius: 8px; border: 1px solid {BORDER_DEFAULT}; background-color: {BG_MUTED}; display: flex; flex-direction: column; gap: 12px;",
                    div {
                        style: "display: flex; align-items: center; justify-content: space-between;",
                        span {
                            style: "font-size: 14px; font-weight: 500; display: flex; align-items: center; gap: 8px;",
                            span { style: "color: {status_color};", "{status_icon}" }
                            "{view.stage_label}"
                        }
                        span { style: "font-size: 14px; color: {TEXT_MUTED};", "{view.progress_percent}%" }
                    }
                    div {
                        style: "height: 8px; border-radius: 999px; background-color: {BG_ACCENT}; overflow: hidden;",
                        div {
                            style: "height: 100%; width: {view.progress_percent}%; background-color: {ACCENT_PRIMARY}; transition: width 0.3s ease;",
                        }
                    }
                }
            }
            button {
                disabled: locked,
                style: "padding: 14px; border: none; border-radius: 8px; background-color: {ACCENT_PRIMARY}; color: {BG_BASE}; font-size: 16px; font-weight: 600; cursor: pointer; opacity: {button_opacity};",
                onclick: move |_| on_msg.call(Msg::GenerateClicked),
                "✦ Generate mod"
            }
        }
    }
}
