use dioxus::prelude::*;
use modcraft_core::{DownloadRecord, Section, VersionOptionView};

use super::constants::*;

const CARD_STYLE: &str = "border-radius: 12px; padding: 24px; display: flex; flex-direction: column; gap: 16px;";

#[component]
pub fn DownloadsCard(downloads: Vec<DownloadRecord>) -> Element {
    rsx! {
        section {
            style: "{CARD_STYLE} background-color: {BG_CARD}; border: 1px solid {BORDER_DEFAULT};",
            div {
                h3 { style: "margin: 0 0 6px 0; font-size: 20px;", "⤓ Download history" }
                p { style: "margin: 0; color: {TEXT_MUTED}; font-size: 14px;", "All of your generated mods" }
            }
            if downloads.is_empty() {
                p { style: "margin: 0; padding: 32px 0; text-align: center; color: {TEXT_MUTED};", "No downloads yet" }
            } else {
                for record in downloads.iter() {
                    div {
                        key: "{record.path.display()}",
                        style: "display: flex; justify-content: space-between; gap: 12px; padding: 12px; border-radius: 8px; border: 1px solid {BORDER_DEFAULT}; background-color: {BG_BASE};",
                        div {
                            p { style: "margin: 0; font-size: 14px; font-weight: 500;", "{record.file_name}" }
                            p { style: "margin: 4px 0 0 0; font-size: 12px; color: {TEXT_DIM};", "{record.path.display()}" }
                        }
                        span { style: "font-size: 12px; color: {TEXT_MUTED}; white-space: nowrap;", "{record.saved_at}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn VersionsCard(versions: Vec<VersionOptionView>) -> Element {
    rsx! {
        section {
            style: "{CARD_STYLE} background-color: {BG_CARD}; border: 1px solid {BORDER_DEFAULT};",
            h3 { style: "margin: 0; font-size: 20px;", "▣ Forge versions" }
            for version in versions.iter() {
                div {
                    key: "{version.id}",
                    style: "display: flex; justify-content: space-between; padding: 12px; border-radius: 8px; border: 1px solid {BORDER_DEFAULT};",
                    span { "{version.label}" }
                    span {
                        style: "font-size: 12px; color: {TEXT_MUTED};",
                        if version.selected { "Active" } else if version.available { "Available" } else { "Soon" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PlaceholderCard(section: Section) -> Element {
    rsx! {
        section {
            style: "{CARD_STYLE} background-color: {BG_CARD}; border: 1px solid {BORDER_DEFAULT};",
            h3 { style: "margin: 0; font-size: 20px;", "{section.label()}" }
            p { style: "margin: 0; color: {TEXT_MUTED};", "Nothing here yet" }
        }
    }
}
