mod constants;
mod generator;
mod result;
mod sections;
mod sidebar;
mod toasts;

use std::sync::Arc;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use modcraft_core::{Msg, Section};

use super::app::AppRuntime;
use constants::*;
use generator::GeneratorCard;
use result::ResultCard;
use sections::{DownloadsCard, PlaceholderCard, VersionsCard};
use sidebar::Sidebar;
use toasts::Toasts;

pub fn launch(runtime: Arc<AppRuntime>) {
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_resizable(true),
        )
        .with_menu(None);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(runtime)
        .launch(App);
}

#[component]
fn App() -> Element {
    let runtime = use_context::<Arc<AppRuntime>>();
    let view = use_signal(|| runtime.view());

    // Background tick: apply engine/UI messages and re-render only on change.
    let pump_runtime = runtime.clone();
    use_future(move || {
        let runtime = pump_runtime.clone();
        let mut view = view;
        async move {
            loop {
                tokio::time::sleep(RENDER_INTERVAL).await;
                if let Some(next) = runtime.pump() {
                    view.set(next);
                }
            }
        }
    });

    let on_msg = use_callback(move |msg: Msg| runtime.send(msg));

    let current = view();
    rsx! {
        div {
            style: "display: flex; height: 100vh; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; font-family: 'Inter', 'Segoe UI', sans-serif;",
            Sidebar { section: current.section, forge_version: current.forge_version.clone(), on_msg }
            main {
                style: "flex: 1; overflow: auto;",
                div {
                    style: "max-width: 960px; margin: 0 auto; padding: 32px; display: flex; flex-direction: column; gap: 24px;",
                    div {
                        h2 { style: "margin: 0 0 8px 0; font-size: 32px; font-weight: 700;", "Minecraft Mod Generator" }
                        p { style: "margin: 0; color: {TEXT_MUTED}; font-size: 16px;", "Create your own unique mod with AI" }
                    }
                    GeneratorCard { view: current.clone(), on_msg }
                    if let Some(result) = current.result.clone() {
                        ResultCard { result, on_msg }
                    }
                    {match current.section {
                        Section::Generator => rsx! {},
                        Section::Downloads => rsx! { DownloadsCard { downloads: current.downloads.clone() } },
                        Section::Versions => rsx! { VersionsCard { versions: current.versions.clone() } },
                        other => rsx! { PlaceholderCard { section: other } },
                    }}
                }
            }
            Toasts { notifications: current.notifications.clone(), on_msg }
        }
    }
}
