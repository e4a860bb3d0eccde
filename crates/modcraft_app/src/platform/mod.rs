pub mod app;
pub mod effects;
pub mod headless;
pub mod settings;
#[cfg(feature = "desktop")]
pub mod ui;

use std::sync::Arc;

use app::AppRuntime;

#[cfg(feature = "desktop")]
pub fn launch_desktop(runtime: Arc<AppRuntime>) -> anyhow::Result<()> {
    ui::launch(runtime);
    Ok(())
}

#[cfg(not(feature = "desktop"))]
pub fn launch_desktop(_runtime: Arc<AppRuntime>) -> anyhow::Result<()> {
    anyhow::bail!(
        "this build has no desktop window; rebuild with `--features desktop` \
         or use `modcraft generate --prompt <TEXT>`"
    )
}
