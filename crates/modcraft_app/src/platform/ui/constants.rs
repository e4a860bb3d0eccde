//! Colors and timings shared by the desktop components.
use std::time::Duration;

pub const BG_BASE: &str = "#0f1115";
pub const BG_SIDEBAR: &str = "#14171d";
pub const BG_CARD: &str = "#191c23";
pub const BG_MUTED: &str = "#20242d";
pub const BG_ACCENT: &str = "#262b36";

pub const BORDER_DEFAULT: &str = "#2a2f3a";
pub const BORDER_SUCCESS: &str = "#166534";

pub const TEXT_PRIMARY: &str = "#f4f4f5";
pub const TEXT_MUTED: &str = "#a1a1aa";
pub const TEXT_DIM: &str = "#71717a";

pub const ACCENT_PRIMARY: &str = "#22c55e";
pub const ACCENT_BLOCK: &str = "#3b82f6";
pub const ACCENT_ITEM: &str = "#a855f7";
pub const ACCENT_ENTITY: &str = "#f97316";
pub const ACCENT_ERROR: &str = "#ef4444";
pub const ACCENT_INFO: &str = "#38bdf8";

pub const WINDOW_TITLE: &str = "ModCraft Generator";
pub const WINDOW_WIDTH: f64 = 1200.0;
pub const WINDOW_HEIGHT: f64 = 820.0;

/// How often queued runtime messages are applied and re-rendered.
pub const RENDER_INTERVAL: Duration = Duration::from_millis(75);
