use crate::{DownloadRecord, GenerationStage, ModItem, Notification, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOptionView {
    pub id: &'static str,
    pub label: String,
    pub available: bool,
    pub selected: bool,
}

/// Content of the result card, present only on the Generator section once a
/// run has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub mod_name: String,
    pub items: Vec<ModItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub section: Section,
    pub prompt: String,
    pub forge_version: String,
    pub versions: Vec<VersionOptionView>,
    pub stage: GenerationStage,
    pub stage_label: &'static str,
    pub progress_percent: u8,
    pub show_progress: bool,
    /// Generate, the prompt and the version selector are disabled while set.
    pub generating: bool,
    pub mod_name: String,
    /// Records revealed so far in the current or last run.
    pub items: Vec<ModItem>,
    pub result: Option<ResultView>,
    pub downloads: Vec<DownloadRecord>,
    pub notifications: Vec<Notification>,
    pub dirty: bool,
}
