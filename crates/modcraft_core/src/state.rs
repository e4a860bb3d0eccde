use std::path::PathBuf;

use crate::view_model::{AppViewModel, ResultView, VersionOptionView};
use crate::{
    ModArtifact, ModItem, Notification, NotificationId, Section, Severity, StageStep,
    DEFAULT_FORGE_VERSION, FORGE_VERSIONS, STAGE_STEPS,
};

pub type RunId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenerationStage {
    #[default]
    Idle,
    TexturesBlocks,
    TexturesItems,
    TexturesEntities,
    Scripts,
    Done,
}

impl GenerationStage {
    pub fn label(self) -> &'static str {
        match self {
            GenerationStage::Idle => "Ready to generate",
            GenerationStage::TexturesBlocks => "Generating block textures",
            GenerationStage::TexturesItems => "Generating item textures",
            GenerationStage::TexturesEntities => "Generating entity textures",
            GenerationStage::Scripts => "Creating scripts",
            GenerationStage::Done => "Done",
        }
    }

    /// Stable kebab-case identifier, used in logs and reports.
    pub fn slug(self) -> &'static str {
        match self {
            GenerationStage::Idle => "idle",
            GenerationStage::TexturesBlocks => "textures-blocks",
            GenerationStage::TexturesItems => "textures-items",
            GenerationStage::TexturesEntities => "textures-entities",
            GenerationStage::Scripts => "scripts",
            GenerationStage::Done => "done",
        }
    }
}

/// Where and when the engine stored an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtifact {
    pub path: PathBuf,
    pub saved_at: String,
}

/// One entry of the session's download history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRecord {
    pub file_name: String,
    pub path: PathBuf,
    pub saved_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveRun {
    run_id: RunId,
    step: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    section: Section,
    prompt: String,
    forge_version: String,
    stage: GenerationStage,
    progress: u8,
    mod_name: String,
    items: Vec<ModItem>,
    active_run: Option<ActiveRun>,
    last_run_id: RunId,
    notifications: Vec<Notification>,
    last_notification_id: NotificationId,
    downloads: Vec<DownloadRecord>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            section: Section::default(),
            prompt: String::new(),
            forge_version: DEFAULT_FORGE_VERSION.to_string(),
            stage: GenerationStage::Idle,
            progress: 0,
            mod_name: String::new(),
            items: Vec::new(),
            active_run: None,
            last_run_id: 0,
            notifications: Vec::new(),
            last_notification_id: 0,
            downloads: Vec::new(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let result = if self.section == Section::Generator && self.result_ready() {
            Some(ResultView {
                mod_name: self.mod_name.clone(),
                items: self.items.clone(),
            })
        } else {
            None
        };

        AppViewModel {
            section: self.section,
            prompt: self.prompt.clone(),
            forge_version: self.forge_version.clone(),
            versions: FORGE_VERSIONS
                .iter()
                .map(|version| VersionOptionView {
                    id: version.id,
                    label: version.label(),
                    available: version.available,
                    selected: version.id == self.forge_version,
                })
                .collect(),
            stage: self.stage,
            stage_label: self.stage.label(),
            progress_percent: self.progress,
            show_progress: self.stage != GenerationStage::Idle,
            generating: self.is_generating(),
            mod_name: self.mod_name.clone(),
            items: self.items.clone(),
            result,
            downloads: self.downloads.clone(),
            notifications: self.notifications.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// True from a successful Generate until the final timer elapses.
    pub fn is_generating(&self) -> bool {
        self.active_run.is_some()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn forge_version(&self) -> &str {
        &self.forge_version
    }

    /// The artifact of the last finished run, if it produced any records.
    pub fn artifact(&self) -> Option<ModArtifact> {
        self.result_ready()
            .then(|| ModArtifact::build(&self.mod_name, &self.forge_version, &self.items))
    }

    fn result_ready(&self) -> bool {
        !self.is_generating() && self.stage == GenerationStage::Done && !self.items.is_empty()
    }

    pub(crate) fn set_prompt(&mut self, prompt: String) {
        if self.prompt != prompt {
            self.prompt = prompt;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_forge_version(&mut self, version: &str) {
        if self.forge_version != version {
            self.forge_version = version.to_string();
            self.mark_dirty();
        }
    }

    pub(crate) fn set_section(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.mark_dirty();
        }
    }

    /// Starts a new run and returns its id. Revealed records are cleared.
    pub(crate) fn begin_run(&mut self, mod_name: String) -> RunId {
        self.last_run_id += 1;
        let run_id = self.last_run_id;
        self.active_run = Some(ActiveRun { run_id, step: 0 });
        self.mod_name = mod_name;
        self.items.clear();
        self.mark_dirty();
        run_id
    }

    /// The step a timer for `run_id` is currently expected to complete.
    pub(crate) fn pending_step(&self, run_id: RunId) -> Option<usize> {
        self.active_run
            .filter(|active| active.run_id == run_id)
            .map(|active| active.step)
    }

    /// Moves the active run to `step` and returns the step definition.
    pub(crate) fn enter_step(&mut self, step: usize) -> Option<StageStep> {
        let definition = STAGE_STEPS.get(step).copied()?;
        let active = self.active_run.as_mut()?;
        active.step = step;
        self.stage = definition.stage;
        self.progress = (step * 100 / STAGE_STEPS.len()) as u8;
        self.mark_dirty();
        Some(definition)
    }

    pub(crate) fn reveal_item(&mut self, item: ModItem) {
        self.items.push(item);
        self.mark_dirty();
    }

    pub(crate) fn finish_run(&mut self) {
        self.active_run = None;
        self.progress = 100;
        self.mark_dirty();
    }

    pub(crate) fn push_notification(
        &mut self,
        severity: Severity,
        text: impl Into<String>,
    ) -> NotificationId {
        self.last_notification_id += 1;
        let id = self.last_notification_id;
        self.notifications.push(Notification {
            id,
            severity,
            text: text.into(),
        });
        self.mark_dirty();
        id
    }

    pub(crate) fn remove_notification(&mut self, id: NotificationId) {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() != before {
            self.mark_dirty();
        }
    }

    pub(crate) fn record_download(&mut self, record: DownloadRecord) {
        self.downloads.push(record);
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
