//! ModCraft core: pure generation state machine and view-model helpers.
mod artifact;
mod catalog;
mod effect;
mod msg;
mod notification;
mod state;
mod update;
mod view_model;

pub use artifact::{artifact_file_name, derive_mod_name, render_artifact, ModArtifact};
pub use catalog::{
    find_version, ForgeVersion, ItemKind, ModItem, Section, StageStep, DEFAULT_FORGE_VERSION,
    FINAL_STAGE_DELAY, FORGE_VERSIONS, ITEM_STAGE_DELAY, PLACEHOLDER_ITEMS, STAGE_STEPS,
};
pub use effect::Effect;
pub use msg::Msg;
pub use notification::{Notification, NotificationId, Severity, NOTIFICATION_LIFETIME};
pub use state::{AppState, DownloadRecord, GenerationStage, RunId, SavedArtifact};
pub use update::update;
pub use view_model::{AppViewModel, ResultView, VersionOptionView};
