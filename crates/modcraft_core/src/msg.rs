#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the mod description.
    PromptChanged(String),
    /// User picked an entry of the Forge version selector.
    VersionSelected(String),
    /// User clicked Generate.
    GenerateClicked,
    /// A scheduled stage delay elapsed.
    StageElapsed { run_id: crate::RunId, step: usize },
    /// User clicked the download button on the result card.
    DownloadClicked,
    /// The engine finished writing an artifact.
    ExportFinished {
        file_name: String,
        result: Result<crate::SavedArtifact, String>,
    },
    /// User clicked "Add new" on the result card.
    AddComponentClicked,
    /// User picked a sidebar entry.
    SectionSelected(crate::Section),
    /// A notification reached the end of its lifetime.
    NotificationExpired { id: crate::NotificationId },
    /// User closed a notification.
    NotificationDismissed { id: crate::NotificationId },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
