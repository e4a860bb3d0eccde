use std::time::Duration;

use crate::{ModArtifact, NotificationId, RunId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Report `Msg::StageElapsed { run_id, step }` once `delay` has passed.
    ScheduleStage {
        run_id: RunId,
        step: usize,
        delay: Duration,
    },
    /// Write the artifact and report `Msg::ExportFinished`.
    ExportArtifact { artifact: ModArtifact },
    /// Report `Msg::NotificationExpired { id }` once `after` has passed.
    ExpireNotification { id: NotificationId, after: Duration },
}
