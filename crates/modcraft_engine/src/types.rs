use crate::{ExportError, ExportSummary};

/// Identifies what a scheduled timer is for; echoed back when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    Stage { run_id: u64, step: usize },
    Notification { id: u64 },
}

#[derive(Debug)]
pub enum EngineEvent {
    TimerFired(TimerKey),
    ExportCompleted {
        requested_name: String,
        result: Result<ExportSummary, ExportError>,
    },
}
