//! ModCraft engine: timer scheduling and artifact writing for core effects.
mod config;
mod engine;
mod export;
mod persist;
mod types;

pub use config::{EngineConfig, SavedUtcFn};
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use export::{export_artifact, ExportError, ExportSummary};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{EngineEvent, TimerKey};
