use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use modcraft_logging::{mc_debug, mc_error};

use crate::export::{export_artifact, ExportError};
use crate::{EngineConfig, EngineEvent, TimerKey};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Schedule { key: TimerKey, delay: Duration },
    Export { file_name: String, content: String },
}

/// Cheap, cloneable handle for submitting work to the engine thread.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving end of the engine's event stream.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Starts the engine thread. Events are delivered through the returned
    /// [`EngineEvents`]; the thread exits once every handle is dropped.
    pub fn spawn(config: EngineConfig) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("modcraft-engine")
            .enable_time()
            .build()?;
        let config = Arc::new(config);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let config = config.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&config, command, event_tx).await;
                });
            }
            mc_debug!("Engine command channel closed; shutting down");
        });

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    /// Emits `EngineEvent::TimerFired(key)` once `delay` has elapsed.
    pub fn schedule(&self, key: TimerKey, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::Schedule { key, delay });
    }

    /// Writes `content` into the output directory and emits
    /// `EngineEvent::ExportCompleted`.
    pub fn export(&self, file_name: impl Into<String>, content: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Export {
            file_name: file_name.into(),
            content: content.into(),
        });
    }
}

impl EngineEvents {
    /// Blocks until the next event; `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    config: &EngineConfig,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Schedule { key, delay } => {
            tokio::time::sleep(delay).await;
            mc_debug!("Timer fired: {:?} after {:?}", key, delay);
            let _ = event_tx.send(EngineEvent::TimerFired(key));
        }
        EngineCommand::Export { file_name, content } => {
            let output_dir = config.output_dir.clone();
            let saved_at = (config.saved_utc)();
            let requested_name = file_name.clone();
            let result = tokio::task::spawn_blocking(move || {
                export_artifact(&output_dir, &file_name, &content, saved_at)
            })
            .await
            .unwrap_or_else(|join_err| {
                mc_error!("Export task for {} panicked: {}", requested_name, join_err);
                Err(ExportError::Task(join_err.to_string()))
            });
            let _ = event_tx.send(EngineEvent::ExportCompleted {
                requested_name,
                result,
            });
        }
    }
}
