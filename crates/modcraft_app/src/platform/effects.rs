use std::sync::mpsc;
use std::thread;

use modcraft_core::{Effect, Msg, SavedArtifact};
use modcraft_engine::{EngineConfig, EngineError, EngineEvent, EngineEvents, EngineHandle, TimerKey};
use modcraft_logging::{mc_debug, mc_info, mc_warn};

/// Executes core effects on the engine and feeds engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::spawn(config)?;
        spawn_event_loop(events, msg_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleStage {
                    run_id,
                    step,
                    delay,
                } => {
                    mc_debug!("ScheduleStage run_id={} step={} delay={:?}", run_id, step, delay);
                    self.engine.schedule(TimerKey::Stage { run_id, step }, delay);
                }
                Effect::ExportArtifact { artifact } => {
                    mc_info!(
                        "ExportArtifact file_name={} content_len={}",
                        artifact.file_name,
                        artifact.content.len()
                    );
                    self.engine.export(artifact.file_name, artifact.content);
                }
                Effect::ExpireNotification { id, after } => {
                    self.engine.schedule(TimerKey::Notification { id }, after);
                }
            }
        }
    }
}

fn spawn_event_loop(events: EngineEvents, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::TimerFired(TimerKey::Stage { run_id, step }) => {
            Msg::StageElapsed { run_id, step }
        }
        EngineEvent::TimerFired(TimerKey::Notification { id }) => Msg::NotificationExpired { id },
        EngineEvent::ExportCompleted {
            requested_name,
            result,
        } => match result {
            Ok(summary) => Msg::ExportFinished {
                file_name: summary.file_name,
                result: Ok(SavedArtifact {
                    path: summary.path,
                    saved_at: summary.saved_at,
                }),
            },
            Err(err) => {
                mc_warn!("Export of {} failed: {}", requested_name, err);
                Msg::ExportFinished {
                    file_name: requested_name,
                    result: Err(err.to_string()),
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use modcraft_engine::ExportSummary;

    use super::*;

    #[test]
    fn timer_events_map_to_messages() {
        assert_eq!(
            map_event(EngineEvent::TimerFired(TimerKey::Stage { run_id: 3, step: 2 })),
            Msg::StageElapsed { run_id: 3, step: 2 }
        );
        assert_eq!(
            map_event(EngineEvent::TimerFired(TimerKey::Notification { id: 5 })),
            Msg::NotificationExpired { id: 5 }
        );
    }

    #[test]
    fn export_uses_the_name_written_to_disk() {
        let msg = map_event(EngineEvent::ExportCompleted {
            requested_name: "a.jar".to_string(),
            result: Ok(ExportSummary {
                file_name: "a (1).jar".to_string(),
                path: PathBuf::from("out/a (1).jar"),
                bytes_written: 10,
                saved_at: "now".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::ExportFinished {
                file_name: "a (1).jar".to_string(),
                result: Ok(SavedArtifact {
                    path: PathBuf::from("out/a (1).jar"),
                    saved_at: "now".to_string(),
                }),
            }
        );
    }
}
