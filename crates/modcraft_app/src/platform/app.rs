use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use modcraft_core::{update, AppState, AppViewModel, Msg};
use modcraft_engine::{EngineConfig, EngineError};
use modcraft_logging::{mc_debug, mc_info};

use super::effects::EffectRunner;
use super::settings::AppSettings;

/// Owns the application state and applies messages to it one at a time.
///
/// Messages arrive from the UI (or headless driver) and from engine events;
/// effects returned by `update` are handed to the engine after the state lock
/// is released.
pub struct AppRuntime {
    state: Mutex<AppState>,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: Mutex<mpsc::Receiver<Msg>>,
    effects: EffectRunner,
}

impl AppRuntime {
    pub fn start(settings: &AppSettings) -> Result<Arc<Self>, EngineError> {
        Self::with_engine_config(EngineConfig::default_with_output(
            settings.output_dir.clone(),
        ))
    }

    pub fn with_engine_config(config: EngineConfig) -> Result<Arc<Self>, EngineError> {
        mc_info!("Starting runtime; output_dir={:?}", config.output_dir);
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let effects = EffectRunner::new(config, msg_tx.clone())?;
        Ok(Arc::new(Self {
            state: Mutex::new(AppState::new()),
            msg_tx,
            msg_rx: Mutex::new(msg_rx),
            effects,
        }))
    }

    /// Queues a message; it is applied on the next `pump` or `wait`.
    pub fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    pub fn view(&self) -> AppViewModel {
        self.lock_state().view()
    }

    /// Applies every queued message. Returns the new view if anything changed.
    pub fn pump(&self) -> Option<AppViewModel> {
        let inbox: Vec<Msg> = match self.msg_rx.lock() {
            Ok(rx) => rx.try_iter().collect(),
            Err(_) => Vec::new(),
        };
        self.dispatch_all(inbox)
    }

    /// Blocks until a message changes the state or `timeout` elapses.
    ///
    /// Messages that leave the state untouched (a download request whose
    /// export is still running, a stale timer) do not end the wait.
    pub fn wait(&self, timeout: Duration) -> Option<AppViewModel> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let inbox: Vec<Msg> = match self.msg_rx.lock() {
                Ok(rx) => match rx.recv_timeout(remaining) {
                    Ok(first) => std::iter::once(first).chain(rx.try_iter()).collect(),
                    Err(_) => return None,
                },
                Err(_) => return None,
            };
            if let Some(view) = self.dispatch_all(inbox) {
                return Some(view);
            }
        }
    }

    fn dispatch_all(&self, inbox: Vec<Msg>) -> Option<AppViewModel> {
        let mut changed = false;
        for msg in inbox {
            changed |= self.dispatch_msg(msg);
        }
        changed.then(|| self.view())
    }

    fn dispatch_msg(&self, msg: Msg) -> bool {
        if !matches!(msg, Msg::Tick | Msg::NoOp) {
            mc_debug!("Dispatch {:?}", msg);
        }
        let (effects, was_dirty) = {
            let mut guard = self.lock_state();
            let state = std::mem::take(&mut *guard);
            let (mut state, effects) = update(state, msg);
            let was_dirty = state.consume_dirty();
            *guard = state;
            (effects, was_dirty)
        };
        self.effects.enqueue(effects);
        was_dirty
    }

    fn lock_state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use modcraft_core::{GenerationStage, Severity};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn pump_applies_queued_messages_once() {
        modcraft_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let runtime =
            AppRuntime::with_engine_config(EngineConfig::default_with_output(temp.path().into()))
                .unwrap();

        runtime.send(Msg::PromptChanged("runtime check".to_string()));
        let view = runtime.pump().expect("prompt change marks dirty");
        assert_eq!(view.prompt, "runtime check");
        assert!(runtime.pump().is_none());
    }

    #[test]
    fn wait_skips_messages_that_change_nothing() {
        modcraft_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let runtime =
            AppRuntime::with_engine_config(EngineConfig::default_with_output(temp.path().into()))
                .unwrap();

        // Nothing to download yet, so the click is a no-op; a later message
        // arriving within the timeout must still be reported.
        runtime.send(Msg::DownloadClicked);
        let sender = runtime.msg_tx.clone();
        let late = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(150));
            let _ = sender.send(Msg::PromptChanged("after the no-op".to_string()));
        });

        let started = Instant::now();
        let view = runtime
            .wait(Duration::from_secs(5))
            .expect("the prompt change arrives before the deadline");
        late.join().unwrap();
        assert_eq!(view.prompt, "after the no-op");
        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[test]
    fn wait_gives_up_at_the_deadline() {
        let temp = TempDir::new().unwrap();
        let runtime =
            AppRuntime::with_engine_config(EngineConfig::default_with_output(temp.path().into()))
                .unwrap();

        runtime.send(Msg::NoOp);
        let started = Instant::now();
        assert!(runtime.wait(Duration::from_millis(200)).is_none());
        assert!(started.elapsed() >= Duration::from_millis(200));
    }

    #[test]
    fn rejected_generate_expires_its_notification() {
        let temp = TempDir::new().unwrap();
        let runtime =
            AppRuntime::with_engine_config(EngineConfig::default_with_output(temp.path().into()))
                .unwrap();

        runtime.send(Msg::GenerateClicked);
        let view = runtime.pump().unwrap();
        assert_eq!(view.stage, GenerationStage::Idle);
        assert_eq!(view.notifications[0].severity, Severity::Error);

        // The expiry timer is four seconds; wait for the engine to report it.
        let mut expired = false;
        for _ in 0..20 {
            if let Some(view) = runtime.wait(Duration::from_millis(500)) {
                if view.notifications.is_empty() {
                    expired = true;
                    break;
                }
            }
        }
        assert!(expired);
    }
}
