use std::fs;
use std::sync::Arc;
use std::time::{Duration, Instant};

use modcraft_engine::{EngineConfig, EngineEvent, EngineHandle, TimerKey};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const WAIT: Duration = Duration::from_secs(5);

fn engine_in(dir: &TempDir) -> (EngineHandle, modcraft_engine::EngineEvents) {
    modcraft_logging::initialize_for_tests();
    let mut config = EngineConfig::default_with_output(dir.path().join("downloads"));
    config.saved_utc = Arc::new(|| "2024-01-01T00:00:00Z".to_string());
    EngineHandle::spawn(config).expect("engine starts")
}

#[test]
fn timers_fire_with_their_keys_in_delay_order() {
    let temp = TempDir::new().unwrap();
    let (engine, events) = engine_in(&temp);

    let started = Instant::now();
    engine.schedule(TimerKey::Stage { run_id: 1, step: 0 }, Duration::from_millis(120));
    engine.schedule(TimerKey::Notification { id: 9 }, Duration::from_millis(10));

    let mut fired = Vec::new();
    for _ in 0..2 {
        match events.recv_timeout(WAIT) {
            Some(EngineEvent::TimerFired(key)) => fired.push(key),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    assert_eq!(
        fired,
        vec![
            TimerKey::Notification { id: 9 },
            TimerKey::Stage { run_id: 1, step: 0 },
        ]
    );
    assert!(started.elapsed() >= Duration::from_millis(120));
}

#[test]
fn export_writes_artifact_and_reports_summary() {
    let temp = TempDir::new().unwrap();
    let (engine, events) = engine_in(&temp);

    engine.export("magic-mod.jar", "# magic mod");
    engine.export("magic-mod.jar", "# magic mod again");

    let mut summaries = Vec::new();
    for _ in 0..2 {
        match events.recv_timeout(WAIT) {
            Some(EngineEvent::ExportCompleted {
                requested_name,
                result,
            }) => {
                assert_eq!(requested_name, "magic-mod.jar");
                summaries.push(result.expect("export succeeds"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
    summaries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    assert_eq!(summaries[0].file_name, "magic-mod (1).jar");
    assert_eq!(summaries[1].file_name, "magic-mod.jar");
    for summary in &summaries {
        assert_eq!(summary.saved_at, "2024-01-01T00:00:00Z");
        assert!(summary.path.starts_with(temp.path().join("downloads")));
        let written = fs::read_to_string(&summary.path).unwrap();
        assert_eq!(written.len() as u64, summary.bytes_written);
    }
}

#[test]
fn export_failure_is_reported_not_panicked() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("downloads");
    fs::write(&blocker, "not a directory").unwrap();
    let (engine, events) = engine_in(&temp);

    engine.export("mod.jar", "content");

    match events.recv_timeout(WAIT) {
        Some(EngineEvent::ExportCompleted { result, .. }) => {
            let err = result.expect_err("output dir is a file");
            assert!(err.to_string().contains("not a directory"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
