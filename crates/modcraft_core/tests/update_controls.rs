use std::path::PathBuf;

use modcraft_core::{
    update, AppState, Effect, Msg, SavedArtifact, Section, Severity, DEFAULT_FORGE_VERSION,
};
use pretty_assertions::assert_eq;

fn finished_run(prompt: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::PromptChanged(prompt.to_string()));
    let (mut state, mut effects) = update(state, Msg::GenerateClicked);
    loop {
        let next = effects.iter().find_map(|effect| match effect {
            Effect::ScheduleStage { run_id, step, .. } => Some((*run_id, *step)),
            _ => None,
        });
        let Some((run_id, step)) = next else {
            return state;
        };
        (state, effects) = update(state, Msg::StageElapsed { run_id, step });
    }
}

#[test]
fn only_available_versions_can_be_selected() {
    let state = AppState::new();
    assert_eq!(state.forge_version(), DEFAULT_FORGE_VERSION);

    let (mut state, effects) = update(state, Msg::VersionSelected("1.19.4".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.forge_version(), "1.20.1");
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::VersionSelected("0.0.1".to_string()));
    assert_eq!(state.forge_version(), "1.20.1");
    assert!(!state.consume_dirty());

    let view = state.view();
    let selected: Vec<_> = view.versions.iter().filter(|v| v.selected).map(|v| v.id).collect();
    assert_eq!(selected, vec!["1.20.1"]);
    assert_eq!(view.versions[2].label, "Forge 1.18.2 (coming soon)");
    assert!(!view.versions[2].available);
}

#[test]
fn inputs_are_locked_while_generating() {
    let (state, _) = update(AppState::new(), Msg::PromptChanged("locked prompt".to_string()));
    let (state, _) = update(state, Msg::GenerateClicked);
    assert!(state.view().generating);

    let (state, _) = update(state, Msg::PromptChanged("changed".to_string()));
    assert_eq!(state.prompt(), "locked prompt");
}

#[test]
fn download_is_only_offered_after_a_finished_run() {
    let (state, effects) = update(AppState::new(), Msg::DownloadClicked);
    assert!(effects.is_empty());
    assert!(state.artifact().is_none());

    let state = finished_run("Add magic blocks and dragons");
    let (_state, effects) = update(state, Msg::DownloadClicked);
    let [Effect::ExportArtifact { artifact }] = effects.as_slice() else {
        panic!("expected a single export effect, got {effects:?}");
    };
    assert_eq!(artifact.file_name, "add-magic-blocks.jar");
    assert!(artifact.content.starts_with("# Add magic blocks\n"));
    assert!(artifact.content.contains("Generated for Forge 1.20.1"));
}

#[test]
fn finished_export_is_recorded_in_downloads() {
    let state = finished_run("shiny ores");
    let (state, effects) = update(
        state,
        Msg::ExportFinished {
            file_name: "shiny-ores.jar".to_string(),
            result: Ok(SavedArtifact {
                path: PathBuf::from("/tmp/out/shiny-ores.jar"),
                saved_at: "2024-01-01T00:00:00Z".to_string(),
            }),
        },
    );

    let view = state.view();
    assert_eq!(view.downloads.len(), 1);
    assert_eq!(view.downloads[0].file_name, "shiny-ores.jar");
    assert_eq!(view.downloads[0].path, PathBuf::from("/tmp/out/shiny-ores.jar"));
    let toast = view.notifications.last().unwrap();
    assert_eq!(toast.severity, Severity::Success);
    assert_eq!(toast.text, "Mod downloaded!");
    assert_eq!(effects.len(), 1);
}

#[test]
fn failed_export_surfaces_an_error() {
    let state = finished_run("shiny ores");
    let (state, _) = update(
        state,
        Msg::ExportFinished {
            file_name: "shiny-ores.jar".to_string(),
            result: Err("disk full".to_string()),
        },
    );

    let view = state.view();
    assert!(view.downloads.is_empty());
    let toast = view.notifications.last().unwrap();
    assert_eq!(toast.severity, Severity::Error);
    assert_eq!(toast.text, "Could not save shiny-ores.jar: disk full");
}

#[test]
fn add_component_only_notifies() {
    let state = finished_run("anything");
    let before = state.view();

    let (state, effects) = update(state, Msg::AddComponentClicked);
    let after = state.view();

    assert_eq!(after.items, before.items);
    assert_eq!(after.stage, before.stage);
    assert_eq!(after.notifications.len(), before.notifications.len() + 1);
    let toast = after.notifications.last().unwrap();
    assert_eq!(toast.severity, Severity::Info);
    assert_eq!(toast.text, "A form for adding new components will open");
    assert!(matches!(
        effects.as_slice(),
        [Effect::ExpireNotification { id, .. }] if *id == toast.id
    ));
}

#[test]
fn notifications_expire_or_can_be_dismissed() {
    let (state, _) = update(AppState::new(), Msg::AddComponentClicked);
    let (state, _) = update(state, Msg::AddComponentClicked);
    let ids: Vec<_> = state.view().notifications.iter().map(|n| n.id).collect();
    assert_eq!(ids.len(), 2);

    let (state, _) = update(state, Msg::NotificationExpired { id: ids[0] });
    let (mut state, _) = update(state, Msg::NotificationDismissed { id: ids[1] });
    assert!(state.view().notifications.is_empty());
    assert!(state.consume_dirty());

    // Expiring an already dismissed notification changes nothing.
    let (mut state, effects) = update(state, Msg::NotificationExpired { id: ids[1] });
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn result_card_is_only_shown_on_the_generator_section() {
    let state = finished_run("section test");
    assert!(state.view().result.is_some());

    let (state, _) = update(state, Msg::SectionSelected(Section::Downloads));
    let view = state.view();
    assert_eq!(view.section, Section::Downloads);
    assert!(view.result.is_none());
    assert!(state.artifact().is_some());

    let (state, _) = update(state, Msg::SectionSelected(Section::Generator));
    assert!(state.view().result.is_some());
}
