use crate::{
    derive_mod_name, find_version, AppState, DownloadRecord, Effect, Msg, RunId, Severity,
    NOTIFICATION_LIFETIME, PLACEHOLDER_ITEMS,
};

const EMPTY_PROMPT_TEXT: &str = "Enter a mod description";
const GENERATED_TEXT: &str = "Mod generated successfully!";
const DOWNLOADED_TEXT: &str = "Mod downloaded!";
const ADD_COMPONENT_TEXT: &str = "A form for adding new components will open";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PromptChanged(text) => {
            if !state.is_generating() {
                state.set_prompt(text);
            }
            Vec::new()
        }
        Msg::VersionSelected(version) => {
            let selectable = find_version(&version).filter(|v| v.available);
            if let (Some(version), false) = (selectable, state.is_generating()) {
                state.set_forge_version(version.id);
            }
            Vec::new()
        }
        Msg::GenerateClicked => start_run(&mut state),
        Msg::StageElapsed { run_id, step } => advance_run(&mut state, run_id, step),
        Msg::DownloadClicked => match state.artifact() {
            Some(artifact) => vec![Effect::ExportArtifact { artifact }],
            None => Vec::new(),
        },
        Msg::ExportFinished { file_name, result } => match result {
            Ok(saved) => {
                state.record_download(DownloadRecord {
                    file_name,
                    path: saved.path,
                    saved_at: saved.saved_at,
                });
                notify(&mut state, Severity::Success, DOWNLOADED_TEXT)
            }
            Err(reason) => notify(
                &mut state,
                Severity::Error,
                format!("Could not save {file_name}: {reason}"),
            ),
        },
        Msg::AddComponentClicked => notify(&mut state, Severity::Info, ADD_COMPONENT_TEXT),
        Msg::SectionSelected(section) => {
            state.set_section(section);
            Vec::new()
        }
        Msg::NotificationExpired { id } | Msg::NotificationDismissed { id } => {
            state.remove_notification(id);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_run(state: &mut AppState) -> Vec<Effect> {
    // A second click while a run is in flight must not start a parallel timeline.
    if state.is_generating() {
        return Vec::new();
    }
    if state.prompt().trim().is_empty() {
        return notify(state, Severity::Error, EMPTY_PROMPT_TEXT);
    }

    let mod_name = derive_mod_name(state.prompt());
    let run_id = state.begin_run(mod_name);
    enter_step(state, run_id, 0)
}

fn advance_run(state: &mut AppState, run_id: RunId, step: usize) -> Vec<Effect> {
    if state.pending_step(run_id) != Some(step) {
        return Vec::new();
    }

    if let Some(item) = PLACEHOLDER_ITEMS.get(step) {
        state.reveal_item(*item);
    }

    let effects = enter_step(state, run_id, step + 1);
    if !effects.is_empty() {
        return effects;
    }

    state.finish_run();
    notify(state, Severity::Success, GENERATED_TEXT)
}

fn enter_step(state: &mut AppState, run_id: RunId, step: usize) -> Vec<Effect> {
    match state.enter_step(step) {
        Some(definition) => vec![Effect::ScheduleStage {
            run_id,
            step,
            delay: definition.delay,
        }],
        None => Vec::new(),
    }
}

fn notify(state: &mut AppState, severity: Severity, text: impl Into<String>) -> Vec<Effect> {
    let id = state.push_notification(severity, text);
    vec![Effect::ExpireNotification {
        id,
        after: NOTIFICATION_LIFETIME,
    }]
}
