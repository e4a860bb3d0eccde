//! Drives one generation from the command line, using the same runtime and
//! timers as the window.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use modcraft_core::{find_version, AppViewModel, GenerationStage, Msg, NotificationId, Severity};
use modcraft_logging::{mc_info, mc_warn};
use serde::Serialize;
use thiserror::Error;

use super::app::AppRuntime;

/// Longest quiet period tolerated between two runtime updates.
const STALL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
    pub forge_version: String,
    pub download: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeadlessError {
    #[error("unknown Forge version {0}")]
    UnknownVersion(String),
    #[error("Forge {0} is not available yet")]
    VersionUnavailable(String),
    #[error("{0}")]
    Rejected(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("no progress for {0:?}")]
    Stalled(Duration),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportItem {
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunReport {
    pub mod_name: String,
    pub forge_version: String,
    pub stages: Vec<&'static str>,
    pub progress_percent: u8,
    pub items: Vec<ReportItem>,
    pub artifact: Option<PathBuf>,
}

/// Line-oriented progress output; `quiet` suppresses it for `--json`.
struct Console {
    quiet: bool,
    seen_notifications: HashSet<NotificationId>,
}

impl Console {
    fn show(&mut self, view: &AppViewModel) {
        for notification in &view.notifications {
            if !self.seen_notifications.insert(notification.id) {
                continue;
            }
            let tag = match notification.severity {
                Severity::Info => "info",
                Severity::Success => "ok",
                Severity::Error => "error",
            };
            mc_info!("Notification [{}] {}", tag, notification.text);
            if !self.quiet {
                println!("[{tag}] {}", notification.text);
            }
        }
    }
}

pub fn run_generate(
    runtime: &AppRuntime,
    request: &GenerateRequest,
    quiet: bool,
) -> Result<RunReport, HeadlessError> {
    let version = find_version(&request.forge_version)
        .ok_or_else(|| HeadlessError::UnknownVersion(request.forge_version.clone()))?;
    if !version.available {
        return Err(HeadlessError::VersionUnavailable(version.id.to_string()));
    }

    let mut console = Console {
        quiet,
        seen_notifications: HashSet::new(),
    };

    runtime.send(Msg::VersionSelected(version.id.to_string()));
    runtime.send(Msg::PromptChanged(request.prompt.clone()));
    runtime.send(Msg::GenerateClicked);
    let mut view = runtime.pump().unwrap_or_else(|| runtime.view());
    console.show(&view);

    if !view.generating {
        let reason = view
            .notifications
            .iter()
            .rev()
            .find(|n| n.severity == Severity::Error)
            .map(|n| n.text.clone())
            .unwrap_or_else(|| "generation did not start".to_string());
        return Err(HeadlessError::Rejected(reason));
    }

    let mut stages = vec![view.stage.slug()];
    report_stage(&view, quiet);
    while view.generating {
        view = wait_for_change(runtime)?;
        console.show(&view);
        if stages.last() != Some(&view.stage.slug()) {
            stages.push(view.stage.slug());
            report_stage(&view, quiet);
        }
    }
    report_stage(&view, quiet);

    let artifact = if request.download {
        Some(download(runtime, &mut console, view.downloads.len())?)
    } else {
        None
    };

    let view = runtime.view();
    Ok(RunReport {
        mod_name: view.mod_name.clone(),
        forge_version: view.forge_version.clone(),
        stages,
        progress_percent: view.progress_percent,
        items: view
            .items
            .iter()
            .map(|item| ReportItem {
                kind: item.kind.as_str(),
                name: item.name,
                description: item.description,
            })
            .collect(),
        artifact,
    })
}

fn download(
    runtime: &AppRuntime,
    console: &mut Console,
    downloads_before: usize,
) -> Result<PathBuf, HeadlessError> {
    let errors_before: HashSet<NotificationId> = runtime
        .view()
        .notifications
        .iter()
        .filter(|n| n.severity == Severity::Error)
        .map(|n| n.id)
        .collect();

    runtime.send(Msg::DownloadClicked);
    loop {
        let view = wait_for_change(runtime)?;
        console.show(&view);
        if let Some(record) = view.downloads.get(downloads_before) {
            mc_info!("Saved {} at {}", record.file_name, record.saved_at);
            return Ok(record.path.clone());
        }
        let failure = view
            .notifications
            .iter()
            .find(|n| n.severity == Severity::Error && !errors_before.contains(&n.id));
        if let Some(failure) = failure {
            mc_warn!("Download failed: {}", failure.text);
            return Err(HeadlessError::DownloadFailed(failure.text.clone()));
        }
    }
}

fn wait_for_change(runtime: &AppRuntime) -> Result<AppViewModel, HeadlessError> {
    runtime
        .wait(STALL_TIMEOUT)
        .ok_or(HeadlessError::Stalled(STALL_TIMEOUT))
}

fn report_stage(view: &AppViewModel, quiet: bool) {
    let marker = if view.stage == GenerationStage::Done && !view.generating {
        "done"
    } else {
        "...."
    };
    mc_info!(
        "Stage {} ({}%)",
        view.stage.slug(),
        view.progress_percent
    );
    if !quiet {
        println!("[{marker}] {:>3}% {}", view.progress_percent, view.stage_label);
    }
}

/// Human-readable summary printed after a successful run.
pub fn print_summary(report: &RunReport) {
    println!();
    println!("Mod \"{}\" for Forge {}", report.mod_name, report.forge_version);
    for item in &report.items {
        println!("  - {} ({}): {}", item.name, item.kind, item.description);
    }
    if let Some(path) = &report.artifact {
        println!("Saved to {}", path.display());
    }
}
