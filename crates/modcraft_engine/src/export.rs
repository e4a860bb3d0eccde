use std::path::{Path, PathBuf};

use modcraft_logging::{mc_info, mc_warn};

use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Name actually used on disk; differs from the requested one when a
    /// file of that name already existed.
    pub file_name: String,
    pub path: PathBuf,
    pub bytes_written: u64,
    pub saved_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("export task failed: {0}")]
    Task(String),
}

/// Writes one artifact into `output_dir` without replacing existing files.
pub fn export_artifact(
    output_dir: &Path,
    file_name: &str,
    content: &str,
    saved_at: String,
) -> Result<ExportSummary, ExportError> {
    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let path = match writer.write_unique(file_name, content.as_bytes()) {
        Ok(path) => path,
        Err(err) => {
            mc_warn!("Export of {} to {:?} failed: {}", file_name, output_dir, err);
            return Err(err.into());
        }
    };

    let written_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    mc_info!(
        "Exported {} ({} bytes) to {:?}",
        written_name,
        content.len(),
        path
    );

    Ok(ExportSummary {
        file_name: written_name,
        path,
        bytes_written: content.len() as u64,
        saved_at,
    })
}
