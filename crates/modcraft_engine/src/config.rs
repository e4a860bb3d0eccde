use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;

/// Clock used to stamp saved artifacts.
pub type SavedUtcFn = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone)]
pub struct EngineConfig {
    /// Directory receiving exported artifacts.
    pub output_dir: PathBuf,
    pub saved_utc: SavedUtcFn,
}

impl EngineConfig {
    /// Stamps saves with the current UTC time in RFC 3339.
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            saved_utc: Arc::new(|| Utc::now().to_rfc3339()),
        }
    }
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("output_dir", &self.output_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    #[test]
    fn default_clock_is_rfc3339() {
        let config = EngineConfig::default_with_output(PathBuf::from("downloads"));
        let stamp = (config.saved_utc)();
        assert!(
            DateTime::parse_from_rfc3339(&stamp).is_ok(),
            "not RFC 3339: {stamp}"
        );
    }
}
