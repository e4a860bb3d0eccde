use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use modcraft_core::DEFAULT_FORGE_VERSION;
use modcraft_logging::LogDestination;

use crate::platform::settings::SETTINGS_FILENAME;

#[derive(Parser, Debug)]
#[command(name = "modcraft", version, about = "ModCraft mock Minecraft mod generator")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = SETTINGS_FILENAME,
        help = "Settings file (RON); missing file means defaults"
    )]
    pub config: PathBuf,
    #[arg(long, global = true, help = "Directory receiving downloaded .jar files")]
    pub output_dir: Option<PathBuf>,
    #[arg(long, global = true, value_enum, help = "Where log output goes")]
    pub log: Option<LogTarget>,
    /// Without a subcommand the desktop window is opened.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one generation without a window and save the result.
    Generate {
        #[arg(long, help = "Free-text description of the mod")]
        prompt: String,
        #[arg(long, default_value = DEFAULT_FORGE_VERSION)]
        forge_version: String,
        #[arg(long, default_value_t = false, help = "Skip writing the .jar file")]
        no_download: bool,
        #[arg(long, default_value_t = false, help = "Output machine-readable JSON")]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
