//! ModCraft: a mock Minecraft mod generator.
mod cli;
mod platform;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use modcraft_logging::{mc_info, mc_warn};

use cli::{Cli, Commands};
use platform::app::AppRuntime;
use platform::headless::{self, GenerateRequest};
use platform::settings::{load_settings, AppSettings};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = load_settings(&cli.config);
    let settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        Ok(None) | Err(_) => AppSettings::default(),
    }
    .with_overrides(&cli);

    modcraft_logging::initialize(settings.log, LevelFilter::Info, &settings.log_file);
    match &loaded {
        Ok(Some(_)) => mc_info!("Loaded settings from {:?}", cli.config),
        Ok(None) => mc_info!("No settings file at {:?}; using defaults", cli.config),
        Err(err) => mc_warn!("{}; using defaults", err),
    }

    let runtime = AppRuntime::start(&settings).context("failed to start the engine")?;

    match cli.command {
        Some(Commands::Generate {
            prompt,
            forge_version,
            no_download,
            json,
        }) => {
            let request = GenerateRequest {
                prompt,
                forge_version,
                download: !no_download,
            };
            let report = headless::run_generate(&runtime, &request, json)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                headless::print_summary(&report);
            }
            Ok(())
        }
        None => platform::launch_desktop(runtime),
    }
}
