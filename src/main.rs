//! Main application entry point (form server binary).
//!
//! This is a thin wrapper around the `km_scouts` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger and HTTP client initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use km_scouts::initialization::{init_client, init_logger_with};
use km_scouts::server::{start_server, AppState};
use km_scouts::{BatchSettings, Config, HttpKillboard, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, then from next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let state = AppState::new(
        HttpKillboard::new(client),
        BatchSettings::from(&config),
        config.password.clone(),
    );

    log::info!(
        "Time budget {}s per submission, budget checked {:?}, report failures {:?}",
        config.max_run_time_secs,
        config.budget_check,
        config.report_failure
    );

    if let Err(e) = start_server(&config.bind, state).await {
        eprintln!("km_scouts error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
