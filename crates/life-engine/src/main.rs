//! Terminal host for the Life simulation.
//!
//! Wires the simulation core to a terminal: loads configuration, builds the
//! controller, drives it from a fixed-rate clock, and renders every change.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `life-config.yaml` (or `$LIFE_CONFIG`)
//! 2. Initialize structured logging (tracing) into the configured log file
//! 3. Build the simulation controller, seeding the initial pattern if any
//! 4. Enter raw mode on the alternate screen
//! 5. Run the host loop until the user quits
//! 6. Restore the terminal and log the session totals

mod error;
mod host;
mod input;
mod render;
mod terminal;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use life_core::config::LoggingConfig;
use life_core::{LifeConfig, SimulationController};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::terminal::TerminalGuard;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "life-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging, or the terminal session fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!(
        width = config.canvas.width,
        height = config.canvas.height,
        cell_size = config.grid.cell_size,
        ticks_per_second = config.clock.ticks_per_second,
        generations_per_second = config.clock.generations_per_second,
        "Configuration loaded"
    );

    // 3. Build the controller.
    let mut controller = SimulationController::new(&config).map_err(EngineError::from)?;

    // 4-5. Run the interactive session. The guard restores the terminal
    // before anything is reported.
    let summary = {
        let _guard = TerminalGuard::enter().map_err(EngineError::from)?;
        let mut stdout = std::io::stdout();
        host::run(&mut controller, config.clock.ticks_per_second, &mut stdout).await?
    };

    // 6. Log results.
    info!(
        pulses = summary.pulses,
        final_generation = summary.final_generation,
        "life-engine shutdown complete"
    );

    Ok(())
}

/// Load configuration from `$LIFE_CONFIG` or `life-config.yaml`.
///
/// A missing file is not an error; defaults are used instead.
fn load_config() -> Result<LifeConfig, EngineError> {
    let config_path = std::env::var_os("LIFE_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if config_path.exists() {
        Ok(LifeConfig::from_file(&config_path)?)
    } else {
        Ok(LifeConfig::parse("")?)
    }
}

/// Install the global `tracing` subscriber, writing to the configured file.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) -> Result<(), EngineError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&logging.file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}
