//! # Atrox Motion Binary
//!
//! Reads commands from stdin and drives the six platform axes.
//!
//! # Usage
//!
//! ```bash
//! # Built-in motor table, simulation driver
//! atrox
//!
//! # Explicit platform file
//! atrox --config config/platform.toml
//!
//! # Verbose JSON logs
//! atrox -v --json
//! ```

#![deny(warnings)]

use std::io;
use std::path::PathBuf;

use atrox_common::config::{ConfigLoader, LogLevel, PlatformConfig};
use atrox_common::consts::DEFAULT_CONFIG_PATH;
use atrox_motion::{AxisRegistry, CommandInterpreter, Console, DriverRegistry, MotionController};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Atrox motion platform command interpreter
#[derive(Parser, Debug)]
#[command(name = "atrox")]
#[command(version)]
#[command(about = "Command interpreter and axis motion engine for the Atrox platform")]
#[command(long_about = None)]
struct Args {
    /// Path to platform configuration (platform.toml).
    /// Falls back to /etc/atrox/platform.toml, then the built-in motor table.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stepper driver backend, overrides the config file
    #[arg(short, long)]
    driver: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("Atrox startup failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Install logging before the config result is inspected so load errors are reported.
    let loaded = load_config(&args);
    let log_level = loaded
        .as_ref()
        .map(|(config, _)| config.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, log_level);
    let (config, source) = loaded?;

    info!("Atrox v{} starting...", env!("CARGO_PKG_VERSION"));
    info!("Platform configuration: {}", source);

    let driver_name = args.driver.as_deref().unwrap_or(&config.driver);
    let drivers = DriverRegistry::with_builtin_drivers();
    let factory = drivers.factory(driver_name).inspect_err(|_| {
        error!("Available drivers: {}", drivers.list_drivers().join(", "));
    })?;
    info!("Using '{}' stepper driver", driver_name);

    let table = config.motor_table()?;
    let registry = AxisRegistry::from_table(&table, |axis| factory(axis, config.pins_for(axis)))?;

    let interpreter = CommandInterpreter::new(MotionController::new(registry));
    let mut console = Console::new(interpreter);

    info!("Ready for commands");
    console.run(io::stdin().lock(), io::stdout().lock())?;

    info!("Input closed, shutting down");
    Ok(())
}

/// Resolve the platform configuration: `--config`, the system path, or defaults.
fn load_config(args: &Args) -> Result<(PlatformConfig, String), Box<dyn std::error::Error>> {
    let (config, source) = match &args.config {
        Some(path) => (PlatformConfig::load(path)?, path.display().to_string()),
        None => {
            let system = PathBuf::from(DEFAULT_CONFIG_PATH);
            if system.exists() {
                (PlatformConfig::load(&system)?, system.display().to_string())
            } else {
                (PlatformConfig::default(), "built-in defaults".to_string())
            }
        }
    };
    config.validate()?;
    Ok((config, source))
}

/// Setup tracing subscriber based on CLI arguments and the configured level.
fn setup_tracing(args: &Args, log_level: LogLevel) {
    let level = if args.verbose {
        LogLevel::Debug.as_str()
    } else {
        log_level.as_str()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Replies go to stdout; logs must not interleave with them.
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}
