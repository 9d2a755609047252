//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load TOML configuration files
//! and the platform configuration consumed once at startup.
//!
//! # Usage
//!
//! ```rust,no_run
//! use atrox_common::config::{ConfigLoader, ConfigError, PlatformConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = PlatformConfig::load(Path::new("platform.toml"))?;
//!     config.validate()?;
//!     let table = config.motor_table()?;
//!     println!("{} axes, driver {}", table.len(), config.driver);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::axis::{AxisConfig, AxisId, MotorRow, MotorTable, StepperPins};
use crate::consts::{AXIS_COUNT, DEFAULT_DRIVER};

/// Error type for configuration loading operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, per-step tracing information.
    Trace,
    /// Command acceptance and move boundaries.
    Debug,
    /// Configuration, engage/release and executed commands.
    #[default]
    Info,
    /// Rejected commands, clamped speeds, unsupported paths.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Common configuration fields.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "atrox-bench-01"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Instance identifier.
    pub service_name: String,
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            service_name: "atrox".to_string(),
        }
    }
}

/// Trait for loading configuration from TOML files.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation for all types that implement DeserializeOwned.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

fn default_driver() -> String {
    DEFAULT_DRIVER.to_string()
}

/// Pin override for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinAssignment {
    pub axis: AxisId,
    pub step: u8,
    pub dir: u8,
    #[serde(default = "default_enable_pin")]
    pub enable: u8,
}

fn default_enable_pin() -> u8 {
    crate::consts::DEFAULT_ENABLE_PIN
}

/// Platform configuration loaded from `platform.toml`.
///
/// # TOML Example
///
/// ```toml
/// driver = "simulation"
/// motors = [
///     [200, 16, 1, 1, 1000, 500],  # X
///     [200, 16, 1, 1, 1000, 500],  # Y
///     [200, 16, 1, 1, 1000, 500],  # Z
///     [200, 16, 1, 1, 1000, 500],  # W
///     [200, 16, 5, 1,  800, 200],  # P
///     [200, 16, 1, 1, 1000, 500],  # R
/// ]
///
/// [shared]
/// service_name = "atrox"
///
/// [[pins]]
/// axis = "P"
/// step = 3
/// dir = 6
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub shared: SharedConfig,

    /// Driver backend name.
    #[serde(default = "default_driver")]
    pub driver: String,

    /// Motor table rows in X, Y, Z, W, P, R order. Columns:
    /// steps/rev, microstep, gearbox reduction, gearbox increase,
    /// max speed, max acceleration.
    pub motors: Vec<MotorRow>,

    /// Per-axis pin overrides; unlisted axes use the board wiring.
    #[serde(default)]
    pub pins: Vec<PinAssignment>,
}

impl PlatformConfig {
    /// Validate the platform configuration.
    ///
    /// # Validation Rules
    /// 1. `shared` section valid
    /// 2. `driver` not empty
    /// 3. exactly `AXIS_COUNT` motor rows, each a valid `AxisConfig`
    /// 4. no axis listed twice in `pins`
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        if self.driver.is_empty() {
            return Err(ConfigError::ValidationError(
                "driver cannot be empty".to_string(),
            ));
        }

        let table = self.motor_table()?;
        for axis in AxisId::ALL {
            AxisConfig::from_row(axis, &table[axis.index()])?;
        }

        let mut seen = HashSet::new();
        for pin in &self.pins {
            if !seen.insert(pin.axis) {
                return Err(ConfigError::ValidationError(format!(
                    "Duplicate pin assignment for axis {}",
                    pin.axis
                )));
            }
        }

        Ok(())
    }

    /// The motor table as a fixed 6×6 array.
    pub fn motor_table(&self) -> Result<MotorTable, ConfigError> {
        MotorTable::try_from(self.motors.as_slice()).map_err(|_| {
            ConfigError::ValidationError(format!(
                "motors must have exactly {} rows (got {})",
                AXIS_COUNT,
                self.motors.len()
            ))
        })
    }

    /// Pin wiring for `axis`: override if present, else board default.
    pub fn pins_for(&self, axis: AxisId) -> StepperPins {
        self.pins
            .iter()
            .find(|p| p.axis == axis)
            .map(|p| StepperPins {
                step: p.step,
                dir: p.dir,
                enable: p.enable,
            })
            .unwrap_or_else(|| StepperPins::board_default(axis))
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            shared: SharedConfig::default(),
            driver: default_driver(),
            motors: vec![[200, 16, 1, 1, 1000, 500]; AXIS_COUNT],
            pins: Vec::new(),
        }
    }
}
