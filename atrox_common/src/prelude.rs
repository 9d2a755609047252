//! Prelude module for common re-exports.
//!
//! ```rust
//! use atrox_common::prelude::*;
//! ```

// ─── Axes ───────────────────────────────────────────────────────────
pub use crate::axis::{AxisConfig, AxisId, AxisMask, MotorRow, MotorTable, StepperPins};

// ─── Motion payloads & modes ────────────────────────────────────────
pub use crate::mode::{AngularUnit, LinearUnit, PositioningMode, SystemMode};
pub use crate::motion::{DynamicsProfile, MoveAmount, Statics};

// ─── Driver contract ────────────────────────────────────────────────
pub use crate::driver::{
    DriverDiagnostics, DriverError, DriverFactory, DriverSnapshot, StepperDriver,
};

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, PlatformConfig, SharedConfig};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{AXIS_COUNT, MOVE_ARG_COUNT};
