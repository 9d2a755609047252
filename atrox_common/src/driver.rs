//! Stepper driver trait and error types.
//!
//! This module defines:
//! - `StepperDriver` trait - Per-axis motor driver collaborator
//! - `DriverError` enum - Faults reported by a driver
//! - `DriverFactory` type alias - Factory function type
//! - `DriverSnapshot` / `DriverDiagnostics` - Observable driver state

use crate::axis::{AxisId, StepperPins};
use thiserror::Error;

/// Error types for driver operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DriverError {
    /// The driver cannot make progress toward its target.
    #[error("Axis {axis} stalled with {remaining} steps remaining")]
    Stalled { axis: AxisId, remaining: i64 },

    /// Hardware fault reported by the driver.
    #[error("Axis {axis} driver fault: {reason}")]
    Fault { axis: AxisId, reason: String },

    /// Driver backend not found
    #[error("Driver not found: {0}")]
    NotFound(String),
}

/// Factory function type for creating one driver per axis.
pub type DriverFactory = fn(AxisId, StepperPins) -> Box<dyn StepperDriver>;

/// Point-in-time view of a driver's motion state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DriverSnapshot {
    /// Current position [steps]
    pub position: i64,
    /// Target position [steps]
    pub target: i64,
    /// Commanded speed [steps/s], after max speed constraint
    pub speed: f32,
    /// Installed acceleration [steps/s²]
    pub acceleration: f32,
    /// Speed limit [steps/s]
    pub max_speed: f32,
    /// Outputs enabled
    pub enabled: bool,
}

/// Optional driver diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriverDiagnostics {
    /// Number of enable/disable requests received
    pub enable_requests: u64,
    /// Number of relative moves issued
    pub moves: u64,
    /// Number of step pulses emitted
    pub steps_issued: u64,
    /// Elapsed motion time [s] (virtual for simulated drivers)
    pub motion_time_s: f64,
}

/// Trait defining the interface of a per-axis stepper driver.
///
/// The motion controller owns one driver per axis through the axis
/// registry and drives it through this minimal contract. Pulse
/// generation and pin toggling live behind it.
///
/// # Run-to-completion
///
/// A move is issued with [`move_by`](StepperDriver::move_by) and then
/// driven by repeatedly calling one of the step primitives until
/// [`distance_remaining`](StepperDriver::distance_remaining) is zero.
/// The two step primitives are never mixed within one move.
pub trait StepperDriver: Send {
    /// Returns the driver backend name (e.g., "simulation").
    fn name(&self) -> &'static str;

    /// Set the speed ceiling used by both step primitives.
    fn set_max_speed(&mut self, speed: f32);

    /// Enable or disable the driver outputs (holding torque).
    fn set_enabled(&mut self, enabled: bool);

    fn is_enabled(&self) -> bool;

    /// Install the acceleration used by `step_with_acceleration`.
    fn set_acceleration(&mut self, acceleration: f32);

    /// Set the constant speed used by `step_at_constant_speed`.
    fn set_speed(&mut self, speed: f32);

    /// Set a new target relative to the current position.
    fn move_by(&mut self, steps: i32);

    /// Signed steps left to the target.
    fn distance_remaining(&self) -> i64;

    /// Advance the accelerated profile by at most one step.
    ///
    /// Returns `Ok(true)` if a step was emitted.
    fn step_with_acceleration(&mut self) -> Result<bool, DriverError>;

    /// Advance at the constant speed by at most one step.
    ///
    /// Returns `Ok(true)` if a step was emitted.
    fn step_at_constant_speed(&mut self) -> Result<bool, DriverError>;

    /// Current motion state.
    fn snapshot(&self) -> DriverSnapshot;

    /// Get driver-specific diagnostics.
    /// Default: None
    fn diagnostics(&self) -> Option<DriverDiagnostics> {
        None
    }
}
