//! Motion controller.
//!
//! Translates single-axis move requests into blocking stepper motion and
//! owns the platform's `SystemMode`.
//!
//! # Gates
//!
//! | Dynamics field | Below gate | At/above gate |
//! |----------------|------------|---------------|
//! | `|angular_acceleration|` < 1.0 | constant speed, acceleration ignored | accelerated profile |
//! | `|angular_speed|` < 0.00027 | axis cruise speed | supplied speed, verbatim |
//!
//! Moves run to completion on the calling thread: one axis finishes before
//! any other axis can be commanded. There is no cancellation.

use atrox_common::axis::{AxisId, AxisMask};
use atrox_common::consts::{ACCELERATION_GATE, SPEED_GATE};
use atrox_common::driver::DriverError;
use atrox_common::mode::{AngularUnit, SystemMode};
use atrox_common::motion::{DynamicsProfile, MoveAmount};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::registry::{AxisRegistry, RegistryError};

/// Error types for motion requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// Not every axis has been configured yet.
    #[error("Platform not ready: unconfigured axes {missing:?}")]
    NotReady { missing: AxisMask },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Move amount is NaN, infinite or outside the step range.
    #[error("Axis {axis}: invalid move amount {amount}")]
    InvalidAmount { axis: AxisId, amount: f32 },

    /// A dynamics field is NaN or infinite.
    #[error("Axis {axis}: invalid {field} {value}")]
    InvalidDynamics {
        axis: AxisId,
        field: &'static str,
        value: f32,
    },

    /// Degree-to-step conversion is not available.
    #[error("Axis {0}: degree-based motion is not supported")]
    DegreeConversionUnsupported(AxisId),

    #[error("Driver fault: {0}")]
    Driver(#[from] DriverError),
}

/// Stepping primitive used for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    ConstantSpeed,
    Accelerated,
}

/// Outcome of a completed move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveReport {
    pub axis: AxisId,
    /// Relative move issued [steps].
    pub steps: i32,
    /// Speed handed to the driver [steps/s].
    pub speed: f32,
    /// Acceleration installed on the driver, if the profile is accelerated.
    pub acceleration: Option<f32>,
    pub profile: Profile,
    /// Step primitive invocations until the axis reported zero remaining.
    pub iterations: u64,
}

/// Blocking single-axis motion engine.
pub struct MotionController {
    registry: AxisRegistry,
    mode: SystemMode,
}

impl MotionController {
    pub fn new(registry: AxisRegistry) -> Self {
        Self {
            registry,
            mode: SystemMode::default(),
        }
    }

    pub fn registry(&self) -> &AxisRegistry {
        &self.registry
    }

    pub fn mode(&self) -> &SystemMode {
        &self.mode
    }

    pub fn mode_mut(&mut self) -> &mut SystemMode {
        &mut self.mode
    }

    /// Enable every driver, X through R.
    pub fn engage_all(&mut self) {
        for axis in AxisId::ALL {
            self.registry.set_driver_enabled(axis, true);
        }
        info!("All steppers engaged");
    }

    /// Disable every driver, X through R.
    pub fn release_all(&mut self) {
        for axis in AxisId::ALL {
            self.registry.set_driver_enabled(axis, false);
        }
        info!("All steppers released");
    }

    /// Override an axis cruise speed; see [`AxisRegistry::set_cruise_speed`].
    pub fn set_cruise_speed(&mut self, axis: AxisId, speed: f32) -> Result<f32, MotionError> {
        Ok(self.registry.set_cruise_speed(axis, speed)?)
    }

    /// Move `axis` by `amount` and block until it arrives.
    ///
    /// In STEP mode `amount` is a step count (floats truncate toward zero).
    /// DEGREE mode is rejected with `DegreeConversionUnsupported`.
    ///
    /// # Errors
    /// - `NotReady` if any axis is unconfigured
    /// - `InvalidDynamics` if a dynamics field is not finite
    /// - `InvalidAmount` if `amount` is not finite or does not fit a step count
    /// - `DegreeConversionUnsupported` in DEGREE mode
    /// - `Driver` if the driver faults mid-move; the axis stops where it is
    pub fn move_axis(
        &mut self,
        axis: AxisId,
        amount: impl Into<MoveAmount>,
        dynamics: DynamicsProfile,
    ) -> Result<MoveReport, MotionError> {
        if !self.registry.is_ready() {
            return Err(MotionError::NotReady {
                missing: self.registry.configured().complement(),
            });
        }

        if let Some((field, value)) = dynamics.first_non_finite() {
            warn!("Axis {}: refusing move with {} = {}", axis, field, value);
            return Err(MotionError::InvalidDynamics { axis, field, value });
        }

        let amount = amount.into();
        let invalid_amount = MotionError::InvalidAmount {
            axis,
            amount: amount.as_f32(),
        };
        if !amount.as_f32().is_finite() {
            warn!("Axis {}: refusing move of {}", axis, amount.as_f32());
            return Err(invalid_amount);
        }

        match self.mode.angular_unit {
            AngularUnit::Step => {
                let steps = amount.checked_steps().ok_or(invalid_amount)?;
                self.move_axis_steps(axis, steps, dynamics)
            }
            AngularUnit::Degree => {
                warn!(
                    "Axis {}: refusing {} degree move, degree conversion unavailable",
                    axis,
                    amount.as_f32()
                );
                Err(MotionError::DegreeConversionUnsupported(axis))
            }
        }
    }

    fn move_axis_steps(
        &mut self,
        axis: AxisId,
        steps: i32,
        dynamics: DynamicsProfile,
    ) -> Result<MoveReport, MotionError> {
        let (config, driver) = self.registry.axis_mut(axis)?;

        let acceleration = if dynamics.angular_acceleration.abs() < ACCELERATION_GATE {
            None
        } else {
            driver.set_acceleration(dynamics.angular_acceleration);
            Some(dynamics.angular_acceleration)
        };

        let speed = if dynamics.angular_speed.abs() < SPEED_GATE {
            config.cruise_speed
        } else {
            dynamics.angular_speed
        };
        driver.set_speed(speed);

        if !driver.is_enabled() {
            warn!("Axis {}: moving with driver outputs disabled", axis);
        }

        let profile = match acceleration {
            Some(_) => Profile::Accelerated,
            None => Profile::ConstantSpeed,
        };
        debug!(
            "Axis {}: move {} steps at {} steps/s, {:?}",
            axis, steps, speed, profile
        );

        driver.move_by(steps);

        let mut iterations = 0u64;
        match profile {
            Profile::Accelerated => {
                while driver.distance_remaining() != 0 {
                    driver.step_with_acceleration()?;
                    iterations += 1;
                }
            }
            Profile::ConstantSpeed => {
                while driver.distance_remaining() != 0 {
                    driver.step_at_constant_speed()?;
                    iterations += 1;
                }
            }
        }

        debug!(
            "Axis {}: move complete after {} iterations",
            axis, iterations
        );

        Ok(MoveReport {
            axis,
            steps,
            speed,
            acceleration,
            profile,
            iterations,
        })
    }
}
