//! Simulated stepper driver.
//!
//! `SimulatedStepper` emulates a step/direction driver in software. Each call
//! to a step primitive emits at most one step and advances a virtual clock by
//! the step period, so motion runs as fast as the host allows while the
//! diagnostics still report the time the move would take on hardware.
//!
//! Speed handling follows the usual hobby stepper library conventions:
//! - `set_speed` is constrained to ±`max_speed`
//! - the accelerated profile ramps from rest up to |speed| (or `max_speed`
//!   when no speed is set) and back down so it arrives at rest

use atrox_common::axis::{AxisId, StepperPins};
use atrox_common::driver::{DriverDiagnostics, DriverError, DriverSnapshot, StepperDriver};
use tracing::{debug, trace};

/// Software stepper for one axis.
pub struct SimulatedStepper {
    axis: AxisId,
    pins: StepperPins,
    /// Current position [steps]
    position: i64,
    /// Target position [steps]
    target: i64,
    /// Commanded constant speed [steps/s], signed
    speed: f32,
    /// Speed ceiling [steps/s]
    max_speed: f32,
    /// Ramp acceleration [steps/s²]
    acceleration: f32,
    /// Instantaneous step rate of the accelerated profile [steps/s]
    ramp_speed: f32,
    enabled: bool,
    diagnostics: DriverDiagnostics,
}

impl SimulatedStepper {
    /// Create a disabled stepper at position zero.
    pub fn new(axis: AxisId, pins: StepperPins) -> Self {
        debug!(
            "Simulated stepper {} on step pin {}, dir pin {}, enable pin {}",
            axis, pins.step, pins.dir, pins.enable
        );
        Self {
            axis,
            pins,
            position: 0,
            target: 0,
            speed: 0.0,
            max_speed: 1.0,
            acceleration: 0.0,
            ramp_speed: 0.0,
            enabled: false,
            diagnostics: DriverDiagnostics::default(),
        }
    }

    pub fn axis(&self) -> AxisId {
        self.axis
    }

    pub fn pins(&self) -> StepperPins {
        self.pins
    }

    /// Emit one step toward the target at `rate` steps/s.
    fn emit_step(&mut self, rate: f32) {
        let direction = (self.target - self.position).signum();
        self.position += direction;
        self.diagnostics.steps_issued += 1;
        self.diagnostics.motion_time_s += 1.0 / f64::from(rate);
        trace!(
            "Axis {}: pos={} target={} rate={:.3}",
            self.axis, self.position, self.target, rate
        );
    }

    fn stalled(&self) -> DriverError {
        DriverError::Stalled {
            axis: self.axis,
            remaining: self.distance_remaining(),
        }
    }
}

impl StepperDriver for SimulatedStepper {
    fn name(&self) -> &'static str {
        "simulation"
    }

    fn set_max_speed(&mut self, speed: f32) {
        self.max_speed = speed.abs();
        self.speed = self.speed.clamp(-self.max_speed, self.max_speed);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.diagnostics.enable_requests += 1;
        debug!(
            "Axis {} outputs {} (enable pin {})",
            self.axis,
            if enabled { "enabled" } else { "disabled" },
            self.pins.enable
        );
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_acceleration(&mut self, acceleration: f32) {
        let acceleration = acceleration.abs();
        if acceleration > 0.0 {
            self.acceleration = acceleration;
        }
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(-self.max_speed, self.max_speed);
    }

    fn move_by(&mut self, steps: i32) {
        self.target = self.position + i64::from(steps);
        self.diagnostics.moves += 1;
    }

    fn distance_remaining(&self) -> i64 {
        self.target - self.position
    }

    fn step_with_acceleration(&mut self) -> Result<bool, DriverError> {
        let remaining = self.distance_remaining().unsigned_abs();
        if remaining == 0 {
            self.ramp_speed = 0.0;
            return Ok(false);
        }
        if self.acceleration <= 0.0 {
            return Err(DriverError::Fault {
                axis: self.axis,
                reason: "no acceleration installed".to_string(),
            });
        }

        let ceiling = match self.speed.abs() {
            s if s > 0.0 => s,
            _ => self.max_speed,
        };
        if ceiling <= 0.0 {
            return Err(self.stalled());
        }

        // Lowest rate the ramp can start from: one step under constant acceleration.
        let floor = (2.0 * self.acceleration).sqrt().min(ceiling);
        let v2 = self.ramp_speed * self.ramp_speed;
        let stopping_steps = v2 / (2.0 * self.acceleration);

        self.ramp_speed = if remaining as f32 <= stopping_steps {
            (v2 - 2.0 * self.acceleration).max(0.0).sqrt().max(floor)
        } else {
            (v2 + 2.0 * self.acceleration).sqrt().min(ceiling)
        };

        self.emit_step(self.ramp_speed);
        if self.distance_remaining() == 0 {
            self.ramp_speed = 0.0;
        }
        Ok(true)
    }

    fn step_at_constant_speed(&mut self) -> Result<bool, DriverError> {
        if self.distance_remaining() == 0 {
            return Ok(false);
        }
        let rate = self.speed.abs();
        if rate <= 0.0 {
            return Err(self.stalled());
        }
        self.emit_step(rate);
        Ok(true)
    }

    fn snapshot(&self) -> DriverSnapshot {
        DriverSnapshot {
            position: self.position,
            target: self.target,
            speed: self.speed,
            acceleration: self.acceleration,
            max_speed: self.max_speed,
            enabled: self.enabled,
        }
    }

    fn diagnostics(&self) -> Option<DriverDiagnostics> {
        Some(self.diagnostics)
    }
}
