//! Axis identifiers and per-axis configuration.
//!
//! This module defines:
//! - `AxisId` - Closed set of the six platform axes
//! - `AxisMask` - Bitflag set of axes
//! - `AxisConfig` - Static parameters and kinematic limits of one axis
//! - `StepperPins` - Step/direction/enable wiring of one driver

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{AXIS_COUNT, DEFAULT_ENABLE_PIN, MOTOR_TABLE_COLUMNS};

/// One row of the startup motor table:
/// `[steps/rev, microstep, gearbox reduction, gearbox increase, max speed, max accel]`.
pub type MotorRow = [i32; MOTOR_TABLE_COLUMNS];

/// The startup motor table, one row per axis in `AxisId::ALL` order.
pub type MotorTable = [MotorRow; AXIS_COUNT];

/// Column indices into a `MotorRow`.
pub mod column {
    pub const STEPS_PER_REVOLUTION: usize = 0;
    pub const MICROSTEP_FACTOR: usize = 1;
    pub const GEARBOX_REDUCTION: usize = 2;
    pub const GEARBOX_INCREASE: usize = 3;
    pub const MAX_SPEED: usize = 4;
    pub const MAX_ACCELERATION: usize = 5;
}

/// Platform axis identifier.
///
/// X, Y, Z are linear; W, P, R are the yaw, pitch and roll orientation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum AxisId {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
    P = 4,
    R = 5,
}

impl AxisId {
    /// All axes in table order.
    pub const ALL: [AxisId; AXIS_COUNT] = [
        AxisId::X,
        AxisId::Y,
        AxisId::Z,
        AxisId::W,
        AxisId::P,
        AxisId::R,
    ];

    /// Position of this axis in `ALL` and in the motor table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Address letter of this axis.
    pub const fn letter(self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
            Self::W => 'W',
            Self::P => 'P',
            Self::R => 'R',
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

bitflags! {
    /// Set of axes, one bit per `AxisId`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AxisMask: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
        const W = 1 << 3;
        const P = 1 << 4;
        const R = 1 << 5;
    }
}

impl From<AxisId> for AxisMask {
    fn from(axis: AxisId) -> Self {
        Self::from_bits_truncate(1 << axis.index())
    }
}

impl AxisMask {
    /// Returns true if `axis` is a member.
    #[inline]
    pub fn has(&self, axis: AxisId) -> bool {
        self.contains(AxisMask::from(axis))
    }
}

/// Static parameters and kinematic limits of one axis.
///
/// Speeds are in steps per second, accelerations in steps per second².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Full steps per motor revolution.
    pub steps_per_revolution: u32,
    /// Driver microstepping factor.
    pub microstep_factor: u32,
    /// Gearbox reduction factor.
    pub gearbox_reduction: u32,
    /// Gearbox increase factor.
    pub gearbox_increase: u32,
    /// Platform speed limit.
    pub max_speed: f32,
    /// Platform acceleration limit.
    pub max_acceleration: f32,
    /// Speed used when a command does not specify one.
    pub cruise_speed: f32,
}

impl AxisConfig {
    /// Create a configuration whose cruise speed starts at `max_speed`.
    pub fn new(
        steps_per_revolution: u32,
        microstep_factor: u32,
        gearbox_reduction: u32,
        gearbox_increase: u32,
        max_speed: f32,
        max_acceleration: f32,
    ) -> Self {
        Self {
            steps_per_revolution,
            microstep_factor,
            gearbox_reduction,
            gearbox_increase,
            max_speed,
            max_acceleration,
            cruise_speed: max_speed,
        }
    }

    /// Build a configuration from one row of the startup motor table.
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if a count column is negative
    /// or the resulting configuration fails [`AxisConfig::validate`].
    pub fn from_row(axis: AxisId, row: &MotorRow) -> Result<Self, ConfigError> {
        let count = |col: usize, name: &str| {
            u32::try_from(row[col]).map_err(|_| {
                ConfigError::ValidationError(format!(
                    "axis {axis}: {name} must not be negative (got {})",
                    row[col]
                ))
            })
        };

        let config = Self::new(
            count(column::STEPS_PER_REVOLUTION, "steps_per_revolution")?,
            count(column::MICROSTEP_FACTOR, "microstep_factor")?,
            count(column::GEARBOX_REDUCTION, "gearbox_reduction")?,
            count(column::GEARBOX_INCREASE, "gearbox_increase")?,
            row[column::MAX_SPEED] as f32,
            row[column::MAX_ACCELERATION] as f32,
        );
        config.validate(axis)?;
        Ok(config)
    }

    /// Validate the axis configuration.
    ///
    /// # Validation Rules
    /// 1. `steps_per_revolution` > 0
    /// 2. `microstep_factor`, `gearbox_reduction`, `gearbox_increase` >= 1
    /// 3. `max_speed` > 0 and finite
    /// 4. `max_acceleration` >= 0 and finite
    /// 5. `cruise_speed` <= `max_speed`
    pub fn validate(&self, axis: AxisId) -> Result<(), ConfigError> {
        if self.steps_per_revolution == 0 {
            return Err(ConfigError::ValidationError(format!(
                "axis {axis}: steps_per_revolution must be > 0"
            )));
        }

        for (name, value) in [
            ("microstep_factor", self.microstep_factor),
            ("gearbox_reduction", self.gearbox_reduction),
            ("gearbox_increase", self.gearbox_increase),
        ] {
            if value < 1 {
                return Err(ConfigError::ValidationError(format!(
                    "axis {axis}: {name} must be >= 1"
                )));
            }
        }

        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "axis {axis}: max_speed must be > 0 (got {})",
                self.max_speed
            )));
        }

        if !self.max_acceleration.is_finite() || self.max_acceleration < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "axis {axis}: max_acceleration must be >= 0 (got {})",
                self.max_acceleration
            )));
        }

        if self.cruise_speed > self.max_speed {
            return Err(ConfigError::ValidationError(format!(
                "axis {axis}: cruise_speed {} exceeds max_speed {}",
                self.cruise_speed, self.max_speed
            )));
        }

        Ok(())
    }

    /// First static parameter that differs from `other`, as
    /// `(field, self value, other value)`.
    ///
    /// Static parameters are fixed per boot; kinematic limits are not compared.
    pub fn static_conflict(&self, other: &AxisConfig) -> Option<(&'static str, u32, u32)> {
        [
            (
                "steps_per_revolution",
                self.steps_per_revolution,
                other.steps_per_revolution,
            ),
            ("microstep_factor", self.microstep_factor, other.microstep_factor),
            ("gearbox_reduction", self.gearbox_reduction, other.gearbox_reduction),
            ("gearbox_increase", self.gearbox_increase, other.gearbox_increase),
        ]
        .into_iter()
        .find(|(_, a, b)| a != b)
    }
}

/// Step, direction and enable pin wiring of one stepper driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepperPins {
    pub step: u8,
    pub dir: u8,
    pub enable: u8,
}

impl StepperPins {
    /// Reference board wiring. Only the pitch driver has step/dir assigned.
    pub const fn board_default(axis: AxisId) -> Self {
        match axis {
            AxisId::P => Self {
                step: 3,
                dir: 6,
                enable: DEFAULT_ENABLE_PIN,
            },
            _ => Self {
                step: 0,
                dir: 0,
                enable: DEFAULT_ENABLE_PIN,
            },
        }
    }
}
