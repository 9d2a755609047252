//! Per-command motion payloads.
//!
//! - `Statics` - Six-channel positional payload (X, Y, Z, W, P, R)
//! - `DynamicsProfile` - Speed/acceleration attached to one move
//! - `MoveAmount` - Integer or float move value

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::axis::AxisId;

/// Positional payload of a command, one channel per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Statics {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub p: f32,
    pub r: f32,
}

impl Statics {
    #[inline]
    pub fn get(&self, axis: AxisId) -> f32 {
        self[axis]
    }
}

impl Index<AxisId> for Statics {
    type Output = f32;

    fn index(&self, axis: AxisId) -> &f32 {
        match axis {
            AxisId::X => &self.x,
            AxisId::Y => &self.y,
            AxisId::Z => &self.z,
            AxisId::W => &self.w,
            AxisId::P => &self.p,
            AxisId::R => &self.r,
        }
    }
}

impl IndexMut<AxisId> for Statics {
    fn index_mut(&mut self, axis: AxisId) -> &mut f32 {
        match axis {
            AxisId::X => &mut self.x,
            AxisId::Y => &mut self.y,
            AxisId::Z => &mut self.z,
            AxisId::W => &mut self.w,
            AxisId::P => &mut self.p,
            AxisId::R => &mut self.r,
        }
    }
}

/// Speed and acceleration attached to a single move.
///
/// Zero in any field means "use the axis's stored default".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DynamicsProfile {
    /// Linear speed [units/s].
    pub linear_speed: f32,
    /// Linear acceleration [units/s²].
    pub linear_acceleration: f32,
    /// Angular speed [steps/s].
    pub angular_speed: f32,
    /// Angular acceleration [steps/s²].
    pub angular_acceleration: f32,
}

impl DynamicsProfile {
    /// Profile with only the angular channels set.
    pub const fn angular(speed: f32, acceleration: f32) -> Self {
        Self {
            linear_speed: 0.0,
            linear_acceleration: 0.0,
            angular_speed: speed,
            angular_acceleration: acceleration,
        }
    }

    /// First field holding NaN or an infinity, with its value.
    pub fn first_non_finite(&self) -> Option<(&'static str, f32)> {
        [
            ("linear_speed", self.linear_speed),
            ("linear_acceleration", self.linear_acceleration),
            ("angular_speed", self.angular_speed),
            ("angular_acceleration", self.angular_acceleration),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    }
}

/// Amount of a single-axis move.
///
/// Interpretation depends on the active angular unit: a step count in
/// STEP mode, an angle in DEGREE mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveAmount {
    Steps(i32),
    Value(f32),
}

impl MoveAmount {
    /// Step count for STEP mode. Floats truncate toward zero.
    ///
    /// `None` for non-finite values and values outside the `i32` range.
    pub fn checked_steps(self) -> Option<i32> {
        match self {
            Self::Steps(steps) => Some(steps),
            Self::Value(value) => {
                let truncated = value.trunc();
                // i32::MAX is not representable; 2^31 is the first float past it.
                (truncated >= i32::MIN as f32 && truncated < 2_147_483_648.0)
                    .then_some(truncated as i32)
            }
        }
    }

    pub fn as_f32(self) -> f32 {
        match self {
            Self::Steps(steps) => steps as f32,
            Self::Value(value) => value,
        }
    }
}

impl From<i32> for MoveAmount {
    fn from(steps: i32) -> Self {
        Self::Steps(steps)
    }
}

impl From<f32> for MoveAmount {
    fn from(value: f32) -> Self {
        Self::Value(value)
    }
}
