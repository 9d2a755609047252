//! Platform-wide constants for the Atrox workspace.
//!
//! Single source of truth for axis counts, argument arity and motion gates.

use static_assertions::const_assert;

/// Number of independently drivable axes (X, Y, Z, W, P, R).
pub const AXIS_COUNT: usize = 6;

/// Columns per row of the startup motor table.
pub const MOTOR_TABLE_COLUMNS: usize = 6;

/// Floats carried by a move argument vector (6 statics + 4 dynamics).
pub const MOVE_ARG_COUNT: usize = 10;

/// Accelerations below this magnitude [steps/s²] mean "no acceleration requested".
pub const ACCELERATION_GATE: f32 = 1.0;

/// Speeds below this magnitude [steps/s] fall back to the axis cruise speed.
/// Roughly one step per hour.
pub const SPEED_GATE: f32 = 0.00027;

/// Enable pin shared by every stepper driver on the reference board.
pub const DEFAULT_ENABLE_PIN: u8 = 8;

/// Default driver backend.
pub const DEFAULT_DRIVER: &str = "simulation";

/// Default platform configuration path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/atrox/platform.toml";

const_assert!(MOVE_ARG_COUNT == AXIS_COUNT + 4);
const_assert!(MOTOR_TABLE_COLUMNS == 6);
