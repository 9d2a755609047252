//! Shared fixtures for the integration suite.

mod command_table;
mod console_session;
mod gates;
mod idempotence;
mod rejected;
mod scenario;

use atrox_common::prelude::*;
use atrox_motion::drivers::simulation;
use atrox_motion::{AxisRegistry, CommandInterpreter, MotionController};

/// Motor row used by every axis in the reference platform.
pub const REFERENCE_ROW: MotorRow = [200, 16, 1, 1, 1000, 500];

pub fn reference_registry() -> AxisRegistry {
    AxisRegistry::from_table(&[REFERENCE_ROW; AXIS_COUNT], |axis| {
        simulation::create_driver(axis, StepperPins::board_default(axis))
    })
    .expect("reference table is valid")
}

pub fn interpreter() -> CommandInterpreter {
    CommandInterpreter::new(MotionController::new(reference_registry()))
}

/// Ten-value argument vector jogging the pitch channel.
pub fn pitch_args(p: f32, angular_speed: f32, angular_acceleration: f32) -> [f32; MOVE_ARG_COUNT] {
    [0.0, 0.0, 0.0, 0.0, p, 0.0, 0.0, 0.0, angular_speed, angular_acceleration]
}

/// Diagnostics of every axis, X through R.
pub fn all_diagnostics(interp: &CommandInterpreter) -> Vec<DriverDiagnostics> {
    AxisId::ALL
        .iter()
        .map(|&axis| {
            interp
                .controller()
                .registry()
                .driver(axis)
                .diagnostics()
                .expect("simulation driver reports diagnostics")
        })
        .collect()
}

pub fn all_snapshots(interp: &CommandInterpreter) -> Vec<DriverSnapshot> {
    AxisId::ALL
        .iter()
        .map(|&axis| interp.controller().registry().driver(axis).snapshot())
        .collect()
}
