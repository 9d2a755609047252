//! Integration test: speed and acceleration gates through the interpreter.

use atrox_common::prelude::*;
use atrox_motion::Execution;
use atrox_motion::controller::Profile;

use super::{interpreter, pitch_args};

fn jog(speed: f32, acceleration: f32) -> atrox_motion::MoveReport {
    let mut interp = interpreter();
    interp.controller_mut().set_cruise_speed(AxisId::P, 300.0).unwrap();
    interp.command_init('G', 291);
    interp.load_move_arguments(pitch_args(8.0, speed, acceleration));
    match interp.execute() {
        Ok(Execution::Moved(_, report)) => report,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn speed_gate_boundary() {
    assert_eq!(jog(0.0002, 0.0).speed, 300.0);
    assert_eq!(jog(0.0003, 0.0).speed, 0.0003);
    assert_eq!(jog(0.0, 0.0).speed, 300.0);
}

#[test]
fn acceleration_gate_boundary() {
    let below = jog(100.0, 0.5);
    assert_eq!(below.profile, Profile::ConstantSpeed);
    assert_eq!(below.acceleration, None);

    let above = jog(100.0, 1.5);
    assert_eq!(above.profile, Profile::Accelerated);
    assert_eq!(above.acceleration, Some(1.5));
}

#[test]
fn accelerated_jog_arrives() {
    let mut interp = interpreter();
    interp.command_init('G', 291);
    interp.load_move_arguments(pitch_args(-200.0, 500.0, 500.0));
    interp.execute().unwrap();

    let pitch = interp.controller().registry().driver(AxisId::P);
    assert_eq!(pitch.snapshot().position, -200);
    assert_eq!(pitch.distance_remaining(), 0);
}
