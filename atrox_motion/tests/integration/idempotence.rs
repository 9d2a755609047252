//! Integration test: executing again without a new init repeats the command.

use atrox_common::prelude::*;
use atrox_motion::Execution;

use super::{all_diagnostics, interpreter, pitch_args};

#[test]
fn repeated_engage_calls_engage_twice() {
    let mut interp = interpreter();
    interp.command_init('M', 17);
    interp.execute().unwrap();
    interp.execute().unwrap();

    for diag in all_diagnostics(&interp) {
        assert_eq!(diag.enable_requests, 2);
    }
}

#[test]
fn repeated_jog_moves_twice() {
    let mut interp = interpreter();
    interp.command_init('G', 291);
    interp.load_move_arguments(pitch_args(45.0, 200.0, 0.0));

    let first = interp.execute().unwrap();
    let second = interp.execute().unwrap();
    assert!(matches!(first, Execution::Moved(..)));
    assert_eq!(first, second);

    let pitch = interp.controller().registry().driver(AxisId::P);
    assert_eq!(pitch.snapshot().position, 90);
    assert_eq!(pitch.diagnostics().unwrap().moves, 2);
}

#[test]
fn replay_after_mode_change_reapplies() {
    let mut interp = interpreter();
    interp.command_init('G', 90);
    interp.execute().unwrap();

    interp.controller_mut().mode_mut().positioning = PositioningMode::Relative;
    interp.execute().unwrap();
    assert_eq!(interp.controller().mode().positioning, PositioningMode::Absolute);
}
