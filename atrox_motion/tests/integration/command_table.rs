//! Integration test: every table entry reports its status and applies its effect.

use atrox_common::prelude::*;
use atrox_motion::command::{COMMAND_TABLE, CommandCode};
use atrox_motion::{CommandStatus, Execution, InterpreterError};

use super::{all_diagnostics, all_snapshots, interpreter, pitch_args};

const EXPECTED_STATUS: [(char, i32, CommandStatus); 11] = [
    ('G', 90, CommandStatus::Complete),
    ('G', 91, CommandStatus::Complete),
    ('G', 200, CommandStatus::NeedsArgs),
    ('G', 220, CommandStatus::Complete),
    ('G', 221, CommandStatus::Complete),
    ('G', 291, CommandStatus::NeedsArgs),
    ('M', 0, CommandStatus::Complete),
    ('M', 1, CommandStatus::Complete),
    ('M', 17, CommandStatus::Complete),
    ('M', 18, CommandStatus::Complete),
    ('M', 76, CommandStatus::Complete),
];

#[test]
fn recognized_commands_report_their_status() {
    let mut interp = interpreter();
    for (address, value, expected) in EXPECTED_STATUS {
        assert_eq!(interp.command_init(address, value), expected, "{address}{value}");
        assert_eq!(
            interp.command_init(address.to_ascii_lowercase(), value),
            expected,
            "lowercase {address}{value}"
        );
    }
    assert_eq!(COMMAND_TABLE.len(), EXPECTED_STATUS.len());
}

#[test]
fn mode_commands_mutate_only_their_field() {
    let mut interp = interpreter();

    interp.execute_code('G', 90).unwrap();
    assert_eq!(
        *interp.controller().mode(),
        SystemMode {
            positioning: PositioningMode::Absolute,
            ..SystemMode::default()
        }
    );

    interp.execute_code('G', 221).unwrap();
    assert_eq!(
        *interp.controller().mode(),
        SystemMode {
            positioning: PositioningMode::Absolute,
            linear_unit: LinearUnit::Millimeter,
            angular_unit: AngularUnit::Degree,
        }
    );

    interp.execute_code('G', 91).unwrap();
    interp.execute_code('G', 220).unwrap();
    assert_eq!(*interp.controller().mode(), SystemMode::default());
}

#[test]
fn engage_and_release_touch_every_driver() {
    let mut interp = interpreter();

    assert_eq!(
        interp.execute_code('M', 17),
        Ok(Execution::Applied(CommandCode::new('M', 17)))
    );
    assert!(all_snapshots(&interp).iter().all(|s| s.enabled));

    interp.execute_code('M', 18).unwrap();
    assert!(all_snapshots(&interp).iter().all(|s| !s.enabled));
    assert!(all_diagnostics(&interp).iter().all(|d| d.enable_requests == 2));
}

#[test]
fn mode_commands_issue_no_driver_calls() {
    let mut interp = interpreter();
    let before = all_diagnostics(&interp);
    for value in [90, 91, 220, 221] {
        interp.execute_code('G', value).unwrap();
    }
    assert_eq!(all_diagnostics(&interp), before);
}

#[test]
fn placeholders_surface_as_unsupported_without_effects() {
    let mut interp = interpreter();
    let mode = *interp.controller().mode();
    let before = all_diagnostics(&interp);

    for value in [0, 1, 76] {
        assert_eq!(
            interp.execute_code('M', value),
            Err(InterpreterError::Unsupported(CommandCode::new('M', value)))
        );
    }

    assert_eq!(*interp.controller().mode(), mode);
    assert_eq!(all_diagnostics(&interp), before);
}

#[test]
fn arguments_loaded_for_engage_do_not_move() {
    let mut interp = interpreter();
    assert_eq!(interp.command_init('M', 17), CommandStatus::Complete);
    interp.load_move_arguments(pitch_args(45.0, 10.0, 0.0));

    assert_eq!(
        interp.execute(),
        Ok(Execution::Applied(CommandCode::new('M', 17)))
    );
    for snapshot in all_snapshots(&interp) {
        assert!(snapshot.enabled);
        assert_eq!(snapshot.position, 0);
        assert_eq!(snapshot.target, 0);
    }
    for diag in all_diagnostics(&interp) {
        assert_eq!(diag.enable_requests, 1);
        assert_eq!(diag.moves, 0);
        assert_eq!(diag.steps_issued, 0);
    }
}

#[test]
fn arguments_loaded_for_mode_change_do_not_move() {
    let mut interp = interpreter();
    let before = all_diagnostics(&interp);
    assert_eq!(interp.command_init('G', 90), CommandStatus::Complete);
    interp.load_move_arguments(pitch_args(45.0, 10.0, 0.0));

    assert_eq!(
        interp.execute(),
        Ok(Execution::Applied(CommandCode::new('G', 90)))
    );
    assert_eq!(interp.controller().mode().positioning, PositioningMode::Absolute);
    assert_eq!(all_diagnostics(&interp), before);
    assert!(all_snapshots(&interp).iter().all(|s| s.target == 0));
}
