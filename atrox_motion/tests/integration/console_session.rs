//! Integration test: a console session over in-memory buffers.

use std::io::Cursor;

use atrox_common::prelude::*;
use atrox_motion::Console;

use super::interpreter;

fn run_session(input: &str) -> (Console, Vec<String>) {
    let mut console = Console::new(interpreter());
    let mut output = Vec::new();
    console.run(Cursor::new(input), &mut output).unwrap();
    let lines = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (console, lines)
}

#[test]
fn engage_and_jog_session() {
    let (console, lines) = run_session(
        "; bring up the platform\n\
         M17\n\
         g90\n\
         G291\n\
         0 0 0 0 45 0 0 0 10 0\n\
         \n\
         Q5\n",
    );

    assert_eq!(
        lines,
        vec![
            "ok 8",
            "done M17",
            "ok 8",
            "done G90",
            "args 2",
            "done G291 45",
            "done G291 45",
            "err -1",
        ]
    );

    let controller = console.interpreter().controller();
    assert_eq!(controller.mode().positioning, PositioningMode::Absolute);
    assert_eq!(controller.registry().driver(AxisId::P).snapshot().position, 90);
}

#[test]
fn malformed_arguments_keep_waiting() {
    let (console, lines) = run_session("G291\n1 2 3\n0 0 0 0 -5 0 0 0 0 0\n");
    assert_eq!(lines[0], "args 2");
    assert!(lines[1].starts_with("err "), "{}", lines[1]);
    assert_eq!(lines[2], "done G291 -5");
    assert!(!console.awaiting_arguments());
}

#[test]
fn new_command_abandons_argument_request() {
    let (console, lines) = run_session("G291\nM18\n\n");
    assert_eq!(lines, vec!["args 2", "ok 8", "done M18", "done M18"]);
    assert!(!console.awaiting_arguments());
}

#[test]
fn unsupported_and_malformed_lines_report_errors() {
    let (_, lines) = run_session("M76\nG\n42\n");
    assert_eq!(lines[0], "ok 8");
    assert_eq!(lines[1], "err Command M76 is not supported");
    assert_eq!(lines[2], "err Invalid command code ''");
    assert_eq!(lines[3], "err Invalid address letter '4'");
}

#[test]
fn replay_on_fresh_console_is_idle() {
    let (_, lines) = run_session("\n");
    assert_eq!(lines, vec!["idle"]);
}

#[test]
fn non_finite_arguments_keep_waiting() {
    let (console, lines) = run_session(
        "G291\n\
         0 0 0 0 inf 0 0 0 10 0\n\
         0 0 0 0 NaN 0 0 0 10 0\n\
         0 0 0 0 45 0 0 0 nan 0\n",
    );
    assert_eq!(lines[0], "args 2");
    assert_eq!(lines[1], "err Argument 'inf' is not a finite number");
    assert_eq!(lines[2], "err Argument 'NaN' is not a finite number");
    assert_eq!(lines[3], "err Argument 'nan' is not a finite number");
    assert!(console.awaiting_arguments());

    let pitch = console.interpreter().controller().registry().driver(AxisId::P);
    assert_eq!(pitch.snapshot().target, 0);
}

#[test]
fn out_of_range_amount_is_refused() {
    let (console, lines) = run_session("G291\n0 0 0 0 3e9 0 0 0 0 0\n");
    assert_eq!(lines[0], "args 2");
    assert!(
        lines[1].starts_with("err Axis P: invalid move amount"),
        "{}",
        lines[1]
    );

    let pitch = console.interpreter().controller().registry().driver(AxisId::P);
    assert_eq!(pitch.snapshot().target, 0);
    assert_eq!(pitch.diagnostics().unwrap().moves, 0);
}
