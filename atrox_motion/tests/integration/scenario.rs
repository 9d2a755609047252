//! Integration test: boot from a platform file, engage, switch mode, jog pitch.

use atrox_common::prelude::*;
use atrox_motion::drivers::simulation;
use atrox_motion::controller::Profile;
use atrox_motion::{AxisRegistry, CommandInterpreter, CommandStatus, Execution, MotionController};

use super::{interpreter, pitch_args};

const PLATFORM_TOML: &str = r#"
driver = "simulation"
motors = [
    [200, 16, 1, 1, 1000, 500],
    [200, 16, 1, 1, 1000, 500],
    [200, 16, 1, 1, 1000, 500],
    [200, 16, 1, 1, 1000, 500],
    [200, 16, 1, 1, 1000, 500],
    [200, 16, 1, 1, 1000, 500],
]

[shared]
service_name = "atrox-scenario"
log_level = "debug"

[[pins]]
axis = "P"
step = 3
dir = 6
"#;

#[test]
fn reference_scenario() {
    let mut interp = interpreter();

    assert_eq!(interp.command_init('m', 17), CommandStatus::Complete);
    interp.execute().unwrap();
    for axis in AxisId::ALL {
        assert!(interp.controller().registry().driver(axis).is_enabled(), "{axis} enabled");
    }

    assert_eq!(interp.command_init('g', 90), CommandStatus::Complete);
    interp.execute().unwrap();
    assert_eq!(interp.controller().mode().positioning, PositioningMode::Absolute);

    assert_eq!(interp.command_init('g', 291), CommandStatus::NeedsArgs);
    interp.load_move_arguments(pitch_args(45.0, 10.0, 0.0));
    let Execution::Moved(_, report) = interp.execute().unwrap() else {
        panic!("jog did not move");
    };

    assert_eq!(report.axis, AxisId::P);
    assert_eq!(report.steps, 45);
    assert_eq!(report.speed, 10.0);
    assert_eq!(report.acceleration, None);
    assert_eq!(report.profile, Profile::ConstantSpeed);

    let pitch = interp.controller().registry().driver(AxisId::P).snapshot();
    assert_eq!(pitch.position, 45);
    assert_eq!(pitch.speed, 10.0);
    assert_eq!(pitch.acceleration, 0.0);
}

#[test]
fn jog_is_relative_even_in_absolute_mode() {
    let mut interp = interpreter();
    interp.execute_code('G', 90).unwrap();

    for _ in 0..2 {
        interp.command_init('G', 291);
        interp.load_move_arguments(pitch_args(30.0, 0.0, 0.0));
        interp.execute().unwrap();
    }
    assert_eq!(
        interp.controller().registry().driver(AxisId::P).snapshot().position,
        60
    );
}

#[test]
fn boot_from_platform_file() {
    let config = PlatformConfig::from_toml(PLATFORM_TOML).unwrap();
    config.validate().unwrap();
    assert_eq!(config.shared.log_level, LogLevel::Debug);

    let table = config.motor_table().unwrap();
    let registry = AxisRegistry::from_table(&table, |axis| {
        simulation::create_driver(axis, config.pins_for(axis))
    })
    .unwrap();
    assert!(registry.is_ready());

    let mut interp = CommandInterpreter::new(MotionController::new(registry));
    interp.command_init('G', 291);
    interp.load_move_arguments(pitch_args(-12.0, 0.0, 0.0));
    interp.execute().unwrap();

    let pitch = interp.controller().registry().driver(AxisId::P).snapshot();
    assert_eq!(pitch.position, -12);
    // Cruise speed defaults to the axis max speed.
    assert_eq!(pitch.speed, 1000.0);
}

#[test]
fn shipped_platform_file_is_valid() {
    let path = std::path::Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../config/platform.toml"
    ));
    let config = PlatformConfig::load(path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.driver, "simulation");
    assert_eq!(config.pins_for(AxisId::P), StepperPins::board_default(AxisId::P));
}
