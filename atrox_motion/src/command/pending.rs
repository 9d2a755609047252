//! The live pending command.
//!
//! One instance is owned by the interpreter and reused in place: each
//! `command_init` overwrites it, argument loading fills it, and `execute`
//! reads it without consuming it.

use std::fmt;

use atrox_common::consts::MOVE_ARG_COUNT;
use atrox_common::motion::{DynamicsProfile, Statics};
use thiserror::Error;

use super::table::{self, CommandCode, CommandDescriptor, CommandStatus};

/// Argument vector of the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Expected {} move arguments, got {found}", MOVE_ARG_COUNT)]
pub struct ArgumentCountError {
    pub found: usize,
}

/// Ten positional move arguments.
///
/// | Index | Field |
/// |-------|-------|
/// | 0..=5 | statics X, Y, Z, W, P, R |
/// | 6 | linear speed |
/// | 7 | linear acceleration |
/// | 8 | angular speed |
/// | 9 | angular acceleration |
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveArguments([f32; MOVE_ARG_COUNT]);

impl MoveArguments {
    pub fn statics(&self) -> Statics {
        let [x, y, z, w, p, r, ..] = self.0;
        Statics { x, y, z, w, p, r }
    }

    pub fn dynamics(&self) -> DynamicsProfile {
        let [.., linear_speed, linear_acceleration, angular_speed, angular_acceleration] = self.0;
        DynamicsProfile {
            linear_speed,
            linear_acceleration,
            angular_speed,
            angular_acceleration,
        }
    }
}

impl From<[f32; MOVE_ARG_COUNT]> for MoveArguments {
    fn from(values: [f32; MOVE_ARG_COUNT]) -> Self {
        Self(values)
    }
}

impl TryFrom<&[f32]> for MoveArguments {
    type Error = ArgumentCountError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        <[f32; MOVE_ARG_COUNT]>::try_from(values)
            .map(Self)
            .map_err(|_| ArgumentCountError {
                found: values.len(),
            })
    }
}

/// Lifecycle state of the pending command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    /// Nothing initialized since construction.
    Empty,
    /// Last initialization was unrecognized.
    Rejected,
    /// Recognized move command still waiting for its arguments.
    NeedsArgs,
    /// Executable.
    Ready,
}

/// Command accumulated between `command_init` and `execute`.
#[derive(Debug, Clone, Default)]
pub struct PendingCommand {
    code: Option<CommandCode>,
    descriptor: Option<&'static CommandDescriptor>,
    statics: Statics,
    dynamics: DynamicsProfile,
    arguments_loaded: bool,
}

impl PendingCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite with a new address/value pair and return its status.
    ///
    /// Move commands start from zeroed statics and dynamics.
    pub fn init(&mut self, address: char, value: i32) -> CommandStatus {
        let code = CommandCode::new(address, value);
        self.code = Some(code);
        self.descriptor = table::lookup(code.address, code.value);
        self.arguments_loaded = false;

        match self.descriptor {
            Some(descriptor) => {
                let status = descriptor.action.status();
                if status == CommandStatus::NeedsArgs {
                    self.statics = Statics::default();
                    self.dynamics = DynamicsProfile::default();
                }
                status
            }
            None => CommandStatus::Rejected,
        }
    }

    /// Install move arguments. Not guarded: overwrites the payload of
    /// whatever command is pending.
    pub fn load_arguments(&mut self, args: &MoveArguments) {
        self.statics = args.statics();
        self.dynamics = args.dynamics();
        self.arguments_loaded = true;
    }

    pub fn state(&self) -> CommandState {
        match (self.code, self.descriptor) {
            (None, _) => CommandState::Empty,
            (Some(_), None) => CommandState::Rejected,
            (Some(_), Some(descriptor)) => {
                let needs_args = descriptor.action.status() == CommandStatus::NeedsArgs;
                if needs_args && !self.arguments_loaded {
                    CommandState::NeedsArgs
                } else {
                    CommandState::Ready
                }
            }
        }
    }

    /// Status reported for the pending command, `None` when empty.
    pub fn status(&self) -> Option<CommandStatus> {
        self.code.map(|_| {
            self.descriptor
                .map_or(CommandStatus::Rejected, |d| d.action.status())
        })
    }

    pub fn code(&self) -> Option<CommandCode> {
        self.code
    }

    pub fn descriptor(&self) -> Option<&'static CommandDescriptor> {
        self.descriptor
    }

    pub fn statics(&self) -> &Statics {
        &self.statics
    }

    pub fn dynamics(&self) -> &DynamicsProfile {
        &self.dynamics
    }
}

impl fmt::Display for PendingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(code) = self.code else {
            return f.write_str("<empty>");
        };
        write!(
            f,
            "{} W{:.2}|P{:.2}|R{:.2} {:.2}",
            code, self.statics.w, self.statics.p, self.statics.r, self.dynamics.angular_speed
        )
    }
}
