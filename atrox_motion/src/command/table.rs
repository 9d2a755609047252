//! Fixed command table.
//!
//! Maps an address letter + value code to a command descriptor. The table is
//! the only dispatch path: the interpreter looks a command up once when it is
//! initialized and replays the stored descriptor on execution.

use std::fmt;

use atrox_common::mode::{AngularUnit, PositioningMode};

use Action::*;

/// Status returned to the transport after a command is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum CommandStatus {
    /// Unrecognized address/value pair.
    Rejected = -1,
    /// Recognized; a move argument vector must follow.
    NeedsArgs = 2,
    /// Recognized and executable as-is.
    Complete = 8,
}

impl CommandStatus {
    /// Wire code of this status.
    #[inline]
    pub const fn code(self) -> i8 {
        self as i8
    }
}

/// Address letter + value code, e.g. `G291`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandCode {
    pub address: char,
    pub value: i32,
}

impl CommandCode {
    /// Create a code with the address letter normalized to uppercase.
    pub const fn new(address: char, value: i32) -> Self {
        Self {
            address: address.to_ascii_uppercase(),
            value,
        }
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.address, self.value)
    }
}

/// Commands accepted by the table but without an implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unimplemented {
    /// G200. Accepts arguments; motion dispatch is not available.
    RotateAxis,
    /// M0.
    Stop,
    /// M1.
    ManualStop,
    /// M76.
    Pause,
}

/// Side effect of a recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// G90 / G91.
    SetPositioning(PositioningMode),
    /// G220 / G221.
    SetAngularUnit(AngularUnit),
    /// G291. Relative move of the pitch axis.
    JogPitch,
    /// M17.
    EngageSteppers,
    /// M18.
    ReleaseSteppers,
    Placeholder(Unimplemented),
}

impl Action {
    /// Status reported when a command with this action is initialized.
    pub const fn status(&self) -> CommandStatus {
        match self {
            Self::JogPitch | Self::Placeholder(Unimplemented::RotateAxis) => {
                CommandStatus::NeedsArgs
            }
            _ => CommandStatus::Complete,
        }
    }
}

/// One row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub code: CommandCode,
    pub action: Action,
    pub summary: &'static str,
}

const fn entry(
    address: char,
    value: i32,
    action: Action,
    summary: &'static str,
) -> CommandDescriptor {
    CommandDescriptor {
        code: CommandCode::new(address, value),
        action,
        summary,
    }
}

/// Every recognized command.
pub static COMMAND_TABLE: [CommandDescriptor; 11] = [
    entry('G', 90, SetPositioning(PositioningMode::Absolute), "absolute positioning"),
    entry('G', 91, SetPositioning(PositioningMode::Relative), "relative positioning"),
    entry('G', 200, Placeholder(Unimplemented::RotateAxis), "rotate axis"),
    entry('G', 220, SetAngularUnit(AngularUnit::Step), "angular unit: step"),
    entry('G', 221, SetAngularUnit(AngularUnit::Degree), "angular unit: degree"),
    entry('G', 291, JogPitch, "jog pitch axis, always relative"),
    entry('M', 0, Placeholder(Unimplemented::Stop), "stop"),
    entry('M', 1, Placeholder(Unimplemented::ManualStop), "manual stop"),
    entry('M', 17, EngageSteppers, "engage steppers"),
    entry('M', 18, ReleaseSteppers, "release steppers"),
    entry('M', 76, Placeholder(Unimplemented::Pause), "pause"),
];

/// Look up a command. The address letter is case-insensitive.
pub fn lookup(address: char, value: i32) -> Option<&'static CommandDescriptor> {
    let code = CommandCode::new(address, value);
    COMMAND_TABLE.iter().find(|d| d.code == code)
}
