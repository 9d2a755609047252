//! Command handling.
//!
//! - [`table`] - Fixed address/value command table
//! - [`pending`] - The pending command and its move arguments
//! - [`interpreter`] - Two-phase init/execute state machine

pub mod interpreter;
pub mod pending;
pub mod table;

pub use interpreter::{CommandInterpreter, Execution, InterpreterError};
pub use pending::{ArgumentCountError, CommandState, MoveArguments, PendingCommand};
pub use table::{
    Action, COMMAND_TABLE, CommandCode, CommandDescriptor, CommandStatus, Unimplemented, lookup,
};
