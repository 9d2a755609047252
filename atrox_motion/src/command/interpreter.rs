//! Two-phase command interpreter.
//!
//! `command_init` accepts an address/value pair and reports whether more
//! arguments are needed; `execute` performs the side effect of whatever is
//! pending. Executing again without a new `command_init` repeats the last
//! command.

use atrox_common::axis::AxisId;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::pending::{CommandState, MoveArguments, PendingCommand};
use super::table::{Action, CommandCode, CommandStatus};
use crate::controller::{MotionController, MotionError, MoveReport};

/// Error types for command execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpreterError {
    /// Recognized command without an implementation.
    #[error("Command {0} is not supported")]
    Unsupported(CommandCode),

    #[error(transparent)]
    Motion(#[from] MotionError),
}

/// Outcome of `execute`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Execution {
    /// Mode or engage-state command applied.
    Applied(CommandCode),
    /// Move command ran to completion.
    Moved(CommandCode, MoveReport),
    /// Nothing executable was pending.
    Idle,
}

/// Accepts commands and executes them against the motion controller.
pub struct CommandInterpreter {
    controller: MotionController,
    pending: PendingCommand,
}

impl CommandInterpreter {
    pub fn new(controller: MotionController) -> Self {
        Self {
            controller,
            pending: PendingCommand::new(),
        }
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MotionController {
        &mut self.controller
    }

    pub fn pending(&self) -> &PendingCommand {
        &self.pending
    }

    /// Start a new command. The address letter is case-insensitive.
    pub fn command_init(&mut self, address: char, value: i32) -> CommandStatus {
        let status = self.pending.init(address, value);
        match status {
            CommandStatus::Rejected => warn!(
                "Rejected unrecognized command {}{}",
                address.to_ascii_uppercase(),
                value
            ),
            _ => debug!(
                "Accepted {}{} (status {})",
                address.to_ascii_uppercase(),
                value,
                status.code()
            ),
        }
        status
    }

    /// Load the ten move arguments into the pending command.
    pub fn load_move_arguments(&mut self, args: impl Into<MoveArguments>) {
        self.pending.load_arguments(&args.into());
    }

    /// Perform the pending command.
    ///
    /// Returns `Idle` when nothing was initialized, the last command was
    /// rejected, or a move command is still waiting for its arguments.
    ///
    /// # Errors
    /// - `Unsupported` for placeholder commands (G200, M0, M1, M76)
    /// - `Motion` if a jog fails in the controller
    pub fn execute(&mut self) -> Result<Execution, InterpreterError> {
        let descriptor = match (self.pending.state(), self.pending.descriptor()) {
            (CommandState::Ready, Some(descriptor)) => descriptor,
            (CommandState::NeedsArgs, Some(descriptor)) => {
                warn!("{} is waiting for move arguments", descriptor.code);
                return Ok(Execution::Idle);
            }
            (state, _) => {
                debug!("Nothing to execute ({:?})", state);
                return Ok(Execution::Idle);
            }
        };

        let code = descriptor.code;
        info!(command = %self.pending, "Executing {}", descriptor.summary);

        match descriptor.action {
            Action::SetPositioning(positioning) => {
                self.controller.mode_mut().positioning = positioning;
            }
            Action::SetAngularUnit(unit) => {
                self.controller.mode_mut().angular_unit = unit;
            }
            Action::EngageSteppers => self.controller.engage_all(),
            Action::ReleaseSteppers => self.controller.release_all(),
            Action::JogPitch => {
                let amount = self.pending.statics()[AxisId::P];
                let dynamics = *self.pending.dynamics();
                let report = self.controller.move_axis(AxisId::P, amount, dynamics)?;
                return Ok(Execution::Moved(code, report));
            }
            Action::Placeholder(kind) => {
                warn!("{} ({:?}) has no implementation", code, kind);
                return Err(InterpreterError::Unsupported(code));
            }
        }

        Ok(Execution::Applied(code))
    }

    /// `command_init` followed by `execute`, discarding the status.
    pub fn execute_code(
        &mut self,
        address: char,
        value: i32,
    ) -> Result<Execution, InterpreterError> {
        self.command_init(address, value);
        self.execute()
    }
}
