//! Line-oriented console transport.
//!
//! Frames raw text into interpreter calls:
//!
//! | Input line | Effect | Reply |
//! |------------|--------|-------|
//! | `M17` | init + execute | `ok 8`, then `done M17` |
//! | `G291` | init | `args 2` |
//! | `0 0 0 0 45 0 0 0 10 0` (after `args 2`) | load + execute | `done G291 45` |
//! | *(empty)* | replay last command | outcome |
//! | `Q5` | init | `err -1` |
//! | `; text` | comment | none |
//!
//! Malformed lines are answered with `err <reason>` and never reach the
//! interpreter.

use std::fmt;
use std::io::{self, BufRead, Write};

use atrox_common::consts::MOVE_ARG_COUNT;
use thiserror::Error;
use tracing::debug;

use crate::command::{
    ArgumentCountError, CommandCode, CommandInterpreter, CommandStatus, Execution, MoveArguments,
};

/// Fixed-capacity buffer for one argument line.
pub type ArgumentBuffer = heapless::Vec<f32, MOVE_ARG_COUNT>;

/// Error types for console input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsoleError {
    #[error("Missing address letter")]
    MissingAddress,

    #[error("Invalid address letter '{0}'")]
    InvalidAddress(char),

    #[error("Invalid command code '{0}'")]
    InvalidCode(String),

    #[error("Invalid argument '{0}'")]
    InvalidArgument(String),

    #[error("Argument '{0}' is not a finite number")]
    NonFiniteArgument(String),

    #[error("Too many arguments, expected {}", MOVE_ARG_COUNT)]
    TooManyArguments,

    #[error(transparent)]
    ArgumentCount(#[from] ArgumentCountError),
}

/// Split a command line such as `G291` or `m 17` into letter and code.
pub fn parse_code(line: &str) -> Result<(char, i32), ConsoleError> {
    let line = line.trim();
    let mut chars = line.chars();
    let address = chars.next().ok_or(ConsoleError::MissingAddress)?;
    if !address.is_ascii_alphabetic() {
        return Err(ConsoleError::InvalidAddress(address));
    }

    let code = chars.as_str().trim();
    let value = code
        .parse::<i32>()
        .map_err(|_| ConsoleError::InvalidCode(code.to_string()))?;
    Ok((address, value))
}

/// Parse ten whitespace- or comma-separated finite floats.
pub fn parse_arguments(line: &str) -> Result<MoveArguments, ConsoleError> {
    let mut values = ArgumentBuffer::new();
    for token in line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let value = token
            .parse::<f32>()
            .map_err(|_| ConsoleError::InvalidArgument(token.to_string()))?;
        if !value.is_finite() {
            return Err(ConsoleError::NonFiniteArgument(token.to_string()));
        }
        values
            .push(value)
            .map_err(|_| ConsoleError::TooManyArguments)?;
    }
    Ok(MoveArguments::try_from(values.as_slice())?)
}

/// One response line.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Status(CommandStatus),
    Done(CommandCode),
    Moved { code: CommandCode, steps: i32 },
    Idle,
    Error(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(status @ CommandStatus::Complete) => write!(f, "ok {}", status.code()),
            Self::Status(status @ CommandStatus::NeedsArgs) => write!(f, "args {}", status.code()),
            Self::Status(status @ CommandStatus::Rejected) => write!(f, "err {}", status.code()),
            Self::Done(code) => write!(f, "done {code}"),
            Self::Moved { code, steps } => write!(f, "done {code} {steps}"),
            Self::Idle => f.write_str("idle"),
            Self::Error(reason) => write!(f, "err {reason}"),
        }
    }
}

/// Console session wrapping an interpreter.
pub struct Console {
    interpreter: CommandInterpreter,
    awaiting_arguments: bool,
}

impl Console {
    pub fn new(interpreter: CommandInterpreter) -> Self {
        Self {
            interpreter,
            awaiting_arguments: false,
        }
    }

    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    /// True after `args 2` until an argument line is accepted.
    pub fn awaiting_arguments(&self) -> bool {
        self.awaiting_arguments
    }

    /// Handle one input line and return the replies to print.
    pub fn handle_line(&mut self, line: &str) -> Vec<Reply> {
        let line = line.trim();
        if line.starts_with(';') {
            return Vec::new();
        }

        // A new command abandons an argument request.
        let starts_command = line.chars().next().is_some_and(|c| c.is_ascii_alphabetic());

        if self.awaiting_arguments && !starts_command {
            return match parse_arguments(line) {
                Ok(args) => {
                    self.awaiting_arguments = false;
                    self.interpreter.load_move_arguments(args);
                    vec![self.execute()]
                }
                Err(e) => vec![Reply::Error(e.to_string())],
            };
        }

        if line.is_empty() {
            debug!("Replaying last command");
            return vec![self.execute()];
        }

        let (address, value) = match parse_code(line) {
            Ok(parsed) => parsed,
            Err(e) => return vec![Reply::Error(e.to_string())],
        };

        let status = self.interpreter.command_init(address, value);
        self.awaiting_arguments = status == CommandStatus::NeedsArgs;
        match status {
            CommandStatus::Complete => vec![Reply::Status(status), self.execute()],
            _ => vec![Reply::Status(status)],
        }
    }

    /// Read lines until EOF, writing one reply per line of output.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            for reply in self.handle_line(&line?) {
                writeln!(output, "{reply}")?;
            }
            output.flush()?;
        }
        Ok(())
    }

    fn execute(&mut self) -> Reply {
        match self.interpreter.execute() {
            Ok(Execution::Applied(code)) => Reply::Done(code),
            Ok(Execution::Moved(code, report)) => Reply::Moved {
                code,
                steps: report.steps,
            },
            Ok(Execution::Idle) => Reply::Idle,
            Err(e) => Reply::Error(e.to_string()),
        }
    }
}
