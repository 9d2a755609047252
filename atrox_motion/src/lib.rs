//! # Atrox Motion Library
//!
//! Command interpreter and axis motion engine for the Atrox motion platform.
//!
//! Stepper drivers implement the `StepperDriver` trait defined in
//! `atrox_common::driver`.
//!
//! # Module Structure
//!
//! - [`registry`] - Per-axis configuration and driver ownership
//! - [`controller`] - Blocking single-axis motion with speed/acceleration gates
//! - [`command`] - Command table, pending command, interpreter
//! - [`console`] - Line-oriented text transport
//! - [`driver_registry`] - Driver factory registration
//! - [`drivers`] - Stepper driver implementations
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    atrox_motion                             │
//! │  ┌──────────┐   ┌────────────────────┐   ┌───────────────┐  │
//! │  │ Console  │──►│ CommandInterpreter │──►│ MotionControl │  │
//! │  └──────────┘   │  (COMMAND_TABLE)   │   │ (SystemMode)  │  │
//! │                 └────────────────────┘   └───────┬───────┘  │
//! │                                                  ▼          │
//! │                                          ┌───────────────┐  │
//! │                                          │ AxisRegistry  │  │
//! │                                          └───────┬───────┘  │
//! │                                                  ▼          │
//! │                                          ┌───────────────┐  │
//! │                                          │ StepperDriver │  │
//! │                                          │ (trait object)│  │
//! │                                          └───────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod command;
pub mod console;
pub mod controller;
pub mod driver_registry;
pub mod drivers;
pub mod registry;

// Re-export key types for convenience
pub use crate::command::{CommandInterpreter, CommandStatus, Execution, InterpreterError};
pub use crate::console::{Console, Reply};
pub use crate::controller::{MotionController, MotionError, MoveReport};
pub use crate::driver_registry::DriverRegistry;
pub use crate::registry::{AxisRegistry, RegistryError};
