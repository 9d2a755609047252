//! Atrox Common Library
//!
//! Shared axis types, the stepper driver contract and configuration loading
//! for the Atrox motion platform crates.
//!
//! # Module Structure
//!
//! - [`axis`] - Axis identifiers, masks, per-axis configuration and pin wiring
//! - [`motion`] - Per-command statics/dynamics payloads
//! - [`mode`] - Process-wide positioning and unit modes
//! - [`driver`] - Stepper driver collaborator trait and error types
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - Platform constants
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use atrox_common::prelude::*;
//!
//! let config = AxisConfig::new(200, 16, 1, 1, 1000.0, 500.0);
//! assert_eq!(config.cruise_speed, config.max_speed);
//! assert_eq!(AxisId::P.letter(), 'P');
//! ```

pub mod axis;
pub mod config;
pub mod consts;
pub mod driver;
pub mod mode;
pub mod motion;
pub mod prelude;
