//! Process-wide operating modes.
//!
//! `SystemMode` is an explicit context object: the motion controller owns it,
//! the command interpreter mutates it through the controller.

use serde::{Deserialize, Serialize};

/// Interpretation of positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PositioningMode {
    Absolute,
    #[default]
    Relative,
}

/// Unit of linear axis arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinearUnit {
    #[default]
    Millimeter,
    Inch,
}

/// Unit of rotational axis arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AngularUnit {
    #[default]
    Step,
    Degree,
}

/// Active positioning mode and units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SystemMode {
    pub positioning: PositioningMode,
    pub linear_unit: LinearUnit,
    pub angular_unit: AngularUnit,
}
