//! Simulation driver module.
//!
//! Software stepper for development and testing without physical hardware.

mod stepper;

pub use stepper::SimulatedStepper;

use atrox_common::axis::{AxisId, StepperPins};
use atrox_common::driver::StepperDriver;

/// Factory function to create a simulated stepper for one axis.
pub fn create_driver(axis: AxisId, pins: StepperPins) -> Box<dyn StepperDriver> {
    Box::new(SimulatedStepper::new(axis, pins))
}
