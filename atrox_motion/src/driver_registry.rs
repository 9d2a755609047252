//! Driver registry for stepper driver backends.
//!
//! Provides a `DriverRegistry` struct for registering and retrieving driver
//! factories by backend name. Constructor-injected, no global state.

use atrox_common::axis::{AxisId, StepperPins};
use atrox_common::driver::{DriverError, DriverFactory, StepperDriver};
use std::collections::HashMap;

use crate::drivers::register_all_drivers;

/// Registry of available driver backends.
pub struct DriverRegistry {
    factories: HashMap<&'static str, DriverFactory>,
}

impl DriverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in driver.
    pub fn with_builtin_drivers() -> Self {
        let mut registry = Self::new();
        register_all_drivers(&mut registry);
        registry
    }

    /// Register a driver factory.
    ///
    /// # Panics
    /// Panics if a driver with the same name is already registered.
    pub fn register(&mut self, name: &'static str, factory: DriverFactory) {
        if self.factories.contains_key(name) {
            panic!("Driver '{name}' is already registered");
        }
        self.factories.insert(name, factory);
    }

    /// Get a driver factory by name.
    ///
    /// # Errors
    /// Returns `DriverError::NotFound` if no driver with the given name is registered.
    pub fn factory(&self, name: &str) -> Result<DriverFactory, DriverError> {
        self.factories
            .get(name)
            .copied()
            .ok_or_else(|| DriverError::NotFound(name.to_string()))
    }

    /// Create a driver instance for one axis.
    pub fn create_driver(
        &self,
        name: &str,
        axis: AxisId,
        pins: StepperPins,
    ) -> Result<Box<dyn StepperDriver>, DriverError> {
        Ok(self.factory(name)?(axis, pins))
    }

    /// List all registered driver names, sorted.
    pub fn list_drivers(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
