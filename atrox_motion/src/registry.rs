//! Axis registry.
//!
//! Single source of truth for per-axis static parameters, kinematic limits
//! and cruise speed. Owns one stepper driver per axis.
//!
//! Configuration is write-once per boot: an axis may be configured again
//! only with identical static parameters, which is a no-op.

use atrox_common::axis::{AxisConfig, AxisId, AxisMask, MotorTable};
use atrox_common::config::ConfigError;
use atrox_common::consts::AXIS_COUNT;
use atrox_common::driver::StepperDriver;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error types for registry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Configuration values out of range.
    #[error("Invalid axis configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Axis reconfigured with different static parameters.
    #[error("Axis {axis}: {field} already configured as {existing}, refusing {requested}")]
    Conflict {
        axis: AxisId,
        field: &'static str,
        existing: u32,
        requested: u32,
    },

    /// Axis has no configuration installed.
    #[error("Axis {0} is not configured")]
    NotConfigured(AxisId),

    /// Cruise speed not a finite, non-negative number.
    #[error("Axis {axis}: invalid cruise speed {speed}")]
    InvalidSpeed { axis: AxisId, speed: f32 },
}

struct AxisSlot {
    config: Option<AxisConfig>,
    driver: Box<dyn StepperDriver>,
}

/// Per-axis configuration and driver ownership.
pub struct AxisRegistry {
    slots: [AxisSlot; AXIS_COUNT],
    configured: AxisMask,
}

impl AxisRegistry {
    /// Create a registry with one driver per axis and no configuration.
    pub fn new(mut make_driver: impl FnMut(AxisId) -> Box<dyn StepperDriver>) -> Self {
        Self {
            slots: AxisId::ALL.map(|axis| AxisSlot {
                config: None,
                driver: make_driver(axis),
            }),
            configured: AxisMask::empty(),
        }
    }

    /// Create a registry and configure every axis from the startup motor table.
    ///
    /// Row `i` configures `AxisId::ALL[i]`.
    ///
    /// # Errors
    /// Returns `RegistryError::InvalidConfig` on the first row that fails validation.
    pub fn from_table(
        table: &MotorTable,
        make_driver: impl FnMut(AxisId) -> Box<dyn StepperDriver>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(make_driver);
        for axis in AxisId::ALL {
            let config = AxisConfig::from_row(axis, &table[axis.index()])?;
            registry.configure(axis, config)?;
        }
        Ok(registry)
    }

    /// Install the configuration for `axis`.
    ///
    /// Forwards the speed limit to the axis driver.
    ///
    /// # Errors
    /// - `InvalidConfig` if `config` fails validation
    /// - `Conflict` if the axis is already configured with different static parameters
    pub fn configure(&mut self, axis: AxisId, config: AxisConfig) -> Result<(), RegistryError> {
        config.validate(axis)?;

        let slot = &mut self.slots[axis.index()];
        if let Some(existing) = &slot.config {
            if let Some((field, existing, requested)) = existing.static_conflict(&config) {
                return Err(RegistryError::Conflict {
                    axis,
                    field,
                    existing,
                    requested,
                });
            }
            debug!("Axis {} already configured, keeping existing limits", axis);
            return Ok(());
        }

        slot.driver.set_max_speed(config.max_speed);
        slot.config = Some(config);
        self.configured |= AxisMask::from(axis);

        info!(
            "Axis {} configured: {} steps/rev x{} microstep, gearbox {}:{}, \
             max {} steps/s, {} steps/s²",
            axis,
            config.steps_per_revolution,
            config.microstep_factor,
            config.gearbox_reduction,
            config.gearbox_increase,
            config.max_speed,
            config.max_acceleration
        );
        Ok(())
    }

    #[inline]
    pub fn is_configured(&self, axis: AxisId) -> bool {
        self.configured.has(axis)
    }

    /// All six axes configured; motion may be accepted.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.configured == AxisMask::all()
    }

    /// Set of configured axes.
    #[inline]
    pub fn configured(&self) -> AxisMask {
        self.configured
    }

    pub fn get(&self, axis: AxisId) -> Result<&AxisConfig, RegistryError> {
        self.slots[axis.index()]
            .config
            .as_ref()
            .ok_or(RegistryError::NotConfigured(axis))
    }

    pub fn get_mut(&mut self, axis: AxisId) -> Result<&mut AxisConfig, RegistryError> {
        self.slots[axis.index()]
            .config
            .as_mut()
            .ok_or(RegistryError::NotConfigured(axis))
    }

    /// Override the cruise speed of `axis`, clamped to its `max_speed`.
    ///
    /// Returns the speed actually stored.
    pub fn set_cruise_speed(&mut self, axis: AxisId, speed: f32) -> Result<f32, RegistryError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(RegistryError::InvalidSpeed { axis, speed });
        }

        let config = self.get_mut(axis)?;
        let applied = if speed > config.max_speed {
            warn!(
                "Axis {}: cruise speed {} clamped to max {}",
                axis, speed, config.max_speed
            );
            config.max_speed
        } else {
            speed
        };
        config.cruise_speed = applied;
        Ok(applied)
    }

    /// Forward an enable/disable request to the axis driver.
    pub fn set_driver_enabled(&mut self, axis: AxisId, enabled: bool) {
        self.slots[axis.index()].driver.set_enabled(enabled);
    }

    /// Read access to the axis driver.
    pub fn driver(&self, axis: AxisId) -> &dyn StepperDriver {
        self.slots[axis.index()].driver.as_ref()
    }

    /// Configuration and driver of `axis`, borrowed together.
    pub(crate) fn axis_mut(
        &mut self,
        axis: AxisId,
    ) -> Result<(&AxisConfig, &mut dyn StepperDriver), RegistryError> {
        let slot = &mut self.slots[axis.index()];
        let config = slot
            .config
            .as_ref()
            .ok_or(RegistryError::NotConfigured(axis))?;
        Ok((config, slot.driver.as_mut()))
    }
}
