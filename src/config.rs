//! Driver configuration parameters.
//!
//! Tunables for the loop that drives the state machine.  Thermostat
//! settings themselves (target temperature, mode) are not part of this and
//! always start from the fixed power-on defaults.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Core driver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Control loop interval (milliseconds). One tick = one temperature step.
    pub control_loop_interval_ms: u32,
    /// Emit a telemetry event every N ticks.
    pub telemetry_interval_ticks: u32,
    /// Step toward the target (or reconcile) on every tick.
    pub auto_step: bool,
    /// Stop the driver after this many ticks (0 = run forever).
    pub max_ticks: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            control_loop_interval_ms: 1000, // 1 Hz
            telemetry_interval_ticks: 5,
            auto_step: true,
            max_ticks: 0,
        }
    }
}

impl SystemConfig {
    /// Reject out-of-range values.  Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "control_loop_interval_ms must be > 0",
            ));
        }
        if self.telemetry_interval_ticks == 0 {
            return Err(ConfigError::ValidationFailed(
                "telemetry_interval_ticks must be > 0",
            ));
        }
        Ok(())
    }
}
