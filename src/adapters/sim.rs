//! Simulated HVAC output stage.
//!
//! Stands in for the relay / PWM drivers on the host.  Only changes are
//! logged; repeated writes of the same value are counted but silent.

use log::info;

use crate::app::ports::ActuatorPort;
use crate::fsm::{FanSpeed, Mode};

/// Heater / cooler relays and blower, simulated.
#[derive(Debug)]
pub struct SimulatedHvac {
    mode: Mode,
    fan: FanSpeed,
    writes: u64,
}

impl Default for SimulatedHvac {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedHvac {
    /// Both stages off, blower low.
    pub fn new() -> Self {
        Self {
            mode: Mode::Idle,
            fan: FanSpeed::Low,
            writes: 0,
        }
    }

    pub fn heater_on(&self) -> bool {
        self.mode == Mode::Heating
    }

    pub fn cooler_on(&self) -> bool {
        self.mode == Mode::Cooling
    }

    pub fn fan(&self) -> FanSpeed {
        self.fan
    }

    /// Total actuator writes, including unchanged ones.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl ActuatorPort for SimulatedHvac {
    fn set_mode(&mut self, mode: Mode) {
        self.writes += 1;
        if mode != self.mode {
            info!(
                "HVAC: heater={} cooler={}",
                if mode == Mode::Heating { "ON" } else { "off" },
                if mode == Mode::Cooling { "ON" } else { "off" },
            );
            self.mode = mode;
        }
    }

    fn set_fan(&mut self, speed: FanSpeed) {
        self.writes += 1;
        if speed != self.fan {
            info!("HVAC: blower {}", speed);
            self.fan = speed;
        }
    }
}
