//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real relays or fan PWM.

use thermostat::app::events::AppEvent;
use thermostat::app::ports::{ActuatorPort, EventSink};
use thermostat::fsm::{FanSpeed, Mode};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorCall {
    SetMode(Mode),
    SetFan(FanSpeed),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn last_mode(&self) -> Option<Mode> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetMode(m) => Some(*m),
            ActuatorCall::SetFan(_) => None,
        })
    }

    pub fn last_fan(&self) -> Option<FanSpeed> {
        self.calls.iter().rev().find_map(|c| match c {
            ActuatorCall::SetFan(f) => Some(*f),
            ActuatorCall::SetMode(_) => None,
        })
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn set_mode(&mut self, mode: Mode) {
        self.calls.push(ActuatorCall::SetMode(mode));
    }

    fn set_fan(&mut self, speed: FanSpeed) {
        self.calls.push(ActuatorCall::SetFan(speed));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn fan_changes(&self) -> Vec<FanSpeed> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::FanSpeedChanged { to, .. } => Some(*to),
                _ => None,
            })
            .collect()
    }

    pub fn ignored_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::CommandIgnored { .. }))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
