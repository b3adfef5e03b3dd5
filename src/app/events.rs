//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — log them, print JSON lines, etc.

use serde::Serialize;

use super::commands::AppCommand;
use crate::fsm::{FanSpeed, Mode, Rejection, ThermostatState};

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AppEvent {
    /// The service has started (carries the power-on state).
    Started(ThermostatState),

    /// The target temperature changed.
    TargetChanged { from: i32, to: i32 },

    /// The current temperature moved one degree.
    TemperatureStepped { from: i32, to: i32 },

    /// The operating mode changed.
    ModeChanged { from: Mode, to: Mode },

    /// The fan speed changed.
    FanSpeedChanged { from: FanSpeed, to: FanSpeed },

    /// A command was a no-op.
    CommandIgnored {
        command: AppCommand,
        reason: Rejection,
    },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryData {
    pub tick: u64,
    pub current_temp: i32,
    pub target_temp: i32,
    pub mode: Mode,
    pub fan_speed: FanSpeed,
    pub at_target: bool,
    pub queued_commands: usize,
}
