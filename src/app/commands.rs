//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (a user-input
//! handler, a sensor-sampling loop, the host CLI) that the
//! [`AppService`](super::service::AppService) applies to the state machine.

use core::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppCommand {
    /// Request a new target temperature.
    SetTarget(i32),
    /// One heating step.
    IncreaseTemp,
    /// One cooling step.
    DecreaseTemp,
    /// One step in whichever direction the current mode calls for.
    Step,
    /// Force Idle/Low if current already equals target.
    Reconcile,
    /// Return to the power-on defaults.
    Reset,
}

/// Parses the host CLI spelling: `target=<t>`, `up`, `down`, `step`,
/// `reconcile`, `reset`.
impl FromStr for AppCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(value) = s.strip_prefix("target=") {
            return value
                .trim()
                .parse::<i32>()
                .map(Self::SetTarget)
                .map_err(|_| Error::Command("target expects an integer"));
        }
        match s {
            "up" => Ok(Self::IncreaseTemp),
            "down" => Ok(Self::DecreaseTemp),
            "step" => Ok(Self::Step),
            "reconcile" => Ok(Self::Reconcile),
            "reset" => Ok(Self::Reset),
            _ => Err(Error::Command("unknown command")),
        }
    }
}
