//! Single-zone thermostat state machine.
//!
//! Four fields move together: current temperature, target temperature,
//! operating mode and fan speed.  Every mutation goes through one of the
//! guarded operations below; a call whose guard fails leaves the state
//! untouched and reports why through [`Outcome`].
//!
//! ```text
//!            set_target(t > current)
//!   ┌──────┐ ───────────────────────▶ ┌─────────┐
//!   │      │                          │ HEATING │──increase_temp──┐
//!   │ IDLE │ ◀──── current == target ─┴─────────┘ ◀──────────────┘
//!   │      │ ◀──── current == target ─┬─────────┐ ◀──────────────┐
//!   │      │ ───────────────────────▶ │ COOLING │──decrease_temp──┘
//!   └──────┘  set_target(t < current) └─────────┘
//! ```
//!
//! | Mode    | Fan on entry | Fan while stepping | Step operation  |
//! |---------|--------------|--------------------|-----------------|
//! | Idle    | Low          | n/a                | none            |
//! | Heating | High         | Medium             | `increase_temp` |
//! | Cooling | High         | Medium             | `decrease_temp` |

pub mod states;

use core::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use states::descriptor;

/// Lowest accepted target temperature (degrees).
pub const TARGET_MIN: i32 = 16;
/// Highest accepted target temperature (degrees).
pub const TARGET_MAX: i32 = 30;
/// Current temperature after [`ThermostatState::initialize`].
pub const DEFAULT_CURRENT: i32 = 20;
/// Target temperature after [`ThermostatState::initialize`].
pub const DEFAULT_TARGET: i32 = 22;

// ---------------------------------------------------------------------------
// Mode / fan speed
// ---------------------------------------------------------------------------

/// Thermal-control intent.
/// Must stay in sync with the table built in [`states::MODE_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Mode {
    Idle = 0,
    Heating = 1,
    Cooling = 2,
}

impl Mode {
    /// Total number of modes — used to size the descriptor table.
    pub const COUNT: usize = 3;

    /// Convert an index back to `Mode`.  Panics on out-of-range in debug
    /// builds; returns `Idle` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Idle,
            1 => Self::Heating,
            2 => Self::Cooling,
            _ => {
                debug_assert!(false, "invalid mode index: {idx}");
                Self::Idle
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Heating => "Heating",
            Self::Cooling => "Cooling",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Blower intensity.  Never set directly by a caller; derived from the mode
/// and how close the current temperature is to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FanSpeed {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl FanSpeed {
    pub const COUNT: usize = 3;

    /// Convert an index back to `FanSpeed`.  Out-of-range maps to `Low`.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Low,
            1 => Self::Medium,
            2 => Self::High,
            _ => {
                debug_assert!(false, "invalid fan speed index: {idx}");
                Self::Low
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Operation outcome
// ---------------------------------------------------------------------------

/// What an operation did.  Purely informational: an ignored call has already
/// left the state unchanged by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Applied,
    Ignored(Rejection),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Why a guarded operation was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rejection {
    /// Requested target outside `[TARGET_MIN, TARGET_MAX]`.
    TargetOutOfRange,
    /// Requested target equals the current target.
    TargetUnchanged,
    /// The current mode does not allow this step.
    ModeMismatch,
    /// Already at (or past) the target in the step direction.
    AtTarget,
    /// Reconcile requested while current and target differ.
    NotAtTarget,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetOutOfRange => write!(f, "target outside {TARGET_MIN}..={TARGET_MAX}"),
            Self::TargetUnchanged => write!(f, "target unchanged"),
            Self::ModeMismatch => write!(f, "mode does not allow this step"),
            Self::AtTarget => write!(f, "already at target"),
            Self::NotAtTarget => write!(f, "current differs from target"),
        }
    }
}

// ---------------------------------------------------------------------------
// ThermostatState
// ---------------------------------------------------------------------------

/// The thermostat record.  Fields are private so the target range can only
/// be changed through [`set_target`](Self::set_target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThermostatState {
    current_temp: i32,
    target_temp: i32,
    mode: Mode,
    fan_speed: FanSpeed,
}

impl Default for ThermostatState {
    fn default() -> Self {
        Self::initialize()
    }
}

impl ThermostatState {
    /// Fixed power-on state: 20° current, 22° target, Idle, Low.
    ///
    /// Current and target deliberately differ while the mode is Idle; the
    /// machine only starts heating once a new target is set.
    pub fn initialize() -> Self {
        Self {
            current_temp: DEFAULT_CURRENT,
            target_temp: DEFAULT_TARGET,
            mode: Mode::Idle,
            fan_speed: FanSpeed::Low,
        }
    }

    /// Rebuild a state from externally supplied parts.
    ///
    /// Only the target range is checked.  Mode and fan speed are taken as
    /// given; [`reconcile_if_equal`](Self::reconcile_if_equal) repairs an
    /// "at target but not idle" record.
    pub fn restore(current_temp: i32, target_temp: i32, mode: Mode, fan_speed: FanSpeed) -> Result<Self> {
        if !target_in_range(target_temp) {
            return Err(Error::InvalidState("target temperature outside 16..=30"));
        }
        Ok(Self {
            current_temp,
            target_temp,
            mode,
            fan_speed,
        })
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn current_temp(&self) -> i32 {
        self.current_temp
    }

    pub fn target_temp(&self) -> i32 {
        self.target_temp
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn fan_speed(&self) -> FanSpeed {
        self.fan_speed
    }

    pub fn is_at_target(&self) -> bool {
        self.current_temp == self.target_temp
    }

    /// Point-in-time copy of all four fields.  Later operations on `self`
    /// do not affect the returned value.
    pub fn snapshot(&self) -> Self {
        *self
    }

    // ── Operations ────────────────────────────────────────────

    /// Request a new setpoint.
    ///
    /// Out-of-range and unchanged targets are ignored, never clamped.  On
    /// success the mode is derived from the new target against the
    /// *current* temperature, and the fan takes that mode's entry speed.
    pub fn set_target(&mut self, new_target: i32) -> Outcome {
        if !target_in_range(new_target) {
            debug!("set_target({new_target}) ignored: out of range");
            return Outcome::Ignored(Rejection::TargetOutOfRange);
        }
        if new_target == self.target_temp {
            debug!("set_target({new_target}) ignored: unchanged");
            return Outcome::Ignored(Rejection::TargetUnchanged);
        }

        self.target_temp = new_target;
        let mode = match new_target.cmp(&self.current_temp) {
            core::cmp::Ordering::Greater => Mode::Heating,
            core::cmp::Ordering::Less => Mode::Cooling,
            core::cmp::Ordering::Equal => Mode::Idle,
        };
        self.enter(mode);
        debug!(
            "set_target({new_target}): current={} -> {} / fan {}",
            self.current_temp, self.mode, self.fan_speed
        );
        Outcome::Applied
    }

    /// Advance one degree while heating.
    pub fn increase_temp(&mut self) -> Outcome {
        if self.mode != Mode::Heating {
            return Outcome::Ignored(Rejection::ModeMismatch);
        }
        if self.current_temp >= self.target_temp {
            return Outcome::Ignored(Rejection::AtTarget);
        }
        self.current_temp += 1;
        self.after_step();
        Outcome::Applied
    }

    /// Retreat one degree while cooling.
    pub fn decrease_temp(&mut self) -> Outcome {
        if self.mode != Mode::Cooling {
            return Outcome::Ignored(Rejection::ModeMismatch);
        }
        if self.current_temp <= self.target_temp {
            return Outcome::Ignored(Rejection::AtTarget);
        }
        self.current_temp -= 1;
        self.after_step();
        Outcome::Applied
    }

    /// Take the single step the current mode calls for (increase while
    /// heating, decrease while cooling).  Idle has no step.
    pub fn step_toward_target(&mut self) -> Outcome {
        match descriptor(self.mode).step {
            Some(step) => step(self),
            None => Outcome::Ignored(Rejection::ModeMismatch),
        }
    }

    /// Force Idle/Low when current already equals target.
    pub fn reconcile_if_equal(&mut self) -> Outcome {
        if !self.is_at_target() {
            return Outcome::Ignored(Rejection::NotAtTarget);
        }
        self.enter(Mode::Idle);
        Outcome::Applied
    }

    // ── Internal ──────────────────────────────────────────────

    fn enter(&mut self, mode: Mode) {
        self.mode = mode;
        self.fan_speed = descriptor(mode).entry_fan;
    }

    fn after_step(&mut self) {
        if self.is_at_target() {
            self.enter(Mode::Idle);
        } else if let Some(fan) = descriptor(self.mode).stepping_fan {
            self.fan_speed = fan;
        }
    }
}

fn target_in_range(t: i32) -> bool {
    (TARGET_MIN..=TARGET_MAX).contains(&t)
}
