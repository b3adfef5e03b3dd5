//! Per-mode descriptor table.
//!
//! Each mode is one row of plain data plus an optional `fn` pointer for its
//! step operation — no closures, no dynamic dispatch, no heap.  The
//! operations in [`super`] look up fan speeds and the step handler here
//! rather than matching on the mode themselves.

use super::{FanSpeed, Mode, Outcome, ThermostatState};

/// Signature of a single-degree step toward the target.
pub type StepFn = fn(&mut ThermostatState) -> Outcome;

/// Static descriptor for a single mode.
pub struct ModeDescriptor {
    pub mode: Mode,
    /// Fan speed on entering this mode.
    pub entry_fan: FanSpeed,
    /// Fan speed after a step that has not yet reached the target.
    pub stepping_fan: Option<FanSpeed>,
    /// Step taken by `step_toward_target` in this mode.
    pub step: Option<StepFn>,
}

/// Indexed by `Mode as usize`.
pub static MODE_TABLE: [ModeDescriptor; Mode::COUNT] = [
    // Index 0 — Idle
    ModeDescriptor {
        mode: Mode::Idle,
        entry_fan: FanSpeed::Low,
        stepping_fan: None,
        step: None,
    },
    // Index 1 — Heating
    ModeDescriptor {
        mode: Mode::Heating,
        entry_fan: FanSpeed::High,
        stepping_fan: Some(FanSpeed::Medium),
        step: Some(ThermostatState::increase_temp),
    },
    // Index 2 — Cooling
    ModeDescriptor {
        mode: Mode::Cooling,
        entry_fan: FanSpeed::High,
        stepping_fan: Some(FanSpeed::Medium),
        step: Some(ThermostatState::decrease_temp),
    },
];

/// Row for `mode`.
pub fn descriptor(mode: Mode) -> &'static ModeDescriptor {
    &MODE_TABLE[mode as usize]
}
