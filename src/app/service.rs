//! Application service — the hexagonal core.
//!
//! [`AppService`] is the single owner of the [`ThermostatState`].  Anything
//! that wants to change it (a UI handler setting a target, a sensor loop
//! stepping the temperature) either calls [`handle_command`] directly from
//! the owning task or [`enqueue`]s a command to be applied on the next
//! [`tick`].  That keeps exactly one writer without a lock.
//!
//! ```text
//!  commands ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!               │        AppService        │
//!               │  queue · ThermostatState │ ──▶ ActuatorPort
//!               └──────────────────────────┘
//! ```
//!
//! [`handle_command`]: AppService::handle_command
//! [`enqueue`]: AppService::enqueue
//! [`tick`]: AppService::tick

use heapless::Deque;
use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::fsm::{Outcome, ThermostatState};

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink};

/// Maximum number of commands waiting for the next tick.
pub const COMMAND_QUEUE_CAP: usize = 16;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates the state machine.
pub struct AppService {
    state: ThermostatState,
    config: SystemConfig,
    queue: Deque<AppCommand, COMMAND_QUEUE_CAP>,
    tick_count: u64,
}

impl AppService {
    /// Construct the service in the power-on state.
    ///
    /// Does **not** drive the actuators — call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            state: ThermostatState::initialize(),
            config,
            queue: Deque::new(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Push the initial mode and fan speed out and announce the start.
    ///
    /// The power-on state is left as is (Idle with current ≠ target); it is
    /// not reconciled here.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.apply_actuators(hw);
        sink.emit(&AppEvent::Started(self.state.snapshot()));
        info!(
            "AppService started: current={} target={} mode={} fan={}",
            self.state.current_temp(),
            self.state.target_temp(),
            self.state.mode(),
            self.state.fan_speed()
        );
    }

    // ── Command intake ────────────────────────────────────────

    /// Queue a command for the next tick.
    /// Returns `false` if the queue is full (command dropped).
    pub fn enqueue(&mut self, cmd: AppCommand) -> bool {
        match self.queue.push_back(cmd) {
            Ok(()) => true,
            Err(dropped) => {
                warn!("Command queue full, dropping {:?}", dropped);
                false
            }
        }
    }

    /// Apply one command immediately.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> Outcome {
        let before = self.state;
        let outcome = match cmd {
            AppCommand::SetTarget(t) => self.state.set_target(t),
            AppCommand::IncreaseTemp => self.state.increase_temp(),
            AppCommand::DecreaseTemp => self.state.decrease_temp(),
            AppCommand::Step => self.state.step_toward_target(),
            AppCommand::Reconcile => self.state.reconcile_if_equal(),
            AppCommand::Reset => {
                self.state = ThermostatState::initialize();
                Outcome::Applied
            }
        };

        match outcome {
            Outcome::Applied => {
                emit_changes(&before, &self.state, sink);
                self.apply_actuators(hw);
            }
            Outcome::Ignored(reason) => {
                debug!("{:?} ignored: {}", cmd, reason);
                sink.emit(&AppEvent::CommandIgnored {
                    command: cmd,
                    reason,
                });
            }
        }
        outcome
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control cycle: drain queued commands → step or reconcile →
    /// actuators → telemetry.
    pub fn tick(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.tick_count += 1;

        // 1. Queued commands, FIFO
        while let Some(cmd) = self.queue.pop_front() {
            self.handle_command(cmd, hw, sink);
        }

        // 2. One degree toward the target; otherwise catch up on equality
        if self.config.auto_step {
            let before = self.state;
            if !self.state.step_toward_target().is_applied() {
                self.state.reconcile_if_equal();
            }
            emit_changes(&before, &self.state, sink);
        }

        // 3. Actuators
        self.apply_actuators(hw);

        // 4. Telemetry (interval 0 disables it)
        let interval = u64::from(self.config.telemetry_interval_ticks);
        if self.tick_count.checked_rem(interval) == Some(0) {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current state.
    pub fn build_telemetry(&self) -> TelemetryData {
        let snap = self.state.snapshot();
        TelemetryData {
            tick: self.tick_count,
            current_temp: snap.current_temp(),
            target_temp: snap.target_temp(),
            mode: snap.mode(),
            fan_speed: snap.fan_speed(),
            at_target: snap.is_at_target(),
            queued_commands: self.queue.len(),
        }
    }

    pub fn state(&self) -> ThermostatState {
        self.state.snapshot()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Commands waiting for the next tick.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_actuators(&self, hw: &mut impl ActuatorPort) {
        hw.set_mode(self.state.mode());
        hw.set_fan(self.state.fan_speed());
    }
}

/// Emit one event per field that differs between `before` and `after`.
fn emit_changes(before: &ThermostatState, after: &ThermostatState, sink: &mut impl EventSink) {
    if before.target_temp() != after.target_temp() {
        sink.emit(&AppEvent::TargetChanged {
            from: before.target_temp(),
            to: after.target_temp(),
        });
    }
    if before.current_temp() != after.current_temp() {
        sink.emit(&AppEvent::TemperatureStepped {
            from: before.current_temp(),
            to: after.current_temp(),
        });
    }
    if before.mode() != after.mode() {
        sink.emit(&AppEvent::ModeChanged {
            from: before.mode(),
            to: after.mode(),
        });
    }
    if before.fan_speed() != after.fan_speed() {
        sink.emit(&AppEvent::FanSpeedChanged {
            from: before.fan_speed(),
            to: after.fan_speed(),
        });
    }
}
