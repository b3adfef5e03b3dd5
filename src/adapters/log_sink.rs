//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events through
//! the `log` facade.  [`JsonLineSink`](super::json_sink::JsonLineSink)
//! implements the same trait for machine-readable output.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(s) => {
                info!(
                    "START | current={}\u{00b0} target={}\u{00b0} mode={} fan={}",
                    s.current_temp(),
                    s.target_temp(),
                    s.mode(),
                    s.fan_speed()
                );
            }
            AppEvent::TargetChanged { from, to } => {
                info!("TARGET | {}\u{00b0} -> {}\u{00b0}", from, to);
            }
            AppEvent::TemperatureStepped { from, to } => {
                info!("TEMP | {}\u{00b0} -> {}\u{00b0}", from, to);
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {} -> {}", from, to);
            }
            AppEvent::FanSpeedChanged { from, to } => {
                info!("FAN | {} -> {}", from, to);
            }
            AppEvent::CommandIgnored { command, reason } => {
                debug!("IGNORED | {:?}: {}", command, reason);
            }
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | tick={} | T={}\u{00b0}/{}\u{00b0} | mode={} fan={} | at_target={} | queued={}",
                    t.tick,
                    t.current_temp,
                    t.target_temp,
                    t.mode,
                    t.fan_speed,
                    t.at_target,
                    t.queued_commands,
                );
            }
        }
    }
}
