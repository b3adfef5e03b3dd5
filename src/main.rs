//! Thermostat host driver — Main Entry Point
//!
//! Plays the part of the external collaborators around the state machine:
//! a user-input handler (commands from the command line) and a timer that
//! steps the temperature once per control tick.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI commands ──▶ queue ──▶ AppService ──▶ SimulatedHvac   │
//! │                               │                            │
//! │                               └──▶ LogEventSink / JSON     │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::info;

use thermostat::adapters::config_store::{JsonFileConfig, MemoryConfigStore};
use thermostat::adapters::json_sink::JsonLineSink;
use thermostat::adapters::log_sink::LogEventSink;
use thermostat::adapters::sim::SimulatedHvac;
use thermostat::app::commands::AppCommand;
use thermostat::app::ports::{ConfigPort, EventSink};
use thermostat::app::service::{AppService, COMMAND_QUEUE_CAP};
use thermostat::config::SystemConfig;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON driver configuration (built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks, overriding the config (0 = run forever)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Print events as JSON lines on stdout instead of logging them
    #[arg(long)]
    json: bool,

    /// Commands applied on the first tick: target=<t>, up, down, step, reconcile, reset
    commands: Vec<String>,
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    info!("Thermostat v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config ─────────────────────────────────────────────
    let mut config = load_config(cli.config.as_ref())?;
    if let Some(ticks) = cli.ticks {
        config.max_ticks = ticks;
    }

    // ── 3. Commands ───────────────────────────────────────────
    let commands = cli
        .commands
        .iter()
        .map(|c| {
            c.parse::<AppCommand>()
                .with_context(|| format!("invalid command '{c}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    ensure!(
        commands.len() <= COMMAND_QUEUE_CAP,
        "at most {} commands can be queued, got {}",
        COMMAND_QUEUE_CAP,
        commands.len()
    );

    // ── 4. Service + adapters ─────────────────────────────────
    let mut app = AppService::new(config);
    for cmd in commands {
        app.enqueue(cmd);
    }
    let mut hvac = SimulatedHvac::new();

    if cli.json {
        let mut sink = JsonLineSink::new(std::io::stdout().lock());
        run(&mut app, &mut hvac, &mut sink);
    } else {
        let mut sink = LogEventSink::new();
        run(&mut app, &mut hvac, &mut sink);
    }

    info!(
        "Stopped after {} ticks ({} actuator writes)",
        app.tick_count(),
        hvac.writes()
    );
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<SystemConfig> {
    let loaded = match path {
        Some(p) => JsonFileConfig::new(p)
            .load()
            .map_err(thermostat::Error::from)
            .with_context(|| format!("loading {}", p.display()))?,
        None => MemoryConfigStore::new()
            .load()
            .map_err(thermostat::Error::from)?,
    };
    Ok(loaded)
}

// ── Control loop ──────────────────────────────────────────────

fn run(app: &mut AppService, hvac: &mut SimulatedHvac, sink: &mut impl EventSink) {
    let interval = Duration::from_millis(u64::from(app.config().control_loop_interval_ms));
    let max_ticks = app.config().max_ticks;

    app.start(hvac, sink);
    loop {
        app.tick(hvac, sink);
        if max_ticks != 0 && app.tick_count() >= max_ticks {
            break;
        }
        thread::sleep(interval);
    }
}
