//! End-to-end scenarios through AppService → state machine → actuators.

use super::mock_hw::{MockHardware, RecordingSink};

use thermostat::app::commands::AppCommand;
use thermostat::app::events::AppEvent;
use thermostat::app::service::AppService;
use thermostat::config::SystemConfig;
use thermostat::fsm::{FanSpeed, Mode, Outcome, Rejection};

fn make_app(auto_step: bool) -> (AppService, MockHardware, RecordingSink) {
    let config = SystemConfig {
        auto_step,
        ..SystemConfig::default()
    };
    let mut app = AppService::new(config);
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

fn fields(app: &AppService) -> (i32, i32, Mode, FanSpeed) {
    let s = app.state();
    (s.current_temp(), s.target_temp(), s.mode(), s.fan_speed())
}

// ── Power-on defaults ─────────────────────────────────────────

#[test]
fn power_on_state_is_fixed() {
    let (app, hw, _sink) = make_app(false);
    assert_eq!(fields(&app), (20, 22, Mode::Idle, FanSpeed::Low));
    assert_eq!(hw.last_mode(), Some(Mode::Idle));
    assert_eq!(hw.last_fan(), Some(FanSpeed::Low));
}

#[test]
fn power_on_mismatch_survives_ticks() {
    // Idle with 20 != 22 is left alone: nothing steps and reconcile does not apply.
    let (mut app, mut hw, mut sink) = make_app(true);
    for _ in 0..10 {
        app.tick(&mut hw, &mut sink);
    }
    assert_eq!(fields(&app), (20, 22, Mode::Idle, FanSpeed::Low));
}

// ── Heating to 25 one command at a time ──────────────────────

#[test]
fn heat_to_25_with_explicit_steps() {
    let (mut app, mut hw, mut sink) = make_app(false);

    app.handle_command(AppCommand::SetTarget(25), &mut hw, &mut sink);
    assert_eq!(fields(&app), (20, 25, Mode::Heating, FanSpeed::High));
    assert_eq!(hw.last_fan(), Some(FanSpeed::High));

    for expected in 21..=24 {
        let outcome = app.handle_command(AppCommand::IncreaseTemp, &mut hw, &mut sink);
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(fields(&app), (expected, 25, Mode::Heating, FanSpeed::Medium));
    }

    app.handle_command(AppCommand::IncreaseTemp, &mut hw, &mut sink);
    assert_eq!(fields(&app), (25, 25, Mode::Idle, FanSpeed::Low));
    assert_eq!(hw.last_mode(), Some(Mode::Idle));
    assert_eq!(
        sink.fan_changes(),
        vec![FanSpeed::High, FanSpeed::Medium, FanSpeed::Low]
    );

    let outcome = app.handle_command(AppCommand::IncreaseTemp, &mut hw, &mut sink);
    assert_eq!(outcome, Outcome::Ignored(Rejection::ModeMismatch));
    assert_eq!(fields(&app), (25, 25, Mode::Idle, FanSpeed::Low));
}

#[test]
fn heat_to_25_with_ticks() {
    let (mut app, mut hw, mut sink) = make_app(true);
    assert!(app.enqueue(AppCommand::SetTarget(25)));

    // First tick applies the target and takes the first step.
    app.tick(&mut hw, &mut sink);
    assert_eq!(fields(&app), (21, 25, Mode::Heating, FanSpeed::Medium));

    for _ in 0..4 {
        app.tick(&mut hw, &mut sink);
    }
    assert_eq!(fields(&app), (25, 25, Mode::Idle, FanSpeed::Low));

    let stepped: Vec<(i32, i32)> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::TemperatureStepped { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(stepped, vec![(20, 21), (21, 22), (22, 23), (23, 24), (24, 25)]);
}

// ── Out-of-range target ───────────────────────────────────────

#[test]
fn target_15_is_ignored() {
    let (mut app, mut hw, mut sink) = make_app(false);
    let calls_before = hw.calls.len();
    let outcome = app.handle_command(AppCommand::SetTarget(15), &mut hw, &mut sink);
    assert_eq!(outcome, Outcome::Ignored(Rejection::TargetOutOfRange));
    assert_eq!(fields(&app), (20, 22, Mode::Idle, FanSpeed::Low));
    assert_eq!(hw.calls.len(), calls_before, "ignored command must not touch actuators");
    assert_eq!(sink.ignored_count(), 1);
}

// ── Target equal to current ───────────────────────────────────

#[test]
fn target_equal_to_current_idles_immediately() {
    let (mut app, mut hw, mut sink) = make_app(false);
    app.handle_command(AppCommand::SetTarget(20), &mut hw, &mut sink);
    assert_eq!(fields(&app), (20, 20, Mode::Idle, FanSpeed::Low));
    assert!(sink
        .events
        .contains(&AppEvent::TargetChanged { from: 22, to: 20 }));
}

// ── Cooling and retargeting ──────────────────────────────────

#[test]
fn retarget_mid_heat_switches_to_cooling() {
    let (mut app, mut hw, mut sink) = make_app(false);
    app.handle_command(AppCommand::SetTarget(28), &mut hw, &mut sink);
    for _ in 0..3 {
        app.handle_command(AppCommand::Step, &mut hw, &mut sink);
    }
    assert_eq!(fields(&app), (23, 28, Mode::Heating, FanSpeed::Medium));

    app.handle_command(AppCommand::SetTarget(21), &mut hw, &mut sink);
    assert_eq!(fields(&app), (23, 21, Mode::Cooling, FanSpeed::High));

    let outcome = app.handle_command(AppCommand::IncreaseTemp, &mut hw, &mut sink);
    assert_eq!(outcome, Outcome::Ignored(Rejection::ModeMismatch));

    app.handle_command(AppCommand::DecreaseTemp, &mut hw, &mut sink);
    app.handle_command(AppCommand::DecreaseTemp, &mut hw, &mut sink);
    assert_eq!(fields(&app), (21, 21, Mode::Idle, FanSpeed::Low));
    assert_eq!(hw.last_mode(), Some(Mode::Idle));
}

#[test]
fn reconcile_command_is_ignored_away_from_target() {
    let (mut app, mut hw, mut sink) = make_app(false);
    let outcome = app.handle_command(AppCommand::Reconcile, &mut hw, &mut sink);
    assert_eq!(outcome, Outcome::Ignored(Rejection::NotAtTarget));
}
