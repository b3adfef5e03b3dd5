//! Config storage adapters feeding the service.

use super::mock_hw::{MockHardware, RecordingSink};

use thermostat::adapters::config_store::{JsonFileConfig, MemoryConfigStore};
use thermostat::app::events::AppEvent;
use thermostat::app::ports::{ConfigError, ConfigPort};
use thermostat::app::service::AppService;
use thermostat::config::SystemConfig;

fn temp_path(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("thermostat-{}-{}.json", tag, std::process::id()))
}

#[test]
fn json_file_with_bad_syntax_is_corrupted() {
    let path = temp_path("syntax");
    std::fs::write(&path, "{ not json").unwrap();
    let result = JsonFileConfig::new(&path).load();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(result, Err(ConfigError::Corrupted));
}

#[test]
fn json_file_with_zero_interval_fails_validation() {
    let path = temp_path("zero");
    std::fs::write(&path, r#"{"control_loop_interval_ms": 0}"#).unwrap();
    let result = JsonFileConfig::new(&path).load();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
}

#[test]
fn loaded_config_drives_telemetry_interval() {
    let mut store = MemoryConfigStore::new();
    store
        .save(&SystemConfig {
            telemetry_interval_ticks: 3,
            auto_step: false,
            ..SystemConfig::default()
        })
        .unwrap();

    let mut app = AppService::new(store.load().unwrap());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    for _ in 0..6 {
        app.tick(&mut hw, &mut sink);
    }
    let telemetry = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::Telemetry(_)))
        .count();
    assert_eq!(telemetry, 2);
}

#[test]
fn config_error_converts_to_crate_error() {
    let e: thermostat::Error = ConfigError::NotFound.into();
    assert_eq!(e.to_string(), "config: not found");
}
