//! Integration tests for the dispatch pipeline.
//!
//! These tests exercise electra-send end-to-end through its public API:
//! `Dispatcher` + config section + the in-memory and JSON transmitters.

use std::sync::Arc;
use std::time::Duration;

use electra_core::{AcSettings, Fan, Mode, Remote};
use electra_send::application::dispatch::{DispatchConfig, Dispatcher};
use electra_send::infrastructure::storage::config::AppConfig;
use electra_send::infrastructure::transmitter::{JsonTransmitter, MockTransmitter};

fn reference_settings() -> AcSettings {
    AcSettings::new(true, Mode::Cool, Fan::Low, 24, false, false)
}

fn no_gap() -> DispatchConfig {
    DispatchConfig {
        inter_frame_gap: Duration::ZERO,
        ..DispatchConfig::default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_reference_settings_reach_the_transmitter_as_both_packets() {
    // Arrange
    let transmitter = Arc::new(MockTransmitter::new());
    let dispatcher = Dispatcher::new(transmitter.clone(), no_gap());
    let settings = reference_settings();

    // Act
    let report = dispatcher.send(&settings);

    // Assert
    assert!(report.all_delivered());
    let sent = transmitter.transmissions();
    assert_eq!(sent.len(), 2, "one packet per remote");

    assert_eq!(sent[0].frequency_khz, 33);
    assert_eq!(sent[0].durations.len(), 181);
    assert_eq!(
        sent[0].durations,
        Remote::Orange.full_packet(&settings).into_vec()
    );

    assert_eq!(sent[1].frequency_khz, 38);
    assert_eq!(sent[1].durations.len(), 211);
    assert_eq!(sent[1].durations[..2], [9000, 4500]);
}

#[test]
fn test_every_transmitted_element_is_positive() {
    let transmitter = Arc::new(MockTransmitter::new());
    let dispatcher = Dispatcher::new(transmitter.clone(), no_gap());

    for mode in Mode::ALL {
        for fan in Fan::ALL {
            let settings = AcSettings::new(true, mode, fan, 21, true, false);
            dispatcher.send(&settings);
        }
    }

    let sent = transmitter.transmissions();
    assert_eq!(sent.len(), Mode::ALL.len() * Fan::ALL.len() * 2);
    for transmission in &sent {
        assert!(
            transmission.durations.iter().all(|&d| d > 0),
            "zero-length element in {transmission:?}"
        );
    }
}

#[test]
fn test_failing_transmitter_attempts_every_remote() {
    // Arrange
    let transmitter = Arc::new(MockTransmitter::failing());
    let dispatcher = Dispatcher::new(transmitter.clone(), no_gap());

    // Act
    let report = dispatcher.send(&reference_settings());

    // Assert
    assert_eq!(report.failures(), 2);
    assert_eq!(transmitter.transmissions().len(), 2);
}

#[test]
fn test_json_transmitter_emits_one_line_per_packet() {
    // Arrange
    let transmitter = Arc::new(JsonTransmitter::new(Vec::new()));
    let dispatcher = Dispatcher::new(transmitter.clone(), no_gap());

    // Act
    let report = dispatcher.send(&reference_settings());
    drop(dispatcher);

    // Assert
    assert!(report.all_delivered());
    let transmitter = Arc::try_unwrap(transmitter).expect("dispatcher dropped");
    let output = String::from_utf8(transmitter.into_inner()).expect("utf-8");
    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["frequency_khz"], 33);
    assert_eq!(lines[0]["durations"].as_array().map(Vec::len), Some(181));
    assert_eq!(lines[1]["frequency_khz"], 38);
    assert_eq!(lines[1]["durations"].as_array().map(Vec::len), Some(211));
}

#[test]
fn test_config_file_drives_the_dispatch() {
    // Arrange
    let text = r#"
        [dispatch]
        inter_frame_gap_ms = 0
        remotes = ["green"]

        [settings]
        mode = "heat"
        fan = "high"
        temperature = 28
    "#;
    let config: AppConfig = toml::from_str(text).expect("parse config");
    config.validate().expect("valid config");

    let transmitter = Arc::new(MockTransmitter::new());
    let dispatcher = Dispatcher::new(transmitter.clone(), config.dispatch.to_dispatch_config());

    // Act
    let report = dispatcher.send(&config.settings);

    // Assert
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].remote, Remote::Green);
    let sent = transmitter.transmissions();
    assert_eq!(sent[0].frequency_khz, 38);
    assert_eq!(
        sent[0].durations,
        Remote::Green.full_packet(&config.settings).into_vec()
    );
}
