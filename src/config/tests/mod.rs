//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::unwrap_used)]

use std::{path::PathBuf, time::Duration};

use crate::{
    AppError,
    config::{BusKind, Config, ConfigPaths, LogLevel},
    services::supplicant::ScanType,
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.general.log_dir, None);
    assert_eq!(config.dbus.bus, BusKind::System);
    assert_eq!(config.dbus.address, None);
    assert_eq!(config.scan.timeout(), Duration::from_secs(10));
    assert_eq!(config.scan.scan_type, ScanType::Active);
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[dbus]"));
    assert!(toml_str.contains("[scan]"));
    assert!(toml_str.contains("bus = \"system\""));
    assert!(!toml_str.contains("address"));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"
        log_dir = "/tmp/wpa-logs"

        [dbus]
        bus = "session"
        address = "unix:path=/tmp/bus"

        [scan]
        timeout_secs = 30
        scan_type = "passive"
    "#;

    let config = Config::parse(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.general.log_dir, Some(PathBuf::from("/tmp/wpa-logs")));
    assert_eq!(config.dbus.bus, BusKind::Session);
    assert_eq!(config.dbus.address.as_deref(), Some("unix:path=/tmp/bus"));
    assert_eq!(config.scan.timeout_secs, 30);
    assert_eq!(config.scan.scan_type, ScanType::Passive);
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized = Config::parse(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_partial_sections_keep_defaults() {
    let config = Config::parse("[scan]\nscan_type = \"passive\"\n").unwrap();

    assert_eq!(config.scan.timeout_secs, 10);
    assert_eq!(config.dbus, Default::default());
}

#[test]
fn config_empty_toml() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn config_rejects_unknown_bus() {
    let result = Config::parse("[dbus]\nbus = \"starship\"\n");
    assert!(matches!(result, Err(AppError::TomlParseError { .. })));
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert!("loud".parse::<LogLevel>().is_err());
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}

#[test]
fn config_paths_end_with_app_file() {
    if let Ok(path) = ConfigPaths::main_config() {
        assert!(path.ends_with("wpa/config.toml"));
    }
}

#[test]
fn config_schema_names_sections() {
    let schema = schemars::schema_for!(Config);
    let json = serde_json::to_string(&schema).unwrap();

    assert!(json.contains("general"));
    assert!(json.contains("dbus"));
    assert!(json.contains("timeout_secs"));
}
