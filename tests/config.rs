//! Integration tests for configuration loading.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{fs, path::PathBuf};

use tempfile::TempDir;
use wpa_supplicant::{
    AppError,
    config::{BusKind, Config, LogLevel},
    services::supplicant::ScanType,
};

fn config_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("wpa").join("config.toml")
}

mod creation {
    use super::*;

    #[test]
    fn creates_missing_file_with_defaults() {
        let temp = TempDir::new().unwrap();
        let path = config_path(&temp);

        let config = Config::load_or_create(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# wpa configuration file"));
        assert!(written.contains("[scan]"));
    }

    #[test]
    fn leaves_existing_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = config_path(&temp);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[general]\nlog_level = \"warn\"\n").unwrap();

        let config = Config::load_or_create(&path).unwrap();

        assert_eq!(config.general.log_level, LogLevel::Warn);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[general]\nlog_level = \"warn\"\n"
        );
    }

    #[test]
    fn created_file_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = config_path(&temp);

        let created = Config::load_or_create(&path).unwrap();
        let reloaded = Config::load(&path).unwrap();

        assert_eq!(created, reloaded);
    }
}

mod loading {
    use super::*;

    #[test]
    fn reads_every_section() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(
            &path,
            r#"
[general]
log_level = "trace"
log_dir = "/var/log/wpa"

[dbus]
bus = "session"
address = "unix:path=/tmp/test-bus"

[scan]
timeout_secs = 25
scan_type = "passive"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.general.log_level, LogLevel::Trace);
        assert_eq!(config.general.log_dir, Some(PathBuf::from("/var/log/wpa")));
        assert_eq!(config.dbus.bus, BusKind::Session);
        assert_eq!(
            config.dbus.address.as_deref(),
            Some("unix:path=/tmp/test-bus")
        );
        assert_eq!(config.scan.timeout_secs, 25);
        assert_eq!(config.scan.scan_type, ScanType::Passive);
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[scan\ntimeout_secs = ").unwrap();

        let err = Config::load(&path).unwrap_err();

        match err {
            AppError::TomlParseError { location, .. } => {
                assert!(location.contains("broken.toml"), "{location}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, AppError::IoError { path: p, .. } if p == path));
    }

    #[test]
    fn wrong_value_type_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("typed.toml");
        fs::write(&path, "[scan]\ntimeout_secs = \"soon\"\n").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
