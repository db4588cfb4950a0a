mod file_creation;

use std::{fs, path::Path};

use file_creation::create_default_config_file;
use tracing::debug;

use super::{Config, ConfigPaths};
use crate::{AppError, Result};

impl Config {
    /// Loads the configuration at `path`, writing the defaults there first
    /// if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file or its directory cannot be created
    /// - The file cannot be read
    /// - The TOML content is invalid or does not match the schema
    pub fn load_or_create(path: &Path) -> Result<Config> {
        if !path.exists() {
            create_default_config_file(path)?;
        }

        Self::load(path)
    }

    /// Loads the configuration at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| AppError::io(e, path))?;
        debug!("Loaded configuration from {}", path.display());

        Self::parse(&content).map_err(|e| match e {
            AppError::TomlParseError { details, .. } => AppError::toml_parse(details, Some(path)),
            other => other,
        })
    }

    /// Loads the configuration from the default location.
    ///
    /// # Errors
    /// See [`Config::load_or_create`].
    pub fn load_default() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_or_create(&path)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `AppError::TomlParseError` if the content is invalid.
    pub fn parse(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| AppError::toml_parse(e, None))
    }
}
