use std::{
    fmt::Display,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::{
    config::Config,
    services::supplicant::{Interface, Supplicant},
};

use super::CliError;

/// State shared by every command of one invocation.
///
/// The bus connection is opened on first use, so commands that never talk
/// to wpa_supplicant (such as `config path`) work without D-Bus.
pub struct CliContext {
    config: Config,
    config_path: PathBuf,
    json: bool,
    supplicant: OnceCell<Supplicant>,
}

impl CliContext {
    /// Creates a context for the given configuration.
    ///
    /// # Arguments
    /// * `config` - Loaded configuration
    /// * `config_path` - File the configuration was loaded from
    /// * `json` - Render command output as JSON
    pub fn new(config: Config, config_path: PathBuf, json: bool) -> Self {
        Self {
            config,
            config_path,
            json,
            supplicant: OnceCell::new(),
        }
    }

    /// Loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// File the configuration was loaded from.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Whether output is rendered as JSON.
    pub fn json(&self) -> bool {
        self.json
    }

    /// Root object client, connecting on first call.
    ///
    /// # Errors
    /// Returns `CliError::Supplicant` if the bus cannot be reached.
    pub async fn supplicant(&self) -> Result<&Supplicant, CliError> {
        let supplicant = self
            .supplicant
            .get_or_try_init(|| async {
                debug!("Connecting to wpa_supplicant");
                Supplicant::connect_with(&self.config.dbus).await
            })
            .await?;

        Ok(supplicant)
    }

    /// Interface wrapper for `ifname`.
    ///
    /// # Errors
    /// Returns `CliError::Supplicant` if the interface is not managed.
    pub async fn interface(&self, ifname: &str) -> Result<Arc<Interface>, CliError> {
        Ok(self.supplicant().await?.get_interface(ifname).await?)
    }

    /// Renders one value as its display form or as pretty JSON.
    ///
    /// # Errors
    /// Returns `CliError::Serialization` if JSON rendering fails.
    pub fn render<T: Serialize + Display>(&self, value: &T) -> Result<String, CliError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(value)?);
        }

        Ok(value.to_string())
    }

    /// Renders a list, one display line per item or a JSON array.
    ///
    /// `empty` is printed instead of nothing in human mode.
    ///
    /// # Errors
    /// Returns `CliError::Serialization` if JSON rendering fails.
    pub fn render_list<T: Serialize + Display>(
        &self,
        items: &[T],
        empty: &str,
    ) -> Result<String, CliError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(items)?);
        }

        if items.is_empty() {
            return Ok(empty.to_string());
        }

        Ok(items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Renders an already built JSON value, or `human` in human mode.
    ///
    /// # Errors
    /// Returns `CliError::Serialization` if JSON rendering fails.
    pub fn render_json_or(
        &self,
        json: &serde_json::Value,
        human: impl FnOnce() -> String,
    ) -> Result<String, CliError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(json)?);
        }

        Ok(human())
    }
}
