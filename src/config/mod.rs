//! Configuration schema definitions and loading.
//!
//! The `wpa` tool reads a single TOML file. Every section and field has a
//! default, so an empty file (or a missing one) is a valid configuration.

mod dbus;
mod general;
mod loading;
mod paths;
mod scan;

#[cfg(test)]
mod tests;

pub use dbus::{BusKind, DbusConfig};
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use scan::ScanConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Which bus to find wpa_supplicant on.
    #[serde(default)]
    pub dbus: DbusConfig,

    /// Defaults for blocking scans.
    #[serde(default)]
    pub scan: ScanConfig,
}
