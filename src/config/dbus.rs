use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Message bus wpa_supplicant is registered on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusKind {
    /// The system bus, where distributions run the daemon.
    #[default]
    System,

    /// The session bus of the current user.
    Session,
}

/// D-Bus connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct DbusConfig {
    /// Well-known bus to connect to.
    #[serde(default)]
    pub bus: BusKind,

    /// Explicit bus address such as `unix:path=/run/dbus/system_bus_socket`.
    ///
    /// Takes precedence over `bus` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
