use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    ops::Deref,
};

use serde::Serialize;
use zbus::{
    Connection,
    proxy::CacheProperties,
    zvariant::{OwnedObjectPath, Value},
};

use crate::services::{
    common::dict_to_strings,
    supplicant::{RemoteObject, SupplicantError, interfaces, proxy::NetworkProxy},
};

/// A configured network block on an interface.
#[derive(Debug, Clone)]
pub struct Network {
    object: RemoteObject,
    proxy: NetworkProxy<'static>,
}

impl Deref for Network {
    type Target = RemoteObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

impl Network {
    /// Wrap the network at `path`.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn new(connection: &Connection, path: OwnedObjectPath) -> Result<Self, SupplicantError> {
        let proxy = NetworkProxy::builder(connection)
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            object: RemoteObject::new(connection.clone(), path, interfaces::NETWORK),
            proxy,
        })
    }

    /// Network block entries as strings.
    ///
    /// The daemon reports `ssid` quoted; one leading and one trailing quote
    /// are removed. `ssid` is always present, empty for blocks without one.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn properties(&self) -> Result<HashMap<String, String>, SupplicantError> {
        Ok(normalize_properties(dict_to_strings(
            &self.proxy.properties().await?,
        )))
    }

    /// Replace network block entries.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` if the daemon rejects an entry.
    pub async fn set_properties(
        &self,
        properties: &HashMap<String, String>,
    ) -> Result<(), SupplicantError> {
        let dict: HashMap<&str, Value<'_>> = properties
            .iter()
            .map(|(key, value)| (key.as_str(), Value::from(value.as_str())))
            .collect();

        self.object.set("Properties", Value::from(dict)).await
    }

    /// Whether the network is enabled.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn enabled(&self) -> Result<bool, SupplicantError> {
        Ok(self.proxy.enabled().await?)
    }

    /// Enable or disable the network.
    ///
    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_enabled(&self, enabled: bool) -> Result<(), SupplicantError> {
        self.object.set("Enabled", Value::from(enabled)).await
    }

    /// Snapshot of the network for display.
    ///
    /// # Errors
    /// Returns the mapped remote error if the properties cannot be read.
    pub async fn summary(&self) -> Result<NetworkSummary, SupplicantError> {
        let (properties, enabled) = tokio::join!(self.properties(), self.enabled());

        Ok(NetworkSummary {
            path: self.path().to_string(),
            enabled: enabled.ok(),
            properties: properties?.into_iter().collect(),
        })
    }
}

fn normalize_properties(mut properties: HashMap<String, String>) -> HashMap<String, String> {
    let ssid = properties.entry("ssid".to_string()).or_default();
    *ssid = unquote(ssid).to_string();
    properties
}

/// Strips one leading and one trailing `"` or `'`.
pub(crate) fn unquote(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);

    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}

/// Point-in-time view of a network block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    /// Object path of the network.
    pub path: String,
    /// Whether the network is enabled, if it could be read.
    pub enabled: Option<bool>,
    /// Network block entries, sorted by key.
    pub properties: BTreeMap<String, String>,
}

impl fmt::Display for NetworkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network(Path: {}, Properties: {:?})", self.path, self.properties)
    }
}

/// Value of one network block entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkValue {
    /// String entry such as `ssid`, `psk` or `key_mgmt`.
    Text(String),
    /// Integer entry such as `priority` or `scan_ssid`.
    Integer(i32),
    /// Binary entry such as a raw SSID.
    Bytes(Vec<u8>),
}

impl From<&str> for NetworkValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NetworkValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for NetworkValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<u8>> for NetworkValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

/// Entries for `Interface::add_network`.
///
/// # Example
/// ```
/// use wpa_supplicant::services::supplicant::NetworkConfig;
///
/// let config = NetworkConfig::new()
///     .ssid("home")
///     .psk("correct horse battery staple")
///     .key_mgmt("WPA-PSK");
/// assert_eq!(config.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkConfig {
    entries: BTreeMap<String, NetworkValue>,
}

impl NetworkConfig {
    /// Empty network block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Network name.
    pub fn ssid(self, ssid: impl Into<String>) -> Self {
        self.entry("ssid", ssid.into())
    }

    /// WPA passphrase.
    pub fn psk(self, psk: impl Into<String>) -> Self {
        self.entry("psk", psk.into())
    }

    /// Key management, e.g. `WPA-PSK`, `WPA-EAP` or `NONE`.
    pub fn key_mgmt(self, key_mgmt: impl Into<String>) -> Self {
        self.entry("key_mgmt", key_mgmt.into())
    }

    /// Selection priority, higher wins.
    pub fn priority(self, priority: i32) -> Self {
        self.entry("priority", priority)
    }

    /// Probe for the SSID explicitly, needed for hidden networks.
    pub fn scan_ssid(self, enabled: bool) -> Self {
        self.entry("scan_ssid", i32::from(enabled))
    }

    /// Arbitrary network block entry.
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<NetworkValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn to_args(&self) -> HashMap<&str, Value<'_>> {
        self.entries
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    NetworkValue::Text(text) => Value::from(text.as_str()),
                    NetworkValue::Integer(n) => Value::from(*n),
                    NetworkValue::Bytes(bytes) => Value::from(bytes.clone()),
                };
                (key.as_str(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquote_strips_one_quote_each_side() {
        assert_eq!(unquote("\"home\""), "home");
        assert_eq!(unquote("'home'"), "home");
        assert_eq!(unquote("\"\"home\"\""), "\"home\"");
        assert_eq!(unquote("home"), "home");
        assert_eq!(unquote("\"home"), "home");
        assert_eq!(unquote(""), "");
    }

    #[test]
    fn properties_unquote_ssid() {
        let raw = HashMap::from([
            ("ssid".to_string(), "\"home\"".to_string()),
            ("key_mgmt".to_string(), "WPA-PSK".to_string()),
        ]);

        let properties = normalize_properties(raw);

        assert_eq!(properties.get("ssid").map(String::as_str), Some("home"));
        assert_eq!(properties.get("key_mgmt").map(String::as_str), Some("WPA-PSK"));
    }

    #[test]
    fn properties_always_carry_ssid() {
        let raw = HashMap::from([("key_mgmt".to_string(), "NONE".to_string())]);

        let properties = normalize_properties(raw);

        assert_eq!(properties.get("ssid").map(String::as_str), Some(""));
        assert_eq!(properties.len(), 2);
    }

    #[test]
    fn network_config_builds_typed_arguments() {
        let config = NetworkConfig::new()
            .ssid("office")
            .key_mgmt("NONE")
            .scan_ssid(true)
            .priority(5);

        let args = config.to_args();

        assert_eq!(args.len(), 4);
        assert_eq!(args.get("ssid"), Some(&Value::from("office")));
        assert_eq!(args.get("scan_ssid"), Some(&Value::from(1i32)));
        assert_eq!(args.get("priority"), Some(&Value::from(5i32)));
    }

    #[test]
    fn later_entries_replace_earlier_ones() {
        let config = NetworkConfig::new().psk("one").entry("psk", "two");

        assert_eq!(config.len(), 1);
        assert_eq!(config.to_args().get("psk"), Some(&Value::from("two")));
    }

    #[test]
    fn summary_display_lists_sorted_properties() {
        let summary = NetworkSummary {
            path: "/n/0".to_string(),
            enabled: Some(true),
            properties: [("ssid", "home"), ("key_mgmt", "WPA-PSK")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };

        assert_eq!(
            summary.to_string(),
            "Network(Path: /n/0, Properties: {\"key_mgmt\": \"WPA-PSK\", \"ssid\": \"home\"})"
        );
    }
}
