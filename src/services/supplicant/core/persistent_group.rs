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
    supplicant::{RemoteObject, SupplicantError, interfaces, proxy::PersistentGroupProxy},
};

/// A stored Wi-Fi Direct group that can be re-invoked later.
#[derive(Debug, Clone)]
pub struct PersistentGroup {
    object: RemoteObject,
    proxy: PersistentGroupProxy<'static>,
}

impl Deref for PersistentGroup {
    type Target = RemoteObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl PersistentGroup {
    /// Wrap the persistent group at `path`.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn new(connection: &Connection, path: OwnedObjectPath) -> Result<Self, SupplicantError> {
        let proxy = PersistentGroupProxy::builder(connection)
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            object: RemoteObject::new(connection.clone(), path, interfaces::PERSISTENT_GROUP),
            proxy,
        })
    }

    /// Group configuration entries as strings.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn properties(&self) -> Result<HashMap<String, String>, SupplicantError> {
        Ok(dict_to_strings(&self.proxy.properties().await?))
    }

    /// Replace group configuration entries.
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

    /// Snapshot of the group for display.
    ///
    /// # Errors
    /// Returns the mapped remote error if the properties cannot be read.
    pub async fn summary(&self) -> Result<PersistentGroupSummary, SupplicantError> {
        Ok(PersistentGroupSummary {
            path: self.path().to_string(),
            properties: self.properties().await?.into_iter().collect(),
        })
    }
}

/// Point-in-time view of a persistent group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistentGroupSummary {
    /// Object path of the group.
    pub path: String,
    /// Group configuration entries, sorted by key.
    pub properties: BTreeMap<String, String>,
}

impl fmt::Display for PersistentGroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PersistentGroup(Path: {}, Properties: {:?})",
            self.path, self.properties
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_entries_in_key_order() {
        let summary = PersistentGroupSummary {
            path: "/fi/w1/wpa_supplicant1/Interfaces/0/PersistentGroups/1".to_string(),
            properties: [
                ("ssid".to_string(), "DIRECT-xy".to_string()),
                ("mode".to_string(), "3".to_string()),
            ]
            .into_iter()
            .collect(),
        };

        assert_eq!(
            summary.to_string(),
            "PersistentGroup(Path: /fi/w1/wpa_supplicant1/Interfaces/0/PersistentGroups/1, \
             Properties: {\"mode\": \"3\", \"ssid\": \"DIRECT-xy\"})"
        );
    }
}
