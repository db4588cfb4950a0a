use std::{fmt, ops::Deref};

use serde::Serialize;
use zbus::{Connection, proxy::CacheProperties, zvariant::OwnedObjectPath};

use crate::services::{
    common::optional_path,
    supplicant::{
        MacAddress, P2pRole, RemoteObject, Ssid, SupplicantError, interfaces, proxy::GroupProxy,
    },
};

use super::peer::Peer;

/// An active Wi-Fi Direct group.
#[derive(Debug, Clone)]
pub struct Group {
    object: RemoteObject,
    proxy: GroupProxy<'static>,
}

impl Deref for Group {
    type Target = RemoteObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

impl Group {
    /// Wrap the group at `path`.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn new(connection: &Connection, path: OwnedObjectPath) -> Result<Self, SupplicantError> {
        let proxy = GroupProxy::builder(connection)
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            object: RemoteObject::new(connection.clone(), path, interfaces::GROUP),
            proxy,
        })
    }

    /// Peers currently in the group.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn members(&self) -> Result<Vec<Peer>, SupplicantError> {
        let mut members = Vec::new();
        for path in self.proxy.members().await? {
            members.push(Peer::new(self.connection(), path).await?);
        }
        Ok(members)
    }

    /// Interface object backing the group.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn group_path(&self) -> Result<Option<OwnedObjectPath>, SupplicantError> {
        Ok(optional_path(self.proxy.group().await?))
    }

    /// Role of the local device in the group.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn role(&self) -> Result<P2pRole, SupplicantError> {
        Ok(P2pRole::from_dbus(&self.proxy.role().await?))
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn ssid(&self) -> Result<Ssid, SupplicantError> {
        Ok(Ssid::new(self.proxy.ssid().await?))
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn bssid(&self) -> Result<MacAddress, SupplicantError> {
        Ok(MacAddress::new(self.proxy.bssid().await?))
    }

    /// Operating frequency in MHz.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn frequency(&self) -> Result<u32, SupplicantError> {
        Ok(u32::from(self.proxy.frequency().await?))
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn passphrase(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.passphrase().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn psk(&self) -> Result<Vec<u8>, SupplicantError> {
        Ok(self.proxy.psk().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn wps_vendor_extensions(&self) -> Result<Vec<Vec<u8>>, SupplicantError> {
        Ok(self.proxy.wps_vendor_extensions().await?)
    }

    /// Snapshot of the group for display. The passphrase is left out.
    ///
    /// # Errors
    /// Returns the mapped remote error if the role or SSID cannot be read.
    pub async fn summary(&self) -> Result<GroupSummary, SupplicantError> {
        let (role, ssid, bssid, frequency, members) = tokio::join!(
            self.role(),
            self.ssid(),
            self.bssid(),
            self.frequency(),
            self.proxy.members(),
        );

        Ok(GroupSummary {
            path: self.path().to_string(),
            role: role?.to_string(),
            ssid: ssid?.as_str(),
            bssid: bssid.map(|b| b.to_string()).unwrap_or_default(),
            frequency: frequency.ok(),
            members: members
                .map(|paths| paths.iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
        })
    }
}

/// Point-in-time view of a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Object path of the group.
    pub path: String,
    /// `GO` or `client`.
    pub role: String,
    /// Group SSID.
    pub ssid: String,
    /// Formatted group BSSID.
    pub bssid: String,
    /// Operating frequency in MHz.
    pub frequency: Option<u32>,
    /// Object paths of member peers.
    pub members: Vec<String>,
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Group(Path: {}, Role: {}, SSID: {}, Members: {})",
            self.path,
            self.role,
            self.ssid,
            self.members.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_display_counts_members() {
        let summary = GroupSummary {
            path: "/fi/w1/wpa_supplicant1/Interfaces/1/Groups/DIRECT-xy".to_string(),
            role: "GO".to_string(),
            ssid: "DIRECT-xy".to_string(),
            bssid: "02:AA:BB:CC:DD:EE".to_string(),
            frequency: Some(2437),
            members: vec![
                "/fi/w1/wpa_supplicant1/Interfaces/1/Peers/0211223344".to_string(),
                "/fi/w1/wpa_supplicant1/Interfaces/1/Peers/0266778899".to_string(),
            ],
        };

        assert_eq!(
            summary.to_string(),
            "Group(Path: /fi/w1/wpa_supplicant1/Interfaces/1/Groups/DIRECT-xy, \
             Role: GO, SSID: DIRECT-xy, Members: 2)"
        );
    }

    #[test]
    fn summary_display_without_members() {
        let summary = GroupSummary {
            path: "/g".to_string(),
            role: "client".to_string(),
            ssid: String::new(),
            bssid: String::new(),
            frequency: None,
            members: vec![],
        };

        assert_eq!(summary.to_string(), "Group(Path: /g, Role: client, SSID: , Members: 0)");
    }
}
