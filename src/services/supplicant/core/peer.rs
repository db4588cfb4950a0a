use std::{fmt, ops::Deref};

use serde::Serialize;
use zbus::{Connection, proxy::CacheProperties, zvariant::OwnedObjectPath};

use crate::services::supplicant::{
    MacAddress, P2pDeviceCapability, P2pGroupCapability, RemoteObject, SupplicantError,
    WpsConfigMethods, flag_names, interfaces, proxy::PeerProxy,
};

use super::group::Group;

/// A Wi-Fi Direct peer seen during discovery.
#[derive(Debug, Clone)]
pub struct Peer {
    object: RemoteObject,
    proxy: PeerProxy<'static>,
}

impl Deref for Peer {
    type Target = RemoteObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl PartialEq for Peer {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

impl Peer {
    /// Wrap the peer at `path`.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn new(connection: &Connection, path: OwnedObjectPath) -> Result<Self, SupplicantError> {
        let proxy = PeerProxy::builder(connection)
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            object: RemoteObject::new(connection.clone(), path, interfaces::PEER),
            proxy,
        })
    }

    /// Advertised device name.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn device_name(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.device_name().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn manufacturer(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.manufacturer().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn model_name(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.model_name().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn model_number(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.model_number().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn serial_number(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.serial_number().await?)
    }

    /// Eight octet WPS primary device type.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn primary_device_type(&self) -> Result<Vec<u8>, SupplicantError> {
        Ok(self.proxy.primary_device_type().await?)
    }

    /// WPS configuration methods the peer supports.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn config_methods(&self) -> Result<WpsConfigMethods, SupplicantError> {
        Ok(WpsConfigMethods::from_bits_truncate(
            self.proxy.config_method().await?,
        ))
    }

    /// Signal level in dBm.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn level(&self) -> Result<i32, SupplicantError> {
        Ok(self.proxy.level().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn device_capability(&self) -> Result<P2pDeviceCapability, SupplicantError> {
        Ok(P2pDeviceCapability::from_bits_truncate(
            self.proxy.device_capability().await?,
        ))
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn group_capability(&self) -> Result<P2pGroupCapability, SupplicantError> {
        Ok(P2pGroupCapability::from_bits_truncate(
            self.proxy.group_capability().await?,
        ))
    }

    /// P2P device address.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn device_address(&self) -> Result<MacAddress, SupplicantError> {
        Ok(MacAddress::new(self.proxy.device_address().await?))
    }

    /// Groups the peer belongs to.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn groups(&self) -> Result<Vec<Group>, SupplicantError> {
        let mut groups = Vec::new();
        for path in self.proxy.groups().await? {
            groups.push(Group::new(self.connection(), path).await?);
        }
        Ok(groups)
    }

    /// Raw information elements.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn ies(&self) -> Result<Vec<u8>, SupplicantError> {
        Ok(self.proxy.ies().await?)
    }

    /// Vendor extension attributes.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn vendor_extensions(&self) -> Result<Vec<Vec<u8>>, SupplicantError> {
        Ok(self.proxy.vendor_extension().await?)
    }

    /// Snapshot of the peer for display.
    ///
    /// # Errors
    /// Returns the mapped remote error if the name or address cannot be read.
    pub async fn summary(&self) -> Result<PeerSummary, SupplicantError> {
        let (name, address, level, methods, device_caps, group_caps) = tokio::join!(
            self.device_name(),
            self.device_address(),
            self.level(),
            self.config_methods(),
            self.device_capability(),
            self.group_capability(),
        );

        Ok(PeerSummary {
            path: self.path().to_string(),
            device_name: name?,
            device_address: address?.to_string(),
            level: level.ok(),
            config_methods: methods.map(|m| flag_names(&m)).unwrap_or_default(),
            device_capability: device_caps.map(|c| flag_names(&c)).unwrap_or_default(),
            group_capability: group_caps.map(|c| flag_names(&c)).unwrap_or_default(),
        })
    }
}

/// Point-in-time view of a peer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerSummary {
    /// Object path of the peer.
    pub path: String,
    /// Advertised device name.
    pub device_name: String,
    /// Formatted P2P device address.
    pub device_address: String,
    /// Signal level in dBm.
    pub level: Option<i32>,
    /// WPS configuration methods.
    pub config_methods: Vec<&'static str>,
    /// Device capability names.
    pub device_capability: Vec<&'static str>,
    /// Group capability names.
    pub group_capability: Vec<&'static str>,
}

impl fmt::Display for PeerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Peer(Path: {}, Name: {}, Address: {})",
            self.path, self.device_name, self.device_address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> PeerSummary {
        PeerSummary {
            path: "/fi/w1/wpa_supplicant1/Interfaces/0/Peers/0211223344".to_string(),
            device_name: "Living Room TV".to_string(),
            device_address: "02:11:22:33:44:55".to_string(),
            level: Some(-48),
            config_methods: vec!["DISPLAY", "PUSHBUTTON"],
            device_capability: vec!["SERVICE_DISCOVERY"],
            group_capability: vec![],
        }
    }

    #[test]
    fn summary_display_names_the_peer() {
        assert_eq!(
            summary().to_string(),
            "Peer(Path: /fi/w1/wpa_supplicant1/Interfaces/0/Peers/0211223344, \
             Name: Living Room TV, Address: 02:11:22:33:44:55)"
        );
    }

    #[test]
    fn summary_serializes_flag_names() {
        let json = serde_json::to_value(summary()).unwrap();

        assert_eq!(json["level"], -48);
        assert_eq!(json["config_methods"], serde_json::json!(["DISPLAY", "PUSHBUTTON"]));
        assert_eq!(json["group_capability"], serde_json::json!([]));
    }
}
