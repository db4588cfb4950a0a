use std::{collections::HashMap, fmt, ops::Deref};

use serde::Serialize;
use tracing::warn;
use zbus::{
    Connection,
    proxy::CacheProperties,
    zvariant::{OwnedObjectPath, OwnedValue},
};

use crate::services::supplicant::{
    BssMode, MacAddress, NetworkType, RemoteObject, SecurityInfo, Ssid, SupplicantError,
    channel_from_frequency, interfaces, proxy::BssProxy, signal_quality,
};

/// A basic service set discovered by scanning.
///
/// Every accessor queries the daemon; nothing is cached.
#[derive(Debug, Clone)]
pub struct Bss {
    object: RemoteObject,
    proxy: BssProxy<'static>,
}

impl Deref for Bss {
    type Target = RemoteObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl PartialEq for Bss {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

impl Bss {
    /// Wrap the BSS at `path`.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn new(connection: &Connection, path: OwnedObjectPath) -> Result<Self, SupplicantError> {
        let proxy = BssProxy::builder(connection)
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            object: RemoteObject::new(connection.clone(), path, interfaces::BSS),
            proxy,
        })
    }

    /// SSID rendered as text; invalid UTF-8 is replaced.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn ssid(&self) -> Result<String, SupplicantError> {
        Ok(Ssid::new(self.proxy.ssid().await?).as_str())
    }

    /// Raw SSID octets.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn ssid_bytes(&self) -> Result<Vec<u8>, SupplicantError> {
        Ok(self.proxy.ssid().await?)
    }

    /// Hardware address, displayed as `AA:BB:CC:DD:EE:FF`.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn bssid(&self) -> Result<MacAddress, SupplicantError> {
        Ok(MacAddress::new(self.proxy.bssid().await?))
    }

    /// Frequency in MHz.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn frequency(&self) -> Result<u32, SupplicantError> {
        Ok(u32::from(self.proxy.frequency().await?))
    }

    /// Channel number derived from the frequency.
    ///
    /// # Errors
    /// Returns `SupplicantError::UnexpectedFrequency` outside the 2.4, 5 and 6 GHz bands.
    pub async fn channel(&self) -> Result<u32, SupplicantError> {
        channel_from_frequency(self.frequency().await?)
    }

    /// WPA information.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn wpa(&self) -> Result<SecurityInfo, SupplicantError> {
        Ok(SecurityInfo::from_dict(&self.proxy.wpa().await?))
    }

    /// RSN information.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn rsn(&self) -> Result<SecurityInfo, SupplicantError> {
        Ok(SecurityInfo::from_dict(&self.proxy.rsn().await?))
    }

    /// WPS information, `Type` is one of `pbc`, `pin` or empty.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn wps(&self) -> Result<HashMap<String, OwnedValue>, SupplicantError> {
        Ok(self.proxy.wps().await?)
    }

    /// Raw information elements.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn ies(&self) -> Result<Vec<u8>, SupplicantError> {
        Ok(self.proxy.ies().await?)
    }

    /// Whether the privacy capability is advertised.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn privacy(&self) -> Result<bool, SupplicantError> {
        Ok(self.proxy.privacy().await?)
    }

    /// Operating mode.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn mode(&self) -> Result<BssMode, SupplicantError> {
        Ok(BssMode::from_dbus(&self.proxy.mode().await?))
    }

    /// Supported rates in bits per second, highest first.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn rates(&self) -> Result<Vec<u32>, SupplicantError> {
        Ok(self.proxy.rates().await?)
    }

    /// Signal level in dBm.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn signal_dbm(&self) -> Result<i16, SupplicantError> {
        Ok(self.proxy.signal().await?)
    }

    /// Signal quality in percent.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn signal_quality(&self) -> Result<u8, SupplicantError> {
        Ok(signal_quality(i32::from(self.signal_dbm().await?)))
    }

    /// Seconds since the BSS was last seen.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn age(&self) -> Result<u32, SupplicantError> {
        Ok(self.proxy.age().await?)
    }

    /// Security classification from the privacy bit and WPA/RSN suites.
    ///
    /// # Errors
    /// Returns the mapped remote error if any of the reads fail.
    pub async fn network_type(&self) -> Result<NetworkType, SupplicantError> {
        let (privacy, wpa, rsn) = tokio::join!(self.privacy(), self.wpa(), self.rsn());
        Ok(NetworkType::classify(privacy?, &wpa?, &rsn?))
    }

    /// Collect every displayable attribute.
    ///
    /// Each attribute is fetched on its own. A failed read is logged and
    /// leaves that field empty instead of failing the whole summary.
    pub async fn summary(&self) -> BssSummary {
        let path = self.path();
        let (ssid, bssid, frequency, signal, privacy, wpa, rsn, mode, rates, age) = tokio::join!(
            self.ssid(),
            self.bssid(),
            self.frequency(),
            self.signal_dbm(),
            self.privacy(),
            self.wpa(),
            self.rsn(),
            self.mode(),
            self.rates(),
            self.age(),
        );

        let frequency = logged(frequency, "Frequency", path);
        let channel = frequency.and_then(|f| logged(channel_from_frequency(f), "Channel", path));
        let signal_dbm = logged(signal, "Signal", path);
        let privacy = logged(privacy, "Privacy", path);
        let wpa = logged(wpa, "WPA", path);
        let rsn = logged(rsn, "RSN", path);

        let network_type = match (privacy, &wpa, &rsn) {
            (Some(privacy), Some(wpa), Some(rsn)) => {
                Some(NetworkType::classify(privacy, wpa, rsn).to_string())
            }
            _ => None,
        };

        BssSummary {
            path: path.to_string(),
            ssid: logged(ssid, "SSID", path),
            bssid: logged(bssid, "BSSID", path).map(|b| b.to_string()),
            frequency,
            channel,
            signal_dbm,
            signal_quality: signal_dbm.map(|dbm| signal_quality(i32::from(dbm))),
            network_type,
            privacy,
            mode: logged(mode, "Mode", path).map(|m| m.to_string()),
            rates: logged(rates, "Rates", path).unwrap_or_default(),
            age: logged(age, "Age", path),
            wpa,
            rsn,
        }
    }
}

fn logged<T>(
    result: Result<T, SupplicantError>,
    property: &str,
    path: &OwnedObjectPath,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to fetch '{property}' for {path}: {e}");
            None
        }
    }
}

/// Point-in-time view of a BSS for listings and JSON output.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BssSummary {
    /// Object path of the BSS.
    pub path: String,
    /// SSID as text.
    pub ssid: Option<String>,
    /// Formatted hardware address.
    pub bssid: Option<String>,
    /// Frequency in MHz.
    pub frequency: Option<u32>,
    /// Channel number.
    pub channel: Option<u32>,
    /// Signal level in dBm.
    pub signal_dbm: Option<i16>,
    /// Signal quality in percent.
    pub signal_quality: Option<u8>,
    /// `OPEN`, `WEP`, `WPA` or `WPA2`.
    pub network_type: Option<String>,
    /// Privacy capability.
    pub privacy: Option<bool>,
    /// Operating mode.
    pub mode: Option<String>,
    /// Supported rates in bits per second.
    pub rates: Vec<u32>,
    /// Seconds since last seen.
    pub age: Option<u32>,
    /// WPA information.
    pub wpa: Option<SecurityInfo>,
    /// RSN information.
    pub rsn: Option<SecurityInfo>,
}

impl fmt::Display for BssSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signal = self
            .signal_dbm
            .map(|dbm| dbm.to_string())
            .unwrap_or_default();

        write!(
            f,
            "BSS(Path: {}, SSID: {}, BSSID: {}, Signal: {}dBm)",
            self.path,
            self.ssid.as_deref().unwrap_or_default(),
            self.bssid.as_deref().unwrap_or_default(),
            signal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_display_matches_listing_format() {
        let summary = BssSummary {
            path: "/fi/w1/wpa_supplicant1/Interfaces/0/BSSs/7".to_string(),
            ssid: Some("home".to_string()),
            bssid: Some("00:1A:2B:3C:4D:5E".to_string()),
            signal_dbm: Some(-61),
            ..BssSummary::default()
        };

        assert_eq!(
            summary.to_string(),
            "BSS(Path: /fi/w1/wpa_supplicant1/Interfaces/0/BSSs/7, SSID: home, \
             BSSID: 00:1A:2B:3C:4D:5E, Signal: -61dBm)"
        );
    }

    #[test]
    fn summary_display_leaves_missing_fields_empty() {
        let summary = BssSummary {
            path: "/p".to_string(),
            ..BssSummary::default()
        };

        assert_eq!(summary.to_string(), "BSS(Path: /p, SSID: , BSSID: , Signal: dBm)");
    }

    #[test]
    fn logged_keeps_values_and_drops_errors() {
        let path = OwnedObjectPath::try_from("/p").unwrap();

        assert_eq!(logged(Ok::<_, SupplicantError>(3), "Age", &path), Some(3));
        assert_eq!(logged::<u32>(Err(SupplicantError::ScanFailed), "Age", &path), None);
    }
}
