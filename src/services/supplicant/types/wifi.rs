//! Wi-Fi radio and security types.

use std::{
    collections::HashMap,
    fmt::{self, Display},
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use zbus::zvariant::OwnedValue;

use crate::services::{
    common::{value_as_str, value_as_string_vec},
    supplicant::SupplicantError,
};

/// Kind of scan to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    /// Send probe requests.
    #[default]
    Active,
    /// Only listen for beacons.
    Passive,
}

impl ScanType {
    /// The string wpa_supplicant expects in the `Type` scan argument.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Passive => "passive",
        }
    }
}

impl Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ScanType {
    type Err = SupplicantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "passive" => Ok(Self::Passive),
            other => Err(SupplicantError::InvalidArgs(format!(
                "unknown scan type '{other}', expected active or passive"
            ))),
        }
    }
}

/// Operating mode of a BSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BssMode {
    /// Independent BSS without an access point.
    AdHoc,
    /// Regular access point.
    Infrastructure,
    /// 802.11s mesh.
    Mesh,
    /// Mode string not recognised.
    #[default]
    Unknown,
}

impl BssMode {
    /// Parse the D-Bus string representation.
    pub fn from_dbus(value: &str) -> Self {
        match value {
            "ad-hoc" => Self::AdHoc,
            "infrastructure" => Self::Infrastructure,
            "mesh" => Self::Mesh,
            _ => Self::Unknown,
        }
    }

    /// The string wpa_supplicant uses for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdHoc => "ad-hoc",
            Self::Infrastructure => "infrastructure",
            Self::Mesh => "mesh",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for BssMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WPA or RSN information advertised by a BSS.
///
/// An empty `key_mgmt` list means the BSS does not support the protocol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SecurityInfo {
    /// Key management suites such as `wpa-psk` or `wpa-eap`.
    pub key_mgmt: Vec<String>,
    /// Pairwise ciphers.
    pub pairwise: Vec<String>,
    /// Group cipher.
    pub group: String,
    /// Management group cipher (RSN only).
    pub mgmt_group: String,
}

impl SecurityInfo {
    /// Build from the `a{sv}` dictionary of the `WPA` or `RSN` property.
    pub fn from_dict(dict: &HashMap<String, OwnedValue>) -> Self {
        let list = |key: &str| dict.get(key).map(|v| value_as_string_vec(v)).unwrap_or_default();
        let text = |key: &str| {
            dict.get(key)
                .and_then(|v| value_as_str(v).map(str::to_string))
                .unwrap_or_default()
        };

        Self {
            key_mgmt: list("KeyMgmt"),
            pairwise: list("Pairwise"),
            group: text("Group"),
            mgmt_group: text("MgmtGroup"),
        }
    }

    /// Whether any key management suite is advertised.
    pub fn is_supported(&self) -> bool {
        !self.key_mgmt.is_empty()
    }
}

/// Coarse security classification of a BSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkType {
    /// No privacy.
    Open,
    /// Privacy without WPA or RSN key management.
    Wep,
    /// WPA key management.
    Wpa,
    /// RSN key management.
    Wpa2,
}

impl NetworkType {
    /// Classify from the privacy bit and the advertised security suites.
    ///
    /// RSN wins over WPA; privacy without either is WEP.
    pub fn classify(privacy: bool, wpa: &SecurityInfo, rsn: &SecurityInfo) -> Self {
        if !privacy {
            return Self::Open;
        }

        if rsn.is_supported() {
            return Self::Wpa2;
        }

        if wpa.is_supported() {
            return Self::Wpa;
        }

        Self::Wep
    }

    /// Upper case label used in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Wep => "WEP",
            Self::Wpa => "WPA",
            Self::Wpa2 => "WPA2",
        }
    }
}

impl Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel number for a frequency in MHz.
///
/// Covers the 2.4 GHz, 5 GHz and 6 GHz bands.
///
/// # Errors
/// Returns `SupplicantError::UnexpectedFrequency` for frequencies outside those bands.
pub fn channel_from_frequency(frequency: u32) -> Result<u32, SupplicantError> {
    match frequency {
        2484 => Ok(14),
        2412..=2472 => Ok(1 + (frequency - 2412) / 5),
        5160..=5885 => Ok((frequency - 5000) / 5),
        5955..=7115 => Ok((frequency - 5950) / 5),
        _ => Err(SupplicantError::UnexpectedFrequency(frequency)),
    }
}

/// Signal quality in percent for a level in dBm.
pub fn signal_quality(dbm: i32) -> u8 {
    match dbm {
        ..=-100 => 0,
        -50.. => 100,
        level => (2 * (level + 100)) as u8,
    }
}

#[cfg(test)]
mod tests {
    use zbus::zvariant::Value;

    use super::*;

    fn rsn_psk() -> SecurityInfo {
        SecurityInfo {
            key_mgmt: vec!["wpa-psk".to_string()],
            pairwise: vec!["ccmp".to_string()],
            group: "ccmp".to_string(),
            mgmt_group: String::new(),
        }
    }

    #[test]
    fn scan_type_parses_cli_words() {
        assert_eq!("passive".parse::<ScanType>().ok(), Some(ScanType::Passive));
        assert!(matches!(
            "sideways".parse::<ScanType>(),
            Err(SupplicantError::InvalidArgs(_))
        ));
    }

    #[test]
    fn channels_in_the_24ghz_band() {
        assert_eq!(channel_from_frequency(2412).ok(), Some(1));
        assert_eq!(channel_from_frequency(2437).ok(), Some(6));
        assert_eq!(channel_from_frequency(2472).ok(), Some(13));
        assert_eq!(channel_from_frequency(2484).ok(), Some(14));
    }

    #[test]
    fn channels_in_the_5_and_6ghz_bands() {
        assert_eq!(channel_from_frequency(5180).ok(), Some(36));
        assert_eq!(channel_from_frequency(5825).ok(), Some(165));
        assert_eq!(channel_from_frequency(5955).ok(), Some(1));
        assert_eq!(channel_from_frequency(6115).ok(), Some(33));
    }

    #[test]
    fn out_of_band_frequency_is_an_error() {
        assert!(matches!(
            channel_from_frequency(2400),
            Err(SupplicantError::UnexpectedFrequency(2400))
        ));
        assert!(channel_from_frequency(900).is_err());
    }

    #[test]
    fn signal_quality_is_clamped() {
        assert_eq!(signal_quality(-120), 0);
        assert_eq!(signal_quality(-100), 0);
        assert_eq!(signal_quality(-75), 50);
        assert_eq!(signal_quality(-50), 100);
        assert_eq!(signal_quality(-30), 100);
    }

    #[test]
    fn network_type_follows_privacy_and_suites() {
        let none = SecurityInfo::default();

        assert_eq!(NetworkType::classify(false, &rsn_psk(), &rsn_psk()), NetworkType::Open);
        assert_eq!(NetworkType::classify(true, &none, &rsn_psk()), NetworkType::Wpa2);
        assert_eq!(NetworkType::classify(true, &rsn_psk(), &rsn_psk()), NetworkType::Wpa2);
        assert_eq!(NetworkType::classify(true, &rsn_psk(), &none), NetworkType::Wpa);
        assert_eq!(NetworkType::classify(true, &none, &none), NetworkType::Wep);
    }

    #[test]
    fn security_info_reads_rsn_dictionary() {
        let mut dict = HashMap::new();
        dict.insert(
            "KeyMgmt".to_string(),
            OwnedValue::try_from(Value::from(vec!["wpa-psk".to_string(), "sae".to_string()]))
                .unwrap(),
        );
        dict.insert(
            "Group".to_string(),
            OwnedValue::try_from(Value::from("ccmp")).unwrap(),
        );

        let info = SecurityInfo::from_dict(&dict);

        assert_eq!(info.key_mgmt, vec!["wpa-psk", "sae"]);
        assert_eq!(info.group, "ccmp");
        assert!(info.pairwise.is_empty());
        assert!(info.is_supported());
    }

    #[test]
    fn bss_mode_parses_known_modes() {
        assert_eq!(BssMode::from_dbus("infrastructure"), BssMode::Infrastructure);
        assert_eq!(BssMode::from_dbus("ad-hoc"), BssMode::AdHoc);
        assert_eq!(BssMode::from_dbus("station"), BssMode::Unknown);
    }
}
