use std::{collections::HashMap, fmt};

use serde::Serialize;
use zbus::zvariant::{OwnedObjectPath, Value};

use crate::services::supplicant::ScanType;

/// Arguments for `Supplicant::create_interface`.
///
/// Unset optional fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateInterfaceArgs {
    /// Kernel name of the network interface.
    pub ifname: String,
    /// Driver backend, e.g. `nl80211` or `wext`.
    pub driver: Option<String>,
    /// Bridge the interface is attached to.
    pub bridge_ifname: Option<String>,
    /// Configuration file the daemon should load for the interface.
    pub config_file: Option<String>,
}

impl CreateInterfaceArgs {
    /// Arguments naming only the interface.
    pub fn new(ifname: impl Into<String>) -> Self {
        Self {
            ifname: ifname.into(),
            ..Self::default()
        }
    }

    pub(crate) fn to_args(&self) -> HashMap<&str, Value<'_>> {
        let mut args = HashMap::new();
        args.insert("Ifname", Value::from(self.ifname.as_str()));

        if let Some(driver) = &self.driver {
            args.insert("Driver", Value::from(driver.as_str()));
        }
        if let Some(bridge) = &self.bridge_ifname {
            args.insert("BridgeIfname", Value::from(bridge.as_str()));
        }
        if let Some(config_file) = &self.config_file {
            args.insert("ConfigFile", Value::from(config_file.as_str()));
        }

        args
    }
}

/// Arguments for `Interface::scan`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Active or passive scan.
    pub scan_type: ScanType,
    /// SSIDs to probe for in an active scan.
    pub ssids: Vec<Vec<u8>>,
    /// Extra information elements for probe requests.
    pub ies: Vec<Vec<u8>>,
    /// `(center frequency MHz, width MHz)` pairs to restrict the scan to.
    pub channels: Vec<(u32, u32)>,
    /// Whether the daemon may roam based on the results.
    pub allow_roam: Option<bool>,
}

impl ScanOptions {
    /// Scan of the given type with no restrictions.
    pub fn new(scan_type: ScanType) -> Self {
        Self {
            scan_type,
            ..Self::default()
        }
    }

    /// Probe for `ssid` explicitly.
    pub fn with_ssid(mut self, ssid: impl Into<Vec<u8>>) -> Self {
        self.ssids.push(ssid.into());
        self
    }

    pub(crate) fn to_args(&self) -> HashMap<&str, Value<'_>> {
        let mut args = HashMap::new();
        args.insert("Type", Value::from(self.scan_type.as_str()));

        if !self.ssids.is_empty() {
            args.insert("SSIDs", Value::from(self.ssids.clone()));
        }
        if !self.ies.is_empty() {
            args.insert("IEs", Value::from(self.ies.clone()));
        }
        if !self.channels.is_empty() {
            args.insert("Channels", Value::from(self.channels.clone()));
        }
        if let Some(allow_roam) = self.allow_roam {
            args.insert("AllowRoam", Value::from(allow_roam));
        }

        args
    }
}

/// Notifications from an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceEvent {
    /// A scan finished, successfully or not.
    ScanDone(bool),
    /// A BSS appeared.
    BssAdded(OwnedObjectPath),
    /// A BSS disappeared.
    BssRemoved(OwnedObjectPath),
    /// A network block was added.
    NetworkAdded(OwnedObjectPath),
    /// A network block was removed.
    NetworkRemoved(OwnedObjectPath),
    /// A network was selected.
    NetworkSelected(OwnedObjectPath),
    /// EAP progress.
    EapStatus {
        /// Status name such as `started` or `completion`.
        status: String,
        /// Status detail.
        parameter: String,
    },
    /// A station was authorized (AP mode).
    StaAuthorized(String),
    /// A station was deauthorized (AP mode).
    StaDeauthorized(String),
    /// Names of properties that changed.
    PropertiesChanged(Vec<String>),
}

impl fmt::Display for InterfaceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScanDone(success) => write!(f, "ScanDone(success: {success})"),
            Self::BssAdded(path) => write!(f, "BSSAdded({path})"),
            Self::BssRemoved(path) => write!(f, "BSSRemoved({path})"),
            Self::NetworkAdded(path) => write!(f, "NetworkAdded({path})"),
            Self::NetworkRemoved(path) => write!(f, "NetworkRemoved({path})"),
            Self::NetworkSelected(path) => write!(f, "NetworkSelected({path})"),
            Self::EapStatus { status, parameter } => write!(f, "EAP({status}, {parameter})"),
            Self::StaAuthorized(mac) => write!(f, "StaAuthorized({mac})"),
            Self::StaDeauthorized(mac) => write!(f, "StaDeauthorized({mac})"),
            Self::PropertiesChanged(names) => write!(f, "PropertiesChanged({})", names.join(", ")),
        }
    }
}

/// Point-in-time view of an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceSummary {
    /// Object path of the interface.
    pub path: String,
    /// Kernel interface name.
    pub ifname: String,
    /// Connection state.
    pub state: String,
}

impl fmt::Display for InterfaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Interface(Path: {}, Name: {}, State: {})",
            self.path, self.ifname, self.state
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_args_omit_unset_fields() {
        let args = CreateInterfaceArgs::new("wlan0");
        let dict = args.to_args();

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("Ifname"), Some(&Value::from("wlan0")));
    }

    #[test]
    fn create_args_include_driver_and_config_file() {
        let args = CreateInterfaceArgs {
            driver: Some("nl80211".to_string()),
            config_file: Some("/etc/wpa_supplicant/wlan0.conf".to_string()),
            ..CreateInterfaceArgs::new("wlan0")
        };
        let dict = args.to_args();

        assert_eq!(dict.get("Driver"), Some(&Value::from("nl80211")));
        assert!(dict.contains_key("ConfigFile"));
        assert!(!dict.contains_key("BridgeIfname"));
    }

    #[test]
    fn scan_options_default_to_active_without_filters() {
        let options = ScanOptions::default();
        let dict = options.to_args();

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("Type"), Some(&Value::from("active")));
    }

    #[test]
    fn scan_options_carry_ssids_and_roam_flag() {
        let options = ScanOptions {
            allow_roam: Some(false),
            ..ScanOptions::new(ScanType::Passive).with_ssid("hidden")
        };
        let dict = options.to_args();

        assert_eq!(dict.get("Type"), Some(&Value::from("passive")));
        assert_eq!(
            dict.get("SSIDs"),
            Some(&Value::from(vec![b"hidden".to_vec()]))
        );
        assert_eq!(dict.get("AllowRoam"), Some(&Value::from(false)));
        assert!(!dict.contains_key("Channels"));
    }

    #[test]
    fn interface_summary_display() {
        let summary = InterfaceSummary {
            path: "/fi/w1/wpa_supplicant1/Interfaces/0".to_string(),
            ifname: "wlan0".to_string(),
            state: "completed".to_string(),
        };

        assert_eq!(
            summary.to_string(),
            "Interface(Path: /fi/w1/wpa_supplicant1/Interfaces/0, Name: wlan0, State: completed)"
        );
    }

    #[test]
    fn events_render_with_signal_names() {
        let path = OwnedObjectPath::try_from("/fi/w1/wpa_supplicant1/Interfaces/0/BSSs/3").unwrap();

        assert_eq!(
            InterfaceEvent::BssAdded(path).to_string(),
            "BSSAdded(/fi/w1/wpa_supplicant1/Interfaces/0/BSSs/3)"
        );
        assert_eq!(
            InterfaceEvent::PropertiesChanged(vec!["State".into(), "Scanning".into()]).to_string(),
            "PropertiesChanged(State, Scanning)"
        );
    }
}
