//! wpa_supplicant state types.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::services::supplicant::SupplicantError;

/// Connection state of an interface as reported by the `State` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceState {
    /// Not associated and not trying to associate.
    Disconnected,
    /// The network interface is disabled.
    InterfaceDisabled,
    /// No enabled network or scanning is suspended.
    Inactive,
    /// Looking for a network to join.
    Scanning,
    /// Authenticating with a selected BSS.
    Authenticating,
    /// Associating with a selected BSS.
    Associating,
    /// Association finished; waiting for key exchange or IEEE 802.1X.
    Associated,
    /// WPA 4-Way Handshake in progress.
    FourWayHandshake,
    /// WPA Group Handshake in progress.
    GroupHandshake,
    /// Connection is fully established.
    Completed,
    /// A state string this library does not know about.
    #[default]
    Unknown,
}

impl InterfaceState {
    /// Parse the D-Bus string representation. Unknown strings map to [`InterfaceState::Unknown`].
    pub fn from_dbus(value: &str) -> Self {
        match value {
            "disconnected" => Self::Disconnected,
            "interface_disabled" => Self::InterfaceDisabled,
            "inactive" => Self::Inactive,
            "scanning" => Self::Scanning,
            "authenticating" => Self::Authenticating,
            "associating" => Self::Associating,
            "associated" => Self::Associated,
            "4way_handshake" => Self::FourWayHandshake,
            "group_handshake" => Self::GroupHandshake,
            "completed" => Self::Completed,
            _ => Self::Unknown,
        }
    }

    /// The string wpa_supplicant uses for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::InterfaceDisabled => "interface_disabled",
            Self::Inactive => "inactive",
            Self::Scanning => "scanning",
            Self::Authenticating => "authenticating",
            Self::Associating => "associating",
            Self::Associated => "associated",
            Self::FourWayHandshake => "4way_handshake",
            Self::GroupHandshake => "group_handshake",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the interface has a usable link.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Display for InterfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global logging verbosity of the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    /// Everything, including raw message dumps.
    MsgDump,
    /// Debug and above.
    Debug,
    /// Informational and above.
    Info,
    /// Warnings and errors.
    Warning,
    /// Errors only.
    Error,
    /// Even more verbose than `msgdump`.
    Excessive,
}

impl DebugLevel {
    /// The string wpa_supplicant uses for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MsgDump => "msgdump",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Excessive => "excessive",
        }
    }
}

impl FromStr for DebugLevel {
    type Err = SupplicantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "msgdump" => Ok(Self::MsgDump),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "excessive" => Ok(Self::Excessive),
            other => Err(SupplicantError::DataConversionFailed {
                data_type: "DebugLevel",
                reason: format!("unknown debug level '{other}'"),
            }),
        }
    }
}

impl Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of the local device in a Wi-Fi Direct setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum P2pRole {
    /// Group owner.
    GroupOwner,
    /// Group client.
    Client,
    /// Not part of any group.
    Device,
}

impl P2pRole {
    /// Parse the D-Bus string representation. Unknown strings map to [`P2pRole::Device`].
    pub fn from_dbus(value: &str) -> Self {
        match value {
            "GO" => Self::GroupOwner,
            "client" => Self::Client,
            _ => Self::Device,
        }
    }

    /// The string wpa_supplicant uses for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GroupOwner => "GO",
            Self::Client => "client",
            Self::Device => "device",
        }
    }
}

impl Display for P2pRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_states_parse_from_dbus_strings() {
        assert_eq!(InterfaceState::from_dbus("completed"), InterfaceState::Completed);
        assert_eq!(
            InterfaceState::from_dbus("4way_handshake"),
            InterfaceState::FourWayHandshake
        );
        assert_eq!(InterfaceState::from_dbus("bogus"), InterfaceState::Unknown);
        assert_eq!(InterfaceState::FourWayHandshake.to_string(), "4way_handshake");
    }

    #[test]
    fn debug_level_rejects_unknown_names() {
        assert_eq!("excessive".parse::<DebugLevel>().ok(), Some(DebugLevel::Excessive));
        assert!("verbose".parse::<DebugLevel>().is_err());
    }

    #[test]
    fn p2p_role_falls_back_to_device() {
        assert_eq!(P2pRole::from_dbus("GO"), P2pRole::GroupOwner);
        assert_eq!(P2pRole::from_dbus(""), P2pRole::Device);
    }
}
