use std::time::Duration;

use tracing::warn;
use zbus::fdo;

/// Prefix shared by every error name wpa_supplicant replies with.
const REMOTE_ERROR_PREFIX: &str = "fi.w1.wpa_supplicant1.";

/// Errors raised by the wpa_supplicant client.
///
/// Remote failures carry the daemon's message text when it sent one.
#[derive(thiserror::Error, Debug)]
pub enum SupplicantError {
    /// Something failed inside wpa_supplicant for an unknown reason
    #[error("wpa_supplicant reported an unknown error: {0}")]
    UnknownError(String),

    /// Invalid entries were found in the passed arguments
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    /// The daemon ran out of memory while handling the call
    #[error("wpa_supplicant is out of memory: {0}")]
    NoMemory(String),

    /// wpa_supplicant already controls this interface
    #[error("interface already exists: {0}")]
    InterfaceExists(String),

    /// The interface is disabled and cannot serve the request
    #[error("interface is disabled: {0}")]
    InterfaceDisabled(String),

    /// Object path doesn't exist or doesn't represent an interface
    #[error("unknown interface: {0}")]
    InterfaceUnknown(String),

    /// Interface is not connected to any network
    #[error("interface is not connected: {0}")]
    NotConnected(String),

    /// A passed path doesn't point to any network object
    #[error("unknown network: {0}")]
    NetworkUnknown(String),

    /// A blob with this name is already stored on the interface
    #[error("blob already exists: {0}")]
    BlobExists(String),

    /// No blob with this name is stored on the interface
    #[error("unknown blob: {0}")]
    BlobUnknown(String),

    /// Probe request subscription is held by another client
    #[error("probe request subscription in use: {0}")]
    SubscriptionInUse(String),

    /// No probe request subscription exists to cancel
    #[error("no probe request subscription: {0}")]
    NoSubscription(String),

    /// Probe request subscription belongs to another client
    #[error("probe request subscription belongs to another client: {0}")]
    SubscriptionNotYou(String),

    /// P2P connect failed because the requested channel is busy
    #[error("P2P connect channel unavailable: {0}")]
    ConnectChannelUnavailable(String),

    /// P2P connect failed because the requested channel is unsupported
    #[error("P2P connect channel unsupported: {0}")]
    ConnectChannelUnsupported(String),

    /// P2P connect failed without a specific reason
    #[error("P2P connect failed: {0}")]
    ConnectUnspecified(String),

    /// wpa_supplicant is not registered on the bus
    #[error("wpa_supplicant service is not available: {0}")]
    ServiceUnavailable(String),

    /// The interface does not define the requested property
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// A remote error name this library does not know about
    #[error("remote error {name}: {message}")]
    Remote {
        /// Fully qualified D-Bus error name.
        name: String,
        /// Message sent along with the error.
        message: String,
    },

    /// Waiting for a reply or signal took longer than allowed
    #[error("timed out after {timeout:?} waiting for {operation}")]
    MethodTimeout {
        /// What was being waited on.
        operation: String,
        /// How long the wait lasted.
        timeout: Duration,
    },

    /// The signal stream ended before the awaited emission arrived
    #[error("signal stream for {0} ended")]
    SignalClosed(String),

    /// A scan completed but the daemon reported failure
    #[error("ScanDone signal received without success")]
    ScanFailed,

    /// A BSS reported a frequency outside the known Wi-Fi bands
    #[error("unexpected frequency {0} MHz")]
    UnexpectedFrequency(u32),

    /// Opening the bus connection failed
    #[error("failed to connect to D-Bus: {0}")]
    ConnectionFailed(String),

    /// Data returned by the daemon had an unexpected shape
    #[error("failed to parse {data_type}: {reason}")]
    DataConversionFailed {
        /// Type of data that failed to convert.
        data_type: &'static str,
        /// Reason for conversion failure.
        reason: String,
    },

    /// Transport level D-Bus failure
    #[error("D-Bus operation failed: {0}")]
    Dbus(#[source] zbus::Error),
}

impl SupplicantError {
    /// Maps a remote D-Bus error name to the matching variant.
    ///
    /// Unrecognised names are logged and kept verbatim in [`SupplicantError::Remote`].
    pub fn from_remote(name: &str, message: Option<String>) -> Self {
        let message = message.unwrap_or_default();

        if let Some(short) = name.strip_prefix(REMOTE_ERROR_PREFIX) {
            match short {
                "UnknownError" => return Self::UnknownError(message),
                "InvalidArgs" => return Self::InvalidArgs(message),
                "NoMemory" => return Self::NoMemory(message),
                "InterfaceExists" => return Self::InterfaceExists(message),
                "InterfaceDisabled" => return Self::InterfaceDisabled(message),
                "InterfaceUnknown" => return Self::InterfaceUnknown(message),
                "NotConnected" => return Self::NotConnected(message),
                "NetworkUnknown" => return Self::NetworkUnknown(message),
                "BlobExists" => return Self::BlobExists(message),
                "BlobUnknown" => return Self::BlobUnknown(message),
                "SubscriptionInUse" => return Self::SubscriptionInUse(message),
                "NoSubscription" => return Self::NoSubscription(message),
                "SubscriptionNotYou" => return Self::SubscriptionNotYou(message),
                "ConnectChannelUnavailable" => return Self::ConnectChannelUnavailable(message),
                "ConnectChannelUnsupported" => return Self::ConnectChannelUnsupported(message),
                "ConnectUnspecifiedError" => return Self::ConnectUnspecified(message),
                _ => {}
            }
        }

        match name {
            "org.freedesktop.DBus.Error.ServiceUnknown"
            | "org.freedesktop.DBus.Error.NameHasNoOwner" => Self::ServiceUnavailable(message),
            "org.freedesktop.DBus.Error.UnknownProperty" => Self::UnknownProperty(message),
            "org.freedesktop.DBus.Error.InvalidArgs" => Self::InvalidArgs(message),
            _ => {
                warn!("Unrecognized error: {name}");
                Self::Remote {
                    name: name.to_string(),
                    message,
                }
            }
        }
    }

    /// Whether the error came back from the daemon rather than the transport.
    pub fn is_remote(&self) -> bool {
        !matches!(
            self,
            Self::MethodTimeout { .. }
                | Self::SignalClosed(_)
                | Self::ScanFailed
                | Self::UnexpectedFrequency(_)
                | Self::ConnectionFailed(_)
                | Self::DataConversionFailed { .. }
                | Self::Dbus(_)
        )
    }
}

impl From<zbus::Error> for SupplicantError {
    fn from(err: zbus::Error) -> Self {
        match err {
            zbus::Error::MethodError(name, message, _) => Self::from_remote(name.as_str(), message),
            zbus::Error::FDO(fdo_err) => Self::from(*fdo_err),
            other => Self::Dbus(other),
        }
    }
}

impl From<fdo::Error> for SupplicantError {
    fn from(err: fdo::Error) -> Self {
        match err {
            fdo::Error::ZBus(inner) => Self::from(inner),
            fdo::Error::UnknownProperty(message) => Self::UnknownProperty(message),
            fdo::Error::InvalidArgs(message) => Self::InvalidArgs(message),
            fdo::Error::ServiceUnknown(message) | fdo::Error::NameHasNoOwner(message) => {
                Self::ServiceUnavailable(message)
            }
            other => Self::Dbus(zbus::Error::FDO(Box::new(other))),
        }
    }
}

impl From<zbus::zvariant::Error> for SupplicantError {
    fn from(err: zbus::zvariant::Error) -> Self {
        Self::DataConversionFailed {
            data_type: "D-Bus value",
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_remote_names_map_to_variants() {
        let err = SupplicantError::from_remote(
            "fi.w1.wpa_supplicant1.InterfaceExists",
            Some("wpa_supplicant already controls this interface.".to_string()),
        );
        assert!(matches!(err, SupplicantError::InterfaceExists(ref m) if m.contains("already")));

        assert!(matches!(
            SupplicantError::from_remote("fi.w1.wpa_supplicant1.InterfaceUnknown", None),
            SupplicantError::InterfaceUnknown(_)
        ));
        assert!(matches!(
            SupplicantError::from_remote("fi.w1.wpa_supplicant1.NotConnected", None),
            SupplicantError::NotConnected(_)
        ));
        assert!(matches!(
            SupplicantError::from_remote("fi.w1.wpa_supplicant1.NetworkUnknown", None),
            SupplicantError::NetworkUnknown(_)
        ));
        assert!(matches!(
            SupplicantError::from_remote("fi.w1.wpa_supplicant1.ConnectUnspecifiedError", None),
            SupplicantError::ConnectUnspecified(_)
        ));
    }

    #[test]
    fn freedesktop_names_are_recognised() {
        assert!(matches!(
            SupplicantError::from_remote("org.freedesktop.DBus.Error.ServiceUnknown", None),
            SupplicantError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            SupplicantError::from_remote(
                "org.freedesktop.DBus.Error.UnknownProperty",
                Some("Bogus".into())
            ),
            SupplicantError::UnknownProperty(_)
        ));
    }

    #[test]
    fn unknown_names_keep_name_and_message() {
        let err = SupplicantError::from_remote(
            "fi.w1.wpa_supplicant1.SomethingNew",
            Some("details".to_string()),
        );

        match err {
            SupplicantError::Remote { name, message } => {
                assert_eq!(name, "fi.w1.wpa_supplicant1.SomethingNew");
                assert_eq!(message, "details");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn fdo_errors_are_unwrapped() {
        let err = SupplicantError::from(fdo::Error::UnknownProperty("Bogus".into()));
        assert!(matches!(err, SupplicantError::UnknownProperty(_)));

        let err = SupplicantError::from(fdo::Error::Failed("boom".into()));
        assert!(matches!(err, SupplicantError::Dbus(_)));
    }

    #[test]
    fn local_errors_are_not_remote() {
        assert!(!SupplicantError::ScanFailed.is_remote());
        assert!(
            !SupplicantError::MethodTimeout {
                operation: "ScanDone".to_string(),
                timeout: Duration::from_secs(10)
            }
            .is_remote()
        );
        assert!(SupplicantError::NotConnected(String::new()).is_remote());
    }
}
