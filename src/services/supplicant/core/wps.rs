use std::{collections::HashMap, fmt, ops::Deref};

use futures::{Stream, StreamExt, stream::BoxStream};
use zbus::{
    Connection,
    proxy::CacheProperties,
    zvariant::{OwnedObjectPath, OwnedValue, Value},
};

use crate::services::{
    common::owned_dict,
    supplicant::{RemoteObject, SupplicantError, interfaces, proxy::WpsProxy},
};

/// Which side of the WPS exchange the interface plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WpsRole {
    /// Join a network by obtaining credentials.
    #[default]
    Enrollee,
    /// Hand out credentials to an enrollee.
    Registrar,
}

impl WpsRole {
    /// The string wpa_supplicant expects in the `Role` argument.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enrollee => "enrollee",
            Self::Registrar => "registrar",
        }
    }
}

impl std::str::FromStr for WpsRole {
    type Err = SupplicantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enrollee" => Ok(Self::Enrollee),
            "registrar" => Ok(Self::Registrar),
            other => Err(SupplicantError::InvalidArgs(format!(
                "WPS role must be 'enrollee' or 'registrar', got '{other}'"
            ))),
        }
    }
}

/// Authentication method for WPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WpsKind {
    /// Push button configuration.
    #[default]
    Pbc,
    /// PIN entry.
    Pin,
}

impl WpsKind {
    /// The string wpa_supplicant expects in the `Type` argument.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pbc => "pbc",
            Self::Pin => "pin",
        }
    }
}

impl std::str::FromStr for WpsKind {
    type Err = SupplicantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pbc" => Ok(Self::Pbc),
            "pin" => Ok(Self::Pin),
            other => Err(SupplicantError::InvalidArgs(format!(
                "WPS type must be 'pbc' or 'pin', got '{other}'"
            ))),
        }
    }
}

/// Arguments for [`Wps::start`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WpsStartArgs {
    /// Enrollee or registrar.
    pub role: WpsRole,
    /// Push button or PIN.
    pub kind: WpsKind,
    /// PIN to use; the daemon generates one when absent in PIN mode.
    pub pin: Option<String>,
    /// Restrict the exchange to one BSS.
    pub bssid: Option<Vec<u8>>,
    /// P2P device address of the peer.
    pub p2p_device_address: Option<Vec<u8>>,
}

impl WpsStartArgs {
    pub(crate) fn to_args(&self) -> HashMap<&str, Value<'_>> {
        let mut args = HashMap::new();
        args.insert("Role", Value::from(self.role.as_str()));
        args.insert("Type", Value::from(self.kind.as_str()));

        if let Some(pin) = &self.pin {
            args.insert("Pin", Value::from(pin.as_str()));
        }
        if let Some(bssid) = &self.bssid {
            args.insert("Bssid", Value::from(bssid.clone()));
        }
        if let Some(address) = &self.p2p_device_address {
            args.insert("P2PDeviceAddress", Value::from(address.clone()));
        }

        args
    }
}

/// Notifications from the WPS facet.
#[derive(Debug, Clone, PartialEq)]
pub enum WpsEvent {
    /// Progress such as `success`, `fail`, `m2d` or `pbc-overlap`.
    Event {
        /// Event name.
        name: String,
        /// Event details.
        args: HashMap<String, OwnedValue>,
    },
    /// Credentials were received.
    Credentials(HashMap<String, OwnedValue>),
}

impl fmt::Display for WpsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event { name, .. } => write!(f, "Event({name})"),
            Self::Credentials(_) => f.write_str("Credentials"),
        }
    }
}

/// Wi-Fi Protected Setup facet of an interface.
#[derive(Debug, Clone)]
pub struct Wps {
    object: RemoteObject,
    proxy: WpsProxy<'static>,
}

impl Deref for Wps {
    type Target = RemoteObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl Wps {
    /// Wrap the WPS facet of the interface at `path`.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn new(connection: &Connection, path: OwnedObjectPath) -> Result<Self, SupplicantError> {
        let proxy = WpsProxy::builder(connection)
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            object: RemoteObject::new(connection.clone(), path, interfaces::WPS),
            proxy,
        })
    }

    /// Start a WPS exchange. The reply may carry a generated `Pin`.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` for an invalid argument combination.
    pub async fn start(
        &self,
        args: &WpsStartArgs,
    ) -> Result<HashMap<String, OwnedValue>, SupplicantError> {
        Ok(self.proxy.start(args.to_args()).await?)
    }

    /// Cancel an ongoing exchange.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn cancel(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.cancel().await?)
    }

    /// Space separated list of config methods.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn config_methods(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.config_methods().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_config_methods(&self, methods: &str) -> Result<(), SupplicantError> {
        self.object.set("ConfigMethods", Value::from(methods)).await
    }

    /// Whether received credentials become network blocks.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn process_credentials(&self) -> Result<bool, SupplicantError> {
        Ok(self.proxy.process_credentials().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_process_credentials(&self, enabled: bool) -> Result<(), SupplicantError> {
        self.object
            .set("ProcessCredentials", Value::from(enabled))
            .await
    }

    /// Stream of WPS notifications.
    ///
    /// # Errors
    /// Returns an error if the signal match rules cannot be added.
    pub async fn events(&self) -> Result<impl Stream<Item = WpsEvent> + Send + 'static, SupplicantError> {
        let events = self.proxy.receive_event().await?.filter_map(|signal| async move {
            let args = signal.args().ok()?;
            Some(WpsEvent::Event {
                name: args.name().to_string(),
                args: owned_dict(args.args()),
            })
        });

        let credentials = self
            .proxy
            .receive_credentials()
            .await?
            .filter_map(|signal| async move {
                let args = signal.args().ok()?;
                Some(WpsEvent::Credentials(owned_dict(args.credentials())))
            });

        let streams: Vec<BoxStream<'static, WpsEvent>> = vec![events.boxed(), credentials.boxed()];
        Ok(futures::stream::select_all(streams))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_args_carry_only_set_fields() {
        let args = WpsStartArgs::default();
        let dict = args.to_args();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("Role"), Some(&Value::from("enrollee")));
        assert_eq!(dict.get("Type"), Some(&Value::from("pbc")));
    }

    #[test]
    fn pin_mode_includes_pin_and_bssid() {
        let args = WpsStartArgs {
            kind: WpsKind::Pin,
            pin: Some("12345670".to_string()),
            bssid: Some(vec![0, 1, 2, 3, 4, 5]),
            ..WpsStartArgs::default()
        };
        let dict = args.to_args();

        assert_eq!(dict.get("Type"), Some(&Value::from("pin")));
        assert_eq!(dict.get("Pin"), Some(&Value::from("12345670")));
        assert!(dict.contains_key("Bssid"));
        assert!(!dict.contains_key("P2PDeviceAddress"));
    }

    #[test]
    fn role_and_kind_parse_from_text() {
        assert_eq!("registrar".parse::<WpsRole>().ok(), Some(WpsRole::Registrar));
        assert!("client".parse::<WpsRole>().is_err());
        assert_eq!("pin".parse::<WpsKind>().ok(), Some(WpsKind::Pin));
    }
}
