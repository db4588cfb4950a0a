use std::{collections::HashMap, fmt, time::Duration};

use tracing::{info, instrument};
use zbus::{
    Connection, Proxy,
    fdo::PropertiesProxy,
    names::{InterfaceName, MemberName},
    proxy::CacheProperties,
    zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value},
};

use super::{
    BUS_NAME, SupplicantError,
    signal::{SignalArgs, SignalQueue, SignalSubscription},
};
use crate::services::common::format_value;

/// Generic handle to one interface of one wpa_supplicant object.
///
/// Every typed wrapper embeds one of these and derefs to it, so raw property
/// access and signal subscriptions are available on all of them.
#[derive(Clone)]
pub struct RemoteObject {
    connection: Connection,
    path: OwnedObjectPath,
    interface: &'static str,
}

impl RemoteObject {
    pub(crate) fn new(
        connection: Connection,
        path: OwnedObjectPath,
        interface: &'static str,
    ) -> Self {
        Self {
            connection,
            path,
            interface,
        }
    }

    /// Full D-Bus object path.
    pub fn path(&self) -> &OwnedObjectPath {
        &self.path
    }

    /// D-Bus interface this handle talks to.
    pub fn interface(&self) -> &'static str {
        self.interface
    }

    /// Bus connection shared by every object of the same client.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    fn interface_name(&self) -> InterfaceName<'static> {
        InterfaceName::from_static_str_unchecked(self.interface)
    }

    async fn properties_proxy(&self) -> Result<PropertiesProxy<'static>, SupplicantError> {
        let proxy = PropertiesProxy::builder(&self.connection)
            .destination(BUS_NAME)?
            .path(self.path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(proxy)
    }

    /// Read one property as a raw value.
    ///
    /// # Errors
    /// Returns `SupplicantError::UnknownProperty` if the interface has no such
    /// property, or the mapped remote error.
    pub async fn get(&self, property: &str) -> Result<OwnedValue, SupplicantError> {
        let proxy = self.properties_proxy().await?;
        let value = proxy.get(self.interface_name(), property).await?;
        Ok(value)
    }

    /// Read every property of the interface.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn get_all(&self) -> Result<HashMap<String, OwnedValue>, SupplicantError> {
        let proxy = self.properties_proxy().await?;
        let values = proxy
            .get_all(self.interface_name())
            .await?;
        Ok(values)
    }

    /// Write one property.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` for values of the wrong type, or
    /// the mapped remote error.
    #[instrument(skip(self, value), fields(path = %self.path))]
    pub async fn set(&self, property: &str, value: Value<'_>) -> Result<(), SupplicantError> {
        info!("Setting `{}` -> `{}`", property, format_value(&value));

        let proxy = self.properties_proxy().await?;
        proxy.set(self.interface_name(), property, value).await?;
        Ok(())
    }

    async fn signal_stream(
        &self,
        signal: &str,
    ) -> Result<zbus::proxy::SignalStream<'static>, SupplicantError> {
        let member = MemberName::try_from(signal.to_string()).map_err(|e| {
            SupplicantError::DataConversionFailed {
                data_type: "signal name",
                reason: e.to_string(),
            }
        })?;

        let proxy = Proxy::new(
            &self.connection,
            BUS_NAME,
            self.path.clone(),
            self.interface,
        )
        .await?;

        Ok(proxy.receive_signal(member).await?)
    }

    /// Invoke `callback` with the arguments of every emission of `signal`.
    ///
    /// # Errors
    /// Returns an error if the signal name is invalid or the match rule cannot be added.
    pub async fn subscribe<F>(
        &self,
        signal: &str,
        callback: F,
    ) -> Result<SignalSubscription, SupplicantError>
    where
        F: FnMut(SignalArgs) + Send + 'static,
    {
        let stream = self.signal_stream(signal).await?;
        Ok(SignalSubscription::spawn(signal.to_string(), stream, callback))
    }

    /// Capture the next emission of `signal`.
    ///
    /// # Errors
    /// Returns an error if the signal name is invalid or the match rule cannot be added.
    pub async fn subscribe_once(&self, signal: &str) -> Result<SignalQueue, SupplicantError> {
        let stream = self.signal_stream(signal).await?;
        Ok(SignalQueue::spawn(signal.to_string(), stream))
    }

    /// Convenience for `subscribe_once(signal)?.next(timeout)`.
    ///
    /// # Errors
    /// See [`SignalQueue::next`].
    pub async fn wait_for(
        &self,
        signal: &str,
        timeout: Option<Duration>,
    ) -> Result<SignalArgs, SupplicantError> {
        self.subscribe_once(signal).await?.next(timeout).await
    }
}

impl fmt::Debug for RemoteObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteObject")
            .field("path", &self.path.as_str())
            .field("interface", &self.interface)
            .finish()
    }
}

impl PartialEq for RemoteObject {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.interface == other.interface
    }
}

/// Parse a user supplied object path.
///
/// # Errors
/// Returns `SupplicantError::DataConversionFailed` if `path` is not a valid object path.
pub fn parse_path(path: &str) -> Result<OwnedObjectPath, SupplicantError> {
    ObjectPath::try_from(path)
        .map(OwnedObjectPath::from)
        .map_err(|e| SupplicantError::DataConversionFailed {
            data_type: "object path",
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_path_accepts_object_paths() {
        let path = parse_path("/fi/w1/wpa_supplicant1/Interfaces/0");
        assert!(matches!(path, Ok(ref p) if p.as_str() == "/fi/w1/wpa_supplicant1/Interfaces/0"));
    }

    #[test]
    fn parse_path_rejects_garbage() {
        assert!(matches!(
            parse_path("wlan0"),
            Err(SupplicantError::DataConversionFailed { .. })
        ));
    }
}
