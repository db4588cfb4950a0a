use std::{collections::HashMap, fmt, ops::Deref, sync::Arc, time::Duration};

use futures::{Stream, StreamExt, stream::BoxStream};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use zbus::{
    Connection,
    connection::Builder as ConnectionBuilder,
    proxy::CacheProperties,
    zvariant::{ObjectPath, OwnedObjectPath, Value},
};

use crate::config::{BusKind, DbusConfig};

use super::{
    CreateInterfaceArgs, DebugLevel, Interface, InterfaceSummary, ROOT_PATH, RemoteObject,
    SupplicantError, interfaces, proxy::SupplicantProxy,
};

/// How long a blocking scan waits for `ScanDone` unless configured otherwise.
pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_secs(10);

/// Notifications from the root object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplicantEvent {
    /// An interface was added.
    InterfaceAdded(OwnedObjectPath),
    /// An interface was removed.
    InterfaceRemoved(OwnedObjectPath),
    /// Names of properties that changed.
    PropertiesChanged(Vec<String>),
}

impl fmt::Display for SupplicantEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InterfaceAdded(path) => write!(f, "InterfaceAdded({path})"),
            Self::InterfaceRemoved(path) => write!(f, "InterfaceRemoved({path})"),
            Self::PropertiesChanged(names) => {
                write!(f, "PropertiesChanged({})", names.join(", "))
            }
        }
    }
}

/// Entry point to wpa_supplicant over D-Bus.
///
/// Interface wrappers are cached by object path, so repeated lookups of the
/// same interface hand back the same [`Arc`].
#[derive(Debug, Clone)]
pub struct Supplicant {
    object: RemoteObject,
    proxy: SupplicantProxy<'static>,
    interfaces: Arc<RwLock<HashMap<OwnedObjectPath, Arc<Interface>>>>,
}

impl Deref for Supplicant {
    type Target = RemoteObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl Supplicant {
    /// Connect on the system bus.
    ///
    /// # Errors
    /// Returns `SupplicantError::ConnectionFailed` if the bus cannot be reached.
    pub async fn connect() -> Result<Self, SupplicantError> {
        Self::connect_with(&DbusConfig::default()).await
    }

    /// Connect on the bus selected by `config`.
    ///
    /// An explicit address wins over the bus kind.
    ///
    /// # Errors
    /// Returns `SupplicantError::ConnectionFailed` if the bus cannot be reached.
    #[instrument(skip(config), fields(bus = ?config.bus))]
    pub async fn connect_with(config: &DbusConfig) -> Result<Self, SupplicantError> {
        let connection = match (&config.address, config.bus) {
            (Some(address), _) => {
                ConnectionBuilder::address(address.as_str())
                    .map_err(|e| SupplicantError::ConnectionFailed(e.to_string()))?
                    .build()
                    .await
            }
            (None, BusKind::System) => Connection::system().await,
            (None, BusKind::Session) => Connection::session().await,
        }
        .map_err(|e| SupplicantError::ConnectionFailed(e.to_string()))?;

        debug!("Connected to D-Bus");
        Self::from_connection(connection).await
    }

    /// Use an existing bus connection.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the root proxy cannot be created.
    pub async fn from_connection(connection: Connection) -> Result<Self, SupplicantError> {
        let proxy = SupplicantProxy::builder(&connection)
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        let path = OwnedObjectPath::try_from(ROOT_PATH)?;

        Ok(Self {
            object: RemoteObject::new(connection, path, interfaces::ROOT),
            proxy,
            interfaces: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    async fn cached_interface(
        &self,
        path: OwnedObjectPath,
    ) -> Result<Arc<Interface>, SupplicantError> {
        if let Some(interface) = self.interfaces.read().await.get(&path) {
            return Ok(interface.clone());
        }

        let interface = Arc::new(Interface::new(self.connection(), path.clone()).await?);

        let mut cache = self.interfaces.write().await;
        Ok(cache.entry(path).or_insert(interface).clone())
    }

    /// Look up an interface the daemon already controls.
    ///
    /// # Errors
    /// Returns `SupplicantError::InterfaceUnknown` if the interface is not managed.
    pub async fn get_interface(&self, ifname: &str) -> Result<Arc<Interface>, SupplicantError> {
        let path = self.proxy.get_interface(ifname).await?;
        self.cached_interface(path).await
    }

    /// Ask the daemon to control a network interface.
    ///
    /// # Errors
    /// Returns `SupplicantError::InterfaceExists` if it is already controlled.
    #[instrument(skip(self))]
    pub async fn create_interface(
        &self,
        args: &CreateInterfaceArgs,
    ) -> Result<Arc<Interface>, SupplicantError> {
        let path = self.proxy.create_interface(args.to_args()).await?;
        info!("Created interface {} at {}", args.ifname, path);
        self.cached_interface(path).await
    }

    /// Stop controlling an interface.
    ///
    /// # Errors
    /// Returns `SupplicantError::InterfaceUnknown` if `path` is not an interface.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn remove_interface(&self, path: &ObjectPath<'_>) -> Result<(), SupplicantError> {
        self.proxy.remove_interface(path).await?;

        let owned = OwnedObjectPath::from(path.clone());
        self.interfaces.write().await.remove(&owned);
        Ok(())
    }

    /// Announce that the next disconnect is expected.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn expect_disconnect(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.expect_disconnect().await?)
    }

    /// Wrappers for every controlled interface.
    ///
    /// # Errors
    /// Returns the mapped remote error if the interface list cannot be read.
    pub async fn interface_objects(&self) -> Result<Vec<Arc<Interface>>, SupplicantError> {
        let mut list = Vec::new();
        for path in self.interfaces().await? {
            list.push(self.cached_interface(path).await?);
        }
        Ok(list)
    }

    /// Object paths of every controlled interface.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn interfaces(&self) -> Result<Vec<OwnedObjectPath>, SupplicantError> {
        Ok(self.proxy.interfaces().await?)
    }

    /// Global debug level.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn debug_level(&self) -> Result<DebugLevel, SupplicantError> {
        self.proxy.debug_level().await?.parse()
    }

    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_debug_level(&self, level: DebugLevel) -> Result<(), SupplicantError> {
        self.object
            .set("DebugLevel", Value::from(level.as_str()))
            .await
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn debug_timestamp(&self) -> Result<bool, SupplicantError> {
        Ok(self.proxy.debug_timestamp().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_debug_timestamp(&self, enabled: bool) -> Result<(), SupplicantError> {
        self.object
            .set("DebugTimestamp", Value::from(enabled))
            .await
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn debug_show_keys(&self) -> Result<bool, SupplicantError> {
        Ok(self.proxy.debug_show_keys().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_debug_show_keys(&self, enabled: bool) -> Result<(), SupplicantError> {
        self.object
            .set("DebugShowKeys", Value::from(enabled))
            .await
    }

    /// EAP methods the daemon was built with.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn eap_methods(&self) -> Result<Vec<String>, SupplicantError> {
        Ok(self.proxy.eap_methods().await?)
    }

    /// Optional features such as `ap`, `p2p` or `mesh`.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn capabilities(&self) -> Result<Vec<String>, SupplicantError> {
        Ok(self.proxy.capabilities().await?)
    }

    /// Wi-Fi Display information elements.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn wfd_ies(&self) -> Result<Vec<u8>, SupplicantError> {
        Ok(self.proxy.wfd_ies().await?)
    }

    /// Stream of root object notifications.
    ///
    /// # Errors
    /// Returns an error if the signal match rules cannot be added.
    pub async fn events(
        &self,
    ) -> Result<impl Stream<Item = SupplicantEvent> + Send + 'static, SupplicantError> {
        let added = self
            .proxy
            .receive_interface_added()
            .await?
            .filter_map(|s| async move {
                let args = s.args().ok()?;
                Some(SupplicantEvent::InterfaceAdded(OwnedObjectPath::from(
                    args.path().clone(),
                )))
            });

        let cache = self.interfaces.clone();
        let removed = self
            .proxy
            .receive_interface_removed()
            .await?
            .filter_map(move |s| {
                let cache = cache.clone();
                async move {
                    let args = s.args().ok()?;
                    let path = OwnedObjectPath::from(args.path().clone());
                    cache.write().await.remove(&path);
                    Some(SupplicantEvent::InterfaceRemoved(path))
                }
            });

        let changed = self
            .proxy
            .receive_properties_changed()
            .await?
            .filter_map(|s| async move {
                let args = s.args().ok()?;
                let mut names: Vec<String> =
                    args.properties().keys().map(|k| k.to_string()).collect();
                names.sort();
                Some(SupplicantEvent::PropertiesChanged(names))
            });

        let streams: Vec<BoxStream<'static, SupplicantEvent>> =
            vec![added.boxed(), removed.boxed(), changed.boxed()];
        Ok(futures::stream::select_all(streams))
    }

    /// Every controlled interface with its name and state.
    ///
    /// # Errors
    /// Returns the mapped remote error if the interface list cannot be read.
    pub async fn summary(&self) -> Result<SupplicantSummary, SupplicantError> {
        let mut interfaces = Vec::new();
        for interface in self.interface_objects().await? {
            interfaces.push(interface.summary().await?);
        }
        Ok(SupplicantSummary { interfaces })
    }
}

/// Point-in-time view of the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SupplicantSummary {
    /// Controlled interfaces.
    pub interfaces: Vec<InterfaceSummary>,
}

impl fmt::Display for SupplicantSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interfaces: Vec<String> = self.interfaces.iter().map(ToString::to_string).collect();
        write!(f, "WpaSupplicant(Interfaces: [{}])", interfaces.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_interfaces() {
        let summary = SupplicantSummary {
            interfaces: vec![InterfaceSummary {
                path: "/fi/w1/wpa_supplicant1/Interfaces/0".to_string(),
                ifname: "wlan0".to_string(),
                state: "inactive".to_string(),
            }],
        };

        assert_eq!(
            summary.to_string(),
            "WpaSupplicant(Interfaces: [Interface(Path: /fi/w1/wpa_supplicant1/Interfaces/0, \
             Name: wlan0, State: inactive)])"
        );
        assert_eq!(
            SupplicantSummary::default().to_string(),
            "WpaSupplicant(Interfaces: [])"
        );
    }

    #[test]
    fn events_render_with_signal_names() {
        let event = SupplicantEvent::PropertiesChanged(vec!["DebugLevel".to_string()]);
        assert_eq!(event.to_string(), "PropertiesChanged(DebugLevel)");
    }
}
