use std::{collections::HashMap, ops::Deref, sync::Arc, time::Duration};

use futures::{Stream, StreamExt, stream::BoxStream};
use tracing::{debug, instrument};
use zbus::{
    Connection,
    proxy::CacheProperties,
    zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value},
};

use crate::services::{
    common::optional_path,
    supplicant::{InterfaceState, RemoteObject, SupplicantError, interfaces, proxy::InterfaceProxy},
};

use super::{bss::Bss, network::Network, network::NetworkConfig, p2p_device::P2pDevice, wps::Wps};

mod monitoring;
mod types;

pub use monitoring::LiveInterface;
pub use types::{CreateInterfaceArgs, InterfaceEvent, InterfaceSummary, ScanOptions};

/// A network interface controlled by wpa_supplicant.
///
/// Obtained from `Supplicant::get_interface` or `Supplicant::create_interface`.
/// Property accessors always query the daemon; use [`Interface::live`] for a
/// locally mirrored, watchable view.
#[derive(Debug, Clone)]
pub struct Interface {
    object: RemoteObject,
    proxy: InterfaceProxy<'static>,
}

impl Deref for Interface {
    type Target = RemoteObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl PartialEq for Interface {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object
    }
}

impl Interface {
    /// Wrap the interface at `path`.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn new(connection: &Connection, path: OwnedObjectPath) -> Result<Self, SupplicantError> {
        let proxy = InterfaceProxy::builder(connection)
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            object: RemoteObject::new(connection.clone(), path, interfaces::INTERFACE),
            proxy,
        })
    }

    /// Trigger a scan and return without waiting for results.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` for rejected scan options.
    #[instrument(skip(self), fields(path = %self.path()))]
    pub async fn scan(&self, options: &ScanOptions) -> Result<(), SupplicantError> {
        Ok(self.proxy.scan(options.to_args()).await?)
    }

    /// Scan and wait for the results.
    ///
    /// The `ScanDone` subscription is installed before the scan is
    /// requested, so a fast completion is never missed.
    ///
    /// # Errors
    /// Returns `SupplicantError::ScanFailed` if the daemon reports an
    /// unsuccessful scan and `SupplicantError::MethodTimeout` if no
    /// `ScanDone` arrives within `timeout`.
    #[instrument(skip(self), fields(path = %self.path()))]
    pub async fn scan_blocking(
        &self,
        options: &ScanOptions,
        timeout: Duration,
    ) -> Result<Vec<Bss>, SupplicantError> {
        let mut scan_done = self.proxy.receive_scan_done().await?;

        self.proxy.scan(options.to_args()).await?;

        let signal = tokio::time::timeout(timeout, scan_done.next())
            .await
            .map_err(|_| SupplicantError::MethodTimeout {
                operation: "ScanDone".to_string(),
                timeout,
            })?
            .ok_or_else(|| SupplicantError::SignalClosed("ScanDone".to_string()))?;

        if !signal.args()?.success {
            return Err(SupplicantError::ScanFailed);
        }

        debug!("Scan finished");
        self.bss_list().await
    }

    /// Add a network block.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` if an entry is rejected.
    pub async fn add_network(&self, config: &NetworkConfig) -> Result<Network, SupplicantError> {
        let path = self.proxy.add_network(config.to_args()).await?;
        Network::new(self.connection(), path).await
    }

    /// Remove a network block.
    ///
    /// # Errors
    /// Returns `SupplicantError::NetworkUnknown` if no such network exists.
    pub async fn remove_network(&self, path: &ObjectPath<'_>) -> Result<(), SupplicantError> {
        Ok(self.proxy.remove_network(path).await?)
    }

    /// Remove every network block.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn remove_all_networks(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.remove_all_networks().await?)
    }

    /// Associate with a configured network.
    ///
    /// # Errors
    /// Returns `SupplicantError::NetworkUnknown` if no such network exists.
    pub async fn select_network(&self, path: &ObjectPath<'_>) -> Result<(), SupplicantError> {
        Ok(self.proxy.select_network(path).await?)
    }

    /// Disassociate from the current network.
    ///
    /// # Errors
    /// Returns `SupplicantError::NotConnected` if the interface is not connected.
    pub async fn disconnect(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.disconnect().await?)
    }

    /// # Errors
    /// Returns `SupplicantError::InterfaceDisabled` if the interface is disabled.
    pub async fn reassociate(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.reassociate().await?)
    }

    /// # Errors
    /// Returns `SupplicantError::NotConnected` if the interface is not connected.
    pub async fn reattach(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.reattach().await?)
    }

    /// # Errors
    /// Returns `SupplicantError::InterfaceDisabled` if the interface is disabled.
    pub async fn reconnect(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.reconnect().await?)
    }

    /// Drop BSS entries older than `age` seconds.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn flush_bss(&self, age: u32) -> Result<(), SupplicantError> {
        Ok(self.proxy.flush_bss(age).await?)
    }

    /// Current RSSI, link speed, noise and frequency readings.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn signal_poll(&self) -> Result<HashMap<String, OwnedValue>, SupplicantError> {
        Ok(self.proxy.signal_poll().await?)
    }

    /// Configure autoscan, e.g. `exponential:3:300` or an empty string to disable.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` for an unparsable parameter.
    pub async fn auto_scan(&self, arg: &str) -> Result<(), SupplicantError> {
        Ok(self.proxy.auto_scan(arg).await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn eap_logon(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.eap_logon().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn eap_logoff(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.eap_logoff().await?)
    }

    /// Answer a credential request for a network.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` for an unknown field.
    pub async fn network_reply(
        &self,
        network: &ObjectPath<'_>,
        field: &str,
        value: &str,
    ) -> Result<(), SupplicantError> {
        Ok(self.proxy.network_reply(network, field, value).await?)
    }

    /// Store a named blob.
    ///
    /// # Errors
    /// Returns `SupplicantError::BlobExists` if the name is taken.
    pub async fn add_blob(&self, name: &str, data: &[u8]) -> Result<(), SupplicantError> {
        Ok(self.proxy.add_blob(name, data).await?)
    }

    /// Read a named blob.
    ///
    /// # Errors
    /// Returns `SupplicantError::BlobUnknown` if no blob has that name.
    pub async fn get_blob(&self, name: &str) -> Result<Vec<u8>, SupplicantError> {
        Ok(self.proxy.get_blob(name).await?)
    }

    /// Remove a named blob.
    ///
    /// # Errors
    /// Returns `SupplicantError::BlobUnknown` if no blob has that name.
    pub async fn remove_blob(&self, name: &str) -> Result<(), SupplicantError> {
        Ok(self.proxy.remove_blob(name).await?)
    }

    /// Every stored blob by name.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn blobs(&self) -> Result<HashMap<String, Vec<u8>>, SupplicantError> {
        Ok(self.proxy.blobs().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn tdls_discover(&self, peer_address: &str) -> Result<(), SupplicantError> {
        Ok(self.proxy.tdls_discover(peer_address).await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn tdls_setup(&self, peer_address: &str) -> Result<(), SupplicantError> {
        Ok(self.proxy.tdls_setup(peer_address).await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn tdls_status(&self, peer_address: &str) -> Result<String, SupplicantError> {
        Ok(self.proxy.tdls_status(peer_address).await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn tdls_teardown(&self, peer_address: &str) -> Result<(), SupplicantError> {
        Ok(self.proxy.tdls_teardown(peer_address).await?)
    }

    /// Start receiving `ProbeRequest` signals.
    ///
    /// # Errors
    /// Returns `SupplicantError::SubscriptionInUse` if another client holds the subscription.
    pub async fn subscribe_probe_requests(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.subscribe_probe_req().await?)
    }

    /// Stop receiving `ProbeRequest` signals.
    ///
    /// # Errors
    /// Returns `SupplicantError::NoSubscription` or `SupplicantError::SubscriptionNotYou`.
    pub async fn unsubscribe_probe_requests(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.unsubscribe_probe_req().await?)
    }

    /// Kernel name of the interface.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn ifname(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.ifname().await?)
    }

    /// Connection state.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn state(&self) -> Result<InterfaceState, SupplicantError> {
        Ok(InterfaceState::from_dbus(&self.proxy.state().await?))
    }

    /// Whether a scan is running.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn scanning(&self) -> Result<bool, SupplicantError> {
        Ok(self.proxy.scanning().await?)
    }

    /// AP scanning mode.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn ap_scan(&self) -> Result<u32, SupplicantError> {
        Ok(self.proxy.ap_scan().await?)
    }

    /// Set the AP scanning mode: 0, 1 or 2.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` for other values.
    pub async fn set_ap_scan(&self, mode: u32) -> Result<(), SupplicantError> {
        if mode > 2 {
            return Err(SupplicantError::InvalidArgs(format!(
                "ap_scan must be 0, 1 or 2, got {mode}"
            )));
        }
        self.object.set("ApScan", Value::from(mode)).await
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn bss_expire_age(&self) -> Result<u32, SupplicantError> {
        Ok(self.proxy.bss_expire_age().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_bss_expire_age(&self, seconds: u32) -> Result<(), SupplicantError> {
        self.object.set("BSSExpireAge", Value::from(seconds)).await
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn bss_expire_count(&self) -> Result<u32, SupplicantError> {
        Ok(self.proxy.bss_expire_count().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_bss_expire_count(&self, count: u32) -> Result<(), SupplicantError> {
        self.object.set("BSSExpireCount", Value::from(count)).await
    }

    /// ISO/IEC alpha2 country code.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn country(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.country().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_country(&self, country: &str) -> Result<(), SupplicantError> {
        self.object.set("Country", Value::from(country)).await
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn driver(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.driver().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn bridge_ifname(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.bridge_ifname().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn fast_reauth(&self) -> Result<bool, SupplicantError> {
        Ok(self.proxy.fast_reauth().await?)
    }

    /// # Errors
    /// Returns the mapped remote error if the write fails.
    pub async fn set_fast_reauth(&self, enabled: bool) -> Result<(), SupplicantError> {
        self.object.set("FastReauth", Value::from(enabled)).await
    }

    /// Seconds between scans.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn scan_interval(&self) -> Result<i32, SupplicantError> {
        Ok(self.proxy.scan_interval().await?)
    }

    /// Set the seconds between scans.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` for negative intervals.
    pub async fn set_scan_interval(&self, seconds: i32) -> Result<(), SupplicantError> {
        if seconds < 0 {
            return Err(SupplicantError::InvalidArgs(format!(
                "scan interval must not be negative, got {seconds}"
            )));
        }
        self.object.set("ScanInterval", Value::from(seconds)).await
    }

    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn current_auth_mode(&self) -> Result<String, SupplicantError> {
        Ok(self.proxy.current_auth_mode().await?)
    }

    /// IEEE 802.11 reason code of the last disconnect; negative when locally generated.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn disconnect_reason(&self) -> Result<i32, SupplicantError> {
        Ok(self.proxy.disconnect_reason().await?)
    }

    /// Driver capabilities such as supported key management and modes.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn capabilities(&self) -> Result<HashMap<String, OwnedValue>, SupplicantError> {
        Ok(self.proxy.capabilities().await?)
    }

    /// BSS the interface is associated with.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn current_bss(&self) -> Result<Option<Bss>, SupplicantError> {
        match optional_path(self.proxy.current_bss().await?) {
            Some(path) => Ok(Some(Bss::new(self.connection(), path).await?)),
            None => Ok(None),
        }
    }

    /// Network the interface is using.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn current_network(&self) -> Result<Option<Network>, SupplicantError> {
        match optional_path(self.proxy.current_network().await?) {
            Some(path) => Ok(Some(Network::new(self.connection(), path).await?)),
            None => Ok(None),
        }
    }

    /// Configured networks.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn networks(&self) -> Result<Vec<Network>, SupplicantError> {
        let mut networks = Vec::new();
        for path in self.proxy.networks().await? {
            networks.push(Network::new(self.connection(), path).await?);
        }
        Ok(networks)
    }

    /// Object paths of every known BSS.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn all_bss(&self) -> Result<Vec<OwnedObjectPath>, SupplicantError> {
        Ok(self.proxy.bsss().await?)
    }

    /// Every known BSS.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn bss_list(&self) -> Result<Vec<Bss>, SupplicantError> {
        let mut list = Vec::new();
        for path in self.all_bss().await? {
            list.push(Bss::new(self.connection(), path).await?);
        }
        Ok(list)
    }

    /// WPS facet of this interface.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn wps(&self) -> Result<Wps, SupplicantError> {
        Wps::new(self.connection(), self.path().clone()).await
    }

    /// P2P facet of this interface.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn p2p_device(&self) -> Result<P2pDevice, SupplicantError> {
        P2pDevice::new(self.connection(), self.path().clone()).await
    }

    /// Locally mirrored view that follows property changes.
    ///
    /// Monitoring stops once the returned handle is dropped.
    ///
    /// # Errors
    /// Returns the mapped remote error if the initial state cannot be read.
    pub async fn live(&self) -> Result<Arc<LiveInterface>, SupplicantError> {
        LiveInterface::start(self).await
    }

    /// Name, path and state for display.
    ///
    /// # Errors
    /// Returns the mapped remote error if the name or state cannot be read.
    pub async fn summary(&self) -> Result<InterfaceSummary, SupplicantError> {
        let (ifname, state) = tokio::join!(self.ifname(), self.state());

        Ok(InterfaceSummary {
            path: self.path().to_string(),
            ifname: ifname?,
            state: state?.to_string(),
        })
    }

    /// Stream of interface notifications.
    ///
    /// # Errors
    /// Returns an error if the signal match rules cannot be added.
    pub async fn events(
        &self,
    ) -> Result<impl Stream<Item = InterfaceEvent> + Send + 'static, SupplicantError> {
        let proxy = &self.proxy;

        let scan_done = proxy.receive_scan_done().await?.filter_map(|s| async move {
            Some(InterfaceEvent::ScanDone(s.args().ok()?.success))
        });
        let bss_added = proxy.receive_bss_added().await?.filter_map(|s| async move {
            let args = s.args().ok()?;
            Some(InterfaceEvent::BssAdded(OwnedObjectPath::from(args.path().clone())))
        });
        let bss_removed = proxy.receive_bss_removed().await?.filter_map(|s| async move {
            let args = s.args().ok()?;
            Some(InterfaceEvent::BssRemoved(OwnedObjectPath::from(args.path().clone())))
        });
        let network_added = proxy.receive_network_added().await?.filter_map(|s| async move {
            let args = s.args().ok()?;
            Some(InterfaceEvent::NetworkAdded(OwnedObjectPath::from(args.path().clone())))
        });
        let network_removed = proxy
            .receive_network_removed()
            .await?
            .filter_map(|s| async move {
                let args = s.args().ok()?;
                Some(InterfaceEvent::NetworkRemoved(OwnedObjectPath::from(
                    args.path().clone(),
                )))
            });
        let network_selected = proxy
            .receive_network_selected()
            .await?
            .filter_map(|s| async move {
                let args = s.args().ok()?;
                Some(InterfaceEvent::NetworkSelected(OwnedObjectPath::from(
                    args.path().clone(),
                )))
            });
        let eap = proxy.receive_eap().await?.filter_map(|s| async move {
            let args = s.args().ok()?;
            Some(InterfaceEvent::EapStatus {
                status: args.status().to_string(),
                parameter: args.parameter().to_string(),
            })
        });
        let sta_authorized = proxy.receive_sta_authorized().await?.filter_map(|s| async move {
            let args = s.args().ok()?;
            Some(InterfaceEvent::StaAuthorized(args.name().to_string()))
        });
        let sta_deauthorized = proxy
            .receive_sta_deauthorized()
            .await?
            .filter_map(|s| async move {
                let args = s.args().ok()?;
                Some(InterfaceEvent::StaDeauthorized(args.name().to_string()))
            });
        let properties = proxy
            .receive_properties_changed()
            .await?
            .filter_map(|s| async move {
                let args = s.args().ok()?;
                let mut names: Vec<String> =
                    args.properties().keys().map(|k| k.to_string()).collect();
                names.sort();
                Some(InterfaceEvent::PropertiesChanged(names))
            });

        let streams: Vec<BoxStream<'static, InterfaceEvent>> = vec![
            scan_done.boxed(),
            bss_added.boxed(),
            bss_removed.boxed(),
            network_added.boxed(),
            network_removed.boxed(),
            network_selected.boxed(),
            eap.boxed(),
            sta_authorized.boxed(),
            sta_deauthorized.boxed(),
            properties.boxed(),
        ];
        Ok(futures::stream::select_all(streams))
    }
}
