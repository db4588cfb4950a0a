use std::sync::{Arc, Weak};

use futures::{Stream, StreamExt};
use tokio::sync::oneshot;
use tracing::debug;
use zbus::zvariant::OwnedObjectPath;

use crate::{
    services::{
        common::{Property, optional_path},
        supplicant::{InterfaceState, SupplicantError, proxy::InterfaceProxy},
    },
    unwrap_or_default, watch_all,
};

use super::Interface;

/// Interface state mirrored locally and kept current from property changes.
///
/// Fields are reactive [`Property`] values: read them with `get()` or follow
/// them with `watch()`.
#[derive(Debug, Clone)]
pub struct LiveInterface {
    /// Object path of the interface.
    pub path: OwnedObjectPath,
    /// Connection state.
    pub state: Property<InterfaceState>,
    /// Whether a scan is running.
    pub scanning: Property<bool>,
    /// Path of the associated BSS.
    pub current_bss: Property<Option<OwnedObjectPath>>,
    /// Path of the network in use.
    pub current_network: Property<Option<OwnedObjectPath>>,
    /// Paths of every known BSS.
    pub bss_paths: Property<Vec<OwnedObjectPath>>,
    // Dropped with the last clone, which ends the monitor task.
    _shutdown: Arc<oneshot::Sender<()>>,
}

impl LiveInterface {
    pub(super) async fn start(interface: &Interface) -> Result<Arc<Self>, SupplicantError> {
        let path = interface.path().clone();

        // Property change streams need the cache, which the plain wrapper turns off.
        let proxy = InterfaceProxy::builder(interface.connection())
            .path(path.clone())?
            .build()
            .await?;

        let (state, scanning, current_bss, current_network, bss_paths) = tokio::join!(
            interface.state(),
            interface.scanning(),
            proxy.current_bss(),
            proxy.current_network(),
            proxy.bsss(),
        );

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let live = Arc::new(Self {
            state: Property::new(state?),
            scanning: Property::new(unwrap_or_default!(scanning, "Scanning", path)),
            current_bss: Property::new(current_bss.ok().and_then(optional_path)),
            current_network: Property::new(current_network.ok().and_then(optional_path)),
            bss_paths: Property::new(unwrap_or_default!(bss_paths, "BSSs", path)),
            path,
            _shutdown: Arc::new(shutdown_tx),
        });

        let weak = Arc::downgrade(&live);
        tokio::spawn(async move {
            Self::monitor(weak, proxy, shutdown_rx).await;
        });

        Ok(live)
    }

    // Only a weak reference lives here and it is upgraded just long enough
    // to apply a change, so dropping the view ends the task.
    async fn monitor(
        weak: Weak<Self>,
        proxy: InterfaceProxy<'static>,
        mut shutdown: oneshot::Receiver<()>,
    ) {
        let path = proxy.inner().path().to_string();
        let mut state_changes = proxy.receive_state_changed().await;
        let mut scanning_changes = proxy.receive_scanning_changed().await;
        let mut current_bss_changes = proxy.receive_current_bss_changed().await;
        let mut current_network_changes = proxy.receive_current_network_changed().await;
        let mut bss_changes = proxy.receive_bsss_changed().await;

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    debug!("LiveInterface for {path} dropped, stopping monitor");
                    return;
                }
                Some(change) = state_changes.next() => {
                    if let Ok(state) = change.get().await {
                        let Some(live) = weak.upgrade() else { return };
                        live.state.set(InterfaceState::from_dbus(&state));
                    }
                }
                Some(change) = scanning_changes.next() => {
                    if let Ok(scanning) = change.get().await {
                        let Some(live) = weak.upgrade() else { return };
                        live.scanning.set(scanning);
                    }
                }
                Some(change) = current_bss_changes.next() => {
                    if let Ok(bss) = change.get().await {
                        let Some(live) = weak.upgrade() else { return };
                        live.current_bss.set(optional_path(bss));
                    }
                }
                Some(change) = current_network_changes.next() => {
                    if let Ok(network) = change.get().await {
                        let Some(live) = weak.upgrade() else { return };
                        live.current_network.set(optional_path(network));
                    }
                }
                Some(change) = bss_changes.next() => {
                    if let Ok(paths) = change.get().await {
                        let Some(live) = weak.upgrade() else { return };
                        live.bss_paths.set(paths);
                    }
                }
                else => {
                    debug!("Interface property streams ended for {path}");
                    return;
                }
            }
        }
    }

    /// Stream that yields the whole view whenever any field changes.
    pub fn watch(&self) -> impl Stream<Item = Self> + Send {
        watch_all!(self, state, scanning, current_bss, current_network, bss_paths)
    }
}
