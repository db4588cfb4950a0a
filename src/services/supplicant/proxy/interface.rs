//! wpa_supplicant Interface interface.

use std::collections::HashMap;

use zbus::{
    proxy,
    zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value},
};

/// A network interface controlled by wpa_supplicant.
#[proxy(
    default_service = "fi.w1.wpa_supplicant1",
    interface = "fi.w1.wpa_supplicant1.Interface",
    gen_blocking = false
)]
pub trait Interface {
    /// Triggers a scan. Accepts `Type` (required), `SSIDs`, `IEs`,
    /// `Channels` and `AllowRoam`.
    fn scan(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Returns the most recent signal quality readings.
    fn signal_poll(&self) -> zbus::Result<HashMap<String, OwnedValue>>;

    /// Disassociates from the current network.
    fn disconnect(&self) -> zbus::Result<()>;

    /// Adds a network block and returns its object path.
    fn add_network(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<OwnedObjectPath>;

    /// Reassociates with the current network.
    fn reassociate(&self) -> zbus::Result<()>;

    /// Reattaches to the current network's BSS.
    fn reattach(&self) -> zbus::Result<()>;

    /// Reconnects if currently disconnected.
    fn reconnect(&self) -> zbus::Result<()>;

    /// Removes a configured network.
    fn remove_network(&self, path: &ObjectPath<'_>) -> zbus::Result<()>;

    /// Removes every configured network.
    fn remove_all_networks(&self) -> zbus::Result<()>;

    /// Attempts association with a configured network.
    fn select_network(&self, path: &ObjectPath<'_>) -> zbus::Result<()>;

    /// Answers a pending network credential request.
    fn network_reply(&self, path: &ObjectPath<'_>, field: &str, value: &str)
    -> zbus::Result<()>;

    /// Stores a named binary blob.
    fn add_blob(&self, name: &str, data: &[u8]) -> zbus::Result<()>;

    /// Reads a named binary blob.
    fn get_blob(&self, name: &str) -> zbus::Result<Vec<u8>>;

    /// Removes a named binary blob.
    fn remove_blob(&self, name: &str) -> zbus::Result<()>;

    /// Flushes BSS entries older than `age` seconds.
    #[zbus(name = "FlushBSS")]
    fn flush_bss(&self, age: u32) -> zbus::Result<()>;

    /// Configures the autoscan module.
    fn auto_scan(&self, arg: &str) -> zbus::Result<()>;

    /// Signals an EAP logoff.
    #[zbus(name = "EAPLogoff")]
    fn eap_logoff(&self) -> zbus::Result<()>;

    /// Signals an EAP logon.
    #[zbus(name = "EAPLogon")]
    fn eap_logon(&self) -> zbus::Result<()>;

    /// Starts TDLS discovery with a peer.
    #[zbus(name = "TDLSDiscover")]
    fn tdls_discover(&self, peer_address: &str) -> zbus::Result<()>;

    /// Sets up a TDLS link with a peer.
    #[zbus(name = "TDLSSetup")]
    fn tdls_setup(&self, peer_address: &str) -> zbus::Result<()>;

    /// Reports the TDLS link status with a peer.
    #[zbus(name = "TDLSStatus")]
    fn tdls_status(&self, peer_address: &str) -> zbus::Result<String>;

    /// Tears down a TDLS link.
    #[zbus(name = "TDLSTeardown")]
    fn tdls_teardown(&self, peer_address: &str) -> zbus::Result<()>;

    /// Starts receiving probe request events.
    fn subscribe_probe_req(&self) -> zbus::Result<()>;

    /// Stops receiving probe request events.
    fn unsubscribe_probe_req(&self) -> zbus::Result<()>;

    /// A scan finished.
    #[zbus(signal)]
    fn scan_done(&self, success: bool) -> zbus::Result<()>;

    /// A BSS appeared in scan results.
    #[zbus(signal, name = "BSSAdded")]
    fn bss_added(
        &self,
        path: ObjectPath<'_>,
        properties: HashMap<&str, Value<'_>>,
    ) -> zbus::Result<()>;

    /// A BSS dropped out of scan results.
    #[zbus(signal, name = "BSSRemoved")]
    fn bss_removed(&self, path: ObjectPath<'_>) -> zbus::Result<()>;

    /// A blob was stored.
    #[zbus(signal)]
    fn blob_added(&self, name: &str) -> zbus::Result<()>;

    /// A blob was removed.
    #[zbus(signal)]
    fn blob_removed(&self, name: &str) -> zbus::Result<()>;

    /// A network block was added.
    #[zbus(signal)]
    fn network_added(
        &self,
        path: ObjectPath<'_>,
        properties: HashMap<&str, Value<'_>>,
    ) -> zbus::Result<()>;

    /// A network block was removed.
    #[zbus(signal)]
    fn network_removed(&self, path: ObjectPath<'_>) -> zbus::Result<()>;

    /// A network was selected for association.
    #[zbus(signal)]
    fn network_selected(&self, path: ObjectPath<'_>) -> zbus::Result<()>;

    /// The daemon needs a credential for a network.
    #[zbus(signal)]
    fn network_request(&self, path: ObjectPath<'_>, field: &str, text: &str)
    -> zbus::Result<()>;

    /// EAP state progressed.
    #[zbus(signal, name = "EAP")]
    fn eap(&self, status: &str, parameter: &str) -> zbus::Result<()>;

    /// A station was authorized (AP mode).
    #[zbus(signal)]
    fn sta_authorized(&self, name: &str) -> zbus::Result<()>;

    /// A station was deauthorized (AP mode).
    #[zbus(signal)]
    fn sta_deauthorized(&self, name: &str) -> zbus::Result<()>;

    /// A probe request was received.
    #[zbus(signal)]
    fn probe_request(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Some properties changed.
    #[zbus(signal)]
    fn properties_changed(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Driver capabilities.
    #[zbus(property)]
    fn capabilities(&self) -> zbus::Result<HashMap<String, OwnedValue>>;

    /// Connection state.
    #[zbus(property)]
    fn state(&self) -> zbus::Result<String>;

    /// Whether a scan is in progress.
    #[zbus(property)]
    fn scanning(&self) -> zbus::Result<bool>;

    /// AP scanning mode, 0, 1 or 2.
    #[zbus(property)]
    fn ap_scan(&self) -> zbus::Result<u32>;

    /// Maximum age of a BSS entry in seconds.
    #[zbus(property, name = "BSSExpireAge")]
    fn bss_expire_age(&self) -> zbus::Result<u32>;

    /// Number of scans a BSS may be missing from before it expires.
    #[zbus(property, name = "BSSExpireCount")]
    fn bss_expire_count(&self) -> zbus::Result<u32>;

    /// ISO/IEC alpha2 country code.
    #[zbus(property)]
    fn country(&self) -> zbus::Result<String>;

    /// Name of the network interface.
    #[zbus(property)]
    fn ifname(&self) -> zbus::Result<String>;

    /// Name of the driver in use.
    #[zbus(property)]
    fn driver(&self) -> zbus::Result<String>;

    /// Name of the bridge the interface belongs to, if any.
    #[zbus(property)]
    fn bridge_ifname(&self) -> zbus::Result<String>;

    /// BSS the interface is associated with, or `/`.
    #[zbus(property, name = "CurrentBSS")]
    fn current_bss(&self) -> zbus::Result<OwnedObjectPath>;

    /// Network the interface is using, or `/`.
    #[zbus(property)]
    fn current_network(&self) -> zbus::Result<OwnedObjectPath>;

    /// Authentication method of the current connection.
    #[zbus(property)]
    fn current_auth_mode(&self) -> zbus::Result<String>;

    /// Names of stored blobs.
    #[zbus(property)]
    fn blobs(&self) -> zbus::Result<HashMap<String, Vec<u8>>>;

    /// Paths of known BSSs.
    #[zbus(property, name = "BSSs")]
    fn bsss(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Paths of configured networks.
    #[zbus(property)]
    fn networks(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Whether fast reauthentication is enabled.
    #[zbus(property)]
    fn fast_reauth(&self) -> zbus::Result<bool>;

    /// Seconds between scans for a network.
    #[zbus(property)]
    fn scan_interval(&self) -> zbus::Result<i32>;

    /// IEEE 802.11 reason code of the last disconnect.
    #[zbus(property)]
    fn disconnect_reason(&self) -> zbus::Result<i32>;
}
