//! wpa_supplicant P2PDevice interface.

use std::collections::HashMap;

use zbus::{
    proxy,
    zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value},
};

/// Wi-Fi Direct facet of an interface.
#[proxy(
    default_service = "fi.w1.wpa_supplicant1",
    interface = "fi.w1.wpa_supplicant1.Interface.P2PDevice",
    gen_blocking = false
)]
pub trait P2pDevice {
    /// Starts peer discovery. Accepts `Timeout`, `RequestedDeviceTypes`
    /// and `DiscoveryType`.
    fn find(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Stops peer discovery.
    fn stop_find(&self) -> zbus::Result<()>;

    /// Listens for `timeout` seconds.
    fn listen(&self, timeout: i32) -> zbus::Result<()>;

    /// Configures extended listen timing. Accepts `period` and `interval`.
    fn extended_listen(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Requests presence from the group owner.
    fn presence_request(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Sends a provision discovery request.
    fn provision_discovery_request(
        &self,
        peer: &ObjectPath<'_>,
        config_method: &str,
    ) -> zbus::Result<()>;

    /// Connects to a peer, returning a generated PIN when one was requested.
    fn connect(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<String>;

    /// Starts an autonomous group.
    fn group_add(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Cancels an ongoing group formation.
    fn cancel(&self) -> zbus::Result<()>;

    /// Invites a peer to a group.
    fn invite(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Leaves the current group.
    fn disconnect(&self) -> zbus::Result<()>;

    /// Rejects connection attempts from a peer.
    fn reject_peer(&self, peer: &ObjectPath<'_>) -> zbus::Result<()>;

    /// Removes a client from the group.
    fn remove_client(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Flushes peer and service state.
    fn flush(&self) -> zbus::Result<()>;

    /// Registers a local service.
    fn add_service(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Deregisters a local service.
    fn delete_service(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Removes every local service.
    fn flush_service(&self) -> zbus::Result<()>;

    /// Stores a persistent group and returns its path.
    fn add_persistent_group(
        &self,
        args: HashMap<&str, Value<'_>>,
    ) -> zbus::Result<OwnedObjectPath>;

    /// Removes a persistent group.
    fn remove_persistent_group(&self, path: &ObjectPath<'_>) -> zbus::Result<()>;

    /// Removes every persistent group.
    fn remove_all_persistent_groups(&self) -> zbus::Result<()>;

    /// A peer was discovered.
    #[zbus(signal)]
    fn device_found(&self, path: ObjectPath<'_>) -> zbus::Result<()>;

    /// A peer is no longer visible.
    #[zbus(signal)]
    fn device_lost(&self, path: ObjectPath<'_>) -> zbus::Result<()>;

    /// Discovery stopped.
    #[zbus(signal)]
    fn find_stopped(&self) -> zbus::Result<()>;

    /// Group owner negotiation succeeded.
    #[zbus(signal, name = "GONegotiationSuccess")]
    fn go_negotiation_success(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Group owner negotiation failed.
    #[zbus(signal, name = "GONegotiationFailure")]
    fn go_negotiation_failure(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// A group was started.
    #[zbus(signal)]
    fn group_started(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// A group was torn down.
    #[zbus(signal)]
    fn group_finished(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Result of an invitation we sent.
    #[zbus(signal)]
    fn invitation_result(&self, result: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// A persistent group was stored.
    #[zbus(signal)]
    fn persistent_group_added(
        &self,
        path: ObjectPath<'_>,
        properties: HashMap<&str, Value<'_>>,
    ) -> zbus::Result<()>;

    /// A persistent group was removed.
    #[zbus(signal)]
    fn persistent_group_removed(&self, path: ObjectPath<'_>) -> zbus::Result<()>;

    /// Device configuration dictionary.
    #[zbus(property, name = "P2PDeviceConfig")]
    fn p2p_device_config(&self) -> zbus::Result<HashMap<String, OwnedValue>>;

    /// Paths of discovered peers.
    #[zbus(property)]
    fn peers(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// `GO`, `client` or `device`.
    #[zbus(property)]
    fn role(&self) -> zbus::Result<String>;

    /// Group the device belongs to, or `/`.
    #[zbus(property)]
    fn group(&self) -> zbus::Result<OwnedObjectPath>;

    /// Peer acting as group owner, or `/`.
    #[zbus(property, name = "PeerGO")]
    fn peer_go(&self) -> zbus::Result<OwnedObjectPath>;

    /// Paths of stored persistent groups.
    #[zbus(property)]
    fn persistent_groups(&self) -> zbus::Result<Vec<OwnedObjectPath>>;
}
