//! wpa_supplicant Peer interface.

use std::collections::HashMap;

use zbus::{
    proxy,
    zvariant::{OwnedObjectPath, Value},
};

/// A Wi-Fi Direct peer.
#[proxy(
    default_service = "fi.w1.wpa_supplicant1",
    interface = "fi.w1.wpa_supplicant1.Peer",
    gen_blocking = false
)]
pub trait Peer {
    /// Some properties changed.
    #[zbus(signal)]
    fn properties_changed(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    #[zbus(property)]
    fn device_name(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn manufacturer(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn model_name(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn model_number(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn serial_number(&self) -> zbus::Result<String>;

    /// Eight octet WPS primary device type.
    #[zbus(property)]
    fn primary_device_type(&self) -> zbus::Result<Vec<u8>>;

    /// WPS config methods bitmask.
    #[zbus(property)]
    fn config_method(&self) -> zbus::Result<u16>;

    /// Signal level in dBm.
    #[zbus(property)]
    fn level(&self) -> zbus::Result<i32>;

    /// P2P device capability bitmask.
    #[zbus(property)]
    fn device_capability(&self) -> zbus::Result<u8>;

    /// P2P group capability bitmask.
    #[zbus(property)]
    fn group_capability(&self) -> zbus::Result<u8>;

    #[zbus(property)]
    fn secondary_device_types(&self) -> zbus::Result<Vec<Vec<u8>>>;

    #[zbus(property)]
    fn vendor_extension(&self) -> zbus::Result<Vec<Vec<u8>>>;

    #[zbus(property, name = "IEs")]
    fn ies(&self) -> zbus::Result<Vec<u8>>;

    /// P2P device address octets.
    #[zbus(property)]
    fn device_address(&self) -> zbus::Result<Vec<u8>>;

    /// Groups the peer is a member of.
    #[zbus(property)]
    fn groups(&self) -> zbus::Result<Vec<OwnedObjectPath>>;
}
