//! wpa_supplicant Group interface.

use std::collections::HashMap;

use zbus::{
    proxy,
    zvariant::{ObjectPath, OwnedObjectPath, Value},
};

/// An active Wi-Fi Direct group.
#[proxy(
    default_service = "fi.w1.wpa_supplicant1",
    interface = "fi.w1.wpa_supplicant1.Group",
    gen_blocking = false
)]
pub trait Group {
    /// A peer joined the group.
    #[zbus(signal)]
    fn peer_joined(&self, path: ObjectPath<'_>) -> zbus::Result<()>;

    /// A peer left the group.
    #[zbus(signal)]
    fn peer_disconnected(&self, path: ObjectPath<'_>) -> zbus::Result<()>;

    /// Some properties changed.
    #[zbus(signal)]
    fn properties_changed(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Peers in the group.
    #[zbus(property)]
    fn members(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Interface object backing the group.
    #[zbus(property)]
    fn group(&self) -> zbus::Result<OwnedObjectPath>;

    /// `GO` or `client`.
    #[zbus(property)]
    fn role(&self) -> zbus::Result<String>;

    #[zbus(property, name = "SSID")]
    fn ssid(&self) -> zbus::Result<Vec<u8>>;

    #[zbus(property, name = "BSSID")]
    fn bssid(&self) -> zbus::Result<Vec<u8>>;

    /// Operating frequency in MHz.
    #[zbus(property)]
    fn frequency(&self) -> zbus::Result<u16>;

    #[zbus(property)]
    fn passphrase(&self) -> zbus::Result<String>;

    #[zbus(property, name = "PSK")]
    fn psk(&self) -> zbus::Result<Vec<u8>>;

    #[zbus(property, name = "WPSVendorExtensions")]
    fn wps_vendor_extensions(&self) -> zbus::Result<Vec<Vec<u8>>>;
}
