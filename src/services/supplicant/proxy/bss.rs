//! wpa_supplicant BSS interface.

use std::collections::HashMap;

use zbus::{
    proxy,
    zvariant::{OwnedValue, Value},
};

/// A basic service set found by scanning.
///
/// All properties are read-only.
#[proxy(
    default_service = "fi.w1.wpa_supplicant1",
    interface = "fi.w1.wpa_supplicant1.BSS",
    gen_blocking = false
)]
pub trait Bss {
    /// Some properties changed.
    #[zbus(signal)]
    fn properties_changed(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Hardware address of the BSS.
    #[zbus(property, name = "BSSID")]
    fn bssid(&self) -> zbus::Result<Vec<u8>>;

    /// Raw SSID octets.
    #[zbus(property, name = "SSID")]
    fn ssid(&self) -> zbus::Result<Vec<u8>>;

    /// WPA information; empty when WPA is unsupported.
    #[zbus(property, name = "WPA")]
    fn wpa(&self) -> zbus::Result<HashMap<String, OwnedValue>>;

    /// RSN (WPA2) information; empty when RSN is unsupported.
    #[zbus(property, name = "RSN")]
    fn rsn(&self) -> zbus::Result<HashMap<String, OwnedValue>>;

    /// WPS information.
    #[zbus(property, name = "WPS")]
    fn wps(&self) -> zbus::Result<HashMap<String, OwnedValue>>;

    /// Raw information elements.
    #[zbus(property, name = "IEs")]
    fn ies(&self) -> zbus::Result<Vec<u8>>;

    /// Whether the privacy capability bit is set.
    #[zbus(property)]
    fn privacy(&self) -> zbus::Result<bool>;

    /// `ad-hoc`, `infrastructure` or `mesh`.
    #[zbus(property)]
    fn mode(&self) -> zbus::Result<String>;

    /// Frequency in MHz.
    #[zbus(property)]
    fn frequency(&self) -> zbus::Result<u16>;

    /// Supported rates in bits per second, descending.
    #[zbus(property)]
    fn rates(&self) -> zbus::Result<Vec<u32>>;

    /// Signal level in dBm.
    #[zbus(property)]
    fn signal(&self) -> zbus::Result<i16>;

    /// Seconds since the BSS was last seen.
    #[zbus(property)]
    fn age(&self) -> zbus::Result<u32>;
}
