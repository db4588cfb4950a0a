//! wpa_supplicant Network interface.

use std::collections::HashMap;

use zbus::{
    proxy,
    zvariant::{OwnedValue, Value},
};

/// A configured network block.
///
/// `Properties` is writable through `org.freedesktop.DBus.Properties.Set`
/// with an `a{sv}` payload.
#[proxy(
    default_service = "fi.w1.wpa_supplicant1",
    interface = "fi.w1.wpa_supplicant1.Network",
    gen_blocking = false
)]
pub trait Network {
    /// Some properties changed.
    #[zbus(signal, name = "PropertiesChanged")]
    fn properties_changed_signal(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Network block entries, all values rendered as strings.
    #[zbus(property)]
    fn properties(&self) -> zbus::Result<HashMap<String, OwnedValue>>;

    /// Whether the network is enabled.
    #[zbus(property)]
    fn enabled(&self) -> zbus::Result<bool>;
}
