//! wpa_supplicant PersistentGroup interface.

use std::collections::HashMap;

use zbus::{
    proxy,
    zvariant::{OwnedValue, Value},
};

/// A stored Wi-Fi Direct group.
#[proxy(
    default_service = "fi.w1.wpa_supplicant1",
    interface = "fi.w1.wpa_supplicant1.PersistentGroup",
    gen_blocking = false
)]
pub trait PersistentGroup {
    /// Some properties changed.
    #[zbus(signal, name = "PropertiesChanged")]
    fn properties_changed_signal(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Group configuration entries as strings.
    #[zbus(property)]
    fn properties(&self) -> zbus::Result<HashMap<String, OwnedValue>>;
}
