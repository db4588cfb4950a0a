//! wpa_supplicant WPS interface.

use std::collections::HashMap;

use zbus::{
    proxy,
    zvariant::{OwnedValue, Value},
};

/// Wi-Fi Protected Setup facet of an interface.
#[proxy(
    default_service = "fi.w1.wpa_supplicant1",
    interface = "fi.w1.wpa_supplicant1.Interface.WPS",
    gen_blocking = false
)]
pub trait Wps {
    /// Starts WPS. Accepts `Role` and `Type` (required), `Pin`, `Bssid`
    /// and `P2PDeviceAddress`.
    fn start(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<HashMap<String, OwnedValue>>;

    /// Cancels an ongoing WPS operation.
    fn cancel(&self) -> zbus::Result<()>;

    /// WPS progress (`success`, `fail`, `m2d`, `pbc-overlap`).
    #[zbus(signal)]
    fn event(&self, name: &str, args: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Credentials were received.
    #[zbus(signal)]
    fn credentials(&self, credentials: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Some properties changed.
    #[zbus(signal)]
    fn properties_changed(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Whether credentials are processed into network blocks.
    #[zbus(property)]
    fn process_credentials(&self) -> zbus::Result<bool>;

    /// Space separated list of WPS config methods.
    #[zbus(property)]
    fn config_methods(&self) -> zbus::Result<String>;
}
