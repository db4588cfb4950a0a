//! wpa_supplicant root interface.

use std::collections::HashMap;

use zbus::{
    proxy,
    zvariant::{ObjectPath, OwnedObjectPath, Value},
};

/// Root object of the daemon.
///
/// Manages the set of network interfaces wpa_supplicant controls and the
/// global debug settings.
#[proxy(
    default_service = "fi.w1.wpa_supplicant1",
    default_path = "/fi/w1/wpa_supplicant1",
    interface = "fi.w1.wpa_supplicant1",
    gen_blocking = false
)]
pub trait Supplicant {
    /// Registers a wpa_supplicant interface.
    ///
    /// Accepts `Ifname` (required), `BridgeIfname`, `Driver` and `ConfigFile`.
    fn create_interface(&self, args: HashMap<&str, Value<'_>>) -> zbus::Result<OwnedObjectPath>;

    /// Deregisters an interface.
    fn remove_interface(&self, path: &ObjectPath<'_>) -> zbus::Result<()>;

    /// Returns the object path of a registered interface by name.
    fn get_interface(&self, ifname: &str) -> zbus::Result<OwnedObjectPath>;

    /// Tells the daemon an upcoming disconnect is expected.
    fn expect_disconnect(&self) -> zbus::Result<()>;

    /// A new interface was added.
    #[zbus(signal)]
    fn interface_added(
        &self,
        path: ObjectPath<'_>,
        properties: HashMap<&str, Value<'_>>,
    ) -> zbus::Result<()>;

    /// An interface was removed.
    #[zbus(signal)]
    fn interface_removed(&self, path: ObjectPath<'_>) -> zbus::Result<()>;

    /// Some properties changed.
    #[zbus(signal)]
    fn properties_changed(&self, properties: HashMap<&str, Value<'_>>) -> zbus::Result<()>;

    /// Global debug level.
    #[zbus(property)]
    fn debug_level(&self) -> zbus::Result<String>;

    /// Whether debug messages carry timestamps.
    #[zbus(property)]
    fn debug_timestamp(&self) -> zbus::Result<bool>;

    /// Whether secrets are printed in debug output.
    #[zbus(property)]
    fn debug_show_keys(&self) -> zbus::Result<bool>;

    /// Paths of every controlled interface.
    #[zbus(property)]
    fn interfaces(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// EAP methods the build supports.
    #[zbus(property)]
    fn eap_methods(&self) -> zbus::Result<Vec<String>>;

    /// Optional daemon capabilities such as `ap`, `ibss-rsn`, `p2p` or `mesh`.
    #[zbus(property)]
    fn capabilities(&self) -> zbus::Result<Vec<String>>;

    /// Wi-Fi Display information elements.
    #[zbus(property, name = "WFDIEs")]
    fn wfd_ies(&self) -> zbus::Result<Vec<u8>>;
}
