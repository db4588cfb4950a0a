//! wpa_supplicant D-Bus proxy definitions.
//!
//! One `#[proxy]` trait per interface exported by the daemon. Only async
//! proxies are generated.

#![allow(missing_docs)]
pub mod bss;
pub mod group;
pub mod interface;
pub mod network;
pub mod p2p_device;
pub mod peer;
pub mod persistent_group;
pub mod supplicant;
pub mod wps;

pub use bss::BssProxy;
pub use group::GroupProxy;
pub use interface::InterfaceProxy;
pub use network::NetworkProxy;
pub use p2p_device::P2pDeviceProxy;
pub use peer::PeerProxy;
pub use persistent_group::PersistentGroupProxy;
pub use supplicant::SupplicantProxy;
pub use wps::WpsProxy;
