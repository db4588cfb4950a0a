//! Client for the wpa_supplicant D-Bus API.
//!
//! [`Supplicant`] is the entry point. It hands out [`Interface`] wrappers,
//! which in turn expose the BSS, network, WPS and P2P objects below them.

/// Domain models for wpa_supplicant objects
mod core;
/// Supplicant errors and remote error mapping
mod error;
/// Generic property and signal access shared by all objects
mod object;
/// Generated D-Bus proxies for every wpa_supplicant interface
pub mod proxy;
/// Root object API
mod service;
/// Callback and single-shot signal subscriptions
mod signal;
/// Enums, flags and conversions for wpa_supplicant data
pub mod types;

pub use self::core::{
    bss::{Bss, BssSummary},
    group::{Group, GroupSummary},
    interface::{
        CreateInterfaceArgs, Interface, InterfaceEvent, InterfaceSummary, LiveInterface,
        ScanOptions,
    },
    network::{Network, NetworkConfig, NetworkSummary, NetworkValue},
    p2p_device::{
        P2pConnectArgs, P2pDevice, P2pDiscoveryType, P2pEvent, P2pFindArgs, P2pGroupAddArgs,
        P2pWpsMethod,
    },
    peer::{Peer, PeerSummary},
    persistent_group::{PersistentGroup, PersistentGroupSummary},
    wps::{Wps, WpsEvent, WpsKind, WpsRole, WpsStartArgs},
};
pub use error::SupplicantError;
pub use object::{RemoteObject, parse_path};
pub use service::{DEFAULT_SCAN_TIMEOUT, Supplicant, SupplicantEvent, SupplicantSummary};
pub use signal::{SignalArgs, SignalQueue, SignalSubscription};
pub use types::*;

/// Well-known bus name of the daemon.
pub const BUS_NAME: &str = "fi.w1.wpa_supplicant1";

/// Object path of the root object.
pub const ROOT_PATH: &str = "/fi/w1/wpa_supplicant1";

/// D-Bus interface names exported by the daemon.
pub mod interfaces {
    /// Root object.
    pub const ROOT: &str = "fi.w1.wpa_supplicant1";
    /// Network interface.
    pub const INTERFACE: &str = "fi.w1.wpa_supplicant1.Interface";
    /// WPS facet of a network interface.
    pub const WPS: &str = "fi.w1.wpa_supplicant1.Interface.WPS";
    /// P2P facet of a network interface.
    pub const P2P_DEVICE: &str = "fi.w1.wpa_supplicant1.Interface.P2PDevice";
    /// Scanned BSS.
    pub const BSS: &str = "fi.w1.wpa_supplicant1.BSS";
    /// Configured network.
    pub const NETWORK: &str = "fi.w1.wpa_supplicant1.Network";
    /// Wi-Fi Direct peer.
    pub const PEER: &str = "fi.w1.wpa_supplicant1.Peer";
    /// Wi-Fi Direct group.
    pub const GROUP: &str = "fi.w1.wpa_supplicant1.Group";
    /// Stored Wi-Fi Direct group.
    pub const PERSISTENT_GROUP: &str = "fi.w1.wpa_supplicant1.PersistentGroup";
}
