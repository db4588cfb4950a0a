/// Scanned access points
pub mod bss;
/// Active Wi-Fi Direct groups
pub mod group;
/// Network interfaces and their live monitor
pub mod interface;
/// Configured network blocks
pub mod network;
/// Wi-Fi Direct facet of an interface
pub mod p2p_device;
/// Wi-Fi Direct peers
pub mod peer;
/// Stored Wi-Fi Direct groups
pub mod persistent_group;
/// WPS facet of an interface
pub mod wps;
