//! Command implementations, one module per category.

pub mod bss;
pub mod config;
pub mod group;
pub mod interface;
pub mod network;
pub mod p2p;
pub mod peer;
pub mod persistent_group;
pub mod supplicant;
pub mod utils;
pub mod wps;
