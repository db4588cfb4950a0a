/// Shared building blocks for D-Bus object wrappers
pub mod common;
/// wpa_supplicant D-Bus client
pub mod supplicant;

pub use supplicant::{Interface, Supplicant, SupplicantError};
