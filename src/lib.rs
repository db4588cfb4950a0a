//! Object-oriented async client for the wpa_supplicant D-Bus API.
//!
//! The library mirrors the daemon's object hierarchy: a [`Supplicant`] root
//! hands out interfaces, which expose their scanned BSSs, configured networks,
//! WPS and Wi-Fi Direct facets. The `wpa` binary wraps the same API in a
//! category based command-line tool.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use wpa_supplicant::services::supplicant::{ScanOptions, Supplicant};
//!
//! # async fn run() -> Result<(), wpa_supplicant::services::SupplicantError> {
//! let supplicant = Supplicant::connect().await?;
//! let wlan0 = supplicant.get_interface("wlan0").await?;
//!
//! for bss in wlan0
//!     .scan_blocking(&ScanOptions::default(), Duration::from_secs(10))
//!     .await?
//! {
//!     println!("{}", bss.summary().await);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`Supplicant`]: services::supplicant::Supplicant

/// Configuration schema definitions and loading.
pub mod config;

/// Application error type and result alias.
pub mod core;

/// Command-line interface built on the client.
pub mod cli;

/// D-Bus service clients.
pub mod services;

/// Logging setup.
pub mod tracing_config;

pub use self::core::{AppError, Result};
