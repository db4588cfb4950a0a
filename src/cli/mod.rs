//! Command-line interface for wpa_supplicant.
//!
//! Provides a hierarchical command system that mirrors the daemon's D-Bus
//! objects. Commands are organized by category and automatically generate
//! help text from metadata.

mod commands;
mod context;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::utils::coerce_to_current_type;
pub use context::CliContext;
pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
