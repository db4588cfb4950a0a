//! Wi-Fi Direct peer commands.
mod show;

use std::sync::Arc;

pub use show::ShowCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "peer" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    registry.register_command("peer", Box::new(ShowCommand::new(context)));
}
