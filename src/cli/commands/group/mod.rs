//! Wi-Fi Direct group commands.
mod show;

use std::sync::Arc;

pub use show::ShowCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "group" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    registry.register_command("group", Box::new(ShowCommand::new(context)));
}
