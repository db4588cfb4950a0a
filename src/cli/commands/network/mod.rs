//! Configured network commands.
mod enabled;
mod show;

use std::sync::Arc;

pub use enabled::EnabledCommand;
pub use show::ShowCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "network" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "network";

    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(EnabledCommand::new(context.clone(), true)),
    );
    registry.register_command(CATEGORY_NAME, Box::new(EnabledCommand::new(context, false)));
}
