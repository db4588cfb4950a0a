//! Wi-Fi Protected Setup commands.
mod cancel;
mod start;

use std::sync::Arc;

pub use cancel::CancelCommand;
pub use start::StartCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "wps" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "wps";

    registry.register_command(CATEGORY_NAME, Box::new(StartCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(CancelCommand::new(context)));
}
