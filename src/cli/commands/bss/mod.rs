//! Scan result commands.
mod list;
mod show;

use std::sync::Arc;

pub use list::ListCommand;
pub use show::ShowCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "bss" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "bss";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context)));
}
