//! Stored Wi-Fi Direct group commands.
mod list;
mod show;

use std::sync::Arc;

pub use list::ListCommand;
pub use show::ShowCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "persistent-group" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "persistent-group";

    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context)));
}
