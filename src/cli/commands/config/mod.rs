//! Configuration commands.
mod path;
mod schema;
mod show;

use std::sync::Arc;

pub use path::PathCommand;
pub use schema::SchemaCommand;
pub use show::ShowCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "config" category.
///
/// None of these commands touch the bus.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "config";

    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(PathCommand::new(context)));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
}
