//! Root object commands.
mod create_interface;
mod get;
mod get_interface;
mod remove_interface;
mod set;
mod show;

use std::sync::Arc;

pub use create_interface::CreateInterfaceCommand;
pub use get::GetCommand;
pub use get_interface::GetInterfaceCommand;
pub use remove_interface::RemoveInterfaceCommand;
pub use set::SetCommand;
pub use show::ShowCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "supplicant" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "supplicant";

    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(CreateInterfaceCommand::new(context.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(RemoveInterfaceCommand::new(context.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(GetInterfaceCommand::new(context.clone())),
    );
    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand::new(context)));
}
