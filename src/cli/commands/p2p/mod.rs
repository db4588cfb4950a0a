//! Wi-Fi Direct commands.
mod find;
mod peers;
mod stop_find;

use std::sync::Arc;

pub use find::FindCommand;
pub use peers::PeersCommand;
pub use stop_find::StopFindCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "p2p" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "p2p";

    registry.register_command(CATEGORY_NAME, Box::new(FindCommand::new(context.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(StopFindCommand::new(context.clone())),
    );
    registry.register_command(CATEGORY_NAME, Box::new(PeersCommand::new(context)));
}
