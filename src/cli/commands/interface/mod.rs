//! Network interface commands.
mod add_network;
mod connection;
mod get;
mod networks;
mod remove_network;
mod scan;
mod select_network;
mod set;
mod show;
mod wait;
mod watch;

use std::sync::Arc;

pub use add_network::AddNetworkCommand;
pub use connection::{ConnectionAction, ConnectionCommand};
pub use get::GetCommand;
pub use networks::NetworksCommand;
pub use remove_network::RemoveNetworkCommand;
pub use scan::ScanCommand;
pub use select_network::SelectNetworkCommand;
pub use set::SetCommand;
pub use show::ShowCommand;
pub use wait::WaitCommand;
pub use watch::WatchCommand;

use crate::cli::{CliContext, CommandRegistry};

/// Registers the commands of the "interface" category.
pub fn register_commands(registry: &mut CommandRegistry, context: Arc<CliContext>) {
    const CATEGORY_NAME: &str = "interface";

    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ScanCommand::new(context.clone())));
    registry.register_command(
        CATEGORY_NAME,
        Box::new(AddNetworkCommand::new(context.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(NetworksCommand::new(context.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(SelectNetworkCommand::new(context.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(RemoveNetworkCommand::new(context.clone())),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(ConnectionCommand::new(
            context.clone(),
            ConnectionAction::Disconnect,
        )),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(ConnectionCommand::new(
            context.clone(),
            ConnectionAction::Reconnect,
        )),
    );
    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(WaitCommand::new(context.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(WatchCommand::new(context)));
}
