use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Which connection request a [`ConnectionCommand`] sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionAction {
    /// Drop the current association.
    Disconnect,
    /// Associate again after a disconnect.
    Reconnect,
}

impl ConnectionAction {
    fn name(&self) -> &'static str {
        match self {
            ConnectionAction::Disconnect => "disconnect",
            ConnectionAction::Reconnect => "reconnect",
        }
    }
}

/// Disconnects or reconnects an interface.
pub struct ConnectionCommand {
    context: Arc<CliContext>,
    action: ConnectionAction,
}

impl ConnectionCommand {
    /// Creates a command sending `action`
    pub fn new(context: Arc<CliContext>, action: ConnectionAction) -> Self {
        Self { context, action }
    }
}

#[async_trait]
impl Command for ConnectionCommand {
    /// # Errors
    ///
    /// `disconnect` fails with `NotConnected` when there is nothing to drop.
    async fn execute(&self, args: &[String]) -> CommandResult {
        let ifname = &args[0];
        let interface = self.context.interface(ifname).await?;

        match self.action {
            ConnectionAction::Disconnect => {
                interface.disconnect().await?;
                Ok(format!("{ifname} disconnected"))
            }
            ConnectionAction::Reconnect => {
                interface.reconnect().await?;
                Ok(format!("{ifname} reconnecting"))
            }
        }
    }

    fn metadata(&self) -> CommandMetadata {
        let description = match self.action {
            ConnectionAction::Disconnect => "Disconnect from the current network",
            ConnectionAction::Reconnect => "Reconnect after a disconnect",
        };

        CommandMetadata {
            name: self.action.name().to_string(),
            description: description.to_string(),
            category: "interface".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec![format!("wpa interface {} wlan0", self.action.name())],
        }
    }
}
