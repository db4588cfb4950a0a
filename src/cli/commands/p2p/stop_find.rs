use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Stops Wi-Fi Direct peer discovery.
pub struct StopFindCommand {
    context: Arc<CliContext>,
}

impl StopFindCommand {
    /// Creates a new StopFindCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for StopFindCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let p2p = self.context.interface(&args[0]).await?.p2p_device().await?;
        p2p.stop_find().await?;

        Ok("Peer discovery stopped".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "stop-find".to_string(),
            description: "Stop peer discovery".to_string(),
            category: "p2p".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa p2p stop-find wlan0".to_string()],
        }
    }
}
