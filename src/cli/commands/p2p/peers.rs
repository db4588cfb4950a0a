use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Lists the Wi-Fi Direct peers discovered so far.
pub struct PeersCommand {
    context: Arc<CliContext>,
}

impl PeersCommand {
    /// Creates a new PeersCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for PeersCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let p2p = self.context.interface(&args[0]).await?.p2p_device().await?;

        let mut summaries = Vec::new();
        for peer in p2p.peers().await? {
            summaries.push(peer.summary().await?);
        }

        self.context.render_list(&summaries, "No peers found")
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "peers".to_string(),
            description: "List discovered peers".to_string(),
            category: "p2p".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa p2p peers wlan0".to_string()],
        }
    }
}
