use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Lists the configured network blocks of an interface.
pub struct NetworksCommand {
    context: Arc<CliContext>,
}

impl NetworksCommand {
    /// Creates a new NetworksCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for NetworksCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let interface = self.context.interface(&args[0]).await?;

        let mut summaries = Vec::new();
        for network in interface.networks().await? {
            summaries.push(network.summary().await?);
        }

        self.context.render_list(&summaries, "No networks configured")
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "networks".to_string(),
            description: "List configured networks".to_string(),
            category: "interface".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa interface networks wlan0".to_string()],
        }
    }
}
