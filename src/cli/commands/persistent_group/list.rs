use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Lists the persistent groups stored for an interface.
pub struct ListCommand {
    context: Arc<CliContext>,
}

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let p2p = self.context.interface(&args[0]).await?.p2p_device().await?;

        let mut summaries = Vec::new();
        for group in p2p.persistent_groups().await? {
            summaries.push(group.summary().await?);
        }

        self.context.render_list(&summaries, "No persistent groups stored")
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List stored persistent groups".to_string(),
            category: "persistent-group".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa persistent-group list wlan0".to_string()],
        }
    }
}
