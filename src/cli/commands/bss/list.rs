use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Lists the BSSs an interface currently knows, without scanning.
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
        let interface = self.context.interface(&args[0]).await?;

        let mut summaries = Vec::new();
        for bss in interface.bss_list().await? {
            summaries.push(bss.summary().await);
        }

        self.context.render_list(&summaries, "No BSSs known")
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List known BSSs from the last scans".to_string(),
            category: "bss".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa bss list wlan0".to_string()],
        }
    }
}
