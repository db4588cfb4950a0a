use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, Command, CommandResult,
        commands::utils::object_path,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::Network,
};

/// Shows the entries of one network block.
pub struct ShowCommand {
    context: Arc<CliContext>,
}

impl ShowCommand {
    /// Creates a new ShowCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let path = object_path(&args[0])?;
        let supplicant = self.context.supplicant().await?;

        let network = Network::new(supplicant.connection(), path).await?;
        self.context.render(&network.summary().await?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show a configured network".to_string(),
            category: "network".to_string(),
            args: vec![CommandArg::required("path", "Network object path", ArgType::Path)],
            examples: vec![
                "wpa network show /fi/w1/wpa_supplicant1/Interfaces/0/Networks/0".to_string(),
            ],
        }
    }
}
