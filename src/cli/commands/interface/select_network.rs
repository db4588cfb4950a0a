use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    commands::utils::object_path,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Connects to one configured network, disabling the others.
pub struct SelectNetworkCommand {
    context: Arc<CliContext>,
}

impl SelectNetworkCommand {
    /// Creates a new SelectNetworkCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for SelectNetworkCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let path = object_path(&args[1])?;
        let interface = self.context.interface(&args[0]).await?;

        interface.select_network(&path).await?;

        Ok(format!("Selected network {path}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "select-network".to_string(),
            description: "Connect to a configured network".to_string(),
            category: "interface".to_string(),
            args: vec![
                CommandArg::required("ifname", "Kernel interface name", ArgType::Interface),
                CommandArg::required("path", "Network object path", ArgType::Path),
            ],
            examples: vec![
                "wpa interface select-network wlan0 /fi/w1/wpa_supplicant1/Interfaces/0/Networks/0"
                    .to_string(),
            ],
        }
    }
}
