use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, Command, CommandResult,
        commands::utils::object_path,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::Peer,
};

/// Shows one Wi-Fi Direct peer.
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

        let peer = Peer::new(supplicant.connection(), path).await?;
        self.context.render(&peer.summary().await?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show a discovered peer".to_string(),
            category: "peer".to_string(),
            args: vec![CommandArg::required("path", "Peer object path", ArgType::Path)],
            examples: vec![
                "wpa peer show /fi/w1/wpa_supplicant1/Interfaces/0/Peers/5e0aab1fd2c4".to_string(),
            ],
        }
    }
}
