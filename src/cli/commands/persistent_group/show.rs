use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, Command, CommandResult,
        commands::utils::object_path,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::PersistentGroup,
};

/// Shows one stored persistent group.
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

        let group = PersistentGroup::new(supplicant.connection(), path).await?;
        self.context.render(&group.summary().await?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show a stored persistent group".to_string(),
            category: "persistent-group".to_string(),
            args: vec![CommandArg::required(
                "path",
                "Persistent group object path",
                ArgType::Path,
            )],
            examples: vec![
                "wpa persistent-group show /fi/w1/wpa_supplicant1/Interfaces/0/PersistentGroups/0"
                    .to_string(),
            ],
        }
    }
}
