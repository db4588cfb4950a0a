use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, Command, CommandResult,
        commands::utils::object_path,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::Group,
};

/// Shows one Wi-Fi Direct group.
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

        let group = Group::new(supplicant.connection(), path).await?;
        self.context.render(&group.summary().await?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show a Wi-Fi Direct group".to_string(),
            category: "group".to_string(),
            args: vec![CommandArg::required("path", "Group object path", ArgType::Path)],
            examples: vec![
                "wpa group show /fi/w1/wpa_supplicant1/Interfaces/1/Groups/DIRECT-xy".to_string(),
            ],
        }
    }
}
