use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::CommandMetadata,
};

/// Lists every interface wpa_supplicant controls.
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
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let summary = self.context.supplicant().await?.summary().await?;
        self.context.render(&summary)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show the interfaces wpa_supplicant controls".to_string(),
            category: "supplicant".to_string(),
            args: Vec::new(),
            examples: vec![
                "wpa supplicant show".to_string(),
                "wpa --json supplicant show".to_string(),
            ],
        }
    }
}
