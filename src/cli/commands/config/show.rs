use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{CliContext, CliError, Command, CommandResult, types::CommandMetadata};

/// Prints the effective configuration.
///
/// Human output is TOML, so it can be pasted back into the config file.
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
        let config = self.context.config();

        if self.context.json() {
            return Ok(serde_json::to_string_pretty(config)?);
        }

        toml::to_string_pretty(config)
            .map(|rendered| rendered.trim_end().to_string())
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Print the effective configuration".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["wpa config show".to_string(), "wpa --json config show".to_string()],
        }
    }
}
