use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::cli::{CliContext, Command, CommandResult, types::CommandMetadata};

/// Prints the location of the configuration file.
pub struct PathCommand {
    context: Arc<CliContext>,
}

impl PathCommand {
    /// Creates a new PathCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for PathCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let path = self.context.config_path();

        self.context
            .render_json_or(&json!({ "path": path }), || path.display().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "path".to_string(),
            description: "Print the configuration file location".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["wpa config path".to_string()],
        }
    }
}
