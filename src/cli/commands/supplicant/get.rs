use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    commands::utils::show_property,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Reads one property of the root object.
pub struct GetCommand {
    context: Arc<CliContext>,
}

impl GetCommand {
    /// Creates a new GetCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for GetCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let supplicant = self.context.supplicant().await?;
        show_property(&self.context, supplicant, &args[0]).await
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Read a property of the root object".to_string(),
            category: "supplicant".to_string(),
            args: vec![CommandArg::required(
                "property",
                "D-Bus property name (e.g., DebugLevel, Capabilities)",
                ArgType::String,
            )],
            examples: vec![
                "wpa supplicant get DebugLevel".to_string(),
                "wpa supplicant get EapMethods".to_string(),
            ],
        }
    }
}
