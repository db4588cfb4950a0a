use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    commands::utils::set_property,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Writes one property of the root object.
///
/// The value is converted to the type the property currently has.
pub struct SetCommand {
    context: Arc<CliContext>,
}

impl SetCommand {
    /// Creates a new SetCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for SetCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let supplicant = self.context.supplicant().await?;
        set_property(supplicant, &args[0], &args[1]).await
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Write a property of the root object".to_string(),
            category: "supplicant".to_string(),
            args: vec![
                CommandArg::required("property", "D-Bus property name", ArgType::String),
                CommandArg::required("value", "New value", ArgType::String),
            ],
            examples: vec![
                "wpa supplicant set DebugLevel debug".to_string(),
                "wpa supplicant set DebugTimestamp true".to_string(),
            ],
        }
    }
}
