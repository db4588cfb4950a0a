use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    commands::utils::set_property,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Writes one property of an interface.
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
        let interface = self.context.interface(&args[0]).await?;
        set_property(&interface, &args[1], &args[2]).await
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set".to_string(),
            description: "Write a property of an interface".to_string(),
            category: "interface".to_string(),
            args: vec![
                CommandArg::required("ifname", "Kernel interface name", ArgType::Interface),
                CommandArg::required("property", "D-Bus property name", ArgType::String),
                CommandArg::required("value", "New value", ArgType::String),
            ],
            examples: vec![
                "wpa interface set wlan0 ApScan 1".to_string(),
                "wpa interface set wlan0 Country DE".to_string(),
            ],
        }
    }
}
