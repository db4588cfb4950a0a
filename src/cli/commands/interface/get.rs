use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    commands::utils::show_property,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Reads one property of an interface.
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
        let interface = self.context.interface(&args[0]).await?;
        show_property(&self.context, &interface, &args[1]).await
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Read a property of an interface".to_string(),
            category: "interface".to_string(),
            args: vec![
                CommandArg::required("ifname", "Kernel interface name", ArgType::Interface),
                CommandArg::required(
                    "property",
                    "D-Bus property name (e.g., State, ApScan, Country)",
                    ArgType::String,
                ),
            ],
            examples: vec![
                "wpa interface get wlan0 State".to_string(),
                "wpa interface get wlan0 CurrentBSS".to_string(),
            ],
        }
    }
}
