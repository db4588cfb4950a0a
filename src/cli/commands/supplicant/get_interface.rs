use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Prints the object path of a controlled interface.
pub struct GetInterfaceCommand {
    context: Arc<CliContext>,
}

impl GetInterfaceCommand {
    /// Creates a new GetInterfaceCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for GetInterfaceCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let interface = self.context.interface(&args[0]).await?;
        let path = interface.path().to_string();

        self.context
            .render_json_or(&serde_json::json!({ "path": path }), || path.clone())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get-interface".to_string(),
            description: "Print the object path of a controlled interface".to_string(),
            category: "supplicant".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa supplicant get-interface wlan0".to_string()],
        }
    }
}
