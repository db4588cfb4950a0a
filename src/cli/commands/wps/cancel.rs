use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Cancels an ongoing WPS exchange.
pub struct CancelCommand {
    context: Arc<CliContext>,
}

impl CancelCommand {
    /// Creates a new CancelCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for CancelCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let ifname = &args[0];
        self.context.interface(ifname).await?.wps().await?.cancel().await?;

        Ok(format!("WPS cancelled on {ifname}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "cancel".to_string(),
            description: "Cancel an ongoing WPS exchange".to_string(),
            category: "wps".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa wps cancel wlan0".to_string()],
        }
    }
}
