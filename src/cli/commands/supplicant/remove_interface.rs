use std::sync::Arc;

use async_trait::async_trait;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Stops wpa_supplicant from controlling an interface.
pub struct RemoveInterfaceCommand {
    context: Arc<CliContext>,
}

impl RemoveInterfaceCommand {
    /// Creates a new RemoveInterfaceCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for RemoveInterfaceCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let ifname = &args[0];
        let supplicant = self.context.supplicant().await?;
        let interface = supplicant.get_interface(ifname).await?;

        supplicant.remove_interface(interface.path()).await?;

        Ok(format!("Removed interface {ifname}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "remove-interface".to_string(),
            description: "Stop controlling a network interface".to_string(),
            category: "supplicant".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa supplicant remove-interface wlan0".to_string()],
        }
    }
}
