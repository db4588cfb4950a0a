use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::CreateInterfaceArgs,
};

/// Asks wpa_supplicant to take control of a network interface.
pub struct CreateInterfaceCommand {
    context: Arc<CliContext>,
}

impl CreateInterfaceCommand {
    /// Creates a new CreateInterfaceCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for CreateInterfaceCommand {
    /// # Errors
    ///
    /// Fails with `InterfaceExists` when the interface is already controlled.
    async fn execute(&self, args: &[String]) -> CommandResult {
        let non_empty = |index: usize| args.get(index).filter(|s| !s.is_empty()).cloned();

        let create = CreateInterfaceArgs {
            driver: non_empty(1),
            bridge_ifname: non_empty(2),
            config_file: non_empty(3),
            ..CreateInterfaceArgs::new(args[0].as_str())
        };

        let interface = self
            .context
            .supplicant()
            .await?
            .create_interface(&create)
            .await?;

        self.context.render(&interface.summary().await?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "create-interface".to_string(),
            description: "Start controlling a network interface".to_string(),
            category: "supplicant".to_string(),
            args: vec![
                CommandArg::required("ifname", "Kernel interface name", ArgType::Interface),
                CommandArg::optional(
                    "driver",
                    "Driver backend such as nl80211 or wext",
                    ArgType::String,
                ),
                CommandArg::optional(
                    "bridge-ifname",
                    "Bridge the interface belongs to",
                    ArgType::Interface,
                ),
                CommandArg::optional(
                    "config-file",
                    "wpa_supplicant configuration file for the interface",
                    ArgType::String,
                ),
            ],
            examples: vec![
                "wpa supplicant create-interface wlan0".to_string(),
                "wpa supplicant create-interface wlan0 nl80211".to_string(),
            ],
        }
    }
}
