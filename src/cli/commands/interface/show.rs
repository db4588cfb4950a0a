use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Shows the state of one interface and what it is connected to.
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
    async fn execute(&self, args: &[String]) -> CommandResult {
        let interface = self.context.interface(&args[0]).await?;

        let (summary, current_bss, current_network, scanning) = tokio::join!(
            interface.summary(),
            interface.current_bss(),
            interface.current_network(),
            interface.scanning()
        );
        let summary = summary?;
        let scanning = scanning?;

        let current_bss = match current_bss? {
            Some(bss) => Some(bss.summary().await),
            None => None,
        };
        let current_network = match current_network? {
            Some(network) => Some(network.summary().await?),
            None => None,
        };

        let document = json!({
            "interface": summary,
            "scanning": scanning,
            "current_bss": current_bss,
            "current_network": current_network,
        });

        self.context.render_json_or(&document, || {
            let mut output = format!("{summary}\nScanning: {scanning}\n");
            match &current_bss {
                Some(bss) => output.push_str(&format!("Current BSS: {bss}\n")),
                None => output.push_str("Current BSS: none\n"),
            }
            match &current_network {
                Some(network) => output.push_str(&format!("Current network: {network}")),
                None => output.push_str("Current network: none"),
            }
            output
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show interface state and current connection".to_string(),
            category: "interface".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa interface show wlan0".to_string()],
        }
    }
}
