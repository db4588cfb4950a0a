use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::P2pFindArgs,
};

/// Starts Wi-Fi Direct peer discovery.
pub struct FindCommand {
    context: Arc<CliContext>,
}

impl FindCommand {
    /// Creates a new FindCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for FindCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let timeout = args
            .get(1)
            .map(|secs| {
                secs.parse::<i32>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| CliError::InvalidArgument {
                        arg: "secs".to_string(),
                        reason: format!("'{secs}' is not a positive number of seconds"),
                    })
            })
            .transpose()?;

        let p2p = self.context.interface(&args[0]).await?.p2p_device().await?;
        p2p.find(&P2pFindArgs {
            timeout,
            ..P2pFindArgs::default()
        })
        .await?;

        Ok(match timeout {
            Some(secs) => format!("Searching for peers for {secs}s"),
            None => "Searching for peers until stopped".to_string(),
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "find".to_string(),
            description: "Start peer discovery".to_string(),
            category: "p2p".to_string(),
            args: vec![
                CommandArg::required("ifname", "Kernel interface name", ArgType::Interface),
                CommandArg::optional(
                    "secs",
                    "Stop searching after this many seconds",
                    ArgType::Number,
                ),
            ],
            examples: vec![
                "wpa p2p find wlan0".to_string(),
                "wpa p2p find wlan0 30".to_string(),
            ],
        }
    }
}
