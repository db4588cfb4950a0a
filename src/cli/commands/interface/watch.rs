use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use serde_json::json;

use crate::cli::{
    CliContext, Command, CommandResult,
    types::{ArgType, CommandArg, CommandMetadata},
};

/// Prints interface notifications until interrupted.
pub struct WatchCommand {
    context: Arc<CliContext>,
}

impl WatchCommand {
    /// Creates a new WatchCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for WatchCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let ifname = &args[0];
        let interface = self.context.interface(ifname).await?;
        let events = interface.events().await?;
        tokio::pin!(events);

        eprintln!("Watching {ifname}, press Ctrl+C to stop");

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => break,
                event = events.next() => {
                    let Some(event) = event else {
                        break;
                    };

                    if self.context.json() {
                        println!("{}", json!({ "interface": ifname, "event": event.to_string() }));
                    } else {
                        println!("{event}");
                    }
                }
            }
        }

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "watch".to_string(),
            description: "Print interface events until Ctrl+C".to_string(),
            category: "interface".to_string(),
            args: vec![CommandArg::required(
                "ifname",
                "Kernel interface name",
                ArgType::Interface,
            )],
            examples: vec!["wpa interface watch wlan0".to_string()],
        }
    }
}
