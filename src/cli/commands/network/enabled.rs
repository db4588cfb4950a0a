use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, Command, CommandResult,
        commands::utils::object_path,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::Network,
};

/// Enables or disables a network block.
///
/// Registered twice, as `enable` and `disable`.
pub struct EnabledCommand {
    context: Arc<CliContext>,
    enabled: bool,
}

impl EnabledCommand {
    /// Creates a command that sets `Enabled` to `enabled`
    pub fn new(context: Arc<CliContext>, enabled: bool) -> Self {
        Self { context, enabled }
    }

    fn name(&self) -> &'static str {
        if self.enabled { "enable" } else { "disable" }
    }
}

#[async_trait]
impl Command for EnabledCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let path = object_path(&args[0])?;
        let supplicant = self.context.supplicant().await?;

        let network = Network::new(supplicant.connection(), path).await?;
        network.set_enabled(self.enabled).await?;

        Ok(format!("{}d network {}", self.name(), network.path()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: self.name().to_string(),
            description: format!("{} a configured network", capitalize(self.name())),
            category: "network".to_string(),
            args: vec![CommandArg::required("path", "Network object path", ArgType::Path)],
            examples: vec![format!(
                "wpa network {} /fi/w1/wpa_supplicant1/Interfaces/0/Networks/0",
                self.name()
            )],
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
