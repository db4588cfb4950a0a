use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, Command, CommandResult,
        commands::utils::object_path,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::Bss,
};

/// Shows one BSS by object path.
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
        let path = object_path(&args[0])?;
        let supplicant = self.context.supplicant().await?;

        let bss = Bss::new(supplicant.connection(), path).await?;
        let summary = bss.summary().await;

        if self.context.json() {
            return self.context.render(&summary);
        }

        let mut output = summary.to_string();
        if let Some(frequency) = summary.frequency {
            output.push_str(&format!("\nFrequency: {frequency} MHz"));
        }
        if let Some(channel) = summary.channel {
            output.push_str(&format!("\nChannel: {channel}"));
        }
        if let Some(quality) = summary.signal_quality {
            output.push_str(&format!("\nQuality: {quality}%"));
        }
        if let Some(network_type) = &summary.network_type {
            output.push_str(&format!("\nSecurity: {network_type}"));
        }
        if let Some(mode) = &summary.mode {
            output.push_str(&format!("\nMode: {mode}"));
        }
        if let Some(age) = summary.age {
            output.push_str(&format!("\nLast seen: {age}s ago"));
        }

        Ok(output)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Show details of one BSS".to_string(),
            category: "bss".to_string(),
            args: vec![CommandArg::required("path", "BSS object path", ArgType::Path)],
            examples: vec!["wpa bss show /fi/w1/wpa_supplicant1/Interfaces/0/BSSs/3".to_string()],
        }
    }
}
