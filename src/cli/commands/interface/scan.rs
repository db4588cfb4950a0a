use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::{ScanOptions, ScanType},
};

/// Runs a blocking scan and lists the BSSs found.
pub struct ScanCommand {
    context: Arc<CliContext>,
}

impl ScanCommand {
    /// Creates a new ScanCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl Command for ScanCommand {
    /// # Errors
    ///
    /// Fails with `ScanFailed` when the daemon reports an unsuccessful scan
    /// and `MethodTimeout` when no result arrives within `scan.timeout_secs`.
    async fn execute(&self, args: &[String]) -> CommandResult {
        let scan_config = &self.context.config().scan;

        let scan_type = match args.get(1) {
            Some(raw) => raw
                .parse::<ScanType>()
                .map_err(|e| CliError::InvalidArgument {
                    arg: "type".to_string(),
                    reason: e.to_string(),
                })?,
            None => scan_config.scan_type,
        };

        let interface = self.context.interface(&args[0]).await?;
        let found = interface
            .scan_blocking(&ScanOptions::new(scan_type), scan_config.timeout())
            .await?;

        let mut summaries = Vec::with_capacity(found.len());
        for bss in &found {
            summaries.push(bss.summary().await);
        }
        summaries.sort_by(|a, b| b.signal_dbm.cmp(&a.signal_dbm));

        self.context.render_list(&summaries, "No BSSs found")
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "scan".to_string(),
            description: "Scan and list the access points in range".to_string(),
            category: "interface".to_string(),
            args: vec![
                CommandArg::required("ifname", "Kernel interface name", ArgType::Interface),
                CommandArg::optional(
                    "type",
                    "active or passive; defaults to scan.scan_type from the config",
                    ArgType::String,
                ),
            ],
            examples: vec![
                "wpa interface scan wlan0".to_string(),
                "wpa interface scan wlan0 passive".to_string(),
            ],
        }
    }
}
