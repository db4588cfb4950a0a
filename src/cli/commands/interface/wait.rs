use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde_json::Value as Json;

use crate::{
    cli::{
        CliContext, CliError, Command, CommandResult,
        formatting::format_signal_args,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::common::value_to_json,
};

/// Blocks until an interface emits a signal and prints its arguments.
pub struct WaitCommand {
    context: Arc<CliContext>,
}

impl WaitCommand {
    /// Creates a new WaitCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }

    fn parse_timeout(raw: Option<&String>) -> Result<Option<Duration>, CliError> {
        raw.map(|secs| {
            secs.parse::<f64>()
                .ok()
                .filter(|secs| secs.is_finite() && *secs >= 0.0)
                .map(Duration::from_secs_f64)
                .ok_or_else(|| CliError::InvalidArgument {
                    arg: "secs".to_string(),
                    reason: format!("'{secs}' is not a non-negative number of seconds"),
                })
        })
        .transpose()
    }
}

#[async_trait]
impl Command for WaitCommand {
    /// # Errors
    ///
    /// Fails with `MethodTimeout` when the signal does not arrive in time.
    async fn execute(&self, args: &[String]) -> CommandResult {
        let timeout = Self::parse_timeout(args.get(2))?;
        let interface = self.context.interface(&args[0]).await?;
        let signal = &args[1];

        let received = interface.wait_for(signal, timeout).await?;

        let document = Json::Array(received.iter().map(|value| value_to_json(value)).collect());
        self.context
            .render_json_or(&document, || format!("{signal}{}", format_signal_args(&received)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "wait".to_string(),
            description: "Wait for the next emission of a signal".to_string(),
            category: "interface".to_string(),
            args: vec![
                CommandArg::required("ifname", "Kernel interface name", ArgType::Interface),
                CommandArg::required(
                    "signal",
                    "Signal name (e.g., ScanDone, NetworkSelected)",
                    ArgType::String,
                ),
                CommandArg::optional(
                    "secs",
                    "Give up after this many seconds; waits forever when omitted",
                    ArgType::Number,
                ),
            ],
            examples: vec![
                "wpa interface wait wlan0 ScanDone 10".to_string(),
                "wpa interface wait wlan0 PropertiesChanged".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_optional() {
        assert!(matches!(WaitCommand::parse_timeout(None), Ok(None)));
    }

    #[test]
    fn timeout_accepts_fractional_seconds() {
        let raw = "1.5".to_string();
        assert!(matches!(
            WaitCommand::parse_timeout(Some(&raw)),
            Ok(Some(d)) if d == Duration::from_millis(1500)
        ));
    }

    #[test]
    fn timeout_rejects_negative_and_garbage() {
        for raw in ["-1", "soon", "NaN"] {
            let raw = raw.to_string();
            assert!(matches!(
                WaitCommand::parse_timeout(Some(&raw)),
                Err(CliError::InvalidArgument { .. })
            ));
        }
    }
}
