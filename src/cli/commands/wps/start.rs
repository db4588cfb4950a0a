use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use serde_json::Value as Json;

use crate::{
    cli::{
        CliContext, CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::{
        common::{format_value, value_to_json},
        supplicant::{WpsKind, WpsRole, WpsStartArgs},
    },
};

/// Starts a WPS exchange on an interface.
pub struct StartCommand {
    context: Arc<CliContext>,
}

impl StartCommand {
    /// Creates a new StartCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }

    fn start_args(role: &str, kind: &str, pin: Option<&String>) -> Result<WpsStartArgs, CliError> {
        let invalid = |arg: &str, e: crate::services::SupplicantError| CliError::InvalidArgument {
            arg: arg.to_string(),
            reason: e.to_string(),
        };

        Ok(WpsStartArgs {
            role: role.parse::<WpsRole>().map_err(|e| invalid("role", e))?,
            kind: kind.parse::<WpsKind>().map_err(|e| invalid("type", e))?,
            pin: pin.cloned(),
            ..WpsStartArgs::default()
        })
    }
}

#[async_trait]
impl Command for StartCommand {
    /// # Errors
    ///
    /// Fails with `InvalidArgs` for combinations the daemon rejects, such as
    /// a registrar without a PIN.
    async fn execute(&self, args: &[String]) -> CommandResult {
        let start = Self::start_args(&args[1], &args[2], args.get(3))?;
        let wps = self.context.interface(&args[0]).await?.wps().await?;

        let reply: BTreeMap<String, _> = wps.start(&start).await?.into_iter().collect();

        let document = Json::Object(
            reply
                .iter()
                .map(|(key, value)| (key.clone(), value_to_json(value)))
                .collect(),
        );

        self.context.render_json_or(&document, || {
            let mut output = format!("WPS {} started as {}", start.kind.as_str(), start.role.as_str());
            for (key, value) in &reply {
                output.push_str(&format!("\n{key}: {}", format_value(value)));
            }
            output
        })
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "start".to_string(),
            description: "Start a WPS exchange".to_string(),
            category: "wps".to_string(),
            args: vec![
                CommandArg::required("ifname", "Kernel interface name", ArgType::Interface),
                CommandArg::required("role", "enrollee or registrar", ArgType::String),
                CommandArg::required("type", "pbc or pin", ArgType::String),
                CommandArg::optional(
                    "pin",
                    "PIN to use; the daemon generates one for enrollees when omitted",
                    ArgType::String,
                ),
            ],
            examples: vec![
                "wpa wps start wlan0 enrollee pbc".to_string(),
                "wpa wps start wlan0 enrollee pin 12345670".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_pin_enrollee_args() {
        let pin = "12345670".to_string();
        let args = StartCommand::start_args("enrollee", "pin", Some(&pin));

        assert!(matches!(
            args,
            Ok(WpsStartArgs { role: WpsRole::Enrollee, kind: WpsKind::Pin, pin: Some(ref p), .. })
                if p == "12345670"
        ));
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(matches!(
            StartCommand::start_args("bystander", "pbc", None),
            Err(CliError::InvalidArgument { ref arg, .. }) if arg == "role"
        ));
    }
}
