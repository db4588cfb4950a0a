use async_trait::async_trait;
use schemars::schema_for;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Prints the JSON schema of the configuration file.
///
/// Editors with TOML schema support can use it for completion.
pub struct SchemaCommand;

#[async_trait]
impl Command for SchemaCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let schema = schema_for!(Config);
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the configuration JSON schema".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["wpa config schema > wpa-config.schema.json".to_string()],
        }
    }
}
