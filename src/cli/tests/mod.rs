//! Unit tests for CLI module
//!
//! Tests command registry, help output, value coercion and formatting.
//! Nothing here connects to the bus.

use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use zbus::zvariant::{OwnedValue, Value};

use crate::{
    cli::{
        ArgType, CliContext, CliError, CliService, Command, CommandArg, CommandMetadata,
        CommandRegistry, CommandResult, coerce_to_current_type,
        commands::utils::parse_bool,
        formatting::{format_error, format_property, format_signal_args},
    },
    config::Config,
};

fn context(json: bool) -> CliContext {
    CliContext::new(
        Config::default(),
        PathBuf::from("/tmp/wpa/config.toml"),
        json,
    )
}

struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        Ok(args.join(" "))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "echo".to_string(),
            description: "Echo the arguments".to_string(),
            category: "test".to_string(),
            args: vec![
                CommandArg::required("first", "First word", ArgType::String),
                CommandArg::optional("second", "Second word", ArgType::String),
            ],
            examples: vec![],
        }
    }
}

fn echo_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new(Arc::new(context(false)));
    registry.register_command("test", Box::new(EchoCommand));
    registry
}

fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[tokio::test]
async fn command_registry_starts_empty() {
    let registry = CommandRegistry::new(Arc::new(context(false)));

    assert!(registry.get_categories().is_empty());
    assert!(registry.list_commands().is_empty());
}

#[tokio::test]
async fn registry_dispatches_to_command() {
    let registry = echo_registry();

    let output = registry
        .execute("test", "echo", &args(&["hello", "world"]))
        .await
        .unwrap();

    assert_eq!(output, "hello world");
}

#[tokio::test]
async fn registry_reports_unknown_category_and_command() {
    let registry = echo_registry();

    let err = registry.execute("nope", "echo", &[]).await.unwrap_err();
    assert!(matches!(err, CliError::CommandNotFound(msg) if msg.contains("'nope'")));

    let err = registry.execute("test", "shout", &[]).await.unwrap_err();
    assert!(matches!(err, CliError::CommandNotFound(msg) if msg.contains("'shout'")));
}

#[tokio::test]
async fn registry_rejects_too_few_arguments() {
    let registry = echo_registry();

    let err = registry.execute("test", "echo", &[]).await.unwrap_err();

    assert!(
        matches!(err, CliError::InvalidArguments(msg) if msg == "Expected at least 1 arguments, got 0")
    );
}

#[tokio::test]
async fn registry_rejects_too_many_arguments() {
    let registry = echo_registry();

    let err = registry
        .execute("test", "echo", &args(&["a", "b", "c"]))
        .await
        .unwrap_err();

    assert!(
        matches!(err, CliError::InvalidArguments(msg) if msg == "Expected at most 2 arguments, got 3")
    );
}

#[tokio::test]
async fn all_categories_are_registered() {
    let mut registry = CommandRegistry::new(Arc::new(context(false)));
    registry.register_all_commands();

    assert_eq!(
        registry.get_categories(),
        vec![
            "bss",
            "config",
            "group",
            "interface",
            "network",
            "p2p",
            "peer",
            "persistent-group",
            "supplicant",
            "wps",
        ]
    );
}

#[tokio::test]
async fn network_category_has_enable_and_disable() {
    let mut registry = CommandRegistry::new(Arc::new(context(false)));
    registry.register_all_commands();

    let names: Vec<String> = registry
        .category_metadata("network")
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();

    assert_eq!(names, vec!["disable", "enable", "show"]);
}

#[tokio::test]
async fn help_lists_categories() {
    let service = CliService::new(context(false));

    let help = service.execute_command("", "", &[]).await.unwrap();

    assert!(help.contains("persistent-group"));
    assert!(help.contains("interface"));
}

#[tokio::test]
async fn category_help_lists_arguments() {
    let service = CliService::new(context(false));

    let help = service.execute_command("interface", "help", &[]).await.unwrap();

    assert!(help.contains("add-network"));
    assert!(help.contains("<ifname>"));
    assert!(help.contains("[psk]"));
}

#[tokio::test]
async fn category_help_for_unknown_category_fails() {
    let service = CliService::new(context(false));

    let err = service.category_help("radio").unwrap_err();

    assert!(matches!(err, CliError::CommandNotFound(_)));
}

#[tokio::test]
async fn config_path_does_not_need_the_bus() {
    let service = CliService::new(context(false));

    let output = service.execute_command("config", "path", &[]).await.unwrap();

    assert_eq!(output, "/tmp/wpa/config.toml");
}

#[tokio::test]
async fn config_path_renders_json() {
    let service = CliService::new(context(true));

    let output = service.execute_command("config", "path", &[]).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["path"], "/tmp/wpa/config.toml");
}

#[tokio::test]
async fn config_show_renders_toml() {
    let service = CliService::new(context(false));

    let output = service.execute_command("config", "show", &[]).await.unwrap();
    let parsed = Config::parse(&output).unwrap();

    assert_eq!(parsed, Config::default());
}

#[tokio::test]
async fn config_schema_is_json() {
    let service = CliService::new(context(false));

    let output = service.execute_command("config", "schema", &[]).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(parsed.get("properties").is_some());
}

#[test]
fn parse_bool_accepts_common_words() {
    for word in ["true", "YES", "on", "1"] {
        assert!(parse_bool(word).unwrap(), "{word}");
    }
    for word in ["false", "No", "off", "0"] {
        assert!(!parse_bool(word).unwrap(), "{word}");
    }
    assert!(parse_bool("maybe").is_err());
}

#[test]
fn coerce_matches_scalar_types() {
    assert_eq!(
        coerce_to_current_type(&Value::from(false), "yes").unwrap(),
        Value::from(true)
    );
    assert_eq!(
        coerce_to_current_type(&Value::from(0u32), "42").unwrap(),
        Value::from(42u32)
    );
    assert_eq!(
        coerce_to_current_type(&Value::from(0i64), "-7").unwrap(),
        Value::from(-7i64)
    );
    assert_eq!(
        coerce_to_current_type(&Value::from(0.0f64), "2.5").unwrap(),
        Value::from(2.5f64)
    );
    assert_eq!(
        coerce_to_current_type(&Value::from("old"), "new").unwrap(),
        Value::from("new")
    );
}

#[test]
fn coerce_unwraps_variants() {
    let current = Value::Value(Box::new(Value::from(1i32)));

    assert_eq!(
        coerce_to_current_type(&current, "5").unwrap(),
        Value::from(5i32)
    );
}

#[test]
fn coerce_splits_string_arrays() {
    let current = Value::from(vec!["a", "b"]);

    let coerced = coerce_to_current_type(&current, "x, y,,z").unwrap();

    assert_eq!(
        coerced,
        Value::from(vec!["x".to_string(), "y".to_string(), "z".to_string()])
    );
}

#[test]
fn coerce_rejects_bad_numbers_and_unsupported_types() {
    let err = coerce_to_current_type(&Value::from(0u16), "lots").unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument { reason, .. } if reason.contains("uint16")));

    let dict: HashMap<String, u32> = HashMap::from([("a".to_string(), 1)]);
    let err = coerce_to_current_type(&Value::from(dict), "a=1").unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument { reason, .. } if reason.contains("a{su}")));
}

#[test]
fn format_error_is_red_and_reset() {
    let formatted = format_error("boom");

    assert!(formatted.starts_with("\x1b[1m\x1b[31m"));
    assert!(formatted.ends_with("\x1b[0m"));
    assert!(formatted.contains("boom"));
}

#[test]
fn format_property_uses_plain_strings() {
    assert_eq!(format_property("Ifname", &Value::from("wlan0")), "Ifname: wlan0");
    assert_eq!(format_property("ApScan", &Value::from(1u32)), "ApScan: 1");
}

#[test]
fn format_signal_args_joins_values() {
    let args = vec![
        OwnedValue::try_from(Value::from(true)).unwrap(),
        OwnedValue::try_from(Value::from(3u32)).unwrap(),
    ];

    assert_eq!(format_signal_args(&args), "(true, 3)");
}
