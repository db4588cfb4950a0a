use async_trait::async_trait;
use thiserror::Error;

use crate::services::SupplicantError;

/// Errors that can occur during CLI command execution.
///
/// This enum represents all possible error conditions in the CLI system,
/// from command discovery failures to errors reported by wpa_supplicant.
/// Each variant provides enough context to tell the user what went wrong.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// The number of arguments does not match the command metadata.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A single argument could not be interpreted.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        arg: String,
        /// Why it was rejected
        reason: String,
    },

    /// Loading or rendering the configuration failed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// wpa_supplicant or the bus rejected the request.
    ///
    /// The daemon's own error text is carried through unchanged.
    #[error("{0}")]
    Supplicant(#[from] SupplicantError),

    /// Output could not be rendered as JSON.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either the text to print
/// or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
///
/// Used for help generation and for the registry's argument count check.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "ifname", "path", "value").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

impl CommandArg {
    /// A mandatory argument.
    pub fn required(name: &str, description: &str, value_type: ArgType) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: true,
            value_type,
        }
    }

    /// An argument that may be left out.
    pub fn optional(name: &str, description: &str, value_type: ArgType) -> Self {
        Self {
            required: false,
            ..Self::required(name, description, value_type)
        }
    }
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value.
    Number,

    /// A boolean value (true/false, yes/no, 1/0).
    Boolean,

    /// A D-Bus object path.
    Path,

    /// A network interface name such as `wlan0`.
    Interface,
}

impl ArgType {
    /// Short hint shown next to the argument in help output.
    pub fn hint(&self) -> &'static str {
        match self {
            ArgType::String => "string",
            ArgType::Number => "number",
            ArgType::Boolean => "bool",
            ArgType::Path => "object path",
            ArgType::Interface => "ifname",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// This struct serves as the single source of truth for everything about
/// a command: its identity, arguments, usage examples, and categorization.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "show", "scan", "set").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "interface", "bss").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors and
/// are executed by the registry after the argument count was validated
/// against [`Command::metadata`].
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values, errors reported by
    /// wpa_supplicant and output failures.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
