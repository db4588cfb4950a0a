use std::sync::Arc;

use super::{
    CliContext, CliError, CommandRegistry,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
        format_usage,
    },
};

/// High-level service for managing and executing CLI commands.
///
/// Resolves `help` requests itself and hands everything else to the
/// [`CommandRegistry`].
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    pub fn new(context: CliContext) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(context));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// An empty or `help` category prints the overview; a category without
    /// a command (or with `help`) prints that category's commands.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Other errors are returned by the command itself.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        match (category, command_name) {
            ("" | "help" | "--help" | "-h", _) => Ok(self.help()),
            (category, "" | "help" | "--help" | "-h") => self.category_help(category),
            _ => self.registry.execute(category, command_name, args).await,
        }
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    /// Overview of every category and its commands.
    pub fn help(&self) -> String {
        let mut output = format!(
            "{}\n\n{}\n  wpa [--debug] [--config PATH] [--json] <category> <command> [args...]\n\n{}\n",
            format_header("wpa - wpa_supplicant D-Bus client"),
            format_subheader("Usage:"),
            format_subheader("Categories:"),
        );

        for (category, commands) in self.list_all() {
            output.push_str(&format!(
                "  {:<18} {}\n",
                format_category(&category),
                format_description(&commands.join(", "))
            ));
        }

        output.push_str(&format!(
            "\n{}",
            format_usage("Run 'wpa <category> help' for the commands of one category.")
        ));

        output
    }

    /// Commands of one category with their arguments and examples.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the category doesn't exist.
    pub fn category_help(&self, category: &str) -> Result<String, CliError> {
        let commands = self.registry.category_metadata(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let mut output = format!("{}\n", format_header(&format!("wpa {category}")));

        for metadata in commands {
            let usage: Vec<String> = metadata
                .args
                .iter()
                .map(|arg| {
                    if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    }
                })
                .collect();

            output.push_str(&format!(
                "\n  {} {}\n    {}\n",
                format_command(&metadata.name),
                usage.join(" "),
                format_description(&metadata.description)
            ));

            for arg in &metadata.args {
                output.push_str(&format!(
                    "      {:<14} {} {}\n",
                    arg.name,
                    format_usage(&format!("({})", arg.value_type.hint())),
                    arg.description
                ));
            }

            for example in &metadata.examples {
                output.push_str(&format!("      {}\n", format_usage(example)));
            }
        }

        Ok(output)
    }
}
