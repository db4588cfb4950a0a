use std::{collections::HashMap, sync::Arc};

use super::{
    CliContext, CliError, Command,
    commands::{bss, config, group, interface, network, p2p, peer, persistent_group, supplicant, wps},
    types::CommandMetadata,
};

/// Registry for CLI commands organized by category.
///
/// Categories follow the wpa_supplicant object hierarchy, so a command's
/// category names the kind of object it acts on.
///
/// # Example Structure
///
/// ```text
/// registry
/// ├── supplicant
/// │   ├── show
/// │   └── create-interface
/// ├── interface
/// │   ├── scan
/// │   └── add-network
/// └── bss
///     ├── list
///     └── show
/// ```
pub struct CommandRegistry {
    /// Nested HashMap structure: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    context: Arc<CliContext>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    ///
    /// Commands are added with [`CommandRegistry::register_command`] or all
    /// at once with [`CommandRegistry::register_all_commands`].
    pub fn new(context: Arc<CliContext>) -> Self {
        Self {
            categories: HashMap::new(),
            context,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// The command's metadata name is its key within the category. A
    /// command registered under an existing name replaces the old one.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or command does
    /// not exist and `CliError::InvalidArguments` if the argument count does
    /// not match the command's metadata. Other errors come from the command.
    pub async fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in category '{category}'"
            ))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args).await
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent display.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Sorted names of every registered category.
    pub fn get_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.categories.keys().cloned().collect();
        categories.sort();
        categories
    }

    /// Metadata of every command in `category`, sorted by name.
    pub fn category_metadata(&self, category: &str) -> Option<Vec<CommandMetadata>> {
        let commands = self.categories.get(category)?;
        let mut metadata: Vec<CommandMetadata> =
            commands.values().map(|command| command.metadata()).collect();
        metadata.sort_by(|a, b| a.name.cmp(&b.name));
        Some(metadata)
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers all available CLI commands in their respective categories.
    pub fn register_all_commands(&mut self) {
        let context = self.context.clone();

        supplicant::register_commands(self, context.clone());
        interface::register_commands(self, context.clone());
        wps::register_commands(self, context.clone());
        p2p::register_commands(self, context.clone());
        bss::register_commands(self, context.clone());
        network::register_commands(self, context.clone());
        peer::register_commands(self, context.clone());
        group::register_commands(self, context.clone());
        persistent_group::register_commands(self, context.clone());
        config::register_commands(self, context);
    }
}
