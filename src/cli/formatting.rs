//! Formatting utilities for CLI output.
//!
//! Provides ANSI styling for help text and error lines, and plain renderers
//! for values read from wpa_supplicant.

use zbus::zvariant::Value;

use crate::services::{common::format_value, supplicant::SignalArgs};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats usage examples with styling
pub fn format_usage(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Renders one property as `name: value`.
///
/// # Examples
///
/// ```
/// use wpa_supplicant::cli::formatting::format_property;
/// use zbus::zvariant::Value;
///
/// assert_eq!(format_property("State", &Value::from("completed")), "State: completed");
/// assert_eq!(format_property("Scanning", &Value::from(false)), "Scanning: false");
/// ```
pub fn format_property(name: &str, value: &Value<'_>) -> String {
    format!("{name}: {}", format_value(value))
}

/// Renders signal arguments as a parenthesised, comma separated list.
pub fn format_signal_args(args: &SignalArgs) -> String {
    let rendered: Vec<String> = args.iter().map(|value| format_value(value)).collect();
    format!("({})", rendered.join(", "))
}
