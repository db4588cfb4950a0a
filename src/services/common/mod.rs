//! Shared building blocks for the D-Bus object wrappers

/// Reactive property system for mirrored daemon state
pub mod property;
/// Helpers for reading and rendering D-Bus variants
pub mod variant;
// Property and unwrap macros
#[macro_use]
mod macros;

pub use property::Property;
pub use variant::{
    dict_to_strings, format_value, optional_path, owned_dict, value_as_bool, value_as_str,
    value_as_string_vec, value_to_json,
};
