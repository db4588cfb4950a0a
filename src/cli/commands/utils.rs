use zbus::zvariant::{OwnedObjectPath, Value};

use crate::{
    cli::{CliContext, CliError, CommandResult, formatting::format_property},
    services::{
        common::value_to_json,
        supplicant::{RemoteObject, parse_path},
    },
};

/// Parses a user supplied object path argument.
///
/// # Errors
/// Returns `CliError::InvalidArgument` if `raw` is not a valid object path.
pub fn object_path(raw: &str) -> Result<OwnedObjectPath, CliError> {
    parse_path(raw).map_err(|e| CliError::InvalidArgument {
        arg: "path".to_string(),
        reason: e.to_string(),
    })
}

/// Parses a boolean written as true/false, yes/no, on/off or 1/0.
///
/// # Errors
/// Returns `CliError::InvalidArgument` for anything else.
pub fn parse_bool(raw: &str) -> Result<bool, CliError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(CliError::InvalidArgument {
            arg: "value".to_string(),
            reason: format!("'{raw}' is not a boolean"),
        }),
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, type_name: &str) -> Result<T, CliError> {
    raw.trim().parse().map_err(|_| CliError::InvalidArgument {
        arg: "value".to_string(),
        reason: format!("'{raw}' is not a valid {type_name}"),
    })
}

/// Converts textual input to the D-Bus type of a property's current value.
///
/// Supports booleans, every integer width, doubles, strings, object paths,
/// string arrays (comma separated) and byte arrays (taken as raw text).
///
/// # Errors
/// Returns `CliError::InvalidArgument` when `raw` does not parse as the
/// current type, or the current type is not supported.
pub fn coerce_to_current_type(current: &Value<'_>, raw: &str) -> Result<Value<'static>, CliError> {
    let coerced = match current {
        Value::Value(inner) => return coerce_to_current_type(inner, raw),
        Value::Bool(_) => Value::from(parse_bool(raw)?),
        Value::U8(_) => Value::from(parse_number::<u8>(raw, "byte")?),
        Value::I16(_) => Value::from(parse_number::<i16>(raw, "int16")?),
        Value::U16(_) => Value::from(parse_number::<u16>(raw, "uint16")?),
        Value::I32(_) => Value::from(parse_number::<i32>(raw, "int32")?),
        Value::U32(_) => Value::from(parse_number::<u32>(raw, "uint32")?),
        Value::I64(_) => Value::from(parse_number::<i64>(raw, "int64")?),
        Value::U64(_) => Value::from(parse_number::<u64>(raw, "uint64")?),
        Value::F64(_) => Value::from(parse_number::<f64>(raw, "double")?),
        Value::Str(_) => Value::from(raw.to_string()),
        Value::ObjectPath(_) => Value::from(object_path(raw)?.into_inner()),
        other => match other.value_signature().to_string().as_str() {
            "as" => {
                let items: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect();
                Value::from(items)
            }
            "ay" => Value::from(raw.as_bytes().to_vec()),
            signature => {
                return Err(CliError::InvalidArgument {
                    arg: "value".to_string(),
                    reason: format!("properties of type '{signature}' cannot be set from text"),
                });
            }
        },
    };

    Ok(coerced)
}

/// Reads `property` and renders it for display or as JSON.
///
/// # Errors
/// Returns the mapped remote error if the read fails.
pub async fn show_property(
    context: &CliContext,
    object: &RemoteObject,
    property: &str,
) -> CommandResult {
    let value = object.get(property).await?;
    context.render_json_or(&value_to_json(&value), || format_property(property, &value))
}

/// Reads `property`, coerces `raw` to its type and writes it back.
///
/// # Errors
/// Returns the read, coercion or write failure.
pub async fn set_property(
    object: &RemoteObject,
    property: &str,
    raw: &str,
) -> Result<String, CliError> {
    let current = object.get(property).await?;
    let value = coerce_to_current_type(&current, raw)?;
    object.set(property, value).await?;

    Ok(format!("{property} set to {raw}"))
}
