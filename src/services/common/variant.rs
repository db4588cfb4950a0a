//! Read-side helpers for `zbus::zvariant` values.
//!
//! wpa_supplicant hands back loosely typed `a{sv}` dictionaries for BSS
//! security info, network blocks, capabilities and signal payloads. These
//! helpers peel nested variants and turn them into plain Rust or JSON values.

use std::collections::HashMap;

use serde_json::{Map, Number, Value as Json};
use zbus::zvariant::{OwnedObjectPath, OwnedValue, Value};

/// Strips any number of `v` wrappers around a value.
fn peel<'v, 'a>(value: &'v Value<'a>) -> &'v Value<'a> {
    match value {
        Value::Value(inner) => peel(inner),
        other => other,
    }
}

/// Borrows the string inside a value, looking through nested variants.
pub fn value_as_str<'v>(value: &'v Value<'_>) -> Option<&'v str> {
    match peel(value) {
        Value::Str(s) => Some(s.as_str()),
        Value::ObjectPath(p) => Some(p.as_str()),
        _ => None,
    }
}

/// Reads a boolean, accepting integer encodings as some daemon builds send them.
pub fn value_as_bool(value: &Value<'_>) -> Option<bool> {
    match peel(value) {
        Value::Bool(b) => Some(*b),
        Value::U8(n) => Some(*n != 0),
        Value::I32(n) => Some(*n != 0),
        Value::U32(n) => Some(*n != 0),
        _ => None,
    }
}

/// Reads an `as` array. Anything else yields an empty vector.
pub fn value_as_string_vec(value: &Value<'_>) -> Vec<String> {
    match peel(value) {
        Value::Array(array) => array
            .iter()
            .filter_map(|item| value_as_str(item).map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Maps the daemon's "no object" path (`/`) to `None`.
pub fn optional_path(path: OwnedObjectPath) -> Option<OwnedObjectPath> {
    match path.as_str() {
        "" | "/" => None,
        _ => Some(path),
    }
}

/// Converts a D-Bus value into JSON for CLI output and serializable summaries.
///
/// Dictionary keys are rendered with [`format_value`] when they are not strings.
pub fn value_to_json(value: &Value<'_>) -> Json {
    match peel(value) {
        Value::U8(n) => Json::from(*n),
        Value::Bool(b) => Json::Bool(*b),
        Value::I16(n) => Json::from(*n),
        Value::U16(n) => Json::from(*n),
        Value::I32(n) => Json::from(*n),
        Value::U32(n) => Json::from(*n),
        Value::I64(n) => Json::from(*n),
        Value::U64(n) => Json::from(*n),
        Value::F64(n) => Number::from_f64(*n).map_or(Json::Null, Json::Number),
        Value::Str(s) => Json::String(s.as_str().to_string()),
        Value::ObjectPath(p) => Json::String(p.as_str().to_string()),
        Value::Signature(s) => Json::String(s.to_string()),
        Value::Array(array) => Json::Array(array.iter().map(value_to_json).collect()),
        Value::Structure(structure) => {
            Json::Array(structure.fields().iter().map(value_to_json).collect())
        }
        Value::Dict(dict) => {
            let mut map = Map::new();
            for (key, entry) in dict.iter() {
                let key = value_as_str(key)
                    .map(str::to_string)
                    .unwrap_or_else(|| format_value(key));
                map.insert(key, value_to_json(entry));
            }
            Json::Object(map)
        }
        _ => Json::Null,
    }
}

/// Renders a D-Bus value as a single human readable line.
///
/// Strings are printed bare; arrays, structures and dictionaries use a
/// compact JSON-like layout.
pub fn format_value(value: &Value<'_>) -> String {
    match peel(value) {
        Value::Str(s) => s.as_str().to_string(),
        Value::ObjectPath(p) => p.as_str().to_string(),
        other => value_to_json(other).to_string(),
    }
}

/// Copies a borrowed `a{sv}` signal payload into owned values.
///
/// Entries that cannot be owned (file descriptors) are skipped.
pub fn owned_dict(dict: &HashMap<&str, Value<'_>>) -> HashMap<String, OwnedValue> {
    dict.iter()
        .filter_map(|(key, value)| value.try_to_owned().ok().map(|v| (key.to_string(), v)))
        .collect()
}

/// Renders every value of a property dictionary with [`format_value`].
pub fn dict_to_strings(dict: &HashMap<String, OwnedValue>) -> HashMap<String, String> {
    dict.iter()
        .map(|(key, value)| (key.clone(), format_value(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_variants_are_peeled() {
        let wrapped = Value::Value(Box::new(Value::from("wpa-psk")));
        assert_eq!(value_as_str(&wrapped), Some("wpa-psk"));
    }

    #[test]
    fn string_arrays_are_collected() {
        let key_mgmt = Value::from(vec!["wpa-psk".to_string(), "wpa-eap".to_string()]);
        assert_eq!(value_as_string_vec(&key_mgmt), vec!["wpa-psk", "wpa-eap"]);

        assert!(value_as_string_vec(&Value::from(7u32)).is_empty());
    }

    #[test]
    fn root_path_means_no_object() {
        let none = OwnedObjectPath::try_from("/").unwrap();
        assert!(optional_path(none).is_none());

        let bss = OwnedObjectPath::try_from("/fi/w1/wpa_supplicant1/Interfaces/3/BSSs/1234").unwrap();
        assert!(optional_path(bss).is_some());
    }

    #[test]
    fn integers_and_booleans_read_as_bool() {
        assert_eq!(value_as_bool(&Value::from(true)), Some(true));
        assert_eq!(value_as_bool(&Value::from(0u32)), Some(false));
        assert_eq!(value_as_bool(&Value::from("yes")), None);
    }

    #[test]
    fn dictionaries_become_json_objects() {
        let mut wpa: HashMap<&str, Value<'_>> = HashMap::new();
        wpa.insert("Group", Value::from("tkip"));
        wpa.insert("KeyMgmt", Value::from(vec!["wpa-psk".to_string()]));
        let value = Value::from(wpa);

        let json = value_to_json(&value);

        assert_eq!(json["Group"], "tkip");
        assert_eq!(json["KeyMgmt"][0], "wpa-psk");
    }

    #[test]
    fn dict_values_render_as_strings() {
        let mut payload: HashMap<&str, Value<'_>> = HashMap::new();
        payload.insert("ssid", Value::from("home"));
        payload.insert("priority", Value::from(5i32));

        let strings = dict_to_strings(&owned_dict(&payload));

        assert_eq!(strings.get("ssid").map(String::as_str), Some("home"));
        assert_eq!(strings.get("priority").map(String::as_str), Some("5"));
    }

    #[test]
    fn format_value_prints_strings_bare() {
        assert_eq!(format_value(&Value::from("nl80211")), "nl80211");
        assert_eq!(format_value(&Value::from(180u32)), "180");
        assert_eq!(format_value(&Value::from(vec![54_000_000u32, 6_000_000])), "[54000000,6000000]");
    }
}
