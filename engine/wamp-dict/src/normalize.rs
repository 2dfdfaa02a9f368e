//! Conversion of map-shaped values into the canonical [`Dict`] form.
//!
//! Decoders produce [`Value::Map`] trees whose keys may be strings, symbols,
//! keywords, or anything else the wire format allows. Normalizing rewrites
//! every map-shaped value, at any depth, into a string-keyed [`Dict`] and
//! leaves all other values as they are. Vectors and tagged values are not
//! descended into.

use crate::value::{Dict, Value};

/// Build a normalized copy of a map-shaped value.
///
/// Returns `None` when `value` is not map-shaped. An empty map yields an
/// empty dict. Keys that are not string-like are dropped. The input is never
/// modified; non-map leaves are cloned into the result.
pub fn normalize(value: &Value) -> Option<Dict> {
    match value.unwrap_annotations() {
        Value::Map(entries) => {
            let mut dict = Dict::new();
            for (key, value) in entries {
                let Some(key) = key_string(key) else {
                    tracing::trace!(key_kind = key.kind(), "dropping entry with non-string key");
                    continue;
                };
                dict.insert(key, normalize_entry(value));
            }
            Some(dict)
        }
        Value::Dict(dict) => Some(
            dict.iter()
                .map(|(key, value)| (key.clone(), normalize_entry(value)))
                .collect(),
        ),
        _ => None,
    }
}

/// The string form of a map key, or `None` when the key is not string-like.
///
/// Strings are taken as-is. Symbols and keywords use their `ns/name` text
/// without the keyword colon. Annotations around the key are ignored.
pub fn key_string(key: &Value) -> Option<String> {
    match key.unwrap_annotations() {
        Value::String(s) => Some(s.clone()),
        Value::Symbol(symbol) => Some(symbol.as_str()),
        Value::Keyword(keyword) => Some(keyword.as_symbol().as_str()),
        _ => None,
    }
}

fn normalize_entry(value: &Value) -> Value {
    match normalize(value) {
        Some(nested) => Value::Dict(nested),
        None => value.clone(),
    }
}

impl Value {
    /// Owned counterpart of [`normalize`]: leaves are moved, not cloned.
    ///
    /// A value that is not map-shaped is handed back unchanged in `Err`.
    pub fn into_dict(self) -> Result<Dict, Value> {
        match self.into_unwrapped() {
            Value::Map(entries) => {
                let mut dict = Dict::new();
                for (key, value) in entries {
                    let Some(key) = key_string(&key) else {
                        tracing::trace!(key_kind = key.kind(), "dropping entry with non-string key");
                        continue;
                    };
                    dict.insert(key, normalize_owned(value));
                }
                Ok(dict)
            }
            Value::Dict(dict) => Ok(dict
                .into_iter()
                .map(|(key, value)| (key, normalize_owned(value)))
                .collect()),
            other => Err(other),
        }
    }
}

fn normalize_owned(value: Value) -> Value {
    if !value.is_map_shaped() {
        return value;
    }
    match value.into_dict() {
        Ok(dict) => Value::Dict(dict),
        Err(value) => value,
    }
}
