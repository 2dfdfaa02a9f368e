use serde_json::{Map, Number, Value as JsonValue};

use crate::normalize::key_string;
use crate::value::{Dict, Value};

/// JSON-decoded messages arrive as foreign maps, exactly like any other
/// decoder output, and still need [`normalize`](crate::normalize::normalize).
impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Nil,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => number_to_value(&n),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Vector(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (Value::String(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else if let Some(u) = n.as_u64() {
        Value::UInt(u)
    } else {
        n.as_f64().map_or(Value::Nil, Value::from)
    }
}

/// Render a value tree as JSON for an outgoing message.
///
/// Map keys that are not string-like are dropped. Non-finite floats become
/// `null`. Bytes are written as an array of numbers, identifiers as their
/// text, and tagged or annotated values as the value they wrap.
pub fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Nil => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(n) => JsonValue::from(*n),
        Value::UInt(n) => JsonValue::from(*n),
        Value::Float32(f) => float_to_json(f64::from(f.0)),
        Value::Float64(f) => float_to_json(f.0),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Bytes(bytes) => JsonValue::Array(bytes.iter().map(|b| JsonValue::from(*b)).collect()),
        Value::Symbol(symbol) => JsonValue::String(symbol.as_str()),
        Value::Keyword(keyword) => JsonValue::String(keyword.as_symbol().as_str()),
        Value::Vector(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        Value::Map(entries) => JsonValue::Object(
            entries
                .iter()
                .filter_map(|(key, value)| key_string(key).map(|key| (key, to_json(value))))
                .collect(),
        ),
        Value::Dict(dict) => JsonValue::Object(dict_to_json(dict)),
        Value::Tagged(tagged) => to_json(&tagged.value),
        Value::Annotated(annotation) => to_json(annotation.inner()),
    }
}

/// Render a canonical dict as a JSON object.
pub fn dict_to_json(dict: &Dict) -> Map<String, JsonValue> {
    dict.iter()
        .map(|(key, value)| (key.clone(), to_json(value)))
        .collect()
}

fn float_to_json(f: f64) -> JsonValue {
    Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
}
