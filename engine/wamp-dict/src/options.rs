//! Lenient single-key option readers and the option writer.
//!
//! Unlike the path accessors in [`crate::lookup`], the readers here never
//! fail: a missing key, a `Nil` value, or a value of the wrong kind all come
//! back as the type's zero value.

use crate::value::{Dict, Value};

fn option<'a>(options: &'a Dict, name: &str) -> Option<&'a Value> {
    options
        .get(name)
        .map(Value::unwrap_annotations)
        .filter(|value| !value.is_nil())
}

/// The string option `name`, or `""`.
pub fn string_option(options: &Dict, name: &str) -> String {
    option(options, name)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

/// The integer option `name` as an `i64`, or `0`.
///
/// Any integer width is accepted, and floats are truncated toward zero.
/// Unsigned values above `i64::MAX` wrap.
pub fn int_option(options: &Dict, name: &str) -> i64 {
    match option(options, name) {
        Some(Value::Int(n)) => *n,
        Some(Value::UInt(n)) => *n as i64,
        // `as` truncates toward zero, saturates, and maps NaN to 0.
        Some(Value::Float32(f)) => f.0 as i64,
        Some(Value::Float64(f)) => f.0 as i64,
        _ => 0,
    }
}

/// The boolean option `name`, or `false`.
pub fn bool_option(options: &Dict, name: &str) -> bool {
    option(options, name)
        .and_then(Value::as_bool)
        .unwrap_or_default()
}

/// Set a single option, allocating the dict when there is none yet.
///
/// Takes the dict by value: only a dict still being assembled for an
/// outgoing message can be passed here, never one already shared with
/// readers.
pub fn set_option(dict: Option<Dict>, name: impl Into<String>, value: impl Into<Value>) -> Dict {
    let mut dict = dict.unwrap_or_default();
    dict.insert(name.into(), value.into());
    dict
}
