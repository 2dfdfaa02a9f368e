//! Strict, path-based reads over canonical dictionaries.
//!
//! Paths are slices of key segments, e.g.
//! `["roles", "callee", "features", "call_timeout"]`. Every function here
//! reports a missing path or a mistyped leaf as a [`DictError`]; the lenient
//! single-key readers live in [`crate::options`].

use std::borrow::Cow;

use crate::error::{DictError, DictResult};
use crate::normalize::normalize;
use crate::value::{Dict, Value};

/// The nested dictionary stored under `key`, or `None` when there is none.
///
/// An absent key and a `Nil` value are both "not present". A canonical child
/// is borrowed as-is; anything else map-shaped is normalized into a fresh
/// dict. `dict` itself is never modified, so the same details can be read
/// from several places at once.
pub fn child<'a>(dict: &'a Dict, key: &str) -> Option<Cow<'a, Dict>> {
    match dict.get(key)? {
        Value::Nil => None,
        Value::Dict(child) => Some(Cow::Borrowed(child)),
        other => {
            tracing::trace!(key, kind = other.kind(), "normalizing child that was not canonical");
            normalize(other).map(Cow::Owned)
        }
    }
}

/// Fetch the raw value at `path`.
///
/// Intermediate segments go through [`child`]; the first one that does not
/// resolve fails with the path walked so far. The last segment is a plain
/// existence check, so a present `Nil` leaf is returned rather than treated
/// as missing.
pub fn lookup<'a, S: AsRef<str>>(dict: &'a Dict, path: &[S]) -> DictResult<Cow<'a, Value>> {
    let Some((last, parents)) = path.split_last() else {
        return Err(DictError::EmptyPath);
    };

    let mut current = Cow::Borrowed(dict);
    for (idx, segment) in parents.iter().enumerate() {
        current = match current {
            Cow::Borrowed(dict) => child(dict, segment.as_ref()),
            Cow::Owned(dict) => {
                child(&dict, segment.as_ref()).map(|found| Cow::Owned(found.into_owned()))
            }
        }
        .ok_or_else(|| DictError::PathNotFound(join_path(&path[..=idx])))?;
    }

    let leaf = match current {
        Cow::Borrowed(dict) => dict.get(last.as_ref()).map(Cow::Borrowed),
        Cow::Owned(mut dict) => dict.remove(last.as_ref()).map(Cow::Owned),
    };
    leaf.ok_or_else(|| DictError::PathNotFound(join_path(path)))
}

/// [`lookup`] with the path given as one dot-separated string.
pub fn lookup_dotted<'a>(dict: &'a Dict, path: &str) -> DictResult<Cow<'a, Value>> {
    let segments: Vec<&str> = path.split('.').collect();
    lookup(dict, &segments)
}

/// The boolean at `path`, e.g. a negotiated feature flag.
pub fn bool_at<S: AsRef<str>>(dict: &Dict, path: &[S]) -> DictResult<bool> {
    let value = lookup(dict, path)?;
    let value = value.unwrap_annotations();
    value
        .as_bool()
        .ok_or_else(|| wrong_type(path, "boolean", value))
}

/// The string at `path`.
pub fn string_at<S: AsRef<str>>(dict: &Dict, path: &[S]) -> DictResult<String> {
    let value = lookup(dict, path)?;
    let value = value.unwrap_annotations();
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| wrong_type(path, "string", value))
}

/// The dictionary at `path`, normalized if it was stored in foreign form.
pub fn dict_at<'a, S: AsRef<str>>(dict: &'a Dict, path: &[S]) -> DictResult<Cow<'a, Dict>> {
    match lookup(dict, path)? {
        Cow::Borrowed(Value::Dict(dict)) => Ok(Cow::Borrowed(dict)),
        Cow::Owned(Value::Dict(dict)) => Ok(Cow::Owned(dict)),
        other => normalize(&other)
            .map(Cow::Owned)
            .ok_or_else(|| wrong_type(path, "dict", &other)),
    }
}

fn wrong_type<S: AsRef<str>>(path: &[S], expected: &'static str, found: &Value) -> DictError {
    DictError::WrongType {
        path: join_path(path),
        expected,
        found: found.kind(),
    }
}

fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| segment.as_ref())
        .collect::<Vec<&str>>()
        .join(".")
}
