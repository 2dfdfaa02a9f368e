use thiserror::Error;

/// Result alias used across the crate.
pub type DictResult<T> = Result<T, DictError>;

/// Failures surfaced by the strict, path-based accessors.
///
/// A value that is not map-shaped is not an error:
/// [`normalize`](crate::normalize::normalize) and
/// [`child`](crate::lookup::child) report it with `None`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DictError {
    #[error("cannot find: {0}")]
    PathNotFound(String),
    #[error("{path} is not a {expected} type (found {found})")]
    WrongType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("path must contain at least one segment")]
    EmptyPath,
}

impl DictError {
    /// The dotted path this error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            DictError::PathNotFound(path) | DictError::WrongType { path, .. } => Some(path),
            DictError::EmptyPath => None,
        }
    }
}
