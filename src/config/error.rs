use std::fmt;

use thiserror::Error;

/// Failure reported by a [`Resolver`](super::Resolver) for a lookup path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// Nothing is stored under the path. `kind` names what was looked up
    /// (e.g. "environment variable") and `key` is the backend-specific name.
    #[error("{kind} {key} does not exist")]
    NotFound { kind: &'static str, key: String },

    #[error("{0}")]
    Backend(String),
}

impl ResolveError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// An error recorded by a [`Config`](super::Config) getter.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("value is not a {expected} for name {field} (found {found})")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("value {value:?} for name {field} is not a valid {expected}: {reason}")]
    Parse {
        field: String,
        expected: &'static str,
        value: String,
        reason: String,
    },
}

/// Every error an accessor accumulated, combined into one failure.
///
/// Displays as each message on its own line, in the order they were recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigErrors {
    errors: Vec<ConfigError>,
}

impl ConfigErrors {
    pub(crate) fn new(errors: Vec<ConfigError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(joined.trim())
    }
}

impl std::error::Error for ConfigErrors {}
