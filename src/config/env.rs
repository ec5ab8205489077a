use std::env::VarError;

use super::{RawValue, ResolveError, Resolver};

/// Resolves paths against the process environment.
///
/// Segments are joined with the separator and upper-cased, so
/// `["app", "one", "value"]` reads `APP_ONE_VALUE`. Values are always
/// returned as strings and left to [`Config`](super::Config) to coerce.
#[derive(Debug, Clone)]
pub struct EnvResolver {
    separator: String,
}

impl EnvResolver {
    pub fn new() -> Self {
        Self::with_separator("_")
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "separator must not be empty");
        Self { separator }
    }

    /// The environment variable name looked up for `path`.
    pub fn variable_name(&self, path: &[String]) -> String {
        path.join(&self.separator).to_uppercase()
    }
}

impl Default for EnvResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for EnvResolver {
    fn resolve(&self, path: &[String]) -> Result<RawValue, ResolveError> {
        let name = self.variable_name(path);
        tracing::trace!(variable = %name, "reading environment variable");

        match std::env::var(&name) {
            Ok(value) => Ok(RawValue::String(value)),
            Err(VarError::NotPresent) => Err(ResolveError::not_found("environment variable", name)),
            Err(VarError::NotUnicode(_)) => Err(ResolveError::Backend(format!(
                "environment variable {name} is not valid unicode"
            ))),
        }
    }
}
