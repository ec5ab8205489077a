use std::fmt;
use std::sync::Arc;

use super::{ConfigError, ConfigErrors, FromRaw, Resolver};

/// Typed, path-scoped access to configuration values.
///
/// A `Config` carries a path prefix (starting with the application
/// namespace), a shared [`Resolver`], and the errors its own getters have
/// hit so far. Each getter appends the field name to the prefix, resolves
/// it and coerces the result; failures are both returned and recorded, so
/// callers can either branch on every lookup or read everything first and
/// check once with [`ensure_no_errors`](Self::ensure_no_errors).
///
/// ## Example
///
/// ```
/// use dragon_cfg::{Config, MapResolver};
///
/// let resolver = MapResolver::new()
///     .with(["app", "database", "host"], "localhost")
///     .with(["app", "database", "port"], "5432");
///
/// let root = Config::new("app", resolver);
/// let mut database = root.child("database");
///
/// let host = database.may_get_string("host");
/// let port = database.may_get_int("port");
/// let pool = database.may_get_int("pool_size");
///
/// assert_eq!(host, "localhost");
/// assert_eq!(port, 5432);
/// assert_eq!(pool, 0);
/// assert_eq!(database.errors().len(), 1);
/// assert!(database.ensure_no_errors().is_err());
/// ```
pub struct Config {
    path: Vec<String>,
    resolver: Arc<dyn Resolver>,
    errors: Vec<ConfigError>,
}

impl Config {
    /// Creates a root accessor whose prefix is `[namespace]`.
    pub fn new(namespace: impl Into<String>, resolver: impl Resolver + 'static) -> Self {
        Self::with_shared(namespace, Arc::new(resolver))
    }

    /// Like [`new`](Self::new), reusing a resolver that is already shared.
    pub fn with_shared(namespace: impl Into<String>, resolver: Arc<dyn Resolver>) -> Self {
        Self {
            path: vec![namespace.into()],
            resolver,
            errors: Vec::new(),
        }
    }

    /// Derives a scope one segment deeper.
    ///
    /// The child shares this accessor's resolver but starts with its own,
    /// empty error list. Siblings never see each other's segments.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(segment.into());

        Self {
            path,
            resolver: Arc::clone(&self.resolver),
            errors: Vec::new(),
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn resolver(&self) -> &Arc<dyn Resolver> {
        &self.resolver
    }

    /// Resolves `field` and coerces it to `T`, recording any failure.
    pub fn get<T: FromRaw>(&mut self, field: &str) -> Result<T, ConfigError> {
        let mut path = self.path.clone();
        path.push(field.to_owned());

        let result = self
            .resolver
            .resolve(&path)
            .map_err(ConfigError::from)
            .and_then(|raw| T::from_raw(raw, field));

        if let Err(err) = &result {
            tracing::debug!(path = %path.join("."), error = %err, "config lookup failed");
            self.errors.push(err.clone());
        }

        result
    }

    /// Like [`get`](Self::get), but yields `T::default()` on failure.
    ///
    /// The failure is still recorded.
    pub fn may_get<T: FromRaw + Default>(&mut self, field: &str) -> T {
        self.get(field).unwrap_or_default()
    }

    pub fn get_string(&mut self, field: &str) -> Result<String, ConfigError> {
        self.get(field)
    }

    pub fn get_bool(&mut self, field: &str) -> Result<bool, ConfigError> {
        self.get(field)
    }

    pub fn get_int(&mut self, field: &str) -> Result<i64, ConfigError> {
        self.get(field)
    }

    pub fn get_float(&mut self, field: &str) -> Result<f64, ConfigError> {
        self.get(field)
    }

    pub fn may_get_string(&mut self, field: &str) -> String {
        self.may_get(field)
    }

    pub fn may_get_bool(&mut self, field: &str) -> bool {
        self.may_get(field)
    }

    pub fn may_get_int(&mut self, field: &str) -> i64 {
        self.may_get(field)
    }

    pub fn may_get_float(&mut self, field: &str) -> f64 {
        self.may_get(field)
    }

    /// Errors recorded by this accessor, oldest first.
    ///
    /// Errors of parent or child scopes are not included.
    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns every recorded error as one combined failure.
    pub fn ensure_no_errors(&self) -> Result<(), ConfigErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigErrors::new(self.errors.clone()))
        }
    }

    /// Panics with the combined message of every recorded error.
    ///
    /// Does nothing when no error has been recorded. Getters never call this.
    pub fn panic_if_errors(&self) {
        if let Err(errors) = self.ensure_no_errors() {
            panic!("{errors}");
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("path", &self.path)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
