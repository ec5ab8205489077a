use std::collections::HashMap;
use std::sync::Arc;

use super::{RawValue, ResolveError};

/// Maps a full lookup path to a raw value.
///
/// Implementations must be repeatable functions of the path: no coercion,
/// no error accumulation and no caching. [`Config`](super::Config) handles
/// all of that.
///
/// Any `Fn(&[String]) -> Result<RawValue, ResolveError>` closure is a resolver.
pub trait Resolver: Send + Sync {
    fn resolve(&self, path: &[String]) -> Result<RawValue, ResolveError>;
}

impl<F> Resolver for F
where
    F: Fn(&[String]) -> Result<RawValue, ResolveError> + Send + Sync,
{
    fn resolve(&self, path: &[String]) -> Result<RawValue, ResolveError> {
        self(path)
    }
}

/// An in-memory resolver keyed by exact paths.
///
/// Useful as a test double and for programmatic defaults underneath a
/// [`LayeredResolver`].
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    values: HashMap<Vec<String>, RawValue>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `path`, replacing any previous value.
    pub fn with<I, S>(mut self, path: I, value: impl Into<RawValue>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(path, value);
        self
    }

    pub fn insert<I, S>(&mut self, path: I, value: impl Into<RawValue>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = path.into_iter().map(Into::into).collect();
        self.values.insert(key, value.into());
    }
}

impl Resolver for MapResolver {
    fn resolve(&self, path: &[String]) -> Result<RawValue, ResolveError> {
        self.values
            .get(path)
            .cloned()
            .ok_or_else(|| ResolveError::not_found("config key", path.join(".")))
    }
}

/// Combines resolvers in registration order.
///
/// Later layers override earlier ones. A layer that reports
/// [`ResolveError::NotFound`] falls through to the layer registered before
/// it; any other failure ends the lookup.
#[derive(Clone, Default)]
#[must_use = "layers do nothing until the resolver is handed to a Config"]
pub struct LayeredResolver {
    layers: Vec<Arc<dyn Resolver>>,
}

impl LayeredResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer that overrides every layer added so far.
    pub fn with_layer(mut self, resolver: impl Resolver + 'static) -> Self {
        self.layers.push(Arc::new(resolver));
        self
    }

    pub fn with_shared_layer(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.layers.push(resolver);
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl std::fmt::Debug for LayeredResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredResolver")
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl Resolver for LayeredResolver {
    fn resolve(&self, path: &[String]) -> Result<RawValue, ResolveError> {
        let mut last_miss = None;

        for layer in self.layers.iter().rev() {
            match layer.resolve(path) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_not_found() => last_miss = Some(err),
                Err(err) => return Err(err),
            }
        }

        Err(last_miss.unwrap_or_else(|| ResolveError::not_found("config key", path.join("."))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_closure_is_a_resolver() {
        let resolver = |p: &[String]| -> Result<RawValue, ResolveError> {
            Ok(p.len().to_string().into())
        };
        assert_eq!(
            resolver.resolve(&path(&["a", "b"])).unwrap(),
            RawValue::String("2".into())
        );
    }

    #[test]
    fn test_map_resolver_exact_path() {
        let resolver = MapResolver::new().with(["app", "db", "port"], 5432_i64);

        assert_eq!(
            resolver.resolve(&path(&["app", "db", "port"])).unwrap(),
            RawValue::Int(5432)
        );

        let err = resolver.resolve(&path(&["app", "db"])).unwrap_err();
        assert_eq!(err, ResolveError::not_found("config key", "app.db"));
    }

    #[test]
    fn test_map_resolver_insert_replaces() {
        let mut resolver = MapResolver::new();
        resolver.insert(["app", "name"], "first");
        resolver.insert(["app", "name"], "second");

        assert_eq!(
            resolver.resolve(&path(&["app", "name"])).unwrap(),
            RawValue::String("second".into())
        );
    }

    #[test]
    fn test_later_layer_wins() {
        let resolver = LayeredResolver::new()
            .with_layer(MapResolver::new().with(["app", "port"], 80_i64))
            .with_layer(MapResolver::new().with(["app", "port"], 8080_i64));

        assert_eq!(resolver.len(), 2);
        assert_eq!(
            resolver.resolve(&path(&["app", "port"])).unwrap(),
            RawValue::Int(8080)
        );
    }

    #[test]
    fn test_missing_falls_through() {
        let resolver = LayeredResolver::new()
            .with_layer(MapResolver::new().with(["app", "host"], "localhost"))
            .with_layer(MapResolver::new().with(["app", "port"], 8080_i64));

        assert_eq!(
            resolver.resolve(&path(&["app", "host"])).unwrap(),
            RawValue::String("localhost".into())
        );
    }

    #[test]
    fn test_backend_error_stops_lookup() {
        let failing = |_: &[String]| -> Result<RawValue, ResolveError> {
            Err(ResolveError::Backend("unreachable".into()))
        };
        let resolver = LayeredResolver::new()
            .with_layer(MapResolver::new().with(["app", "host"], "localhost"))
            .with_layer(failing);

        assert_eq!(
            resolver.resolve(&path(&["app", "host"])).unwrap_err(),
            ResolveError::Backend("unreachable".into())
        );
    }

    #[test]
    fn test_all_layers_missing() {
        let empty = LayeredResolver::new();
        assert!(empty.is_empty());
        assert!(empty.resolve(&path(&["app", "x"])).unwrap_err().is_not_found());

        let resolver = LayeredResolver::new().with_layer(MapResolver::new());
        assert_eq!(
            resolver.resolve(&path(&["app", "x"])).unwrap_err(),
            ResolveError::not_found("config key", "app.x")
        );
    }
}
