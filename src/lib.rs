//! Hierarchical, type-coercing configuration access.
//!
//! A [`Config`] is bound to an application namespace and a [`Resolver`].
//! Child scopes extend the lookup path one segment at a time, and typed
//! getters coerce whatever the resolver returns into strings, booleans,
//! integers or floats.
//!
//! ```no_run
//! use dragon_cfg::{Config, EnvResolver};
//!
//! // Reads APP_DATABASE_HOST and APP_DATABASE_PORT.
//! let root = Config::new("app", EnvResolver::new());
//! let mut database = root.child("database");
//! let host = database.may_get_string("host");
//! let port = database.may_get_int("port");
//! database.ensure_no_errors()?;
//!
//! println!("connecting to {host}:{port}");
//! # Ok::<(), dragon_cfg::Error>(())
//! ```

pub mod config;
mod error;

pub use config::{
    Config, ConfigError, ConfigErrors, EnvResolver, FromRaw, LayeredResolver, MapResolver,
    RawValue, ResolveError, Resolver,
};
pub use error::Error;
