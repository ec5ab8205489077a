//! Path-scoped configuration lookup and scalar coercion.

mod accessor;
mod coerce;
mod env;
mod error;
mod resolver;
mod value;

pub use accessor::Config;
pub use coerce::{FromRaw, FALSY, TRUTHY};
pub use env::EnvResolver;
pub use error::{ConfigError, ConfigErrors, ResolveError};
pub use resolver::{LayeredResolver, MapResolver, Resolver};
pub use value::RawValue;
