//! Coercion of raw resolver values into typed configuration values.
//!
//! Each target type owns one row of the decision table. A string is always
//! parsed; a matching variant passes through; anything else is a mismatch.

use super::{ConfigError, RawValue};

/// Strings accepted as `true`, compared ASCII case-insensitively.
pub const TRUTHY: &[&str] = &["yes", "1", "true", "y"];

/// Strings accepted as `false`, compared ASCII case-insensitively.
pub const FALSY: &[&str] = &["no", "0", "false", "n"];

/// A scalar type that can be coerced out of a [`RawValue`].
pub trait FromRaw: Sized {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Converts `raw`, naming `field` in any error.
    fn from_raw(raw: RawValue, field: &str) -> Result<Self, ConfigError>;
}

fn mismatch<T: FromRaw>(raw: &RawValue, field: &str) -> ConfigError {
    ConfigError::TypeMismatch {
        field: field.to_owned(),
        expected: T::TYPE_NAME,
        found: raw.type_name(),
    }
}

fn parse_error<T: FromRaw>(value: String, field: &str, reason: String) -> ConfigError {
    ConfigError::Parse {
        field: field.to_owned(),
        expected: T::TYPE_NAME,
        value,
        reason,
    }
}

/// Whether `s` names infinity outright rather than overflowing to it.
fn spells_infinity(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

impl FromRaw for String {
    const TYPE_NAME: &'static str = "string";

    fn from_raw(raw: RawValue, field: &str) -> Result<Self, ConfigError> {
        match raw {
            RawValue::String(s) => Ok(s),
            other => Err(mismatch::<Self>(&other, field)),
        }
    }
}

impl FromRaw for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_raw(raw: RawValue, field: &str) -> Result<Self, ConfigError> {
        match raw {
            RawValue::String(s) => {
                if TRUTHY.iter().any(|t| s.eq_ignore_ascii_case(t)) {
                    Ok(true)
                } else if FALSY.iter().any(|f| s.eq_ignore_ascii_case(f)) {
                    Ok(false)
                } else {
                    let reason = format!(
                        "expected one of {} or {}",
                        TRUTHY.join(", "),
                        FALSY.join(", ")
                    );
                    Err(parse_error::<Self>(s, field, reason))
                }
            }
            RawValue::Bool(b) => Ok(b),
            other => Err(mismatch::<Self>(&other, field)),
        }
    }
}

impl FromRaw for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_raw(raw: RawValue, field: &str) -> Result<Self, ConfigError> {
        match raw {
            RawValue::String(s) => match s.parse::<i64>() {
                Ok(i) => Ok(i),
                Err(e) => Err(parse_error::<Self>(s, field, e.to_string())),
            },
            RawValue::Int(i) => Ok(i),
            other => Err(mismatch::<Self>(&other, field)),
        }
    }
}

impl FromRaw for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_raw(raw: RawValue, field: &str) -> Result<Self, ConfigError> {
        match raw {
            RawValue::String(s) => match s.parse::<f64>() {
                Ok(f) if f.is_infinite() && !spells_infinity(&s) => {
                    Err(parse_error::<Self>(s, field, "value out of range".into()))
                }
                Ok(f) => Ok(f),
                Err(e) => Err(parse_error::<Self>(s, field, e.to_string())),
            },
            RawValue::F64(f) => Ok(f),
            RawValue::F32(f) => Ok(f64::from(f)),
            RawValue::Int(i) => Ok(i as f64),
            other => Err(mismatch::<Self>(&other, field)),
        }
    }
}
