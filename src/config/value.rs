/// An untyped scalar as produced by a [`Resolver`](super::Resolver).
///
/// Coercion into a concrete type happens in [`FromRaw`](super::FromRaw);
/// resolvers only pick the variant that best describes what they stored.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    String(String),
    Bool(bool),
    Int(i64),
    F32(f32),
    F64(f64),
}

impl RawValue {
    /// Human-readable name of the variant, used in mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::String(_) => "string",
            RawValue::Bool(_) => "boolean",
            RawValue::Int(_) => "integer",
            RawValue::F32(_) => "32-bit float",
            RawValue::F64(_) => "64-bit float",
        }
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_owned())
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(i64::from(value))
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::F32(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::F64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_pick_matching_variant() {
        assert_eq!(RawValue::from("x"), RawValue::String("x".into()));
        assert_eq!(RawValue::from(true), RawValue::Bool(true));
        assert_eq!(RawValue::from(7_i32), RawValue::Int(7));
        assert_eq!(RawValue::from(1.5_f32), RawValue::F32(1.5));
        assert_eq!(RawValue::from(1.5_f64), RawValue::F64(1.5));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(RawValue::from(65_i64).type_name(), "integer");
        assert_eq!(RawValue::from(false).type_name(), "boolean");
        assert_eq!(RawValue::from(2.0_f32).type_name(), "32-bit float");
    }
}
