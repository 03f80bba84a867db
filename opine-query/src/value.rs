//! Renderable parameter values.

use std::fmt;

use chrono::{DateTime, Utc};
use smol_str::SmolStr;

/// A value that can render itself as a display string for use in a filter,
/// sort or stat parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// Boolean value, rendered as `true`/`false`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    Str(SmolStr),
    /// Point in time, rendered as epoch seconds.
    DateTime(DateTime<Utc>),
}

impl ParameterValue {
    /// Render the value into its wire display string (unescaped).
    pub fn render(&self) -> String {
        match self {
            Self::Bool(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Str(v) => v.to_string(),
            Self::DateTime(v) => v.timestamp().to_string(),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for ParameterValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u16> for ParameterValue {
    fn from(v: u16) -> Self {
        Self::Int(v as i64)
    }
}

impl From<u32> for ParameterValue {
    fn from(v: u32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        Self::Str(SmolStr::new(v))
    }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self {
        Self::Str(SmolStr::new(v))
    }
}

impl From<SmolStr> for ParameterValue {
    fn from(v: SmolStr) -> Self {
        Self::Str(v)
    }
}

impl From<DateTime<Utc>> for ParameterValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_conversions() {
        assert_eq!(ParameterValue::from(42i32), ParameterValue::Int(42));
        assert_eq!(ParameterValue::from(10u16), ParameterValue::Int(10));
        assert_eq!(ParameterValue::from(true), ParameterValue::Bool(true));
        assert_eq!(
            ParameterValue::from("hello"),
            ParameterValue::Str(SmolStr::new("hello"))
        );
    }

    #[test]
    fn test_render() {
        assert_eq!(ParameterValue::Bool(false).render(), "false");
        assert_eq!(ParameterValue::Int(-3).render(), "-3");
        assert_eq!(ParameterValue::Str("test1".into()).render(), "test1");
    }

    #[test]
    fn test_render_datetime_as_epoch_seconds() {
        let when = DateTime::parse_from_rfc3339("2018-05-01T18:19:13.000+00:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(ParameterValue::from(when).render(), "1525198753");
    }
}
