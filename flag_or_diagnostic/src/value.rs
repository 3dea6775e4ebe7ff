//! Dynamic values exchanged by `get`, `set` and `invoke`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Diagnostic;

/// A value read from, or written to, a [`ResultUnion`](crate::ResultUnion).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent attribute, such as a missing cause.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// Text.
    Str(String),
    /// A nested diagnostic.
    Diagnostic(Box<Diagnostic>),
}

impl Value {
    /// Short name of the value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Str(_) => "string",
            Self::Diagnostic(_) => "diagnostic",
        }
    }

    /// The boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The integer, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(int) => Some(*int),
            _ => None,
        }
    }

    /// The text, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The diagnostic, if this is one.
    #[must_use]
    pub fn as_diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Diagnostic(diagnostic) => Some(&**diagnostic),
            _ => None,
        }
    }

    /// Whether this is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Int(int) => write!(f, "{int}"),
            Self::Str(text) => f.write_str(text),
            Self::Diagnostic(diagnostic) => write!(f, "{diagnostic}"),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Self::Int(int)
    }
}

impl From<i32> for Value {
    fn from(int: i32) -> Self {
        Self::Int(i64::from(int))
    }
}

impl From<u32> for Value {
    fn from(int: u32) -> Self {
        Self::Int(i64::from(int))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<Diagnostic> for Value {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::Diagnostic(Box::new(diagnostic))
    }
}

impl From<Option<Diagnostic>> for Value {
    fn from(diagnostic: Option<Diagnostic>) -> Self {
        diagnostic.map_or(Self::Null, Self::from)
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface serialisation failures"
)]
mod tests {
    use super::Value;
    use crate::Diagnostic;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::from(true), "boolean")]
    #[case(Value::from(7), "integer")]
    #[case(Value::from("text"), "string")]
    #[case(Value::from(Diagnostic::new("boom")), "diagnostic")]
    fn reports_kind(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.kind(), expected);
    }

    #[test]
    fn missing_diagnostic_becomes_null() {
        assert!(Value::from(None::<Diagnostic>).is_null());
    }

    #[test]
    fn diagnostic_displays_its_message() {
        let value = Value::from(Diagnostic::new("boom").with_code(3));
        assert_eq!(value.to_string(), "boom");
    }

    #[test]
    fn untagged_serialisation_is_plain_json() {
        let encoded = serde_json::to_string(&Value::from(false)).expect("bool serialises");
        assert_eq!(encoded, "false");
        let decoded: Value = serde_json::from_str("\"hi\"").expect("string deserialises");
        assert_eq!(decoded, Value::from("hi"));
    }
}
