//! The fixed attribute set of a diagnostic and typed reads/writes over it.

use std::{fmt, str::FromStr};

use super::{Diagnostic, Origin};
use crate::{AccessError, Value};

/// Attributes readable and writable through
/// [`ResultUnion::get`](crate::ResultUnion::get) and
/// [`ResultUnion::set`](crate::ResultUnion::set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticField {
    /// The message text.
    Message,
    /// The numeric code.
    Code,
    /// The origin's file path.
    File,
    /// The origin's line number.
    Line,
    /// The chained cause (also spelled `previous`).
    Cause,
}

impl DiagnosticField {
    /// Every attribute, in display order.
    pub const ALL: [Self; 5] = [
        Self::Message,
        Self::Code,
        Self::File,
        Self::Line,
        Self::Cause,
    ];

    /// Canonical attribute name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Code => "code",
            Self::File => "file",
            Self::Line => "line",
            Self::Cause => "cause",
        }
    }

    /// Resolve an attribute name, accepting the `previous` alias.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "message" => Some(Self::Message),
            "code" => Some(Self::Code),
            "file" => Some(Self::File),
            "line" => Some(Self::Line),
            "cause" | "previous" => Some(Self::Cause),
            _ => None,
        }
    }

    const fn expected(self) -> &'static str {
        match self {
            Self::Message | Self::File => "string",
            Self::Code => "integer",
            Self::Line => "non-negative 32-bit integer",
            Self::Cause => "diagnostic or null",
        }
    }
}

impl fmt::Display for DiagnosticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiagnosticField {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| AccessError::UnknownField {
            field: s.to_owned(),
        })
    }
}

impl Diagnostic {
    /// Read an attribute as a [`Value`].
    ///
    /// `file` and `line` are [`Value::Null`] without an origin; `cause` is
    /// [`Value::Null`] without a cause.
    #[must_use]
    pub fn field(&self, field: DiagnosticField) -> Value {
        match field {
            DiagnosticField::Message => Value::Str(self.message.clone()),
            DiagnosticField::Code => Value::Int(self.code),
            DiagnosticField::File => self
                .origin
                .as_ref()
                .map_or(Value::Null, |origin| Value::Str(origin.file.clone())),
            DiagnosticField::Line => self
                .origin
                .as_ref()
                .map_or(Value::Null, |origin| Value::Int(i64::from(origin.line))),
            DiagnosticField::Cause => self
                .cause
                .as_ref()
                .map_or(Value::Null, |cause| Value::Diagnostic(cause.clone())),
        }
    }

    /// Overwrite an attribute.
    ///
    /// Writing `file` or `line` on a diagnostic without an origin creates one
    /// with the remaining coordinates zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::TypeMismatch`] when `value` does not fit the
    /// attribute; the diagnostic is left unchanged.
    pub fn set_field(&mut self, field: DiagnosticField, value: Value) -> Result<(), AccessError> {
        let mismatch = |found: &Value| AccessError::TypeMismatch {
            field: field.name(),
            expected: field.expected(),
            found: found.kind(),
        };
        match (field, value) {
            (DiagnosticField::Message, Value::Str(message)) => self.message = message,
            (DiagnosticField::Code, Value::Int(code)) => self.code = code,
            (DiagnosticField::File, Value::Str(file)) => {
                self.origin.get_or_insert_with(Origin::default).file = file;
            }
            (DiagnosticField::Line, Value::Int(raw)) => {
                let line = u32::try_from(raw).map_err(|_| mismatch(&Value::Int(raw)))?;
                self.origin.get_or_insert_with(Origin::default).line = line;
            }
            (DiagnosticField::Cause, Value::Diagnostic(cause)) => self.cause = Some(cause),
            (DiagnosticField::Cause, Value::Null) => self.cause = None,
            (_, other) => return Err(mismatch(&other)),
        }
        Ok(())
    }
}
