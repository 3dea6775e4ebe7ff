//! Methods a diagnostic answers to through
//! [`ResultUnion::invoke`](crate::ResultUnion::invoke).

use std::fmt;

use super::{Diagnostic, DiagnosticField};
use crate::{InvocationError, Value};

/// Recognised diagnostic methods.
///
/// Each accepts both its camelCase and its snake_case spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticMethod {
    /// `getMessage`: the message text.
    GetMessage,
    /// `getCode`: the numeric code.
    GetCode,
    /// `getFile`: the origin's file, or null.
    GetFile,
    /// `getLine`: the origin's line, or null.
    GetLine,
    /// `getCause` (alias `getPrevious`): the chained cause, or null.
    GetCause,
    /// `getTraceAsString`: numbered origins of the whole chain.
    GetTraceAsString,
    /// `toString`: the rendered chain, see [`Diagnostic::describe`].
    ToString,
}

impl DiagnosticMethod {
    /// Canonical (camelCase) method name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetMessage => "getMessage",
            Self::GetCode => "getCode",
            Self::GetFile => "getFile",
            Self::GetLine => "getLine",
            Self::GetCause => "getCause",
            Self::GetTraceAsString => "getTraceAsString",
            Self::ToString => "toString",
        }
    }

    /// Resolve a method name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "getMessage" | "get_message" => Some(Self::GetMessage),
            "getCode" | "get_code" => Some(Self::GetCode),
            "getFile" | "get_file" => Some(Self::GetFile),
            "getLine" | "get_line" => Some(Self::GetLine),
            "getCause" | "get_cause" | "getPrevious" | "get_previous" => Some(Self::GetCause),
            "getTraceAsString" | "get_trace_as_string" => Some(Self::GetTraceAsString),
            "toString" | "to_string" => Some(Self::ToString),
            _ => None,
        }
    }

    /// Number of arguments every diagnostic method takes.
    pub const ARITY: usize = 0;
}

impl fmt::Display for DiagnosticMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Diagnostic {
    /// Call a recognised method.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError::Arity`] when `args` is not empty.
    pub fn call(&self, method: DiagnosticMethod, args: &[Value]) -> Result<Value, InvocationError> {
        if args.len() != DiagnosticMethod::ARITY {
            return Err(InvocationError::Arity {
                method: method.name(),
                expected: DiagnosticMethod::ARITY,
                found: args.len(),
            });
        }
        Ok(match method {
            DiagnosticMethod::GetMessage => self.field(DiagnosticField::Message),
            DiagnosticMethod::GetCode => self.field(DiagnosticField::Code),
            DiagnosticMethod::GetFile => self.field(DiagnosticField::File),
            DiagnosticMethod::GetLine => self.field(DiagnosticField::Line),
            DiagnosticMethod::GetCause => self.field(DiagnosticField::Cause),
            DiagnosticMethod::GetTraceAsString => Value::Str(self.trace_as_string()),
            DiagnosticMethod::ToString => Value::Str(self.describe()),
        })
    }
}
