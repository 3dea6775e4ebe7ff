//! The diagnostic payload: an owned, cloneable error description.
//!
//! A [`Diagnostic`] carries a message, a numeric code, an optional chained
//! cause and an optional [`Origin`] naming the source location where it was
//! captured. It implements [`std::error::Error`], so it can be returned,
//! boxed and walked like any other error.
//!
//! # Examples
//!
//! ```
//! use flag_or_diagnostic::Diagnostic;
//!
//! let root = Diagnostic::new("disk full");
//! let top = Diagnostic::new("could not save").with_code(28).with_cause(root);
//! assert_eq!(top.chain().count(), 2);
//! assert_eq!(top.describe(), "could not save\ncaused by: disk full");
//! ```

mod field;
mod method;

use std::{error::Error, fmt, panic::Location};

use serde::{Deserialize, Serialize};

pub use field::DiagnosticField;
pub use method::DiagnosticMethod;

/// Source location recorded for a diagnostic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Origin {
    /// Source file path as reported by the compiler.
    pub file: String,
    /// 1-based line number, `0` when unknown.
    pub line: u32,
    /// 1-based column number, `0` when unknown.
    pub column: u32,
}

impl Origin {
    /// Build an origin from explicit coordinates.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// The location of the (outermost `#[track_caller]`) caller.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&Location<'_>> for Origin {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// An error description with an optional cause chain and capture origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    message: String,
    #[serde(default)]
    code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<Box<Diagnostic>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    origin: Option<Origin>,
}

impl Diagnostic {
    /// Create a diagnostic with code `0`, no cause and no origin.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 0,
            cause: None,
            origin: None,
        }
    }

    /// Create a diagnostic whose origin is the caller's location.
    #[must_use]
    #[track_caller]
    pub fn capture(message: impl Into<String>) -> Self {
        Self::new(message).with_origin(Origin::caller())
    }

    /// Convert any error, and its `source()` chain, into a diagnostic chain.
    ///
    /// Each link keeps the `Display` text of the corresponding error.
    #[must_use]
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        Self {
            message: err.to_string(),
            code: 0,
            cause: err.source().map(|source| Box::new(Self::from_error(source))),
            origin: None,
        }
    }

    /// Replace the numeric code.
    #[must_use]
    pub const fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Replace the cause.
    #[must_use]
    pub fn with_cause(mut self, cause: Self) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Replace the origin.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Record the caller's location unless an origin is already present.
    ///
    /// Returns `true` when an origin was captured.
    #[track_caller]
    pub fn ensure_origin(&mut self) -> bool {
        if self.origin.is_some() {
            return false;
        }
        self.origin = Some(Origin::caller());
        true
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Numeric code, `0` unless set.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Chained cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// Capture origin, if any.
    #[must_use]
    pub const fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    /// Iterate over this diagnostic followed by every cause, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |link| Self::cause(link))
    }

    /// Render the whole chain, one link per line.
    ///
    /// Links with an origin are suffixed with ` (at file:line:column)`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.chain()
            .map(|link| match link.origin() {
                Some(origin) => format!("{} (at {origin})", link.message),
                None => link.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("\ncaused by: ")
    }

    /// List the origins of the chain as numbered frames.
    ///
    /// Links captured without an origin render as `[unknown]`.
    #[must_use]
    pub fn trace_as_string(&self) -> String {
        self.chain()
            .enumerate()
            .map(|(depth, link)| match link.origin() {
                Some(origin) => format!("#{depth} {origin}"),
                None => format!("#{depth} [unknown]"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Diagnostic {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl From<&str> for Diagnostic {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Diagnostic {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Box<dyn Error + Send + Sync>> for Diagnostic {
    fn from(err: Box<dyn Error + Send + Sync>) -> Self {
        Self::from_error(err.as_ref())
    }
}
