//! [`ResultUnion`]: one handle holding either a flag or a diagnostic.
//!
//! The variant is chosen at construction and never changes afterwards.
//! [`ResultUnion::set`] may rewrite the payload, but only within the variant
//! the union already holds.

mod access;
mod coerce;
mod invoke;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AmbiguityPolicy, ConstructionError, Diagnostic};

/// Which payload a [`ResultUnion`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discriminant {
    /// A boolean flag.
    Flag,
    /// A diagnostic.
    Diagnostic,
}

impl fmt::Display for Discriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flag => "flag",
            Self::Diagnostic => "diagnostic",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
enum Payload {
    Flag(bool),
    Diagnostic(Box<Diagnostic>),
}

/// Either a boolean flag or a [`Diagnostic`], behind one handle.
///
/// The union deliberately implements neither `Display` nor
/// [`std::error::Error`]: branch on [`ResultUnion::discriminant`], or use the
/// fallible conversions into `bool` and [`Diagnostic`], before treating it as
/// either.
///
/// # Examples
///
/// ```
/// use flag_or_diagnostic::{Diagnostic, Discriminant, ResultUnion, Value};
///
/// let ok = ResultUnion::new(None, Some(true))?;
/// assert_eq!(ok.get("anything")?, Value::Bool(true));
///
/// let failed = ResultUnion::new(Some(Diagnostic::new("timed out")), None)?;
/// assert_eq!(failed.discriminant(), Discriminant::Diagnostic);
/// assert_eq!(failed.invoke("getMessage", &[])?, Value::from("timed out"));
/// # Ok::<(), flag_or_diagnostic::UnionError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultUnion {
    payload: Payload,
}

impl ResultUnion {
    /// Build a union from whichever payload is supplied.
    ///
    /// A diagnostic without an origin records the caller's location.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::Empty`] when both arguments are `None`
    /// and [`ConstructionError::Ambiguous`] when both are `Some`.
    #[track_caller]
    pub fn new(diagnostic: Option<Diagnostic>, flag: Option<bool>) -> Result<Self, ConstructionError> {
        Self::with_policy(diagnostic, flag, AmbiguityPolicy::default())
    }

    /// Build a union, resolving a simultaneous diagnostic and flag with
    /// `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::Empty`] when both arguments are `None`,
    /// and [`ConstructionError::Ambiguous`] when both are `Some` under
    /// [`AmbiguityPolicy::Reject`].
    #[track_caller]
    pub fn with_policy(
        diagnostic: Option<Diagnostic>,
        flag: Option<bool>,
        policy: AmbiguityPolicy,
    ) -> Result<Self, ConstructionError> {
        match (diagnostic, flag, policy) {
            (None, None, _) => {
                debug!("refused to build a result union without a payload");
                Err(ConstructionError::Empty)
            }
            (Some(_), Some(_), AmbiguityPolicy::Reject) => {
                debug!(%policy, "refused to build a result union with two payloads");
                Err(ConstructionError::Ambiguous)
            }
            (Some(discarded), Some(kept), AmbiguityPolicy::PreferFlag) => {
                debug!(%policy, %discarded, "kept flag over diagnostic");
                Ok(Self::flag(kept))
            }
            (Some(kept), Some(discarded), _) => {
                debug!(%policy, discarded, "kept diagnostic over flag");
                Ok(Self::diagnostic(kept))
            }
            (Some(kept), None, _) => Ok(Self::diagnostic(kept)),
            (None, Some(kept), _) => Ok(Self::flag(kept)),
        }
    }

    /// Build a flag union.
    #[must_use]
    pub fn flag(flag: bool) -> Self {
        debug!(variant = %Discriminant::Flag, flag, "built result union");
        Self {
            payload: Payload::Flag(flag),
        }
    }

    /// Build a diagnostic union, recording the caller's location when the
    /// diagnostic has no origin yet.
    #[must_use]
    #[track_caller]
    pub fn diagnostic(mut diagnostic: Diagnostic) -> Self {
        let captured = diagnostic.ensure_origin();
        debug!(
            variant = %Discriminant::Diagnostic,
            diagnostic = %diagnostic,
            captured,
            "built result union"
        );
        Self {
            payload: Payload::Diagnostic(Box::new(diagnostic)),
        }
    }

    /// Which payload the union holds.
    #[must_use]
    pub const fn discriminant(&self) -> Discriminant {
        match self.payload {
            Payload::Flag(_) => Discriminant::Flag,
            Payload::Diagnostic(_) => Discriminant::Diagnostic,
        }
    }

    /// Whether the union holds a flag.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self.payload, Payload::Flag(_))
    }

    /// Whether the union holds a diagnostic.
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(self.payload, Payload::Diagnostic(_))
    }

    /// The flag, if the union holds one.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self.payload {
            Payload::Flag(flag) => Some(flag),
            Payload::Diagnostic(_) => None,
        }
    }

    /// The diagnostic, if the union holds one.
    #[must_use]
    pub fn as_diagnostic(&self) -> Option<&Diagnostic> {
        match &self.payload {
            Payload::Flag(_) => None,
            Payload::Diagnostic(diagnostic) => Some(&**diagnostic),
        }
    }

    /// Split into a standard [`Result`], the flag on the `Ok` side.
    ///
    /// # Errors
    ///
    /// Returns the diagnostic when the union holds one.
    pub fn into_result(self) -> Result<bool, Diagnostic> {
        match self.payload {
            Payload::Flag(flag) => Ok(flag),
            Payload::Diagnostic(diagnostic) => Err(*diagnostic),
        }
    }
}

impl From<bool> for ResultUnion {
    fn from(flag: bool) -> Self {
        Self::flag(flag)
    }
}

impl From<Diagnostic> for ResultUnion {
    /// Origin capture records this call site when invoked as
    /// `ResultUnion::from`.
    #[track_caller]
    fn from(diagnostic: Diagnostic) -> Self {
        Self::diagnostic(diagnostic)
    }
}

impl From<ResultUnion> for Result<bool, Diagnostic> {
    fn from(union: ResultUnion) -> Self {
        union.into_result()
    }
}

#[cfg(test)]
mod tests;
