//! Fallible conversions out of a union.
//!
//! A union holding a diagnostic is never silently read as a boolean, and a
//! union holding a flag can never be raised as an error.

use super::{Payload, ResultUnion};
use crate::{CoercionError, Diagnostic};

impl ResultUnion {
    /// Take the diagnostic out, for returning or raising it as an error.
    ///
    /// # Errors
    ///
    /// Returns [`CoercionError::NotADiagnostic`] when the union holds a flag.
    pub fn into_diagnostic(self) -> Result<Diagnostic, CoercionError> {
        match self.payload {
            Payload::Diagnostic(diagnostic) => Ok(*diagnostic),
            Payload::Flag(_) => Err(CoercionError::NotADiagnostic),
        }
    }
}

impl TryFrom<&ResultUnion> for bool {
    type Error = CoercionError;

    fn try_from(union: &ResultUnion) -> Result<Self, Self::Error> {
        union.as_flag().ok_or(CoercionError::NotAFlag)
    }
}

impl TryFrom<ResultUnion> for bool {
    type Error = CoercionError;

    fn try_from(union: ResultUnion) -> Result<Self, Self::Error> {
        Self::try_from(&union)
    }
}

impl TryFrom<ResultUnion> for Diagnostic {
    type Error = CoercionError;

    fn try_from(union: ResultUnion) -> Result<Self, Self::Error> {
        union.into_diagnostic()
    }
}
