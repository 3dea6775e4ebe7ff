//! Conversions that let union failures travel inside a union.
//!
//! A caller that fails while inspecting one union can hand the failure on as
//! the diagnostic payload of the next.

use super::{AccessError, CoercionError, ConstructionError, InvocationError, UnionError};
use crate::Diagnostic;

impl From<ConstructionError> for Diagnostic {
    fn from(e: ConstructionError) -> Self {
        Self::from_error(&e)
    }
}

impl From<AccessError> for Diagnostic {
    fn from(e: AccessError) -> Self {
        Self::from_error(&e)
    }
}

impl From<InvocationError> for Diagnostic {
    fn from(e: InvocationError) -> Self {
        Self::from_error(&e)
    }
}

impl From<CoercionError> for Diagnostic {
    fn from(e: CoercionError) -> Self {
        Self::from_error(&e)
    }
}

impl From<UnionError> for Diagnostic {
    /// Transparent variants collapse to the wrapped error's message.
    fn from(e: UnionError) -> Self {
        Self::from_error(&e)
    }
}
