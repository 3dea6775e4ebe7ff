//! Error enums for construction, field access, method invocation and
//! coercion.

use thiserror::Error;

use crate::Discriminant;

/// Failures raised while building a [`ResultUnion`](crate::ResultUnion).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstructionError {
    /// Neither a diagnostic nor a flag was supplied.
    #[error("a result union needs either a diagnostic or a flag, got neither")]
    Empty,

    /// Both a diagnostic and a flag were supplied and the active policy
    /// refuses to pick one.
    #[error("a result union holds a diagnostic or a flag, got both")]
    Ambiguous,
}

/// Failures raised by `get` and `set`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The diagnostic has no attribute with this name.
    #[error("'{field}' is not a diagnostic attribute")]
    UnknownField {
        /// Requested attribute name, rendered as text.
        field: String,
    },

    /// A flag write where neither the name nor the value is a boolean.
    #[error("cannot assign '{value}' to '{name}' on a flag: no boolean operand")]
    InvalidAssignment {
        /// Name operand of the rejected write.
        name: String,
        /// Value operand of the rejected write.
        value: String,
    },

    /// The written value does not fit the attribute.
    #[error("diagnostic attribute '{field}' expects {expected}, got {found}")]
    TypeMismatch {
        /// Attribute being written.
        field: &'static str,
        /// Kind of value the attribute accepts.
        expected: &'static str,
        /// Kind of value that was supplied.
        found: &'static str,
    },
}

/// Failures raised by `invoke`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvocationError {
    /// No such method on the held variant.
    #[error("'{method}' is not a method of the {variant} variant")]
    NotFound {
        /// Requested method name.
        method: String,
        /// Variant the union held when the call was made.
        variant: Discriminant,
    },

    /// The name matches something a plain `bool` answers to, but a flag
    /// exposes no methods through the union.
    #[error("'{method}' looks like a boolean method, but flags expose no methods")]
    SpuriousBooleanMethod {
        /// Requested method name.
        method: String,
    },

    /// The method exists but was given the wrong number of arguments.
    #[error("'{method}' takes {expected} argument(s), got {found}")]
    Arity {
        /// Canonical method name.
        method: &'static str,
        /// Number of arguments the method accepts.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },
}

/// Failures raised when converting a union into one of its payload types.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoercionError {
    /// A boolean was requested from a union holding a diagnostic.
    #[error("the union holds a diagnostic and cannot be read as a boolean")]
    NotAFlag,

    /// A diagnostic was requested from a union holding a flag.
    #[error("the union holds a flag and cannot be raised as a diagnostic")]
    NotADiagnostic,
}

/// Any failure produced by this crate.
///
/// Useful when one function chains several union operations with `?`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnionError {
    /// See [`ConstructionError`].
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// See [`AccessError`].
    #[error(transparent)]
    Access(#[from] AccessError),

    /// See [`InvocationError`].
    #[error(transparent)]
    Invocation(#[from] InvocationError),

    /// See [`CoercionError`].
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}
