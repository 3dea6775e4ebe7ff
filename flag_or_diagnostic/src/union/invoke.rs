//! Method invocation.

use tracing::debug;

use super::{Discriminant, Payload, ResultUnion};
use crate::{DiagnosticMethod, InvocationError, Value};

/// Names a plain `bool` answers to in Rust, through inherent methods or the
/// standard traits it implements.
const BOOL_METHOD_NAMES: &[&str] = &[
    "then",
    "then_some",
    "not",
    "clone",
    "clone_from",
    "eq",
    "ne",
    "cmp",
    "partial_cmp",
    "max",
    "min",
    "clamp",
    "hash",
    "to_string",
    "to_owned",
    "bitand",
    "bitor",
    "bitxor",
];

impl ResultUnion {
    /// Call a method on the payload.
    ///
    /// A diagnostic answers to the methods in [`DiagnosticMethod`]. A flag
    /// answers to none.
    ///
    /// # Errors
    ///
    /// * [`InvocationError::NotFound`] when the payload has no such method.
    /// * [`InvocationError::SpuriousBooleanMethod`] when the union holds a
    ///   flag and `method` names something a plain `bool` would answer to.
    /// * [`InvocationError::Arity`] when a diagnostic method is given the
    ///   wrong number of arguments.
    pub fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, InvocationError> {
        match &self.payload {
            Payload::Diagnostic(diagnostic) => {
                let Some(resolved) = DiagnosticMethod::lookup(method) else {
                    debug!(method, "unknown diagnostic method");
                    return Err(InvocationError::NotFound {
                        method: method.to_owned(),
                        variant: Discriminant::Diagnostic,
                    });
                };
                diagnostic.call(resolved, args)
            }
            Payload::Flag(_) if BOOL_METHOD_NAMES.contains(&method) => {
                debug!(method, "boolean method called on flag");
                Err(InvocationError::SpuriousBooleanMethod {
                    method: method.to_owned(),
                })
            }
            Payload::Flag(_) => Err(InvocationError::NotFound {
                method: method.to_owned(),
                variant: Discriminant::Flag,
            }),
        }
    }
}
