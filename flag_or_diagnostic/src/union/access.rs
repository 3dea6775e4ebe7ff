//! Field reads and writes.

use tracing::debug;

use super::{Payload, ResultUnion};
use crate::{AccessError, DiagnosticField, Value};

impl ResultUnion {
    /// Read a field.
    ///
    /// A flag has no named fields, so every name (including `""`) reads back
    /// the flag itself. A diagnostic answers for the names in
    /// [`DiagnosticField`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::UnknownField`] when the union holds a
    /// diagnostic and `name` is not one of its attributes.
    pub fn get(&self, name: &str) -> Result<Value, AccessError> {
        match &self.payload {
            Payload::Flag(flag) => Ok(Value::Bool(*flag)),
            Payload::Diagnostic(diagnostic) => {
                let field = name.parse::<DiagnosticField>()?;
                Ok(diagnostic.field(field))
            }
        }
    }

    /// Write a field.
    ///
    /// On a flag, whichever operand is a boolean becomes the new flag, with
    /// `name` checked first. On a diagnostic, `name` must be one of the
    /// attributes in [`DiagnosticField`]; the attribute set never grows.
    ///
    /// # Errors
    ///
    /// * [`AccessError::InvalidAssignment`] when the union holds a flag and
    ///   neither operand is a boolean.
    /// * [`AccessError::UnknownField`] when the union holds a diagnostic and
    ///   `name` is not a string naming one of its attributes.
    /// * [`AccessError::TypeMismatch`] when `value` does not fit the
    ///   attribute.
    ///
    /// The union is unchanged whenever an error is returned.
    pub fn set(&mut self, name: impl Into<Value>, value: impl Into<Value>) -> Result<(), AccessError> {
        let key = name.into();
        let assigned = value.into();
        match &mut self.payload {
            Payload::Flag(flag) => {
                let Some(next) = key.as_bool().or_else(|| assigned.as_bool()) else {
                    debug!(name = %key, value = %assigned, "rejected non-boolean write to flag");
                    return Err(AccessError::InvalidAssignment {
                        name: key.to_string(),
                        value: assigned.to_string(),
                    });
                };
                *flag = next;
                Ok(())
            }
            Payload::Diagnostic(diagnostic) => {
                let field = match &key {
                    Value::Str(text) => text.parse::<DiagnosticField>(),
                    other => Err(AccessError::UnknownField {
                        field: other.to_string(),
                    }),
                }
                .inspect_err(|_| debug!(name = %key, "rejected write to unknown diagnostic field"))?;
                diagnostic.set_field(field, assigned)
            }
        }
    }
}
