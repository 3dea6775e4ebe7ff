//! A single return channel for "succeeded with a flag" and "failed with a
//! diagnostic".
//!
//! [`ResultUnion`] holds exactly one of a boolean flag or a [`Diagnostic`].
//! Callers read and write it through [`ResultUnion::get`],
//! [`ResultUnion::set`] and [`ResultUnion::invoke`], each of which dispatches
//! on the held variant and reports misuse as a typed error instead of
//! panicking.
//!
//! ```
//! use flag_or_diagnostic::{AccessError, Diagnostic, ResultUnion, Value};
//!
//! let mut flag = ResultUnion::flag(false);
//! flag.set(true, "ignored")?;
//! assert_eq!(flag.get("message")?, Value::Bool(true));
//!
//! let mut failure = ResultUnion::diagnostic(Diagnostic::new("bad input"));
//! failure.set("message", "worse input")?;
//! assert_eq!(failure.get("message")?, Value::from("worse input"));
//! assert!(matches!(
//!     failure.set("colour", "red"),
//!     Err(AccessError::UnknownField { .. })
//! ));
//! # Ok::<(), AccessError>(())
//! ```

mod diagnostic;
mod error;
mod policy;
mod result_ext;
mod union;
mod value;

pub use diagnostic::{Diagnostic, DiagnosticField, DiagnosticMethod, Origin};
pub use error::{AccessError, CoercionError, ConstructionError, InvocationError, UnionError};
pub use policy::{AmbiguityPolicy, UnknownPolicy};
pub use result_ext::IntoResultUnion;
pub use union::{Discriminant, ResultUnion};
pub use value::Value;
