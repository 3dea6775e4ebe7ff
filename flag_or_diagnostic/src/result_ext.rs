//! Extension for folding a `Result<bool, E>` into a [`ResultUnion`].
//!
//! This removes the `match` that would otherwise sit at every boundary
//! between code returning `Result<bool, E>` and callers expecting a union.
//!
//! # Examples
//!
//! ```
//! use flag_or_diagnostic::{Diagnostic, Discriminant, IntoResultUnion};
//!
//! fn probe(ready: bool) -> Result<bool, Diagnostic> {
//!     if ready { Ok(true) } else { Err(Diagnostic::new("not ready")) }
//! }
//!
//! assert_eq!(probe(true).into_union().as_flag(), Some(true));
//! let failed = probe(false).into_union();
//! assert_eq!(failed.discriminant(), Discriminant::Diagnostic);
//! assert!(failed.as_diagnostic().and_then(|d| d.origin()).is_some());
//! ```

use crate::{Diagnostic, ResultUnion};

/// Converts a `Result<bool, E>` into a [`ResultUnion`].
pub trait IntoResultUnion {
    /// `Ok(flag)` becomes a flag union and `Err(e)` a diagnostic union.
    ///
    /// Diagnostics without an origin record the caller's location.
    #[must_use]
    fn into_union(self) -> ResultUnion;
}

impl<E> IntoResultUnion for Result<bool, E>
where
    E: Into<Diagnostic>,
{
    #[track_caller]
    fn into_union(self) -> ResultUnion {
        match self {
            Ok(flag) => ResultUnion::flag(flag),
            Err(err) => ResultUnion::diagnostic(err.into()),
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface a missing diagnostic payload"
)]
mod tests {
    use super::IntoResultUnion;
    use crate::{AccessError, Diagnostic, Discriminant, Value};
    use std::error::Error;

    #[test]
    fn ok_becomes_flag() {
        let union = Ok::<bool, Diagnostic>(false).into_union();
        assert_eq!(union.discriminant(), Discriminant::Flag);
        assert_eq!(union.as_flag(), Some(false));
    }

    #[test]
    fn union_failures_convert_into_diagnostics() {
        let err = AccessError::UnknownField {
            field: "colour".to_owned(),
        };
        let union = Err::<bool, _>(err).into_union();
        assert_eq!(
            union.get("message"),
            Ok(Value::from("'colour' is not a diagnostic attribute"))
        );
    }

    #[derive(Debug, thiserror::Error)]
    #[error("could not flush")]
    struct FlushFailed(#[source] std::io::Error);

    #[test]
    fn boxed_errors_keep_their_source_chain() {
        let boxed: Box<dyn Error + Send + Sync> =
            Box::new(FlushFailed(std::io::Error::other("socket closed")));
        let union = Err::<bool, _>(boxed).into_union();
        let messages: Vec<_> = union
            .as_diagnostic()
            .expect("error side becomes a diagnostic")
            .chain()
            .map(Diagnostic::message)
            .collect();
        assert_eq!(messages, ["could not flush", "socket closed"]);
    }

    #[test]
    fn origin_is_this_file() {
        let union = Err::<bool, _>(Diagnostic::new("late")).into_union();
        let file = union.get("file");
        assert_eq!(file, Ok(Value::from(file!())));
    }
}
