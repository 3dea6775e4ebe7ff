//! Unit tests for error rendering and conversion into diagnostics.

use rstest::rstest;

use super::{AccessError, CoercionError, ConstructionError, InvocationError, UnionError};
use crate::{Diagnostic, Discriminant};

#[rstest]
#[case(
    ConstructionError::Empty.into(),
    "a result union needs either a diagnostic or a flag, got neither"
)]
#[case(
    AccessError::InvalidAssignment { name: "x".to_owned(), value: "y".to_owned() }.into(),
    "cannot assign 'y' to 'x' on a flag: no boolean operand"
)]
#[case(
    InvocationError::NotFound { method: "getMessage".to_owned(), variant: Discriminant::Flag }.into(),
    "'getMessage' is not a method of the flag variant"
)]
#[case(
    CoercionError::NotAFlag.into(),
    "the union holds a diagnostic and cannot be read as a boolean"
)]
fn umbrella_error_is_transparent(#[case] err: UnionError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn type_mismatch_names_both_kinds() {
    let err = AccessError::TypeMismatch {
        field: "code",
        expected: "integer",
        found: "string",
    };
    assert_eq!(
        err.to_string(),
        "diagnostic attribute 'code' expects integer, got string"
    );
}

#[test]
fn arity_reports_counts() {
    let err = InvocationError::Arity {
        method: "getMessage",
        expected: 0,
        found: 2,
    };
    assert_eq!(err.to_string(), "'getMessage' takes 0 argument(s), got 2");
}

#[test]
fn failures_become_single_link_diagnostics() {
    let diagnostic = Diagnostic::from(UnionError::from(ConstructionError::Ambiguous));
    assert_eq!(
        diagnostic.message(),
        "a result union holds a diagnostic or a flag, got both"
    );
    assert!(diagnostic.cause().is_none());
    assert!(diagnostic.origin().is_none());
}
