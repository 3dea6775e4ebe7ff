//! Unit tests for construction, dispatch and coercion of `ResultUnion`.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface serialisation failures"
)]

use rstest::{fixture, rstest};

use super::{Discriminant, ResultUnion};
use crate::{
    AccessError, AmbiguityPolicy, CoercionError, ConstructionError, Diagnostic, InvocationError,
    Origin, Value,
};

#[fixture]
fn failure() -> ResultUnion {
    ResultUnion::diagnostic(Diagnostic::new("disk full").with_code(28))
}

#[test]
fn empty_construction_fails() {
    assert_eq!(ResultUnion::new(None, None), Err(ConstructionError::Empty));
}

#[test]
fn both_payloads_are_rejected_by_default() {
    let outcome = ResultUnion::new(Some(Diagnostic::new("x")), Some(true));
    assert_eq!(outcome, Err(ConstructionError::Ambiguous));
}

#[rstest]
#[case(AmbiguityPolicy::PreferDiagnostic, Discriminant::Diagnostic)]
#[case(AmbiguityPolicy::PreferFlag, Discriminant::Flag)]
fn policy_resolves_both_payloads(
    #[case] policy: AmbiguityPolicy,
    #[case] expected: Discriminant,
) {
    let outcome = ResultUnion::with_policy(Some(Diagnostic::new("x")), Some(true), policy)
        .map(|union| union.discriminant());
    assert_eq!(outcome, Ok(expected));
}

#[test]
fn construction_captures_origin() {
    let line = line!() + 1;
    let union = ResultUnion::new(Some(Diagnostic::new("late")), None);
    let origin = union
        .ok()
        .and_then(|u| u.as_diagnostic().and_then(Diagnostic::origin).cloned());
    assert_eq!(
        origin.map(|o| (o.file, o.line)),
        Some((file!().to_owned(), line))
    );
}

#[test]
fn construction_keeps_existing_origin() {
    let origin = Origin::new("raised.rs", 7, 3);
    let union = ResultUnion::diagnostic(Diagnostic::new("early").with_origin(origin.clone()));
    assert_eq!(
        union.as_diagnostic().and_then(Diagnostic::origin),
        Some(&origin)
    );
}

#[rstest]
#[case(true, "")]
#[case(true, "message")]
#[case(false, "code")]
#[case(false, "anything at all")]
fn flag_reads_itself_for_every_name(#[case] flag: bool, #[case] name: &str) {
    let union = ResultUnion::flag(flag);
    assert_eq!(union.get(name), Ok(Value::Bool(flag)));
}

#[rstest]
fn diagnostic_reads_named_fields(failure: ResultUnion) {
    assert_eq!(failure.get("message"), Ok(Value::from("disk full")));
    assert_eq!(failure.get("code"), Ok(Value::Int(28)));
    assert_eq!(failure.get("cause"), Ok(Value::Null));
}

#[rstest]
fn diagnostic_rejects_unknown_reads(failure: ResultUnion) {
    assert_eq!(
        failure.get("colour"),
        Err(AccessError::UnknownField {
            field: "colour".to_owned()
        })
    );
}

#[rstest]
fn reads_are_idempotent(failure: ResultUnion) {
    assert_eq!(failure.get("message"), failure.get("message"));
}

#[rstest]
#[case(Value::Bool(true), Value::from("irrelevant"), true)]
#[case(Value::from("irrelevant"), Value::Bool(true), true)]
#[case(Value::Bool(false), Value::Bool(true), false)]
fn flag_write_takes_first_boolean_operand(
    #[case] name: Value,
    #[case] value: Value,
    #[case] expected: bool,
) {
    let mut union = ResultUnion::flag(!expected);
    assert_eq!(union.set(name, value), Ok(()));
    assert_eq!(union.get("whatever"), Ok(Value::Bool(expected)));
}

#[test]
fn flag_write_without_boolean_fails_and_keeps_flag() {
    let mut union = ResultUnion::flag(true);
    assert_eq!(
        union.set("not-a-bool", "also-not-a-bool"),
        Err(AccessError::InvalidAssignment {
            name: "not-a-bool".to_owned(),
            value: "also-not-a-bool".to_owned(),
        })
    );
    assert_eq!(union.as_flag(), Some(true));
}

#[rstest]
fn diagnostic_write_updates_field(failure: ResultUnion) {
    let mut union = failure;
    assert_eq!(union.set("message", "new text"), Ok(()));
    assert_eq!(union.get("message"), Ok(Value::from("new text")));
}

#[rstest]
#[case(Value::from("nonexistent_field"), Value::Int(1))]
#[case(Value::Bool(true), Value::Bool(false))]
fn diagnostic_write_to_unknown_field_is_refused(
    failure: ResultUnion,
    #[case] name: Value,
    #[case] value: Value,
) {
    let mut union = failure.clone();
    let outcome = union.set(name, value);
    assert!(
        matches!(outcome, Err(AccessError::UnknownField { .. })),
        "unexpected outcome: {outcome:?}"
    );
    assert_eq!(union, failure);
}

#[rstest]
fn diagnostic_write_never_changes_variant(failure: ResultUnion) {
    let mut union = failure;
    let outcome = union.set("message", true);
    assert!(matches!(outcome, Err(AccessError::TypeMismatch { .. })));
    assert_eq!(union.discriminant(), Discriminant::Diagnostic);
}

#[rstest]
fn diagnostic_invokes_methods(failure: ResultUnion) {
    assert_eq!(
        failure.invoke("getMessage", &[]),
        Ok(Value::from("disk full"))
    );
    assert_eq!(failure.invoke("getCause", &[]), Ok(Value::Null));
}

#[rstest]
fn diagnostic_rejects_unknown_methods(failure: ResultUnion) {
    assert_eq!(
        failure.invoke("explode", &[]),
        Err(InvocationError::NotFound {
            method: "explode".to_owned(),
            variant: Discriminant::Diagnostic,
        })
    );
}

#[test]
fn flag_has_no_methods() {
    assert_eq!(
        ResultUnion::flag(true).invoke("getMessage", &[]),
        Err(InvocationError::NotFound {
            method: "getMessage".to_owned(),
            variant: Discriminant::Flag,
        })
    );
}

#[rstest]
#[case("then")]
#[case("not")]
#[case("to_string")]
fn flag_flags_boolean_lookalikes(#[case] method: &str) {
    assert_eq!(
        ResultUnion::flag(false).invoke(method, &[]),
        Err(InvocationError::SpuriousBooleanMethod {
            method: method.to_owned(),
        })
    );
}

#[rstest]
fn diagnostic_is_not_a_boolean(failure: ResultUnion) {
    assert_eq!(bool::try_from(&failure), Err(CoercionError::NotAFlag));
    assert_eq!(bool::try_from(failure), Err(CoercionError::NotAFlag));
}

#[test]
fn flag_is_not_raisable() {
    assert_eq!(
        Diagnostic::try_from(ResultUnion::flag(true)),
        Err(CoercionError::NotADiagnostic)
    );
}

#[rstest]
fn into_result_splits_variants(failure: ResultUnion) {
    assert_eq!(ResultUnion::flag(true).into_result(), Ok(true));
    let err = failure.into_result().map_err(|d| d.code());
    assert_eq!(err, Err(28));
}

#[rstest]
fn serialises_with_a_kind_tag(failure: ResultUnion) {
    let flag = serde_json::to_value(ResultUnion::flag(true)).expect("flag union serialises");
    assert_eq!(flag, serde_json::json!({ "kind": "flag", "value": true }));
    let encoded = serde_json::to_value(&failure).expect("diagnostic union serialises");
    assert_eq!(encoded["kind"], "diagnostic");
    assert_eq!(encoded["value"]["message"], "disk full");
}

#[rstest]
#[case(ResultUnion::flag(false), true)]
#[case(ResultUnion::diagnostic(Diagnostic::new("disk full")), false)]
fn branching_predicates_agree_with_discriminant(
    #[case] union: ResultUnion,
    #[case] holds_flag: bool,
) {
    assert_eq!(union.is_flag(), holds_flag);
    assert_eq!(union.is_diagnostic(), !holds_flag);
    assert_eq!(
        union.discriminant() == Discriminant::Flag,
        union.is_flag()
    );
}

#[rstest]
fn code_reads_back_as_integer(failure: ResultUnion) {
    let code = failure.invoke("getCode", &[]).ok();
    assert_eq!(code.as_ref().and_then(Value::as_int), Some(28));
}
