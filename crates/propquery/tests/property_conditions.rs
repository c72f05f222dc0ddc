//! End-to-end condition tests
//!
//! Builds conditions through the property shorthands and renders them with
//! a SQL-like builder:
//! - One predicate per condition, with normalized operands
//! - Construction errors surfaced before any builder call
//! - Lenient and strict dispatch over a batch of conditions

mod common;

use chrono::{TimeZone, Utc};
use common::{SqlBuilder, schema};
use pretty_assertions::assert_eq;
use propquery::diagnostics::{PQ0101, PQ0103, PQ0104, PQ0200, PQ0201};
use propquery::prelude::*;
use propquery::{Dispatch, DispatchConfig, Unmatched};
use rstest::rstest;

fn render(condition: &Condition) -> String {
    let mut builder = SqlBuilder::new();
    condition.apply_to(&mut builder);
    builder.where_clause()
}

#[rstest]
#[case(schema().id.equals(42i64), "id = 42")]
#[case(schema().age.not_equals(7), "age <> 7")]
#[case(schema().name.equals("alice"), "name = 'alice'")]
#[case(schema().score.greater_than(0.75), "score > 0.75")]
#[case(schema().ratio.less_than(2.5f32), "ratio < 2.5")]
#[case(schema().age.between(18, 65), "age BETWEEN 18 AND 65")]
#[case(schema().id.one_of([5i64, 3, 9]), "id IN (5, 3, 9)")]
#[case(schema().name.is_null(), "name IS NULL")]
#[case(schema().score.is_not_null(), "score IS NOT NULL")]
fn test_renders_predicate(#[case] condition: ConditionResult<Condition>, #[case] expected: &str) {
    assert_eq!(render(&condition.unwrap()), expected);
}

#[test]
fn test_boolean_normalized() {
    let active = schema().active;

    assert_eq!(render(&active.equals(true).unwrap()), "active = 1");
    assert_eq!(render(&active.equals("False").unwrap()), "active = 0");

    let both = active.one_of([true, false]).unwrap();
    assert_eq!(render(&both), "active IN (1, 0)");
}

#[test]
fn test_date_normalized_to_millis() {
    let since = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    let condition = schema().created.greater_than(since).unwrap();
    assert_eq!(render(&condition), "created > 1609459200000");
}

#[test]
fn test_date_range() {
    let start = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2021, 1, 2, 0, 0, 0).unwrap();
    let condition = schema().created.between(start, end).unwrap();
    assert_eq!(
        render(&condition),
        "created BETWEEN 1609459200000 AND 1609545600000"
    );
}

#[test]
fn test_construction_errors() {
    let s = schema();

    assert_eq!(s.active.equals(3).unwrap_err().code().to_string(), "PQ0102");
    assert_eq!(s.created.equals("yesterday").unwrap_err().code(), PQ0101);
    assert_eq!(s.id.one_of(Vec::<i64>::new()).unwrap_err().code(), PQ0103);

    let err = Condition::with_values(s.id.clone(), Operator::Between, [1i64]).unwrap_err();
    assert_eq!(err.code(), PQ0104);
}

#[test]
fn test_unknown_operator_name() {
    let err = "CONTAINS".parse::<Operator>().unwrap_err();
    assert_eq!(err.code(), PQ0200);
    assert_eq!(err.to_string(), "Unsupported operator: CONTAINS");

    assert_eq!("between".parse::<Operator>().unwrap(), Operator::Between);
}

#[test]
fn test_lenient_batch_skips_unmatched() {
    let s = schema();
    let conditions = vec![
        s.age.greater_than(18).unwrap(),
        s.score.equals(1.0).unwrap(),
        s.name.not_equals("bob").unwrap(),
    ];
    let mut builder = SqlBuilder::new();

    let dispatcher = Dispatcher::default();
    let outcomes = dispatcher.apply_all(&conditions, &mut builder).unwrap();
    assert_eq!(outcomes[1], Dispatch::Skipped);
    assert_eq!(builder.where_clause(), "age > 18 AND name <> 'bob'");
}

#[test]
fn test_strict_batch_rejects_unmatched() {
    let s = schema();
    let conditions = vec![
        s.age.greater_than(18).unwrap(),
        s.name.one_of(["a", "b"]).unwrap(),
        s.id.is_not_null().unwrap(),
    ];
    let mut builder = SqlBuilder::new();
    let dispatcher = Dispatcher::new(DispatchConfig::default().with_unmatched(Unmatched::Reject));

    let err = dispatcher.apply_all(&conditions, &mut builder).unwrap_err();
    assert_eq!(err.code(), PQ0201);
    assert_eq!(err.property(), Some("name"));
    assert_eq!(builder.where_clause(), "age > 18");
}
