#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::FieldType;
use pretty_assertions::assert_eq;
use tydesc_value::TableBuilder;

fn point(x: Value) -> Value {
    TableBuilder::new().field("x", x).build().unwrap()
}

fn point_type() -> Descriptor {
    Descriptor::table([], [FieldType::named("x", Descriptor::Number)])
}

#[test]
fn accepted_values_explain_nothing() {
    assert_eq!(Descriptor::Number.explain(&Value::number(1)), Ok(()));
    assert_eq!(point_type().explain(&point(Value::number(2))), Ok(()));
    assert_eq!(Descriptor::optional(Descriptor::Boolean).explain_args(&[]), Ok(()));
}

#[test]
fn wrong_kind_at_the_root() {
    let err = Descriptor::String.explain(&Value::number(1)).unwrap_err();
    assert_eq!(
        err,
        Mismatch {
            path: vec![],
            expected: "string".to_owned(),
            found: "number",
            reason: MismatchReason::WrongKind,
        }
    );
    assert_eq!(err.to_string(), "wrong kind: expected string, found number");
}

#[test]
fn literal_mismatch() {
    let err = Descriptor::literal("on").explain(&Value::string("off")).unwrap_err();
    assert_eq!(err.reason, MismatchReason::LiteralMismatch);
    assert_eq!(err.expected, "\"on\"");
    assert_eq!(err.found, "string");
}

#[test]
fn union_reasons() {
    let empty = Descriptor::union([]).explain(&Value::Nil).unwrap_err();
    assert_eq!(empty.reason, MismatchReason::EmptyUnion);

    let u = Descriptor::union([Descriptor::Number, Descriptor::String]);
    let err = u.explain(&Value::boolean(true)).unwrap_err();
    assert_eq!(err.reason, MismatchReason::NoUnionMember);
    assert_eq!(err.expected, "(number | string)");
    assert_eq!(err.found, "boolean");
}

#[test]
fn tuple_positions_appear_in_the_path() {
    let t = Descriptor::tuple([Descriptor::Number, Descriptor::String]);
    let err = t
        .explain_args(&[Value::number(1), Value::boolean(false)])
        .unwrap_err();
    assert_eq!(err.path, vec![PathSegment::Position(1)]);
    assert_eq!(err.to_string(), "wrong kind at #1: expected string, found boolean");
}

#[test]
fn missing_tuple_position_is_seen_as_nil() {
    let t = Descriptor::tuple([Descriptor::Number, Descriptor::String]);
    let err = t.explain_args(&[Value::number(1)]).unwrap_err();
    assert_eq!(err.path, vec![PathSegment::Position(1)]);
    assert_eq!(err.found, "nil");
}

#[test]
fn missing_field() {
    let err = point_type().explain(&Value::empty_table()).unwrap_err();
    assert_eq!(err.reason, MismatchReason::MissingField);
    assert_eq!(err.path, vec![PathSegment::Field(Value::string("x"))]);
    assert_eq!(err.to_string(), "missing field at .x: expected number, found no value");
}

#[test]
fn nested_field_paths() {
    let outer = Descriptor::table([], [FieldType::named("pos", point_type())]);
    let value = TableBuilder::new()
        .field("pos", point(Value::string("far")))
        .build()
        .unwrap();
    let err = outer.explain(&value).unwrap_err();
    assert_eq!(
        err.path,
        vec![
            PathSegment::Field(Value::string("pos")),
            PathSegment::Field(Value::string("x")),
        ]
    );
    assert_eq!(err.to_string(), "wrong kind at .pos.x: expected number, found string");
}

#[test]
fn non_table_against_table() {
    let err = point_type().explain(&Value::number(3)).unwrap_err();
    assert_eq!(err.reason, MismatchReason::WrongKind);
    assert_eq!(err.expected, "{ x: number }");
}

#[test]
fn rejected_tail_entries_report_the_map() {
    let t = Descriptor::table(
        [MapType::new(Some(Descriptor::String), Some(Descriptor::Number))],
        [],
    );
    let bad_value = TableBuilder::new().field("k", Value::boolean(true)).build().unwrap();
    let err = t.explain(&bad_value).unwrap_err();
    assert_eq!(err.reason, MismatchReason::OpenTailRejected);
    assert_eq!(err.path, vec![PathSegment::Entry(Value::string("k"))]);
    assert_eq!(err.expected, "[string]: number");
    assert_eq!(err.found, "boolean");

    let bad_key = TableBuilder::new()
        .entry(Value::number(1), Value::number(1))
        .build()
        .unwrap();
    let err = t.explain(&bad_key).unwrap_err();
    assert_eq!(err.found, "number");
    assert_eq!(err.to_string(), "entry rejected by table map at [1]: expected [string]: number, found number");
}

#[test]
fn custom_kinds_are_wrong_kind() {
    let err = Descriptor::custom("Color3").explain(&Value::Nil).unwrap_err();
    assert_eq!(err.reason, MismatchReason::WrongKind);
    assert_eq!(err.expected, "Color3");
}

#[test]
fn explain_agrees_with_is() {
    let descriptors = [
        Descriptor::Any,
        Descriptor::optional(Descriptor::Number),
        Descriptor::tuple([Descriptor::Number, Descriptor::optional(Descriptor::String)]),
        Descriptor::union([Descriptor::literal(1), Descriptor::Nil]),
        point_type(),
    ];
    let values = [
        Value::Nil,
        Value::number(1),
        Value::string("s"),
        point(Value::number(1)),
        point(Value::Nil),
    ];
    for d in &descriptors {
        for v in &values {
            assert_eq!(d.explain(v).is_ok(), d.is(v), "{d} against {v:?}");
        }
        assert_eq!(d.explain_args(&[]).is_ok(), d.is_args(&[]), "{d} with no arguments");
    }
}

#[test]
fn path_segment_display() {
    assert_eq!(PathSegment::Position(0).to_string(), "#0");
    assert_eq!(PathSegment::Field(Value::string("name")).to_string(), ".name");
    assert_eq!(PathSegment::Field(Value::string("a b")).to_string(), "[\"a b\"]");
    assert_eq!(PathSegment::Entry(Value::boolean(true)).to_string(), "[true]");
}

#[test]
#[should_panic(expected = "a field descriptor has no standalone conformance check")]
fn bare_field_panics() {
    let _ = Descriptor::field("x", None).explain(&Value::Nil);
}
