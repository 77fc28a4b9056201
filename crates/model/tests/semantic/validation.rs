use filter_syntax::ast::operator::Operator;
use model::{
    core::{value::Value, value_type::ValueType},
    filter::typed::{ValidatedExpr, ValidatedExprKind},
};

use super::helpers::*;

fn leaf(expr: &ValidatedExpr) -> (&str, Operator, Vec<Value>) {
    match &expr.kind {
        ValidatedExprKind::Comparison { field, op, value } => {
            (field.column.as_str(), *op, vec![value.clone()])
        }
        ValidatedExprKind::Membership { field, op, values } => {
            (field.column.as_str(), *op, values.clone())
        }
        other => panic!("expected a leaf, got {other:?}"),
    }
}

#[test]
fn test_string_comparison() {
    let expr = validate_ok("user", r#"username == "alice""#);

    assert_eq!(
        leaf(&expr),
        ("username", Operator::Eq, vec![Value::String("alice".into())])
    );
}

#[test]
fn test_enum_membership_keeps_order() {
    let expr = validate_ok("user", r#"role in ("ADMIN", "HOST")"#);

    assert_eq!(
        leaf(&expr),
        (
            "role",
            Operator::In,
            vec![Value::Enum("ADMIN".into()), Value::Enum("HOST".into())]
        )
    );
}

#[test]
fn test_resolved_field_carries_type() {
    let expr = validate_ok("memo", "pinned == true");

    match &expr.kind {
        ValidatedExprKind::Comparison { field, value, .. } => {
            assert_eq!(field.name, "pinned");
            assert_eq!(field.value_type, ValueType::Bool);
            assert_eq!(*value, Value::Bool(true));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_timestamp_literals() {
    let expr = validate_ok("memo", r#"created_ts >= "2023-11-14T22:13:20Z""#);
    assert_eq!(leaf(&expr).2, vec![Value::Timestamp(1_700_000_000)]);

    let expr = validate_ok("memo", "updated_ts < 1700000000");
    assert_eq!(leaf(&expr).2, vec![Value::Timestamp(1_700_000_000)]);
}

#[test]
fn test_contains_on_string() {
    let expr = validate_ok("memo", r#"content.contains("todo")"#);

    assert_eq!(
        leaf(&expr),
        ("content", Operator::Contains, vec![Value::String("todo".into())])
    );
}

#[test]
fn test_tree_shape_is_preserved() {
    let expr = validate_ok(
        "memo",
        r#"creator_id == 1 || !(visibility == "PRIVATE" && pinned != false)"#,
    );

    let ValidatedExprKind::Or { left, right } = &expr.kind else {
        panic!("expected OR at the root, got {expr:?}");
    };
    assert_eq!(leaf(left), ("creator_id", Operator::Eq, vec![Value::Int(1)]));

    let ValidatedExprKind::Not { inner } = &right.kind else {
        panic!("expected NOT, got {right:?}");
    };
    assert!(inner.is_logical());
    assert_eq!(expr.value_count(), 3);
}

#[test]
fn test_spans_survive_validation() {
    let input = r#"id > 3 && uid == "x""#;
    let expr = validate_ok("attachment", input);

    assert_eq!(expr.span.start, 0);
    assert_eq!(expr.span.end, input.len());
}

#[test]
fn test_not_in_on_int() {
    let expr = validate_ok("attachment", "size not in [1, 2, 3]");

    assert_eq!(
        leaf(&expr),
        (
            "size",
            Operator::NotIn,
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        )
    );
}

#[test]
fn test_long_flat_chain_validates() {
    let filter = vec!["id != 0"; 100].join(" && ");
    let expr = validate_ok("user", &filter);

    let mut node = &expr;
    let mut clauses = 1;
    while let ValidatedExprKind::And { left, right } = &node.kind {
        assert_eq!(leaf(right).0, "id");
        clauses += 1;
        node = left;
    }
    assert_eq!(clauses, 100);
    assert_eq!(leaf(node).1, Operator::Ne);
}
