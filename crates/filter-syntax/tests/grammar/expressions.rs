use filter_syntax::ast::{expr::FilterExprKind, literal::Literal, operator::Operator};

use super::helpers::*;

#[test]
fn test_simple_comparison() {
    let expr = parse_ok(r#"username == "alice""#);
    let (field, op, literal) = comparison(&expr);

    assert_eq!(field, "username");
    assert_eq!(op, Operator::Eq);
    assert_eq!(literal, &string("alice"));
    assert_eq!(expr.span.start, 0);
    assert_eq!(expr.span.end, 19);
}

#[test]
fn test_all_comparison_operators() {
    let cases = [
        ("id == 1", Operator::Eq),
        ("id != 1", Operator::Ne),
        ("id < 1", Operator::Lt),
        ("id <= 1", Operator::Le),
        ("id > 1", Operator::Gt),
        ("id >= 1", Operator::Ge),
    ];

    for (input, expected) in cases {
        let expr = parse_ok(input);
        let (_, op, literal) = comparison(&expr);
        assert_eq!(op, expected, "operator mismatch for {input}");
        assert_eq!(literal, &Literal::Integer(1));
    }
}

#[test]
fn test_literal_kinds() {
    let expr = parse_ok("pinned == true");
    assert_eq!(comparison(&expr).2, &Literal::Boolean(true));

    let expr = parse_ok("created_ts > -5");
    assert_eq!(comparison(&expr).2, &Literal::Integer(-5));

    let expr = parse_ok(r#"created_ts > "2024-01-01T00:00:00Z""#);
    assert_eq!(comparison(&expr).2, &string("2024-01-01T00:00:00Z"));
}

#[test]
fn test_membership_in_list() {
    let expr = parse_ok(r#"role IN ("ADMIN", "HOST")"#);
    let (field, op, literals) = membership(&expr);

    assert_eq!(field, "role");
    assert_eq!(op, Operator::In);
    assert_eq!(literals, vec![string("ADMIN"), string("HOST")]);
}

#[test]
fn test_membership_not_in_with_brackets_and_trailing_comma() {
    let expr = parse_ok("id not in [1, 2, 3,]");
    let (_, op, literals) = membership(&expr);

    assert_eq!(op, Operator::NotIn);
    assert_eq!(
        literals,
        vec![Literal::Integer(1), Literal::Integer(2), Literal::Integer(3)]
    );
}

#[test]
fn test_empty_membership_list_parses() {
    // Rejected later by the validator, not by the parser.
    let expr = parse_ok("status IN ()");
    let (_, _, literals) = membership(&expr);

    assert!(literals.is_empty());
}

#[test]
fn test_contains_forms() {
    let infix = parse_ok(r#"content contains "todo""#);
    let method = parse_ok(r#"content.contains("todo")"#);

    assert_eq!(comparison(&infix), comparison(&method));
    assert_eq!(comparison(&method).1, Operator::Contains);
}

#[test]
fn test_and_binds_tighter_than_or() {
    let implicit = parse_ok("a == 1 || b == 2 && c == 3");
    let explicit = parse_ok("a == 1 || (b == 2 && c == 3)");

    assert_eq!(implicit.to_string(), "a == 1 || (b == 2 && c == 3)");
    assert_eq!(implicit.to_string(), explicit.to_string());
    assert!(matches!(implicit.kind, FilterExprKind::Or { .. }));
}

#[test]
fn test_parentheses_override_precedence() {
    let expr = parse_ok("(a == 1 || b == 2) && c == 3");

    assert_eq!(expr.to_string(), "(a == 1 || b == 2) && c == 3");
    assert!(matches!(expr.kind, FilterExprKind::And { .. }));
}

#[test]
fn test_logical_operators_are_left_associative() {
    let expr = parse_ok("a == 1 && b == 2 && c == 3");

    assert_eq!(expr.to_string(), "(a == 1 && b == 2) && c == 3");
}

#[test]
fn test_not_applies_to_whole_comparison() {
    let expr = parse_ok("!a == 1 && b == 2");

    assert_eq!(expr.to_string(), "!(a == 1) && b == 2");
}

#[test]
fn test_double_negation() {
    let expr = parse_ok("!!(pinned == true)");

    match &expr.kind {
        FilterExprKind::Not { inner } => {
            assert!(matches!(inner.kind, FilterExprKind::Not { .. }));
        }
        other => panic!("expected not, got {other:?}"),
    }
}

#[test]
fn test_whitespace_is_insignificant() {
    let compact = parse_ok(r#"username=="alice"&&(role=="ADMIN"||role=="HOST")"#);
    let spaced =
        parse_ok("  username == \"alice\"\n && ( role == \"ADMIN\" ||\trole == \"HOST\" )  ");

    assert_eq!(compact.to_string(), spaced.to_string());
}

#[test]
fn test_unicode_field_name() {
    let expr = parse_ok(r#"título == "nota""#);

    assert_eq!(comparison(&expr).0, "título");
}

#[test]
fn test_nesting_at_the_limit_is_accepted() {
    let depth = filter_syntax::MAX_EXPRESSION_DEPTH;
    let input = format!("{}a == 1{}", "(".repeat(depth), ")".repeat(depth));

    parse_ok(&input);
}
