use filter_syntax::{MAX_EXPRESSION_DEPTH, errors::SyntaxError};

use super::helpers::*;

fn message(err: &SyntaxError) -> String {
    err.to_string()
}

#[test]
fn test_empty_filter() {
    let err = parse_err("   ");

    assert_eq!(err.offset(), 0);
    assert!(message(&err).contains("empty"));
}

#[test]
fn test_unterminated_string_reports_quote_offset() {
    let err = parse_err(r#"username == "alice"#);

    assert_eq!(err.offset(), 12);
    assert!(message(&err).contains("unterminated string"));
}

#[test]
fn test_missing_closing_paren() {
    let err = parse_err(r#"(username == "alice""#);

    assert_eq!(err.offset(), 20);
    assert!(message(&err).contains("unbalanced parentheses"));
}

#[test]
fn test_extra_closing_paren() {
    let err = parse_err(r#"username == "alice")"#);

    assert_eq!(err.offset(), 19);
    assert!(message(&err).contains("no matching '('"));
}

#[test]
fn test_missing_literal() {
    let err = parse_err("username ==");

    assert_eq!(err.offset(), 11);
    assert!(message(&err).contains("expected a literal"));
}

#[test]
fn test_literal_on_left_side() {
    let err = parse_err(r#""alice" == username"#);

    assert_eq!(err.offset(), 0);
    assert!(message(&err).contains("expected a field name"));
}

#[test]
fn test_field_compared_to_field() {
    let err = parse_err("username == nickname");

    assert_eq!(err.offset(), 12);
}

#[test]
fn test_dangling_operator() {
    let err = parse_err("a == 1 &&");

    assert_eq!(err.offset(), 9);
    assert!(message(&err).contains("end of input"));
}

#[test]
fn test_missing_operator_between_predicates() {
    let err = parse_err("a == 1 b == 2");

    assert_eq!(err.offset(), 7);
    assert!(message(&err).contains("expected '&&', '||'"));
}

#[test]
fn test_not_without_in() {
    let err = parse_err("role not (1)");

    assert_eq!(err.offset(), 9);
    assert!(message(&err).contains("'in' after 'not'"));
}

#[test]
fn test_in_without_list() {
    let err = parse_err(r#"role in "ADMIN""#);

    assert_eq!(err.offset(), 8);
}

#[test]
fn test_unclosed_list() {
    let err = parse_err(r#"role in ("ADMIN" "HOST")"#);

    assert_eq!(err.offset(), 17);
    assert!(message(&err).contains("expected ','"));
}

#[test]
fn test_malformed_number() {
    let err = parse_err("size > 12abc");

    assert_eq!(err.offset(), 7);
    assert!(message(&err).contains("malformed literal"));
}

#[test]
fn test_unexpected_character() {
    let err = parse_err("size > 1 # comment");

    assert_eq!(err.offset(), 9);
}

#[test]
fn test_parenthesis_nesting_limit() {
    let depth = MAX_EXPRESSION_DEPTH + 1;
    let input = format!("{}a == 1{}", "(".repeat(depth), ")".repeat(depth));

    let err = parse_err(&input);
    assert!(matches!(err, SyntaxError::TooDeep { max, .. } if max == MAX_EXPRESSION_DEPTH));
}

#[test]
fn test_negation_nesting_limit() {
    let input = format!("{}a == 1", "!".repeat(MAX_EXPRESSION_DEPTH + 1));

    let err = parse_err(&input);
    assert!(matches!(err, SyntaxError::TooDeep { .. }));
}

#[test]
fn test_flat_chain_is_not_nesting() {
    let input = vec!["a == 1"; 100].join(" || ");

    parse_ok(&input);
}

#[test]
fn test_mixed_flat_chain_is_not_nesting() {
    let input = vec!["a == 1 && b == 2"; 100].join(" || ");

    parse_ok(&input);
}

#[test]
fn test_chain_inside_nesting_limit() {
    let depth = MAX_EXPRESSION_DEPTH;
    let chain = vec!["a == 1"; 100].join(" && ");
    let input = format!("{}{chain}{}", "(".repeat(depth), ")".repeat(depth));

    parse_ok(&input);
}
