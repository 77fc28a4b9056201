use filter_syntax::{
    ast::{
        expr::{FilterExpr, FilterExprKind},
        literal::Literal,
        operator::Operator,
    },
    errors::SyntaxError,
    parse,
};

pub fn parse_ok(input: &str) -> FilterExpr {
    match parse(input) {
        Ok(expr) => expr,
        Err(e) => panic!("failed to parse {input:?}: {}", e.format_error(input)),
    }
}

pub fn parse_err(input: &str) -> SyntaxError {
    match parse(input) {
        Ok(expr) => panic!("expected {input:?} to fail, got {expr}"),
        Err(e) => e,
    }
}

/// Unpacks a comparison leaf into `(field, op, literal)`.
pub fn comparison(expr: &FilterExpr) -> (&str, Operator, &Literal) {
    match &expr.kind {
        FilterExprKind::Comparison { field, op, literal } => {
            (field.name.as_str(), *op, &literal.value)
        }
        other => panic!("expected comparison, got {other:?}"),
    }
}

/// Unpacks a membership leaf into `(field, op, literals)`.
pub fn membership(expr: &FilterExpr) -> (&str, Operator, Vec<Literal>) {
    match &expr.kind {
        FilterExprKind::Membership {
            field,
            op,
            literals,
        } => (
            field.name.as_str(),
            *op,
            literals.iter().map(|l| l.value.clone()).collect(),
        ),
        other => panic!("expected membership, got {other:?}"),
    }
}

pub fn string(value: &str) -> Literal {
    Literal::String(value.to_string())
}
