use filter_syntax::{
    ast::{expr::FilterExpr, span::Span},
    parse,
};
use model::{
    filter::{errors::SemanticError, typed::ValidatedExpr, validator::validate},
    resource::registry::AttributeRegistry,
};

pub fn registry() -> AttributeRegistry {
    AttributeRegistry::builtin().expect("builtin registry")
}

pub fn parsed(input: &str) -> FilterExpr {
    parse(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

pub fn validate_ok(resource: &str, input: &str) -> ValidatedExpr {
    validate(&registry(), resource, &parsed(input))
        .unwrap_or_else(|e| panic!("{input:?} rejected: {e}"))
}

pub fn validate_err(resource: &str, input: &str) -> SemanticError {
    match validate(&registry(), resource, &parsed(input)) {
        Ok(expr) => panic!("expected {input:?} to be rejected, got {expr:?}"),
        Err(e) => e,
    }
}

pub fn span() -> Span {
    Span::new(0, 1, 1, 1)
}
