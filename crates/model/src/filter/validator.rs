use crate::{
    core::value::Value,
    filter::{
        coercion::coerce,
        errors::SemanticError,
        typed::{ResolvedField, ValidatedExpr, ValidatedExprKind},
    },
    resource::{
        attribute::AttributeSpec,
        registry::{AttributeRegistry, LookupError},
    },
};
use filter_syntax::{
    MAX_EXPRESSION_DEPTH,
    ast::{
        expr::{FilterExpr, FilterExprKind},
        ident::Identifier,
        operator::Operator,
        span::Span,
    },
};
use tracing::debug;

/// Checks a parsed filter against one resource type's attributes.
///
/// Stops at the first problem: leaves are checked left to right, a negated
/// operand before its `!`. Nesting is measured the way the parser measures
/// it, so `a && b && ...` chains of any length pass while hand-built trees
/// nested past [`MAX_EXPRESSION_DEPTH`] are rejected.
pub struct SemanticValidator<'r> {
    registry: &'r AttributeRegistry,
    resource: &'r str,
}

impl<'r> SemanticValidator<'r> {
    pub fn new(registry: &'r AttributeRegistry, resource: &'r str) -> Self {
        SemanticValidator { registry, resource }
    }

    pub fn validate(&self, expr: &FilterExpr) -> Result<ValidatedExpr, SemanticError> {
        self.registry
            .schema(self.resource)
            .map_err(|_| SemanticError::UnknownResource {
                resource: self.resource.to_string(),
                span: expr.span,
            })?;

        let validated = self.validate_expr(expr, 0)?;
        debug!(resource = self.resource, "filter validated");
        Ok(validated)
    }

    fn validate_expr(
        &self,
        expr: &FilterExpr,
        depth: usize,
    ) -> Result<ValidatedExpr, SemanticError> {
        if depth > MAX_EXPRESSION_DEPTH {
            return Err(SemanticError::TooDeep {
                max: MAX_EXPRESSION_DEPTH,
                span: expr.span,
            });
        }

        let kind = match &expr.kind {
            FilterExprKind::Comparison { field, op, literal } => {
                let spec = self.resolve(field)?;
                self.check_operator(spec, *op, !op.is_membership(), expr.span)?;

                ValidatedExprKind::Comparison {
                    field: ResolvedField::from(spec),
                    op: *op,
                    value: coerce(spec, literal)?,
                }
            }
            FilterExprKind::Membership {
                field,
                op,
                literals,
            } => {
                let spec = self.resolve(field)?;
                self.check_operator(spec, *op, op.is_membership(), expr.span)?;

                if literals.is_empty() {
                    return Err(SemanticError::EmptyMembershipList {
                        field: spec.name.clone(),
                        op: *op,
                        span: expr.span,
                    });
                }

                let values = literals
                    .iter()
                    .map(|literal| coerce(spec, literal))
                    .collect::<Result<Vec<Value>, _>>()?;

                ValidatedExprKind::Membership {
                    field: ResolvedField::from(spec),
                    op: *op,
                    values,
                }
            }
            FilterExprKind::And { .. } | FilterExprKind::Or { .. } => {
                return self.validate_chain(expr, depth);
            }
            FilterExprKind::Not { inner } => ValidatedExprKind::Not {
                inner: Box::new(self.validate_expr(inner, depth + 1)?),
            },
        };

        Ok(ValidatedExpr::new(kind, expr.span))
    }

    /// Walks the left spine of a run of one connective without recursing,
    /// so long flat chains cost no stack.
    fn validate_chain(
        &self,
        expr: &FilterExpr,
        depth: usize,
    ) -> Result<ValidatedExpr, SemanticError> {
        let mut spine = Vec::new();
        let mut node = expr;
        let mut is_or = false;
        while let Some((or, left, right)) = split(node) {
            if !spine.is_empty() && or != is_or {
                break;
            }
            is_or = or;
            spine.push((node.span, right));
            node = left;
        }

        let mut acc = self.validate_expr(node, depth + nesting_step(is_or, node))?;
        for (span, right) in spine.into_iter().rev() {
            let right = self.validate_expr(right, depth + nesting_step(is_or, right))?;
            let (left, right) = (Box::new(acc), Box::new(right));
            let kind = if is_or {
                ValidatedExprKind::Or { left, right }
            } else {
                ValidatedExprKind::And { left, right }
            };
            acc = ValidatedExpr::new(kind, span);
        }

        Ok(acc)
    }

    fn resolve(&self, field: &Identifier) -> Result<&'r AttributeSpec, SemanticError> {
        self.registry
            .lookup(self.resource, &field.name)
            .map_err(|err| match err {
                LookupError::UnknownResource { resource } => SemanticError::UnknownResource {
                    resource,
                    span: field.span,
                },
                LookupError::UnknownField { resource, field: name } => {
                    SemanticError::UnknownField {
                        resource,
                        field: name,
                        span: field.span,
                    }
                }
            })
    }

    /// `shape_ok` is false when a comparison node carries a list operator or
    /// a membership node carries a scalar one.
    fn check_operator(
        &self,
        spec: &AttributeSpec,
        op: Operator,
        shape_ok: bool,
        span: Span,
    ) -> Result<(), SemanticError> {
        if shape_ok && spec.allows(op) {
            return Ok(());
        }
        Err(SemanticError::IllegalOperator {
            field: spec.name.clone(),
            op,
            value_type: spec.value_type,
            span,
        })
    }
}

fn split(expr: &FilterExpr) -> Option<(bool, &FilterExpr, &FilterExpr)> {
    match &expr.kind {
        FilterExprKind::And { left, right } => Some((false, &**left, &**right)),
        FilterExprKind::Or { left, right } => Some((true, &**left, &**right)),
        _ => None,
    }
}

/// A connective child only counts as nesting when the source needed
/// parentheses for it; `a || b && c` does not.
fn nesting_step(parent_is_or: bool, child: &FilterExpr) -> usize {
    match split(child) {
        Some((child_is_or, ..)) if child_is_or || !parent_is_or => 1,
        _ => 0,
    }
}

pub fn validate(
    registry: &AttributeRegistry,
    resource: &str,
    expr: &FilterExpr,
) -> Result<ValidatedExpr, SemanticError> {
    SemanticValidator::new(registry, resource).validate(expr)
}
