use crate::{
    core::{value::Value, value_type::ValueType},
    resource::attribute::AttributeSpec,
};
use filter_syntax::ast::{operator::Operator, span::Span};
use serde::Serialize;

/// The attribute a leaf was checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedField {
    pub name: String,
    pub column: String,
    pub value_type: ValueType,
}

impl From<&AttributeSpec> for ResolvedField {
    fn from(spec: &AttributeSpec) -> Self {
        ResolvedField {
            name: spec.name.clone(),
            column: spec.column.clone(),
            value_type: spec.value_type,
        }
    }
}

/// Filter tree whose leaves reference registered attributes and carry typed
/// values. Only the validator builds these from user input.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedExpr {
    pub kind: ValidatedExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedExprKind {
    Comparison {
        field: ResolvedField,
        op: Operator,
        value: Value,
    },
    Membership {
        field: ResolvedField,
        op: Operator,
        values: Vec<Value>,
    },
    And {
        left: Box<ValidatedExpr>,
        right: Box<ValidatedExpr>,
    },
    Or {
        left: Box<ValidatedExpr>,
        right: Box<ValidatedExpr>,
    },
    Not {
        inner: Box<ValidatedExpr>,
    },
}

impl ValidatedExpr {
    pub fn new(kind: ValidatedExprKind, span: Span) -> Self {
        ValidatedExpr { kind, span }
    }

    pub fn is_logical(&self) -> bool {
        matches!(
            self.kind,
            ValidatedExprKind::And { .. } | ValidatedExprKind::Or { .. }
        )
    }

    /// Number of typed values in the tree, i.e. the upper bound on bound
    /// arguments once compiled.
    pub fn value_count(&self) -> usize {
        match &self.kind {
            ValidatedExprKind::Comparison { .. } => 1,
            ValidatedExprKind::Membership { values, .. } => values.len(),
            ValidatedExprKind::And { left, right } | ValidatedExprKind::Or { left, right } => {
                left.value_count() + right.value_count()
            }
            ValidatedExprKind::Not { inner } => inner.value_count(),
        }
    }
}
