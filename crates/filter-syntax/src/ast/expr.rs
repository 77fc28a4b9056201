use crate::ast::{ident::Identifier, literal::LiteralExpr, operator::Operator, span::Span};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    pub kind: FilterExprKind,
    pub span: Span,
}

impl FilterExpr {
    pub fn new(kind: FilterExprKind, span: Span) -> Self {
        FilterExpr { kind, span }
    }

    /// `&&` and `||` nodes.
    pub fn is_logical(&self) -> bool {
        matches!(self.kind, FilterExprKind::And { .. } | FilterExprKind::Or { .. })
    }
}

/// Filter expression types
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExprKind {
    Comparison {
        field: Identifier,
        op: Operator,
        literal: LiteralExpr,
    },
    Membership {
        field: Identifier,
        op: Operator,
        literals: Vec<LiteralExpr>,
    },
    And {
        left: Box<FilterExpr>,
        right: Box<FilterExpr>,
    },
    Or {
        left: Box<FilterExpr>,
        right: Box<FilterExpr>,
    },
    Not {
        inner: Box<FilterExpr>,
    },
}

/// Prints the expression back in filter syntax with every nested `&&`/`||`
/// parenthesised, so two trees print the same iff they group the same way.
impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FilterExprKind::Comparison { field, op, literal } => {
                write!(f, "{field} {op} {}", literal.value)
            }
            FilterExprKind::Membership {
                field,
                op,
                literals,
            } => {
                let items = literals
                    .iter()
                    .map(|l| l.value.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{field} {op} ({items})")
            }
            FilterExprKind::And { left, right } => {
                write_operand(f, left)?;
                write!(f, " && ")?;
                write_operand(f, right)
            }
            FilterExprKind::Or { left, right } => {
                write_operand(f, left)?;
                write!(f, " || ")?;
                write_operand(f, right)
            }
            FilterExprKind::Not { inner } => write!(f, "!({inner})"),
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &FilterExpr) -> fmt::Result {
    if expr.is_logical() {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}
