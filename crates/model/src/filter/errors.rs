use crate::core::value_type::ValueType;
use filter_syntax::ast::{operator::Operator, span::Span};
use thiserror::Error;

/// A well-formed filter that does not fit the resource's attributes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("unknown resource type '{resource}'")]
    UnknownResource { resource: String, span: Span },

    #[error("unknown field '{field}' for resource type '{resource}'")]
    UnknownField {
        resource: String,
        field: String,
        span: Span,
    },

    #[error("operator '{op}' is not allowed on field '{field}' of type {value_type}")]
    IllegalOperator {
        field: String,
        op: Operator,
        value_type: ValueType,
        span: Span,
    },

    #[error("type mismatch for field '{field}': expected {expected}, {detail}")]
    TypeMismatch {
        field: String,
        expected: ValueType,
        detail: String,
        span: Span,
    },

    #[error("'{op}' on field '{field}' needs at least one value")]
    EmptyMembershipList {
        field: String,
        op: Operator,
        span: Span,
    },

    #[error("expression nests deeper than {max} levels")]
    TooDeep { max: usize, span: Span },
}

impl SemanticError {
    pub fn span(&self) -> Span {
        match self {
            SemanticError::UnknownResource { span, .. }
            | SemanticError::UnknownField { span, .. }
            | SemanticError::IllegalOperator { span, .. }
            | SemanticError::TypeMismatch { span, .. }
            | SemanticError::EmptyMembershipList { span, .. }
            | SemanticError::TooDeep { span, .. } => *span,
        }
    }

    pub fn offset(&self) -> usize {
        self.span().start
    }
}
