use filter_syntax::errors::SyntaxError;
use model::filter::errors::SemanticError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Raised by the renderer for trees the validator should never have let
/// through. Always a bug, never the caller's fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("compiler invariant violated: {0}")]
    InvariantViolation(String),

    #[error("expression nests deeper than {max} levels")]
    TooDeep { max: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("unsupported database driver '{0}' (expected sqlite, mysql or postgres)")]
    UnsupportedDriver(String),
}

/// Stable classification of a [`FilterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ParseError,
    UnknownResource,
    UnknownField,
    IllegalOperator,
    TypeMismatch,
    EmptyMembershipList,
    ExpressionTooDeep,
    CompilerInvariantViolation,
    UnsupportedDriver,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::ParseError => "parse error",
            ErrorKind::UnknownResource => "unknown resource",
            ErrorKind::UnknownField => "unknown field",
            ErrorKind::IllegalOperator => "illegal operator",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::EmptyMembershipList => "empty membership list",
            ErrorKind::ExpressionTooDeep => "expression too deep",
            ErrorKind::CompilerInvariantViolation => "compiler invariant violation",
            ErrorKind::UnsupportedDriver => "unsupported driver",
        };
        write!(f, "{name}")
    }
}

impl FilterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FilterError::Syntax(SyntaxError::Parse { .. }) => ErrorKind::ParseError,
            FilterError::Syntax(SyntaxError::TooDeep { .. }) => ErrorKind::ExpressionTooDeep,
            FilterError::Semantic(err) => match err {
                SemanticError::UnknownResource { .. } => ErrorKind::UnknownResource,
                SemanticError::UnknownField { .. } => ErrorKind::UnknownField,
                SemanticError::IllegalOperator { .. } => ErrorKind::IllegalOperator,
                SemanticError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
                SemanticError::EmptyMembershipList { .. } => ErrorKind::EmptyMembershipList,
                SemanticError::TooDeep { .. } => ErrorKind::ExpressionTooDeep,
            },
            FilterError::Compile(CompileError::InvariantViolation(_)) => {
                ErrorKind::CompilerInvariantViolation
            }
            FilterError::Compile(CompileError::TooDeep { .. }) => ErrorKind::ExpressionTooDeep,
            FilterError::UnsupportedDriver(_) => ErrorKind::UnsupportedDriver,
        }
    }

    /// Byte offset into the filter source, when the error points at one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            FilterError::Syntax(err) => Some(err.offset()),
            FilterError::Semantic(err) => Some(err.offset()),
            FilterError::Compile(_) | FilterError::UnsupportedDriver(_) => None,
        }
    }

    /// True when the filter (or driver name) supplied by the caller is at
    /// fault, false for internal failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FilterError::Compile(CompileError::InvariantViolation(_)))
    }
}
