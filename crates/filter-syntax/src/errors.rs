use crate::lexer::error::LexerError;
use thiserror::Error;

/// Everything that can go wrong before a filter has an AST.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("expression is nested deeper than {max} levels (at offset {offset})")]
    TooDeep { offset: usize, max: usize },
}

impl SyntaxError {
    /// Byte offset into the filter source.
    pub fn offset(&self) -> usize {
        match self {
            SyntaxError::Parse { offset, .. } | SyntaxError::TooDeep { offset, .. } => *offset,
        }
    }

    /// Format error with context for display
    pub fn format_error(&self, source: &str) -> String {
        format!("{}\n{}", self, point_at(source, self.offset()))
    }
}

/// The source line containing `offset`, with a caret under it.
pub fn point_at(source: &str, offset: usize) -> String {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(source.len());
    let snippet = &source[line_start..line_end];
    let caret_col = source[line_start..offset].chars().count();

    format!("{}\n{}^", snippet, " ".repeat(caret_col))
}

impl From<LexerError> for SyntaxError {
    fn from(err: LexerError) -> Self {
        let (offset, line, column) = err.position();
        SyntaxError::Parse {
            message: err.to_string(),
            offset,
            line,
            column,
        }
    }
}
