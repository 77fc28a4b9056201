use crate::lexer::rules::Rule;
use pest::error::{Error as PestError, InputLocation, LineColLocation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("unexpected character '{character}' at line {line}, column {column}")]
    UnexpectedCharacter {
        character: char,
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("unterminated string starting at line {line}, column {column}")]
    UnterminatedString {
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("malformed literal '{lexeme}' at line {line}, column {column}: {reason}")]
    MalformedLiteral {
        lexeme: String,
        reason: String,
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("invalid escape sequence '{sequence}' at line {line}, column {column}")]
    InvalidEscape {
        sequence: String,
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        offset: usize,
        line: usize,
        column: usize,
    },
}

impl LexerError {
    pub fn from_pest_error(err: PestError<Rule>, input: &str) -> Self {
        let offset = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        let (line, column) = match err.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };

        match input.get(offset..).and_then(|rest| rest.chars().next()) {
            Some(character) => LexerError::UnexpectedCharacter {
                character,
                offset,
                line,
                column,
            },
            None => LexerError::Syntax {
                message: format!("{}", err.variant),
                offset,
                line,
                column,
            },
        }
    }

    /// Byte offset of the problem in the filter source.
    pub fn offset(&self) -> usize {
        self.position().0
    }

    /// `(offset, line, column)` of the problem.
    pub fn position(&self) -> (usize, usize, usize) {
        match self {
            LexerError::UnexpectedCharacter {
                offset,
                line,
                column,
                ..
            }
            | LexerError::UnterminatedString {
                offset,
                line,
                column,
            }
            | LexerError::MalformedLiteral {
                offset,
                line,
                column,
                ..
            }
            | LexerError::InvalidEscape {
                offset,
                line,
                column,
                ..
            }
            | LexerError::Syntax {
                offset,
                line,
                column,
                ..
            } => (*offset, *line, *column),
        }
    }
}
