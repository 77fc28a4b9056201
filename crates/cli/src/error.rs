use filter_syntax::{errors::point_at, lexer::error::LexerError};
use model::resource::registry::{LookupError, RegistryError};
use planner::FilterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Filter(#[from] FilterError),

    #[error("Failed to tokenize the filter: {0}")]
    Lexer(#[from] LexerError),

    #[error("Failed to build the attribute registry: {0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Lookup(#[from] LookupError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CliError {
    /// Renders the error, pointing at the offending spot in `source` when
    /// the error carries an offset.
    pub fn render(&self, source: Option<&str>) -> String {
        let offset = match self {
            CliError::Filter(err) => err.offset(),
            CliError::Lexer(err) => Some(err.offset()),
            _ => None,
        };

        match (offset, source) {
            (Some(offset), Some(source)) => format!("{self}\n{}", point_at(source, offset)),
            _ => self.to_string(),
        }
    }
}
