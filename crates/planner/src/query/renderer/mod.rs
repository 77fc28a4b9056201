//! Defines the core rendering trait and context for converting a validated
//! filter into SQL.

use crate::{error::CompileError, query::dialect::Dialect};
use filter_syntax::MAX_EXPRESSION_DEPTH;
use model::core::value::Value;

pub mod expr;

/// A trait for any node that can be rendered into a SQL fragment.
pub trait Render {
    fn render(&self, ctx: &mut ConvertContext) -> Result<(), CompileError>;
}

/// State of one compilation: the SQL text so far, the arguments bound so
/// far and the dialect deciding the syntax. Placeholder ordinals always
/// equal the argument's position in `args`.
pub struct ConvertContext<'a> {
    pub sql: String,
    pub args: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    depth: usize,
}

impl<'a> ConvertContext<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            args: Vec::new(),
            dialect,
            depth: 0,
        }
    }

    /// Consumes the context and returns the final SQL string and arguments.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// Binds `value` and writes its placeholder.
    pub fn add_param(&mut self, value: Value) {
        self.args.push(value);
        let placeholder = self.dialect.get_placeholder(self.args.len());
        self.sql.push_str(&placeholder);
    }

    pub fn push_identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
    }

    /// Writes booleans and timestamps inline and binds everything else.
    pub fn push_value(&mut self, value: &Value) {
        match value {
            Value::Bool(b) => {
                let encoded = self.dialect.encode_bool(*b);
                self.sql.push_str(&encoded);
            }
            Value::Timestamp(secs) => {
                let encoded = self.dialect.encode_timestamp(*secs);
                self.sql.push_str(&encoded);
            }
            Value::String(_) | Value::Int(_) | Value::Enum(_) => self.add_param(value.clone()),
        }
    }

    pub(crate) fn enter(&mut self) -> Result<(), CompileError> {
        self.depth += 1;
        if self.depth > MAX_EXPRESSION_DEPTH {
            return Err(CompileError::TooDeep {
                max: MAX_EXPRESSION_DEPTH,
            });
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}
