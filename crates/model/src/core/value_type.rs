use filter_syntax::ast::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a filterable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    String,
    Int,
    Bool,
    Enum,
    Timestamp,
}

impl ValueType {
    /// Whether `op` may ever be applied to a value of this type.
    pub fn supports(&self, op: Operator) -> bool {
        match op {
            Operator::Contains => *self == ValueType::String,
            Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge => {
                !matches!(self, ValueType::Bool | ValueType::Enum)
            }
            Operator::Eq | Operator::Ne | Operator::In | Operator::NotIn => true,
        }
    }

    /// Operators an attribute of this type gets unless it declares its own.
    pub fn default_operators(&self) -> Vec<Operator> {
        Operator::ALL
            .iter()
            .copied()
            .filter(|op| self.supports(*op))
            .collect()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => write!(f, "STRING"),
            ValueType::Int => write!(f, "INT"),
            ValueType::Bool => write!(f, "BOOL"),
            ValueType::Enum => write!(f, "ENUM"),
            ValueType::Timestamp => write!(f, "TIMESTAMP"),
        }
    }
}
