//! Raw literal → typed value, per the attribute's declared type.

use crate::{
    core::{value::Value, value_type::ValueType},
    filter::errors::SemanticError,
    resource::attribute::AttributeSpec,
};
use chrono::DateTime;
use filter_syntax::ast::literal::{Literal, LiteralExpr};

pub fn coerce(spec: &AttributeSpec, literal: &LiteralExpr) -> Result<Value, SemanticError> {
    let mismatch = |detail: String| SemanticError::TypeMismatch {
        field: spec.name.clone(),
        expected: spec.value_type,
        detail,
        span: literal.span,
    };

    match (spec.value_type, &literal.value) {
        (ValueType::String, Literal::String(s)) => Ok(Value::String(s.clone())),
        (ValueType::Int, Literal::Integer(n)) => Ok(Value::Int(*n)),
        (ValueType::Bool, Literal::Boolean(b)) => Ok(Value::Bool(*b)),
        (ValueType::Enum, Literal::String(s)) => {
            if spec.enum_values.iter().any(|v| v == s) {
                Ok(Value::Enum(s.clone()))
            } else {
                Err(mismatch(format!(
                    "{s:?} is not one of {}",
                    spec.enum_values.join(", ")
                )))
            }
        }
        (ValueType::Timestamp, Literal::Integer(secs)) => Ok(Value::Timestamp(*secs)),
        (ValueType::Timestamp, Literal::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Value::Timestamp(dt.timestamp()))
            .map_err(|e| mismatch(format!("{s:?} is not an RFC 3339 timestamp ({e})"))),
        (_, other) => Err(mismatch(format!("found {} {other}", other.kind_name()))),
    }
}
