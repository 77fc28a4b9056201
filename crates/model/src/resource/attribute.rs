use crate::{core::value_type::ValueType, resource::registry::RegistryError};
use filter_syntax::ast::operator::Operator;
use serde::Serialize;
use std::collections::BTreeSet;

/// One filterable field of a resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSpec {
    /// Name used in filter expressions.
    pub name: String,
    /// Column the attribute lives in; defaults to `name`.
    pub column: String,
    pub value_type: ValueType,
    pub allowed_operators: BTreeSet<Operator>,
    /// Accepted values for ENUM attributes, empty otherwise.
    pub enum_values: Vec<String>,
}

impl AttributeSpec {
    pub fn new(name: &str, value_type: ValueType) -> Self {
        AttributeSpec {
            name: name.to_string(),
            column: name.to_string(),
            value_type,
            allowed_operators: value_type.default_operators().into_iter().collect(),
            enum_values: Vec::new(),
        }
    }

    pub fn string(name: &str) -> Self {
        Self::new(name, ValueType::String)
    }

    pub fn int(name: &str) -> Self {
        Self::new(name, ValueType::Int)
    }

    pub fn boolean(name: &str) -> Self {
        Self::new(name, ValueType::Bool)
    }

    pub fn timestamp(name: &str) -> Self {
        Self::new(name, ValueType::Timestamp)
    }

    pub fn enumeration(name: &str, values: &[&str]) -> Self {
        let mut spec = Self::new(name, ValueType::Enum);
        spec.enum_values = values.iter().map(|v| v.to_string()).collect();
        spec
    }

    pub fn with_column(mut self, column: &str) -> Self {
        self.column = column.to_string();
        self
    }

    /// Replaces the default operator set.
    pub fn with_operators(mut self, operators: &[Operator]) -> Self {
        self.allowed_operators = operators.iter().copied().collect();
        self
    }

    pub fn allows(&self, op: Operator) -> bool {
        self.allowed_operators.contains(&op)
    }

    /// Checks the declaration itself, independent of any registry.
    pub fn check(&self) -> Result<(), RegistryError> {
        if let Some(op) = self
            .allowed_operators
            .iter()
            .find(|op| !self.value_type.supports(**op))
        {
            return Err(RegistryError::UnsupportedOperator {
                attribute: self.name.clone(),
                op: *op,
                value_type: self.value_type,
            });
        }

        if self.value_type == ValueType::Enum && self.enum_values.is_empty() {
            return Err(RegistryError::MissingEnumValues {
                attribute: self.name.clone(),
            });
        }

        Ok(())
    }
}
