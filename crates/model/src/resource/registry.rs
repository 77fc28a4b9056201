use crate::{core::value_type::ValueType, resource::attribute::AttributeSpec};
use filter_syntax::ast::operator::Operator;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("resource type '{0}' is already registered")]
    DuplicateResource(String),

    #[error("attribute '{attribute}' is declared twice for resource type '{resource}'")]
    DuplicateAttribute { resource: String, attribute: String },

    #[error("attribute '{attribute}' of type {value_type} cannot allow operator '{op}'")]
    UnsupportedOperator {
        attribute: String,
        op: Operator,
        value_type: ValueType,
    },

    #[error("enum attribute '{attribute}' declares no values")]
    MissingEnumValues { attribute: String },
}

/// Why a registry lookup came back empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown resource type '{resource}'")]
    UnknownResource { resource: String },

    #[error("unknown field '{field}' for resource type '{resource}'")]
    UnknownField { resource: String, field: String },
}

/// Attributes of one resource type, in declaration order.
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub name: String,
    attributes: Vec<AttributeSpec>,
    by_name: HashMap<String, usize>,
}

impl ResourceSchema {
    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    pub fn get(&self, field: &str) -> Option<&AttributeSpec> {
        self.by_name.get(field).map(|&i| &self.attributes[i])
    }
}

/// Filterable attributes per resource type.
///
/// Filled once at startup and only read afterwards, so a shared reference
/// can serve any number of concurrent compilations.
#[derive(Debug, Clone, Default)]
pub struct AttributeRegistry {
    resources: HashMap<String, ResourceSchema>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        AttributeRegistry {
            resources: HashMap::new(),
        }
    }

    pub fn register(
        &mut self,
        resource: &str,
        specs: Vec<AttributeSpec>,
    ) -> Result<(), RegistryError> {
        if self.resources.contains_key(resource) {
            return Err(RegistryError::DuplicateResource(resource.to_string()));
        }

        let mut by_name = HashMap::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            spec.check()?;
            if by_name.insert(spec.name.clone(), i).is_some() {
                return Err(RegistryError::DuplicateAttribute {
                    resource: resource.to_string(),
                    attribute: spec.name.clone(),
                });
            }
        }

        debug!(resource, attributes = specs.len(), "registered resource type");
        self.resources.insert(
            resource.to_string(),
            ResourceSchema {
                name: resource.to_string(),
                attributes: specs,
                by_name,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, resource: &str, field: &str) -> Result<&AttributeSpec, LookupError> {
        self.schema(resource)?
            .get(field)
            .ok_or_else(|| LookupError::UnknownField {
                resource: resource.to_string(),
                field: field.to_string(),
            })
    }

    pub fn schema(&self, resource: &str) -> Result<&ResourceSchema, LookupError> {
        self.resources
            .get(resource)
            .ok_or_else(|| LookupError::UnknownResource {
                resource: resource.to_string(),
            })
    }

    /// Attributes of `resource` in registration order.
    pub fn attributes(&self, resource: &str) -> Result<&[AttributeSpec], LookupError> {
        self.schema(resource).map(ResourceSchema::attributes)
    }

    /// Registered resource types, sorted.
    pub fn resource_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
