//! Filterable attributes of the note service's own resource types.

use crate::resource::{
    attribute::AttributeSpec,
    registry::{AttributeRegistry, RegistryError},
};
use lazy_static::lazy_static;

const ROW_STATUS: &[&str] = &["NORMAL", "ARCHIVED"];

lazy_static! {
    static ref BUILTIN_RESOURCES: Vec<(&'static str, Vec<AttributeSpec>)> = vec![
        ("user", build_user_attributes()),
        ("memo", build_memo_attributes()),
        ("attachment", build_attachment_attributes()),
        ("subscription", build_subscription_attributes()),
    ];
}

impl AttributeRegistry {
    /// Registry holding `user`, `memo`, `attachment` and `subscription`.
    pub fn builtin() -> Result<AttributeRegistry, RegistryError> {
        let mut registry = AttributeRegistry::new();
        for (resource, specs) in BUILTIN_RESOURCES.iter() {
            registry.register(resource, specs.clone())?;
        }
        Ok(registry)
    }
}

fn build_user_attributes() -> Vec<AttributeSpec> {
    vec![
        AttributeSpec::int("id"),
        AttributeSpec::string("username"),
        AttributeSpec::enumeration("role", &["HOST", "ADMIN", "USER"]),
        AttributeSpec::string("email"),
        AttributeSpec::string("nickname"),
        AttributeSpec::string("description"),
        AttributeSpec::enumeration("row_status", ROW_STATUS),
        AttributeSpec::timestamp("created_ts"),
        AttributeSpec::timestamp("updated_ts"),
    ]
}

fn build_memo_attributes() -> Vec<AttributeSpec> {
    vec![
        AttributeSpec::int("id"),
        AttributeSpec::string("uid"),
        AttributeSpec::int("creator_id"),
        AttributeSpec::string("content"),
        AttributeSpec::enumeration("visibility", &["PUBLIC", "PROTECTED", "PRIVATE"]),
        AttributeSpec::boolean("pinned"),
        AttributeSpec::enumeration("row_status", ROW_STATUS),
        AttributeSpec::timestamp("created_ts"),
        AttributeSpec::timestamp("updated_ts"),
    ]
}

fn build_attachment_attributes() -> Vec<AttributeSpec> {
    vec![
        AttributeSpec::int("id"),
        AttributeSpec::string("uid"),
        AttributeSpec::int("creator_id"),
        AttributeSpec::string("filename"),
        AttributeSpec::string("type"),
        AttributeSpec::int("size"),
        AttributeSpec::int("memo_id"),
        AttributeSpec::timestamp("created_ts"),
    ]
}

fn build_subscription_attributes() -> Vec<AttributeSpec> {
    vec![
        AttributeSpec::int("id"),
        AttributeSpec::string("endpoint"),
        AttributeSpec::string("username"),
        AttributeSpec::string("email"),
    ]
}
