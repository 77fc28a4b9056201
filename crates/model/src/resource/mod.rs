pub mod attribute;
pub mod builtin;
pub mod registry;
