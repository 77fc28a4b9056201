//! SQL generation for validated resource filters.
//!
//! `FilterCompiler` runs the whole pipeline: parse with `filter_syntax`,
//! validate against a `model` attribute registry, then render through a
//! [`Dialect`](query::dialect::Dialect) into a parameterised WHERE fragment.

pub mod compile;
pub mod error;
pub mod query;

pub use compile::{CompiledFilter, FilterCompiler, compile_expr};
pub use error::{ErrorKind, FilterError};
pub use query::dialect::SqlDriver;
