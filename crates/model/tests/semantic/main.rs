//! Semantic validation tests
//!
//! Filters are parsed with `filter_syntax::parse` and checked against the
//! built-in resource schemas.

mod helpers;
mod validation;
