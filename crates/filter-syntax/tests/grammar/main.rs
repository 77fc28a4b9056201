//! Parser tests
//!
//! These tests drive `filter_syntax::parse` end to end: tokens in, AST or
//! positioned error out.

mod errors;
mod expressions;
mod helpers;
