//! Syntax front end for resource filters: a pest-driven lexer, a
//! recursive-descent parser and the untyped AST it produces.
//!
//! ```text
//! username == "alice" && role in ("ADMIN", "HOST")
//!     -> Lexer (tokens)
//!     -> Parser (FilterExpr)
//! ```
//!
//! Literals are kept as raw tokens; typing them against a resource's
//! attributes happens later, in the semantic validator.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;

pub use parser::{MAX_EXPRESSION_DEPTH, parse};
