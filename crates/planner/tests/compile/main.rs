//! Compiler tests
//!
//! Filter strings go through `FilterCompiler` for each driver and the
//! resulting fragment and arguments are checked verbatim.

mod dialects;
mod helpers;
