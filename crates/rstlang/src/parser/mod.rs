//! Language-pack file parser.
//!
//! This module parses `.rstlang` files: a `directives` section and a `roles`
//! section, each listing `name = canonical;` entries. The parser produces an
//! AST that the registry turns into a [`LanguageMapping`](crate::LanguageMapping),
//! and that external tooling can inspect directly.

pub mod ast;
pub mod error;
mod file;

pub use ast::*;
pub use error::ParseError;
pub use file::parse_file;
