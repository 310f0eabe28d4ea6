//! A spec-compliant GraphQL lexer, recursive-descent parser and direct AST.
//!
//! Grounded on the teacher's `apollo-parser` crate: a cursor-driven lexer, a
//! grammar-file-per-production parser, and a single hand-written `Error`
//! type with no `Display` derive (matching the teacher's own
//! `apollo-parser::Error`), generalized to build a direct (non-CST) AST with
//! comment attribution instead of a rowan syntax tree.

pub mod ast;
mod error;
mod lexer;
mod parser;
mod source;

pub use error::{Error, ErrorKind, ErrorLocation};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{parse, ParseOptions};
pub use source::{Position, Source};
