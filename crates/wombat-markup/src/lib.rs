//! Markup tokenizer and parser for Wombat.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - demand-driven lexing of markup (or JSON delimiters)
//!   into [`Token`]s, classifying identifier runs as tag names, attribute
//!   keys or values from the character immediately before them
//! - **Parser** - two-token-lookahead recursive descent producing a
//!   [`Document`], with matching open/close tags, matching attribute quotes
//!   and accumulated, non-fatal [`ParseError`]s
//!
//! # Not Supported
//!
//! - Entity and character references
//! - Comments, processing instructions and CDATA
//! - Namespaces and schema validation
//! - Streaming input

/// Recursive-descent parser and structural errors.
pub mod parser;
/// Context-sensitive tokenizer.
pub mod tokenizer;

pub use parser::{MAX_NESTING_DEPTH, ParseError, Parser};
pub use tokenizer::{LexContext, LexMode, Tokenizer, TokenizerError};
pub use wombat_ast::{Document, Token, TokenKind};

/// Tokenize and parse a markup string in one call.
///
/// Returns the (possibly partial) document and every structural error
/// found, in order.
#[must_use]
pub fn parse(input: &str) -> (Document, Vec<ParseError>) {
    Parser::new(Tokenizer::xml(input)).run_with_errors()
}
