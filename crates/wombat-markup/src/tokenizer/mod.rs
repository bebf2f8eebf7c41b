//! Markup tokenizer module.
//!
//! Converts raw text into classified tokens one at a time. Identifier runs
//! are classified by the character consumed just before them, tracked as a
//! [`LexContext`].

/// Cursor and character-class helpers.
pub mod helpers;
/// Lexing modes and construction errors.
pub mod mode;
/// Tokenizer implementation.
pub mod lexer;

pub use lexer::{LexContext, Tokenizer};
pub use mode::{LexMode, TokenizerError};
