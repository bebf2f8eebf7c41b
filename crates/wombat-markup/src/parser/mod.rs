//! Parser module for tree construction.

/// Structural error types.
pub mod error;
/// Recursive-descent parser implementation.
pub mod grammar;

pub use error::ParseError;
pub use grammar::{MAX_NESTING_DEPTH, Parser};
