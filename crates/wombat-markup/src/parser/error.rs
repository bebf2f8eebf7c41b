use thiserror::Error;
use wombat_ast::{QuoteStyle, Token};

/// A structural defect found while building the tree.
///
/// Each variant names the element or attribute being built and, where it
/// applies, the lookahead token that failed the expectation. The
/// `Display` form is the human-readable message reported to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `<tag .../` not followed by `>`.
    #[error("missing closing angle at element tag termination for <{tag}/>, got {found}")]
    MissingSelfClosingAngle {
        /// The element name.
        tag: String,
        /// The offending lookahead.
        found: Token,
    },

    /// The opening tag was not ended with `>`.
    #[error("expected closing angle for tag <{tag}>, got {found}")]
    MissingCloseAngle {
        /// The element name.
        tag: String,
        /// The offending lookahead.
        found: Token,
    },

    /// After `<` inside an element, neither a child tag nor `/` followed.
    #[error("expected child element or closing tag inside <{tag}>, got {found}")]
    UnexpectedContent {
        /// The element name.
        tag: String,
        /// The offending lookahead.
        found: Token,
    },

    /// The content of an element was not followed by `<`.
    #[error("expected open angle to begin closing tag for <{tag}>, got {found}")]
    MissingClosingOpenAngle {
        /// The element name.
        tag: String,
        /// The offending lookahead.
        found: Token,
    },

    /// `<` was not followed by `/name`.
    #[error("no closing tag for element <{tag}>, got {found}")]
    MissingClosingTag {
        /// The element name.
        tag: String,
        /// The offending lookahead.
        found: Token,
    },

    /// `</name>` names a different element than the one being closed.
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedClosingTag {
        /// The opening name.
        expected: String,
        /// The closing name.
        found: String,
    },

    /// `</name` was not followed by `>`.
    #[error("expected closing angle after </{tag}, got {found}")]
    MissingClosingTagAngle {
        /// The element name.
        tag: String,
        /// The offending lookahead.
        found: Token,
    },

    /// An attribute key was not followed by `=`.
    #[error("expected '=' after attribute '{key}', got {found}")]
    ExpectedEqual {
        /// The attribute key.
        key: String,
        /// The offending lookahead.
        found: Token,
    },

    /// An attribute value did not start with a quote.
    #[error("attribute values must be wrapped in quotes: '{key}' got {found}")]
    UnquotedAttributeValue {
        /// The attribute key.
        key: String,
        /// The offending lookahead.
        found: Token,
    },

    /// No value between an attribute's quotes.
    #[error("expected value for attribute '{key}', got {found}")]
    ExpectedAttributeValue {
        /// The attribute key.
        key: String,
        /// The offending lookahead.
        found: Token,
    },

    /// An attribute value was opened but never closed.
    #[error("attribute '{key}' missing closing quote, got {found}")]
    MissingClosingQuote {
        /// The attribute key.
        key: String,
        /// The offending lookahead.
        found: Token,
    },

    /// An attribute value was opened with one quote kind and closed with
    /// the other.
    #[error("mismatching quotes for value '{value}': opened with {} closed with {}", .opening.as_char(), .closing.as_char())]
    MismatchedQuotes {
        /// The attribute value.
        value: String,
        /// The quote that opened the value.
        opening: QuoteStyle,
        /// The quote that closed it.
        closing: QuoteStyle,
    },

    /// An element opened deeper than the parser's nesting limit.
    #[error("element <{tag}> exceeds the nesting limit of {limit}")]
    NestingTooDeep {
        /// The element name.
        tag: String,
        /// The limit in force.
        limit: usize,
    },
}

impl ParseError {
    /// Returns true for a quote-kind mismatch on an attribute value.
    #[must_use]
    pub const fn is_quote_mismatch(&self) -> bool {
        matches!(self, Self::MismatchedQuotes { .. })
    }
}
