use std::str::FromStr;

use strum_macros::Display;
use wombat_ast::{Token, TokenKind};

use super::helpers::{delimiter_kind, is_identifier_char};
use super::mode::{LexMode, TokenizerError};

/// What the most recently consumed character says about the next
/// identifier run.
///
/// Updated on every consumed character, whitespace included, so a run is
/// classified by the character that sits immediately before it in the
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LexContext {
    /// Start of input, whitespace, or any character with no special meaning.
    Default,
    /// Just read `<`: the run is an element name.
    AfterOpenAngle,
    /// Just read `>`: the run is element text.
    AfterCloseAngle,
    /// Just read `"` or `'`: the run is an attribute value.
    AfterQuote,
    /// Just read `/`: the run is a closing tag name.
    AfterTerminator,
}

impl LexContext {
    /// The context established by consuming `c`.
    #[must_use]
    pub const fn after(c: char) -> Self {
        match c {
            '<' => Self::AfterOpenAngle,
            '>' => Self::AfterCloseAngle,
            '"' | '\'' => Self::AfterQuote,
            '/' => Self::AfterTerminator,
            _ => Self::Default,
        }
    }

    /// The kind an identifier run takes in this context.
    #[must_use]
    pub const fn identifier_kind(self) -> TokenKind {
        match self {
            Self::AfterOpenAngle | Self::AfterTerminator => TokenKind::Tag,
            Self::AfterCloseAngle | Self::AfterQuote => TokenKind::Value,
            Self::Default => TokenKind::Key,
        }
    }
}

/// Demand-driven tokenizer over an in-memory buffer.
///
/// Each call to [`Tokenizer::next_token`] skips whitespace and produces
/// exactly one token. Classification is total: characters no rule accepts
/// come back as [`TokenKind::Illegal`] tokens rather than errors, and once
/// the input is exhausted every call returns [`TokenKind::Eof`].
///
/// The tokenizer is also an [`Iterator`] that yields every token up to and
/// including the first EOF.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pub(super) mode: LexMode,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) context: LexContext,
    /// Set once the iterator has yielded EOF.
    pub(super) exhausted: bool,
}

impl Tokenizer {
    /// Create a tokenizer over `input` in the given mode.
    #[must_use]
    pub fn new(input: impl Into<String>, mode: LexMode) -> Self {
        Self {
            mode,
            input: input.into(),
            current_pos: 0,
            context: LexContext::Default,
            exhausted: false,
        }
    }

    /// Create a tokenizer from a textual mode selector (`"xml"` or `"json"`).
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::UnsupportedMode`] for any other selector,
    /// before a single token is produced.
    pub fn with_selector(input: impl Into<String>, selector: &str) -> Result<Self, TokenizerError> {
        let mode = LexMode::from_str(selector)
            .map_err(|_| TokenizerError::UnsupportedMode(selector.to_string()))?;
        Ok(Self::new(input, mode))
    }

    /// Create a markup tokenizer.
    #[must_use]
    pub fn xml(input: impl Into<String>) -> Self {
        Self::new(input, LexMode::Xml)
    }

    /// The mode this tokenizer was built with.
    #[must_use]
    pub const fn mode(&self) -> LexMode {
        self.mode
    }

    /// The context the next identifier run would be classified under.
    #[must_use]
    pub const fn context(&self) -> LexContext {
        self.context
    }

    /// Byte offset of the cursor into the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current_pos
    }

    /// Produce the next token, advancing the cursor past it.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(c) = self.peek() else {
            return Token::eof();
        };

        if let Some(kind) = delimiter_kind(self.mode, c) {
            let _ = self.consume();
            return Token::from_char(kind, c);
        }

        if is_identifier_char(c) {
            // Classified before the run is consumed: the context still
            // reflects the character in front of it.
            let kind = self.context.identifier_kind();
            let literal = self.consume_identifier_run().to_string();
            return Token::new(kind, literal);
        }

        let _ = self.consume();
        Token::from_char(TokenKind::Illegal, c)
    }

    /// Drain the tokenizer into a vector ending with the EOF token.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.collect()
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        self.exhausted = token.is_eof();
        Some(token)
    }
}
