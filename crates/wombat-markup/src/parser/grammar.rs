use std::mem;

use wombat_ast::{
    Attribute, AttributeKey, AttributeValue, Document, ElementTag, ElementValue, QuoteStyle,
    Token, TokenKind,
};
use wombat_common::warning::warn_once;

use super::error::ParseError;
use crate::tokenizer::Tokenizer;

/// Default limit on element nesting. Deeper elements are discarded with
/// [`ParseError::NestingTooDeep`] rather than recursed into.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser with two tokens of lookahead.
///
/// The parser pulls tokens from its [`Tokenizer`] on demand and builds a
/// [`Document`]. Structural errors do not stop the parse: each one is
/// recorded, the element being built is dropped, and parsing resumes from
/// wherever the lookahead sits.
pub struct Parser {
    tokenizer: Tokenizer,

    /// The token under the cursor.
    current_token: Token,

    /// The next, not yet consumed, token.
    peek_token: Token,

    /// Structural errors in the order they were found.
    errors: Vec<ParseError>,

    /// If true, echo each error through the shared warning system.
    diagnostics: bool,

    /// Number of elements currently open.
    depth: usize,

    /// Elements nested deeper than this are skipped.
    max_depth: usize,
}

impl Parser {
    /// Create a parser and prime the current and lookahead tokens.
    #[must_use]
    pub fn new(tokenizer: Tokenizer) -> Self {
        let mut parser = Self {
            tokenizer,
            current_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
            diagnostics: false,
            depth: 0,
            max_depth: MAX_NESTING_DEPTH,
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Report each structural error as a warning as it is found.
    #[must_use]
    pub const fn with_diagnostics(mut self) -> Self {
        self.diagnostics = true;
        self
    }

    /// Change how deeply elements may nest before they are discarded.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Structural errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parse the whole input and return the tree along with every error.
    #[must_use]
    pub fn run_with_errors(mut self) -> (Document, Vec<ParseError>) {
        let document = self.parse_document();
        (document, self.errors)
    }

    /// Parse elements until end of input.
    ///
    /// Each `<` followed by a tag name starts a top-level element. Elements
    /// that fail to parse are skipped; the document is always returned,
    /// possibly empty.
    pub fn parse_document(&mut self) -> Document {
        let mut document = Document::new();

        while !self.current_token.is_eof() {
            if self.current_token.is(TokenKind::OpenAngle) && self.expect_peek(TokenKind::Tag) {
                if let Some(element) = self.parse_tag_statement() {
                    document.elements.push(element);
                }
                // A failed element can stop on the `<` of the next one.
                if !self.current_token.is(TokenKind::OpenAngle) {
                    self.next_token();
                }
            } else {
                self.next_token();
            }
        }

        document
    }

    /// Parse one element. The current token is its Tag.
    ///
    /// On success the current token is the element's final `>`. An element
    /// past the nesting limit is reported and skipped as a whole, leaving the
    /// cursor on its final `>` so the parent can carry on.
    fn parse_tag_statement(&mut self) -> Option<ElementTag> {
        if self.depth >= self.max_depth {
            let tag = self.current_token.literal.clone();
            self.record(ParseError::NestingTooDeep {
                tag,
                limit: self.max_depth,
            });
            self.skip_element();
            return None;
        }

        self.depth += 1;
        let element = self.parse_element();
        self.depth -= 1;
        element
    }

    fn parse_element(&mut self) -> Option<ElementTag> {
        let name = self.current_token.clone();
        let mut attributes = Vec::new();

        while self.expect_peek(TokenKind::Key) {
            if let Some(attr) = self.parse_attribute() {
                attributes.push(attr);
            }
        }

        // <tag key="value"/>
        if self.expect_peek(TokenKind::Terminator) {
            if !self.expect_peek(TokenKind::CloseAngle) {
                let found = self.peek_token.clone();
                self.record(ParseError::MissingSelfClosingAngle {
                    tag: name.literal,
                    found,
                });
                return None;
            }
            return Some(ElementTag {
                name,
                attributes,
                children: Vec::new(),
                value: None,
                closing_token: self.current_token.clone(),
            });
        }

        if !self.expect_peek(TokenKind::CloseAngle) {
            let found = self.peek_token.clone();
            self.record(ParseError::MissingCloseAngle {
                tag: name.literal,
                found,
            });
            return None;
        }

        let mut children = Vec::new();
        let mut value = None;
        let mut closing_opened = false;

        if self.expect_peek(TokenKind::Value) {
            value = Some(ElementValue::from_token(self.current_token.clone()));
        } else {
            while self.expect_peek(TokenKind::OpenAngle) {
                // `</` closes this element; only a tag name opens a child.
                if self.peek_token.is(TokenKind::Terminator) {
                    closing_opened = true;
                    break;
                }
                if !self.expect_peek(TokenKind::Tag) {
                    let found = self.peek_token.clone();
                    self.record(ParseError::UnexpectedContent {
                        tag: name.literal,
                        found,
                    });
                    return None;
                }
                if let Some(child) = self.parse_tag_statement() {
                    children.push(child);
                }
            }
        }

        if !closing_opened && !self.expect_peek(TokenKind::OpenAngle) {
            let found = self.peek_token.clone();
            self.record(ParseError::MissingClosingOpenAngle {
                tag: name.literal,
                found,
            });
            return None;
        }

        if !self.expect_peek(TokenKind::Terminator) || !self.expect_peek(TokenKind::Tag) {
            let found = self.peek_token.clone();
            self.record(ParseError::MissingClosingTag {
                tag: name.literal,
                found,
            });
            return None;
        }

        let closing_token = self.current_token.clone();
        if closing_token.literal != name.literal {
            self.record(ParseError::MismatchedClosingTag {
                expected: name.literal,
                found: closing_token.literal,
            });
            return None;
        }

        if !self.expect_peek(TokenKind::CloseAngle) {
            let found = self.peek_token.clone();
            self.record(ParseError::MissingClosingTagAngle {
                tag: name.literal,
                found,
            });
            return None;
        }

        Some(ElementTag {
            name,
            attributes,
            children,
            value,
            closing_token,
        })
    }

    /// Parse `key="value"`. The current token is the Key.
    fn parse_attribute(&mut self) -> Option<Attribute> {
        let key = AttributeKey::from_token(self.current_token.clone());

        if !self.expect_peek(TokenKind::Equal) {
            let found = self.peek_token.clone();
            self.record(ParseError::ExpectedEqual {
                key: key.value,
                found,
            });
            return None;
        }

        let Some(opening) = self.expect_quote() else {
            let found = self.peek_token.clone();
            self.record(ParseError::UnquotedAttributeValue {
                key: key.value,
                found,
            });
            return None;
        };

        if !self.expect_peek(TokenKind::Value) {
            let found = self.peek_token.clone();
            self.record(ParseError::ExpectedAttributeValue {
                key: key.value,
                found,
            });
            return None;
        }
        let value = AttributeValue::from_token(self.current_token.clone());

        let Some(closing) = self.expect_quote() else {
            let found = self.peek_token.clone();
            self.record(ParseError::MissingClosingQuote {
                key: key.value,
                found,
            });
            return None;
        };

        if closing != opening {
            self.record(ParseError::MismatchedQuotes {
                value: value.value,
                opening,
                closing,
            });
            return None;
        }

        Some(Attribute {
            key,
            value,
            quote: opening,
        })
    }

    /// Consume the rest of an element without building it. The current token
    /// is its Tag; on return it is the `>` that closes it, or EOF.
    ///
    /// Open and close sequences are counted, not matched by name.
    fn skip_element(&mut self) {
        let mut open = 1usize;
        while !self.peek_token.is_eof() {
            self.next_token();
            match self.current_token.kind {
                TokenKind::OpenAngle if self.peek_token.is(TokenKind::Tag) => open += 1,
                TokenKind::OpenAngle if self.peek_token.is(TokenKind::Terminator) => {
                    self.next_token();
                    open -= 1;
                }
                TokenKind::Terminator if self.peek_token.is(TokenKind::CloseAngle) => open -= 1,
                _ => {}
            }
            if open == 0 {
                if self.peek_token.is(TokenKind::Tag) {
                    self.next_token();
                }
                let _ = self.expect_peek(TokenKind::CloseAngle);
                return;
            }
        }
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    fn next_token(&mut self) {
        let next = self.tokenizer.next_token();
        self.current_token = mem::replace(&mut self.peek_token, next);
    }

    /// If the lookahead has the given kind, consume it and return true.
    /// Otherwise leave it in place for the caller to report.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token.is(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume a quote of either kind, returning which one it was.
    fn expect_quote(&mut self) -> Option<QuoteStyle> {
        let style = QuoteStyle::from_kind(self.peek_token.kind)?;
        self.next_token();
        Some(style)
    }

    fn record(&mut self, error: ParseError) {
        if self.diagnostics {
            warn_once("Parser", &error.to_string());
        }
        self.errors.push(error);
    }
}
