//! Cursor and character-class helpers for the tokenizer.

use wombat_ast::TokenKind;

use super::lexer::{LexContext, Tokenizer};
use super::mode::LexMode;

// =============================================================================
// Character Classes
// =============================================================================

/// Characters that may appear in a tag name, attribute key or value run.
pub(super) const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Whitespace skipped between tokens.
pub(super) const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// The delimiter kind for `c` under `mode`, if it is one.
pub(super) const fn delimiter_kind(mode: LexMode, c: char) -> Option<TokenKind> {
    let mode_specific = match (mode, c) {
        (LexMode::Xml, '<') => Some(TokenKind::OpenAngle),
        (LexMode::Xml, '>') => Some(TokenKind::CloseAngle),
        (LexMode::Xml, '/') => Some(TokenKind::Terminator),
        (LexMode::Json, '{') => Some(TokenKind::OpenCurly),
        (LexMode::Json, '}') => Some(TokenKind::CloseCurly),
        (LexMode::Json, '[') => Some(TokenKind::OpenSquare),
        (LexMode::Json, ']') => Some(TokenKind::CloseSquare),
        _ => None,
    };
    if mode_specific.is_some() {
        return mode_specific;
    }
    match c {
        ',' => Some(TokenKind::Comma),
        ':' => Some(TokenKind::Colon),
        '=' => Some(TokenKind::Equal),
        '"' => Some(TokenKind::Quote),
        '\'' => Some(TokenKind::SingleQuote),
        _ => None,
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl Tokenizer {
    /// Consume the next input character, advancing the cursor and
    /// recording the character as context for the next identifier run.
    ///
    /// Returns None at end of input; the context is left unchanged then.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        self.context = LexContext::after(c);
        Some(c)
    }

    /// The next input character, without consuming it.
    pub(super) fn peek(&self) -> Option<char> {
        self.input[self.current_pos..].chars().next()
    }

    /// Skip space, tab, CR and LF.
    pub(super) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            let _ = self.consume();
        }
    }

    /// Consume a run of identifier characters and return it.
    pub(super) fn consume_identifier_run(&mut self) -> &str {
        let start = self.current_pos;
        while self.peek().is_some_and(is_identifier_char) {
            let _ = self.consume();
        }
        &self.input[start..self.current_pos]
    }
}
