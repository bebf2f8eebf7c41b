use core::fmt;

use serde::Serialize;
use strum_macros::Display;

/// The closed set of lexical categories the tokenizer can produce.
///
/// Delimiter kinds always carry their single source character as the
/// token literal; identifier kinds (`Tag`, `Key`, `Value`) carry the whole
/// matched run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum TokenKind {
    /// A character no lexing rule accepts.
    Illegal,
    /// End of input. Returned repeatedly once reached.
    #[strum(serialize = "EOF")]
    Eof,

    /// Element name, either opening (`<name`) or closing (`</name`).
    Tag,
    /// Attribute name.
    Key,
    /// Attribute value or element text content.
    Value,

    /// `<`
    #[strum(serialize = "'<'")]
    OpenAngle,
    /// `>`
    #[strum(serialize = "'>'")]
    CloseAngle,
    /// `/`
    #[strum(serialize = "'/'")]
    Terminator,

    /// `{`, produced only when lexing JSON.
    #[strum(serialize = "'{{'")]
    OpenCurly,
    /// `}`, produced only when lexing JSON.
    #[strum(serialize = "'}}'")]
    CloseCurly,
    /// `[`, produced only when lexing JSON.
    #[strum(serialize = "'['")]
    OpenSquare,
    /// `]`, produced only when lexing JSON.
    #[strum(serialize = "']'")]
    CloseSquare,

    /// `,`
    #[strum(serialize = "','")]
    Comma,
    /// `:`
    #[strum(serialize = "':'")]
    Colon,
    /// `=`
    #[strum(serialize = "'='")]
    Equal,
    /// `"`
    #[strum(serialize = "'\"'")]
    Quote,
    /// `'`
    #[strum(serialize = "\"'\"")]
    SingleQuote,
}

impl TokenKind {
    /// Returns true for the kinds whose literal is an identifier run.
    #[must_use]
    pub const fn is_identifier(self) -> bool {
        matches!(self, Self::Tag | Self::Key | Self::Value)
    }
}

/// A classified lexical unit: its kind plus the exact source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The lexical category.
    pub kind: TokenKind,
    /// The source substring this token was read from.
    pub literal: String,
}

impl Token {
    /// Create a token from a kind and its literal text.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// Create a single-character token, the shape every delimiter has.
    #[must_use]
    pub fn from_char(kind: TokenKind, c: char) -> Self {
        Self {
            kind,
            literal: String::from(c),
        }
    }

    /// Create the end-of-input token.
    #[must_use]
    pub const fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }

    /// Returns true if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_identifier() || self.kind == TokenKind::Illegal {
            write!(f, "{}({:?})", self.kind, self.literal)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
