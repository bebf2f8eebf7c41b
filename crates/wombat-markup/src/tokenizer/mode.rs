use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Which delimiter set the tokenizer recognizes.
///
/// `Xml` lexes `<`, `>` and `/`; `Json` lexes `{`, `}`, `[` and `]`. Both
/// modes share `,`, `:`, `=` and the two quote characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LexMode {
    /// Markup input.
    #[default]
    Xml,
    /// JSON input.
    Json,
}

/// Failures raised while constructing a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// The mode selector names no supported mode.
    #[error("invalid lexer type {0:?} (expected \"xml\" or \"json\")")]
    UnsupportedMode(String),
}
