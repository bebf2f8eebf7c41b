//! Token model and document tree for the Wombat markup parser.
//!
//! # Design
//!
//! The tree is strictly nested: a [`Document`] owns its top-level
//! [`ElementTag`]s, and every element owns its attributes, value and
//! children by value. Nodes are built once by the parser and are not
//! mutated afterwards.
//!
//! [`Node`] is a borrowed view over the closed family of node types, used
//! wherever code needs to treat any node uniformly (tree walks, rendering).

use core::fmt::Write as _;

use serde::Serialize;

/// Token kinds and tokens shared by the tokenizer and the tree.
pub mod token;

pub use token::{Token, TokenKind};

/// The root of a parsed document.
///
/// Element order is document order. An empty document is legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Top-level elements in the order they appeared.
    pub elements: Vec<ElementTag>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// The first element's name, or an empty string for an empty document.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.elements
            .first()
            .map_or("", |element| element.name.literal.as_str())
    }

    /// Returns true if the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Depth-first, pre-order walk over every node in the document.
    ///
    /// The callback receives the node and its depth (top-level elements are
    /// at depth 0; an element's attributes and value sit one level below it).
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(Node<'a>, usize)) {
        for element in &self.elements {
            element.walk(0, visit);
        }
    }

    /// Depth-first search for the first element with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ElementTag> {
        self.elements.iter().find_map(|element| element.find(name))
    }
}

/// One markup element: `<name attr="v">value</name>`, `<name>children</name>`
/// or `<name attr="v"/>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementTag {
    /// The opening tag-name token.
    pub name: Token,

    /// Attributes in declaration order. Duplicate keys are kept.
    pub attributes: Vec<Attribute>,

    /// Nested elements. Never non-empty when `value` is present.
    pub children: Vec<ElementTag>,

    /// Leaf text content.
    pub value: Option<ElementValue>,

    /// The token that closed the element: the repeated tag name for
    /// `<t>...</t>`, or the `>` of a self-closing `<t/>`.
    pub closing_token: Token,
}

impl ElementTag {
    /// The element's tag name.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.name.literal
    }

    /// The element's name literal.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        &self.name.literal
    }

    /// Returns true if the element was closed inline (`<t/>`).
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.closing_token.kind == TokenKind::CloseAngle
    }

    /// The text content, if the element has one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.value.as_ref().map(|value| value.value.as_str())
    }

    /// The value of the first attribute with the given key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key.value == key)
            .map(|attr| attr.value.value.as_str())
    }

    /// Returns true if the element has neither children nor a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.value.is_none()
    }

    fn find(&self, name: &str) -> Option<&Self> {
        if self.tag_name() == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    fn walk<'a>(&'a self, depth: usize, visit: &mut impl FnMut(Node<'a>, usize)) {
        visit(Node::Tag(self), depth);
        for attr in &self.attributes {
            visit(Node::Attribute(attr), depth + 1);
            visit(Node::AttributeKey(&attr.key), depth + 2);
            visit(Node::AttributeValue(&attr.value), depth + 2);
        }
        if let Some(value) = &self.value {
            visit(Node::Value(value), depth + 1);
        }
        for child in &self.children {
            child.walk(depth + 1, visit);
        }
    }
}

/// Which quote character delimited an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuoteStyle {
    /// `"value"`
    Double,
    /// `'value'`
    Single,
}

impl QuoteStyle {
    /// Map a quote token kind to its style. Other kinds have none.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Quote => Some(Self::Double),
            TokenKind::SingleQuote => Some(Self::Single),
            _ => None,
        }
    }

    /// The quote character itself.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }
}

/// A `key="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// The attribute name.
    pub key: AttributeKey,
    /// The attribute value.
    pub value: AttributeValue,
    /// The quote style used on both sides of the value.
    pub quote: QuoteStyle,
}

impl Attribute {
    /// Render the pair as it would appear in source.
    #[must_use]
    pub fn token_literal(&self) -> String {
        let q = self.quote.as_char();
        format!("{}={q}{}{q}", self.key.value, self.value.value)
    }
}

/// The name half of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeKey {
    /// The `Key` token.
    pub token: Token,
    /// The decoded key.
    pub value: String,
}

impl AttributeKey {
    /// Build a key node from its token.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

/// The value half of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeValue {
    /// The `Value` token.
    pub token: Token,
    /// The decoded value.
    pub value: String,
}

impl AttributeValue {
    /// Build a value node from its token.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

/// The text content of a leaf element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementValue {
    /// The `Value` token.
    pub token: Token,
    /// The decoded text.
    pub value: String,
}

impl ElementValue {
    /// Build a value node from its token.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

/// A borrowed view of any node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// An element.
    Tag(&'a ElementTag),
    /// An attribute on an element.
    Attribute(&'a Attribute),
    /// An element's text content.
    Value(&'a ElementValue),
    /// The key half of an attribute.
    AttributeKey(&'a AttributeKey),
    /// The value half of an attribute.
    AttributeValue(&'a AttributeValue),
}

impl Node<'_> {
    /// The source text this node was built from.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Tag(tag) => tag.token_literal().to_string(),
            Self::Attribute(attr) => attr.token_literal(),
            Self::Value(value) => value.token.literal.clone(),
            Self::AttributeKey(key) => key.token.literal.clone(),
            Self::AttributeValue(value) => value.token.literal.clone(),
        }
    }
}

/// Render a document as an indented outline, one node per line.
///
/// ```text
/// <person id="7">
///   <name>
///     "Justin"
///   <badge/>
/// ```
#[must_use]
pub fn render_tree(document: &Document) -> String {
    let mut out = String::new();
    document.walk(&mut |node, depth| {
        let prefix = "  ".repeat(depth);
        match node {
            Node::Tag(tag) => {
                let attrs: Vec<String> = tag.attributes.iter().map(Attribute::token_literal).collect();
                let close = if tag.is_self_closing() { "/" } else { "" };
                if attrs.is_empty() {
                    let _ = writeln!(out, "{prefix}<{}{close}>", tag.tag_name());
                } else {
                    let _ = writeln!(out, "{prefix}<{} {}{close}>", tag.tag_name(), attrs.join(" "));
                }
            }
            Node::Value(value) => {
                let _ = writeln!(out, "{prefix}\"{}\"", value.value);
            }
            // Attributes are shown inline on their element.
            Node::Attribute(_) | Node::AttributeKey(_) | Node::AttributeValue(_) => {}
        }
    });
    out
}
