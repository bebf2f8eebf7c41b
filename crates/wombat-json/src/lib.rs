//! JSON output for Wombat document trees.
//!
//! # Mapping
//!
//! - The document becomes an object keyed by top-level element names, in
//!   document order.
//! - An element with no attributes and no children becomes its text, or
//!   `null` when it has none.
//! - Any other element becomes an object holding its attributes (keys
//!   prefixed with [`JsonOptions::attribute_prefix`]), its children keyed by
//!   name, and its text under [`JsonOptions::text_key`].
//! - Siblings sharing a name collapse into an array, in order.
//!
//! ```text
//! <person id="7"><name>Justin</name><tag>a</tag><tag>b</tag></person>
//!
//! {"person": {"@id": "7", "name": "Justin", "tag": ["a", "b"]}}
//! ```

use serde_json::{Map, Value};
use thiserror::Error;
use wombat_ast::{Document, ElementTag};

/// Options controlling how the tree is mapped to JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    /// Prefix put in front of attribute keys.
    pub attribute_prefix: String,
    /// Key holding an element's text when the element is an object.
    pub text_key: String,
    /// Indent the output.
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            attribute_prefix: "@".to_string(),
            text_key: "#text".to_string(),
            pretty: true,
        }
    }
}

/// Errors raised while writing JSON text.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// `serde_json` failed to encode the value.
    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Map a document to a JSON value.
#[must_use]
pub fn to_json_value(document: &Document, options: &JsonOptions) -> Value {
    let mut object = Map::new();
    insert_elements(&mut object, &document.elements, options);
    Value::Object(object)
}

/// Map a document to JSON text.
///
/// # Errors
///
/// Returns [`SerializeError::Encode`] if `serde_json` fails to write the
/// value.
pub fn to_json_string(document: &Document, options: &JsonOptions) -> Result<String, SerializeError> {
    let value = to_json_value(document, options);
    let text = if options.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Dump the raw tree (tokens included) as JSON, for debugging.
///
/// # Errors
///
/// Returns [`SerializeError::Encode`] if `serde_json` fails to write the
/// tree.
pub fn to_ast_json(document: &Document, pretty: bool) -> Result<String, SerializeError> {
    let text = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(text)
}

fn element_to_value(element: &ElementTag, options: &JsonOptions) -> Value {
    if element.attributes.is_empty() && element.children.is_empty() {
        return element
            .text()
            .map_or(Value::Null, |text| Value::String(text.to_string()));
    }

    let mut object = Map::new();
    // Duplicate keys: the last declaration wins.
    for attr in &element.attributes {
        let key = format!("{}{}", options.attribute_prefix, attr.key.value);
        let _ = object.insert(key, Value::String(attr.value.value.clone()));
    }
    insert_elements(&mut object, &element.children, options);
    if let Some(text) = element.text() {
        let _ = object.insert(options.text_key.clone(), Value::String(text.to_string()));
    }
    Value::Object(object)
}

/// Insert elements keyed by name, grouping repeated names into arrays.
fn insert_elements(object: &mut Map<String, Value>, elements: &[ElementTag], options: &JsonOptions) {
    for element in elements {
        let value = element_to_value(element, options);
        match object.get_mut(element.tag_name()) {
            // Element values are never arrays, so an array here is a group.
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                let _ = object.insert(element.tag_name().to_string(), value);
            }
        }
    }
}
