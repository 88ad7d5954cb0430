//! JSON encoding of the element tree.
//!
//! The encoding mirrors the element/attribute structure one-to-one:
//! an object is an element, a string/number/boolean member is an
//! attribute, an object member is a single child element and an array
//! member is a repeated child element. The document root is an object
//! with exactly one member naming the root element.
//!
//! ```text
//! { "server": {
//!     "name": "httpServer",
//!     "params": { "param": [ { "name": "port", "value": "80" } ] }
//! } }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::node::tree::Node;

/// Structural violations of the document encoding.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The top level was not an object with exactly one element member.
    #[error("document root must be an object with exactly one element, got {0}")]
    InvalidRoot(String),

    /// An element member was not an object.
    #[error("element `{0}` must be an object")]
    InvalidElement(String),

    /// An array member held something other than element objects.
    #[error("collection `{collection}` of `{element}` must contain only objects")]
    InvalidCollection { element: String, collection: String },
}

/// Decode a JSON value into an element tree.
pub fn from_json(value: &Value) -> Result<Node, DocumentError> {
    let root = value
        .as_object()
        .filter(|members| members.len() == 1)
        .ok_or_else(|| DocumentError::InvalidRoot(describe(value)))?;

    match root.iter().next() {
        Some((name, body)) => element(name, body),
        None => Err(DocumentError::InvalidRoot(describe(value))),
    }
}

fn element(name: &str, value: &Value) -> Result<Node, DocumentError> {
    let members = value
        .as_object()
        .ok_or_else(|| DocumentError::InvalidElement(name.to_string()))?;

    let mut builder = Node::builder(name);
    for (key, member) in members {
        match member {
            Value::String(s) => builder = builder.attribute(key.as_str(), s.as_str()),
            Value::Number(n) => builder = builder.attribute(key.as_str(), n.to_string()),
            Value::Bool(b) => builder = builder.attribute(key.as_str(), b.to_string()),
            // Null members are treated as absent.
            Value::Null => {}
            Value::Object(_) => builder = builder.child(element(key, member)?),
            Value::Array(items) => {
                for item in items {
                    if !item.is_object() {
                        return Err(DocumentError::InvalidCollection {
                            element: name.to_string(),
                            collection: key.clone(),
                        });
                    }
                    builder = builder.child(element(key, item)?);
                }
            }
        }
    }
    Ok(builder.build())
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(_) => "a number".to_string(),
        Value::String(_) => "a string".to_string(),
        Value::Array(_) => "an array".to_string(),
        Value::Object(members) => format!("an object with {} members", members.len()),
    }
}
