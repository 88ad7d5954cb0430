//! In-memory element tree consumed by the configuration layer.
//!
//! # Data Flow
//! ```text
//! document text (JSON encoding)
//!     → json.rs (decode into element tree)
//!     → Node (name + attributes + ordered children)
//!     → section parsers walk the tree, never the text
//! ```
//!
//! # Design Decisions
//! - Nodes are immutable once built; assembly goes through `NodeBuilder`
//! - Child lookup uses a name index built once at construction
//! - Any reader that can produce a `Node` can feed the configuration layer

pub mod json;
pub mod tree;

pub use json::{from_json, DocumentError};
pub use tree::{Node, NodeBuilder};
