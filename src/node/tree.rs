//! Element tree representation.

use std::collections::HashMap;

/// One element of a configuration document.
///
/// Carries the element name, its string attributes and its child elements
/// in declaration order. A name → position table is built once when the
/// node is assembled, so looking up a child collection is a map hit rather
/// than a rescan of the child list.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    attributes: HashMap<String, String>,
    children: Vec<Node>,
    positions: HashMap<String, Vec<usize>>,
}

impl Node {
    /// Start assembling a node with the given element name.
    pub fn builder(name: impl Into<String>) -> NodeBuilder {
        NodeBuilder {
            name: name.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// All attributes of this element.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// The first child element with the given name, if any.
    pub fn first_child(&self, name: &str) -> Option<&Node> {
        self.positions
            .get(name)
            .and_then(|p| p.first())
            .map(|&i| &self.children[i])
    }

    /// All child elements with the given name, in declaration order.
    pub fn children(&self, name: &str) -> impl Iterator<Item = &Node> + '_ {
        self.positions
            .get(name)
            .into_iter()
            .flatten()
            .map(move |&i| &self.children[i])
    }

    /// True when the element has no children at all.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Assembles a [`Node`]; `build` freezes it and computes the child index.
#[derive(Debug)]
pub struct NodeBuilder {
    name: String,
    attributes: HashMap<String, String>,
    children: Vec<Node>,
}

impl NodeBuilder {
    /// Set an attribute. A repeated name overwrites the earlier value.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append a child element.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Freeze into an immutable node.
    pub fn build(self) -> Node {
        let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, child) in self.children.iter().enumerate() {
            positions.entry(child.name.clone()).or_default().push(i);
        }
        Node {
            name: self.name,
            attributes: self.attributes,
            children: self.children,
            positions,
        }
    }
}
