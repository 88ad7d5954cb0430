//! Generic name/value param blocks.
//!
//! Many section entries (handlers, authentications, accesses, rewrite
//! maps, connectors, virtual hosts and the server root itself) attach a
//! `params` collection of repeated `param name=/value=` children. This
//! module reads that shape once per node; the typed getters apply the
//! scalar coercion rules.

use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::scalar;
use crate::node::Node;

/// An insertion-ordered name → value block.
///
/// A duplicate name overwrites the earlier value in place, keeping the
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamBlock {
    entries: Vec<(String, String)>,
}

impl ParamBlock {
    /// Read the immediate `param` children of a node's `params`
    /// collection. An absent collection yields an empty block.
    pub fn read(scope: &Node) -> Self {
        let mut block = ParamBlock::default();
        if let Some(params) = scope.first_child("params") {
            for param in params.children("param") {
                block.set(
                    param.attribute("name").unwrap_or_default(),
                    param.attribute("value").unwrap_or_default(),
                );
            }
        }
        block
    }

    fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Raw value lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// String value, absent → empty string.
    pub fn string(&self, name: &str) -> String {
        scalar::text(self.get(name))
    }

    /// Integer value, absent or non-numeric → 0.
    pub fn integer<T>(&self, name: &str) -> T
    where
        T: FromStr + Default,
    {
        scalar::integer(self.get(name))
    }

    /// Flag value, true only for the literal `"true"`.
    pub fn flag(&self, name: &str) -> bool {
        scalar::flag(self.get(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Serialize for ParamBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
