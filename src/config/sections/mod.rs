//! Section parsers.
//!
//! # Responsibilities
//! - Map one named child collection each into its normalized shape
//! - Treat an absent wrapping element as an empty collection
//! - Stay scope-agnostic: the same functions run against the server root
//!   and against every virtual-host node
//!
//! # Design Decisions
//! - Parsers are pure free functions over `&Node`; the virtual-host
//!   resolver invokes literally the same calls the root build does
//! - Map-keyed sections collapse duplicate keys last-wins; list sections
//!   preserve declaration order

mod access;
mod analytics;
mod certificates;
mod handlers;
mod headers;
mod locations;
mod rewrites;

pub(crate) use access::{parse_accesses, parse_authentications};
pub(crate) use analytics::parse_analytics;
pub(crate) use certificates::parse_certificates;
pub(crate) use handlers::{parse_connection_handlers, parse_handlers, parse_modules};
pub(crate) use headers::parse_headers;
pub(crate) use locations::parse_locations;
pub(crate) use rewrites::{parse_environment_variables, parse_rewrite_maps, parse_rewrites};

use crate::node::Node;

/// Entries of a wrapped child collection, e.g. the `header` children of
/// the `headers` element. An absent wrapper yields an empty iterator.
pub(crate) fn entries<'a>(
    scope: &'a Node,
    collection: &'a str,
    entry: &'a str,
) -> impl Iterator<Item = &'a Node> + 'a {
    scope
        .first_child(collection)
        .into_iter()
        .flat_map(move |wrapper| wrapper.children(entry))
}
