//! Virtual-host resolution.
//!
//! # Responsibilities
//! - Locate every `virtualHost` declaration under the root
//! - Split the space-separated hostname list of each declaration
//! - Produce one independent overlay entry per hostname
//!
//! # Design Decisions
//! - The overlay runs the exact section parsers the root build runs;
//!   scope-agnosticism is what makes the overlay mechanism work
//! - The overlay is parsed once per declaration and cloned per hostname;
//!   clones are independently valued
//! - Hostnames are stored exactly as declared (whitespace-trimmed, no
//!   case folding); a later declaration of the same hostname wins

use std::collections::HashMap;

use crate::config::model::VirtualHost;
use crate::config::params::ParamBlock;
use crate::config::sections::{
    entries, parse_accesses, parse_analytics, parse_authentications, parse_environment_variables,
    parse_headers, parse_locations, parse_rewrite_maps, parse_rewrites,
};
use crate::node::Node;

/// Expand every virtual-host declaration under `root` into a
/// hostname → overlay map.
pub(crate) fn resolve_virtual_hosts(root: &Node) -> HashMap<String, VirtualHost> {
    let mut virtual_hosts = HashMap::new();
    for declaration in entries(root, "virtualHosts", "virtualHost") {
        let overlay = read_overlay(declaration);
        for hostname in declaration
            .attribute("name")
            .unwrap_or_default()
            .split_whitespace()
        {
            virtual_hosts.insert(hostname.to_string(), overlay.clone());
        }
    }
    virtual_hosts
}

/// Build one overlay from a virtual-host node. Same calls as the root
/// build, scoped one level down.
fn read_overlay(declaration: &Node) -> VirtualHost {
    VirtualHost {
        params: ParamBlock::read(declaration),
        headers: parse_headers(declaration),
        rewrite_maps: parse_rewrite_maps(declaration),
        rewrites: parse_rewrites(declaration),
        locations: parse_locations(declaration),
        environment_variables: parse_environment_variables(declaration),
        authentications: parse_authentications(declaration),
        accesses: parse_accesses(declaration),
        analytics: parse_analytics(declaration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(names: &str, document_root: &str) -> Node {
        Node::builder("virtualHost")
            .attribute("name", names)
            .child(
                Node::builder("params")
                    .child(
                        Node::builder("param")
                            .attribute("name", "documentRoot")
                            .attribute("value", document_root)
                            .build(),
                    )
                    .build(),
            )
            .build()
    }

    fn root(declarations: Vec<Node>) -> Node {
        let mut wrapper = Node::builder("virtualHosts");
        for d in declarations {
            wrapper = wrapper.child(d);
        }
        Node::builder("server").child(wrapper.build()).build()
    }

    #[test]
    fn test_multi_hostname_expansion() {
        let hosts = resolve_virtual_hosts(&root(vec![declaration(
            "shop.example.com admin.example.com",
            "var/www/shop",
        )]));

        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts["shop.example.com"], hosts["admin.example.com"]);
        assert_eq!(
            hosts["shop.example.com"].params().get("documentRoot"),
            Some("var/www/shop")
        );
    }

    #[test]
    fn test_extra_whitespace_never_binds_empty_hostname() {
        let hosts = resolve_virtual_hosts(&root(vec![declaration(
            "  a.example.com   b.example.com ",
            "var/www",
        )]));

        assert_eq!(hosts.len(), 2);
        assert!(hosts.contains_key("a.example.com"));
        assert!(hosts.contains_key("b.example.com"));
    }

    #[test]
    fn test_later_declaration_wins() {
        let hosts = resolve_virtual_hosts(&root(vec![
            declaration("site.example.com", "var/www/old"),
            declaration("site.example.com", "var/www/new"),
        ]));

        assert_eq!(hosts.len(), 1);
        assert_eq!(
            hosts["site.example.com"].params().get("documentRoot"),
            Some("var/www/new")
        );
    }

    #[test]
    fn test_overlay_sections_scoped_to_declaration() {
        let with_rewrites = Node::builder("virtualHost")
            .attribute("name", "legacy.example.com")
            .child(Node::builder("params").build())
            .child(
                Node::builder("rewrites")
                    .child(
                        Node::builder("rewrite")
                            .attribute("condition", "^/old")
                            .attribute("target", "/new")
                            .build(),
                    )
                    .build(),
            )
            .build();
        let hosts = resolve_virtual_hosts(&root(vec![
            with_rewrites,
            declaration("plain.example.com", "var/www"),
        ]));

        assert_eq!(hosts["legacy.example.com"].rewrites().len(), 1);
        assert!(hosts["plain.example.com"].rewrites().is_empty());
    }

    #[test]
    fn test_no_declarations_is_empty() {
        let hosts = resolve_virtual_hosts(&Node::builder("server").build());
        assert!(hosts.is_empty());
    }
}
