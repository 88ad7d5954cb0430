//! Location blocks with nested handlers and headers.

use crate::config::model::LocationConfig;
use crate::config::scalar;
use crate::config::sections::{entries, parse_handlers, parse_headers};
use crate::node::Node;

/// Location blocks in declaration order. Each location node is itself a
/// scope for the handlers and headers parsers, one level deeper.
pub(crate) fn parse_locations(scope: &Node) -> Vec<LocationConfig> {
    entries(scope, "locations", "location")
        .map(|location| LocationConfig {
            condition: scalar::text(location.attribute("condition")),
            handlers: parse_handlers(location),
            headers: parse_headers(location),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_sections_reuse_parsers() {
        let location = Node::builder("location")
            .attribute("condition", "\\.php$")
            .child(
                Node::builder("handlers")
                    .child(
                        Node::builder("handler")
                            .attribute("extension", "php")
                            .attribute("name", "fastcgi")
                            .build(),
                    )
                    .build(),
            )
            .child(
                Node::builder("headers")
                    .child(
                        Node::builder("header")
                            .attribute("type", "response")
                            .attribute("name", "X-Powered-By")
                            .attribute("value", "none")
                            .build(),
                    )
                    .build(),
            )
            .build();
        let scope = Node::builder("server")
            .child(Node::builder("locations").child(location).build())
            .build();

        let locations = parse_locations(&scope);
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].condition, "\\.php$");
        assert_eq!(locations[0].handlers["php"].name, "fastcgi");
        assert_eq!(locations[0].headers["response"][0].name, "X-Powered-By");
    }
}
