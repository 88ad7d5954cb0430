//! Header injection rules, grouped by type.

use crate::config::model::{HeaderRule, Headers};
use crate::config::scalar;
use crate::config::sections::entries;
use crate::node::Node;

/// Group the scope's `header` entries by their `type` attribute,
/// preserving declaration order within each type.
pub(crate) fn parse_headers(scope: &Node) -> Headers {
    let mut headers = Headers::new();
    for header in entries(scope, "headers", "header") {
        let rule = HeaderRule {
            kind: scalar::text(header.attribute("type")),
            name: scalar::text(header.attribute("name")),
            value: scalar::text(header.attribute("value")),
            uri: scalar::text(header.attribute("uri")),
            overwrite: scalar::flag(header.attribute("override")),
            append: scalar::flag(header.attribute("append")),
        };
        headers.entry(rule.kind.clone()).or_default().push(rule);
    }
    headers
}
