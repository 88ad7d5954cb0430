//! Analytics rules and their connectors.

use crate::config::model::{AnalyticsRule, Connector};
use crate::config::params::ParamBlock;
use crate::config::scalar;
use crate::config::sections::entries;
use crate::node::Node;

/// Analytics rules in declaration order. Each rule carries its ordered
/// connectors; a connector without a `params` element gets an empty
/// block, not an error.
pub(crate) fn parse_analytics(scope: &Node) -> Vec<AnalyticsRule> {
    entries(scope, "analytics", "analytic")
        .map(|analytic| AnalyticsRule {
            uri: scalar::text(analytic.attribute("uri")),
            connectors: entries(analytic, "connectors", "connector")
                .map(|connector| Connector {
                    name: scalar::text(connector.attribute("name")),
                    kind: scalar::text(connector.attribute("type")),
                    params: ParamBlock::read(connector),
                })
                .collect(),
        })
        .collect()
}
