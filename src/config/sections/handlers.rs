//! Request handlers, module chain and connection handlers.

use std::collections::HashMap;

use crate::config::model::HandlerConfig;
use crate::config::params::ParamBlock;
use crate::config::scalar;
use crate::config::sections::entries;
use crate::node::Node;

/// Handlers keyed by their `extension` attribute. A later declaration
/// for the same extension overwrites the earlier one.
pub(crate) fn parse_handlers(scope: &Node) -> HashMap<String, HandlerConfig> {
    entries(scope, "handlers", "handler")
        .map(|handler| {
            (
                scalar::text(handler.attribute("extension")),
                HandlerConfig {
                    name: scalar::text(handler.attribute("name")),
                    params: ParamBlock::read(handler),
                },
            )
        })
        .collect()
}

/// Module types in chain order.
pub(crate) fn parse_modules(scope: &Node) -> Vec<String> {
    entries(scope, "modules", "module")
        .map(|module| scalar::text(module.attribute("type")))
        .collect()
}

/// Connection handler types in dispatch order.
pub(crate) fn parse_connection_handlers(scope: &Node) -> Vec<String> {
    entries(scope, "connectionHandlers", "connectionHandler")
        .map(|handler| scalar::text(handler.attribute("type")))
        .collect()
}
