//! Authentication realms and access control rules.

use std::collections::HashMap;

use crate::config::params::ParamBlock;
use crate::config::scalar;
use crate::config::sections::entries;
use crate::node::Node;

/// Authentication realms keyed by their `uri` attribute, last wins.
pub(crate) fn parse_authentications(scope: &Node) -> HashMap<String, ParamBlock> {
    entries(scope, "authentications", "authentication")
        .map(|auth| (scalar::text(auth.attribute("uri")), ParamBlock::read(auth)))
        .collect()
}

/// Access rules grouped by their `type` attribute. Unlike the keyed
/// sections, every rule of a type is kept, in declaration order.
pub(crate) fn parse_accesses(scope: &Node) -> HashMap<String, Vec<ParamBlock>> {
    let mut accesses: HashMap<String, Vec<ParamBlock>> = HashMap::new();
    for access in entries(scope, "accesses", "access") {
        accesses
            .entry(scalar::text(access.attribute("type")))
            .or_default()
            .push(ParamBlock::read(access));
    }
    accesses
}
