//! Rewrite rules, rewrite maps and environment variables.

use std::collections::HashMap;

use crate::config::model::{EnvironmentVariable, RewriteRule};
use crate::config::params::ParamBlock;
use crate::config::scalar;
use crate::config::sections::entries;
use crate::node::Node;

/// Rewrite rules in evaluation order. The full attribute set is kept
/// verbatim; the rewrite engine interprets it.
pub(crate) fn parse_rewrites(scope: &Node) -> Vec<RewriteRule> {
    entries(scope, "rewrites", "rewrite")
        .map(|rewrite| RewriteRule {
            attributes: rewrite.attributes().clone(),
        })
        .collect()
}

/// Rewrite maps keyed by their `type` attribute, last wins.
pub(crate) fn parse_rewrite_maps(scope: &Node) -> HashMap<String, ParamBlock> {
    entries(scope, "rewriteMaps", "rewriteMap")
        .map(|map| (scalar::text(map.attribute("type")), ParamBlock::read(map)))
        .collect()
}

/// Environment variable rules in evaluation order, attributes verbatim.
pub(crate) fn parse_environment_variables(scope: &Node) -> Vec<EnvironmentVariable> {
    entries(scope, "environmentVariables", "environmentVariable")
        .map(|variable| EnvironmentVariable {
            attributes: variable.attributes().clone(),
        })
        .collect()
}
