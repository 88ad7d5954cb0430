//! Aggregate construction.
//!
//! Strict sequence: scalar extraction, root-scoped section parsers,
//! virtual-host resolution, then one struct expression. Every field is
//! computed before the aggregate exists, so no partially built model can
//! ever escape.

use crate::config::model::ServerConfig;
use crate::config::params::ParamBlock;
use crate::config::scalar;
use crate::config::sections::{
    parse_accesses, parse_analytics, parse_authentications, parse_certificates,
    parse_connection_handlers, parse_environment_variables, parse_handlers, parse_headers,
    parse_locations, parse_modules, parse_rewrite_maps, parse_rewrites,
};
use crate::config::vhosts::resolve_virtual_hosts;
use crate::node::Node;

impl ServerConfig {
    /// Build the immutable model from a server root node.
    ///
    /// Reading the tree is total: missing scalars coerce to their
    /// zero values and missing sections to empty collections, so this
    /// never fails. Structural errors are raised earlier, by whatever
    /// reader produced the node tree.
    pub fn from_node(root: &Node) -> ServerConfig {
        let params = ParamBlock::read(root);

        ServerConfig {
            name: scalar::text(root.attribute("name")),
            server_type: scalar::text(root.attribute("type")),
            worker_type: scalar::text(root.attribute("worker")),
            socket_type: scalar::text(root.attribute("socket")),
            stream_context_type: scalar::text(root.attribute("streamContext")),
            server_context_type: scalar::text(root.attribute("serverContext")),
            request_context_type: scalar::text(root.attribute("requestContext")),
            logger_name: scalar::text(root.attribute("loggerName")),

            transport: params.string("transport"),
            address: params.string("address"),
            port: params.integer("port"),
            software: params.string("software"),
            worker_number: params.integer("workerNumber"),
            worker_accept_min: params.integer("workerAcceptMin"),
            worker_accept_max: params.integer("workerAcceptMax"),
            cert_path: params.string("certPath"),
            passphrase: params.string("passphrase"),
            document_root: params.string("documentRoot"),
            directory_index: params.string("directoryIndex"),
            admin: params.string("admin"),
            keep_alive_max: params.integer("keepAliveMax"),
            keep_alive_timeout: params.integer("keepAliveTimeout"),
            auto_index: params.flag("autoIndex"),
            errors_page_template_path: params.string("errorsPageTemplatePath"),
            welcome_page_template_path: params.string("welcomePageTemplatePath"),
            auto_index_template_path: params.string("autoIndexTemplatePath"),

            modules: parse_modules(root),
            connection_handlers: parse_connection_handlers(root),
            handlers: parse_handlers(root),
            headers: parse_headers(root),
            certificates: parse_certificates(root),
            virtual_hosts: resolve_virtual_hosts(root),
            rewrites: parse_rewrites(root),
            environment_variables: parse_environment_variables(root),
            authentications: parse_authentications(root),
            accesses: parse_accesses(root),
            locations: parse_locations(root),
            rewrite_maps: parse_rewrite_maps(root),
            analytics: parse_analytics(root),
        }
    }
}
