//! Configuration model definitions.
//!
//! One explicit value type per entity of the server definition. The two
//! aggregates (`ServerConfig`, `VirtualHost`) keep their fields private
//! and expose read accessors only; once built they are never mutated, so
//! a shared instance is safe for unsynchronized concurrent reads.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::params::ParamBlock;

/// Header rules grouped by the `type` attribute, in declaration order
/// within each type.
pub type Headers = HashMap<String, Vec<HeaderRule>>;

/// The immutable aggregate root of a server definition.
///
/// Holds the server-wide scalars, every root-scoped section and the
/// hostname → overlay map. Constructed once per load via
/// [`ServerConfig::from_node`]; a reload builds a brand-new instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerConfig {
    // Node attributes.
    pub(crate) name: String,
    pub(crate) server_type: String,
    pub(crate) worker_type: String,
    pub(crate) socket_type: String,
    pub(crate) stream_context_type: String,
    pub(crate) server_context_type: String,
    pub(crate) request_context_type: String,
    pub(crate) logger_name: String,

    // Param-block scalars.
    pub(crate) transport: String,
    pub(crate) address: String,
    pub(crate) port: u16,
    pub(crate) software: String,
    pub(crate) worker_number: usize,
    pub(crate) worker_accept_min: usize,
    pub(crate) worker_accept_max: usize,
    pub(crate) cert_path: String,
    pub(crate) passphrase: String,
    pub(crate) document_root: String,
    pub(crate) directory_index: String,
    pub(crate) admin: String,
    pub(crate) keep_alive_max: u32,
    pub(crate) keep_alive_timeout: u64,
    pub(crate) auto_index: bool,
    pub(crate) errors_page_template_path: String,
    pub(crate) welcome_page_template_path: String,
    pub(crate) auto_index_template_path: String,

    // Sections.
    pub(crate) modules: Vec<String>,
    pub(crate) connection_handlers: Vec<String>,
    pub(crate) handlers: HashMap<String, HandlerConfig>,
    pub(crate) headers: Headers,
    pub(crate) certificates: Vec<Certificate>,
    pub(crate) virtual_hosts: HashMap<String, VirtualHost>,
    pub(crate) rewrites: Vec<RewriteRule>,
    pub(crate) environment_variables: Vec<EnvironmentVariable>,
    pub(crate) authentications: HashMap<String, ParamBlock>,
    pub(crate) accesses: HashMap<String, Vec<ParamBlock>>,
    pub(crate) locations: Vec<LocationConfig>,
    pub(crate) rewrite_maps: HashMap<String, ParamBlock>,
    pub(crate) analytics: Vec<AnalyticsRule>,
}

impl ServerConfig {
    /// Server name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Server implementation type.
    pub fn server_type(&self) -> &str {
        &self.server_type
    }

    /// Worker implementation type.
    pub fn worker_type(&self) -> &str {
        &self.worker_type
    }

    /// Socket implementation type.
    pub fn socket_type(&self) -> &str {
        &self.socket_type
    }

    /// Stream context type.
    pub fn stream_context_type(&self) -> &str {
        &self.stream_context_type
    }

    /// Server context type.
    pub fn server_context_type(&self) -> &str {
        &self.server_context_type
    }

    /// Request context type.
    pub fn request_context_type(&self) -> &str {
        &self.request_context_type
    }

    /// Name of the logger this server reports to.
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// Transport scheme (e.g. `tcp`, `ssl`).
    pub fn transport(&self) -> &str {
        &self.transport
    }

    /// Bind address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Bind port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Advertised server software string.
    pub fn software(&self) -> &str {
        &self.software
    }

    /// Number of worker processes.
    pub fn worker_number(&self) -> usize {
        self.worker_number
    }

    /// Minimum connections a worker accepts before rebalancing.
    pub fn worker_accept_min(&self) -> usize {
        self.worker_accept_min
    }

    /// Maximum connections a worker accepts before rebalancing.
    pub fn worker_accept_max(&self) -> usize {
        self.worker_accept_max
    }

    /// Default certificate path for the TLS layer.
    pub fn cert_path(&self) -> &str {
        &self.cert_path
    }

    /// Passphrase for the default certificate.
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Document root served by the file handlers.
    pub fn document_root(&self) -> &str {
        &self.document_root
    }

    /// Directory index definition.
    pub fn directory_index(&self) -> &str {
        &self.directory_index
    }

    /// Administrator contact.
    pub fn admin(&self) -> &str {
        &self.admin
    }

    /// Maximum keep-alive requests per connection.
    pub fn keep_alive_max(&self) -> u32 {
        self.keep_alive_max
    }

    /// Keep-alive timeout in seconds.
    pub fn keep_alive_timeout(&self) -> u64 {
        self.keep_alive_timeout
    }

    /// Whether auto-index pages are generated.
    pub fn auto_index(&self) -> bool {
        self.auto_index
    }

    /// Template path for error pages.
    pub fn errors_page_template_path(&self) -> &str {
        &self.errors_page_template_path
    }

    /// Template path for the welcome page.
    pub fn welcome_page_template_path(&self) -> &str {
        &self.welcome_page_template_path
    }

    /// Template path for auto-index pages.
    pub fn auto_index_template_path(&self) -> &str {
        &self.auto_index_template_path
    }

    /// Module types in chain order.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Connection handler types in dispatch order.
    pub fn connection_handlers(&self) -> &[String] {
        &self.connection_handlers
    }

    /// Handlers keyed by file extension.
    pub fn handlers(&self) -> &HashMap<String, HandlerConfig> {
        &self.handlers
    }

    /// Handler for a single extension.
    pub fn handler(&self, extension: &str) -> Option<&HandlerConfig> {
        self.handlers.get(extension)
    }

    /// Header rules grouped by type.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// TLS certificates in declaration order.
    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    /// Virtual-host overlays keyed by exact hostname.
    pub fn virtual_hosts(&self) -> &HashMap<String, VirtualHost> {
        &self.virtual_hosts
    }

    /// Overlay for a single hostname. Lookup is exact; no case folding.
    pub fn virtual_host(&self, hostname: &str) -> Option<&VirtualHost> {
        self.virtual_hosts.get(hostname)
    }

    /// Rewrite rules in evaluation order.
    pub fn rewrites(&self) -> &[RewriteRule] {
        &self.rewrites
    }

    /// Environment variable rules in evaluation order.
    pub fn environment_variables(&self) -> &[EnvironmentVariable] {
        &self.environment_variables
    }

    /// Authentication realms keyed by uri pattern.
    pub fn authentications(&self) -> &HashMap<String, ParamBlock> {
        &self.authentications
    }

    /// Access rules grouped by type, in declaration order within a type.
    pub fn accesses(&self) -> &HashMap<String, Vec<ParamBlock>> {
        &self.accesses
    }

    /// Location blocks in evaluation order.
    pub fn locations(&self) -> &[LocationConfig] {
        &self.locations
    }

    /// Rewrite maps keyed by type.
    pub fn rewrite_maps(&self) -> &HashMap<String, ParamBlock> {
        &self.rewrite_maps
    }

    /// Analytics rules in declaration order.
    pub fn analytics(&self) -> &[AnalyticsRule] {
        &self.analytics
    }
}

/// A virtual-host overlay: the same section shapes as the server root,
/// scoped to one hostname.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VirtualHost {
    pub(crate) params: ParamBlock,
    pub(crate) headers: Headers,
    pub(crate) rewrite_maps: HashMap<String, ParamBlock>,
    pub(crate) rewrites: Vec<RewriteRule>,
    pub(crate) locations: Vec<LocationConfig>,
    pub(crate) environment_variables: Vec<EnvironmentVariable>,
    pub(crate) authentications: HashMap<String, ParamBlock>,
    pub(crate) accesses: HashMap<String, Vec<ParamBlock>>,
    pub(crate) analytics: Vec<AnalyticsRule>,
}

impl VirtualHost {
    /// Host-scoped params (documentRoot, admin, …).
    pub fn params(&self) -> &ParamBlock {
        &self.params
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn rewrite_maps(&self) -> &HashMap<String, ParamBlock> {
        &self.rewrite_maps
    }

    pub fn rewrites(&self) -> &[RewriteRule] {
        &self.rewrites
    }

    pub fn locations(&self) -> &[LocationConfig] {
        &self.locations
    }

    pub fn environment_variables(&self) -> &[EnvironmentVariable] {
        &self.environment_variables
    }

    pub fn authentications(&self) -> &HashMap<String, ParamBlock> {
        &self.authentications
    }

    pub fn accesses(&self) -> &HashMap<String, Vec<ParamBlock>> {
        &self.accesses
    }

    pub fn analytics(&self) -> &[AnalyticsRule] {
        &self.analytics
    }
}

/// A request handler bound to a file extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandlerConfig {
    /// Handler implementation name.
    pub name: String,

    /// Handler-specific params.
    pub params: ParamBlock,
}

/// One header injection rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderRule {
    /// Rule type (`request` or `response`); also the grouping key.
    #[serde(rename = "type")]
    pub kind: String,

    /// Header name.
    pub name: String,

    /// Header value.
    pub value: String,

    /// Uri pattern the rule applies to.
    pub uri: String,

    /// Replace an existing header instead of keeping it
    /// (the `override` attribute).
    #[serde(rename = "override")]
    pub overwrite: bool,

    /// Append to an existing header instead of replacing it.
    pub append: bool,
}

/// One rewrite rule, attributes preserved verbatim.
///
/// The rewrite engine interprets the attribute set (`condition`,
/// `target`, `flag`, …) holistically; the model does not pick it apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RewriteRule {
    pub attributes: HashMap<String, String>,
}

impl RewriteRule {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One environment variable rule, attributes preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnvironmentVariable {
    pub attributes: HashMap<String, String>,
}

impl EnvironmentVariable {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A location block: a condition pattern with its own nested handlers
/// and headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationConfig {
    /// Pattern matched against the request path.
    pub condition: String,

    /// Location-scoped handlers keyed by extension.
    pub handlers: HashMap<String, HandlerConfig>,

    /// Location-scoped header rules grouped by type.
    pub headers: Headers,
}

/// A (domain, certificate path) pair for SNI selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Certificate {
    pub domain: String,

    #[serde(rename = "certPath")]
    pub cert_path: String,
}

/// One analytics rule: a uri pattern and the connectors fed by it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsRule {
    pub uri: String,
    pub connectors: Vec<Connector>,
}

/// An analytics connector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    /// Connector instance name.
    pub name: String,

    /// Connector implementation type.
    #[serde(rename = "type")]
    pub kind: String,

    /// Connector-specific params; absent block → empty.
    pub params: ParamBlock,
}
