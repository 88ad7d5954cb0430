//! Domain certificates for SNI selection.

use crate::config::model::Certificate;
use crate::config::scalar;
use crate::config::sections::entries;
use crate::node::Node;

/// Certificates as ordered (domain, certPath) pairs.
pub(crate) fn parse_certificates(scope: &Node) -> Vec<Certificate> {
    entries(scope, "certificates", "certificate")
        .map(|certificate| Certificate {
            domain: scalar::text(certificate.attribute("domain")),
            cert_path: scalar::text(certificate.attribute("certPath")),
        })
        .collect()
}
