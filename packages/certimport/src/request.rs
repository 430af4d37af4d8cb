//! Import request and the importer seam
//!
//! [`ImportRequest`] is built once from the validated input files and
//! handed to a [`CertificateImporter`]. The ACM client is the production
//! importer; tests substitute their own.

use std::collections::HashMap;
use std::fmt;

use zeroize::Zeroizing;

use crate::config::ClientSettings;
use crate::error::CertImportResult;

/// Certificate material and tags for a single import call
#[derive(Clone)]
pub struct ImportRequest {
    certificate: Vec<u8>,
    private_key: Zeroizing<Vec<u8>>,
    certificate_chain: Option<Vec<u8>>,
    tags: HashMap<String, String>,
}

impl ImportRequest {
    /// Request with certificate and key only
    pub fn new(certificate: Vec<u8>, private_key: Vec<u8>) -> Self {
        Self {
            certificate,
            private_key: Zeroizing::new(private_key),
            certificate_chain: None,
            tags: HashMap::new(),
        }
    }

    /// Attach the chain; `None` leaves it out of the call
    pub fn with_chain(mut self, chain: Option<Vec<u8>>) -> Self {
        self.certificate_chain = chain;
        self
    }

    /// Attach tags; an empty map leaves them out of the call
    pub fn with_tags(mut self, tags: HashMap<String, String>) -> Self {
        self.tags = tags;
        self
    }

    /// Certificate PEM bytes
    pub fn certificate(&self) -> &[u8] {
        &self.certificate
    }

    /// Private key PEM bytes
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    /// Chain PEM bytes, if supplied
    pub fn certificate_chain(&self) -> Option<&[u8]> {
        self.certificate_chain.as_deref()
    }

    /// Tag map
    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }

    /// Tags ordered by key
    pub fn sorted_tags(&self) -> Vec<(&str, &str)> {
        let mut tags: Vec<(&str, &str)> = self
            .tags
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        tags.sort_unstable();
        tags
    }
}

impl fmt::Debug for ImportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportRequest")
            .field("certificate_len", &self.certificate.len())
            .field("private_key", &"<redacted>")
            .field(
                "certificate_chain_len",
                &self.certificate_chain.as_ref().map(Vec::len),
            )
            .field("tags", &self.tags)
            .finish()
    }
}

/// Outcome of a successful import
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportResult {
    /// ARN assigned by ACM
    pub certificate_arn: String,
}

/// A certificate-management backend that can import certificates
#[allow(async_fn_in_trait)]
pub trait CertificateImporter {
    /// Resolve configuration and build the client, returning the region in use
    async fn initialize(&mut self, settings: &ClientSettings) -> CertImportResult<String>;

    /// Import one certificate; must be called after [`initialize`](Self::initialize)
    async fn import_certificate(&self, request: &ImportRequest) -> CertImportResult<ImportResult>;
}
