//! Run configuration built from the command line

use std::collections::HashMap;
use std::path::PathBuf;

/// Everything one invocation needs, resolved from the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportConfig {
    /// Certificate PEM file
    pub cert_file: PathBuf,
    /// Private key PEM file
    pub private_key_file: PathBuf,
    /// Optional certificate chain PEM file
    pub chain_file: Option<PathBuf>,
    /// Region override; the SDK chain decides when absent
    pub region: Option<String>,
    /// Named credential profile; the default profile when absent
    pub profile: Option<String>,
    /// Tags attached to the imported certificate
    pub tags: HashMap<String, String>,
    /// Print a single JSON result object instead of progress lines
    pub json: bool,
}

impl ImportConfig {
    /// Minimal configuration: certificate and key, nothing optional
    pub fn new(cert_file: impl Into<PathBuf>, private_key_file: impl Into<PathBuf>) -> Self {
        Self {
            cert_file: cert_file.into(),
            private_key_file: private_key_file.into(),
            chain_file: None,
            region: None,
            profile: None,
            tags: HashMap::new(),
            json: false,
        }
    }

    /// Region and profile overrides handed to the AWS config loader
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            region: self.region.clone(),
            profile: self.profile.clone(),
        }
    }
}

/// Overrides for AWS client configuration resolution
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientSettings {
    /// Explicit region, if any
    pub region: Option<String>,
    /// Named profile, if any
    pub profile: Option<String>,
}
