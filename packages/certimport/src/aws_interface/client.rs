//! AWS client setup and configuration
//!
//! Contains AWS config loading, credential checks and region selection.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_acm::Client;
use aws_sdk_acm::error::DisplayErrorContext;
use log::debug;

use crate::config::ClientSettings;
use crate::error::{CertImportError, CertImportResult};

/// Region used when neither the flag nor the SDK chain yields one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Load AWS configuration using the SDK's default resolution chain
///
/// An explicit region and profile take precedence. When no region is found
/// anywhere, [`DEFAULT_REGION`] is used. Credentials are resolved once here
/// so that a missing or broken profile fails before any request is sent.
pub async fn resolve_config(settings: &ClientSettings) -> CertImportResult<SdkConfig> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile) = settings.profile.as_deref() {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = settings.region.as_deref() {
        loader = loader.region(Region::new(region.to_owned()));
    }

    let mut config = loader.load().await;
    if config.region().is_none() {
        debug!("No region configured, falling back to {DEFAULT_REGION}");
        config = config
            .into_builder()
            .region(Region::new(DEFAULT_REGION))
            .build();
    }

    let provider = config.credentials_provider().ok_or_else(|| {
        CertImportError::Config("no credentials provider could be resolved".to_string())
    })?;
    provider.provide_credentials().await.map_err(|e| {
        CertImportError::Config(format!(
            "failed to resolve credentials: {}",
            DisplayErrorContext(&e)
        ))
    })?;

    Ok(config)
}

/// Interface for importing certificates into AWS Certificate Manager
#[derive(Debug, Default, Clone)]
pub struct AcmInterface {
    pub(crate) client: Option<Client>,
    pub(crate) region: Option<String>,
}

impl AcmInterface {
    /// Create an interface with no client yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Region of the initialized client
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Initialize the ACM client from resolved configuration
    pub async fn connect(&mut self, settings: &ClientSettings) -> CertImportResult<String> {
        let config = resolve_config(settings).await?;
        let region = config
            .region()
            .map(ToString::to_string)
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        self.client = Some(Client::new(&config));
        self.region = Some(region.clone());
        Ok(region)
    }
}
