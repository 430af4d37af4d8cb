//! ACM certificate import
//!
//! Maps an [`ImportRequest`] onto the `ImportCertificate` operation.

use aws_sdk_acm::operation::import_certificate::ImportCertificateInput;
use aws_sdk_acm::operation::import_certificate::builders::ImportCertificateInputBuilder;
use aws_sdk_acm::primitives::Blob;
use aws_sdk_acm::types::Tag;
use log::{debug, info};

use super::client::AcmInterface;
use crate::config::ClientSettings;
use crate::error::{CertImportError, CertImportResult};
use crate::request::{CertificateImporter, ImportRequest, ImportResult};

/// Build the `ImportCertificate` input for `request`
///
/// The chain is left unset when the request has none, and tags are left
/// unset when the request has no tags, so neither is sent as an empty value.
pub fn build_import_input(
    request: &ImportRequest,
) -> CertImportResult<ImportCertificateInputBuilder> {
    let mut input = ImportCertificateInput::builder()
        .certificate(Blob::new(request.certificate()))
        .private_key(Blob::new(request.private_key()));

    if let Some(chain) = request.certificate_chain() {
        input = input.certificate_chain(Blob::new(chain));
    }

    if !request.tags().is_empty() {
        let tags = request
            .sorted_tags()
            .into_iter()
            .map(|(key, value)| Tag::builder().key(key).value(value).build())
            .collect::<Result<Vec<_>, _>>()?;
        input = input.set_tags(Some(tags));
    }

    Ok(input)
}

impl CertificateImporter for AcmInterface {
    async fn initialize(&mut self, settings: &ClientSettings) -> CertImportResult<String> {
        self.connect(settings).await
    }

    async fn import_certificate(&self, request: &ImportRequest) -> CertImportResult<ImportResult> {
        let client = self.client.as_ref().ok_or(CertImportError::ClientNotInitialized)?;

        let input = build_import_input(request)?;
        debug!(
            "Sending ImportCertificate (chain: {}, tags: {})",
            request.certificate_chain().is_some(),
            request.tags().len()
        );

        let output = input
            .send_with(client)
            .await
            .map_err(aws_sdk_acm::Error::from)?;

        let certificate_arn = output
            .certificate_arn()
            .ok_or(CertImportError::MissingArn)?
            .to_string();
        info!("Imported certificate {certificate_arn}");

        Ok(ImportResult { certificate_arn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn bytes(blob: &Option<Blob>) -> Option<&[u8]> {
        blob.as_ref().map(|b| b.as_ref())
    }

    fn request() -> ImportRequest {
        ImportRequest::new(b"-----BEGIN CERT-----".to_vec(), b"-----BEGIN KEY-----".to_vec())
    }

    #[test]
    fn chain_and_tags_are_included_when_present() {
        let tags = HashMap::from([
            ("Environment".to_string(), "prod".to_string()),
            ("Application".to_string(), "web".to_string()),
        ]);
        let request = request()
            .with_chain(Some(b"-----BEGIN CHAIN-----".to_vec()))
            .with_tags(tags);

        let input = build_import_input(&request).unwrap();

        assert_eq!(
            bytes(input.get_certificate()),
            Some(&b"-----BEGIN CERT-----"[..])
        );
        assert_eq!(
            bytes(input.get_private_key()),
            Some(&b"-----BEGIN KEY-----"[..])
        );
        assert_eq!(
            bytes(input.get_certificate_chain()),
            Some(&b"-----BEGIN CHAIN-----"[..])
        );

        let tags = input.get_tags().as_ref().unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].key(), "Application");
        assert_eq!(tags[0].value(), Some("web"));
        assert_eq!(tags[1].key(), "Environment");
        assert_eq!(tags[1].value(), Some("prod"));
    }

    #[test]
    fn chain_and_tags_are_omitted_when_absent() {
        let input = build_import_input(&request()).unwrap();

        assert!(input.get_certificate().is_some());
        assert!(input.get_private_key().is_some());
        assert!(input.get_certificate_chain().is_none());
        assert!(input.get_tags().is_none());
    }

    #[tokio::test]
    async fn import_before_initialize_fails() {
        let acm = AcmInterface::new();
        let err = acm.import_certificate(&request()).await.unwrap_err();
        assert!(matches!(err, CertImportError::ClientNotInitialized));
        assert!(acm.region().is_none());
    }
}
