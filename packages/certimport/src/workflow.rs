//! The import workflow
//!
//! Runs the stages in order: read and validate files, resolve the client,
//! import, report. The first failing stage ends the run. All input files are
//! read before the importer is touched, so local failures never reach the
//! network.

use std::io::Write;

use certimport_common::LoggingTransformer;
use log::info;

use crate::config::ImportConfig;
use crate::error::CertImportResult;
use crate::pem::{PemRole, load_pem};
use crate::request::{CertificateImporter, ImportRequest, ImportResult};

/// Human-readable progress lines
///
/// Write failures on the progress stream are ignored; they must not
/// change the outcome of an import that already happened.
pub struct Progress<W: Write> {
    out: W,
}

impl<W: Write> Progress<W> {
    /// Write progress lines to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Read the PEM inputs named by `config` into an [`ImportRequest`]
pub fn read_request<W: Write>(
    config: &ImportConfig,
    progress: &mut Progress<W>,
) -> CertImportResult<ImportRequest> {
    progress.line("Reading certificate files...");

    let certificate = load_pem(&config.cert_file, PemRole::Certificate)?;
    progress.line("✓ Certificate file read successfully");

    let private_key = load_pem(&config.private_key_file, PemRole::PrivateKey)?;
    progress.line("✓ Private key file read successfully");

    let chain = match &config.chain_file {
        Some(path) => {
            let chain = load_pem(path, PemRole::CertificateChain)?;
            progress.line("✓ Certificate chain file read successfully");
            Some(chain)
        }
        None => None,
    };

    Ok(ImportRequest::new(certificate, private_key)
        .with_chain(chain)
        .with_tags(config.tags.clone()))
}

/// Run a complete import against `importer`
pub async fn import_certificate<I, W>(
    config: &ImportConfig,
    importer: &mut I,
    progress: &mut Progress<W>,
) -> CertImportResult<ImportResult>
where
    I: CertificateImporter,
    W: Write,
{
    let request = read_request(config, progress)?;

    progress.line("Initializing AWS client...");
    let settings = config.client_settings();
    let region = importer.initialize(&settings).await?;
    LoggingTransformer::log_client_config(&region, settings.profile.as_deref());
    progress.line(&format!("✓ AWS ACM client initialized (region: {region})"));

    if !request.tags().is_empty() {
        progress.line(&format!("✓ Tags prepared: {} tags", request.tags().len()));
    }

    progress.line("Importing certificate to ACM...");
    let result = importer.import_certificate(&request).await?;
    info!("Import finished for {}", config.cert_file.display());

    progress.line("✅ Certificate imported successfully!");
    progress.line(&format!("Certificate ARN: {}", result.certificate_arn));

    Ok(result)
}
