//! Error types for the import run

use std::path::PathBuf;

use certimport_common::ErrorKind;

use crate::pem::PemRole;

/// Error type for certificate import runs
///
/// Every variant ends the run; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum CertImportError {
    /// Required arguments are missing
    #[error("{0}")]
    Usage(String),
    /// An input file could not be read
    #[error("failed to read file {}", .path.display())]
    FileRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// An input file lacks the PEM markers
    #[error("{role} file does not appear to be in PEM format")]
    Format {
        /// Which input was rejected
        role: PemRole,
    },
    /// Region, profile or credentials could not be resolved
    #[error("failed to load AWS config: {0}")]
    Config(String),
    /// Import attempted before the client was set up
    #[error("AWS client not initialized")]
    ClientNotInitialized,
    /// The SDK rejected the request while building it
    #[error("failed to build import request")]
    Request(#[from] aws_sdk_acm::error::BuildError),
    /// The ACM call failed
    #[error("failed to import certificate")]
    Api(#[from] aws_sdk_acm::Error),
    /// ACM answered without an ARN
    #[error("import response did not include a certificate ARN")]
    MissingArn,
}

impl CertImportError {
    /// Classify this error for exit-code selection
    pub fn kind(&self) -> ErrorKind {
        match self {
            CertImportError::Usage(_) => ErrorKind::Usage,
            CertImportError::FileRead { .. } => ErrorKind::FileRead,
            CertImportError::Format { .. } => ErrorKind::Format,
            CertImportError::Config(_) | CertImportError::ClientNotInitialized => {
                ErrorKind::Configuration
            }
            CertImportError::Request(_) | CertImportError::Api(_) | CertImportError::MissingArn => {
                ErrorKind::Api
            }
        }
    }

    /// Render the error followed by its chain of sources, `a: b: c`
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// Result alias used throughout the crate
pub type CertImportResult<T> = Result<T, CertImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_read_report_includes_io_cause() {
        let err = CertImportError::FileRead {
            path: PathBuf::from("/missing/cert.pem"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.report(),
            "failed to read file /missing/cert.pem: No such file or directory"
        );
        assert_eq!(err.kind(), ErrorKind::FileRead);
    }

    #[test]
    fn format_error_names_role() {
        let err = CertImportError::Format {
            role: PemRole::CertificateChain,
        };
        assert_eq!(
            err.to_string(),
            "certificate chain file does not appear to be in PEM format"
        );
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn config_class_covers_uninitialized_client() {
        assert_eq!(
            CertImportError::ClientNotInitialized.kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            CertImportError::Config("no credentials".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(CertImportError::MissingArn.kind(), ErrorKind::Api);
    }
}
