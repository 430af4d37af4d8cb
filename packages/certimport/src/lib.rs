//! Import PEM certificates into AWS Certificate Manager
//!
//! The crate reads a certificate, private key and optional chain from disk,
//! checks that each looks like PEM, and imports them with optional tags
//! through the ACM `ImportCertificate` API.

pub mod aws_interface;
pub mod cli;
pub mod config;
pub mod error;
pub mod pem;
pub mod report;
pub mod request;
pub mod tags;
pub mod workflow;

// Re-export the public API
pub use aws_interface::AcmInterface;
pub use cli::Cli;
pub use config::{ClientSettings, ImportConfig};
pub use error::{CertImportError, CertImportResult};
pub use pem::{PemRole, read_file, validate_pem};
pub use request::{CertificateImporter, ImportRequest, ImportResult};
pub use tags::parse_tags;
pub use workflow::{Progress, import_certificate};
