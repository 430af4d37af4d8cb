//! Error kinds and their exit codes

use thiserror::Error;

/// Broad classes of failure a certificate import can end with
///
/// Every class is terminal for the run. The class decides the process
/// exit code so scripts can tell a bad invocation from a rejected import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Required arguments missing or malformed
    #[error("Usage error")]
    Usage,

    /// An input file could not be read
    #[error("File read error")]
    FileRead,

    /// An input file does not look like PEM
    #[error("Format error")]
    Format,

    /// Credentials, profile or region could not be resolved
    #[error("Configuration error")]
    Configuration,

    /// The remote certificate service rejected or failed the call
    #[error("API error")]
    Api,
}

impl ErrorKind {
    /// Process exit code reported for this kind of failure
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Usage => 2,
            ErrorKind::FileRead => 3,
            ErrorKind::Format => 4,
            ErrorKind::Configuration => 5,
            ErrorKind::Api => 6,
        }
    }

    /// Short machine-readable label, used in JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Usage => "usage",
            ErrorKind::FileRead => "file_read",
            ErrorKind::Format => "format",
            ErrorKind::Configuration => "config",
            ErrorKind::Api => "api",
        }
    }
}
