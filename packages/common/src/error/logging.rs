//! Structured logging infrastructure
//!
//! Provides env_logger-based logging through the standard `log` facade.
//! Key material is never passed to these helpers; files are identified by
//! path and size only.

use log::{debug, info};
use std::path::Path;
use std::sync::Once;

use super::types::ErrorKind;

static INIT_LOGGER: Once = Once::new();

/// Logging bootstrap and stage-level log helpers using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (call once at application startup)
    ///
    /// Configure logging levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=certimport=info` - Module-specific levels
    ///
    /// Without `RUST_LOG` only warnings and errors are emitted, so the
    /// progress lines printed on stdout stay readable.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Warn)
                .parse_default_env()
                .format_timestamp_micros()
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a PEM input file that was read and accepted
    pub fn log_input_file(role: &str, path: &Path, len: usize) {
        info!("Read {role} file {} ({len} bytes)", path.display());
    }

    /// Log the client configuration that was resolved
    pub fn log_client_config(region: &str, profile: Option<&str>) {
        match profile {
            Some(profile) => info!("AWS client configured (region: {region}, profile: {profile})"),
            None => info!("AWS client configured (region: {region}, profile: <default>)"),
        }
    }

    /// Log a terminal failure together with its exit code
    ///
    /// Recorded at debug level: the user-facing message is printed by the
    /// binary, so the default `warn` filter must not repeat it on stderr.
    pub fn log_failure(kind: ErrorKind, error: &dyn std::error::Error) {
        debug!(
            "Import aborted: {kind} (exit code {}): {error}",
            kind.exit_code()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        // These should not panic and should produce log output
        LoggingTransformer::log_input_file("certificate", Path::new("cert.pem"), 1200);
        LoggingTransformer::log_client_config("eu-west-1", Some("staging"));
        LoggingTransformer::log_client_config("us-east-1", None);
        let err = std::io::Error::other("boom");
        LoggingTransformer::log_failure(ErrorKind::FileRead, &err);
    }
}
