//! Error classification and logging
//!
//! Each crate keeps its own `thiserror` error enum; this module only
//! provides the shared classification used to pick an exit code and
//! the logging entry points.

pub mod logging;
pub mod types;

pub use logging::LoggingTransformer;
pub use types::ErrorKind;
