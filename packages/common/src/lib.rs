//! Common infrastructure shared by the certimport crates
//!
//! This crate provides:
//! - The error-kind taxonomy and the process exit code of each kind
//! - Structured logging bootstrap on top of `env_logger`

pub mod error;

pub use error::{ErrorKind, LoggingTransformer};
