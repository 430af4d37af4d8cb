//! AWS interface module
//!
//! Contains AWS configuration resolution, the ACM client wrapper and the
//! mapping from an [`ImportRequest`](crate::request::ImportRequest) to the
//! ACM `ImportCertificate` input.

pub mod client;
pub mod import;

pub use client::{AcmInterface, DEFAULT_REGION, resolve_config};
pub use import::build_import_input;
