//! Final result reporting for human and JSON output

use serde_json::{Value, json};

use crate::error::CertImportError;
use crate::request::ImportResult;

const OPERATION: &str = "import_certificate";

/// JSON object describing a successful import
pub fn success_json(result: &ImportResult) -> Value {
    json!({
        "success": true,
        "operation": OPERATION,
        "certificate_arn": result.certificate_arn,
    })
}

/// JSON object describing a failed run
pub fn failure_json(error: &CertImportError) -> Value {
    let kind = error.kind();
    json!({
        "success": false,
        "operation": OPERATION,
        "error_kind": kind.as_str(),
        "exit_code": kind.exit_code(),
        "error": error.report(),
    })
}

/// Message printed on stderr for a failed run
pub fn failure_message(error: &CertImportError) -> String {
    match error {
        CertImportError::Usage(message) => format!("Error: {message}"),
        other => format!("Failed to import certificate: {}", other.report()),
    }
}
