//! Synthesis error types

use thiserror::Error;

/// Errors that can end a synthesis attempt.
///
/// Missing optional record fields are never errors; they resolve to
/// omitted entry fields instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SynthesisError {
    /// The record's provider type tag has no BibTeX entry type mapping.
    /// The caller may recover, e.g. by falling back to another formatter.
    #[error("records of type {record_type:?} are not supported")]
    UnsupportedType { record_type: String },

    /// The response container was not a well-formed success response.
    #[error("malformed metadata response: {message}")]
    MalformedResponse { message: String },
}

impl From<serde_json::Error> for SynthesisError {
    fn from(e: serde_json::Error) -> Self {
        SynthesisError::MalformedResponse {
            message: e.to_string(),
        }
    }
}
