//! Error taxonomy for the JSON codec.

use thiserror::Error;

/// Why a document could not be decoded (or a value encoded).
///
/// The three variants separate "not JSON" from "JSON but not this
/// resource's shape" from "a resource type this crate does not model", so
/// callers can decide whether to reject, repair, or skip a document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The input is valid JSON but violates the FHIR representation rules
    /// for the target type: wrong value types, missing required fields,
    /// unknown codes, or conflicting choice keys.
    #[error("invalid {target}: {message}")]
    Structure {
        /// The type being decoded when the error was found.
        target: String,
        message: String,
    },

    /// The document's `resourceType` names a resource this crate has no
    /// model for.
    #[error("unknown resource type '{0}'")]
    UnknownType(String),
}

impl ParseError {
    pub(crate) fn structure(target: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::Structure {
            target: target.into(),
            message: message.into(),
        }
    }
}
