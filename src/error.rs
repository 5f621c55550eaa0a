//! Error types for the Medium client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::model::ModelKind;
use thiserror::Error;

/// The main error type for the Medium client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Decode Errors
    // ============================================================================
    /// The response body could not be decoded into an envelope
    #[error("Failed to decode response: {message}")]
    Decode {
        /// What went wrong
        message: String,
    },

    /// The response decoded fine but the parser produced no model
    #[error("No model in response for {resource}")]
    EmptyModel {
        /// The resource that was requested
        resource: String,
    },

    /// A parser produced a model of a different kind than the resource declares
    #[error("Model mismatch for {resource}: expected {expected}, got {actual}")]
    ModelMismatch {
        /// The resource that was requested
        resource: String,
        /// The kind the resource declares
        expected: ModelKind,
        /// The kind that actually came back
        actual: ModelKind,
    },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// The HTTP request itself failed (connect, DNS, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// A configured base URL did not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Passthrough for wrapped errors
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an empty-model error for a resource
    pub fn empty_model(resource: impl Into<String>) -> Self {
        Self::EmptyModel {
            resource: resource.into(),
        }
    }

    /// Create a model-mismatch error
    pub fn model_mismatch(
        resource: impl Into<String>,
        expected: ModelKind,
        actual: ModelKind,
    ) -> Self {
        Self::ModelMismatch {
            resource: resource.into(),
            expected,
            actual,
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error means "the response carried no model".
    ///
    /// This is the expected outcome for resources whose parsing is not
    /// implemented (fetching a single post) and for envelope shapes the
    /// collection parser does not recognize. Callers should treat it as
    /// "no data" rather than a fault.
    pub fn is_empty_model(&self) -> bool {
        matches!(self, Error::EmptyModel { .. })
    }

    /// Check if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::HttpStatus { .. })
    }
}

/// Result type alias for the Medium client
pub type Result<T> = std::result::Result<T, Error>;
