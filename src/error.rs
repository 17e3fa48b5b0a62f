//! Error types for the Cirrus Engine client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Structured error payload returned by the Engine API for non-2xx responses.
///
/// Wire shape: `{ "error": { "code": 422, "message": "...", "validation": { "field": "..." } } }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Numeric error code reported by the API
    pub code: i64,
    /// Human-readable error message
    pub message: String,
    /// Per-field validation messages, if any
    #[serde(default)]
    pub validation: HashMap<String, String>,
}

/// Outer envelope the API wraps error payloads in.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiError,
}

/// The main error type for the Cirrus Engine client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport / HTTP Errors
    // ============================================================================
    /// The HTTP round trip itself failed (connection, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API responded with a 5xx status
    #[error("server error {status}: {body}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The API rejected the request with a structured error payload
    #[error("received error from api, code {}: {}", .0.code, .0.message)]
    Api(ApiError),

    /// A URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Payload Errors
    // ============================================================================
    /// A response body did not match the expected shape
    #[error("could not decode response: {message}")]
    Decode {
        /// What failed to decode
        message: String,
    },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// A caller-supplied scan predicate failed
    #[error("predicate failed: {message}")]
    Predicate {
        /// Failure reported by the predicate
        message: String,
    },

    /// A scan exhausted its page without any element matching
    #[error("looped all items and the condition was never met")]
    ConditionNeverMet,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// The client configuration is insufficient or invalid
    #[error("could not configure client: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },

    /// A required environment variable is not set
    #[error("environment variable missing: {name}")]
    EnvMissing {
        /// Name of the missing variable
        name: String,
    },
}

impl Error {
    /// Create a server error from a status code and response body
    pub fn server(status: u16, body: impl Into<String>) -> Self {
        Self::Server {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a predicate error
    pub fn predicate(message: impl Into<String>) -> Self {
        Self::Predicate {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing environment variable error
    pub fn env_missing(name: impl Into<String>) -> Self {
        Self::EnvMissing { name: name.into() }
    }

    /// Check whether this error originated on the server side (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Server { .. })
    }
}

/// Result type alias for the Cirrus Engine client
pub type Result<T> = std::result::Result<T, Error>;
