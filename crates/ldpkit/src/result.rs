//! Result and error types for ldpkit.

use thiserror::Error;

/// Result type for ldpkit operations
pub type LdpResult<T> = Result<T, LdpError>;

/// Errors that can occur in ldpkit
#[derive(Debug, Error)]
pub enum LdpError {
    /// A link target or base URI failed URI syntax validation.
    ///
    /// This is never downgraded: a server that returns an unparseable link
    /// fails the check outright.
    #[error("Malformed URI '{uri}': {message}")]
    MalformedUri {
        /// Offending URI text
        uri: String,
        /// Parser message
        message: String,
    },

    /// A link-value did not follow the `<uri>; param=value` grammar
    #[error("Malformed link-value '{value}': {message}")]
    MalformedLinkValue {
        /// Offending link-value
        value: String,
        /// Error message
        message: String,
    },

    /// Assertion failed
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },

    /// Test catalog could not be interpreted
    #[error("Catalog error: {message}")]
    Catalog {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl LdpError {
    /// Create a malformed URI error
    #[must_use]
    pub fn malformed_uri(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedUri {
            uri: uri.into(),
            message: message.into(),
        }
    }

    /// Create a malformed link-value error
    #[must_use]
    pub fn malformed_link(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedLinkValue {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an assertion failure
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            message: message.into(),
        }
    }

    /// Create a catalog error
    #[must_use]
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }
}
