//! Error types for MISO Dash
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config and log files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Transport failure or non-success status from the backend
    #[snafu(display("Request to {url} failed: {source}"))]
    Http { url: String, source: reqwest::Error },

    /// Response body is not the expected JSON document
    #[snafu(display("Invalid response body from {url}: {source}"))]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// Response decoded but carries no `nodes` field
    #[snafu(display("No node data received from {url}"))]
    MissingNodes { url: String },
}

impl Error {
    /// Whether this error originates at the fetch boundary
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Http { .. } | Error::Decode { .. } | Error::MissingNodes { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_classification() {
        let missing = Error::MissingNodes {
            url: "http://localhost:8000/api/miso-rt-data/".to_string(),
        };
        assert!(missing.is_fetch_failure());
        assert!(missing.to_string().contains("No node data"));

        let invalid = Error::Invalid {
            message: "bad page size".to_string(),
        };
        assert!(!invalid.is_fetch_failure());
    }

    #[test]
    fn test_decode_error_is_fetch_failure() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("must fail");
        let err = Error::Decode {
            url: "http://x".to_string(),
            source,
        };
        assert!(err.is_fetch_failure());
    }
}
