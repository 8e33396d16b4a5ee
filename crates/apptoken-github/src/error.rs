//! Error types for GitHub App authentication.

use std::path::PathBuf;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while authenticating as a GitHub App.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The private key path does not point at an existing file.
    #[error("private key file not found: {}", .0.display())]
    MissingKeyFile(PathBuf),

    /// The private key could not be read from disk.
    #[error("failed to read private key {}", path.display())]
    ReadKey {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The private key is not a valid RSA PEM.
    #[error("invalid RSA private key")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),

    /// Signing the JWT failed.
    #[error("failed to sign JWT")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The JWT's validity window has already elapsed.
    #[error("JWT expired at {expires_at} (now {now})")]
    ExpiredJwt {
        /// Expiry of the refused token, Unix seconds.
        expires_at: i64,
        /// Time of the check, Unix seconds.
        now: i64,
    },

    /// GitHub answered with a status other than the expected one.
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// GitHub accepted the request but sent no body to decode.
    #[error("GitHub API returned no content ({status})")]
    EmptyResponse {
        /// HTTP status code.
        status: u16,
    },

    /// HTTP transport error (connection, timeout, decoding).
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// HTTP status of an API error, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::EmptyResponse { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error stems from local configuration rather than the network.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::MissingKeyFile(_) | Self::ReadKey { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status() {
        let err = Error::Api {
            status: 404,
            message: r#"{"message":"Not Found"}"#.into(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = Error::MissingKeyFile(PathBuf::from("pem.txt"));
        assert!(err.is_config());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("pem.txt"));
    }
}
