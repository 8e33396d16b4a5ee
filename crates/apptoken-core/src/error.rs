//! Error types for apptoken-core.

use std::path::PathBuf;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while obtaining and emitting a token.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Repository is not of the form `owner/name`.
    #[error("invalid repository '{slug}': {reason}")]
    InvalidRepository {
        /// The rejected value.
        slug: String,
        /// Why it was rejected.
        reason: String,
    },

    /// No repository was configured.
    #[error("no repository configured (is GITHUB_REPOSITORY set?)")]
    MissingRepository,

    /// No environment file was configured.
    #[error("no environment file configured (is GITHUB_ENV set?)")]
    MissingEnvFile,

    /// The output variable name cannot be written as `name=value`.
    #[error("invalid output name '{0}'")]
    InvalidOutputName(String),

    /// GitHub returned an empty token.
    #[error("token not returned")]
    EmptyToken,

    /// The value would break the `name=value` line format.
    #[error("value for '{0}' contains a line break")]
    InvalidEnvValue(String),

    /// Writing the environment file failed.
    #[error("failed to write {}", path.display())]
    WriteEnvFile {
        /// Environment file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// GitHub App authentication error.
    #[error(transparent)]
    GitHub(#[from] apptoken_github::Error),
}
