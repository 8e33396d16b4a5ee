//! Writing results to the CI environment file.
//!
//! GitHub Actions reads `name=value` lines from the file named by
//! `GITHUB_ENV` after a step exits and exports them to later steps.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Variable name the token is exported under by default.
pub const DEFAULT_OUTPUT_NAME: &str = "app_token";

/// Validate a variable name for a `name=value` line.
///
/// # Errors
/// Returns [`Error::InvalidOutputName`] if the name is empty or contains
/// `=` or whitespace.
pub fn validate_output_name(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('=') || name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidOutputName(name.to_string()));
    }
    Ok(())
}

/// An append-only CI environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    path: PathBuf,
    name: String,
}

impl EnvFile {
    /// Target `path`, exporting under `name`.
    ///
    /// # Errors
    /// Returns error if `name` is not a valid variable name.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_output_name(&name)?;
        Ok(Self {
            path: path.into(),
            name,
        })
    }

    /// Path of the environment file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Variable name the token is exported under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append `name=token` as a single line.
    ///
    /// The file is created if missing; existing content is left untouched.
    ///
    /// # Errors
    /// Returns error if the token is empty, contains a line break, or the
    /// file cannot be written.
    pub fn emit(&self, token: &str) -> Result<()> {
        if token.is_empty() {
            return Err(Error::EmptyToken);
        }
        if token.contains(['\n', '\r']) {
            return Err(Error::InvalidEnvValue(self.name.clone()));
        }

        let line = format!("{}={token}\n", self.name);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;
        file.write_all(line.as_bytes())
            .map_err(|source| self.write_error(source))?;

        tracing::info!(
            path = %self.path.display(),
            name = %self.name,
            "wrote token to environment file"
        );
        Ok(())
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::WriteEnvFile {
            path: self.path.clone(),
            source,
        }
    }
}
