//! Explicit run configuration.
//!
//! Nothing in this crate reads the process environment. The caller (the CLI)
//! gathers flags and environment variables and builds a [`Config`].

use std::path::PathBuf;

use apptoken_github::{AppCredentials, AppId, GitHubClient, PrivateKeyFile};

use crate::error::{Error, Result};
use crate::repository::RepoSlug;
use crate::sink::EnvFile;

/// Everything a run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    credentials: AppCredentials,
    repository: Option<RepoSlug>,
    env_file: Option<EnvFile>,
    api_url: String,
}

impl Config {
    /// Configuration for `app_id` signing with the key at `private_key`.
    ///
    /// # Errors
    /// Returns a configuration error if the key file does not exist.
    pub fn new(app_id: AppId, private_key: impl Into<PathBuf>) -> Result<Self> {
        let key = PrivateKeyFile::new(private_key)?;
        Ok(Self {
            credentials: AppCredentials::new(app_id, key),
            repository: None,
            env_file: None,
            api_url: GitHubClient::DEFAULT_API_URL.to_string(),
        })
    }

    /// Set the repository (`owner/name`) to resolve the installation for.
    ///
    /// # Errors
    /// Returns error if the slug is malformed.
    pub fn with_repository(mut self, slug: &str) -> Result<Self> {
        self.repository = Some(RepoSlug::new(slug)?);
        Ok(self)
    }

    /// Set the environment file and the variable name to export under.
    ///
    /// # Errors
    /// Returns error if the variable name is invalid.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>, name: &str) -> Result<Self> {
        self.env_file = Some(EnvFile::new(path, name)?);
        Ok(self)
    }

    /// Point at a different API root (GitHub Enterprise, tests).
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// App id and key.
    #[must_use]
    pub const fn credentials(&self) -> &AppCredentials {
        &self.credentials
    }

    /// API root URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The configured repository.
    ///
    /// # Errors
    /// Returns [`Error::MissingRepository`] if none was set.
    pub fn repository(&self) -> Result<&RepoSlug> {
        self.repository.as_ref().ok_or(Error::MissingRepository)
    }

    /// The configured environment file.
    ///
    /// # Errors
    /// Returns [`Error::MissingEnvFile`] if none was set.
    pub fn env_file(&self) -> Result<&EnvFile> {
        self.env_file.as_ref().ok_or(Error::MissingEnvFile)
    }

    /// Build a client for the configured API root.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn client(&self) -> Result<GitHubClient> {
        Ok(GitHubClient::with_base_url(&self.api_url)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn key_file() -> NamedTempFile {
        NamedTempFile::new().unwrap()
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = Config::new(AppId::new(1), "definitely/missing/pem.txt").unwrap_err();
        match err {
            Error::GitHub(inner) => assert!(inner.is_config()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let key = key_file();
        let config = Config::new(AppId::new(153_667), key.path()).unwrap();

        assert_eq!(config.credentials().app_id(), AppId::new(153_667));
        assert_eq!(config.api_url(), "https://api.github.com");
        assert!(matches!(config.repository(), Err(Error::MissingRepository)));
        assert!(matches!(config.env_file(), Err(Error::MissingEnvFile)));
    }

    #[test]
    fn test_builder() {
        let key = key_file();
        let config = Config::new(AppId::new(1), key.path())
            .unwrap()
            .with_repository("org/repo")
            .unwrap()
            .with_env_file("/tmp/github_env", "app_token")
            .unwrap()
            .with_api_url("http://localhost:1234");

        assert_eq!(config.repository().unwrap().to_string(), "org/repo");
        assert_eq!(config.env_file().unwrap().name(), "app_token");
        assert_eq!(config.client().unwrap().base_url(), "http://localhost:1234");
    }

    #[test]
    fn test_bad_repository() {
        let key = key_file();
        let err = Config::new(AppId::new(1), key.path())
            .unwrap()
            .with_repository("org")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRepository { .. }));
    }
}
