//! The token flow.
//!
//! A run moves strictly forward through
//! `Flow` → [`Signed`] → [`Resolved`] → [`Acquired`] → [`Emitted`].
//! Each step consumes the previous state, so a step cannot be repeated or
//! skipped, and any error ends the run.

use std::path::PathBuf;

use apptoken_github::{AccessToken, AppCredentials, AppJwt, GitHubClient, InstallationId};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::repository::RepoSlug;
use crate::sink::EnvFile;

/// Start of a run: nothing signed yet.
#[derive(Debug)]
pub struct Flow<'a> {
    credentials: &'a AppCredentials,
    client: &'a GitHubClient,
}

/// An App JWT has been signed.
#[derive(Debug)]
pub struct Signed<'a> {
    flow: Flow<'a>,
    jwt: AppJwt,
}

/// The installation for the repository is known.
#[derive(Debug)]
pub struct Resolved<'a> {
    flow: Flow<'a>,
    jwt: AppJwt,
    installation_id: InstallationId,
}

/// An installation access token has been obtained.
#[derive(Debug)]
pub struct Acquired {
    installation_id: InstallationId,
    token: AccessToken,
}

/// The token has been written to the environment file.
#[derive(Debug)]
pub struct Emitted {
    /// Installation the token belongs to.
    pub installation_id: InstallationId,
    /// File the token was appended to.
    pub path: PathBuf,
    /// Variable name the token was exported under.
    pub name: String,
}

impl<'a> Flow<'a> {
    /// Begin a run.
    #[must_use]
    pub const fn new(credentials: &'a AppCredentials, client: &'a GitHubClient) -> Self {
        Self {
            credentials,
            client,
        }
    }

    /// Sign an App JWT.
    ///
    /// # Errors
    /// Returns error if the key cannot be read or signing fails.
    pub fn sign(self) -> Result<Signed<'a>> {
        let jwt = self.credentials.sign()?;
        tracing::info!(app_id = %self.credentials.app_id(), "signed app JWT");
        Ok(Signed { flow: self, jwt })
    }
}

impl<'a> Signed<'a> {
    /// The signed JWT.
    #[must_use]
    pub const fn jwt(&self) -> &AppJwt {
        &self.jwt
    }

    /// Look up the App's installation on `repository`.
    ///
    /// # Errors
    /// Returns error if GitHub does not answer `200 OK`.
    pub async fn resolve(self, repository: &RepoSlug) -> Result<Resolved<'a>> {
        let installation_id = self
            .flow
            .client
            .resolve_installation(repository.owner(), repository.name(), &self.jwt)
            .await?;

        Ok(Resolved {
            flow: self.flow,
            jwt: self.jwt,
            installation_id,
        })
    }
}

impl Resolved<'_> {
    /// The resolved installation.
    #[must_use]
    pub const fn installation_id(&self) -> InstallationId {
        self.installation_id
    }

    /// Exchange the JWT for an installation access token.
    ///
    /// A JWT whose window elapsed since the lookup is replaced with a fresh
    /// one first.
    ///
    /// # Errors
    /// Returns error if re-signing fails, GitHub does not answer
    /// `201 Created`, or the returned token is empty.
    pub async fn acquire(self) -> Result<Acquired> {
        let jwt = if self.jwt.is_expired() {
            tracing::info!("app JWT expired since lookup, re-signing");
            self.flow.credentials.sign()?
        } else {
            self.jwt
        };

        let token = self
            .flow
            .client
            .create_access_token(self.installation_id, &jwt)
            .await?;
        if token.expose().is_empty() {
            return Err(Error::EmptyToken);
        }

        Ok(Acquired {
            installation_id: self.installation_id,
            token,
        })
    }
}

impl Acquired {
    /// The installation access token.
    #[must_use]
    pub const fn token(&self) -> &AccessToken {
        &self.token
    }

    /// The installation the token belongs to.
    #[must_use]
    pub const fn installation_id(&self) -> InstallationId {
        self.installation_id
    }

    /// Append the token to `sink`.
    ///
    /// # Errors
    /// Returns error if the token is empty or the file cannot be written.
    pub fn emit(self, sink: &EnvFile) -> Result<Emitted> {
        sink.emit(self.token.expose())?;
        Ok(Emitted {
            installation_id: self.installation_id,
            path: sink.path().to_path_buf(),
            name: sink.name().to_string(),
        })
    }
}

/// Run the whole flow for `config`.
///
/// `on_token` sees the token after it is obtained and before it is written;
/// the CLI uses it to print the log-masking directive. It is never called
/// with an empty token.
///
/// # Errors
/// Returns the first error of any step; nothing is retried.
pub async fn run<F>(config: &Config, client: &GitHubClient, on_token: F) -> Result<Emitted>
where
    F: FnOnce(&AccessToken),
{
    let repository = config.repository()?;
    let sink = config.env_file()?;

    let acquired = Flow::new(config.credentials(), client)
        .sign()?
        .resolve(repository)
        .await?
        .acquire()
        .await?;

    on_token(acquired.token());
    acquired.emit(sink)
}
