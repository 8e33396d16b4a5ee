use anyhow::{Context, Result};
use apptoken_core::Config;
use apptoken_github::GitHubClient;

use super::{AppArgs, RepoArgs};

/// Build the run configuration from App (and optionally repository) flags.
pub fn load_config(app: &AppArgs, repo: Option<&RepoArgs>) -> Result<Config> {
    let mut config = Config::new(app.app_id, &app.private_key)
        .with_context(|| format!("Cannot use private key '{}'", app.private_key.display()))?
        .with_api_url(&app.api_url);

    if let Some(repo) = repo {
        config = config.with_repository(&repo.repository)?;
    }

    Ok(config)
}

/// Helper to build the config, client and runtime for a network command.
pub fn connect(
    app: &AppArgs,
    repo: Option<&RepoArgs>,
) -> Result<(Config, GitHubClient, tokio::runtime::Runtime)> {
    let config = load_config(app, repo)?;
    let client = config.client().context("Failed to build HTTP client")?;
    let rt = tokio::runtime::Runtime::new()?;
    Ok((config, client, rt))
}
