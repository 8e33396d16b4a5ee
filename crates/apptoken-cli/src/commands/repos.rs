//! `apptoken repos` command - List repositories visible to the installation.

use anyhow::{Context, Result};
use apptoken_core::Flow;

use super::utils::connect;
use super::{AppArgs, RepoArgs};
use crate::output;

/// Run the repos command.
pub fn run(app: &AppArgs, repo: &RepoArgs, json: bool) -> Result<()> {
    let (config, client, rt) = connect(app, Some(repo))?;
    let repository = config.repository()?;

    let repositories = rt
        .block_on(async {
            let acquired = Flow::new(config.credentials(), &client)
                .sign()?
                .resolve(repository)
                .await?
                .acquire()
                .await?;
            output::mask(acquired.token().expose());
            Ok::<_, anyhow::Error>(client.list_repositories(acquired.token()).await?)
        })
        .context("Failed to list installation repositories")?;

    if json {
        output::essential(&serde_json::to_string_pretty(&repositories)?);
        return Ok(());
    }

    if repositories.is_empty() {
        output::warn("Installation has no accessible repositories");
        return Ok(());
    }

    for repository in &repositories {
        output::essential(&format!("{:<12} {}", repository.id, repository.full_name));
    }
    Ok(())
}
