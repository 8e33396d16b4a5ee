//! `apptoken installation` command - Print the installation id for a repository.

use anyhow::{Context, Result};
use apptoken_core::Flow;

use super::utils::connect;
use super::{AppArgs, RepoArgs};
use crate::output;

/// Run the installation command.
pub fn run(app: &AppArgs, repo: &RepoArgs, json: bool) -> Result<()> {
    let (config, client, rt) = connect(app, Some(repo))?;
    let repository = config.repository()?;

    let resolved = rt
        .block_on(async {
            Flow::new(config.credentials(), &client)
                .sign()?
                .resolve(repository)
                .await
        })
        .with_context(|| format!("Failed to find installation for {repository}"))?;

    let id = resolved.installation_id();
    if json {
        output::essential(&serde_json::json!({ "repository": repository, "id": id }).to_string());
    } else {
        output::essential(&id.to_string());
    }
    Ok(())
}
