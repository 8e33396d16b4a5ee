//! `apptoken token` command - Fetch an installation token and export it.

use std::path::Path;

use anyhow::{Context, Result};

use super::utils::connect;
use super::{AppArgs, RepoArgs};
use crate::output;

/// Run the token command.
pub fn run(app: &AppArgs, repo: &RepoArgs, env_file: &Path, output_name: &str) -> Result<()> {
    let (config, client, rt) = connect(app, Some(repo))?;
    let config = config.with_env_file(env_file, output_name)?;

    output::info(&format!(
        "Requesting installation token for {}",
        config.repository()?
    ));

    let emitted = rt
        .block_on(apptoken_core::run(&config, &client, |token| {
            output::mask(token.expose());
        }))
        .context("Failed to obtain installation token")?;

    output::success(&format!(
        "Exported {} to {} (installation {})",
        emitted.name,
        emitted.path.display(),
        emitted.installation_id
    ));
    Ok(())
}
