//! `apptoken issues` command - List open issues with an installation token.

use anyhow::{Context, Result};
use apptoken_core::{Flow, RepoSlug};
use colored::Colorize;

use super::utils::connect;
use super::{AppArgs, RepoArgs};
use crate::output;

/// Run the issues command.
pub fn run(app: &AppArgs, repo: &RepoArgs, target: Option<&str>, json: bool) -> Result<()> {
    let (config, client, rt) = connect(app, Some(repo))?;
    let repository = config.repository()?;
    let target = match target {
        Some(slug) => RepoSlug::new(slug)?,
        None => repository.clone(),
    };

    let issues = rt
        .block_on(async {
            let acquired = Flow::new(config.credentials(), &client)
                .sign()?
                .resolve(repository)
                .await?
                .acquire()
                .await?;
            output::mask(acquired.token().expose());
            Ok::<_, anyhow::Error>(
                client
                    .list_issues(target.owner(), target.name(), acquired.token())
                    .await?,
            )
        })
        .with_context(|| format!("Failed to list issues of {target}"))?;

    if json {
        output::essential(&serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    if issues.is_empty() {
        output::info(&format!("No open issues in {target}"));
        return Ok(());
    }

    for issue in &issues {
        output::essential(&format!(
            "{} {}",
            format!("#{}", issue.number).dimmed(),
            issue.title
        ));
    }
    Ok(())
}
