//! `apptoken installations` command - List the App's installations.

use anyhow::{Context, Result};

use super::AppArgs;
use super::utils::connect;
use crate::output;

/// Run the installations command.
pub fn run(app: &AppArgs, json: bool) -> Result<()> {
    let (config, client, rt) = connect(app, None)?;

    let installations = rt
        .block_on(async {
            let jwt = config.credentials().sign()?;
            client.list_installations(&jwt).await
        })
        .context("Failed to list installations")?;

    if json {
        output::essential(&serde_json::to_string_pretty(&installations)?);
        return Ok(());
    }

    if installations.is_empty() {
        output::warn("App has no installations");
        return Ok(());
    }

    for installation in &installations {
        output::essential(&format!(
            "{:<12} {} ({})",
            installation.id.get(),
            installation.account.login,
            installation.account.account_type
        ));
    }
    Ok(())
}
