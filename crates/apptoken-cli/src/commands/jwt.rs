//! `apptoken jwt` command - Sign and print an App JWT.

use anyhow::{Context, Result};
use serde::Serialize;

use super::AppArgs;
use super::utils::load_config;
use crate::output;

/// JSON output for the jwt command.
#[derive(Serialize)]
struct JwtOutput<'a> {
    token: &'a str,
    iat: i64,
    exp: i64,
}

/// Run the jwt command.
pub fn run(app: &AppArgs, json: bool) -> Result<()> {
    let config = load_config(app, None)?;
    let jwt = config
        .credentials()
        .sign()
        .context("Failed to sign App JWT")?;
    output::mask(jwt.expose());

    if json {
        let out = JwtOutput {
            token: jwt.expose(),
            iat: jwt.issued_at(),
            exp: jwt.expires_at(),
        };
        output::essential(&serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    output::essential(jwt.expose());
    output::info(&format!("Valid until {} (Unix seconds)", jwt.expires_at()));
    Ok(())
}
