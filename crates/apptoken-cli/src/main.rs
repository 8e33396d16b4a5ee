//! apptoken CLI - GitHub App installation tokens for CI.

use clap::Parser;

mod commands;
mod logging;
mod output;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    output::set_quiet(cli.quiet);
    logging::init(cli.verbose);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting apptoken");

    let result = match &cli.command {
        Commands::Token {
            app,
            repo,
            env_file,
            output_name,
        } => commands::token::run(app, repo, env_file, output_name),
        Commands::Jwt { app } => commands::jwt::run(app, cli.json),
        Commands::Installation { app, repo } => commands::installation::run(app, repo, cli.json),
        Commands::Installations { app } => commands::installations::run(app, cli.json),
        Commands::Repos { app, repo } => commands::repos::run(app, repo, cli.json),
        Commands::Issues { app, repo, target } => {
            commands::issues::run(app, repo, target.as_deref(), cli.json)
        }
        Commands::Completions { shell } => {
            commands::completions::run(*shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
