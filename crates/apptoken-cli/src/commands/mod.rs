//! CLI command definitions and handlers.

use std::path::PathBuf;

use apptoken_core::DEFAULT_OUTPUT_NAME;
use apptoken_github::{AppId, GitHubClient};
use clap::{Args, Parser, Subcommand};

pub mod completions;
pub mod installation;
pub mod installations;
pub mod issues;
pub mod jwt;
pub mod repos;
pub mod token;
mod utils;

/// apptoken - GitHub App installation tokens for CI.
///
/// Signs a short-lived JWT with the App's private key, exchanges it for an
/// installation access token, and hands the token to later workflow steps.
#[derive(Parser)]
#[command(name = "apptoken")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output as JSON (for tooling integration).
    ///
    /// Supported by: jwt, installation, installations, repos, issues
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress informational output.
    ///
    /// Errors, the log-masking directive and essential results are
    /// still printed.
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// GitHub App identity.
#[derive(Args, Debug, Clone)]
pub struct AppArgs {
    /// GitHub App id.
    #[arg(long, env = "INPUT_APP_ID")]
    pub app_id: AppId,

    /// Path to the App's PEM-encoded private key.
    #[arg(long, env = "INPUT_APP_PEM_PATH", default_value = "pem.txt")]
    pub private_key: PathBuf,

    /// GitHub API root (for GitHub Enterprise).
    #[arg(long, env = "GITHUB_API_URL", default_value = GitHubClient::DEFAULT_API_URL)]
    pub api_url: String,
}

/// Repository the App is installed on.
#[derive(Args, Debug, Clone)]
pub struct RepoArgs {
    /// Repository as `owner/name`.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch an installation token and export it to later steps.
    ///
    /// Prints the `::add-mask::` directive so the token is redacted from
    /// logs, then appends `app_token=<token>` to the environment file.
    #[command(alias = "t")]
    Token {
        #[command(flatten)]
        app: AppArgs,

        #[command(flatten)]
        repo: RepoArgs,

        /// Environment file to append to.
        #[arg(long, env = "GITHUB_ENV")]
        env_file: PathBuf,

        /// Variable name to export the token under.
        #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
        output_name: String,
    },

    /// Sign and print an App JWT (for debugging).
    Jwt {
        #[command(flatten)]
        app: AppArgs,
    },

    /// Print the App's installation id for the repository.
    #[command(alias = "inst")]
    Installation {
        #[command(flatten)]
        app: AppArgs,

        #[command(flatten)]
        repo: RepoArgs,
    },

    /// List every installation of the App.
    Installations {
        #[command(flatten)]
        app: AppArgs,
    },

    /// List repositories the repository's installation can access.
    Repos {
        #[command(flatten)]
        app: AppArgs,

        #[command(flatten)]
        repo: RepoArgs,
    },

    /// List open issues of a repository using an installation token.
    Issues {
        #[command(flatten)]
        app: AppArgs,

        #[command(flatten)]
        repo: RepoArgs,

        /// Repository to list issues of (defaults to --repository).
        #[arg(long)]
        target: Option<String>,
    },

    /// Generate shell completions.
    ///
    /// Outputs completion script to stdout. Redirect to a file and
    /// source it in your shell configuration.
    #[command(alias = "comp")]
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
