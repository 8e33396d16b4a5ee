//! # apptoken-github
//!
//! GitHub App authentication: signs App JWTs from a private key and
//! exchanges them for installation access tokens.

mod client;
mod error;
pub mod jwt;
mod key;
mod types;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use jwt::{AppCredentials, AppJwt, Claims, JWT_LIFETIME_SECS};
pub use key::PrivateKeyFile;
pub use types::{
    AccessToken, Account, AppId, Installation, InstallationId, IssueState, IssueSummary,
    RepositorySummary,
};
