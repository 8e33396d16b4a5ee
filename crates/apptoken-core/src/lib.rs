//! # apptoken-core
//!
//! Core library for apptoken: explicit configuration, the linear
//! sign → resolve → exchange → emit flow, and the CI environment file sink.

pub mod config;
pub mod error;
pub mod flow;
pub mod repository;
pub mod sink;

pub use config::Config;
pub use error::{Error, Result};
pub use flow::{Acquired, Emitted, Flow, Resolved, Signed, run};
pub use repository::RepoSlug;
pub use sink::{DEFAULT_OUTPUT_NAME, EnvFile};
