//! `owner/name` repository slugs.
//!
//! GitHub Actions exposes the current repository as `GITHUB_REPOSITORY`
//! in this form. [`RepoSlug`] validates it once so the flow can rely on
//! both halves being present.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A validated `owner/name` repository reference.
///
/// # Examples
///
/// ```
/// use apptoken_core::RepoSlug;
///
/// let slug: RepoSlug = "VCTLabs/actions-app-token".parse().unwrap();
/// assert_eq!(slug.owner(), "VCTLabs");
/// assert_eq!(slug.name(), "actions-app-token");
///
/// assert!("no-slash".parse::<RepoSlug>().is_err());
/// assert!("a/b/c".parse::<RepoSlug>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    /// Parse and validate an `owner/name` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRepository`] if the value does not contain
    /// exactly one `/`, either half is empty, or it contains whitespace.
    pub fn new(slug: &str) -> Result<Self, Error> {
        let invalid = |reason: &str| Error::InvalidRepository {
            slug: slug.to_string(),
            reason: reason.to_string(),
        };

        if slug.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }

        let mut parts = slug.split('/');
        let (Some(owner), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected owner/name"));
        };

        if owner.is_empty() {
            return Err(invalid("owner is empty"));
        }
        if name.is_empty() {
            return Err(invalid("name is empty"));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Repository owner (user or organization).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl Serialize for RepoSlug {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RepoSlug {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
