//! GitHub App JWT signing.
//!
//! GitHub authenticates an App (as opposed to one of its installations) with a
//! short-lived RS256 JWT whose issuer is the App id.

use chrono::Utc;
use jsonwebtoken::{Algorithm, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::key::PrivateKeyFile;
use crate::types::AppId;

/// Lifetime of a signed App JWT, in seconds.
pub const JWT_LIFETIME_SECS: i64 = 180;

/// Claims of a GitHub App JWT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issued at, Unix seconds.
    pub iat: i64,
    /// Expiry, Unix seconds.
    pub exp: i64,
    /// Issuer: the App id.
    pub iss: String,
}

impl Claims {
    /// Claims for `app_id` issued at `now`.
    #[must_use]
    pub fn new(app_id: AppId, now: i64) -> Self {
        Self {
            iat: now,
            exp: now + JWT_LIFETIME_SECS,
            iss: app_id.to_string(),
        }
    }
}

/// A signed App JWT together with its validity window.
pub struct AppJwt {
    token: SecretString,
    issued_at: i64,
    expires_at: i64,
}

impl AppJwt {
    /// The compact `header.claims.signature` form.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.token.expose_secret()
    }

    /// Issue time, Unix seconds.
    #[must_use]
    pub const fn issued_at(&self) -> i64 {
        self.issued_at
    }

    /// Expiry time, Unix seconds.
    #[must_use]
    pub const fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Whether the token's window has elapsed at `now`.
    #[must_use]
    pub const fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }

    /// Whether the token's window has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(now())
    }

    /// Fail with [`Error::ExpiredJwt`] if the window has elapsed.
    ///
    /// # Errors
    /// Returns error if the token is expired.
    pub fn ensure_fresh(&self) -> Result<()> {
        let now = now();
        if self.is_expired_at(now) {
            return Err(Error::ExpiredJwt {
                expires_at: self.expires_at,
                now,
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for AppJwt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppJwt")
            .field("token", &"[redacted]")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// App id and private key: everything needed to sign App JWTs.
#[derive(Debug, Clone)]
pub struct AppCredentials {
    app_id: AppId,
    key: PrivateKeyFile,
}

impl AppCredentials {
    /// Bundle an App id with its private key file.
    #[must_use]
    pub const fn new(app_id: AppId, key: PrivateKeyFile) -> Self {
        Self { app_id, key }
    }

    /// The App id.
    #[must_use]
    pub const fn app_id(&self) -> AppId {
        self.app_id
    }

    /// The private key file.
    #[must_use]
    pub const fn key(&self) -> &PrivateKeyFile {
        &self.key
    }

    /// Sign a JWT valid from now.
    ///
    /// # Errors
    /// Returns error if the key cannot be read or parsed, or signing fails.
    pub fn sign(&self) -> Result<AppJwt> {
        sign(self.app_id, &self.key)
    }
}

/// Current Unix time in seconds.
#[must_use]
pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Sign a JWT for `app_id` valid from now.
///
/// # Errors
/// Returns error if the key cannot be read or parsed, or signing fails.
pub fn sign(app_id: AppId, key: &PrivateKeyFile) -> Result<AppJwt> {
    sign_at(app_id, key, now())
}

/// Sign a JWT for `app_id` issued at `now` (Unix seconds).
///
/// # Errors
/// Returns error if the key cannot be read or parsed, or signing fails.
pub fn sign_at(app_id: AppId, key: &PrivateKeyFile, now: i64) -> Result<AppJwt> {
    let claims = Claims::new(app_id, now);
    let encoding_key = key.encoding_key()?;

    let token = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .map_err(Error::Signing)?;

    tracing::debug!(
        app_id = %app_id,
        iat = claims.iat,
        exp = claims.exp,
        "signed app JWT"
    );

    Ok(AppJwt {
        token: token.into(),
        issued_at: claims.iat,
        expires_at: claims.exp,
    })
}
