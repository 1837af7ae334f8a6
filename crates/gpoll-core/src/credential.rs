//! Access token loading from the environment (and an optional `.env` file).

use std::fmt;

use thiserror::Error;

/// Environment variable holding the Graph API access token.
pub const DEFAULT_TOKEN_ENV: &str = "FACEBOOK_ACCESS_TOKEN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Variable unset, empty, or not valid unicode.
    #[error("Facebook access token is missing.")]
    Missing { var: String },
}

/// Bearer token for the Graph API. Never printed: `Debug` is redacted and there is
/// no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the token from `var`. Empty values count as missing.
    pub fn from_env(var: &str) -> Result<Self, CredentialError> {
        std::env::var(var)
            .ok()
            .filter(|v| !v.is_empty())
            .map(Self)
            .ok_or_else(|| CredentialError::Missing {
                var: var.to_string(),
            })
    }

    /// Raw token, for building the request only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Load `.env` from the working directory (or a parent) into the process
/// environment. A missing file is not an error; variables already set win.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("ignoring unreadable .env file: {}", e),
    }
}
