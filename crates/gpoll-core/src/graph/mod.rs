//! Graph API client: one GET of the authenticated user's profile fields.
//!
//! Uses the curl crate (libcurl) for the transfer. The blocking transfer runs on
//! tokio's blocking pool so the poll loop can await it without stalling the runtime.

mod error;
mod parse;
mod request;
mod transfer;

use std::fmt;
use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

use crate::config::PollerConfig;
use crate::credential::AccessToken;

pub use error::{FetchError, GraphError};
pub use parse::parse_response;
pub use request::{profile_endpoint, redact_token, request_url};

/// Successful response body for `GET /{version}/me?fields=id,name,last_name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub last_name: String,
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} name={} last_name={}",
            self.id, self.name, self.last_name
        )
    }
}

/// Something the poll loop can ask for the current profile.
///
/// The loop is generic over this so tests can script outcomes without a network.
pub trait ProfileSource {
    fn fetch(&self) -> impl Future<Output = Result<UserInfo, FetchError>> + Send;
}

impl<T: ProfileSource + Sync> ProfileSource for &T {
    fn fetch(&self) -> impl Future<Output = Result<UserInfo, FetchError>> + Send {
        (**self).fetch()
    }
}

/// Client for the Graph API `me` node, bound to one access token.
#[derive(Debug, Clone)]
pub struct GraphClient {
    endpoint: Url,
    fields: Vec<String>,
    token: AccessToken,
    timeout: Option<Duration>,
}

impl GraphClient {
    /// Client for `endpoint` (e.g. `https://graph.facebook.com/v19.0/me`).
    pub fn new(endpoint: Url, fields: Vec<String>, token: AccessToken) -> Self {
        Self {
            endpoint,
            fields,
            token,
            timeout: None,
        }
    }

    /// Build a client from the loaded configuration.
    pub fn from_config(cfg: &PollerConfig, token: AccessToken) -> Result<Self> {
        let endpoint = profile_endpoint(&cfg.api_base, &cfg.api_version)
            .with_context(|| format!("invalid api_base {:?}", cfg.api_base))?;
        let client = Self::new(endpoint, cfg.fields.clone(), token);
        Ok(client.with_timeout(cfg.request_timeout()))
    }

    /// Bound the whole transfer. `None` (the default) waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ProfileSource for GraphClient {
    async fn fetch(&self) -> Result<UserInfo, FetchError> {
        let url = request_url(&self.endpoint, &self.fields, &self.token);
        tracing::debug!(url = %redact_token(&url), "GET profile");

        let timeout = self.timeout;
        let response = tokio::task::spawn_blocking(move || transfer::get(&url, timeout))
            .await
            .map_err(|e| FetchError::NoData(format!("request task failed: {}", e)))?
            .map_err(|e| FetchError::NoData(format!("request failed: {}", e)))?;

        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "profile response"
        );
        parse_response(response.status, &response.body)
    }
}
