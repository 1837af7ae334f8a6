//! CLI command handlers. Each command is in its own file.

mod completions;
mod once;
mod run;

pub use completions::run_completions;
pub use once::run_once;
pub use run::run_poll;

use anyhow::Result;
use gpoll_core::config::PollerConfig;
use gpoll_core::credential::{self, AccessToken};
use gpoll_core::graph::GraphClient;

/// Build the Graph client from the environment token. Prints the missing-token
/// message and returns `None` when there is no token; that is not an error exit.
pub(crate) fn load_client(cfg: &PollerConfig) -> Result<Option<GraphClient>> {
    credential::load_dotenv();
    match AccessToken::from_env(&cfg.token_env) {
        Ok(token) => Ok(Some(GraphClient::from_config(cfg, token)?)),
        Err(e) => {
            tracing::debug!(var = %cfg.token_env, "no access token");
            eprintln!("{}", e);
            Ok(None)
        }
    }
}
