//! `gpoll once` – a single fetch.

use anyhow::Result;
use gpoll_core::config::PollerConfig;
use gpoll_core::poller::{ConsoleReport, Poller};

use super::load_client;

pub async fn run_once(cfg: &PollerConfig) -> Result<()> {
    let policy = cfg.backoff_policy()?;
    let Some(client) = load_client(cfg)? else {
        return Ok(());
    };
    let mut poller = Poller::new(client, policy, ConsoleReport);
    let outcome = poller.run_cycle().await;
    tracing::debug!(error = outcome.is_error(), "single fetch done");
    Ok(())
}
