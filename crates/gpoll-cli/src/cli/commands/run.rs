//! `gpoll run` – poll the profile at the backoff-adjusted interval, forever.

use anyhow::Result;
use gpoll_core::config::PollerConfig;
use gpoll_core::poller::{ConsoleReport, Poller};

use super::load_client;

pub async fn run_poll(cfg: &PollerConfig) -> Result<()> {
    let policy = cfg.backoff_policy()?;
    let Some(client) = load_client(cfg)? else {
        return Ok(());
    };
    tracing::info!(endpoint = %client.endpoint(), "polling profile");
    Poller::new(client, policy, ConsoleReport).run().await;
    Ok(())
}
