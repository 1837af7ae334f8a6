//! gpoll core: Graph API profile client, rate-limit backoff, and the poll loop.

pub mod config;
pub mod credential;
pub mod logging;

pub mod backoff;
pub mod graph;
pub mod poller;
