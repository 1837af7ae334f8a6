//! Result of one poll cycle and its user-facing line.

use std::fmt;
use std::time::Duration;

use crate::graph::{FetchError, GraphError, UserInfo};

/// What happened in one cycle, after the interval was updated.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Profile fetched; interval reset to base.
    Fetched(UserInfo),
    /// Rate-limit error; `wait` is the grown interval.
    RateLimited { error: GraphError, wait: Duration },
    /// Any other error; interval unchanged.
    Failed(FetchError),
}

impl CycleOutcome {
    /// Errors go to stderr; profiles and backoff notices to stdout.
    pub fn is_error(&self) -> bool {
        matches!(self, CycleOutcome::Failed(_))
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleOutcome::Fetched(info) => write!(f, "User Info: {}", info),
            CycleOutcome::RateLimited { wait, .. } => write!(
                f,
                "Rate limit exceeded, retrying in {} seconds.",
                format_secs(*wait)
            ),
            CycleOutcome::Failed(e) => write!(f, "Error fetching user info: {}", e),
        }
    }
}

/// Seconds without a trailing `.0`: 3s → "3", 4.5s → "4.5".
pub fn format_secs(d: Duration) -> String {
    format!("{}", d.as_secs_f64())
}
