//! Rate-limit backoff policy.
//!
//! This module classifies fetch errors (rate limited, upstream, unavailable) and
//! owns the interval state machine the poll loop waits on between cycles.

mod classify;
mod policy;
mod state;

pub use classify::{classify, is_rate_limit_code};
pub use policy::{BackoffPolicy, ErrorKind, Outcome, DEFAULT_RATE_LIMIT_CODES};
pub use state::PollState;
