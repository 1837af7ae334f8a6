//! Classify fetch errors into backoff error kinds.

use crate::backoff::policy::{BackoffPolicy, ErrorKind};
use crate::graph::FetchError;

/// True if `code` is one of the policy's rate-limit codes.
pub fn is_rate_limit_code(policy: &BackoffPolicy, code: i64) -> bool {
    policy.rate_limit_codes.contains(&code)
}

/// Classify a fetch error (structured or not) into an ErrorKind.
pub fn classify(policy: &BackoffPolicy, e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Graph(g) if is_rate_limit_code(policy, g.code) => ErrorKind::RateLimited,
        FetchError::Graph(g) => ErrorKind::Upstream(g.code),
        FetchError::NoData(_) => ErrorKind::Unavailable,
    }
}
