use std::time::Duration;

/// Graph API codes that mean "slow down": 4 (application request limit) and
/// 17 (user request limit).
pub const DEFAULT_RATE_LIMIT_CODES: [i64; 2] = [4, 17];

/// High-level classification of a failed fetch for backoff purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream error with a rate-limit code.
    RateLimited,
    /// Upstream error with any other code.
    Upstream(i64),
    /// No structured error (network failure, malformed body).
    Unavailable,
}

/// Result of one cycle as seen by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(ErrorKind),
}

/// Multiplicative backoff with a cap, reset on success.
///
/// Only rate-limit failures grow the interval; other failures keep it.
#[derive(Debug, Clone, PartialEq)]
pub struct BackoffPolicy {
    /// Interval after a success, and the starting interval.
    pub base_interval: Duration,
    /// Upper bound on the interval.
    pub max_interval: Duration,
    /// Growth factor applied per rate-limit failure (>= 1.0).
    pub multiplier: f64,
    /// Upstream error codes treated as rate limiting.
    pub rate_limit_codes: Vec<i64>,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(2000),
            max_interval: Duration::from_millis(60_000),
            multiplier: 1.5,
            rate_limit_codes: DEFAULT_RATE_LIMIT_CODES.to_vec(),
        }
    }
}

impl BackoffPolicy {
    /// Interval to wait after `outcome`, given the interval waited last time.
    pub fn next_interval(&self, current: Duration, outcome: Outcome) -> Duration {
        match outcome {
            Outcome::Success => self.base_interval,
            Outcome::Failure(ErrorKind::RateLimited) => self.grow(current),
            Outcome::Failure(ErrorKind::Upstream(_) | ErrorKind::Unavailable) => {
                self.clamp(current)
            }
        }
    }

    /// `min(current * multiplier, max_interval)`, never below `base_interval`.
    pub fn grow(&self, current: Duration) -> Duration {
        let grown = Duration::try_from_secs_f64(current.as_secs_f64() * self.multiplier)
            .unwrap_or(self.max_interval);
        self.clamp(grown)
    }

    fn clamp(&self, d: Duration) -> Duration {
        d.min(self.max_interval).max(self.base_interval)
    }
}
