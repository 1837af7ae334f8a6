//! The poll interval, owned by the loop and advanced once per cycle.

use std::time::Duration;

use super::policy::{BackoffPolicy, Outcome};

/// Current wait between cycles. Starts at the policy base.
#[derive(Debug, Clone)]
pub struct PollState {
    policy: BackoffPolicy,
    interval: Duration,
}

impl PollState {
    pub fn new(policy: BackoffPolicy) -> Self {
        let interval = policy.base_interval;
        Self { policy, interval }
    }

    pub fn policy(&self) -> &BackoffPolicy {
        &self.policy
    }

    /// Interval the loop waits before the next cycle.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True once a rate limit has pushed the interval above base.
    pub fn is_backing_off(&self) -> bool {
        self.interval > self.policy.base_interval
    }

    /// Apply one cycle's outcome and return the new interval.
    pub fn advance(&mut self, outcome: Outcome) -> Duration {
        self.interval = self.policy.next_interval(self.interval, outcome);
        self.interval
    }
}
