//! The poll loop: one cycle at a time, forever.

use std::time::Duration;

use crate::backoff::{classify, BackoffPolicy, ErrorKind, Outcome, PollState};
use crate::graph::{FetchError, ProfileSource};

use super::{CycleOutcome, Report};

/// Owns the interval state and drives `source` at that interval.
pub struct Poller<S, R> {
    source: S,
    report: R,
    state: PollState,
    cycles: u64,
}

impl<S: ProfileSource, R: Report> Poller<S, R> {
    pub fn new(source: S, policy: BackoffPolicy, report: R) -> Self {
        Self {
            source,
            report,
            state: PollState::new(policy),
            cycles: 0,
        }
    }

    /// Wait before the next cycle.
    pub fn interval(&self) -> Duration {
        self.state.interval()
    }

    /// Completed cycles so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// True while a rate limit holds the interval above base.
    pub fn is_backing_off(&self) -> bool {
        self.state.is_backing_off()
    }

    pub fn report(&self) -> &R {
        &self.report
    }

    /// Run one fetch, update the interval, and report the result. Never fails:
    /// every fetch error is folded into the outcome.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        self.cycles += 1;
        let cycle = self.cycles;
        let was_backing_off = self.is_backing_off();

        let outcome = match self.source.fetch().await {
            Ok(info) => {
                let wait = self.state.advance(Outcome::Success);
                tracing::info!(cycle, id = %info.id, interval_ms = millis(wait), "profile fetched");
                CycleOutcome::Fetched(info)
            }
            Err(e) => {
                let kind = classify(self.state.policy(), &e);
                let wait = self.state.advance(Outcome::Failure(kind));
                log_failure(cycle, kind, &e, wait);
                match (kind, e) {
                    (ErrorKind::RateLimited, FetchError::Graph(error)) => {
                        CycleOutcome::RateLimited { error, wait }
                    }
                    (_, e) => CycleOutcome::Failed(e),
                }
            }
        };

        if was_backing_off != self.is_backing_off() {
            if self.is_backing_off() {
                tracing::info!(cycle, "entering backoff");
            } else {
                tracing::info!(cycle, "back to nominal interval");
            }
        }

        self.report.emit(&outcome);
        outcome
    }

    /// Poll until the process exits. There is no stop condition and no retry limit.
    pub async fn run(mut self) {
        tracing::info!(
            interval_ms = millis(self.interval()),
            "starting profile poll loop"
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.state.interval()).await;
        }
    }
}

fn millis(d: Duration) -> u64 {
    d.as_millis() as u64
}

fn log_failure(cycle: u64, kind: ErrorKind, e: &FetchError, wait: Duration) {
    let interval_ms = millis(wait);
    match (kind, e) {
        (ErrorKind::RateLimited, FetchError::Graph(g)) => tracing::warn!(
            cycle,
            code = g.code,
            subcode = ?g.subcode,
            trace_id = %g.trace_id,
            interval_ms,
            "rate limited, backing off"
        ),
        (_, FetchError::Graph(g)) => tracing::error!(
            cycle,
            code = g.code,
            subcode = ?g.subcode,
            kind = ?g.kind,
            trace_id = %g.trace_id,
            interval_ms,
            "graph api error: {}",
            g.message
        ),
        (_, FetchError::NoData(reason)) => {
            tracing::error!(cycle, interval_ms, "no profile data: {}", reason)
        }
    }
}
