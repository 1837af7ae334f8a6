//! Profile poll loop.
//!
//! Drives the Graph client one cycle at a time: fetch → classify → advance the
//! interval → report → sleep. Exactly one request is in flight; the next cycle
//! starts only after the previous one has been fully handled.

mod cycle;
mod report;
mod run;

pub use cycle::{format_secs, CycleOutcome};
pub use report::{ConsoleReport, MemoryReport, Report};
pub use run::Poller;
