//! Output sinks for cycle results.

use super::CycleOutcome;

/// Receives one line per cycle.
pub trait Report {
    fn emit(&mut self, outcome: &CycleOutcome);
}

impl<R: Report + ?Sized> Report for &mut R {
    fn emit(&mut self, outcome: &CycleOutcome) {
        (**self).emit(outcome)
    }
}

/// Prints to stdout, or stderr for errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReport;

impl Report for ConsoleReport {
    fn emit(&mut self, outcome: &CycleOutcome) {
        if outcome.is_error() {
            eprintln!("{}", outcome);
        } else {
            println!("{}", outcome);
        }
    }
}

/// Collects lines in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryReport {
    pub lines: Vec<String>,
}

impl Report for MemoryReport {
    fn emit(&mut self, outcome: &CycleOutcome) {
        self.lines.push(outcome.to_string());
    }
}
