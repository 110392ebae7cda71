//! Sweep statistics collection and reporting.
//!
//! Tracks what a sweep did across testbenches: how many test cases were seen, how many
//! were expanded into configurations, and how many runs were registered in total.

/// Counters accumulated by [`SweepDriver::run`](crate::sweep::SweepDriver::run).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Testbenches driven.
    pub testbenches: u64,
    /// Discovered test cases visited.
    pub tests_seen: u64,
    /// Test cases that received at least one registration.
    pub tests_swept: u64,
    /// Test cases left to the framework's default single run.
    pub tests_skipped: u64,
    /// Total registrations issued.
    pub registrations: u64,
}

impl SweepStats {
    /// Accounts for one visited test case that received `issued` registrations.
    pub fn record(&mut self, issued: usize) {
        self.tests_seen += 1;
        if issued == 0 {
            self.tests_skipped += 1;
        } else {
            self.tests_swept += 1;
            self.registrations += u64::try_from(issued).unwrap_or(u64::MAX);
        }
    }

    /// Adds another set of counters into this one.
    pub fn merge(&mut self, other: &Self) {
        self.testbenches += other.testbenches;
        self.tests_seen += other.tests_seen;
        self.tests_swept += other.tests_swept;
        self.tests_skipped += other.tests_skipped;
        self.registrations += other.registrations;
    }

    /// Average registrations per swept test case (zero if nothing was swept).
    pub fn runs_per_swept_test(&self) -> f64 {
        if self.tests_swept == 0 {
            0.0
        } else {
            self.registrations as f64 / self.tests_swept as f64
        }
    }

    /// Renders the report printed by [`print`](Self::print).
    pub fn report(&self) -> String {
        let rule = "==========================================================";
        [
            rule.to_string(),
            "TESTBENCH CONFIGURATION SWEEP".to_string(),
            rule.to_string(),
            format!("testbenches              {}", self.testbenches),
            format!("tests.seen               {}", self.tests_seen),
            format!("tests.swept              {}", self.tests_swept),
            format!("tests.default_run        {}", self.tests_skipped),
            format!("runs.registered          {}", self.registrations),
            format!("runs.per_swept_test      {:.2}", self.runs_per_swept_test()),
            rule.to_string(),
        ]
        .join("\n")
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("{}", self.report());
    }
}
