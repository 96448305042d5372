//! Parallel multi-scenario runner.
//!
//! Sessions are fully independent values, so a batch is an ordered
//! `par_iter` over scenarios: per-session determinism is untouched and
//! results come back in input order regardless of scheduling.

use rayon::prelude::*;

use crate::error::SetupError;
use crate::game::Side;
use crate::scenario::Scenario;
use crate::session::{SessionReport, run_session};

/// Run every scenario, in parallel, preserving input order.
#[must_use]
pub fn run_batch(scenarios: &[Scenario]) -> Vec<Result<SessionReport, SetupError>> {
    run_batch_with_progress(scenarios, || {})
}

/// Like [`run_batch`], invoking `on_done` once per finished session.
///
/// The callback runs on worker threads; keep it cheap (a progress-bar
/// tick).
#[must_use]
pub fn run_batch_with_progress<F>(
    scenarios: &[Scenario],
    on_done: F,
) -> Vec<Result<SessionReport, SetupError>>
where
    F: Fn() + Sync,
{
    scenarios
        .par_iter()
        .map(|scenario| {
            let result = run_session(scenario);
            on_done();
            result
        })
        .collect()
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Sessions that ran to a verdict.
    pub sessions: u64,
    /// Sessions won by the green side.
    pub green_wins: u64,
    /// Sessions won by the red side.
    pub red_wins: u64,
    /// Tied sessions.
    pub ties: u64,
    /// Scenarios rejected at setup.
    pub setup_failures: u64,
}

impl BatchStats {
    /// Fold one session result into the stats.
    pub fn record(&mut self, result: &Result<SessionReport, SetupError>) {
        match result {
            Ok(report) => {
                self.sessions += 1;
                match report.verdict.winner {
                    Some(Side::Green) => self.green_wins += 1,
                    Some(Side::Red) => self.red_wins += 1,
                    None => self.ties += 1,
                }
            }
            Err(_) => self.setup_failures += 1,
        }
    }

    /// Aggregate a whole batch.
    #[must_use]
    pub fn from_results(results: &[Result<SessionReport, SetupError>]) -> Self {
        let mut stats = Self::default();
        for result in results {
            stats.record(result);
        }
        stats
    }
}
