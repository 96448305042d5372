//! Output formatting utilities for CLI.

use melee::batch::BatchStats;
use melee::{SessionReport, SetupError, Side};
use serde::Serialize;

/// JSON-serializable session report.
#[derive(Debug, Serialize)]
pub(super) struct JsonSessionReport {
    /// One line per interpreted command.
    pub(super) lines: Vec<String>,
    /// Winning side ("GREEN", "RED", or null for a tie).
    pub(super) winner: Option<&'static str>,
    /// Final green counter.
    pub(super) green: u32,
    /// Final red counter.
    pub(super) red: u32,
    /// The verdict line as printed in text mode.
    pub(super) verdict: String,
}

impl JsonSessionReport {
    /// Create from a session report.
    pub(super) fn from_report(report: &SessionReport) -> Self {
        Self {
            lines: report.lines.clone(),
            winner: report.verdict.winner.map(|side| match side {
                Side::Green => "GREEN",
                Side::Red => "RED",
            }),
            green: report.verdict.green,
            red: report.verdict.red,
            verdict: report.verdict.to_string(),
        }
    }
}

/// Per-scenario outcome in a batch run.
#[derive(Debug, Serialize)]
pub(super) struct JsonBatchEntry {
    /// Scenario file name.
    pub(super) scenario: String,
    /// Winning side ("GREEN", "RED", null for a tie, absent on setup failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) winner: Option<Option<&'static str>>,
    /// Final green counter (absent on setup failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) green: Option<u32>,
    /// Final red counter (absent on setup failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) red: Option<u32>,
    /// Setup error message, if the scenario was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) error: Option<String>,
}

impl JsonBatchEntry {
    /// Create from a single batch result.
    pub(super) fn from_result(name: &str, result: &Result<SessionReport, SetupError>) -> Self {
        match result {
            Ok(report) => Self {
                scenario: name.to_string(),
                winner: Some(report.verdict.winner.map(|side| match side {
                    Side::Green => "GREEN",
                    Side::Red => "RED",
                })),
                green: Some(report.verdict.green),
                red: Some(report.verdict.red),
                error: None,
            },
            Err(e) => Self {
                scenario: name.to_string(),
                winner: None,
                green: None,
                red: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// JSON-serializable batch summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonBatchResult {
    /// Number of scenarios run.
    pub(super) sessions: u64,
    /// Green wins across the batch.
    pub(super) green_wins: u64,
    /// Red wins across the batch.
    pub(super) red_wins: u64,
    /// Ties across the batch.
    pub(super) ties: u64,
    /// Scenarios rejected at setup.
    pub(super) setup_failures: u64,
    /// Per-scenario outcomes, in input order.
    pub(super) results: Vec<JsonBatchEntry>,
}

impl JsonBatchResult {
    /// Create from aggregate stats and per-scenario results.
    pub(super) fn from_stats(
        stats: &BatchStats,
        names: &[String],
        results: &[Result<SessionReport, SetupError>],
    ) -> Self {
        let entries = results
            .iter()
            .enumerate()
            .map(|(i, result)| {
                let name = names.get(i).map_or("", String::as_str);
                JsonBatchEntry::from_result(name, result)
            })
            .collect();

        Self {
            sessions: stats.sessions,
            green_wins: stats.green_wins,
            red_wins: stats.red_wins,
            ties: stats.ties,
            setup_failures: stats.setup_failures,
            results: entries,
        }
    }
}

/// Format batch stats as human-readable text.
pub(super) fn format_batch_text(
    stats: &BatchStats,
    names: &[String],
    results: &[Result<SessionReport, SetupError>],
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Batch Results ({} scenarios)\n", stats.sessions));
    output.push_str("========================================\n\n");

    for (i, result) in results.iter().enumerate() {
        let name = names.get(i).map_or("?", String::as_str);
        match result {
            Ok(report) => output.push_str(&format!("  {name}: {}\n", report.verdict)),
            Err(e) => output.push_str(&format!("  {name}: SETUP FAILED ({e})\n")),
        }
    }

    output.push_str(&format!(
        "\nGreen wins: {}  Red wins: {}  Ties: {}  Setup failures: {}\n",
        stats.green_wins, stats.red_wins, stats.ties, stats.setup_failures
    ));

    output
}

/// Format batch results as CSV, one row per scenario.
pub(super) fn format_batch_csv(
    names: &[String],
    results: &[Result<SessionReport, SetupError>],
) -> String {
    let mut output = String::new();
    output.push_str("scenario,winner,green,red,error\n");

    for (i, result) in results.iter().enumerate() {
        let name = names.get(i).map_or("", String::as_str);
        match result {
            Ok(report) => {
                let winner = match report.verdict.winner {
                    Some(Side::Green) => "GREEN",
                    Some(Side::Red) => "RED",
                    None => "TIE",
                };
                output.push_str(&format!(
                    "{name},{winner},{},{},\n",
                    report.verdict.green, report.verdict.red
                ));
            }
            Err(e) => {
                output.push_str(&format!("{name},,,,{e}\n"));
            }
        }
    }

    output
}
