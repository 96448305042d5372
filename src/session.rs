//! Session runner: a pure `(scenario) -> transcript` function.
//!
//! One session is one linear pass over a finite command list. Given the
//! same scenario, the transcript is bit-identical on every run: there is
//! no randomness, no clock, and no unordered-container iteration
//! anywhere in the game layer.

use serde::Serialize;

use crate::error::SetupError;
use crate::game::{GameState, Verdict, run_commands};
use crate::scenario::Scenario;

/// Everything a session produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// One outcome line per command, in command order.
    pub lines: Vec<String>,
    /// The end-game verdict.
    pub verdict: Verdict,
}

impl SessionReport {
    /// Render the full transcript: every outcome line, then the
    /// verdict line, each terminated by a newline.
    #[must_use]
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&self.verdict.to_string());
        out.push('\n');
        out
    }
}

/// Run one scenario to completion.
///
/// # Errors
///
/// Returns an error only if the setup records are illegal; once play
/// starts, nothing fails - bad commands become `INVALID ACTION` lines.
pub fn run_session(scenario: &Scenario) -> Result<SessionReport, SetupError> {
    let mut state = GameState::from_scenario(scenario)?;
    let outcomes = run_commands(&mut state, &scenario.commands);

    Ok(SessionReport {
        lines: outcomes.iter().map(ToString::to_string).collect(),
        verdict: state.scores.verdict(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(input: &str) -> Scenario {
        Scenario::parse(input).unwrap()
    }

    #[test]
    fn test_simple_session() {
        let report = run_session(&scenario(
            "3  1 1  3 3  1  1 2 5  1  GREEN RIGHT",
        ))
        .unwrap();

        assert_eq!(report.lines, vec!["GREEN MOVED TO 1 2 AND COLLECTED 5"]);
        assert_eq!(report.verdict.to_string(), "GREEN TEAM WINS. SCORE 5 0");
        assert_eq!(
            report.transcript(),
            "GREEN MOVED TO 1 2 AND COLLECTED 5\nGREEN TEAM WINS. SCORE 5 0\n"
        );
    }

    #[test]
    fn test_empty_command_list_still_produces_verdict() {
        let report = run_session(&scenario("3  1 1  3 3  0  0")).unwrap();
        assert!(report.lines.is_empty());
        assert_eq!(report.transcript(), "TIE. SCORE 0 0\n");
    }

    #[test]
    fn test_setup_error_surfaces() {
        let result = run_session(&scenario("3  1 1  1 1  0  0"));
        assert!(matches!(result, Err(SetupError::CellOccupied { .. })));
    }

    #[test]
    fn test_rerun_is_bit_identical() {
        let scenario = scenario(
            "4  1 2  4 4  2  2 2 3  3 4 8  6  \
             GREEN COPY  GREEN STYLE  GREEN DOWN  \
             RED LEFT  GREENCLONE RIGHT  RED NOWHERE",
        );
        let first = run_session(&scenario).unwrap();
        let second = run_session(&scenario).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.transcript(), second.transcript());
    }
}
