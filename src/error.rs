//! Error types for scenario parsing and setup.
//!
//! Per-command illegality is never an error: it resolves to
//! [`crate::game::Outcome::Invalid`] and the session continues. These
//! types cover the session boundary only - reading a scenario and
//! placing the initial entities.

use std::fmt;
use std::io;

/// Failure while reading or tokenizing a scenario.
#[derive(Debug)]
pub enum ScenarioError {
    /// The token stream ended before a required record.
    UnexpectedEnd {
        /// Which record was being read.
        expected: &'static str,
    },
    /// A token that should be a number was not one (or overflowed).
    InvalidNumber {
        /// Which record was being read.
        expected: &'static str,
        /// The offending token.
        token: String,
    },
    /// I/O failure reading the scenario source.
    Io(io::Error),
    /// Malformed JSON scenario file.
    Json(serde_json::Error),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::UnexpectedEnd { expected } => {
                write!(f, "input ended while reading {expected}")
            }
            ScenarioError::InvalidNumber { expected, token } => {
                write!(f, "expected a number for {expected}, got {token:?}")
            }
            ScenarioError::Io(e) => write!(f, "failed to read scenario: {e}"),
            ScenarioError::Json(e) => write!(f, "malformed JSON scenario: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<io::Error> for ScenarioError {
    fn from(e: io::Error) -> Self {
        ScenarioError::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        ScenarioError::Json(e)
    }
}

/// Failure placing the initial entities on the board.
///
/// Setup records are contractually pre-validated; these surface a
/// violated contract instead of silently corrupting the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Board dimension of zero.
    ZeroBoard,
    /// A setup record points outside the board.
    OutOfBounds {
        /// What was being placed.
        what: &'static str,
        /// Row of the offending record.
        y: u16,
        /// Column of the offending record.
        x: u16,
    },
    /// Two setup records claim the same cell.
    CellOccupied {
        /// Row of the contested cell.
        y: u16,
        /// Column of the contested cell.
        x: u16,
    },
    /// A coin with value zero.
    WorthlessCoin {
        /// Row of the coin record.
        y: u16,
        /// Column of the coin record.
        x: u16,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::ZeroBoard => write!(f, "board dimension must be at least 1"),
            SetupError::OutOfBounds { what, y, x } => {
                write!(f, "{what} at {y} {x} is outside the board")
            }
            SetupError::CellOccupied { y, x } => {
                write!(f, "cell {y} {x} is claimed by two setup records")
            }
            SetupError::WorthlessCoin { y, x } => {
                write!(f, "coin at {y} {x} has value 0")
            }
        }
    }
}

impl std::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_error_display() {
        let err = ScenarioError::UnexpectedEnd {
            expected: "coin count",
        };
        assert!(err.to_string().contains("coin count"));

        let err = ScenarioError::InvalidNumber {
            expected: "board size",
            token: "abc".to_string(),
        };
        assert!(err.to_string().contains("abc"));
        assert!(err.to_string().contains("board size"));
    }

    #[test]
    fn test_setup_error_display() {
        let err = SetupError::OutOfBounds {
            what: "coin",
            y: 9,
            x: 4,
        };
        assert_eq!(err.to_string(), "coin at 9 4 is outside the board");

        let err = SetupError::CellOccupied { y: 2, x: 3 };
        assert!(err.to_string().contains("2 3"));
    }
}
