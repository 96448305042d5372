// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Melee: a deterministic two-team grid skirmish engine.
//!
//! This crate simulates two opposing teams of figures on a fixed square
//! board: they move, fight, collect coins, and may each spawn one
//! mirror clone, ending in a score comparison. A session is a single
//! linear pass over a finite command list; every command produces
//! exactly one transcript line and an illegal command never aborts the
//! session.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │      Session / Batch Runner         │
//! ├─────────────────────────────────────┤
//! │   Command Interpreter → Resolver    │
//! ├─────────────────────────────────────┤
//! │   Board · Figures · Score Ledger    │
//! └─────────────────────────────────────┘
//! ```
//!
//! Determinism: given the same scenario, the transcript is bit-identical
//! on every run. Cell lookups go through the board's row-major indexing,
//! never through incidental container order.

pub mod batch;
pub mod error;
pub mod game;
pub mod scenario;
pub mod session;

pub use error::{ScenarioError, SetupError};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, Coin, Coord, Direction, Figure, FigureId, GameState, Occupant, Outcome, Role,
    Scoreboard, Side, Style, Team, Verdict,
};
pub use scenario::{CommandRecord, Scenario};
pub use session::{SessionReport, run_session};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_reexports_compose() {
        let scenario = Scenario::parse("2 1 1 2 2 0 1 GREEN DOWN").unwrap();
        let report = run_session(&scenario).unwrap();
        assert_eq!(report.lines, vec!["GREEN MOVED TO 2 1"]);
        assert_eq!(report.verdict.winner, None);
    }
}
