//! Game layer for Melee.
//!
//! Implements the skirmish rules:
//! - Board with cell occupancy (figures, coins, empty)
//! - Figures with teams, styles, and one-shot clone eligibility
//! - Action resolution (movement, combat, collection, cloning)
//! - Command interpretation over an ordered token list
//! - Score ledger and end-game verdict

mod action;
mod board;
mod figure;
mod interpreter;
mod invariants;
mod score;
mod state;

pub use action::{Direction, Outcome, resolve_clone, resolve_move, resolve_style};
pub use board::{Board, Coin, Coord, Occupant};
pub use figure::{Figure, FigureId, Side, Style, Team};
pub use interpreter::{ActionKind, Role, interpret, run_commands};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use score::{Scoreboard, Verdict};
pub use state::GameState;
