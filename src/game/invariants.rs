//! Game invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger for any command sequence, legal or not:
//! the resolver rejects illegal actions before mutating. If one fires,
//! it indicates a bug in the resolver or the board bookkeeping, not a
//! bad input.

use crate::game::{GameState, Occupant};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut on_board = vec![0u32; state.roster_len()];

    for (coord, occupant) in state.board.iter() {
        if let Occupant::Figure(id) = occupant {
            if id >= state.roster_len() {
                violations.push(InvariantViolation {
                    message: format!("Cell {coord:?} references unknown figure {id}"),
                });
                continue;
            }
            on_board[id] += 1;

            let figure = state.figure(id);
            if !figure.alive {
                violations.push(InvariantViolation {
                    message: format!("Dead figure {id} ({}) occupies {coord:?}", figure.team),
                });
            }
            if figure.pos != coord {
                violations.push(InvariantViolation {
                    message: format!(
                        "Figure {id} ({}) thinks it is at {:?} but occupies {coord:?}",
                        figure.team, figure.pos
                    ),
                });
            }
        }
    }

    for (id, figure) in state.figures() {
        let count = on_board[id];
        if figure.alive && count != 1 {
            violations.push(InvariantViolation {
                message: format!(
                    "Living figure {id} ({}) occupies {count} cells, expected 1",
                    figure.team
                ),
            });
        }
        if !figure.alive && count != 0 {
            violations.push(InvariantViolation {
                message: format!("Dead figure {id} ({}) still occupies a cell", figure.team),
            });
        }
        if figure.alive && !state.board.in_bounds(figure.pos) {
            violations.push(InvariantViolation {
                message: format!(
                    "Figure {id} ({}) position {:?} is off the board",
                    figure.team, figure.pos
                ),
            });
        }
        if figure.team.is_clone() && figure.clone_ready {
            violations.push(InvariantViolation {
                message: format!("Clone figure {id} ({}) is clone-eligible", figure.team),
            });
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Coord, Figure, Team};

    fn create_valid_game() -> GameState {
        GameState::new(4, Coord::new(1, 1), Coord::new(4, 4)).unwrap()
    }

    #[test]
    fn test_valid_game_passes() {
        let game = create_valid_game();
        let violations = check_invariants(&game);
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn test_dead_figure_on_board_detected() {
        let mut game = create_valid_game();
        // Kill red without clearing its cell.
        game.figure_mut(GameState::RED_ROOT).eliminate();

        let violations = check_invariants(&game);
        assert!(!violations.is_empty());
        assert!(violations.iter().any(|v| v.message.contains("Dead figure")));
    }

    #[test]
    fn test_stale_position_detected() {
        let mut game = create_valid_game();
        // Desync the roster position from the board cell.
        game.figure_mut(GameState::GREEN_ROOT).pos = Coord::new(2, 2);

        let violations = check_invariants(&game);
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_eligible_clone_detected() {
        let mut game = create_valid_game();
        let id = game.spawn(Figure::new(Team::GreenClone, Coord::new(2, 1)));
        game.figure_mut(id).clone_ready = true;

        let violations = check_invariants(&game);
        assert!(!violations.is_empty());
        assert!(violations.iter().any(|v| v.message.contains("clone-eligible")));
    }

    #[test]
    fn test_properly_eliminated_figure_passes() {
        let mut game = GameState::new(3, Coord::new(1, 1), Coord::new(2, 1)).unwrap();
        // Eliminate red the way the resolver would.
        game.figure_mut(GameState::RED_ROOT).eliminate();
        game.board.clear(Coord::new(2, 1));

        let violations = check_invariants(&game);
        assert!(violations.is_empty(), "{violations:?}");
    }
}
