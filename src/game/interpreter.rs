//! Command interpretation.
//!
//! Consumes `(role, action)` token pairs in strict input order and
//! produces exactly one [`Outcome`] per command. A bad command is
//! terminal for itself only; processing always continues.

use crate::game::invariants::assert_invariants;
use crate::game::{
    Direction, FigureId, GameState, Outcome, Team, resolve_clone, resolve_move, resolve_style,
};
use crate::scenario::CommandRecord;

/// The four role tokens a command may name.
///
/// `Green`/`Red` always resolve to the root figures; the clone roles
/// resolve to the side's living clone, if one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The green root figure.
    Green,
    /// The red root figure.
    Red,
    /// Green's living clone.
    GreenClone,
    /// Red's living clone.
    RedClone,
}

impl Role {
    /// Parse a role token, `None` for anything unrecognized.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "GREEN" => Some(Role::Green),
            "RED" => Some(Role::Red),
            "GREENCLONE" => Some(Role::GreenClone),
            "REDCLONE" => Some(Role::RedClone),
            _ => None,
        }
    }

    /// Resolve this role to a roster slot.
    ///
    /// Root roles map to their fixed slots (dead or alive; alive-ness
    /// is checked afterwards). Clone roles scan the board, so a dead
    /// clone is simply not found.
    #[must_use]
    pub fn resolve(self, state: &GameState) -> Option<FigureId> {
        match self {
            Role::Green => Some(GameState::GREEN_ROOT),
            Role::Red => Some(GameState::RED_ROOT),
            Role::GreenClone => state.find_live_team(Team::GreenClone),
            Role::RedClone => state.find_live_team(Team::RedClone),
        }
    }
}

/// The action half of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Axis-aligned movement.
    Move(Direction),
    /// Toggle normal/attacking style.
    Style,
    /// Spawn the one-shot mirror clone.
    Copy,
}

impl ActionKind {
    /// Parse an action token, `None` for anything unrecognized.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "STYLE" => Some(ActionKind::Style),
            "COPY" => Some(ActionKind::Copy),
            _ => Direction::parse(token).map(ActionKind::Move),
        }
    }
}

/// Execute one command against the state.
///
/// Unrecognized tokens, unresolvable roles, and dead actors all yield
/// [`Outcome::Invalid`] without touching the state.
pub fn interpret(state: &mut GameState, record: &CommandRecord) -> Outcome {
    let Some(role) = Role::parse(&record.role) else {
        return Outcome::Invalid;
    };
    let Some(id) = role.resolve(state) else {
        return Outcome::Invalid;
    };
    if !state.figure(id).alive {
        return Outcome::Invalid;
    }

    match ActionKind::parse(&record.action) {
        Some(ActionKind::Move(direction)) => resolve_move(state, id, direction),
        Some(ActionKind::Style) => resolve_style(state, id),
        Some(ActionKind::Copy) => resolve_clone(state, id),
        None => Outcome::Invalid,
    }
}

/// Execute an ordered command list, one outcome per command.
#[must_use]
pub fn run_commands(state: &mut GameState, commands: &[CommandRecord]) -> Vec<Outcome> {
    let mut outcomes = Vec::with_capacity(commands.len());
    for record in commands {
        outcomes.push(interpret(state, record));
        assert_invariants(state);
    }
    outcomes
}
