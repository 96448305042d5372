//! Action resolution: movement, cloning, style changes.
//!
//! Every entry point returns an [`Outcome`]; illegal actions resolve to
//! [`Outcome::Invalid`] with zero state mutation. Nothing here aborts a
//! session.

use std::fmt;

use crate::game::{Coord, Figure, FigureId, GameState, Occupant, Style, Team};

/// An axis-aligned movement direction.
///
/// UP decreases y, DOWN increases y, LEFT decreases x, RIGHT increases x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward smaller y.
    Up,
    /// Toward larger y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl Direction {
    /// Unit displacement `(dx, dy)` for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a direction token, `None` for anything unrecognized.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "UP" => Some(Direction::Up),
            "DOWN" => Some(Direction::Down),
            "LEFT" => Some(Direction::Left),
            "RIGHT" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// The result of one command, rendered as one transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command was illegal; state is unchanged.
    Invalid,
    /// The figure moved onto an empty cell.
    Moved {
        /// The acting figure's variant.
        team: Team,
        /// Destination cell.
        to: Coord,
    },
    /// The figure moved onto a coin and collected it.
    Collected {
        /// The acting figure's variant.
        team: Team,
        /// Destination cell.
        to: Coord,
        /// The coin's value.
        value: u32,
    },
    /// The figure moved onto an enemy and eliminated it.
    Killed {
        /// The acting figure's variant.
        team: Team,
        /// Destination cell.
        to: Coord,
        /// The eliminated figure's variant.
        victim: Team,
    },
    /// The figure spawned its mirror clone.
    Cloned {
        /// The parent figure's variant.
        team: Team,
        /// The clone's cell.
        to: Coord,
    },
    /// The figure toggled its movement style.
    StyleChanged {
        /// The acting figure's variant.
        team: Team,
        /// The style now in effect.
        style: Style,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Invalid => write!(f, "INVALID ACTION"),
            Outcome::Moved { team, to } => write!(f, "{team} MOVED TO {} {}", to.y, to.x),
            Outcome::Collected { team, to, value } => {
                write!(f, "{team} MOVED TO {} {} AND COLLECTED {value}", to.y, to.x)
            }
            Outcome::Killed { team, to, victim } => {
                write!(f, "{team} MOVED TO {} {} AND KILLED {victim}", to.y, to.x)
            }
            Outcome::Cloned { team, to } => write!(f, "{team} CLONED TO {} {}", to.y, to.x),
            Outcome::StyleChanged { team, style } => {
                write!(f, "{team} CHANGED STYLE TO {style}")
            }
        }
    }
}

/// Move a living figure one step (by its current style) in a direction.
///
/// Validation order: destination in bounds, then destination occupant.
/// A same-side figure blocks the move; an enemy is eliminated; a coin
/// is collected into the mover's side counter.
pub fn resolve_move(state: &mut GameState, id: FigureId, direction: Direction) -> Outcome {
    let (pos, style, team) = {
        let figure = state.figure(id);
        if !figure.alive {
            return Outcome::Invalid;
        }
        (figure.pos, figure.style, figure.team)
    };

    let (dx, dy) = direction.delta();
    let step = style.step();
    let Some(to) = state.board.checked_coord(
        i32::from(pos.x) + dx * step,
        i32::from(pos.y) + dy * step,
    ) else {
        return Outcome::Invalid;
    };

    match state.board.occupant(to) {
        Some(Occupant::Empty) => {
            state.move_figure(id, to);
            Outcome::Moved { team, to }
        }
        Some(Occupant::Coin(coin)) => {
            state.scores.award(team.side(), coin.value);
            state.move_figure(id, to);
            Outcome::Collected {
                team,
                to,
                value: coin.value,
            }
        }
        Some(Occupant::Figure(other)) => {
            let victim = state.figure(other).team;
            if victim.side() == team.side() {
                return Outcome::Invalid;
            }
            state.figure_mut(other).eliminate();
            state.board.clear(to);
            state.move_figure(id, to);
            Outcome::Killed { team, to, victim }
        }
        // checked_coord already proved the destination is on the board.
        None => Outcome::Invalid,
    }
}

/// Spawn a figure's one-shot clone at its diagonal mirror cell.
///
/// Legal only for a living, still-eligible figure standing off the
/// diagonal, with an empty mirror cell. A coin in the mirror cell
/// blocks the clone exactly like a figure would.
pub fn resolve_clone(state: &mut GameState, id: FigureId) -> Outcome {
    let (pos, team) = {
        let figure = state.figure(id);
        if !figure.alive || !figure.clone_ready || figure.pos.x == figure.pos.y {
            return Outcome::Invalid;
        }
        (figure.pos, figure.team)
    };

    let mirror = pos.mirrored();
    if state.board.occupant(mirror) != Some(Occupant::Empty) {
        return Outcome::Invalid;
    }

    state.figure_mut(id).consume_clone();
    state.spawn(Figure::new(team.side().clone_team(), mirror));
    Outcome::Cloned { team, to: mirror }
}

/// Toggle a living figure's movement style.
///
/// Always legal for a living figure; no positional side effect.
pub fn resolve_style(state: &mut GameState, id: FigureId) -> Outcome {
    let figure = state.figure_mut(id);
    if !figure.alive {
        return Outcome::Invalid;
    }
    let team = figure.team;
    let style = figure.toggle_style();
    Outcome::StyleChanged { team, style }
}
