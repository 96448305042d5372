//! Figures, teams, and movement styles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Coord;

/// Roster index of a figure.
///
/// Dead figures keep their slot so that "is this team's representative
/// alive" stays answerable after elimination.
pub type FigureId = usize;

/// An affinity group: the two root teams with their clones.
///
/// Figures of the same side can never capture one another, and a clone
/// scores into its root side's counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The green team and its clone.
    Green,
    /// The red team and its clone.
    Red,
}

impl Side {
    /// The clone variant belonging to this side.
    #[must_use]
    pub const fn clone_team(self) -> Team {
        match self {
            Side::Green => Team::GreenClone,
            Side::Red => Team::RedClone,
        }
    }
}

/// The four figure variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// Green root figure.
    Green,
    /// Red root figure.
    Red,
    /// Green's one-shot clone.
    GreenClone,
    /// Red's one-shot clone.
    RedClone,
}

impl Team {
    /// The affinity group this variant belongs to.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Team::Green | Team::GreenClone => Side::Green,
            Team::Red | Team::RedClone => Side::Red,
        }
    }

    /// Whether this variant is a clone (and therefore never clone-eligible).
    #[must_use]
    pub const fn is_clone(self) -> bool {
        matches!(self, Team::GreenClone | Team::RedClone)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Green => write!(f, "GREEN"),
            Team::Red => write!(f, "RED"),
            Team::GreenClone => write!(f, "GREENCLONE"),
            Team::RedClone => write!(f, "REDCLONE"),
        }
    }
}

/// A figure's movement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// 1-cell step.
    Normal,
    /// 2-cell step.
    Attacking,
}

impl Style {
    /// Step distance in cells for an axis-aligned move.
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            Style::Normal => 1,
            Style::Attacking => 2,
        }
    }

    /// The other style.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Style::Normal => Style::Attacking,
            Style::Attacking => Style::Normal,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Normal => write!(f, "NORMAL"),
            Style::Attacking => write!(f, "ATTACKING"),
        }
    }
}

/// State for a single figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    /// Which of the four variants this figure is.
    pub team: Team,
    /// Current position. Stale once the figure is dead.
    pub pos: Coord,
    /// Current movement style.
    pub style: Style,
    /// Whether the figure is still alive. Irreversible once false.
    pub alive: bool,
    /// One-shot permission to spawn a mirror clone.
    ///
    /// Root figures start with it; clone variants never have it, and a
    /// successful clone consumes it permanently.
    pub clone_ready: bool,
}

impl Figure {
    /// Create a new living figure at the given position.
    #[must_use]
    pub const fn new(team: Team, pos: Coord) -> Self {
        Self {
            team,
            pos,
            style: Style::Normal,
            alive: true,
            clone_ready: !team.is_clone(),
        }
    }

    /// Mark this figure dead.
    pub const fn eliminate(&mut self) {
        self.alive = false;
    }

    /// Toggle between normal and attacking style; returns the new style.
    pub const fn toggle_style(&mut self) -> Style {
        self.style = self.style.toggled();
        self.style
    }

    /// Consume the one-shot clone permission.
    pub const fn consume_clone(&mut self) {
        self.clone_ready = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides() {
        assert_eq!(Team::Green.side(), Side::Green);
        assert_eq!(Team::GreenClone.side(), Side::Green);
        assert_eq!(Team::Red.side(), Side::Red);
        assert_eq!(Team::RedClone.side(), Side::Red);
    }

    #[test]
    fn test_team_display() {
        assert_eq!(Team::Green.to_string(), "GREEN");
        assert_eq!(Team::Red.to_string(), "RED");
        assert_eq!(Team::GreenClone.to_string(), "GREENCLONE");
        assert_eq!(Team::RedClone.to_string(), "REDCLONE");
    }

    #[test]
    fn test_style_step_and_toggle() {
        assert_eq!(Style::Normal.step(), 1);
        assert_eq!(Style::Attacking.step(), 2);
        assert_eq!(Style::Normal.toggled(), Style::Attacking);
        assert_eq!(Style::Attacking.toggled(), Style::Normal);
    }

    #[test]
    fn test_root_figure_is_clone_ready() {
        let figure = Figure::new(Team::Green, Coord::new(1, 1));
        assert!(figure.alive);
        assert!(figure.clone_ready);
        assert_eq!(figure.style, Style::Normal);
    }

    #[test]
    fn test_clone_variant_never_clone_ready() {
        let clone = Figure::new(Team::RedClone, Coord::new(2, 1));
        assert!(!clone.clone_ready);
    }

    #[test]
    fn test_eliminate() {
        let mut figure = Figure::new(Team::Red, Coord::new(1, 1));
        figure.eliminate();
        assert!(!figure.alive);
    }

    #[test]
    fn test_toggle_style_round_trip() {
        let mut figure = Figure::new(Team::Green, Coord::new(1, 1));
        assert_eq!(figure.toggle_style(), Style::Attacking);
        assert_eq!(figure.toggle_style(), Style::Normal);
    }

    #[test]
    fn test_consume_clone() {
        let mut figure = Figure::new(Team::Green, Coord::new(1, 2));
        figure.consume_clone();
        assert!(!figure.clone_ready);
    }
}
