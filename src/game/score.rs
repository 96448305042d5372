//! Team score ledger and end-game evaluation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Side;

/// The two per-side counters.
///
/// Only token collection mutates the counters, and only upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    /// Green side's counter.
    green: u32,
    /// Red side's counter.
    red: u32,
}

impl Scoreboard {
    /// Create a fresh scoreboard with both counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { green: 0, red: 0 }
    }

    /// Award collected value to a side's counter.
    pub const fn award(&mut self, side: Side, value: u32) {
        match side {
            Side::Green => self.green = self.green.saturating_add(value),
            Side::Red => self.red = self.red.saturating_add(value),
        }
    }

    /// Green side's counter.
    #[must_use]
    pub const fn green(&self) -> u32 {
        self.green
    }

    /// Red side's counter.
    #[must_use]
    pub const fn red(&self) -> u32 {
        self.red
    }

    /// Compare the counters once, after the last command.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        let winner = if self.green > self.red {
            Some(Side::Green)
        } else if self.red > self.green {
            Some(Side::Red)
        } else {
            None
        };

        Verdict {
            winner,
            green: self.green,
            red: self.red,
        }
    }
}

/// Final result of a session.
///
/// The counters are reported in fixed order (green first, red second)
/// regardless of which is larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Winning side, or `None` for a tie.
    pub winner: Option<Side>,
    /// Green side's final counter.
    pub green: u32,
    /// Red side's final counter.
    pub red: u32,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(Side::Green) => {
                write!(f, "GREEN TEAM WINS. SCORE {} {}", self.green, self.red)
            }
            Some(Side::Red) => {
                write!(f, "RED TEAM WINS. SCORE {} {}", self.green, self.red)
            }
            None => write!(f, "TIE. SCORE {} {}", self.green, self.red),
        }
    }
}
