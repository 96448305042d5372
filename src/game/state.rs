//! Owned simulation context.
//!
//! The original program kept one process-wide board singleton; here the
//! whole simulation is a value, so independent sessions can coexist in
//! one process (and run in parallel from the batch runner).

use crate::error::SetupError;
use crate::game::{Board, Coin, Coord, Figure, FigureId, Occupant, Scoreboard, Team};
use crate::scenario::Scenario;

/// Complete state of one simulation: board, figure roster, counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The board.
    pub board: Board,
    /// All figures ever created, indexed by [`FigureId`]. Dead figures
    /// keep their slot but leave the board.
    figures: Vec<Figure>,
    /// The per-side counters.
    pub scores: Scoreboard,
}

impl GameState {
    /// Roster slot of the green root figure.
    pub const GREEN_ROOT: FigureId = 0;
    /// Roster slot of the red root figure.
    pub const RED_ROOT: FigureId = 1;

    /// Create a state with the two root figures placed.
    ///
    /// # Errors
    ///
    /// Returns an error if the board size is zero, a figure is placed
    /// out of bounds, or both figures share a cell.
    pub fn new(size: u16, green: Coord, red: Coord) -> Result<Self, SetupError> {
        let board = Board::new(size, size).ok_or(SetupError::ZeroBoard)?;
        let mut state = Self {
            board,
            figures: Vec::new(),
            scores: Scoreboard::new(),
        };

        state.spawn_checked("green figure", Team::Green, green)?;
        state.spawn_checked("red figure", Team::Red, red)?;
        Ok(state)
    }

    /// Create a state from a parsed scenario's setup records.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero board, an out-of-bounds placement, a
    /// doubly-occupied cell, or a worthless coin.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, SetupError> {
        let mut state = Self::new(
            scenario.size,
            Coord::new(scenario.green.x, scenario.green.y),
            Coord::new(scenario.red.x, scenario.red.y),
        )?;

        for coin in &scenario.coins {
            state.add_coin(Coord::new(coin.x, coin.y), coin.value)?;
        }

        Ok(state)
    }

    /// Place a coin during setup.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is out of bounds or occupied, or if
    /// the value is zero.
    pub fn add_coin(&mut self, pos: Coord, value: u32) -> Result<(), SetupError> {
        if value == 0 {
            return Err(SetupError::WorthlessCoin { y: pos.y, x: pos.x });
        }
        self.claim_cell("coin", pos)?;
        self.board.place(pos, Occupant::Coin(Coin::new(value)));
        Ok(())
    }

    /// Add a figure to the roster and place it on the board.
    ///
    /// The caller has already validated that the target cell is legal.
    pub fn spawn(&mut self, figure: Figure) -> FigureId {
        let id = self.figures.len();
        let pos = figure.pos;
        self.figures.push(figure);
        self.board.place(pos, Occupant::Figure(id));
        id
    }

    /// Spawn with setup-time validation of the target cell.
    fn spawn_checked(
        &mut self,
        what: &'static str,
        team: Team,
        pos: Coord,
    ) -> Result<FigureId, SetupError> {
        self.claim_cell(what, pos)?;
        Ok(self.spawn(Figure::new(team, pos)))
    }

    /// Validate that a setup placement lands on an empty in-bounds cell.
    fn claim_cell(&self, what: &'static str, pos: Coord) -> Result<(), SetupError> {
        match self.board.occupant(pos) {
            None => Err(SetupError::OutOfBounds {
                what,
                y: pos.y,
                x: pos.x,
            }),
            Some(Occupant::Empty) => Ok(()),
            Some(_) => Err(SetupError::CellOccupied { y: pos.y, x: pos.x }),
        }
    }

    /// Relocate a living figure to a destination the resolver has
    /// already validated. Clears the old cell, overwrites the new one.
    pub fn move_figure(&mut self, id: FigureId, to: Coord) {
        let from = self.figures[id].pos;
        self.board.clear(from);
        self.figures[id].pos = to;
        self.board.place(to, Occupant::Figure(id));
    }

    /// Borrow a figure by roster slot.
    #[must_use]
    pub fn figure(&self, id: FigureId) -> &Figure {
        &self.figures[id]
    }

    /// Mutably borrow a figure by roster slot.
    #[must_use]
    pub fn figure_mut(&mut self, id: FigureId) -> &mut Figure {
        &mut self.figures[id]
    }

    /// Number of roster slots (living and dead).
    #[must_use]
    pub fn roster_len(&self) -> usize {
        self.figures.len()
    }

    /// Iterate over the whole roster.
    pub fn figures(&self) -> impl Iterator<Item = (FigureId, &Figure)> {
        self.figures.iter().enumerate()
    }

    /// Find the living figure of a team by row-major board scan.
    ///
    /// With at most one clone per side the scan is unambiguous, but the
    /// scan-order tie-break is kept deliberately in case several ever
    /// exist.
    #[must_use]
    pub fn find_live_team(&self, team: Team) -> Option<FigureId> {
        self.board
            .figures()
            .map(|(_, id)| id)
            .find(|&id| self.figures[id].team == team)
    }
}
