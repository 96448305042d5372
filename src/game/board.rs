//! Board and cell occupancy types.

use crate::game::FigureId;

/// A coordinate on the board.
///
/// The playable area is the closed interval `[1, width] x [1, height]`;
/// coordinate 0 is never a valid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// The diagonal mirror of this coordinate (x and y swapped).
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

/// A value-bearing coin sitting on a cell.
///
/// Coins are not agents: they never move, and collection removes them
/// from the board permanently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    /// Positive point value awarded to the collecting side.
    pub value: u32,
}

impl Coin {
    /// Create a new coin with the given value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }
}

/// Content of a single cell.
///
/// Absence is an explicit variant rather than a nullable reference, so
/// every occupancy check is an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occupant {
    /// The cell is traversable and terminal for a move.
    #[default]
    Empty,
    /// A figure, identified by its roster index.
    Figure(FigureId),
    /// A coin waiting to be collected.
    Coin(Coin),
}

/// The game board.
///
/// Owns the spatial occupancy invariant: at most one occupant per cell
/// at any time. Callers validate target legality before `place`, which
/// overwrites unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Width of the board in cells.
    width: u16,
    /// Height of the board in cells.
    height: u16,
    /// Cells stored in row-major order.
    cells: Vec<Occupant>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        let cells = vec![Occupant::Empty; size];

        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Get the width of the board.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the board.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a coordinate is within the board bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 1 && coord.x <= self.width && coord.y >= 1 && coord.y <= self.height
    }

    /// Build a coordinate from signed arithmetic, if it lands on the board.
    ///
    /// Movement computes candidate destinations as `i32` so that a
    /// 2-cell step from the edge underflows into a rejection instead of
    /// wrapping.
    #[must_use]
    pub fn checked_coord(&self, x: i32, y: i32) -> Option<Coord> {
        if x >= 1 && x <= i32::from(self.width) && y >= 1 && y <= i32::from(self.height) {
            // The bounds check makes both conversions exact.
            let x = u16::try_from(x).ok()?;
            let y = u16::try_from(y).ok()?;
            Some(Coord::new(x, y))
        } else {
            None
        }
    }

    /// Convert a coordinate to an index into the cells array.
    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.y - 1) * usize::from(self.width) + usize::from(coord.x - 1))
        } else {
            None
        }
    }

    /// Get the occupant of the cell at the given coordinate.
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[must_use]
    pub fn occupant(&self, coord: Coord) -> Option<Occupant> {
        self.coord_to_index(coord).map(|idx| self.cells[idx])
    }

    /// Place an occupant, overwriting whatever the cell held.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn place(&mut self, coord: Coord, occupant: Occupant) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = occupant;
            true
        } else {
            false
        }
    }

    /// Empty the cell at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn clear(&mut self, coord: Coord) -> bool {
        self.place(coord, Occupant::Empty)
    }

    /// Iterate over all cells with their coordinates in row-major order.
    ///
    /// Row-major order is the deterministic scan order used for clone
    /// role lookup; callers must not rely on any other ordering.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Occupant)> + '_ {
        self.cells.iter().enumerate().map(|(idx, occupant)| {
            #[allow(clippy::cast_possible_truncation)]
            let x = (idx % usize::from(self.width)) as u16 + 1;
            #[allow(clippy::cast_possible_truncation)]
            let y = (idx / usize::from(self.width)) as u16 + 1;
            (Coord::new(x, y), *occupant)
        })
    }

    /// Iterate over the figures on the board in row-major order.
    pub fn figures(&self) -> impl Iterator<Item = (Coord, FigureId)> + '_ {
        self.iter().filter_map(|(coord, occupant)| match occupant {
            Occupant::Figure(id) => Some((coord, id)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new(5, 5).unwrap();
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 5);
        assert_eq!(board.occupant(Coord::new(1, 1)), Some(Occupant::Empty));
        assert_eq!(board.occupant(Coord::new(5, 5)), Some(Occupant::Empty));
    }

    #[test]
    fn test_board_zero_size() {
        assert!(Board::new(0, 5).is_none());
        assert!(Board::new(5, 0).is_none());
    }

    #[test]
    fn test_bounds_are_one_based() {
        let board = Board::new(3, 3).unwrap();
        assert!(board.in_bounds(Coord::new(1, 1)));
        assert!(board.in_bounds(Coord::new(3, 3)));
        assert!(!board.in_bounds(Coord::new(0, 1)));
        assert!(!board.in_bounds(Coord::new(1, 0)));
        assert!(!board.in_bounds(Coord::new(4, 1)));
        assert!(!board.in_bounds(Coord::new(1, 4)));
    }

    #[test]
    fn test_checked_coord() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(board.checked_coord(2, 3), Some(Coord::new(2, 3)));
        assert_eq!(board.checked_coord(0, 1), None);
        assert_eq!(board.checked_coord(-1, 1), None);
        assert_eq!(board.checked_coord(1, 4), None);
    }

    #[test]
    fn test_place_clear() {
        let mut board = Board::new(3, 3).unwrap();
        let coord = Coord::new(2, 1);

        assert!(board.place(coord, Occupant::Coin(Coin::new(5))));
        assert_eq!(board.occupant(coord), Some(Occupant::Coin(Coin::new(5))));

        assert!(board.clear(coord));
        assert_eq!(board.occupant(coord), Some(Occupant::Empty));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new(3, 3).unwrap();
        assert!(!board.place(Coord::new(4, 4), Occupant::Figure(0)));
        assert_eq!(board.occupant(Coord::new(4, 4)), None);
    }

    #[test]
    fn test_place_overwrites() {
        let mut board = Board::new(3, 3).unwrap();
        let coord = Coord::new(1, 2);

        board.place(coord, Occupant::Coin(Coin::new(3)));
        board.place(coord, Occupant::Figure(1));
        assert_eq!(board.occupant(coord), Some(Occupant::Figure(1)));
    }

    #[test]
    fn test_mirrored() {
        assert_eq!(Coord::new(1, 2).mirrored(), Coord::new(2, 1));
        assert_eq!(Coord::new(3, 3).mirrored(), Coord::new(3, 3));
    }

    #[test]
    fn test_figures_scan_is_row_major() {
        let mut board = Board::new(3, 3).unwrap();
        board.place(Coord::new(3, 1), Occupant::Figure(7));
        board.place(Coord::new(1, 2), Occupant::Figure(2));
        board.place(Coord::new(2, 2), Occupant::Coin(Coin::new(1)));

        let found: Vec<_> = board.figures().collect();
        assert_eq!(
            found,
            vec![(Coord::new(3, 1), 7), (Coord::new(1, 2), 2)]
        );
    }
}
