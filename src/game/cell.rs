use super::direction::Direction;
use crate::consts;

/// A grid-aligned board cell.  Coordinates are signed so that a head which
/// has just left the board can still be represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the neighboring cell one step in `direction`
    pub(crate) fn offset(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Is the cell within `[0, BOARD_CELLS)` on both axes?
    pub(crate) fn on_board(self) -> bool {
        let side = i32::from(consts::BOARD_CELLS);
        (0..side).contains(&self.x) && (0..side).contains(&self.y)
    }

    /// Return the top-left pixel of the cell on the drawing surface, or
    /// `None` if the cell is off the board
    pub(crate) fn pixel_origin(self) -> Option<(u16, u16)> {
        if !self.on_board() {
            return None;
        }
        let x = u16::try_from(self.x).ok()?;
        let y = u16::try_from(self.y).ok()?;
        Some((x * consts::CELL_SIZE, y * consts::CELL_SIZE))
    }

    /// Iterate over every cell on the board in row-major order
    pub(crate) fn all() -> impl Iterator<Item = Cell> {
        let side = i32::from(consts::BOARD_CELLS);
        (0..side).flat_map(move |y| (0..side).map(move |x| Cell { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::new(0, 0), true)]
    #[case(Cell::new(31, 31), true)]
    #[case(Cell::new(-1, 0), false)]
    #[case(Cell::new(0, -1), false)]
    #[case(Cell::new(32, 5), false)]
    #[case(Cell::new(5, 32), false)]
    fn test_on_board(#[case] cell: Cell, #[case] expected: bool) {
        assert_eq!(cell.on_board(), expected);
    }

    #[test]
    fn pixel_origin() {
        assert_eq!(Cell::new(3, 7).pixel_origin(), Some((30, 70)));
        assert_eq!(Cell::new(31, 0).pixel_origin(), Some((310, 0)));
        assert_eq!(Cell::new(-1, 0).pixel_origin(), None);
    }

    #[test]
    fn all_cells() {
        let cells = Cell::all().collect::<Vec<_>>();
        assert_eq!(cells.len(), 32 * 32);
        assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
        assert_eq!(cells.get(1), Some(&Cell::new(1, 0)));
        assert_eq!(cells.last(), Some(&Cell::new(31, 31)));
    }
}
