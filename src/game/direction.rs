#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Return the change in `(x, y)` for one step in this direction.  `y`
    /// grows downwards.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cell::Cell;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Cell::new(2, 7), Cell::new(2, 6))]
    #[case(Direction::Down, Cell::new(2, 7), Cell::new(2, 8))]
    #[case(Direction::Left, Cell::new(2, 7), Cell::new(1, 7))]
    #[case(Direction::Right, Cell::new(2, 7), Cell::new(3, 7))]
    #[case(Direction::Left, Cell::new(0, 0), Cell::new(-1, 0))]
    #[case(Direction::Up, Cell::new(0, 0), Cell::new(0, -1))]
    #[case(Direction::Right, Cell::new(31, 4), Cell::new(32, 4))]
    fn test_offset(#[case] d: Direction, #[case] from: Cell, #[case] to: Cell) {
        assert_eq!(from.offset(d), to);
    }

    #[rstest]
    #[case(Direction::Up, Direction::Down)]
    #[case(Direction::Down, Direction::Up)]
    #[case(Direction::Left, Direction::Right)]
    #[case(Direction::Right, Direction::Left)]
    fn test_reverse(#[case] d: Direction, #[case] r: Direction) {
        assert_eq!(d.reverse(), r);
        assert_eq!(r.reverse(), d);
    }
}
