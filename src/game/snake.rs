use super::cell::Cell;
use super::direction::Direction;
use std::collections::VecDeque;

/// A snake on the board.  The body is stored head-first and is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, with the head at the front
    pub(super) body: VecDeque<Cell>,

    /// The direction the snake will move in on the next tick
    pub(super) direction: Direction,

    /// The direction the snake moved in on the most recent tick; turns are
    /// also checked against this so that several key presses between two ticks
    /// cannot reverse the snake onto itself
    pub(super) heading: Direction,
}

impl Snake {
    /// The cells a fresh snake occupies, head first
    pub(crate) const START: [Cell; 3] = [Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)];

    /// Create a new snake occupying [`Snake::START`] and facing right
    pub(super) fn new() -> Snake {
        Snake {
            body: VecDeque::from(Snake::START),
            direction: Direction::Right,
            heading: Direction::Right,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.body.front().copied().unwrap_or(Snake::START[0])
    }

    /// Return the cells occupied by the snake, head first
    pub(crate) fn cells(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the direction the snake moved in on the most recent tick
    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    /// Is `direction` opposite to the way the snake last moved or to the way
    /// it is currently set to move?
    pub(crate) fn reverses(&self, direction: Direction) -> bool {
        direction == self.heading().reverse() || direction == self.direction().reverse()
    }

    /// Change the direction of travel for the next tick.  Returns `false`
    /// (and leaves the direction unchanged) if `direction` would reverse the
    /// snake.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if self.reverses(direction) {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Return the cell the head will move into on the next tick
    pub(super) fn next_head(&self) -> Cell {
        self.head().offset(self.direction)
    }

    /// Would moving the head into `cell` run the snake into its own body?
    /// If the snake is not `growing`, the tail moves out of the way on the
    /// same tick and so does not count.
    pub(super) fn bites(&self, cell: Cell, growing: bool) -> bool {
        let keep = if growing {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        self.body.iter().take(keep).any(|&c| c == cell)
    }

    /// Move the head into `cell`, dropping the tail unless `growing`
    pub(super) fn advance(&mut self, cell: Cell, growing: bool) {
        self.body.push_front(cell);
        if !growing {
            let _ = self.body.pop_back();
        }
        self.heading = self.direction;
    }

    pub(super) fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}
