mod cell;
mod direction;
mod snake;
pub(crate) use self::cell::Cell;
pub(crate) use self::direction::Direction;
pub(crate) use self::snake::Snake;
use crate::consts;
use log::{debug, info, trace};
use rand::{seq::IteratorRandom, Rng};
use std::time::Duration;

/// Timing parameters for a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Tuning {
    /// Time between movements at the start of a game
    pub(crate) initial_speed: Duration,

    /// Amount the time between movements shrinks per food eaten
    pub(crate) speed_step: Duration,

    /// Lower bound on the time between movements
    pub(crate) min_speed: Duration,
}

impl Default for Tuning {
    fn default() -> Tuning {
        Tuning {
            initial_speed: consts::INITIAL_SPEED,
            speed_step: consts::SPEED_STEP,
            min_speed: consts::MIN_SPEED,
        }
    }
}

/// Where a session is in its lifecycle
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Waiting for the player to press Enter for the first time
    #[default]
    NotStarted,
    Playing,
    GameOver,
}

/// What happened during a call to [`GameSession::step()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepOutcome {
    /// The session is not being played; nothing changed
    Idle,

    /// The snake moved one cell
    Moved,

    /// The snake moved onto the food and grew
    Ate,

    /// The snake ran into a wall or itself; the game is over
    Collided,

    /// The snake grew to cover every cell, leaving nowhere to put food; the
    /// game is over
    BoardFull,
}

/// The complete mutable state of one game instance.  High scores carry over
/// across restarts of the same session.
#[derive(Clone, Debug)]
pub(crate) struct GameSession<R = rand::rngs::ThreadRng> {
    rng: R,
    tuning: Tuning,
    snake: Snake,
    food: Option<Cell>,
    speed: Duration,
    score: u32,
    high_score: u32,
    phase: Phase,
}

impl GameSession<rand::rngs::ThreadRng> {
    pub(crate) fn new(tuning: Tuning) -> Self {
        GameSession::new_with_rng(tuning, rand::rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a fresh session that has not yet been started
    pub(crate) fn new_with_rng(tuning: Tuning, rng: R) -> GameSession<R> {
        let mut session = GameSession {
            rng,
            tuning,
            snake: Snake::new(),
            food: None,
            speed: tuning.initial_speed,
            score: 0,
            high_score: 0,
            phase: Phase::NotStarted,
        };
        session.place_food();
        session
    }

    /// Put the snake, food, speed, and score back to their starting values.
    /// The high score is kept.  If `started` is true, the new game begins
    /// immediately; otherwise, it waits for [`GameSession::start()`].
    pub(crate) fn reset(&mut self, started: bool) {
        self.snake = Snake::new();
        self.speed = self.tuning.initial_speed;
        self.score = 0;
        self.phase = if started {
            Phase::Playing
        } else {
            Phase::NotStarted
        };
        self.place_food();
        info!(
            "Session reset (started: {started}, high score: {})",
            self.high_score
        );
    }

    /// Advance the game by one tick.  Does nothing unless the game is being
    /// played.
    pub(crate) fn step(&mut self) -> StepOutcome {
        if self.phase != Phase::Playing {
            return StepOutcome::Idle;
        }
        let head = self.snake.next_head();
        let eating = self.food == Some(head);
        if !head.on_board() || self.snake.bites(head, eating) {
            debug!("Snake collided at ({}, {})", head.x, head.y);
            self.finish();
            return StepOutcome::Collided;
        }
        self.snake.advance(head, eating);
        trace!("Snake head moved to ({}, {})", head.x, head.y);
        if !eating {
            return StepOutcome::Moved;
        }
        self.score = self.score.saturating_add(1);
        self.speed = self
            .speed
            .saturating_sub(self.tuning.speed_step)
            .max(self.tuning.min_speed);
        debug!(
            "Food eaten; score is now {}, speed is now {:?}",
            self.score, self.speed
        );
        self.place_food();
        if self.food.is_none() {
            self.finish();
            StepOutcome::BoardFull
        } else {
            StepOutcome::Ate
        }
    }

    /// Place the food on a uniformly random cell not occupied by the snake.
    /// If there is no such cell, the food is removed from the board.
    fn place_food(&mut self) {
        let snake = &self.snake;
        self.food = Cell::all()
            .filter(|&c| !snake.contains(c))
            .choose(&mut self.rng);
    }
}

impl<R> GameSession<R> {
    /// Begin play if the session has not yet been started.  Returns `true` if
    /// the phase changed.
    pub(crate) fn start(&mut self) -> bool {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::Playing;
            info!("Game started");
            true
        } else {
            false
        }
    }

    /// Request that the snake move in `direction` on the next tick.  Returns
    /// `false` if the game is not being played or if `direction` would
    /// reverse the snake.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        self.phase == Phase::Playing && self.snake.turn(direction)
    }

    fn finish(&mut self) {
        self.phase = Phase::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        info!(
            "Game over; score: {}, high score: {}",
            self.score, self.high_score
        );
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    /// Current time between movements
    pub(crate) fn speed(&self) -> Duration {
        self.speed
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }
}
