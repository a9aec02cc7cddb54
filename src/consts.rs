//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Side length of one board cell, in pixels
pub(crate) const CELL_SIZE: u16 = 10;

/// Number of cells along each side of the (square) board
pub(crate) const BOARD_CELLS: u16 = 32;

/// Side length of the drawing surface, in pixels
pub(crate) const CANVAS_SIZE: u16 = BOARD_CELLS * CELL_SIZE;

/// Time between movements of the snake at the start of a game
pub(crate) const INITIAL_SPEED: Duration = Duration::from_millis(200);

/// How much the time between movements shrinks each time food is eaten
pub(crate) const SPEED_STEP: Duration = Duration::from_millis(10);

/// The time between movements never drops below this
pub(crate) const MIN_SPEED: Duration = Duration::from_millis(50);

/// Number of terminal columns used to draw one board cell.  Terminal cells
/// are roughly twice as tall as they are wide, so this keeps cells square.
pub(crate) const COLUMNS_PER_CELL: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: the score bar plus the bordered board.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: BOARD_CELLS * COLUMNS_PER_CELL + 2,
    height: BOARD_CELLS + 3,
};

/// Glyph pair drawn over a cell by an outline stroke
pub(crate) const OUTLINE_SYMBOL: &str = "[]";

/// Fill colour for the snake's body and the food
pub(crate) const FILL_COLOR: Color = Color::Green;

/// Outline colour for the snake's body and the food
pub(crate) const OUTLINE_COLOR: Color = Color::White;

/// Colour of the "Game Over" headline
pub(crate) const ALERT_COLOR: Color = Color::Red;

/// Colour of ordinary overlay text
pub(crate) const TEXT_COLOR: Color = Color::White;

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Title drawn centered in the top border of the board
pub(crate) const TITLE: &str = " Snake Game ";

/// Prompt shown before the first game has started
pub(crate) const START_PROMPT: &str = "Press Enter to Start Game";

/// Headline of the game-over overlay
pub(crate) const GAME_OVER_TEXT: &str = "Game Over";

/// Prompt shown on the game-over overlay
pub(crate) const RESTART_PROMPT: &str = "Press Enter to Try Again";

/// Vertical offsets, in pixels below the center of the canvas, of the score,
/// high score, and restart prompt lines on the game-over overlay
pub(crate) const GAME_OVER_LINE_OFFSETS: [u16; 3] = [40, 70, 100];
