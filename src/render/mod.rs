//! Turning a [`GameSession`] into drawing primitives.
//!
//! All coordinates here are in pixels on a square canvas
//! [`CANVAS_SIZE`][consts::CANVAS_SIZE] pixels wide.  Actual rasterization is
//! left to an implementation of [`Surface`].
mod terminal;
use crate::consts;
use crate::game::{Cell, GameSession, Phase};
use ratatui::layout::{Alignment, Position, Rect};

/// A named colour role; the surface decides the actual colour
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tone {
    /// Interior of snake and food cells
    Fill,
    /// Outline of snake and food cells
    Outline,
    /// The "Game Over" headline
    Alert,
    /// Other overlay text
    Text,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Font {
    Headline,
    Prompt,
    Body,
}

impl Font {
    /// Nominal height of the font in pixels
    pub(crate) fn size(self) -> u16 {
        match self {
            Font::Headline => 30,
            Font::Prompt => 24,
            Font::Body => 14,
        }
    }
}

/// The primitive operations a drawing surface must support
pub(crate) trait Surface {
    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, tone: Tone);

    fn stroke_rect(&mut self, rect: Rect, tone: Tone);

    /// Draw `text` on the line through `anchor`, positioned relative to
    /// `anchor.x` according to `alignment`
    fn fill_text(
        &mut self,
        text: &str,
        anchor: Position,
        alignment: Alignment,
        font: Font,
        tone: Tone,
    );
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum DrawCommand {
    Clear(Rect),
    Fill(Rect, Tone),
    Stroke(Rect, Tone),
    Text {
        text: String,
        anchor: Position,
        alignment: Alignment,
        font: Font,
        tone: Tone,
    },
}

impl DrawCommand {
    pub(crate) fn apply<S: Surface>(&self, surface: &mut S) {
        match self {
            DrawCommand::Clear(rect) => surface.clear_rect(*rect),
            DrawCommand::Fill(rect, tone) => surface.fill_rect(*rect, *tone),
            DrawCommand::Stroke(rect, tone) => surface.stroke_rect(*rect, *tone),
            DrawCommand::Text {
                text,
                anchor,
                alignment,
                font,
                tone,
            } => surface.fill_text(text, *anchor, *alignment, *font, *tone),
        }
    }

    fn centered_text<S: Into<String>>(text: S, dy: u16, font: Font, tone: Tone) -> DrawCommand {
        let center = consts::CANVAS_SIZE / 2;
        DrawCommand::Text {
            text: text.into(),
            anchor: Position::new(center, center.saturating_add(dy)),
            alignment: Alignment::Center,
            font,
            tone,
        }
    }
}

/// Return the drawing commands for the current state of `session`
pub(crate) fn draw_commands<R>(session: &GameSession<R>) -> Vec<DrawCommand> {
    let canvas = Rect::new(0, 0, consts::CANVAS_SIZE, consts::CANVAS_SIZE);
    let mut commands = vec![DrawCommand::Clear(canvas)];
    match session.phase() {
        Phase::NotStarted => {
            commands.push(DrawCommand::centered_text(
                consts::START_PROMPT,
                0,
                Font::Prompt,
                Tone::Text,
            ));
        }
        Phase::GameOver => {
            let [score_dy, high_dy, prompt_dy] = consts::GAME_OVER_LINE_OFFSETS;
            commands.extend([
                DrawCommand::centered_text(consts::GAME_OVER_TEXT, 0, Font::Headline, Tone::Alert),
                DrawCommand::centered_text(
                    format!("Score: {}", session.score()),
                    score_dy,
                    Font::Body,
                    Tone::Text,
                ),
                DrawCommand::centered_text(
                    format!("High Score: {}", session.high_score()),
                    high_dy,
                    Font::Body,
                    Tone::Text,
                ),
                DrawCommand::centered_text(consts::RESTART_PROMPT, prompt_dy, Font::Body, Tone::Text),
            ]);
        }
        Phase::Playing => {
            for &cell in session.snake().cells() {
                push_cell(&mut commands, cell);
            }
            if let Some(food) = session.food() {
                push_cell(&mut commands, food);
            }
        }
    }
    commands
}

/// Draw all of `session` onto `surface`
pub(crate) fn render<R, S: Surface>(session: &GameSession<R>, surface: &mut S) {
    for cmd in draw_commands(session) {
        cmd.apply(surface);
    }
}

fn push_cell(commands: &mut Vec<DrawCommand>, cell: Cell) {
    if let Some((x, y)) = cell.pixel_origin() {
        let rect = Rect::new(x, y, consts::CELL_SIZE, consts::CELL_SIZE);
        commands.push(DrawCommand::Fill(rect, Tone::Fill));
        commands.push(DrawCommand::Stroke(rect, Tone::Outline));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, StepOutcome, Tuning};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_session() -> GameSession<ChaCha12Rng> {
        GameSession::new_with_rng(Tuning::default(), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn cell_commands(x: u16, y: u16) -> [DrawCommand; 2] {
        let rect = Rect::new(x * 10, y * 10, 10, 10);
        [
            DrawCommand::Fill(rect, Tone::Fill),
            DrawCommand::Stroke(rect, Tone::Outline),
        ]
    }

    fn text(s: &str, y: u16, font: Font, tone: Tone) -> DrawCommand {
        DrawCommand::Text {
            text: s.to_owned(),
            anchor: Position::new(160, y),
            alignment: Alignment::Center,
            font,
            tone,
        }
    }

    #[test]
    fn not_started() {
        let session = new_session();
        assert_eq!(
            draw_commands(&session),
            [
                DrawCommand::Clear(Rect::new(0, 0, 320, 320)),
                text("Press Enter to Start Game", 160, Font::Prompt, Tone::Text),
            ]
        );
    }

    #[test]
    fn playing() {
        let mut session = new_session();
        assert!(session.start(), "session should start");
        let food = session.food().expect("food should be placed");
        let fx = u16::try_from(food.x).expect("food x should be on the board");
        let fy = u16::try_from(food.y).expect("food y should be on the board");
        let mut expected = vec![DrawCommand::Clear(Rect::new(0, 0, 320, 320))];
        expected.extend(cell_commands(2, 0));
        expected.extend(cell_commands(1, 0));
        expected.extend(cell_commands(0, 0));
        expected.extend(cell_commands(fx, fy));
        assert_eq!(draw_commands(&session), expected);
    }

    #[test]
    fn game_over() {
        let mut session = new_session();
        assert!(session.start(), "session should start");
        assert!(session.turn(Direction::Up), "turn should be accepted");
        assert_eq!(session.step(), StepOutcome::Collided);
        assert_eq!(
            draw_commands(&session),
            [
                DrawCommand::Clear(Rect::new(0, 0, 320, 320)),
                text("Game Over", 160, Font::Headline, Tone::Alert),
                text("Score: 0", 200, Font::Body, Tone::Text),
                text("High Score: 0", 230, Font::Body, Tone::Text),
                text("Press Enter to Try Again", 260, Font::Body, Tone::Text),
            ]
        );
    }
}
