use super::{render, Font, Surface, Tone};
use crate::consts;
use crate::game::GameSession;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Position, Rect, Size},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Widget},
};
use unicode_width::UnicodeWidthStr;

/// A [`Surface`] that draws onto a region of a terminal buffer.  Each board
/// cell becomes [`COLUMNS_PER_CELL`][consts::COLUMNS_PER_CELL] columns by one
/// row; pixel positions inside a cell are rounded to the cell.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct BufferSurface<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferSurface<'a> {
    pub(crate) fn new(area: Rect, buf: &'a mut Buffer) -> BufferSurface<'a> {
        BufferSurface { area, buf }
    }

    /// Return the range of board cells covered by a pixel rectangle, as a
    /// `Rect` in cell units
    fn cells_covered(rect: Rect) -> Rect {
        let size = consts::CELL_SIZE;
        let x0 = rect.x / size;
        let y0 = rect.y / size;
        let x1 = rect.right().div_ceil(size);
        let y1 = rect.bottom().div_ceil(size);
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Return the terminal position of the top-left corner of a board cell
    fn cell_origin(&self, col: u16, row: u16) -> Position {
        Position::new(
            self.area
                .x
                .saturating_add(col.saturating_mul(consts::COLUMNS_PER_CELL)),
            self.area.y.saturating_add(row),
        )
    }

    /// Return the terminal rectangle covered by a pixel rectangle, clipped to
    /// the surface
    fn to_terminal(&self, rect: Rect) -> Rect {
        let cells = Self::cells_covered(rect);
        let origin = self.cell_origin(cells.x, cells.y);
        Rect::new(
            origin.x,
            origin.y,
            cells.width.saturating_mul(consts::COLUMNS_PER_CELL),
            cells.height,
        )
        .intersection(self.area)
    }

    fn put(&mut self, pos: Position, symbol: char, fg: Color) {
        if !self.area.contains(pos) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut(pos) {
            cell.set_char(symbol);
            cell.set_fg(fg);
        }
    }
}

impl Surface for BufferSurface<'_> {
    fn clear_rect(&mut self, rect: Rect) {
        for pos in self.to_terminal(rect).positions() {
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.reset();
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, tone: Tone) {
        let color = color_for(tone);
        for pos in self.to_terminal(rect).positions() {
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.set_bg(color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, tone: Tone) {
        let color = color_for(tone);
        let cells = Self::cells_covered(rect);
        if cells.is_empty() {
            return;
        }
        for p in cells.positions() {
            let on_edge = p.x == cells.left()
                || p.x == cells.right() - 1
                || p.y == cells.top()
                || p.y == cells.bottom() - 1;
            if !on_edge {
                continue;
            }
            let origin = self.cell_origin(p.x, p.y);
            for (dx, ch) in (0..consts::COLUMNS_PER_CELL).zip(consts::OUTLINE_SYMBOL.chars()) {
                self.put(Position::new(origin.x.saturating_add(dx), origin.y), ch, color);
            }
        }
    }

    fn fill_text(
        &mut self,
        text: &str,
        anchor: Position,
        alignment: Alignment,
        font: Font,
        tone: Tone,
    ) {
        let origin = self.cell_origin(anchor.x / consts::CELL_SIZE, anchor.y / consts::CELL_SIZE);
        if origin.y >= self.area.bottom() {
            return;
        }
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let start = match alignment {
            Alignment::Left => origin.x,
            Alignment::Center => origin.x.saturating_sub(width / 2),
            Alignment::Right => origin.x.saturating_sub(width),
        }
        .max(self.area.x);
        let room = usize::from(self.area.right().saturating_sub(start));
        let mut style = Style::new().fg(color_for(tone));
        if font.size() >= Font::Prompt.size() {
            style = style.add_modifier(Modifier::BOLD);
        }
        let _ = self.buf.set_stringn(start, origin.y, text, room, style);
    }
}

fn color_for(tone: Tone) -> Color {
    match tone {
        Tone::Fill => consts::FILL_COLOR,
        Tone::Outline => consts::OUTLINE_COLOR,
        Tone::Alert => consts::ALERT_COLOR,
        Tone::Text => consts::TEXT_COLOR,
    }
}

impl<R> Widget for &GameSession<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(
            format!(
                " Score: {}    High Score: {}",
                self.score(),
                self.high_score()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(
            board_area,
            Size {
                width: consts::BOARD_CELLS * consts::COLUMNS_PER_CELL + 2,
                height: consts::BOARD_CELLS + 2,
            },
        );
        Block::bordered()
            .title(consts::TITLE)
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let mut surface = BufferSurface::new(block_area.inner(Margin::new(1, 1)), buf);
        render(self, &mut surface);
    }
}
