use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    BACKGROUND_COLOR, FRUIT_COLOR, GLYPH_FRUIT, GLYPH_SNAKE, SNAKE_COLOR,
    TERMINAL_COLUMNS_PER_CELL,
};
use crate::driver::RenderSurface;
use crate::error::AppError;
use crate::grid::{Cell, Field};
use crate::session::Snapshot;
use crate::terminal_runtime::TerminalSession;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

const WINDOW_TITLE: &str = " Yet Another Snake! ";

/// Rendering surface backed by the crossterm terminal.
pub struct TerminalSurface {
    terminal: TerminalSession,
    field: Field,
}

impl TerminalSurface {
    #[must_use]
    pub fn new(terminal: TerminalSession, field: Field) -> Self {
        Self { terminal, field }
    }
}

impl RenderSurface for TerminalSurface {
    fn draw_frame(&mut self, snapshot: &Snapshot) -> Result<(), AppError> {
        let field = self.field;
        self.terminal
            .terminal_mut()
            .draw(|frame| render(frame, snapshot, field))?;
        Ok(())
    }

    fn draw_game_over(&mut self, snapshot: &Snapshot) -> Result<(), AppError> {
        self.terminal
            .terminal_mut()
            .draw(|frame| render_game_over(frame, snapshot))?;
        Ok(())
    }
}

/// Renders one play frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, field: Field) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(BACKGROUND_COLOR)), area);

    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    render_hud(frame, hud_area, snapshot.score);

    let board = board_rect(play_area, field);
    let block = Block::bordered()
        .title(WINDOW_TITLE)
        .border_style(Style::new().fg(SNAKE_COLOR));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_fruit(frame, inner, field, snapshot.fruit);
    render_snake(frame, inner, field, &snapshot.snake);
}

/// Clears the screen and draws the game-over banner.
pub fn render_game_over(frame: &mut Frame<'_>, snapshot: &Snapshot) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(BACKGROUND_COLOR)), area);
    render_game_over_menu(frame, area, snapshot.score, snapshot.cause);
}

fn board_rect(play_area: Rect, field: Field) -> Rect {
    let columns = u16::try_from(field.columns()).unwrap_or(u16::MAX);
    let rows = u16::try_from(field.rows()).unwrap_or(u16::MAX);

    let width = columns
        .saturating_mul(TERMINAL_COLUMNS_PER_CELL)
        .saturating_add(2);
    let height = rows.saturating_add(2);

    Rect::new(
        play_area.x,
        play_area.y,
        width.min(play_area.width),
        height.min(play_area.height),
    )
}

fn render_fruit(frame: &mut Frame<'_>, inner: Rect, field: Field, fruit: Option<Cell>) {
    let Some((x, y)) = fruit.and_then(|cell| cell_to_terminal(inner, field, cell)) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FRUIT, Style::new().fg(FRUIT_COLOR));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, field: Field, snake: &[Cell]) {
    let buffer = frame.buffer_mut();
    for (index, cell) in snake.iter().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, field, *cell) else {
            continue;
        };

        let style = if index == 0 {
            Style::new().fg(SNAKE_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(SNAKE_COLOR)
        };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

/// Maps a field cell to the terminal position of its left column, or `None`
/// when it is off the field or clipped by a small terminal.
fn cell_to_terminal(inner: Rect, field: Field, cell: Cell) -> Option<(u16, u16)> {
    if !field.in_bounds(cell) {
        return None;
    }

    let column = u16::try_from(cell.x / field.cell_size).ok()?;
    let row = u16::try_from(cell.y / field.cell_size).ok()?;

    let x = inner
        .x
        .saturating_add(column.saturating_mul(TERMINAL_COLUMNS_PER_CELL));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(TERMINAL_COLUMNS_PER_CELL) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::grid::{Cell, Field};
    use crate::session::{Session, TerminationCause};

    use super::{cell_to_terminal, render, render_game_over};

    #[test]
    fn cells_map_to_two_terminal_columns() {
        let inner = Rect::new(1, 2, 80, 30);

        assert_eq!(
            cell_to_terminal(inner, Field::CLASSIC, Cell::new(0, 0)),
            Some((1, 2))
        );
        assert_eq!(
            cell_to_terminal(inner, Field::CLASSIC, Cell::new(780, 580)),
            Some((79, 31))
        );
        assert_eq!(
            cell_to_terminal(inner, Field::CLASSIC, Cell::new(-20, 0)),
            None
        );
    }

    #[test]
    fn clipped_cells_are_skipped() {
        let inner = Rect::new(0, 0, 10, 5);

        assert_eq!(
            cell_to_terminal(inner, Field::CLASSIC, Cell::new(100, 0)),
            None
        );
        assert_eq!(
            cell_to_terminal(inner, Field::CLASSIC, Cell::new(0, 100)),
            None
        );
    }

    #[test]
    fn frame_shows_score_snake_and_fruit() {
        let mut session = Session::new_with_seed(Field::CLASSIC, 1);
        session.fruit.place(Cell::new(0, 0));
        session.score = 30;
        let snapshot = session.snapshot();

        let mut terminal = Terminal::new(TestBackend::new(90, 40)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, &snapshot, Field::CLASSIC))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        assert!(row_text(buffer, 0).contains("Score: 30"));
        // Board starts on row 1; inner area is offset by the border.
        assert_eq!(buffer[(1, 2)].symbol(), "█");
        assert_eq!(buffer[(41, 17)].symbol(), "[");
    }

    #[test]
    fn game_over_frame_names_the_cause() {
        let mut session = Session::new_with_seed(Field::CLASSIC, 2);
        session.quit();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.cause, Some(TerminationCause::Quit));

        let mut terminal = Terminal::new(TestBackend::new(90, 40)).expect("test terminal");
        terminal
            .draw(|frame| render_game_over(frame, &snapshot))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let all_text: String = (0..40).map(|row| row_text(buffer, row)).collect();
        assert!(all_text.contains("u ded, h4h4"));
        assert!(all_text.contains("Cause: quit"));
    }

    fn row_text(buffer: &Buffer, row: u16) -> String {
        (0..buffer.area.width)
            .map(|column| buffer[(column, row)].symbol())
            .collect()
    }
}
