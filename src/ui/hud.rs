use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::SCORE_COLOR;

const HUD_INNER_MARGIN_X: u16 = 1;

/// Draws the single score line above the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32) {
    let area = inset_horizontal(area, HUD_INNER_MARGIN_X);

    frame.render_widget(
        Paragraph::new(Line::from(format!("Score: {score}")))
            .alignment(Alignment::Left)
            .style(Style::new().fg(SCORE_COLOR)),
        area,
    );
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect {
        x: area.x + margin,
        width: area.width - margin * 2,
        ..area
    }
}
