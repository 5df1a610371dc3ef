use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::{FRUIT_COLOR, SCORE_COLOR};
use crate::session::TerminationCause;

const GAME_OVER_BANNER: &str = "u ded, h4h4";

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    cause: Option<TerminationCause>,
) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(GAME_OVER_BANNER).style(
            Style::new()
                .fg(FRUIT_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")).style(Style::new().fg(SCORE_COLOR)),
        Line::from(cause_text(cause)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn cause_text(cause: Option<TerminationCause>) -> &'static str {
    match cause {
        Some(TerminationCause::Wall) => "Cause: hit wall",
        Some(TerminationCause::SelfBite) => "Cause: hit yourself",
        Some(TerminationCause::Quit) => "Cause: quit",
        None => "",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
