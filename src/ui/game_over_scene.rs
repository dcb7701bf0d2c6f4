//! Game-over screen.

use super::game_common::{centered_rect, controls_line};
use crate::flappy::CrashCause;
use crate::scene::GameOverSummary;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const OVERLAY_WIDTH: u16 = 44;
const OVERLAY_HEIGHT: u16 = 13;

fn cause_text(cause: CrashCause) -> &'static str {
    match cause {
        CrashCause::Pipe => "Hit a pipe",
        CrashCause::OutOfBounds => "Left the screen",
    }
}

/// The overlay body for a finished session.
pub fn game_over_lines(summary: &GameOverSummary) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            cause_text(summary.cause),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", summary.score),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("High score: {}", summary.high_score),
            Style::default().fg(Color::Yellow),
        )),
    ];
    if summary.new_record {
        lines.push(Line::from(Span::styled(
            "NEW RECORD!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.push(controls_line(&[("[Space]", "Play again")]));
    lines.push(controls_line(&[("[Esc]", "Menu")]));
    lines.push(controls_line(&[("[q]", "Quit")]));
    lines
}

/// Render the GameOver scene.
pub fn render_game_over(frame: &mut Frame, area: Rect, summary: &GameOverSummary) {
    frame.render_widget(Clear, area);

    let overlay = centered_rect(area, OVERLAY_WIDTH, OVERLAY_HEIGHT);
    let block = Block::default()
        .title(" Gym Flappy Bird ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = game_over_lines(summary);
    let content_height = lines.len() as u16;
    let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(
            inner.x,
            y_offset,
            inner.width,
            content_height.min(inner.height),
        ),
    );
}
