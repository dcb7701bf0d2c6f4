//! Menu screen: title, calibration status and a live camera preview.

use super::camera_view::render_camera;
use super::game_common::{
    centered_rect, create_game_layout, render_info_panel_frame, render_status_bar, stat_line,
};
use crate::core::config::GameConfig;
use crate::scene::MenuState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 24;
const PREVIEW_WIDTH: u16 = 48;
const PREVIEW_HEIGHT: u16 = 14;

/// Header lines above the preview: logo, title and calibration status.
pub fn menu_header(
    menu: &MenuState,
    calibrated: bool,
    logo: Option<&[String]>,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = logo
        .unwrap_or_default()
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                l.clone(),
                Style::default().fg(Color::Yellow),
            ))
        })
        .collect();

    lines.push(Line::from(Span::styled(
        "GYM FLAPPY BIRD",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    if calibrated {
        lines.push(Line::from(Span::styled(
            "CALIBRATED!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from("Press SPACE to play"));
    } else {
        lines.push(Line::from("Stand in view with arms down, then press C to calibrate"));
        if menu.calibration_failed {
            lines.push(Line::from(Span::styled(
                "No body detected. Try again.",
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(""));
        }
    }
    lines
}

/// Render the Menu scene.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    menu: &MenuState,
    config: &GameConfig,
    high_score: u32,
    calibrated: bool,
    logo: Option<&[String]>,
) {
    let layout = create_game_layout(
        frame,
        area,
        " Gym Flappy Bird ",
        Color::Cyan,
        INFO_PANEL_WIDTH,
    );

    let header = menu_header(menu, calibrated, logo);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header.len() as u16 + 1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(layout.content);

    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        chunks[0],
    );

    let preview_area = centered_rect(chunks[1], PREVIEW_WIDTH, PREVIEW_HEIGHT);
    let block = Block::default()
        .title(" Camera ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let preview_inner = block.inner(preview_area);
    frame.render_widget(block, preview_area);
    render_camera(frame, preview_inner, menu.preview.as_ref());

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Raise your arms to fly!",
            Style::default().fg(Color::Yellow),
        ))
        .alignment(Alignment::Center),
        chunks[2],
    );

    let controls: &[(&str, &str)] = if calibrated {
        &[("[c]", "Recalibrate"), ("[Space]", "Play"), ("[q]", "Quit")]
    } else {
        &[("[c]", "Calibrate"), ("[q]", "Quit")]
    };
    render_status_bar(frame, layout.status_bar, "", Color::White, controls);

    let inner = render_info_panel_frame(frame, layout.info_panel, " Info ");
    let info = vec![
        stat_line("Best", high_score.to_string(), Color::Yellow),
        Line::from(""),
        stat_line("Margin", format!("{:.2}", config.raise_margin), Color::White),
        stat_line("Gap", config.pipe_gap.to_string(), Color::Green),
        stat_line("FPS", config.play_fps.to_string(), Color::White),
    ];
    frame.render_widget(Paragraph::new(info), inner);
}
