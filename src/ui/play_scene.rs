//! Play screen: the field scaled into the terminal, plus score and camera.

use super::camera_view::render_camera;
use super::game_common::{
    create_game_layout, render_info_panel_frame, render_status_bar, stat_line,
};
use crate::core::config::GameConfig;
use crate::flappy::PlaySession;
use crate::scene::PlayState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 26;

/// Decorative clouds as (x, y, width, height) ellipses in world units.
const CLOUDS: [(f64, f64, f64, f64); 3] = [
    (50.0, 50.0, 80.0, 40.0),
    (200.0, 130.0, 80.0, 40.0),
    (350.0, 210.0, 80.0, 40.0),
];

/// What occupies one terminal cell of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Sky,
    Cloud,
    Pipe,
    /// Left or right column of a pipe.
    PipeEdge,
    Bird(char),
}

fn bird_glyph(velocity: f64) -> char {
    if velocity < -2.0 {
        '▲'
    } else if velocity > 4.0 {
        '▼'
    } else {
        '►'
    }
}

fn in_cloud(x: f64, y: f64) -> bool {
    CLOUDS.iter().any(|&(cx, cy, w, h)| {
        let dx = (x - (cx + w / 2.0)) / (w / 2.0);
        let dy = (y - (cy + h / 2.0)) / (h / 2.0);
        dx * dx + dy * dy <= 1.0
    })
}

/// Sample the world at each cell centre of a `width` × `height` grid.
pub fn field_tiles(
    session: &PlaySession,
    config: &GameConfig,
    width: u16,
    height: u16,
) -> Vec<Vec<Tile>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let cell_w = config.screen_width as f64 / width as f64;
    let cell_h = config.screen_height as f64 / height as f64;

    let bird_col = ((session.bird.x / cell_w) as u16).min(width - 1);
    let bird_row = ((session.bird.y.max(0.0) / cell_h) as u16).min(height - 1);

    (0..height)
        .map(|row| {
            let y = (row as f64 + 0.5) * cell_h;
            (0..width)
                .map(|col| {
                    if row == bird_row && col == bird_col {
                        return Tile::Bird(bird_glyph(session.bird.velocity));
                    }
                    let x = (col as f64 + 0.5) * cell_w;
                    for pipe in &session.pipes {
                        let left = pipe.x;
                        let right = pipe.x + pipe.width as f64;
                        if x < left || x > right {
                            continue;
                        }
                        let gap_top = pipe.gap_y as f64;
                        let gap_bottom = gap_top + config.pipe_gap as f64;
                        if y < gap_top || y > gap_bottom {
                            let edge = x - left < cell_w || right - x < cell_w;
                            return if edge { Tile::PipeEdge } else { Tile::Pipe };
                        }
                    }
                    if in_cloud(x, y) {
                        Tile::Cloud
                    } else {
                        Tile::Sky
                    }
                })
                .collect()
        })
        .collect()
}

fn tile_span(tile: Tile) -> Span<'static> {
    match tile {
        Tile::Sky => Span::raw(" "),
        Tile::Cloud => Span::styled("░", Style::default().fg(Color::White)),
        Tile::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
        Tile::PipeEdge => Span::styled("█", Style::default().fg(Color::Rgb(0, 100, 0))),
        Tile::Bird(glyph) => Span::styled(
            glyph.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

/// Render the Play scene.
pub fn render_play(
    frame: &mut Frame,
    area: Rect,
    play: &PlayState,
    config: &GameConfig,
    high_score: u32,
) {
    let layout = create_game_layout(
        frame,
        area,
        " Gym Flappy Bird ",
        Color::Cyan,
        INFO_PANEL_WIDTH,
    );

    render_field(frame, layout.content, &play.session, config);

    let (status, color) = if play.arms_raised {
        ("ARMS UP!", Color::Green)
    } else {
        ("Raise your arms to fly!", Color::Yellow)
    };
    render_status_bar(
        frame,
        layout.status_bar,
        status,
        color,
        &[("[Space/Up]", "Arms"), ("[Esc]", "Menu"), ("[q]", "Quit")],
    );

    render_info_panel(frame, layout.info_panel, play, high_score);
}

fn render_field(frame: &mut Frame, area: Rect, session: &PlaySession, config: &GameConfig) {
    let lines: Vec<Line> = field_tiles(session, config, area.width, area.height)
        .into_iter()
        .map(|row| Line::from(row.into_iter().map(tile_span).collect::<Vec<_>>()))
        .collect();
    let field = Paragraph::new(lines).style(Style::default().bg(Color::Rgb(70, 130, 180)));
    frame.render_widget(field, area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, play: &PlayState, high_score: u32) {
    let inner = render_info_panel_frame(frame, area, " Info ");
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        stat_line("Score", play.session.score.to_string(), Color::White),
        stat_line("Best", high_score.to_string(), Color::Yellow),
        Line::from(""),
    ];
    if play.arms_raised {
        lines.push(Line::from(Span::styled(
            " ARMS UP!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " arms down",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    let header = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines),
        Rect {
            height: header.min(inner.height),
            ..inner
        },
    );

    if inner.height > header {
        let camera = Rect {
            x: inner.x + 1,
            y: inner.y + header,
            width: inner.width.saturating_sub(2),
            height: inner.height - header,
        };
        render_camera(frame, camera, play.camera.as_ref());
    }
}
