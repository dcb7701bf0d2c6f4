//! Terminal presentation. Reads a [`SceneView`] and never mutates game state.

pub mod camera_view;
pub mod game_common;
pub mod game_over_scene;
pub mod menu_scene;
pub mod play_scene;

use crate::scene::{Scene, SceneView};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the screens are laid out for.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Draw the current scene.
pub fn draw(frame: &mut Frame, view: &SceneView, logo: Option<&[String]>) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        draw_too_small(frame, size);
        return;
    }

    match view.scene {
        Scene::Menu(menu) => menu_scene::render_menu(
            frame,
            size,
            menu,
            view.config,
            view.high_score,
            view.calibrated,
            logo,
        ),
        Scene::Play(play) => {
            play_scene::render_play(frame, size, play, view.config, view.high_score)
        }
        Scene::GameOver(summary) => game_over_scene::render_game_over(frame, size, summary),
        Scene::Quit => {}
    }
}

fn draw_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small: need {}x{}, have {}x{}",
        MIN_WIDTH, MIN_HEIGHT, area.width, area.height
    );
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center),
        area,
    );
}
