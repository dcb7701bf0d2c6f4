//! Camera thumbnail drawn with density-shaded characters.

use crate::gesture::CameraFrame;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Characters from dark to bright.
const SHADING: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

fn shade(luma: u8) -> char {
    let index = luma as usize * (SHADING.len() - 1) / 255;
    SHADING[index]
}

/// Downsample a frame to `width` × `height` cells by nearest-pixel sampling.
pub fn frame_to_ascii(image: &CameraFrame, width: u16, height: u16) -> Vec<String> {
    if image.width == 0 || image.height == 0 || width == 0 || height == 0 {
        return Vec::new();
    }
    (0..height)
        .map(|row| {
            let y = (row as u32 * image.height as u32 / height as u32) as u16;
            (0..width)
                .map(|col| {
                    let x = (col as u32 * image.width as u32 / width as u32) as u16;
                    shade(image.pixel(x, y))
                })
                .collect()
        })
        .collect()
}

/// Draw the thumbnail, or a placeholder when there is no camera image.
pub fn render_camera(frame: &mut Frame, area: Rect, image: Option<&CameraFrame>) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let lines: Vec<Line> = match image {
        Some(image) => frame_to_ascii(image, area.width, area.height)
            .into_iter()
            .map(Line::from)
            .collect(),
        None => vec![Line::from("  (no camera)")],
    };
    let paragraph = Paragraph::new(lines).style(Style::default().fg(Color::Gray));
    frame.render_widget(paragraph, area);
}
