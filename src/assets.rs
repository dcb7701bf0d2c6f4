//! Optional decorative art.
//!
//! The menu can show an ASCII-art logo loaded from a text file. A missing or
//! unreadable file simply means no logo.

use std::fs;
use std::path::Path;
use tracing::warn;

/// Largest logo the menu will keep, in lines.
pub const MAX_LOGO_LINES: usize = 12;

/// Load a logo from disk, dropping trailing blank lines.
pub fn load_logo(path: &Path) -> Option<Vec<String>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "logo not loaded");
            return None;
        }
    };
    parse_logo(&text)
}

/// Split logo text into lines, capped at [`MAX_LOGO_LINES`]. Blank art is no art.
pub fn parse_logo(text: &str) -> Option<Vec<String>> {
    let mut lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return None;
    }
    Some(scale_sprite(&lines, lines.len().min(MAX_LOGO_LINES)))
}

/// Resample a sprite to `target_height` lines by nearest-line sampling.
pub fn scale_sprite(lines: &[String], target_height: usize) -> Vec<String> {
    if lines.is_empty() || target_height == 0 {
        return Vec::new();
    }
    let source_height = lines.len();
    if target_height == source_height {
        return lines.to_vec();
    }
    (0..target_height)
        .map(|i| {
            let source_index = (i * source_height) / target_height;
            lines[source_index.min(source_height - 1)].clone()
        })
        .collect()
}
