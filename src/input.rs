//! Keyboard mapping for each scene.
//!
//! Keys become scene [`Command`]s, or a simulated arm raise during play.
//! Everything else is ignored.

use crate::scene::{Command, SceneKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Command(Command),
    /// Raise the simulated arms (keyboard stand-in for the gesture).
    RaiseArms,
    None,
}

/// Translate a key press for the current scene.
pub fn map_key(scene: SceneKind, key: KeyEvent) -> InputAction {
    // Only react to presses; some terminals also report repeats and releases.
    if key.kind == KeyEventKind::Release {
        return InputAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputAction::Command(Command::Quit);
    }

    match scene {
        SceneKind::Menu => match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => InputAction::Command(Command::Calibrate),
            KeyCode::Char(' ') | KeyCode::Enter => InputAction::Command(Command::Start),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                InputAction::Command(Command::Quit)
            }
            _ => InputAction::None,
        },
        SceneKind::Play => match key.code {
            KeyCode::Esc => InputAction::Command(Command::Cancel),
            KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Command(Command::Quit),
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                InputAction::RaiseArms
            }
            _ => InputAction::None,
        },
        SceneKind::GameOver => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                InputAction::Command(Command::Restart)
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
                InputAction::Command(Command::GoToMenu)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Command(Command::Quit),
            _ => InputAction::None,
        },
        SceneKind::Quit => InputAction::None,
    }
}
