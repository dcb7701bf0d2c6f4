//! Scene states, player commands and the transition table.

use crate::flappy::{CrashCause, PlaySession};
use crate::gesture::CameraFrame;

/// Discriminant of [`Scene`], used by the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Menu,
    Play,
    GameOver,
    /// Terminal: the process exits.
    Quit,
}

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::Menu,
        SceneKind::Play,
        SceneKind::GameOver,
        SceneKind::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Menu => "menu",
            SceneKind::Play => "play",
            SceneKind::GameOver => "game_over",
            SceneKind::Quit => "quit",
        }
    }
}

/// Discrete player commands, decoupled from the keys that produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Calibrate,
    Start,
    Cancel,
    Restart,
    GoToMenu,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Quit,
        Command::Calibrate,
        Command::Start,
        Command::Cancel,
        Command::Restart,
        Command::GoToMenu,
    ];
}

/// Anything that can move the game between scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Command(Command),
    /// The play session hit a pipe or a screen edge.
    Crash(GameOverSummary),
}

/// Where a transition leads. Game over carries the summary it will show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Menu,
    Play,
    GameOver(GameOverSummary),
    Quit,
}

impl Target {
    pub fn kind(self) -> SceneKind {
        match self {
            Target::Menu => SceneKind::Menu,
            Target::Play => SceneKind::Play,
            Target::GameOver(_) => SceneKind::GameOver,
            Target::Quit => SceneKind::Quit,
        }
    }
}

/// Facts the table needs beyond the current scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Guards {
    /// Calibration state after any calibration attempt made for this trigger.
    pub calibrated: bool,
    pub start_on_calibrate: bool,
}

/// The complete transition table. `None` means the trigger is ignored.
pub fn transition(from: SceneKind, trigger: Trigger, guards: Guards) -> Option<Target> {
    use SceneKind::{GameOver, Menu, Play};

    match (from, trigger) {
        (SceneKind::Quit, _) => None,
        (_, Trigger::Command(Command::Quit)) => Some(Target::Quit),

        (Menu, Trigger::Command(Command::Calibrate)) => {
            (guards.calibrated && guards.start_on_calibrate).then_some(Target::Play)
        }
        (Menu, Trigger::Command(Command::Start)) => guards.calibrated.then_some(Target::Play),
        (Menu, Trigger::Command(Command::Cancel | Command::Restart | Command::GoToMenu)) => None,
        (Menu, Trigger::Crash(_)) => None,

        (Play, Trigger::Command(Command::Cancel)) => Some(Target::Menu),
        (
            Play,
            Trigger::Command(
                Command::Calibrate | Command::Start | Command::Restart | Command::GoToMenu,
            ),
        ) => None,
        (Play, Trigger::Crash(summary)) => Some(Target::GameOver(summary)),

        (GameOver, Trigger::Command(Command::Restart)) => Some(Target::Play),
        (GameOver, Trigger::Command(Command::GoToMenu)) => Some(Target::Menu),
        (GameOver, Trigger::Command(Command::Calibrate | Command::Start | Command::Cancel)) => {
            None
        }
        (GameOver, Trigger::Crash(_)) => None,
    }
}

/// Menu screen state.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    /// The last calibration attempt found no body.
    pub calibration_failed: bool,
    /// Latest camera preview.
    pub preview: Option<CameraFrame>,
}

/// Play screen state: the session plus the latest gesture readout.
#[derive(Debug, Clone)]
pub struct PlayState {
    pub session: PlaySession,
    pub arms_raised: bool,
    pub camera: Option<CameraFrame>,
}

/// Result of a finished session, shown on the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub high_score: u32,
    pub cause: CrashCause,
    /// This session raised the high score.
    pub new_record: bool,
}

/// The current scene. Each variant owns the data that lives only in that scene.
#[derive(Debug, Clone)]
pub enum Scene {
    Menu(MenuState),
    Play(PlayState),
    GameOver(GameOverSummary),
    Quit,
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Menu(_) => SceneKind::Menu,
            Scene::Play(_) => SceneKind::Play,
            Scene::GameOver(_) => SceneKind::GameOver,
            Scene::Quit => SceneKind::Quit,
        }
    }
}
