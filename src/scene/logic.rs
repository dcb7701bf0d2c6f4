//! The scene state machine: owns the play session, the high score and the
//! gesture source, and advances exactly one step per [`Game::tick`].
//!
//! Wall-clock pacing is the caller's job; [`Game::frame_interval`] reports
//! the rate the current scene wants.

use super::types::{
    transition, Command, GameOverSummary, Guards, MenuState, PlayState, Scene, SceneKind,
    Target, Trigger,
};
use crate::core::config::GameConfig;
use crate::flappy::{process_tick, CrashCause, PlaySession, TickResult};
use crate::gesture::GestureSource;
use rand::Rng;
use std::time::Duration;
use tracing::info;

/// Read-only snapshot handed to the presentation layer each frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub scene: &'a Scene,
    pub config: &'a GameConfig,
    pub high_score: u32,
    pub calibrated: bool,
}

pub struct Game<G: GestureSource, R: Rng> {
    config: GameConfig,
    gesture: G,
    rng: R,
    scene: Scene,
    high_score: u32,
    sessions_played: u32,
}

impl<G: GestureSource, R: Rng> Game<G, R> {
    /// Start at the menu with no high score.
    pub fn new(config: GameConfig, gesture: G, rng: R) -> Self {
        Self {
            config,
            gesture,
            rng,
            scene: Scene::Menu(MenuState::default()),
            high_score: 0,
            sessions_played: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn kind(&self) -> SceneKind {
        self.scene.kind()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    pub fn is_quit(&self) -> bool {
        self.kind() == SceneKind::Quit
    }

    pub fn gesture(&self) -> &G {
        &self.gesture
    }

    /// The running session, if in Play.
    pub fn session(&self) -> Option<&PlaySession> {
        match &self.scene {
            Scene::Play(play) => Some(&play.session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut PlaySession> {
        match &mut self.scene {
            Scene::Play(play) => Some(&mut play.session),
            _ => None,
        }
    }

    pub fn view(&self) -> SceneView<'_> {
        SceneView {
            scene: &self.scene,
            config: &self.config,
            high_score: self.high_score,
            calibrated: self.gesture.is_calibrated(),
        }
    }

    /// Target time per tick for the current scene.
    pub fn frame_interval(&self) -> Duration {
        match self.kind() {
            SceneKind::Play => self.config.play_frame(),
            _ => self.config.menu_frame(),
        }
    }

    /// Apply a player command. Returns the new scene kind if it changed.
    pub fn handle_command(&mut self, command: Command) -> Option<SceneKind> {
        let from = self.kind();

        if from == SceneKind::Menu && command == Command::Calibrate {
            self.calibrate();
        }
        if from == SceneKind::Play && command == Command::Cancel && self.config.high_score_on_cancel
        {
            if let Some(score) = self.session().map(|s| s.score) {
                self.record_score(score);
            }
        }

        let to = transition(from, Trigger::Command(command), self.guards())?;
        self.enter(to);
        Some(to.kind())
    }

    /// Advance the current scene by one step.
    ///
    /// Menu refreshes the camera preview; Play polls the gesture, steps the
    /// session and ends it on a crash. Returns the session's tick result in Play.
    pub fn tick(&mut self) -> Option<TickResult> {
        match &mut self.scene {
            Scene::Menu(menu) => {
                menu.preview = self.gesture.preview_frame();
                None
            }
            Scene::Play(play) => {
                let poll = self.gesture.poll_flap();
                if poll.triggered {
                    play.session.queue_flap();
                }
                play.arms_raised = poll.arms_raised;
                play.camera = poll.frame;

                let result = process_tick(&mut play.session, &self.config, &mut self.rng);
                if let Some(cause) = result.crash {
                    let score = play.session.score;
                    self.finish_session(score, cause);
                }
                Some(result)
            }
            Scene::GameOver(_) | Scene::Quit => None,
        }
    }

    /// Release the gesture source. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        self.gesture.release();
    }

    fn guards(&self) -> Guards {
        Guards {
            calibrated: self.gesture.is_calibrated(),
            start_on_calibrate: self.config.start_on_calibrate,
        }
    }

    fn calibrate(&mut self) {
        let ok = self.gesture.calibrate();
        if let Scene::Menu(menu) = &mut self.scene {
            menu.calibration_failed = !ok;
        }
    }

    /// Raise the high score if `score` beats it. Returns true on a new record.
    fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            return true;
        }
        false
    }

    fn finish_session(&mut self, score: u32, cause: CrashCause) {
        let new_record = self.record_score(score);
        self.sessions_played += 1;
        info!(score, high_score = self.high_score, ?cause, "session ended");

        let summary = GameOverSummary {
            score,
            high_score: self.high_score,
            cause,
            new_record,
        };
        if let Some(to) = transition(SceneKind::Play, Trigger::Crash(summary), self.guards()) {
            self.enter(to);
        }
    }

    /// Build the data owned by the target scene.
    fn enter(&mut self, to: Target) {
        info!(from = self.kind().name(), to = to.kind().name(), "scene transition");
        self.scene = match to {
            Target::Menu => Scene::Menu(MenuState::default()),
            Target::Play => Scene::Play(PlayState {
                session: PlaySession::new(&self.config, &mut self.rng),
                arms_raised: false,
                camera: None,
            }),
            Target::GameOver(summary) => Scene::GameOver(summary),
            Target::Quit => Scene::Quit,
        };
    }
}

impl<G: GestureSource, R: Rng> Drop for Game<G, R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
