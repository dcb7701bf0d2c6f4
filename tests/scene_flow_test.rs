//! Integration test: scene flow
//!
//! Runs the full menu -> play -> game over loop with real pose-backed
//! gesture sources (a landmark recording and the keyboard simulator).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gym_flappy::core::{GameConfig, SIM_RAISE_HOLD_FRAMES};
use gym_flappy::gesture::{
    GestureSource, Landmark, PoseGestureSource, PoseLandmarks, ReplayEstimator, SimulatedArms,
    SimulatedPose,
};
use gym_flappy::input::{map_key, InputAction};
use gym_flappy::scene::{Command, Game, Scene, SceneKind};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;

fn pose(wrist_y: f32) -> PoseLandmarks {
    PoseLandmarks {
        left_shoulder: Landmark::new(0.4, 0.5),
        right_shoulder: Landmark::new(0.6, 0.5),
        left_wrist: Landmark::new(0.3, wrist_y),
        right_wrist: Landmark::new(0.7, 0.8),
    }
}

fn replay_game(
    frames: Vec<Option<PoseLandmarks>>,
) -> Game<PoseGestureSource<ReplayEstimator>, ChaCha8Rng> {
    let config = GameConfig::default();
    let source = PoseGestureSource::new(
        ReplayEstimator::from_frames(frames, true),
        config.raise_margin,
    );
    Game::new(config, source, ChaCha8Rng::seed_from_u64(11))
}

fn tick_until_game_over<G: GestureSource, R: Rng>(game: &mut Game<G, R>) {
    for _ in 0..10_000 {
        if game.kind() != SceneKind::Play {
            return;
        }
        game.tick();
    }
    panic!("session never ended");
}

#[test]
fn test_full_cycle_with_recording() {
    // Arms down for calibration, then one raise every four frames
    let frames = vec![
        Some(pose(0.8)),
        Some(pose(0.2)),
        Some(pose(0.8)),
        Some(pose(0.8)),
    ];
    let mut game = replay_game(frames);
    assert_eq!(game.kind(), SceneKind::Menu);

    // Successful calibration starts play straight away
    assert_eq!(
        game.handle_command(Command::Calibrate),
        Some(SceneKind::Play)
    );
    assert!(game.view().calibrated);

    let first = game.tick().expect("play tick");
    assert!(first.flapped);
    let second = game.tick().expect("play tick");
    assert!(!second.flapped);

    tick_until_game_over(&mut game);
    assert_eq!(game.kind(), SceneKind::GameOver);
    assert_eq!(game.sessions_played(), 1);

    assert_eq!(game.handle_command(Command::Restart), Some(SceneKind::Play));
    let session = game.session().expect("fresh session");
    assert_eq!(session.score, 0);
    assert_eq!(session.tick_count, 0);

    assert_eq!(game.handle_command(Command::Cancel), Some(SceneKind::Menu));
    // Calibration survives a trip back to the menu
    assert!(game.view().calibrated);
    assert_eq!(game.handle_command(Command::Start), Some(SceneKind::Play));

    assert_eq!(game.handle_command(Command::Quit), Some(SceneKind::Quit));
    assert!(game.is_quit());
    assert!(game.tick().is_none());
}

#[test]
fn test_recording_without_body_cannot_calibrate() {
    let mut game = replay_game(vec![None]);
    assert_eq!(game.handle_command(Command::Calibrate), None);
    assert_eq!(game.kind(), SceneKind::Menu);
    match game.scene() {
        Scene::Menu(menu) => assert!(menu.calibration_failed),
        _ => panic!("expected menu"),
    }
    assert_eq!(game.handle_command(Command::Start), None);
}

#[test]
fn test_exhausted_recording_means_no_flaps() {
    let config = GameConfig::default();
    let source = PoseGestureSource::new(
        ReplayEstimator::from_frames(vec![Some(pose(0.8)), Some(pose(0.2))], false),
        config.raise_margin,
    );
    let mut game = Game::new(config, source, ChaCha8Rng::seed_from_u64(3));
    game.handle_command(Command::Calibrate);

    assert!(game.tick().expect("tick").flapped);
    for _ in 0..20 {
        let result = game.tick().expect("tick");
        assert!(!result.flapped);
    }
    assert_eq!(game.kind(), SceneKind::Play);
}

#[test]
fn test_recording_parsed_from_json_lines() {
    let text = r#"{"landmarks": {"left_shoulder": {"x": 0.4, "y": 0.5}, "right_shoulder": {"x": 0.6, "y": 0.5}, "left_wrist": {"x": 0.3, "y": 0.8}, "right_wrist": {"x": 0.7, "y": 0.8}}}
{"landmarks": null}
{"landmarks": {"left_shoulder": {"x": 0.4, "y": 0.5}, "right_shoulder": {"x": 0.6, "y": 0.5}, "left_wrist": {"x": 0.3, "y": 0.1}, "right_wrist": {"x": 0.7, "y": 0.8}}}
"#;
    let replay = ReplayEstimator::from_reader(Cursor::new(text), false).expect("recording");
    assert_eq!(replay.len(), 3);

    let config = GameConfig::default();
    let mut source = PoseGestureSource::new(replay, config.raise_margin);
    assert!(source.calibrate());
    // Missing body: no flap
    assert!(!source.poll_flap().triggered);
    assert!(source.poll_flap().triggered);
}

#[test]
fn test_keyboard_simulated_arms_flap() {
    let config = GameConfig::default();
    let arms = SimulatedArms::new();
    let source = PoseGestureSource::new(
        SimulatedPose::new(arms.clone(), SIM_RAISE_HOLD_FRAMES),
        config.raise_margin,
    );
    let mut game = Game::new(config, source, ChaCha8Rng::seed_from_u64(8));

    // Menu preview comes from the simulated camera
    game.tick();
    match game.scene() {
        Scene::Menu(menu) => assert!(menu.preview.is_some()),
        _ => panic!("expected menu"),
    }

    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
    match map_key(game.kind(), key) {
        InputAction::Command(command) => {
            assert_eq!(game.handle_command(command), Some(SceneKind::Play))
        }
        other => panic!("unexpected action {:?}", other),
    }

    assert!(!game.tick().expect("tick").flapped);

    let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
    assert_eq!(map_key(game.kind(), space), InputAction::RaiseArms);
    arms.raise();
    let raised = game.tick().expect("tick");
    assert!(raised.flapped);

    // Holding the arms up does not flap again
    let held = game.tick().expect("tick");
    assert!(!held.flapped);
    match game.scene() {
        Scene::Play(play) => {
            assert!(play.arms_raised);
            assert!(play.camera.is_some());
        }
        _ => panic!("expected play"),
    }
}

#[test]
fn test_high_score_is_running_maximum() {
    let mut rng = ChaCha8Rng::seed_from_u64(2025);
    let mut game = replay_game(vec![Some(pose(0.8))]);
    game.handle_command(Command::Calibrate);

    let mut best: u32 = 0;
    for round in 0..25 {
        let score = rng.gen_range(0..40);
        game.session_mut().expect("session").score = score;
        tick_until_game_over(&mut game);

        best = best.max(score);
        assert_eq!(game.high_score(), best, "round {}", round);
        match game.scene() {
            Scene::GameOver(summary) => {
                assert_eq!(summary.score, score);
                assert_eq!(summary.high_score, best);
            }
            _ => panic!("expected game over"),
        }
        assert_eq!(game.handle_command(Command::Restart), Some(SceneKind::Play));
    }
    assert_eq!(game.sessions_played(), 25);
}
