//! Integration test: play session mechanics
//!
//! Drives bird physics, pipe generation, scoring and the tick pipeline
//! through the public API with seeded RNGs.

use gym_flappy::core::GameConfig;
use gym_flappy::flappy::collision::try_score;
use gym_flappy::flappy::obstacles::advance_pipes;
use gym_flappy::flappy::{process_tick, Bird, CrashCause, Pipe, PlaySession};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn new_session(seed: u64) -> (PlaySession, GameConfig, ChaCha8Rng) {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let session = PlaySession::new(&config, &mut rng);
    (session, config, rng)
}

/// Hold the bird in the gap of the nearest pipe it has not cleared yet.
fn steer_through_gap(session: &mut PlaySession, config: &GameConfig) {
    let left = session.bird.x - (session.bird.size / 2) as f64;
    if let Some(pipe) = session
        .pipes
        .iter()
        .find(|p| p.x + p.width as f64 >= left)
    {
        session.bird.y = pipe.gap_y as f64 + config.pipe_gap as f64 / 2.0;
    }
    // Cancels the next gravity step so the bird stays put
    session.bird.velocity = -config.gravity;
}

#[test]
fn test_upward_motion_clamps_at_top() {
    let config = GameConfig::default();
    let mut bird = Bird::new(&config);
    bird.y = 0.0;
    bird.velocity = -3.0;

    bird.update(&config);

    assert_eq!(bird.y, 0.0);
    assert_eq!(bird.velocity, 0.0);
    assert!(bird.is_out_of_bounds(&config));
}

#[test]
fn test_downward_motion_from_top_stays_in_bounds() {
    let config = GameConfig::default();
    let mut bird = Bird::new(&config);
    bird.y = 0.0;
    bird.velocity = 3.0;

    bird.update(&config);

    assert!((bird.velocity - 3.5).abs() < f64::EPSILON);
    assert!((bird.y - 3.5).abs() < f64::EPSILON);
    assert!(!bird.is_out_of_bounds(&config));
}

#[test]
fn test_bird_never_leaves_screen() {
    let config = GameConfig::default();
    let mut bird = Bird::new(&config);
    for tick in 0..2000 {
        if tick % 7 == 0 {
            bird.flap(&config);
        }
        bird.update(&config);
        assert!(bird.y >= 0.0 && bird.y <= config.max_bird_y());
    }
}

#[test]
fn test_pipe_expires_after_491_ticks() {
    let config = GameConfig::default();
    let mut pipe = Pipe {
        x: 1400.0,
        gap_y: 300,
        width: 70,
        scored: false,
    };

    for _ in 0..490 {
        pipe.advance(&config);
    }
    assert!((pipe.x - (-70.0)).abs() < 1e-9);
    assert!(!pipe.is_expired());

    pipe.advance(&config);
    assert!(pipe.is_expired());
}

#[test]
fn test_scoring_flips_once_while_condition_holds() {
    let config = GameConfig::default();
    let bird = Bird::new(&config);
    let mut pipe = Pipe {
        x: 0.0,
        gap_y: 300,
        width: 70,
        scored: false,
    };

    let mut score = 0;
    for _ in 0..5 {
        if try_score(&mut pipe, &bird) {
            score += 1;
        }
    }
    assert_eq!(score, 1);
    assert!(pipe.scored);
}

#[test]
fn test_double_trigger_flaps_once() {
    let (mut session, config, mut rng) = new_session(7);
    session.bird.velocity = 4.0;
    session.queue_flap();
    session.queue_flap();

    let result = process_tick(&mut session, &config, &mut rng);

    assert!(result.flapped);
    assert!((session.bird.velocity - (config.flap_strength + config.gravity)).abs() < 1e-9);
    let next = process_tick(&mut session, &config, &mut rng);
    assert!(!next.flapped);
}

#[test]
fn test_thousand_spawns_within_gap_bounds() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..1000 {
        let pipe = Pipe::spawn(1200.0, &config, &mut rng);
        assert!(pipe.gap_y >= 150);
        assert!(pipe.gap_y <= 800 - 200 - 150);
    }
}

#[test]
fn test_pipe_field_stays_ordered_and_bounded() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut pipes = Vec::new();
    for _ in 0..5000 {
        advance_pipes(&mut pipes, &config, &mut rng);
        assert!(pipes.len() <= 6);
        assert!(pipes.windows(2).all(|w| w[0].x < w[1].x));
        assert!(pipes.iter().all(|p| !p.is_expired()));
    }
}

#[test]
fn test_untouched_bird_falls_out_of_bounds() {
    let (mut session, config, mut rng) = new_session(1);
    let mut crash = None;
    for _ in 0..200 {
        let result = process_tick(&mut session, &config, &mut rng);
        if result.crash.is_some() {
            crash = result.crash;
            break;
        }
    }
    assert_eq!(crash, Some(CrashCause::OutOfBounds));
    assert_eq!(session.score, 0);
    assert!(session.is_over());

    // Finished sessions ignore further ticks
    let ticks = session.tick_count;
    let after = process_tick(&mut session, &config, &mut rng);
    assert_eq!(after.crash, None);
    assert_eq!(session.tick_count, ticks);
}

#[test]
fn test_threading_the_gaps_scores_points() {
    let (mut session, config, mut rng) = new_session(31337);

    for _ in 0..2000 {
        steer_through_gap(&mut session, &config);
        let result = process_tick(&mut session, &config, &mut rng);
        assert_eq!(result.crash, None, "crashed at tick {}", session.tick_count);
        assert!(result.scored <= 1);
    }

    assert!(session.score >= 10, "score {}", session.score);
    let scored = session.pipes.iter().filter(|p| p.scored).count();
    assert!(scored <= session.score as usize);
}

#[test]
fn test_flying_into_a_pipe_crashes() {
    let (mut session, config, mut rng) = new_session(5);
    // Park the bird inside the first pipe's top section
    let pipe = session.pipes[0].clone();
    session.pipes[0].x = session.bird.x - 10.0;
    session.bird.y = (pipe.gap_y / 2) as f64;
    session.bird.velocity = -config.gravity;

    let result = process_tick(&mut session, &config, &mut rng);
    assert_eq!(result.crash, Some(CrashCause::Pipe));
}
