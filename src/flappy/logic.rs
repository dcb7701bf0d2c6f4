//! Per-tick game logic for one play session.

use super::collision::{pipe_collides, try_score};
use super::obstacles::advance_pipes;
use super::types::{Bird, Pipe};
use crate::core::config::GameConfig;
use rand::Rng;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// The bird's hitbox met a pipe.
    Pipe,
    /// The bird touched the top or bottom of the screen.
    OutOfBounds,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// A queued flap was applied this tick.
    pub flapped: bool,
    /// Pipes passed this tick.
    pub scored: u32,
    /// Set when the session ended this tick.
    pub crash: Option<CrashCause>,
}

/// State of one Play session, created fresh on every entry into Play.
#[derive(Debug, Clone)]
pub struct PlaySession {
    pub bird: Bird,
    /// Ordered oldest to newest.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    /// Flap input waiting to be consumed by the next tick.
    pub flap_queued: bool,
    pub tick_count: u64,
    pub crashed: Option<CrashCause>,
}

impl PlaySession {
    /// Reset the bird and seed one pipe beyond the right edge.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let first_x = config.screen_width as f64 + config.first_pipe_offset;
        Self {
            bird: Bird::new(config),
            pipes: vec![Pipe::spawn(first_x, config, rng)],
            score: 0,
            flap_queued: false,
            tick_count: 0,
            crashed: None,
        }
    }

    /// Request a flap. Repeated requests before the next tick collapse into one.
    pub fn queue_flap(&mut self) {
        self.flap_queued = true;
    }

    pub fn is_over(&self) -> bool {
        self.crashed.is_some()
    }
}

/// Advance a session by exactly one step.
///
/// Order: apply queued flap, bird physics, scroll/prune/spawn pipes,
/// collisions and scoring, then the out-of-bounds check.
pub fn process_tick<R: Rng>(
    session: &mut PlaySession,
    config: &GameConfig,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    if session.is_over() {
        return result;
    }

    if session.flap_queued {
        session.bird.flap(config);
        session.flap_queued = false;
        result.flapped = true;
    }

    session.bird.update(config);

    advance_pipes(&mut session.pipes, config, rng);

    let mut hit = false;
    for pipe in &mut session.pipes {
        if pipe_collides(pipe, &session.bird, config) {
            hit = true;
        }
        if try_score(pipe, &session.bird) {
            result.scored += 1;
        }
    }
    session.score += result.scored;

    if hit {
        result.crash = Some(CrashCause::Pipe);
    } else if session.bird.is_out_of_bounds(config) {
        result.crash = Some(CrashCause::OutOfBounds);
    }

    session.tick_count += 1;
    session.crashed = result.crash;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> (PlaySession, GameConfig, StdRng) {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let session = PlaySession::new(&config, &mut rng);
        (session, config, rng)
    }

    #[test]
    fn test_new_session_defaults() {
        let (session, _, _) = session();
        assert_eq!(session.score, 0);
        assert_eq!(session.pipes.len(), 1);
        assert!((session.pipes[0].x - 1400.0).abs() < f64::EPSILON);
        assert!(!session.flap_queued);
        assert!(!session.is_over());
    }

    #[test]
    fn test_queued_flap_applies_once() {
        let (mut session, config, mut rng) = session();
        session.queue_flap();
        session.queue_flap();

        let result = process_tick(&mut session, &config, &mut rng);
        assert!(result.flapped);
        // One impulse, then one tick of gravity
        assert!((session.bird.velocity - (config.flap_strength + config.gravity)).abs() < 1e-9);
        assert!(!session.flap_queued);

        let result = process_tick(&mut session, &config, &mut rng);
        assert!(!result.flapped);
        assert!((session.bird.velocity - (config.flap_strength + 2.0 * config.gravity)).abs() < 1e-9);
    }

    #[test]
    fn test_scores_once_when_pipe_passes() {
        let (mut session, config, mut rng) = session();
        // Pipe at 170 with its gap around the bird; keep the bird hovering.
        session.pipes = vec![Pipe {
            x: 170.0,
            gap_y: 300,
            width: 70,
            scored: false,
        }];

        let mut total = 0;
        for _ in 0..100 {
            session.bird.y = 400.0;
            session.bird.velocity = 0.0;
            let result = process_tick(&mut session, &config, &mut rng);
            assert!(result.crash.is_none());
            total += result.scored;
        }
        assert_eq!(total, 1);
        assert_eq!(session.score, 1);
        assert!(session.pipes.iter().all(|p| p.x > -70.0));
    }

    #[test]
    fn test_pipe_collision_ends_session() {
        let (mut session, config, mut rng) = session();
        session.pipes = vec![Pipe {
            x: 90.0,
            gap_y: 500,
            width: 70,
            scored: false,
        }];
        let result = process_tick(&mut session, &config, &mut rng);
        assert_eq!(result.crash, Some(CrashCause::Pipe));
        assert!(session.is_over());

        // Further ticks are no-ops
        let y = session.bird.y;
        let result = process_tick(&mut session, &config, &mut rng);
        assert_eq!(result, TickResult::default());
        assert_eq!(session.bird.y, y);
    }

    #[test]
    fn test_falling_bird_ends_out_of_bounds() {
        let (mut session, config, mut rng) = session();
        let mut ticks = 0;
        loop {
            let result = process_tick(&mut session, &config, &mut rng);
            ticks += 1;
            if let Some(cause) = result.crash {
                assert_eq!(cause, CrashCause::OutOfBounds);
                break;
            }
            assert!(ticks < 1000);
        }
        assert_eq!(session.bird.y, config.max_bird_y());
    }

    #[test]
    fn test_ceiling_ends_session() {
        let (mut session, config, mut rng) = session();
        session.bird.y = 5.0;
        session.queue_flap();
        let result = process_tick(&mut session, &config, &mut rng);
        assert_eq!(result.crash, Some(CrashCause::OutOfBounds));
        assert_eq!(session.bird.y, 0.0);
        assert_eq!(session.bird.velocity, 0.0);
    }
}
