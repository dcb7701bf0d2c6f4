//! Pipe spawning, scrolling and recycling.

use super::types::{Pipe, Rect};
use crate::core::config::GameConfig;
use rand::Rng;

impl Pipe {
    /// Create a pipe at `x` with a random gap kept `gap_margin` away from both edges.
    pub fn spawn<R: Rng>(x: f64, config: &GameConfig, rng: &mut R) -> Self {
        let gap_y = rng.gen_range(config.min_gap_y()..=config.max_gap_y());
        Self {
            x,
            gap_y,
            width: config.pipe_width,
            scored: false,
        }
    }

    /// Scroll left by one tick.
    pub fn advance(&mut self, config: &GameConfig) {
        self.x -= config.pipe_speed;
    }

    /// True once the right edge has left the screen.
    pub fn is_expired(&self) -> bool {
        self.x < -(self.width as f64)
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width as f64, self.gap_y as f64)
    }

    /// The bottom pipe extends a full screen height below the gap.
    pub fn bottom_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(
            self.x,
            (self.gap_y + config.pipe_gap as i32) as f64,
            self.width as f64,
            config.screen_height as f64,
        )
    }
}

/// Whether the field needs a fresh pipe at the right edge.
///
/// Spacing depends only on how far the newest pipe has scrolled, so frame
/// timing never changes the distance between pipes.
pub fn needs_spawn(pipes: &[Pipe], config: &GameConfig) -> bool {
    match pipes.last() {
        None => true,
        Some(newest) => newest.x < config.screen_width as f64 - config.pipe_spacing,
    }
}

/// Scroll every pipe, drop the expired ones, then spawn if the spacing allows.
///
/// Pruning happens in a separate pass after the scroll so the list is never
/// appended to while it is being filtered.
pub fn advance_pipes<R: Rng>(pipes: &mut Vec<Pipe>, config: &GameConfig, rng: &mut R) {
    for pipe in pipes.iter_mut() {
        pipe.advance(config);
    }

    pipes.retain(|p| !p.is_expired());

    if needs_spawn(pipes, config) {
        pipes.push(Pipe::spawn(config.screen_width as f64, config, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_gap_within_margins() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let pipe = Pipe::spawn(1200.0, &config, &mut rng);
            assert!(pipe.gap_y >= 150);
            assert!(pipe.gap_y <= 800 - 200 - 150);
            assert!(!pipe.scored);
            assert_eq!(pipe.width, 70);
        }
    }

    #[test]
    fn test_spawn_covers_range_extremes() {
        // With a tight range both ends must be reachable.
        let config = GameConfig {
            screen_height: 502,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Pipe::spawn(0.0, &config, &mut rng).gap_y);
        }
        assert!(seen.contains(&150));
        assert!(seen.contains(&152));
    }

    #[test]
    fn test_expiry_tick() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut pipe = Pipe::spawn(1400.0, &config, &mut rng);

        for _ in 0..490 {
            pipe.advance(&config);
            assert!(!pipe.is_expired());
        }
        // x == -70: right edge exactly on the left screen edge
        assert!((pipe.x + 70.0).abs() < 1e-9);

        pipe.advance(&config);
        assert!(pipe.is_expired());

        pipe.advance(&config);
        assert!(pipe.x <= -70.0);
        assert!(pipe.is_expired());
    }

    #[test]
    fn test_needs_spawn_policy() {
        let config = GameConfig::default();
        assert!(needs_spawn(&[], &config));

        let pipe = |x| Pipe {
            x,
            gap_y: 300,
            width: 70,
            scored: false,
        };
        assert!(!needs_spawn(&[pipe(900.0)], &config));
        assert!(needs_spawn(&[pipe(899.0)], &config));
        // Only the newest pipe matters
        assert!(!needs_spawn(&[pipe(10.0), pipe(1000.0)], &config));
    }

    #[test]
    fn test_advance_pipes_keeps_constant_spacing() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut pipes = vec![Pipe::spawn(1400.0, &config, &mut rng)];

        for _ in 0..5000 {
            advance_pipes(&mut pipes, &config, &mut rng);
            assert!(pipes.iter().all(|p| !p.is_expired()));
        }

        // Consecutive pipes are spawned one spacing (plus at most one tick of travel) apart.
        for pair in pipes.windows(2) {
            let gap = pair[1].x - pair[0].x;
            assert!(gap >= config.pipe_spacing);
            assert!(gap <= config.pipe_spacing + config.pipe_speed);
        }
    }

    #[test]
    fn test_advance_pipes_spawns_at_right_edge_when_empty() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut pipes = Vec::new();
        advance_pipes(&mut pipes, &config, &mut rng);
        assert_eq!(pipes.len(), 1);
        assert!((pipes[0].x - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pipe_rects() {
        let config = GameConfig::default();
        let pipe = Pipe {
            x: 500.0,
            gap_y: 250,
            width: 70,
            scored: false,
        };
        assert_eq!(pipe.top_rect(), Rect::new(500.0, 0.0, 70.0, 250.0));
        assert_eq!(pipe.bottom_rect(&config), Rect::new(500.0, 450.0, 70.0, 800.0));
    }
}
