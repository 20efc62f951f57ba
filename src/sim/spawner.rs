//! Obstacle spawning
//!
//! Spawn cadence is accumulated from frame deltas inside the render tick, so
//! there is no second timer to cancel when a session ends.

use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::Obstacle;
use crate::config::GameConfig;
use crate::consts::OBSTACLE_VARIANTS;

/// Elapsed-time accumulator that emits one obstacle per spawn interval
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    elapsed_ms: f64,
}

impl Spawner {
    pub fn new() -> Self {
        Self { elapsed_ms: 0.0 }
    }

    /// Time accumulated toward the next spawn
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Feed one frame's elapsed time; true when an obstacle is due
    ///
    /// At most one spawn per frame. A long frame cannot bank more than one
    /// interval of credit.
    pub fn advance(&mut self, dt_ms: f64, interval_ms: f64) -> bool {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= interval_ms {
            self.elapsed_ms = (self.elapsed_ms - interval_ms).min(interval_ms);
            return true;
        }
        false
    }
}

/// Build an obstacle just off the right edge, base on the ground line
pub fn spawn_obstacle(
    id: u32,
    rng: &mut Pcg32,
    config: &GameConfig,
    visible_width: f32,
    ground_line: f32,
) -> Obstacle {
    let height = rng.random_range(config.obstacle_min_height..config.obstacle_max_height);
    let variant = rng.random_range(0..OBSTACLE_VARIANTS);
    Obstacle::resting_on(id, visible_width, ground_line, config.obstacle_width, height, variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawns_on_interval() {
        let mut spawner = Spawner::new();
        let frame = 1000.0 / 60.0;
        let mut spawns = 0;
        // just under 6 seconds of frames at a 1200 ms interval
        for _ in 0..350 {
            if spawner.advance(frame, 1200.0) {
                spawns += 1;
            }
        }
        assert_eq!(spawns, 4);
    }

    #[test]
    fn test_long_frame_spawns_once() {
        let mut spawner = Spawner::new();
        assert!(spawner.advance(5000.0, 1200.0));
        assert!(spawner.elapsed_ms() <= 1200.0);
        // Banked credit yields at most one more spawn immediately
        assert!(spawner.advance(0.0, 1200.0));
        assert!(!spawner.advance(0.0, 1200.0));
    }

    #[test]
    fn test_spawned_obstacle_shape() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..200 {
            let obstacle = spawn_obstacle(id, &mut rng, &config, 800.0, 370.0);
            assert_eq!(obstacle.pos.x, 800.0);
            assert_eq!(obstacle.size.x, 20.0);
            assert!(obstacle.size.y >= 20.0 && obstacle.size.y < 50.0);
            assert!((obstacle.bounds().bottom() - 370.0).abs() < 1e-4);
            assert!(obstacle.variant < OBSTACLE_VARIANTS);
        }
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let config = GameConfig::default();
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for id in 0..10 {
            assert_eq!(
                spawn_obstacle(id, &mut a, &config, 640.0, 450.0),
                spawn_obstacle(id, &mut b, &config, 640.0, 450.0)
            );
        }
    }
}
