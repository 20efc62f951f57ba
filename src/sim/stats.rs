//! Score and difficulty ratchet
//!
//! Score only grows. Each threshold multiple it crosses raises the scroll
//! speed and shortens the spawn interval (down to a floor); nothing ever
//! lowers the difficulty within a session.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// HUD-facing view of the tracker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub score: u64,
    pub speed: f32,
    pub spawn_interval_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameStats {
    score: u64,
    speed: f32,
    spawn_interval_ms: f64,
    /// Run time not yet converted into score (`PerSecond` rule)
    score_elapsed_ms: f64,
    /// Number of ratchet steps taken
    level: u32,
}

impl GameStats {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            speed: config.base_speed,
            spawn_interval_ms: config.base_spawn_interval_ms,
            score_elapsed_ms: 0.0,
            level: 0,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Current scroll speed (px/frame)
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn spawn_interval_ms(&self) -> f64 {
        self.spawn_interval_ms
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            score: self.score,
            speed: self.speed,
            spawn_interval_ms: self.spawn_interval_ms,
        }
    }

    /// Add one score increment; returns how many ratchet steps it caused
    pub fn increment_score(&mut self, config: &GameConfig) -> u32 {
        let before = self.score / config.difficulty_threshold;
        self.score += config.score_increment;
        let after = self.score / config.difficulty_threshold;

        let steps = (after - before) as u32;
        for _ in 0..steps {
            self.increase_difficulty(config);
        }
        steps
    }

    /// Convert elapsed run time into score increments
    ///
    /// Returns the number of ratchet steps taken.
    pub fn advance_time(&mut self, dt_ms: f64, config: &GameConfig) -> u32 {
        self.score_elapsed_ms += dt_ms;
        let mut steps = 0;
        while self.score_elapsed_ms >= config.score_interval_ms {
            self.score_elapsed_ms -= config.score_interval_ms;
            steps += self.increment_score(config);
        }
        steps
    }

    fn increase_difficulty(&mut self, config: &GameConfig) {
        self.level += 1;
        self.speed += config.speed_step;
        self.spawn_interval_ms =
            (self.spawn_interval_ms - config.spawn_interval_step_ms).max(config.min_spawn_interval_ms);
        log::info!(
            "Difficulty up (level {}): speed = {}, spawn = {}ms",
            self.level,
            self.speed,
            self.spawn_interval_ms
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_base() {
        let stats = GameStats::new(&GameConfig::default());
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.speed(), 5.0);
        assert_eq!(stats.spawn_interval_ms(), 1200.0);
    }

    #[test]
    fn test_first_threshold_ratchets_once() {
        let config = GameConfig::default();
        let mut stats = GameStats::new(&config);
        for _ in 0..9 {
            assert_eq!(stats.increment_score(&config), 0);
        }
        assert_eq!(stats.speed(), 5.0);
        assert_eq!(stats.increment_score(&config), 1);
        assert_eq!(stats.score(), 100);
        assert_eq!(stats.speed(), 6.0);
        assert_eq!(stats.spawn_interval_ms(), 1150.0);
    }

    #[test]
    fn test_spawn_interval_floors() {
        let config = GameConfig {
            min_spawn_interval_ms: 1000.0,
            ..Default::default()
        };
        let mut stats = GameStats::new(&config);
        while stats.score() < 400 {
            stats.increment_score(&config);
        }
        assert_eq!(stats.spawn_interval_ms(), 1000.0);
        assert_eq!(stats.speed(), 9.0);

        while stats.score() < 1000 {
            stats.increment_score(&config);
        }
        assert_eq!(stats.spawn_interval_ms(), 1000.0);
        assert_eq!(stats.speed(), 15.0);
    }

    #[test]
    fn test_default_floor_reached_after_sixteen_steps() {
        let config = GameConfig::default();
        let mut stats = GameStats::new(&config);
        while stats.score() < 2000 {
            stats.increment_score(&config);
        }
        assert_eq!(stats.level(), 20);
        assert_eq!(stats.spawn_interval_ms(), 400.0);
    }

    #[test]
    fn test_large_increment_crosses_several_thresholds() {
        let config = GameConfig {
            score_increment: 250,
            ..Default::default()
        };
        let mut stats = GameStats::new(&config);
        assert_eq!(stats.increment_score(&config), 2);
        assert_eq!(stats.increment_score(&config), 3);
        assert_eq!(stats.speed(), 10.0);
    }

    #[test]
    fn test_time_converts_to_score() {
        let config = GameConfig::default();
        let mut stats = GameStats::new(&config);
        stats.advance_time(999.0, &config);
        assert_eq!(stats.score(), 0);
        stats.advance_time(1.0, &config);
        assert_eq!(stats.score(), 10);
        assert_eq!(stats.advance_time(9000.0, &config), 1);
        assert_eq!(stats.score(), 100);
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = GameStats::new(&GameConfig::default());
        let json = serde_json::to_string(&stats.snapshot()).unwrap();
        assert_eq!(json, r#"{"score":0,"speed":5.0,"spawn_interval_ms":1200.0}"#);
    }
}
