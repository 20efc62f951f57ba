//! Game tuning configuration
//!
//! One canonical constant set lives in [`crate::consts`]; a JSON document can
//! override any subset of it. Values are validated once, when the config is
//! built, so the simulation never re-checks them.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// What earns points during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    /// Fixed increment for every `score_interval_ms` of run time
    #[default]
    PerSecond,
    /// Fixed increment for every obstacle that scrolls off the left edge
    PerObstaclePassed,
}

impl ScoreRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreRule::PerSecond => "per_second",
            ScoreRule::PerObstaclePassed => "per_obstacle_passed",
        }
    }
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Player ===
    /// Fixed horizontal offset of the player
    pub player_x: f32,
    /// Vertical position at session start
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Downward acceleration (px/frame², must be positive)
    pub gravity: f32,
    /// Velocity set by a jump (px/frame, must be negative)
    pub jump_impulse: f32,

    // === World ===
    /// Ground line sits this far above the bottom of the surface
    pub ground_offset: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    /// Inclusive lower bound of the random height band
    pub obstacle_min_height: f32,
    /// Exclusive upper bound of the random height band
    pub obstacle_max_height: f32,

    // === Difficulty ===
    /// Scroll speed at session start (px/frame)
    pub base_speed: f32,
    pub speed_step: f32,
    pub base_spawn_interval_ms: f64,
    pub spawn_interval_step_ms: f64,
    /// Floor for the spawn interval
    pub min_spawn_interval_ms: f64,

    // === Scoring ===
    pub score_rule: ScoreRule,
    pub score_increment: u64,
    /// Every multiple of this crossed ratchets the difficulty
    pub difficulty_threshold: u64,
    /// Run time per score increment (`PerSecond` rule only)
    pub score_interval_ms: f64,

    // === Timing ===
    /// Clamp for a single frame delta
    pub max_frame_delta_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: PLAYER_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            ground_offset: GROUND_OFFSET,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,

            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            base_spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,

            score_rule: ScoreRule::PerSecond,
            score_increment: SCORE_INCREMENT,
            difficulty_threshold: DIFFICULTY_THRESHOLD,
            score_interval_ms: SCORE_INTERVAL_MS,

            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if !(self.gravity > 0.0) {
            return invalid("gravity", "must be positive (downward)");
        }
        if !(self.jump_impulse < 0.0) {
            return invalid("jump_impulse", "must be negative (upward)");
        }
        if !(self.player_width > 0.0) {
            return invalid("player_width", "must be positive");
        }
        if !(self.player_height > 0.0) {
            return invalid("player_height", "must be positive");
        }
        if !(self.ground_offset >= 0.0) {
            return invalid("ground_offset", "must not be negative");
        }
        if !(self.obstacle_width > 0.0) {
            return invalid("obstacle_width", "must be positive");
        }
        if !(self.obstacle_min_height > 0.0) {
            return invalid("obstacle_min_height", "must be positive");
        }
        if !(self.obstacle_max_height > self.obstacle_min_height) {
            return invalid("obstacle_max_height", "must exceed obstacle_min_height");
        }
        if !(self.base_speed > 0.0) {
            return invalid("base_speed", "must be positive");
        }
        if !(self.speed_step >= 0.0) {
            return invalid("speed_step", "must not be negative");
        }
        if !(self.min_spawn_interval_ms > 0.0) {
            return invalid("min_spawn_interval_ms", "must be positive");
        }
        if !(self.base_spawn_interval_ms >= self.min_spawn_interval_ms) {
            return invalid("base_spawn_interval_ms", "must not be below min_spawn_interval_ms");
        }
        if !(self.spawn_interval_step_ms >= 0.0) {
            return invalid("spawn_interval_step_ms", "must not be negative");
        }
        if self.score_increment == 0 {
            return invalid("score_increment", "must be positive");
        }
        if self.difficulty_threshold == 0 {
            return invalid("difficulty_threshold", "must be positive");
        }
        if !(self.score_interval_ms > 0.0) {
            return invalid("score_interval_ms", "must be positive");
        }
        if !(self.max_frame_delta_ms > 0.0) {
            return invalid("max_frame_delta_ms", "must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config = GameConfig::from_json(r#"{ "gravity": 0.8, "score_rule": "per_obstacle_passed" }"#)
            .unwrap();
        assert_eq!(config.gravity, 0.8);
        assert_eq!(config.score_rule, ScoreRule::PerObstaclePassed);
        assert_eq!(config.jump_impulse, JUMP_IMPULSE);
        assert_eq!(config.base_spawn_interval_ms, BASE_SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = GameConfig::from_json(r#"{ "gravity": -0.6 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "gravity", .. }));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let err = GameConfig::from_json(r#"{ "jump_impulse": 4.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "jump_impulse", .. }));
    }

    #[test]
    fn test_rejects_inverted_height_band() {
        let config = GameConfig {
            obstacle_min_height: 50.0,
            obstacle_max_height: 20.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_spawn_floor_above_base() {
        let config = GameConfig {
            min_spawn_interval_ms: 2000.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "base_spawn_interval_ms", .. })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_score_rule_round_trips_names() {
        assert_eq!(ScoreRule::PerSecond.as_str(), "per_second");
        let rule: ScoreRule = serde_json::from_str("\"per_obstacle_passed\"").unwrap();
        assert_eq!(rule, ScoreRule::PerObstaclePassed);
    }
}
