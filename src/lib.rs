//! Cyber Hackrunner - the hidden endless runner behind the portfolio site
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions, score)
//! - `driver`: Frame loop lifecycle (start/stop, per-frame ordering, game over)
//! - `render`: Drawing-surface contract and the frame painters
//! - `platform`: Browser glue and the headless host used natively
//! - `config`: Data-driven game balance

pub mod assets;
pub mod config;
pub mod driver;
pub mod error;
pub mod input;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{GameConfig, ScoreRule};
pub use driver::{FrameHandle, FrameScheduler, GameLoop};
pub use error::{AssetError, ConfigError, InitError, LoopError, RenderError};
pub use sim::{GamePhase, GameSession, Viewport};

/// Canonical tuning constants (the defaults behind [`GameConfig`])
pub mod consts {
    /// Nominal display refresh, used for the very first frame delta
    pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;
    /// Largest frame delta fed to the timers (backgrounded tabs)
    pub const MAX_FRAME_DELTA_MS: f64 = 250.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 0.0;
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Downward acceleration (px/frame²)
    pub const GRAVITY: f32 = 0.6;
    /// Upward velocity applied by a jump (px/frame)
    pub const JUMP_IMPULSE: f32 = -10.0;

    /// Distance between the ground line and the bottom of the surface
    pub const GROUND_OFFSET: f32 = 30.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 20.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 50.0;
    /// Number of obstacle sprite variants
    pub const OBSTACLE_VARIANTS: u8 = 2;

    /// Difficulty ratchet
    pub const BASE_SPEED: f32 = 5.0;
    pub const SPEED_STEP: f32 = 1.0;
    pub const BASE_SPAWN_INTERVAL_MS: f64 = 1200.0;
    pub const SPAWN_INTERVAL_STEP_MS: f64 = 50.0;
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 400.0;

    /// Scoring
    pub const SCORE_INCREMENT: u64 = 10;
    pub const DIFFICULTY_THRESHOLD: u64 = 100;
    pub const SCORE_INTERVAL_MS: f64 = 1000.0;
}
