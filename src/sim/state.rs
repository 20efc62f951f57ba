//! Session state
//!
//! Everything one run mutates lives in [`GameSession`]. A new run gets a new
//! session; a finished one is never resumed.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Obstacle, Player};
use super::spawner::Spawner;
use super::stats::GameStats;
use crate::config::GameConfig;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entities reset, waiting for the loop to start
    Idle,
    /// Frames advance the simulation
    Running,
    /// Player hit an obstacle; terminal
    GameOver,
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Landed,
    ObstacleSpawned { id: u32 },
    ObstaclesPassed { count: usize },
    DifficultyIncreased { speed: f32, spawn_interval_ms: f64 },
    Collision { obstacle_id: u32 },
    GameOver { final_score: u64 },
}

/// Pixel size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One run of the game
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub viewport: Viewport,
    /// Floor the player and obstacles stand on
    pub ground_line: f32,
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub stats: GameStats,
    pub spawner: Spawner,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frames simulated while running
    pub frame: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameSession {
    /// Fresh session in `Idle`; `config` is expected to be validated
    pub fn new(config: GameConfig, viewport: Viewport, seed: u64) -> Self {
        let ground_line = viewport.height - config.ground_offset;
        Self {
            player: Player::new(&config),
            stats: GameStats::new(&config),
            config,
            viewport,
            ground_line,
            phase: GamePhase::Idle,
            obstacles: Vec::new(),
            spawner: Spawner::new(),
            seed,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// `Idle -> Running`; returns false from any other phase
    pub fn begin(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.phase = GamePhase::Running;
        log::info!("Session started (seed {})", self.seed);
        true
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u64 {
        self.stats.score()
    }

    /// Jump input; ignored unless running and grounded
    pub fn jump(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.player.jump()
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn end(&mut self) {
        self.phase = GamePhase::GameOver;
    }
}
