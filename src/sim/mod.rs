//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame-locked physics, elapsed time only drives the timers
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod stats;
pub mod tick;

pub use collision::{aabb_overlap, check_collision, first_collision};
pub use entity::{Aabb, Obstacle, Player};
pub use physics::{advance_obstacles, update_player};
pub use spawner::{Spawner, spawn_obstacle};
pub use state::{GameEvent, GamePhase, GameSession, Viewport};
pub use stats::{GameStats, StatsSnapshot};
pub use tick::{TickInput, tick};
