//! Player and obstacle records

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Axis-aligned bounding box (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes after construction
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (px/frame, negative is up)
    pub dy: f32,
    /// Downward acceleration (px/frame²)
    pub gravity: f32,
    /// Velocity applied by a jump
    pub jump_impulse: f32,
    /// True from a jump until the ground clamp catches the player
    pub airborne: bool,
}

impl Player {
    /// Player at its default start position, constants taken from a validated config
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_x, config.player_start_y),
            size: Vec2::new(config.player_width, config.player_height),
            dy: 0.0,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            airborne: false,
        }
    }

    /// Start a jump unless already in the air
    ///
    /// Returns whether the jump took effect. No double jump, no queuing.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.dy = self.jump_impulse;
        self.airborne = true;
        true
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A block scrolling toward the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner; only x changes after spawn
    pub pos: Vec2,
    pub size: Vec2,
    /// Sprite variant picked at spawn
    pub variant: u8,
}

impl Obstacle {
    /// Obstacle whose base rests on `ground_line`, left edge at `x`
    pub fn resting_on(id: u32, x: f32, ground_line: f32, width: f32, height: f32, variant: u8) -> Self {
        Self {
            id,
            pos: Vec2::new(x, ground_line - height),
            size: Vec2::new(width, height),
            variant,
        }
    }

    /// Fully past the left edge of the visible area
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_defaults_from_config() {
        let player = Player::new(&GameConfig::default());
        assert_eq!(player.pos, Vec2::new(50.0, 0.0));
        assert_eq!(player.size, Vec2::new(30.0, 30.0));
        assert_eq!(player.dy, 0.0);
        assert!(!player.airborne);
    }

    #[test]
    fn test_no_double_jump() {
        let mut player = Player::new(&GameConfig::default());
        assert!(player.jump());
        assert_eq!(player.dy, player.jump_impulse);
        assert!(player.airborne);

        player.dy = -3.0;
        assert!(!player.jump());
        assert_eq!(player.dy, -3.0);
    }

    #[test]
    fn test_obstacle_base_on_ground() {
        let obstacle = Obstacle::resting_on(1, 800.0, 370.0, 20.0, 35.0, 0);
        assert_eq!(obstacle.bounds().bottom(), 370.0);
        assert_eq!(obstacle.pos.x, 800.0);
    }

    #[test]
    fn test_offscreen_uses_right_edge() {
        let mut obstacle = Obstacle::resting_on(1, -20.0, 370.0, 20.0, 35.0, 0);
        // Right edge exactly at 0 is still visible
        assert!(!obstacle.is_offscreen());
        obstacle.pos.x = -20.5;
        assert!(obstacle.is_offscreen());
    }
}
