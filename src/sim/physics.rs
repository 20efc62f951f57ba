//! Per-frame integration
//!
//! Motion is tied 1:1 to rendered frames: velocities are px/frame and there
//! is no delta-time scaling.

use super::entity::{Obstacle, Player};

/// Apply gravity, move the player, clamp onto the ground line
///
/// Returns true on the frame the player lands.
pub fn update_player(player: &mut Player, ground_line: f32) -> bool {
    player.dy += player.gravity;
    player.pos.y += player.dy;

    // Clamp after integrating so no fall speed can tunnel below ground
    if player.pos.y + player.size.y >= ground_line {
        let landed = player.airborne;
        player.pos.y = ground_line - player.size.y;
        player.dy = 0.0;
        player.airborne = false;
        return landed;
    }
    false
}

/// Scroll every obstacle left by `speed` and drop the ones that left the screen
///
/// Order of the survivors is preserved. Returns how many were pruned.
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32) -> usize {
    for obstacle in obstacles.iter_mut() {
        obstacle.pos.x -= speed;
    }
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_offscreen());
    before - obstacles.len()
}
