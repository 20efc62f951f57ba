//! Player/obstacle overlap tests
//!
//! Boxes that merely touch (shared edge) do not collide.

use super::entity::{Aabb, Obstacle, Player};

/// Strict AABB overlap
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Does the player overlap this obstacle?
pub fn check_collision(player: &Player, obstacle: &Obstacle) -> bool {
    aabb_overlap(&player.bounds(), &obstacle.bounds())
}

/// First obstacle (oldest first) the player overlaps
pub fn first_collision<'a>(player: &Player, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| check_collision(player, o))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player_at(x: f32, y: f32, w: f32, h: f32) -> Player {
        let mut player = Player::new(&Default::default());
        player.pos = Vec2::new(x, y);
        player.size = Vec2::new(w, h);
        player
    }

    fn obstacle_at(x: f32, y: f32, w: f32, h: f32) -> Obstacle {
        Obstacle {
            id: 1,
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
            variant: 0,
        }
    }

    #[test]
    fn test_overlapping_boxes_collide() {
        let player = player_at(0.0, 0.0, 30.0, 30.0);
        assert!(check_collision(&player, &obstacle_at(10.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_disjoint_boxes_miss() {
        let player = player_at(0.0, 0.0, 30.0, 30.0);
        assert!(!check_collision(&player, &obstacle_at(100.0, 0.0, 20.0, 20.0)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let player = player_at(50.0, 340.0, 30.0, 30.0);
        // player right edge == obstacle left edge
        assert!(!check_collision(&player, &obstacle_at(80.0, 340.0, 20.0, 30.0)));
        // one unit of overlap
        assert!(check_collision(&player, &obstacle_at(79.0, 340.0, 20.0, 30.0)));
        // player bottom == obstacle top
        assert!(!check_collision(&player, &obstacle_at(60.0, 370.0, 20.0, 30.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Aabb::new(0.0, 0.0, 30.0, 30.0);
        let b = Aabb::new(10.0, 10.0, 20.0, 20.0);
        let c = Aabb::new(100.0, 0.0, 20.0, 20.0);
        assert_eq!(aabb_overlap(&a, &b), aabb_overlap(&b, &a));
        assert_eq!(aabb_overlap(&a, &c), aabb_overlap(&c, &a));
    }

    #[test]
    fn test_first_collision_picks_oldest() {
        let player = player_at(0.0, 0.0, 30.0, 30.0);
        let mut first = obstacle_at(5.0, 5.0, 10.0, 10.0);
        first.id = 7;
        let mut second = obstacle_at(15.0, 15.0, 10.0, 10.0);
        second.id = 8;
        let obstacles = vec![obstacle_at(200.0, 0.0, 10.0, 10.0), first, second];
        assert_eq!(first_collision(&player, &obstacles).map(|o| o.id), Some(7));
        assert!(first_collision(&player, &obstacles[..1]).is_none());
    }
}
