//! Per-frame simulation step
//!
//! One call per rendered frame: update, spawn, collide, score, in that order.

use super::collision::first_collision;
use super::physics::{advance_obstacles, update_player};
use super::spawner::spawn_obstacle;
use super::state::{GameEvent, GameSession};
use crate::config::ScoreRule;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump (space / arrow up)
    pub jump: bool,
}

/// Advance the session by one frame
///
/// `dt_ms` is the wall time since the previous frame; it only drives the
/// spawn and score timers. Does nothing unless the session is running.
pub fn tick(session: &mut GameSession, input: &TickInput, dt_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !session.is_running() {
        return events;
    }

    if input.jump {
        session.jump();
    }

    let dt_ms = dt_ms.clamp(0.0, session.config.max_frame_delta_ms);
    session.frame += 1;

    // Update
    if update_player(&mut session.player, session.ground_line) {
        events.push(GameEvent::Landed);
    }
    let passed = advance_obstacles(&mut session.obstacles, session.stats.speed());
    if passed > 0 {
        events.push(GameEvent::ObstaclesPassed { count: passed });
    }

    // Spawn
    if session
        .spawner
        .advance(dt_ms, session.stats.spawn_interval_ms())
    {
        let id = session.next_entity_id();
        let obstacle = spawn_obstacle(
            id,
            &mut session.rng,
            &session.config,
            session.viewport.width,
            session.ground_line,
        );
        log::debug!("Obstacle {} spawned (h = {:.1})", id, obstacle.size.y);
        session.obstacles.push(obstacle);
        events.push(GameEvent::ObstacleSpawned { id });
    }

    // Collide
    if let Some(obstacle) = first_collision(&session.player, &session.obstacles) {
        let obstacle_id = obstacle.id;
        session.end();
        let final_score = session.score();
        log::info!("Collision with obstacle {}, game over (score {})", obstacle_id, final_score);
        events.push(GameEvent::Collision { obstacle_id });
        events.push(GameEvent::GameOver { final_score });
        return events;
    }

    // Score
    let steps = match session.config.score_rule {
        ScoreRule::PerSecond => session.stats.advance_time(dt_ms, &session.config),
        ScoreRule::PerObstaclePassed => {
            let mut steps = 0;
            for _ in 0..passed {
                steps += session.stats.increment_score(&session.config);
            }
            steps
        }
    };
    if steps > 0 {
        events.push(GameEvent::DifficultyIncreased {
            speed: session.stats.speed(),
            spawn_interval_ms: session.stats.spawn_interval_ms(),
        });
    }

    events
}
