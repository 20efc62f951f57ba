//! Drawing-surface contract and frame painters
//!
//! The core never creates or resizes a surface; it only paints onto one.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::assets::Sprites;
use crate::error::RenderError;
use crate::sim::GameSession;

/// Palette used when a sprite is missing
pub mod palette {
    pub const BACKGROUND: &str = "#2980b9";
    pub const GROUND: &str = "#1c3d5a";
    pub const PLAYER: &str = "#2ecc71";
    pub const OBSTACLE: &str = "#e74c3c";
    pub const TEXT: &str = "#fff";
    pub const OVERLAY: &str = "rgba(0, 0, 0, 0.6)";
}

pub const SCORE_FONT: &str = "20px monospace";
pub const TITLE_FONT: &str = "bold 36px Arial";
pub const FINAL_SCORE_FONT: &str = "24px monospace";

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// A 2D drawing surface of fixed pixel size
pub trait Surface {
    /// Host image handle (sprites)
    type Image;

    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_fill_style(&mut self, style: &str);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), RenderError>;
    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<(), RenderError>;
}

/// Sprite if loaded, otherwise a solid rectangle
fn draw_sprite_or_rect<S: Surface>(
    surface: &mut S,
    sprite: Option<&S::Image>,
    color: &str,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
) -> Result<(), RenderError> {
    match sprite {
        Some(image) => surface.draw_image(image, x, y, w, h),
        None => {
            surface.set_fill_style(color);
            surface.fill_rect(x, y, w, h);
            Ok(())
        }
    }
}

/// Paint one frame: background, ground, player, obstacles, score
pub fn render_frame<S: Surface>(
    surface: &mut S,
    session: &GameSession,
    sprites: &Sprites<S::Image>,
) -> Result<(), RenderError> {
    let (w, h) = (surface.width(), surface.height());
    surface.clear_rect(0.0, 0.0, w, h);

    draw_sprite_or_rect(
        surface,
        sprites.background.as_ref(),
        palette::BACKGROUND,
        0.0,
        0.0,
        w,
        h,
    )?;

    let ground = session.ground_line as f64;
    surface.set_fill_style(palette::GROUND);
    surface.fill_rect(0.0, ground, w, (h - ground).max(0.0));

    let player = &session.player;
    draw_sprite_or_rect(
        surface,
        sprites.player.as_ref(),
        palette::PLAYER,
        player.pos.x as f64,
        player.pos.y as f64,
        player.size.x as f64,
        player.size.y as f64,
    )?;

    for obstacle in &session.obstacles {
        draw_sprite_or_rect(
            surface,
            sprites.obstacle(obstacle.variant),
            palette::OBSTACLE,
            obstacle.pos.x as f64,
            obstacle.pos.y as f64,
            obstacle.size.x as f64,
            obstacle.size.y as f64,
        )?;
    }

    surface.set_fill_style(palette::TEXT);
    surface.set_font(SCORE_FONT);
    surface.set_text_align(TextAlign::Left);
    surface.fill_text(&format!("Score: {}", session.score()), 20.0, 40.0)
}

/// Dim the last frame and show the final score
pub fn render_game_over<S: Surface>(surface: &mut S, final_score: u64) -> Result<(), RenderError> {
    let (w, h) = (surface.width(), surface.height());
    surface.set_fill_style(palette::OVERLAY);
    surface.fill_rect(0.0, 0.0, w, h);

    surface.set_fill_style(palette::TEXT);
    surface.set_text_align(TextAlign::Center);
    surface.set_font(TITLE_FONT);
    surface.fill_text("GAME OVER", w / 2.0, h / 2.0 - 20.0)?;

    surface.set_font(FINAL_SCORE_FONT);
    surface.fill_text(&format!("Score : {}", final_score), w / 2.0, h / 2.0 + 30.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::platform::headless::{DrawCommand, RecordingSurface};
    use crate::sim::{Obstacle, Viewport};

    fn session() -> GameSession {
        let mut session = GameSession::new(GameConfig::default(), Viewport::new(800.0, 400.0), 3);
        session.begin();
        let ground = session.ground_line;
        session.obstacles.push(Obstacle::resting_on(1, 400.0, ground, 20.0, 30.0, 0));
        session.obstacles.push(Obstacle::resting_on(2, 600.0, ground, 20.0, 40.0, 1));
        session
    }

    #[test]
    fn test_missing_sprites_fall_back_to_rects() {
        let mut surface = RecordingSurface::<&str>::new(800.0, 400.0);
        render_frame(&mut surface, &session(), &Sprites::empty()).unwrap();

        let cmds = surface.commands();
        assert_eq!(cmds[0], DrawCommand::ClearRect(0.0, 0.0, 800.0, 400.0));
        assert!(cmds.contains(&DrawCommand::FillStyle(palette::PLAYER.to_string())));
        assert!(cmds.contains(&DrawCommand::FillRect(50.0, 0.0, 30.0, 30.0)));
        assert!(cmds.contains(&DrawCommand::FillRect(400.0, 340.0, 20.0, 30.0)));
        assert!(!cmds.iter().any(|c| matches!(c, DrawCommand::Image { .. })));
        assert_eq!(
            cmds.last(),
            Some(&DrawCommand::Text("Score: 0".to_string(), 20.0, 40.0))
        );
    }

    #[test]
    fn test_loaded_sprites_are_drawn() {
        let sprites = Sprites {
            player: Some("robot"),
            background: None,
            obstacles: [Some("icon-1"), None],
        };
        let mut surface = RecordingSurface::new(800.0, 400.0);
        render_frame(&mut surface, &session(), &sprites).unwrap();

        let images: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { image, .. } => Some(*image),
                _ => None,
            })
            .collect();
        assert_eq!(images, vec!["robot", "icon-1"]);
        // Variant 1 has no sprite and stays a red block
        assert!(surface.commands().contains(&DrawCommand::FillRect(600.0, 330.0, 20.0, 40.0)));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut surface = RecordingSurface::<&str>::new(800.0, 400.0);
        render_game_over(&mut surface, 120).unwrap();
        let cmds = surface.commands();
        assert_eq!(cmds[0], DrawCommand::FillStyle(palette::OVERLAY.to_string()));
        assert_eq!(cmds[1], DrawCommand::FillRect(0.0, 0.0, 800.0, 400.0));
        assert!(cmds.contains(&DrawCommand::Text("GAME OVER".to_string(), 400.0, 180.0)));
        assert!(cmds.contains(&DrawCommand::Text("Score : 120".to_string(), 400.0, 230.0)));
    }

    #[test]
    fn test_failed_text_propagates() {
        let mut surface = RecordingSurface::<&str>::new(800.0, 400.0);
        surface.fail_text(true);
        assert!(render_frame(&mut surface, &session(), &Sprites::empty()).is_err());
    }
}
