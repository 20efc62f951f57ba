//! Sprite manifest and loaded sprite set
//!
//! A sprite that fails to load stays `None` and the renderer paints a solid
//! rectangle in its place; a broken image never stops a session.

use crate::error::AssetError;

/// Which slot an image fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKey {
    Player,
    Background,
    Obstacle1,
    Obstacle2,
}

impl AssetKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKey::Player => "player",
            AssetKey::Background => "background",
            AssetKey::Obstacle1 => "obstacle_1",
            AssetKey::Obstacle2 => "obstacle_2",
        }
    }
}

/// Images preloaded before a session starts
pub const MANIFEST: &[(AssetKey, &str)] = &[
    (AssetKey::Player, "./assets/game/robot-runner.png"),
    (AssetKey::Background, "./assets/game/background.jpg"),
    (AssetKey::Obstacle1, "./assets/game/windows-icon-1.png"),
    (AssetKey::Obstacle2, "./assets/game/windows-icon-2.png"),
];

/// Loaded sprite handles, any of which may be missing
#[derive(Debug, Clone)]
pub struct Sprites<I> {
    pub player: Option<I>,
    pub background: Option<I>,
    /// Indexed by obstacle variant
    pub obstacles: [Option<I>; 2],
}

impl<I> Default for Sprites<I> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<I> Sprites<I> {
    /// No sprites at all; everything renders as colored rectangles
    pub fn empty() -> Self {
        Self {
            player: None,
            background: None,
            obstacles: [None, None],
        }
    }

    pub fn obstacle(&self, variant: u8) -> Option<&I> {
        self.obstacles.get(variant as usize).and_then(Option::as_ref)
    }

    pub fn set(&mut self, key: AssetKey, image: I) {
        match key {
            AssetKey::Player => self.player = Some(image),
            AssetKey::Background => self.background = Some(image),
            AssetKey::Obstacle1 => self.obstacles[0] = Some(image),
            AssetKey::Obstacle2 => self.obstacles[1] = Some(image),
        }
    }

    /// Number of slots holding an image
    pub fn loaded_count(&self) -> usize {
        [&self.player, &self.background, &self.obstacles[0], &self.obstacles[1]]
            .iter()
            .filter(|s| s.is_some())
            .count()
    }

    /// Fold per-image load results into a sprite set
    ///
    /// Failures are logged and returned; their slots stay empty.
    pub fn from_results(
        results: impl IntoIterator<Item = (AssetKey, Result<I, AssetError>)>,
    ) -> (Self, Vec<AssetError>) {
        let mut sprites = Self::empty();
        let mut failures = Vec::new();
        for (key, result) in results {
            match result {
                Ok(image) => {
                    log::info!("[Assets] Loaded {}", key.as_str());
                    sprites.set(key, image);
                }
                Err(err) => {
                    log::warn!("[Assets] {} - falling back to a solid color", err);
                    failures.push(err);
                }
            }
        }
        (sprites, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_covers_every_slot() {
        let mut sprites = Sprites::empty();
        for (key, path) in MANIFEST {
            sprites.set(*key, *path);
        }
        assert_eq!(sprites.loaded_count(), 4);
    }

    #[test]
    fn test_failures_leave_slots_empty() {
        let results = vec![
            (AssetKey::Player, Ok(1u32)),
            (
                AssetKey::Background,
                Err(AssetError {
                    key: "background",
                    path: "./assets/game/background.jpg",
                }),
            ),
            (AssetKey::Obstacle2, Ok(4u32)),
        ];
        let (sprites, failures) = Sprites::from_results(results);
        assert_eq!(sprites.player, Some(1));
        assert!(sprites.background.is_none());
        assert_eq!(sprites.obstacle(0), None);
        assert_eq!(sprites.obstacle(1), Some(&4));
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].key, "background");
    }

    #[test]
    fn test_unknown_variant_has_no_sprite() {
        let mut sprites = Sprites::empty();
        sprites.set(AssetKey::Obstacle1, ());
        assert!(sprites.obstacle(0).is_some());
        assert!(sprites.obstacle(9).is_none());
    }
}
