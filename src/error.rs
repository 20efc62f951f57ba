//! Error taxonomy
//!
//! Initialization failures are fatal before a session starts, asset failures
//! degrade to colored rectangles, and nothing escapes a running tick without
//! the loop being stopped first.

use thiserror::Error;

/// A tuning document could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid game config: `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Session could not be started
#[derive(Debug, Error)]
pub enum InitError {
    #[error("no browser window available")]
    NoWindow,
    #[error("no document attached to the window")]
    NoDocument,
    #[error("game container `#{0}` not found")]
    MissingContainer(&'static str),
    #[error("game canvas `#{0}` not found")]
    MissingCanvas(&'static str),
    #[error("2D drawing context unavailable")]
    MissingContext,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Loop(#[from] LoopError),
}

/// An image from the asset manifest failed to load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load asset `{key}` from {path}")]
pub struct AssetError {
    pub key: &'static str,
    pub path: &'static str,
}

/// A drawing call was rejected by the host surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

/// Frame loop failure
#[derive(Debug, Error)]
pub enum LoopError {
    #[error("failed to schedule frame: {0}")]
    Schedule(String),
    #[error(transparent)]
    Render(#[from] RenderError),
}
