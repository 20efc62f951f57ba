//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (requestAnimationFrame vs. manual pumping)
//! - Drawing surfaces (2D canvas vs. recorded commands)
//! - DOM lookup and image preloading (browser only)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;
