//! Browser host
//!
//! requestAnimationFrame scheduling, DOM lookup and sizing, image preloading.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlImageElement, Window,
};

use crate::assets::{AssetKey, MANIFEST, Sprites};
use crate::config::GameConfig;
use crate::driver::{FrameHandle, FrameOutcome, FrameScheduler, GameLoop};
use crate::error::{AssetError, InitError, LoopError};
use crate::input::InputAction;
use crate::render::{CanvasSurface, Surface};
use crate::sim::{GameSession, Viewport};

pub const CONTAINER_ID: &str = "game-container";
pub const CANVAS_ID: &str = "gameCanvas";
pub const SCORE_ID: &str = "game-score";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Schedules the installed frame callback with requestAnimationFrame
pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Slot the frame closure is installed into once the game exists
    pub fn callback_slot(&self) -> FrameCallback {
        self.callback.clone()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, LoopError> {
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| LoopError::Schedule("frame callback not installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| LoopError::Schedule(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Everything the running page needs between callbacks
pub struct WebGame {
    pub game_loop: GameLoop<RafScheduler>,
    surface: CanvasSurface,
    sprites: Sprites<HtmlImageElement>,
    config: GameConfig,
    score_el: Option<Element>,
}

impl WebGame {
    fn viewport(&self) -> Viewport {
        surface_viewport(&self.surface)
    }

    fn on_frame(&mut self, timestamp: f64) {
        match self
            .game_loop
            .frame(timestamp, &mut self.surface, &self.sprites)
        {
            Ok(FrameOutcome::Stopped) => {}
            Ok(_) => self.update_hud(),
            Err(e) => {
                log::error!("[Loop] Frame failed: {}", e);
                self.update_hud();
            }
        }
    }

    /// Mirror the score into the optional HUD element
    fn update_hud(&self) {
        if let Some(el) = &self.score_el {
            let stats = self.game_loop.session().stats.snapshot();
            el.set_text_content(Some(&stats.score.to_string()));
        }
    }

    /// Apply a key action between frames
    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Jump => {
                self.game_loop.request_jump();
            }
            InputAction::Restart => {
                if !self.game_loop.session().is_over() {
                    return;
                }
                let session = GameSession::new(self.config.clone(), self.viewport(), new_seed());
                match self.game_loop.restart(session) {
                    Ok(_) => log::info!("[Game] Restarted"),
                    Err(e) => log::error!("[Game] Restart failed: {}", e),
                }
            }
        }
    }
}

fn surface_viewport(surface: &CanvasSurface) -> Viewport {
    Viewport::new(surface.width() as f32, surface.height() as f32)
}

fn new_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Create the image element and start its download
fn begin_load(key: AssetKey, path: &'static str) -> Result<(HtmlImageElement, JsFuture), AssetError> {
    let image = HtmlImageElement::new().map_err(|_| AssetError {
        key: key.as_str(),
        path,
    })?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(path);
    Ok((image, JsFuture::from(promise)))
}

/// Wait for a started download; resolves on `load`, fails on `error`
async fn finish_load(
    key: AssetKey,
    path: &'static str,
    started: Result<(HtmlImageElement, JsFuture), AssetError>,
) -> Result<HtmlImageElement, AssetError> {
    let (image, loaded) = started?;
    let outcome = loaded.await;
    image.set_onload(None);
    image.set_onerror(None);
    outcome.map(|_| image).map_err(|_| AssetError {
        key: key.as_str(),
        path,
    })
}

/// Preload the whole manifest; broken images degrade to colored blocks
pub async fn load_sprites() -> (Sprites<HtmlImageElement>, Vec<AssetError>) {
    // Every download is in flight before the first await
    let started: Vec<_> = MANIFEST
        .iter()
        .map(|&(key, path)| (key, path, begin_load(key, path)))
        .collect();

    let mut results = Vec::with_capacity(started.len());
    for (key, path, load) in started {
        results.push((key, finish_load(key, path, load).await));
    }
    Sprites::from_results(results)
}

fn lookup_canvas(document: &Document) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), InitError> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(InitError::MissingCanvas(CANVAS_ID))?
        .dyn_into()
        .map_err(|_| InitError::MissingCanvas(CANVAS_ID))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(InitError::MissingContext)?
        .dyn_into()
        .map_err(|_| InitError::MissingContext)?;
    Ok((canvas, ctx))
}

fn read_config(canvas: &HtmlCanvasElement) -> Result<GameConfig, InitError> {
    match canvas.get_attribute("data-config") {
        Some(json) => Ok(GameConfig::from_json(&json)?),
        None => Ok(GameConfig::default()),
    }
}

/// Find the DOM pieces, size the canvas, preload sprites, start a session
///
/// Any missing element aborts before a frame is scheduled.
pub async fn init_game() -> Result<Rc<RefCell<WebGame>>, InitError> {
    log::info!("[INIT] Initializing game...");
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;

    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or(InitError::MissingContainer(CONTAINER_ID))?;
    let (canvas, ctx) = lookup_canvas(&document)?;
    let config = read_config(&canvas)?;

    // Fill the window
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    if let (Some(w), Some(h)) = (width, height) {
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
    if let Err(e) = container.class_list().remove_1("hidden") {
        log::warn!("[INIT] Could not unhide #{}: {:?}", CONTAINER_ID, e);
    }

    let (sprites, failures) = load_sprites().await;
    if !failures.is_empty() {
        log::warn!("[Assets] {} sprite(s) missing, using solid colors", failures.len());
    }

    let surface = CanvasSurface::new(canvas, ctx);
    let viewport = surface_viewport(&surface);
    let session = GameSession::new(config.clone(), viewport, new_seed());

    let scheduler = RafScheduler::new(window);
    let slot = scheduler.callback_slot();
    let mut game_loop = GameLoop::new(session, scheduler);
    game_loop.on_game_over(|score| log::info!("[Game] Game over! Score: {}", score));

    let game = Rc::new(RefCell::new(WebGame {
        game_loop,
        surface,
        sprites,
        config,
        score_el: document.get_element_by_id(SCORE_ID),
    }));

    {
        let game = game.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            game.borrow_mut().on_frame(ts);
        }) as Box<dyn FnMut(f64)>));
    }

    game.borrow_mut().game_loop.start()?;
    log::info!("[INIT] Game started");
    Ok(game)
}
