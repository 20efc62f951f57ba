//! Cyber Hackrunner entry point
//!
//! In the browser: arms the secret key combo and launches the game on demand.
//! Natively: plays a seeded headless session with a simple autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use cyber_hackrunner::input::{InputAction, SecretTrigger, action_for_key};
    use cyber_hackrunner::platform::web::{WebGame, init_game};

    /// Filled once the secret combo has launched the game
    type GameSlot = Rc<RefCell<Option<Rc<RefCell<WebGame>>>>>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("[App] Cyber Hackrunner armed (Alt + F12)");

        let slot: GameSlot = Rc::new(RefCell::new(None));
        setup_keyboard(slot);
    }

    fn launch(slot: GameSlot) {
        wasm_bindgen_futures::spawn_local(async move {
            match init_game().await {
                Ok(game) => {
                    *slot.borrow_mut() = Some(game);
                    log::info!("[SECRET] Hidden game launched");
                }
                Err(e) => log::error!("[SECRET] Failed to launch hidden game: {}", e),
            }
        });
    }

    fn setup_keyboard(slot: GameSlot) {
        let Some(window) = web_sys::window() else {
            log::error!("[App] No window, keyboard not bound");
            return;
        };

        let mut trigger = SecretTrigger::new();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let code = event.code();
            if trigger.check(&code, event.alt_key()) {
                event.prevent_default();
                launch(slot.clone());
                return;
            }

            let Some(action) = action_for_key(&code) else {
                return;
            };
            if let Some(game) = slot.borrow().as_ref() {
                if action == InputAction::Jump {
                    // Keep space from scrolling the page
                    event.prevent_default();
                }
                game.borrow_mut().handle_action(action);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use cyber_hackrunner::assets::Sprites;
    use cyber_hackrunner::consts::NOMINAL_FRAME_MS;
    use cyber_hackrunner::platform::headless::{ManualScheduler, RecordingSurface};
    use cyber_hackrunner::{GameConfig, GameLoop, GameSession, LoopError, Viewport};

    const VIEW_WIDTH: f32 = 800.0;
    const VIEW_HEIGHT: f32 = 400.0;
    /// Ten minutes at 60 Hz
    const MAX_FRAMES: u64 = 60 * 60 * 10;
    /// Jump when the next obstacle is this many frames of scrolling away
    const JUMP_LEAD_FRAMES: f32 = 8.0;

    /// Jump if the closest obstacle ahead is about to reach the player
    pub fn should_jump(session: &GameSession) -> bool {
        let player = &session.player;
        if player.airborne {
            return false;
        }
        let front = player.pos.x + player.size.x;
        let lead = session.stats.speed() * JUMP_LEAD_FRAMES;
        session
            .obstacles
            .iter()
            .map(|o| o.pos.x - front)
            .filter(|gap| *gap > 0.0)
            .fold(None, |best: Option<f32>, gap| Some(best.map_or(gap, |b| b.min(gap))))
            .is_some_and(|gap| gap <= lead)
    }

    /// Play one session to game over (or the frame cap); returns the score
    pub fn run(config: GameConfig, seed: u64) -> Result<u64, LoopError> {
        let session = GameSession::new(config, Viewport::new(VIEW_WIDTH, VIEW_HEIGHT), seed);
        let mut game = GameLoop::new(session, ManualScheduler::new());
        game.on_game_over(|score| log::info!("Game over! Score: {}", score));

        let mut surface = RecordingSurface::<()>::new(VIEW_WIDTH as f64, VIEW_HEIGHT as f64);
        let sprites = Sprites::empty();

        game.start()?;
        let mut timestamp = 0.0;
        while game.session().frame < MAX_FRAMES && game.scheduler_mut().take_pending().is_some() {
            if should_jump(game.session()) {
                game.request_jump();
            }
            timestamp += NOMINAL_FRAME_MS;
            game.frame(timestamp, &mut surface, &sprites)?;
        }
        game.stop();

        let session = game.session();
        log::info!(
            "Headless run finished after {} frames: score {}, speed {}, spawn {}ms",
            session.frame,
            session.score(),
            session.stats.speed(),
            session.stats.spawn_interval_ms()
        );
        Ok(session.score())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cyber_hackrunner::GameConfig;

    env_logger::init();
    log::info!("Cyber Hackrunner (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    config
                }
                Err(e) => {
                    log::error!("Cannot use config {}: {}", path, e);
                    std::process::exit(1);
                }
            }
        }
        None => GameConfig::default(),
    };

    let seed = std::env::var("HACKRUNNER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    match headless::run(config, seed) {
        Ok(score) => println!("Final score: {}", score),
        Err(e) => {
            log::error!("Headless run failed: {}", e);
            std::process::exit(1);
        }
    }
}
