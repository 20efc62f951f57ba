//! Frame loop driver
//!
//! Owns the session for its lifetime and the single pending frame request.
//! Every frame runs update, spawn, collision, score, then render, in that
//! order, and schedules the next frame only after all of it succeeded.

use crate::assets::Sprites;
use crate::consts::NOMINAL_FRAME_MS;
use crate::error::LoopError;
use crate::render::{Surface, render_frame, render_game_over};
use crate::sim::{GameEvent, GameSession, TickInput, tick};

/// Host token for a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Display-refresh scheduling primitive (requestAnimationFrame and friends)
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, LoopError>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Result of one frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Loop was not scheduled; nothing happened
    Stopped,
    /// Frame done, next one requested
    Continue,
    /// Session ended on this frame; loop is stopped
    GameOver { final_score: u64 },
}

/// Called once per session with the final score
pub type GameOverCallback = Box<dyn FnMut(u64)>;

pub struct GameLoop<S: FrameScheduler> {
    scheduler: S,
    session: GameSession,
    /// The one outstanding frame request, if the loop is running
    pending: Option<FrameHandle>,
    last_timestamp: Option<f64>,
    on_game_over: Option<GameOverCallback>,
    game_over_fired: bool,
}

impl<S: FrameScheduler> GameLoop<S> {
    pub fn new(session: GameSession, scheduler: S) -> Self {
        Self {
            scheduler,
            session,
            pending: None,
            last_timestamp: None,
            on_game_over: None,
            game_over_fired: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Register the game-over listener
    pub fn on_game_over(&mut self, callback: impl FnMut(u64) + 'static) {
        self.on_game_over = Some(Box::new(callback));
    }

    /// A frame is scheduled
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Begin scheduling frames
    ///
    /// Returns `Ok(false)` without scheduling anything when the loop is
    /// already running or the session has ended.
    pub fn start(&mut self) -> Result<bool, LoopError> {
        if self.pending.is_some() {
            log::warn!("[Loop] start ignored: loop already running");
            return Ok(false);
        }
        if self.session.is_over() {
            log::warn!("[Loop] start ignored: session is over, restart required");
            return Ok(false);
        }

        let handle = self.scheduler.request_frame()?;
        self.pending = Some(handle);
        self.last_timestamp = None;
        self.session.begin();
        log::info!("[Loop] Game loop started");
        Ok(true)
    }

    /// Cancel the pending frame; no-op when not running
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            log::info!("[Loop] Game loop stopped");
        }
    }

    /// Replace the session with a fresh one and start it
    pub fn restart(&mut self, session: GameSession) -> Result<bool, LoopError> {
        self.stop();
        self.session = session;
        self.game_over_fired = false;
        self.start()
    }

    /// Jump input from the host; visible to the next frame
    pub fn request_jump(&mut self) -> bool {
        if self.pending.is_none() {
            return false;
        }
        self.session.jump()
    }

    /// Frame callback body
    ///
    /// On any error the loop is left stopped: the next frame is only
    /// requested after the whole frame succeeded.
    pub fn frame<Su: Surface>(
        &mut self,
        timestamp_ms: f64,
        surface: &mut Su,
        sprites: &Sprites<Su::Image>,
    ) -> Result<FrameOutcome, LoopError> {
        // The host consumed this handle by invoking us
        if self.pending.take().is_none() {
            return Ok(FrameOutcome::Stopped);
        }

        let dt_ms = match self.last_timestamp {
            Some(last) => timestamp_ms - last,
            None => NOMINAL_FRAME_MS,
        };
        self.last_timestamp = Some(timestamp_ms);

        let events = tick(&mut self.session, &TickInput::default(), dt_ms);
        let game_over = events.iter().find_map(|e| match e {
            GameEvent::GameOver { final_score } => Some(*final_score),
            _ => None,
        });

        if let Some(final_score) = game_over {
            let painted = render_frame(surface, &self.session, sprites)
                .and_then(|_| render_game_over(surface, final_score));
            self.fire_game_over(final_score);
            painted?;
            return Ok(FrameOutcome::GameOver { final_score });
        }

        let scheduled = render_frame(surface, &self.session, sprites)
            .map_err(LoopError::from)
            .and_then(|_| self.scheduler.request_frame());
        match scheduled {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(FrameOutcome::Continue)
            }
            Err(err) => {
                self.abort(&err);
                Err(err)
            }
        }
    }

    /// A failed frame ends the session so the host can offer a restart
    fn abort(&mut self, err: &LoopError) {
        log::error!("[Loop] Frame failed, ending session: {}", err);
        self.session.end();
        let final_score = self.session.score();
        self.fire_game_over(final_score);
    }

    fn fire_game_over(&mut self, final_score: u64) {
        if self.game_over_fired {
            return;
        }
        self.game_over_fired = true;
        log::info!("[Loop] Game over, final score {}", final_score);
        if let Some(callback) = self.on_game_over.as_mut() {
            callback(final_score);
        }
    }
}
