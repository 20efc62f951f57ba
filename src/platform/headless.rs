//! Host without a display
//!
//! A scheduler the caller pumps by hand and a surface that records draw
//! calls. Drives the native runner and the test suite.

use crate::driver::{FrameHandle, FrameScheduler};
use crate::error::{LoopError, RenderError};
use crate::render::{Surface, TextAlign};

/// Frame requests are queued until the caller takes them
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Option<FrameHandle>,
    requested: usize,
    cancelled: usize,
    fail_next: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the outstanding request, if any
    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total frame requests made
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total requests cancelled before firing
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Make the next request fail
    pub fn fail_next_request(&mut self) {
        self.fail_next = true;
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, LoopError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(LoopError::Schedule("scheduler unavailable".into()));
        }
        if self.pending.is_some() {
            log::warn!("Frame requested while another is pending");
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        self.requested += 1;
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<I> {
    ClearRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    FillStyle(String),
    Font(String),
    TextAlign(TextAlign),
    Text(String, f64, f64),
    Image {
        image: I,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
}

/// Surface that keeps the draw calls of the current frame
///
/// Clearing the whole surface drops what was recorded before it.
#[derive(Debug)]
pub struct RecordingSurface<I> {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand<I>>,
    fail_text: bool,
}

impl<I> RecordingSurface<I> {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            fail_text: false,
        }
    }

    pub fn commands(&self) -> &[DrawCommand<I>] {
        &self.commands
    }

    /// Text calls whose content was drawn this frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(text, _, _) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Make every `fill_text` fail, to exercise error paths
    pub fn fail_text(&mut self, fail: bool) {
        self.fail_text = fail;
    }
}

impl<I: Clone> Surface for RecordingSurface<I> {
    type Image = I;

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if x <= 0.0 && y <= 0.0 && w >= self.width && h >= self.height {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::ClearRect(x, y, w, h));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::FillRect(x, y, w, h));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.commands.push(DrawCommand::FillStyle(style.to_string()));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), RenderError> {
        if self.fail_text {
            return Err(RenderError(format!("fill_text rejected: {text}")));
        }
        self.commands.push(DrawCommand::Text(text.to_string(), x, y));
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            x,
            y,
            w,
            h,
        });
        Ok(())
    }
}
