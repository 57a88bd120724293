//! Player intents and their sources
//!
//! Raw events (keys, touches) are captured by the host. This module only
//! classifies them into jump/slide and buffers them until the next frame.

use crate::sim::TickInput;

/// Minimum vertical travel (px) for a touch to count as a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// A classified player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Jump,
    Slide,
}

impl Intent {
    /// Map a DOM `KeyboardEvent.code`
    pub fn from_key(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Intent::Jump),
            "ArrowDown" => Some(Intent::Slide),
            _ => None,
        }
    }
}

/// Classify a vertical swipe from touch start/end y (screen space, y down)
pub fn classify_swipe(start_y: f32, end_y: f32, threshold: f32) -> Option<Intent> {
    let diff = start_y - end_y;
    if diff > threshold {
        Some(Intent::Jump)
    } else if diff < -threshold {
        Some(Intent::Slide)
    } else {
        None
    }
}

/// Intents collected between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    jump: bool,
    slide: bool,
    /// Persistent demo-mode toggle
    pub autopilot: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        match intent {
            Intent::Jump => self.jump = true,
            Intent::Slide => self.slide = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.jump && !self.slide
    }

    /// Build this frame's input and clear the one-shot intents
    pub fn take(&mut self) -> TickInput {
        let input = TickInput {
            jump: self.jump,
            slide: self.slide,
            autopilot: self.autopilot,
        };
        self.jump = false;
        self.slide = false;
        input
    }
}
