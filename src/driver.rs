//! Frame driver
//!
//! Hosts own one of these and call [`FrameDriver::frame`] from their frame
//! clock (`requestAnimationFrame`, a native loop, a test). It feeds buffered
//! intents into exactly one tick per call.

use crate::input::{InputQueue, Intent};
use crate::sim::{Field, GameEvent, GamePhase, GameState, TickResult, tick};
use crate::tuning::Tuning;

/// Seed from a host number (JS `number`); 0, negative or non-finite picks `clock_ms`
pub fn seed_from_host(seed: f64, clock_ms: f64) -> u64 {
    if seed.is_finite() && seed >= 1.0 {
        seed as u64
    } else {
        clock_ms.max(0.0) as u64
    }
}

/// One session plus its pending input
#[derive(Debug, Clone)]
pub struct FrameDriver {
    pub state: GameState,
    pub input: InputQueue,
    last_phase: GamePhase,
}

impl FrameDriver {
    /// Create a driver and start the first run
    pub fn new(seed: u64, field: Field, tuning: Tuning) -> Self {
        let mut state = GameState::new(seed, field, tuning);
        state.start();
        Self {
            last_phase: state.phase,
            state,
            input: InputQueue::new(),
        }
    }

    /// Queue an intent for the next frame (dropped while not running)
    pub fn push(&mut self, intent: Intent) {
        if self.state.is_running() {
            self.input.push(intent);
        }
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.input.autopilot = on;
    }

    /// Run one frame
    pub fn frame(&mut self) -> TickResult {
        let input = self.input.take();
        let result = tick(&mut self.state, &input);

        if self.state.phase != self.last_phase {
            log::info!("Phase {:?} -> {:?}", self.last_phase, self.state.phase);
            self.last_phase = self.state.phase;
        }
        result
    }

    /// Run frames until the run ends or `max_frames` pass; returns frames run
    pub fn run_until_game_over(&mut self, max_frames: u64) -> u64 {
        let mut frames = 0;
        while frames < max_frames {
            frames += 1;
            if self.frame() != TickResult::Continue {
                break;
            }
        }
        frames
    }

    pub fn restart(&mut self) {
        // Drop stale one-shot intents, keep the autopilot toggle
        let _ = self.input.take();
        self.state.restart();
        self.last_phase = self.state.phase;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(Field::new(width, height));
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
