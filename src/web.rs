//! Browser bridge
//!
//! The page owns the canvas, HUD elements and event listeners. It forwards
//! keys/swipes here, calls `frame()` from `requestAnimationFrame`, and draws
//! from the JSON snapshots.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::driver::{FrameDriver, seed_from_host};
use crate::input::{Intent, SWIPE_THRESHOLD, classify_swipe};
use crate::sim::{Field, GameOverSummary, HudSnapshot, RenderSnapshot, TickResult};
use crate::tuning::Tuning;

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Snapshot serialization failed: {}", e);
            "null".to_string()
        }
    }
}

/// Game handle exposed to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    driver: FrameDriver,
}

#[wasm_bindgen]
impl WebGame {
    /// Start a run on a `width` x `height` field.
    ///
    /// `seed` is a plain JS number; 0 picks one from the clock. `tuning_json`
    /// overrides the balance defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: f64, tuning_json: Option<String>) -> WebGame {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let seed = seed_from_host(seed, js_sys::Date::now());
        let tuning = Tuning::from_json_or_default(tuning_json.as_deref());
        log::info!("Coin Dash (web) starting with seed {}", seed);

        WebGame {
            driver: FrameDriver::new(seed, Field::new(width, height), tuning),
        }
    }

    pub fn request_jump(&mut self) {
        self.driver.push(Intent::Jump);
    }

    pub fn request_slide(&mut self) {
        self.driver.push(Intent::Slide);
    }

    /// Forward a `KeyboardEvent.code`
    pub fn key_down(&mut self, code: &str) {
        if let Some(intent) = Intent::from_key(code) {
            self.driver.push(intent);
        }
    }

    /// Forward a finished touch gesture (start/end clientY)
    pub fn swipe(&mut self, start_y: f32, end_y: f32) {
        if let Some(intent) = classify_swipe(start_y, end_y, SWIPE_THRESHOLD) {
            self.driver.push(intent);
        }
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.driver.set_autopilot(on);
    }

    /// Run one frame; false once the run is over (stop scheduling)
    pub fn frame(&mut self) -> bool {
        self.driver.frame() == TickResult::Continue
    }

    pub fn restart(&mut self) {
        self.driver.restart();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.driver.resize(width, height);
    }

    pub fn is_game_over(&self) -> bool {
        self.driver.state.is_game_over()
    }

    pub fn render_json(&self) -> String {
        to_json(&RenderSnapshot::capture(&self.driver.state))
    }

    pub fn hud_json(&self) -> String {
        to_json(&HudSnapshot::capture(&self.driver.state))
    }

    /// Events since the last call (JSON array), for audio/UI hooks.
    /// Call once per frame.
    pub fn drain_events_json(&mut self) -> String {
        to_json(&self.driver.drain_events())
    }

    /// End-screen data, `null` while the run is still going
    pub fn game_over_json(&self) -> String {
        to_json(&GameOverSummary::capture(&self.driver.state))
    }
}
