//! Coin Dash - An endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `input`: Jump/slide intents from keyboard and swipe gestures
//! - `autopilot`: Demo mode that plays the game by itself
//! - `driver`: One-tick-per-frame driver for hosts
//! - `web`: Browser bridge (wasm32 only)

pub mod autopilot;
pub mod driver;
pub mod input;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use driver::FrameDriver;
pub use input::{InputQueue, Intent};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Play field defaults (the host supplies the real size)
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;
    /// Ground line sits this far above the bottom of the field
    pub const GROUND_OFFSET: f32 = 150.0;

    /// Downward acceleration (units/frame²)
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -15.0;
    /// Slide duration in frames
    pub const SLIDE_FRAMES: i32 = 30;

    /// Player defaults
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_SLIDE_HEIGHT: f32 = 50.0;

    /// Entities spawn this far past the right edge
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Obstacle size ranges (min, max)
    pub const OBSTACLE_WIDTH: (f32, f32) = (40.0, 70.0);
    pub const OBSTACLE_HEIGHT: (f32, f32) = (40.0, 90.0);

    /// Coin defaults
    pub const COIN_RADIUS: f32 = 15.0;
    /// Coin center height above the ground line (min, max)
    pub const COIN_LIFT: (f32, f32) = (100.0, 250.0);

    /// Per-frame spawn probabilities
    pub const OBSTACLE_CHANCE: f32 = 0.02;
    pub const COIN_CHANCE: f32 = 0.03;

    /// Scroll speed at run start (units/frame)
    pub const START_SPEED: f64 = 4.0;
    /// Speed gained every frame
    pub const SPEED_INCREMENT: f64 = 0.0005;
    /// Distance gained per unit of speed each frame
    pub const DISTANCE_FACTOR: f64 = 0.1;
    pub const START_DISTANCE: f64 = 1.0;
}
