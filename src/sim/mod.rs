//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, driven from outside
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod aabb;
pub mod entity;
pub mod player;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, overlaps};
pub use entity::{Coin, Obstacle, Scroller};
pub use player::{Player, PlayerState};
pub use snapshot::{CoinPose, GameOverSummary, HudSnapshot, PlayerPose, RenderSnapshot};
pub use spawner::{SpawnRoll, Spawner};
pub use state::{Field, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, TickResult, tick};
