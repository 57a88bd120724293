//! Read-only views of the state for render, HUD and end-screen layers
//!
//! Built once per frame after the tick so the host never holds on to the
//! live state while drawing.

use glam::Vec2;
use serde::Serialize;

use super::aabb::Aabb;
use super::entity::Scroller;
use super::player::PlayerState;
use super::state::{Field, GamePhase, GameState};

/// Player pose for drawing
#[derive(Debug, Clone, Serialize)]
pub struct PlayerPose {
    /// Full-height footprint
    pub body: Aabb,
    /// Box actually used for collision (shorter while sliding)
    pub hitbox: Aabb,
    pub state: PlayerState,
}

/// Coin for drawing
#[derive(Debug, Clone, Serialize)]
pub struct CoinPose {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub field: Field,
    pub ground_y: f32,
    pub player: PlayerPose,
    pub obstacles: Vec<Aabb>,
    pub coins: Vec<CoinPose>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let p = &state.player;
        Self {
            tick: state.time_ticks,
            phase: state.phase,
            field: state.field,
            ground_y: state.ground_y,
            player: PlayerPose {
                body: Aabb::new(p.pos.x, p.pos.y, p.width, p.height),
                hitbox: p.hitbox(),
                state: p.state,
            },
            obstacles: state.obstacles.iter().map(Scroller::hitbox).collect(),
            coins: state
                .coins
                .iter()
                .map(|c| CoinPose {
                    id: c.id,
                    center: c.pos,
                    radius: c.radius,
                })
                .collect(),
        }
    }
}

/// HUD values, updated once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    /// Distance rounded for display
    pub distance: u64,
    pub coins: u32,
}

impl HudSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            distance: state.distance.max(0.0).round() as u64,
            coins: state.coins_collected,
        }
    }

    pub fn distance_text(&self) -> String {
        format!("Distance: {}", self.distance)
    }

    pub fn coins_text(&self) -> String {
        format!("Coins: {}", self.coins)
    }
}

/// Final result shown on the end screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverSummary {
    pub distance: u64,
    pub coins: u32,
}

impl GameOverSummary {
    /// Only available once the run is over
    pub fn capture(state: &GameState) -> Option<Self> {
        if state.phase != GamePhase::GameOver {
            return None;
        }
        let hud = HudSnapshot::capture(state);
        Some(Self {
            distance: hud.distance,
            coins: hud.coins,
        })
    }

    pub fn text(&self) -> String {
        format!("Distance: {} | Coins: {}", self.distance, self.coins)
    }
}
