//! Per-frame simulation tick
//!
//! Core game loop that advances a run by exactly one frame. The host calls
//! [`tick`] once per display frame and stops when it reports a game over.

use super::aabb::overlaps;
use super::entity::{Scroller, scroll_and_prune};
use super::state::{GameEvent, GameState};
use crate::autopilot;
use crate::input::Intent;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump (swipe up / arrow up)
    pub jump: bool,
    /// Slide (swipe down / arrow down)
    pub slide: bool,
    /// Demo mode - autopilot plays the game
    pub autopilot: bool,
}

/// Outcome of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Run continues, schedule the next frame
    Continue,
    /// The player crashed this frame
    GameOver,
    /// Nothing simulated (idle or already over)
    Halted,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickResult {
    if !state.is_running() {
        return TickResult::Halted;
    }

    state.time_ticks += 1;

    let mut input = input.clone();
    if input.autopilot {
        match autopilot::choose(state) {
            Some(Intent::Jump) => input.jump = true,
            Some(Intent::Slide) => input.slide = true,
            None => {}
        }
    }
    if input.jump {
        state.request_jump();
    }
    if input.slide {
        state.request_slide();
    }

    state.player.update();

    let speed = state.speed as f32;
    scroll_and_prune(&mut state.obstacles, speed);
    scroll_and_prune(&mut state.coins, speed);

    let spawner = state.spawner();
    spawner.spawn(state);

    let hitbox = state.player.hitbox();

    let crashed_into = state
        .obstacles
        .iter()
        .find(|ob| overlaps(&hitbox, &ob.hitbox()))
        .map(|ob| ob.id);
    if let Some(obstacle_id) = crashed_into {
        log::debug!("Hit obstacle {} at tick {}", obstacle_id, state.time_ticks);
        state.events.push(GameEvent::Crashed { obstacle_id });
        state.end_run();
    }

    // Every overlapping coin is collected, even on the crash frame
    let mut collected = Vec::new();
    state.coins.retain(|coin| {
        let hit = overlaps(&hitbox, &coin.hitbox());
        if hit {
            collected.push(coin.id);
        }
        !hit
    });
    for id in collected {
        state.coins_collected += 1;
        log::debug!("Collected coin {} (total {})", id, state.coins_collected);
        state.events.push(GameEvent::CoinCollected { id });
    }

    state.distance += state.speed * state.tuning.distance_factor;
    state.speed += state.tuning.speed_increment;

    if state.is_game_over() {
        log::info!(
            "Game over: distance {:.0}, coins {}",
            state.distance,
            state.coins_collected
        );
        state.events.push(GameEvent::GameOver {
            distance: state.distance,
            coins: state.coins_collected,
        });
        TickResult::GameOver
    } else {
        TickResult::Continue
    }
}
