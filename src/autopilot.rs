//! Demo mode: picks intents so the game can play itself
//!
//! Obstacles all stand on the ground and are taller than the sliding hitbox,
//! so the only useful move is a well-timed jump. It only plans for the
//! nearest obstacle: one spawned right behind it can still end the run.

use crate::input::Intent;
use crate::sim::GameState;

/// Frames of travel before the nearest obstacle reaches the player at which
/// to take off. Clears a lone obstacle of any size at speeds 4 to 12.
pub const LOOKAHEAD_FRAMES: f32 = 9.0;

/// Choose this frame's intent (reads the state only)
pub fn choose(state: &GameState) -> Option<Intent> {
    let player = &state.player;
    if !player.is_grounded() {
        return None;
    }

    let front = player.pos.x + player.width;
    let gap = state
        .obstacles
        .iter()
        .filter(|ob| ob.pos.x + ob.width > player.pos.x)
        .map(|ob| ob.pos.x - front)
        .fold(f32::INFINITY, f32::min);

    (gap <= state.speed as f32 * LOOKAHEAD_FRAMES).then_some(Intent::Jump)
}
