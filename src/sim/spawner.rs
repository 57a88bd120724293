//! Random obstacle and coin generation
//!
//! One independent Bernoulli trial per kind per frame. Nothing caps how close
//! together two spawns land, so bursts happen.

use rand::Rng;

use super::entity::{Coin, Obstacle};
use super::state::GameState;

/// Per-frame spawn probabilities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawner {
    pub obstacle_chance: f32,
    pub coin_chance: f32,
}

/// Which kinds won this frame's trials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnRoll {
    pub obstacle: bool,
    pub coin: bool,
}

impl Spawner {
    pub fn new(obstacle_chance: f32, coin_chance: f32) -> Self {
        Self {
            obstacle_chance,
            coin_chance,
        }
    }

    #[inline]
    fn trial<R: Rng>(rng: &mut R, chance: f32) -> bool {
        rng.random::<f32>() < chance
    }

    /// Run this frame's trials and append the winners to the state
    pub fn spawn(&self, state: &mut GameState) -> SpawnRoll {
        if state.is_game_over() {
            return SpawnRoll::default();
        }

        let spawn_x = state.spawn_x();
        let ground_y = state.ground_y;
        let mut roll = SpawnRoll::default();

        if Self::trial(&mut state.rng, self.obstacle_chance) {
            let id = state.next_entity_id();
            let obstacle = Obstacle::spawn(id, &mut state.rng, &state.tuning, spawn_x, ground_y);
            log::debug!(
                "Spawned obstacle {} ({:.0}x{:.0}) at tick {}",
                id,
                obstacle.width,
                obstacle.height,
                state.time_ticks
            );
            state.obstacles.push(obstacle);
            roll.obstacle = true;
        }

        if Self::trial(&mut state.rng, self.coin_chance) {
            let id = state.next_entity_id();
            let coin = Coin::spawn(id, &mut state.rng, &state.tuning, spawn_x, ground_y);
            log::debug!("Spawned coin {} at y={:.0} tick {}", id, coin.pos.y, state.time_ticks);
            state.coins.push(coin);
            roll.coin = true;
        }

        roll
    }
}
