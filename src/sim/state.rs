//! Game state and session lifecycle
//!
//! Everything a run mutates lives in [`GameState`]; the tick is the only
//! place that advances it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Coin, Obstacle};
use super::player::Player;
use super::spawner::Spawner;
use crate::consts::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, waiting for start
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; only restart leaves this
    GameOver,
}

/// Something that happened during a tick, for audio/UI hooks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    Slid,
    CoinCollected { id: u32 },
    Crashed { obstacle_id: u32 },
    GameOver { distance: f64, coins: u32 },
}

/// Visible play field size, supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was last reset with
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Distance traveled this run
    pub distance: f64,
    /// Coins collected this run
    pub coins_collected: u32,
    /// Scroll speed (units/frame)
    pub speed: f64,
    /// Ticks simulated this run
    pub time_ticks: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub field: Field,
    /// y of the walkable surface, fixed for the length of a run
    pub ground_y: f32,
    pub tuning: Tuning,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle session
    pub fn new(seed: u64, field: Field, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let ground_y = field.height - tuning.ground_offset;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            distance: tuning.start_distance,
            coins_collected: 0,
            speed: tuning.start_speed,
            time_ticks: 0,
            player: Player::new(&tuning, ground_y),
            obstacles: Vec::new(),
            coins: Vec::new(),
            field,
            ground_y,
            tuning,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Reset counters and entities and begin a run
    pub fn start(&mut self) {
        self.ground_y = self.field.height - self.tuning.ground_offset;
        self.distance = self.tuning.start_distance;
        self.coins_collected = 0;
        self.speed = self.tuning.start_speed;
        self.time_ticks = 0;
        self.player = Player::new(&self.tuning, self.ground_y);
        self.obstacles.clear();
        self.coins.clear();
        self.events.clear();
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!("Run started (seed {}, ground at y={:.0})", self.seed, self.ground_y);
    }

    /// Start over after a game over (or mid-run)
    pub fn restart(&mut self) {
        log::info!("Restart requested in phase {:?}", self.phase);
        self.start();
    }

    /// Reset the RNG so the next run replays exactly
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Update the field size.
    ///
    /// Spawn position follows immediately. The ground line stays put until
    /// the next start.
    pub fn resize(&mut self, field: Field) {
        log::debug!("Field resized to {}x{}", field.width, field.height);
        self.field = field;
    }

    /// Jump intent; ignored unless running and grounded
    pub fn request_jump(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            log::trace!("Jump ignored in phase {:?}", self.phase);
            return false;
        }
        let applied = self.player.jump();
        if applied {
            self.events.push(GameEvent::Jumped);
        } else {
            log::trace!("Jump ignored in state {:?}", self.player.state);
        }
        applied
    }

    /// Slide intent; ignored unless running and grounded
    pub fn request_slide(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            log::trace!("Slide ignored in phase {:?}", self.phase);
            return false;
        }
        let applied = self.player.slide();
        if applied {
            self.events.push(GameEvent::Slid);
        } else {
            log::trace!("Slide ignored in state {:?}", self.player.state);
        }
        applied
    }

    /// Mark the run over (one way until restart)
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// x new entities appear at, just past the right edge
    pub fn spawn_x(&self) -> f32 {
        self.field.width + self.tuning.spawn_margin
    }

    /// Spawn probabilities for this session
    pub fn spawner(&self) -> Spawner {
        Spawner::new(self.tuning.obstacle_chance, self.tuning.coin_chance)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::player::PlayerState;
    use glam::Vec2;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(1, Field::default(), Tuning::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.ground_y, 450.0);
        assert_eq!(state.distance, 1.0);
        assert_eq!(state.speed, 4.0);
        assert_eq!(state.coins_collected, 0);
    }

    #[test]
    fn test_intents_ignored_when_not_running() {
        let mut state = GameState::new(1, Field::default(), Tuning::default());
        assert!(!state.request_jump());
        assert_eq!(state.player.state, PlayerState::Grounded);

        state.start();
        state.end_run();
        assert!(!state.request_slide());
        assert_eq!(state.player.state, PlayerState::Grounded);
    }

    #[test]
    fn test_request_jump_emits_event() {
        let mut state = GameState::new(1, Field::default(), Tuning::default());
        state.start();
        state.drain_events();
        assert!(state.request_jump());
        assert!(!state.request_jump());
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(3, Field::default(), Tuning::default());
        state.start();
        state.distance = 500.0;
        state.coins_collected = 12;
        state.speed = 7.5;
        state.time_ticks = 900;
        state.request_jump();
        let id = state.next_entity_id();
        state
            .obstacles
            .push(Obstacle::new(id, Vec2::new(300.0, 400.0), 50.0, 50.0));
        let id = state.next_entity_id();
        state.coins.push(Coin::new(id, Vec2::new(300.0, 300.0), 15.0));
        state.end_run();

        state.restart();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.distance, 1.0);
        assert_eq!(state.coins_collected, 0);
        assert_eq!(state.speed, 4.0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.coins.is_empty());
        assert_eq!(state.player.state, PlayerState::Grounded);
        assert_eq!(state.player.pos, Vec2::new(100.0, 370.0));
        assert_eq!(state.player.vel_y, 0.0);
    }

    #[test]
    fn test_resize_moves_spawn_now_ground_later() {
        let mut state = GameState::new(1, Field::default(), Tuning::default());
        state.start();
        state.resize(Field::new(1200.0, 900.0));
        assert_eq!(state.spawn_x(), 1250.0);
        assert_eq!(state.ground_y, 450.0);

        state.restart();
        assert_eq!(state.ground_y, 750.0);
        assert_eq!(state.player.hitbox().bottom(), 750.0);
    }

    #[test]
    fn test_reseed_replays_rng() {
        use rand::Rng;
        let mut state = GameState::new(10, Field::default(), Tuning::default());
        let first: f32 = state.rng.random();
        state.reseed(10);
        let again: f32 = state.rng.random();
        assert_eq!(first, again);
    }
}
