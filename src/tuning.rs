//! Game balance parameters
//!
//! Every number the simulation uses lives here so a run can be re-tuned from
//! JSON without touching code. Defaults mirror [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    pub gravity: f32,
    pub jump_velocity: f32,
    pub slide_frames: i32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub player_slide_height: f32,

    // === Field ===
    /// Distance from the bottom of the field to the ground line
    pub ground_offset: f32,
    pub spawn_margin: f32,

    // === Entities ===
    pub obstacle_width: (f32, f32),
    pub obstacle_height: (f32, f32),
    pub coin_radius: f32,
    pub coin_lift: (f32, f32),

    // === Spawning ===
    pub obstacle_chance: f32,
    pub coin_chance: f32,

    // === Pacing (f64: accumulated every frame for the whole run) ===
    pub start_speed: f64,
    pub speed_increment: f64,
    pub distance_factor: f64,
    pub start_distance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            slide_frames: SLIDE_FRAMES,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_slide_height: PLAYER_SLIDE_HEIGHT,

            ground_offset: GROUND_OFFSET,
            spawn_margin: SPAWN_MARGIN,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            coin_radius: COIN_RADIUS,
            coin_lift: COIN_LIFT,

            obstacle_chance: OBSTACLE_CHANCE,
            coin_chance: COIN_CHANCE,

            start_speed: START_SPEED,
            speed_increment: SPEED_INCREMENT,
            distance_factor: DISTANCE_FACTOR,
            start_distance: START_DISTANCE,
        }
    }
}

/// Order a (min, max) pair
fn ordered(range: (f32, f32)) -> (f32, f32) {
    if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    }
}

impl Tuning {
    /// Tuning with spawning disabled (scripted scenarios, tests)
    pub fn without_spawns() -> Self {
        Self {
            obstacle_chance: 0.0,
            coin_chance: 0.0,
            ..Self::default()
        }
    }

    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Parse optional host-supplied JSON, falling back to defaults
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Invalid tuning: {}, using defaults", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning in {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values into ranges the simulation can run with
    pub fn sanitized(mut self) -> Self {
        self.obstacle_chance = self.obstacle_chance.clamp(0.0, 1.0);
        self.coin_chance = self.coin_chance.clamp(0.0, 1.0);
        self.obstacle_width = ordered(self.obstacle_width);
        self.obstacle_height = ordered(self.obstacle_height);
        self.coin_lift = ordered(self.coin_lift);
        self.speed_increment = self.speed_increment.max(0.0);
        self.player_slide_height = self.player_slide_height.min(self.player_height);
        self.slide_frames = self.slide_frames.max(1);
        self
    }

    /// To JSON (pretty) for writing a starter config
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.6);
        assert_eq!(t.jump_velocity, -15.0);
        assert_eq!(t.slide_frames, 30);
        assert_eq!(t.start_speed, 4.0);
        assert_eq!(t.start_distance, 1.0);
        assert_eq!(t.obstacle_chance, 0.02);
        assert_eq!(t.coin_chance, 0.03);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 1.0, "coin_chance": 0.5 }"#).unwrap();
        assert_eq!(t.gravity, 1.0);
        assert_eq!(t.coin_chance, 0.5);
        assert_eq!(t.jump_velocity, JUMP_VELOCITY);
        assert_eq!(t.obstacle_width, OBSTACLE_WIDTH);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Tuning::from_json("{ gravity: ").is_err());
        assert!(Tuning::from_json(r#"{ "gravity": "heavy" }"#).is_err());
    }

    #[test]
    fn test_host_json_falls_back() {
        assert_eq!(Tuning::from_json_or_default(None), Tuning::default());
        assert_eq!(Tuning::from_json_or_default(Some("not json")), Tuning::default());
        let t = Tuning::from_json_or_default(Some(r#"{ "start_speed": 5.0 }"#));
        assert_eq!(t.start_speed, 5.0);
    }

    #[test]
    fn test_sanitize_clamps_and_orders() {
        let t = Tuning {
            obstacle_chance: 3.0,
            coin_chance: -1.0,
            obstacle_width: (70.0, 40.0),
            player_slide_height: 500.0,
            slide_frames: 0,
            ..Tuning::default()
        }
        .sanitized();
        assert_eq!(t.obstacle_chance, 1.0);
        assert_eq!(t.coin_chance, 0.0);
        assert_eq!(t.obstacle_width, (40.0, 70.0));
        assert_eq!(t.player_slide_height, t.player_height);
        assert_eq!(t.slide_frames, 1);
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let path = std::env::temp_dir().join("coin_dash_tuning_test.json");
        let t = Tuning {
            start_speed: 6.0,
            ..Tuning::default()
        };
        std::fs::write(&path, t.to_json()).unwrap();
        assert_eq!(Tuning::load_or_default(&path), t);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/definitely/not/here/tuning.json");
        assert_eq!(Tuning::load_or_default(path), Tuning::default());
    }
}
