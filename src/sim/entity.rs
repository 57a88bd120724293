//! Scrolling entities: obstacles to avoid and coins to collect

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::tuning::Tuning;

/// Anything that scrolls left with the ground
pub trait Scroller {
    /// Move left by the current scroll speed
    fn advance(&mut self, speed: f32);
    /// True once the trailing edge has left the field on the left
    fn is_offscreen(&self) -> bool;
    /// Box used for collision with the player
    fn hitbox(&self) -> Aabb;
}

/// Uniform sample in [min, max)
#[inline]
fn sample<R: Rng>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// A box standing on the ground line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Random-sized obstacle at `spawn_x`, base on the ground line
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, tuning: &Tuning, spawn_x: f32, ground_y: f32) -> Self {
        let width = sample(rng, tuning.obstacle_width);
        let height = sample(rng, tuning.obstacle_height);
        Self::new(id, Vec2::new(spawn_x, ground_y - height), width, height)
    }

    pub fn new(id: u32, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            id,
            pos,
            width,
            height,
        }
    }
}

impl Scroller for Obstacle {
    fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    fn is_offscreen(&self) -> bool {
        self.pos.x + self.width <= 0.0
    }

    fn hitbox(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// A coin floating at jump height
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    /// Center
    pub pos: Vec2,
    pub radius: f32,
}

impl Coin {
    /// Coin at `spawn_x`, somewhere in the reachable band above the ground
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, tuning: &Tuning, spawn_x: f32, ground_y: f32) -> Self {
        let lift = sample(rng, tuning.coin_lift);
        Self::new(id, Vec2::new(spawn_x, ground_y - lift), tuning.coin_radius)
    }

    pub fn new(id: u32, pos: Vec2, radius: f32) -> Self {
        Self { id, pos, radius }
    }
}

impl Scroller for Coin {
    fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
    }

    fn is_offscreen(&self) -> bool {
        self.pos.x + self.radius <= 0.0
    }

    fn hitbox(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.radius))
    }
}

/// Advance every entity, then drop the ones that left the field
pub fn scroll_and_prune<T: Scroller>(entities: &mut Vec<T>, speed: f32) {
    for entity in entities.iter_mut() {
        entity.advance(speed);
    }
    entities.retain(|e| !e.is_offscreen());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const GROUND: f32 = 450.0;

    #[test]
    fn test_obstacle_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let tuning = Tuning::default();
        for id in 0..500 {
            let ob = Obstacle::spawn(id, &mut rng, &tuning, 850.0, GROUND);
            assert!((40.0..70.0).contains(&ob.width), "width {}", ob.width);
            assert!((40.0..90.0).contains(&ob.height), "height {}", ob.height);
            assert_eq!(ob.pos.x, 850.0);
            assert!((ob.pos.y + ob.height - GROUND).abs() < 1e-3);
        }
    }

    #[test]
    fn test_coin_spawn_band() {
        let mut rng = Pcg32::seed_from_u64(7);
        let tuning = Tuning::default();
        for id in 0..500 {
            let coin = Coin::spawn(id, &mut rng, &tuning, 850.0, GROUND);
            assert_eq!(coin.radius, 15.0);
            assert!(coin.pos.y <= GROUND - 100.0 + 1e-3, "y {}", coin.pos.y);
            assert!(coin.pos.y > GROUND - 250.0 - 1e-3, "y {}", coin.pos.y);
        }
    }

    #[test]
    fn test_coin_hitbox_is_bounding_square() {
        let coin = Coin::new(1, Vec2::new(200.0, 300.0), 15.0);
        assert_eq!(coin.hitbox(), Aabb::new(185.0, 285.0, 30.0, 30.0));
    }

    #[test]
    fn test_obstacle_pruned_after_expected_ticks() {
        // Field width 800: spawn at 850, obstacle 53 wide → ceil(903 / 4) = 226
        let mut obstacles = vec![Obstacle::new(1, Vec2::new(850.0, GROUND - 50.0), 53.0, 50.0)];
        let mut ticks = 0;
        while !obstacles.is_empty() {
            scroll_and_prune(&mut obstacles, 4.0);
            ticks += 1;
        }
        assert_eq!(ticks, 226);
    }

    #[test]
    fn test_offscreen_uses_trailing_edge() {
        let mut coin = Coin::new(1, Vec2::new(16.0, 300.0), 15.0);
        assert!(!coin.is_offscreen());
        coin.advance(1.0);
        assert!(coin.is_offscreen());

        let ob = Obstacle::new(2, Vec2::new(-40.0, 0.0), 40.0, 40.0);
        assert!(ob.is_offscreen());
        let ob = Obstacle::new(3, Vec2::new(-39.5, 0.0), 40.0, 40.0);
        assert!(!ob.is_offscreen());
    }
}
