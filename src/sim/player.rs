//! The runner: jump/slide state machine and vertical physics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::tuning::Tuning;

/// Player movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Standing on the ground line, accepts jump/slide
    Grounded,
    /// In the air after a jump
    Airborne,
    /// Ducking under obstacles for a fixed number of frames
    Sliding { frames_left: i32 },
}

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the full-height footprint
    pub pos: Vec2,
    /// Vertical velocity (units/frame, negative = up)
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
    pub slide_height: f32,
    pub state: PlayerState,
    /// y of the walkable surface this player stands on
    ground_y: f32,
    gravity: f32,
    jump_velocity: f32,
    slide_frames: i32,
}

impl Player {
    /// Fresh grounded player at the default position
    pub fn new(tuning: &Tuning, ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, ground_y - tuning.player_height),
            vel_y: 0.0,
            width: tuning.player_width,
            height: tuning.player_height,
            slide_height: tuning.player_slide_height,
            state: PlayerState::Grounded,
            ground_y,
            gravity: tuning.gravity,
            jump_velocity: tuning.jump_velocity,
            slide_frames: tuning.slide_frames,
        }
    }

    /// y the footprint's top sits at when standing on the ground
    #[inline]
    fn rest_y(&self) -> f32 {
        self.ground_y - self.height
    }

    pub fn is_grounded(&self) -> bool {
        self.state == PlayerState::Grounded
    }

    pub fn is_sliding(&self) -> bool {
        matches!(self.state, PlayerState::Sliding { .. })
    }

    /// Launch upward. Ignored unless grounded; returns whether it applied.
    pub fn jump(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.vel_y = self.jump_velocity;
        self.state = PlayerState::Airborne;
        true
    }

    /// Duck for `slide_frames` frames. Ignored unless grounded.
    ///
    /// Velocity is left alone: gravity keeps accumulating into it for the
    /// whole slide and lands on the first update after the slide ends.
    pub fn slide(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.state = PlayerState::Sliding {
            frames_left: self.slide_frames,
        };
        self.pos.y = self.rest_y();
        true
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.vel_y += self.gravity;

        match self.state {
            PlayerState::Sliding { frames_left } => {
                let frames_left = frames_left - 1;
                self.state = if frames_left <= 0 {
                    PlayerState::Grounded
                } else {
                    PlayerState::Sliding { frames_left }
                };
            }
            PlayerState::Grounded | PlayerState::Airborne => {
                self.pos.y += self.vel_y;
                if self.pos.y >= self.rest_y() {
                    self.pos.y = self.rest_y();
                    self.vel_y = 0.0;
                    self.state = PlayerState::Grounded;
                }
            }
        }
    }

    /// Box used for collision; shorter and bottom-anchored while sliding
    pub fn hitbox(&self) -> Aabb {
        if self.is_sliding() {
            Aabb::new(
                self.pos.x,
                self.pos.y + self.height - self.slide_height,
                self.width,
                self.slide_height,
            )
        } else {
            Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
        }
    }
}
