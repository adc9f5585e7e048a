//! The runner: motion state, gravity integration and jumping

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// What the player is doing this step.
///
/// | from           | event                  | to            |
/// |----------------|------------------------|---------------|
/// | any            | integrate, `vy > 0`    | Falling       |
/// | Falling        | integrate, `vy <= 0`   | Grounded      |
/// | other          | integrate, `vy <= 0`   | unchanged     |
/// | any            | jump accepted          | Jumping       |
/// | any            | top contact            | Grounded      |
/// | any            | bottom contact         | Falling       |
/// | any            | left contact           | CollidingLeft |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerState {
    /// Standing on a platform (or at rest)
    Grounded,
    /// Rising after a jump
    Jumping,
    /// Moving downward
    #[default]
    Falling,
    /// Pushed back by a platform arriving from the right
    CollidingLeft,
}

impl PlayerState {
    /// Transition taken at the start of an integration step
    pub fn on_integrate(self, vertical_vel: f32) -> Self {
        if vertical_vel > 0.0 {
            PlayerState::Falling
        } else if self == PlayerState::Falling {
            PlayerState::Grounded
        } else {
            self
        }
    }

    #[inline]
    pub fn is_jumping(self) -> bool {
        self == PlayerState::Jumping
    }
}

/// The player-controlled runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Position before the last integration step
    pub prev_pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub jumps: u8,
    pub state: PlayerState,
    /// Ticks survived this run
    pub score: u64,
    /// Sprite frame cursor (fractional)
    pub anim_frame: f32,
    pub animation_speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let pos = Vec2::new(tuning.player_start_x, tuning.player_start_y);
        Self {
            pos,
            prev_pos: pos,
            vel: Vec2::ZERO,
            width: tuning.player_width,
            height: tuning.player_height,
            jumps: tuning.max_jumps,
            state: PlayerState::Falling,
            score: 0,
            anim_frame: 0.0,
            animation_speed: tuning.animation_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.width, self.height)
    }

    /// Advance one fixed step under gravity
    pub fn integrate(&mut self, tuning: &Tuning, dt: f32) {
        let next = self.state.on_integrate(self.vel.y);
        if self.state.is_jumping() && next == PlayerState::Falling {
            // Jump apex: restart the fall animation
            self.anim_frame = 0.0;
        }
        self.state = next;

        if self.vel.y < tuning.max_fall_speed {
            self.vel.y += tuning.gravity * dt;
        }
        // One-sided: upward speed is never capped
        self.vel.y = self.vel.y.min(tuning.max_fall_speed);

        self.prev_pos = self.pos;
        self.pos += self.vel * dt;
    }

    /// Try to jump. Returns whether the jump was taken.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if self.jumps == 0 || self.pos.y <= 0.0 {
            return false;
        }
        self.vel.y = -tuning.jump_speed;
        self.jumps -= 1;
        self.state = PlayerState::Jumping;
        self.anim_frame = 0.0;
        true
    }

    /// Advance the sprite cursor by one rendered frame
    pub fn advance_animation(&mut self) {
        self.anim_frame += self.animation_speed;
    }

    /// Fell below the viewport or was pushed off its left edge
    pub fn is_out_of_bounds(&self, tuning: &Tuning) -> bool {
        self.pos.y > tuning.canvas_height || self.pos.x + self.width < 0.0
    }
}
