//! The player-controlled archer
//!
//! Moves horizontally along the bottom row and fires upward arrows gated by
//! a cooldown. Movement and firing are suspended while feared.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::{Arrow, Heading};
use super::rect::Rect;
use super::timer::Timer;
use crate::consts::*;

/// Base horizontal speed (pixels/s)
pub const START_SPEED: f32 = 180.0;
/// Base fire rate (arrows/s)
pub const START_FIRE_RATE: f32 = 3.0;
pub const SPEED_MULTIPLIER: f32 = 2.0;
pub const FIRE_RATE_MULTIPLIER: f32 = 2.0;

/// Movement intent for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub rect: Rect,
    /// Exact horizontal position; `rect` is snapped from it
    pub x: f32,
    pub current_speed: f32,
    pub fire_rate: f32,
    pub shoot_timer: Timer,
    pub ready_to_shoot: bool,
    pub feared: bool,
}

impl Default for Actor {
    fn default() -> Self {
        let x = Self::center_x();
        Self {
            rect: Rect::new(x, SCREEN_HEIGHT - PLAYER_SIZE.1, PLAYER_SIZE.0, PLAYER_SIZE.1),
            x,
            current_speed: START_SPEED,
            fire_rate: START_FIRE_RATE,
            shoot_timer: Timer::new(cooldown_ms(START_FIRE_RATE), false),
            ready_to_shoot: true,
            feared: false,
        }
    }
}

/// Milliseconds between shots at a given fire rate
fn cooldown_ms(fire_rate: f32) -> f32 {
    1000.0 / fire_rate
}

impl Actor {
    fn center_x() -> f32 {
        ((SCREEN_WIDTH - PLAYER_SIZE.0) / 2.0).trunc()
    }

    /// Advance the shot cooldown and apply movement intent
    pub fn update(&mut self, intent: MoveIntent, dt: f32) {
        self.shoot_timer.update(dt * 1000.0);
        if self.shoot_timer.is_finished() && !self.feared {
            self.ready_to_shoot = true;
        }

        if self.feared {
            return;
        }

        let step = self.current_speed * dt;
        if intent.left {
            self.x = (self.x - step).max(0.0);
        } else if intent.right {
            self.x = (self.x + step).min(SCREEN_WIDTH - self.rect.width);
        }
        self.rect.x = self.x.trunc();
    }

    /// Fire an arrow from the top-center. Returns `None` while on cooldown or feared.
    pub fn shoot(&mut self) -> Option<Arrow> {
        if !self.ready_to_shoot || self.feared {
            return None;
        }
        self.shoot_timer.reset(true);
        self.ready_to_shoot = false;

        let origin = Vec2::new(
            self.rect.center().x - ARROW_SIZE.0 / 2.0,
            self.rect.top() - ARROW_SIZE.1,
        );
        Some(Arrow::new(origin, Heading::Up))
    }

    pub fn set_speed_buff(&mut self, on: bool) {
        self.current_speed = if on {
            START_SPEED * SPEED_MULTIPLIER
        } else {
            START_SPEED
        };
    }

    /// Changing the fire rate restarts the cooldown at the new length
    pub fn set_fire_rate_buff(&mut self, on: bool) {
        self.fire_rate = if on {
            START_FIRE_RATE * FIRE_RATE_MULTIPLIER
        } else {
            START_FIRE_RATE
        };
        self.shoot_timer = Timer::new(cooldown_ms(self.fire_rate), true);
    }

    /// Re-center for a new level, keeping the archer ready to fire
    pub fn reset(&mut self, speed_buff: bool, fire_rate_buff: bool) {
        self.x = Self::center_x();
        self.rect.x = self.x;
        self.ready_to_shoot = true;
        self.feared = false;
        self.shoot_timer.reset(false);
        self.set_speed_buff(speed_buff);
        self.set_fire_rate_buff(fire_rate_buff);
    }
}
