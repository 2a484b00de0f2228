//! Arrows: straight vertical projectiles fired by the player or by skeletons

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Arrow travel speed (pixels/s)
pub const ARROW_SPEED: f32 = 480.0;
/// Score removed when a mob arrow hits the player
pub const DAMAGE_TO_PLAYER: u32 = 20;
/// Health removed from a mob per unbuffed hit
pub const MOB_DAMAGE: u32 = 1;

/// Vertical heading; the sign doubles as the owning side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    /// Fired by the player
    Up,
    /// Fired by a mob
    Down,
}

impl Heading {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Heading::Up => -1.0,
            Heading::Down => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arrow {
    pub pos: Vec2,
    pub heading: Heading,
    pub rect: Rect,
}

impl Arrow {
    /// Arrow whose top-left corner is at `pos`
    pub fn new(pos: Vec2, heading: Heading) -> Self {
        let mut rect = Rect::at(pos, ARROW_SIZE);
        rect.snap_to(pos);
        Self { pos, heading, rect }
    }

    /// Advance along the heading by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.pos.y += self.heading.sign() * ARROW_SPEED * dt;
        self.rect.snap_to(self.pos);
    }

    /// Fully above the top edge or below the bottom edge
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() < 0.0 || self.rect.top() > SCREEN_HEIGHT
    }

    pub fn hits(&self, target: &Rect) -> bool {
        self.rect.intersects(target)
    }
}
