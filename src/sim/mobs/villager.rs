//! Villager: drifts across the screen from the left edge

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::mob::{Behavior, Body, Mob, Step};
use crate::sim::rect::Rect;

pub const HEALTH: u32 = 1;
pub const POINTS: u32 = 10;
/// Horizontal speed (pixels/s)
pub const SPEED: f32 = 250.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Villager;

impl Villager {
    pub fn update(&mut self, body: &mut Body, dt: f32) -> Step {
        body.step.x = body.velocity.x * dt;
        Step::moving()
    }
}

/// Spawn just off the left edge at height `y`
pub fn spawn(id: u32, y: f32) -> Mob {
    let rect = Rect::new(-MOB_SIZE.0, y, MOB_SIZE.0, MOB_SIZE.1);
    let body = Body::new(rect, Vec2::new(SPEED, 0.0));
    Mob::new(id, body, HEALTH, POINTS, Behavior::Villager(Villager))
}

/// Highest spawn height that keeps the villager above the player row
pub fn max_spawn_y() -> f32 {
    SCREEN_HEIGHT - BLOCK_SIDE - MOB_SIZE.1
}
