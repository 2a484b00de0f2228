//! Skeleton: descends, spirals inward, then exits sideways while shooting
//!
//! Path phases:
//! - `Descending` straight down until the top edge reaches the spiral midline
//! - `Spiraling` with radius and angle both shrinking linearly over
//!   `NUM_ROTATIONS` periods; velocity is `(sin θ, cos θ) * ω * r`
//! - `Exiting` straight right once the radius is used up
//!
//! A downward arrow is fired every `1 / FIRE_RATE` seconds while alive.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading_components;
use crate::sim::mob::{Behavior, Body, Mob, MobEvent, Step};
use crate::sim::projectile::{Arrow, Heading};
use crate::sim::rect::Rect;
use crate::sim::timer::Timer;

pub const HEALTH: u32 = 4;
pub const POINTS: u32 = 25;

/// Spiral starting radius; also the midline where the spiral begins
pub const START_RADIUS: f32 = (SCREEN_HEIGHT - 2.0 * BLOCK_SIDE) / 2.0;
pub const NUM_ROTATIONS: f32 = 4.0;
/// Seconds per rotation
pub const PERIOD: f32 = 3.0;
pub const TOTAL_SPIRAL_TIME: f32 = PERIOD * NUM_ROTATIONS;
/// Angular speed (radians/s)
pub const ANGULAR_SPEED: f32 = TAU / PERIOD;
/// Radius shrink rate (pixels/s)
pub const RADIUS_DECAY: f32 = START_RADIUS / TOTAL_SPIRAL_TIME;
/// Speed on the straight legs (pixels/s)
pub const STRAIGHT_SPEED: f32 = 150.0;
/// Arrows per second
pub const FIRE_RATE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Descending,
    Spiraling,
    Exiting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skeleton {
    pub phase: Phase,
    pub radius: f32,
    pub angle: f32,
    pub shoot_timer: Timer,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            phase: Phase::Descending,
            radius: START_RADIUS,
            angle: NUM_ROTATIONS * TAU,
            shoot_timer: Timer::new(1000.0 / FIRE_RATE, true),
        }
    }
}

impl Skeleton {
    pub fn update(&mut self, body: &mut Body, dt: f32) -> Step {
        let shot = self.reload(body, dt);
        self.update_speed(body, dt);
        Step::moving().with_event(shot)
    }

    fn reload(&mut self, body: &Body, dt: f32) -> Option<MobEvent> {
        self.shoot_timer.update(dt * 1000.0);
        if !self.shoot_timer.is_finished() {
            return None;
        }
        self.shoot_timer.reset(true);
        let origin = Vec2::new(body.rect.center().x - ARROW_SIZE.0 / 2.0, body.rect.bottom());
        Some(MobEvent::Shoot(Arrow::new(origin, Heading::Down)))
    }

    fn update_speed(&mut self, body: &mut Body, dt: f32) {
        match self.phase {
            Phase::Descending => {
                body.step.y = STRAIGHT_SPEED * dt;
                if body.location.y >= START_RADIUS {
                    self.phase = Phase::Spiraling;
                }
            }
            Phase::Spiraling => {
                self.radius -= RADIUS_DECAY * dt;
                self.angle -= ANGULAR_SPEED * dt;

                body.velocity = heading_components(self.angle) * (ANGULAR_SPEED * self.radius);
                body.step = body.velocity * dt;

                if self.radius <= 0.0 {
                    body.step.y = 0.0;
                    self.phase = Phase::Exiting;
                }
            }
            Phase::Exiting => {
                body.step.x = STRAIGHT_SPEED * dt;
            }
        }
    }
}

/// Spawn above the top edge, one spiral radius right of center
pub fn spawn(id: u32) -> Mob {
    let x = (SCREEN_WIDTH / 2.0 + START_RADIUS - MOB_SIZE.0 / 2.0).trunc();
    let rect = Rect::new(x, -MOB_SIZE.1, MOB_SIZE.0, MOB_SIZE.1);
    let body = Body::new(rect, Vec2::new(0.0, STRAIGHT_SPEED));
    Mob::new(id, body, HEALTH, POINTS, Behavior::Skeleton(Skeleton::default()))
}
