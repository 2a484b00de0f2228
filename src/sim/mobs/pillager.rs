//! Pillager: drifts right while bobbing on a sine wave, behind a one-hit shield

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::mob::{Behavior, Body, Mob, Step};
use crate::sim::rect::Rect;

pub const HEALTH: u32 = 2;
pub const POINTS: u32 = 25;
/// Peak-to-trough half height of the wave (pixels)
pub const CUSP: f32 = 100.0;
/// Wave periods completed while crossing the screen
pub const NUM_PERIODS: f32 = 1.5;
pub const WAVELENGTH: f32 = (SCREEN_WIDTH / NUM_PERIODS) as i32 as f32;
/// Seconds per wave period
pub const PERIOD: f32 = 5.0;
pub const ANGULAR_SPEED: f32 = TAU / PERIOD;
/// Peak vertical speed (pixels/s)
pub const AMPLITUDE: f32 = TAU * CUSP / PERIOD;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pillager {
    pub angle: f32,
    pub shielded: bool,
}

impl Default for Pillager {
    fn default() -> Self {
        Self {
            angle: TAU * NUM_PERIODS,
            shielded: true,
        }
    }
}

impl Pillager {
    pub fn update(&mut self, body: &mut Body, dt: f32) -> Step {
        self.angle -= ANGULAR_SPEED * dt;
        body.velocity.y = self.angle.sin() * AMPLITUDE;
        body.step = body.velocity * dt;
        Step::moving()
    }

    /// Consume the shield if present. Returns true if the hit was absorbed.
    pub fn absorb_hit(&mut self) -> bool {
        std::mem::replace(&mut self.shielded, false)
    }

    /// Shield overlay, anchored to the bottom-right of the pillager
    pub fn shield_rect(&self, body: &Body) -> Option<Rect> {
        self.shielded.then(|| {
            Rect::new(
                body.rect.right() - SHIELD_SIZE.0,
                body.rect.bottom() - SHIELD_SIZE.1,
                SHIELD_SIZE.0,
                SHIELD_SIZE.1,
            )
        })
    }
}

/// Spawn just off the left edge at height `y`
pub fn spawn(id: u32, y: f32) -> Mob {
    let rect = Rect::new(-MOB_SIZE.0, y, MOB_SIZE.0, MOB_SIZE.1);
    let body = Body::new(rect, Vec2::new(WAVELENGTH / PERIOD, 0.0));
    Mob::new(id, body, HEALTH, POINTS, Behavior::Pillager(Pillager::default()))
}

/// Highest spawn height that keeps the whole wave above the player row
pub fn max_spawn_y() -> f32 {
    SCREEN_HEIGHT - BLOCK_SIDE - MOB_SIZE.1 - 2.0 * CUSP
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::mob::{MobContext, MobState};

    #[test]
    fn test_shield_absorbs_first_hit_only() {
        let mut mob = spawn(1, 100.0);
        let health = mob.health;

        assert_eq!(mob.apply_damage(false, false), 0);
        assert_eq!(mob.health, health);
        assert_eq!(mob.state, MobState::Alive);

        // Second hit takes health but does not kill (2 hp)
        assert_eq!(mob.apply_damage(false, false), 0);
        assert_eq!(mob.health, health - 1);

        assert_eq!(mob.apply_damage(false, true), POINTS * 2);
        assert_eq!(mob.state, MobState::Dying);
    }

    #[test]
    fn test_wave_stays_within_cusp_band() {
        let player = Rect::new(0.0, 576.0, 64.0, 64.0);
        let ctx = MobContext { player: &player };
        let start_y = 100.0;
        let mut mob = spawn(1, start_y);
        let mut lowest = start_y;
        let mut highest = start_y;

        while mob.state == MobState::Alive {
            mob.update(&ctx, 1.0 / 120.0);
            lowest = lowest.max(mob.body.location.y);
            highest = highest.min(mob.body.location.y);
        }

        assert_eq!(mob.state, MobState::Out);
        assert!(highest >= start_y - 1.0);
        assert!(lowest <= start_y + 2.0 * CUSP + 1.0);
        assert!(lowest > start_y + CUSP);
    }

    #[test]
    fn test_shield_overlay_disappears() {
        let mut mob = spawn(1, 100.0);
        let Behavior::Pillager(pillager) = &mut mob.behavior else {
            panic!("not a pillager");
        };
        assert!(pillager.shield_rect(&mob.body).is_some());
        pillager.absorb_hit();
        assert!(pillager.shield_rect(&mob.body).is_none());
    }
}
