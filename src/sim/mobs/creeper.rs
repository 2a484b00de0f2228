//! Creeper: homes in on the player and explodes on contact
//!
//! The heading is recomputed every frame from the center-to-center offset.
//! The creeper blows up when it touches the player or reaches the bottom
//! edge; if the player was within the blast radius the controller deducts
//! a score penalty.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading_components;
use crate::sim::mob::{Behavior, Body, Mob, MobContext, MobEvent, Motion, Step};
use crate::sim::rect::Rect;

pub const HEALTH: u32 = 3;
pub const POINTS: u32 = 40;
/// Pursuit speed (pixels/s)
pub const SPEED: f32 = 200.0;
/// Blast radius measured center to center (pixels)
pub const EXPLOSION_RADIUS: f32 = 100.0;
/// Score lost when the player is caught in the blast
pub const EXPLOSION_PENALTY: u32 = 40;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creeper {
    /// Offset from the creeper to the player as of the last pursuit step
    pub to_player: Vec2,
    /// Heading measured from straight down, positive toward +x
    pub angle: f32,
}

impl Creeper {
    pub fn new(spawn_rect: &Rect, player: &Rect) -> Self {
        Self {
            to_player: Vec2::new(spawn_rect.x - player.x, SCREEN_HEIGHT - player.height),
            angle: 0.0,
        }
    }

    pub fn update(&mut self, body: &mut Body, ctx: &MobContext<'_>, dt: f32) -> Step {
        if body.rect.intersects(ctx.player) || body.rect.bottom() >= SCREEN_HEIGHT {
            return Step {
                motion: Motion::Detonate,
                event: Some(self.detonate()),
            };
        }

        self.to_player = ctx.player.center() - body.rect.center();
        self.angle = self.to_player.x.atan2(self.to_player.y);
        body.velocity = heading_components(self.angle) * SPEED;
        body.step = body.velocity * dt;
        Step::moving()
    }

    /// Blast signal; the player is caught if they were inside the radius
    pub fn detonate(&self) -> MobEvent {
        MobEvent::Exploded {
            player_caught: self.to_player.length() < EXPLOSION_RADIUS,
        }
    }
}

/// Spawn just above the top edge at column `x`
pub fn spawn(id: u32, x: f32, player: &Rect) -> Mob {
    let rect = Rect::new(x, -MOB_SIZE.1, MOB_SIZE.0, MOB_SIZE.1);
    let creeper = Creeper::new(&rect, player);
    let body = Body::new(rect, Vec2::new(0.0, SPEED));
    Mob::new(id, body, HEALTH, POINTS, Behavior::Creeper(creeper))
}

pub fn max_spawn_x() -> f32 {
    SCREEN_WIDTH - MOB_SIZE.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::Actor;
    use crate::sim::mob::MobState;

    #[test]
    fn test_heads_toward_player() {
        let actor = Actor::default();
        let ctx = MobContext {
            player: &actor.rect,
        };
        let mut mob = spawn(1, 0.0, &actor.rect);
        let start = mob.body.rect.center();
        mob.update(&ctx, 0.1);

        let moved = mob.body.location - Vec2::new(0.0, -MOB_SIZE.1);
        assert!(moved.x > 0.0, "player is to the right");
        assert!(moved.y > 0.0, "player is below");
        assert!((moved.length() - SPEED * 0.1).abs() < 1e-3);

        let toward = actor.rect.center() - start;
        assert!(moved.normalize().dot(toward.normalize()) > 0.999);
    }

    #[test]
    fn test_explodes_on_contact_with_penalty() {
        let actor = Actor::default();
        let ctx = MobContext {
            player: &actor.rect,
        };
        let x = actor.rect.x;
        let mut mob = spawn(1, x, &actor.rect);

        let mut event = None;
        for _ in 0..1000 {
            event = mob.update(&ctx, 1.0 / 60.0);
            if mob.state != MobState::Alive {
                break;
            }
        }
        assert_eq!(mob.state, MobState::Dying);
        assert!(matches!(
            event,
            Some(MobEvent::Exploded {
                player_caught: true
            })
        ));
    }

    #[test]
    fn test_killed_creeper_explodes_on_next_update() {
        let actor = Actor::default();
        let ctx = MobContext {
            player: &actor.rect,
        };
        let mut mob = spawn(1, 0.0, &actor.rect);
        mob.update(&ctx, 1.0 / 60.0);

        assert_eq!(mob.apply_damage(true, false), POINTS);
        assert_eq!(mob.state, MobState::Dying);

        // Far from the player, so no penalty
        let event = mob.update(&ctx, 1.0 / 60.0);
        assert!(matches!(
            event,
            Some(MobEvent::Exploded {
                player_caught: false
            })
        ));
        // Delivered exactly once
        assert!(mob.update(&ctx, 1.0 / 60.0).is_none());
    }
}
