//! Mobs: the shared lifecycle every enemy goes through
//!
//! Each mob is `Alive` until its health runs out (`Dying`, then `Dead` once
//! the death animation ends) or it leaves the playfield (`Out`). `Out` and
//! `Dead` are terminal and tell the controller to drop the mob.
//!
//! Per-kind motion and special cases live in [`Behavior`], a closed sum
//! type over the five kinds in `sim::mobs`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::mobs::{Creeper, Enderman, Pillager, Skeleton, Villager};
use super::projectile::{Arrow, MOB_DAMAGE};
use super::rect::Rect;
use super::timer::Timer;
use crate::consts::*;

/// Health multiplier applied per hit while the damage buff is on
pub const DAMAGE_MULTIPLIER: u32 = 3;
/// Award multiplier while the points buff is on
pub const POINTS_MULTIPLIER: u32 = 2;

/// Enemy kinds, in kill-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MobKind {
    Villager,
    Creeper,
    Skeleton,
    Pillager,
    Enderman,
}

impl MobKind {
    pub const ALL: [MobKind; NUM_MOB_KINDS] = [
        MobKind::Villager,
        MobKind::Creeper,
        MobKind::Skeleton,
        MobKind::Pillager,
        MobKind::Enderman,
    ];

    /// Slot in per-kind tables (spawn odds, kill counts)
    pub fn index(self) -> usize {
        match self {
            MobKind::Villager => 0,
            MobKind::Creeper => 1,
            MobKind::Skeleton => 2,
            MobKind::Pillager => 3,
            MobKind::Enderman => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MobKind::Villager => "Villager",
            MobKind::Creeper => "Creeper",
            MobKind::Skeleton => "Skeleton",
            MobKind::Pillager => "Pillager",
            MobKind::Enderman => "Enderman",
        }
    }
}

/// Lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MobState {
    Alive,
    /// Death animation playing; no movement, not a collision target
    Dying,
    /// Left the playfield; no points
    Out,
    Dead,
}

impl MobState {
    /// Out and Dead both mean "remove from the live set"
    pub fn is_terminal(self) -> bool {
        matches!(self, MobState::Out | MobState::Dead)
    }
}

/// Which sprite the death animation shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathSprite {
    Remains,
    Explosion,
}

impl DeathSprite {
    fn size(self) -> (f32, f32) {
        match self {
            DeathSprite::Remains => DYING_SIZE,
            DeathSprite::Explosion => EXPLOSION_SIZE,
        }
    }
}

/// One-way signals from a mob to the controller
#[derive(Debug, Clone)]
pub enum MobEvent {
    /// A skeleton loosed an arrow
    Shoot(Arrow),
    /// A creeper blew up; `player_caught` if the player was inside the blast radius
    Exploded { player_caught: bool },
    /// An enderman began charging a teleport; the player freezes
    FearStarted,
    /// The charge ended; the player may move again
    FearEnded,
}

/// Read-only view of the world a mob may react to
#[derive(Debug, Clone, Copy)]
pub struct MobContext<'a> {
    pub player: &'a Rect,
}

/// Location and motion shared by every kind
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Exact top-left position; `rect` is snapped from it
    pub location: Vec2,
    /// Current velocity (pixels/s)
    pub velocity: Vec2,
    /// Displacement to apply this frame
    pub step: Vec2,
    pub rect: Rect,
}

impl Body {
    pub fn new(rect: Rect, velocity: Vec2) -> Self {
        Self {
            location: rect.top_left(),
            velocity,
            step: Vec2::ZERO,
            rect,
        }
    }

    /// Jump to `location` without moving through the space between
    pub fn place(&mut self, location: Vec2) {
        self.location = location;
        self.rect.snap_to(location);
    }

    /// Apply this frame's step. Returns true if the body left the playfield.
    ///
    /// Only the left, right and bottom edges count; mobs enter from above.
    pub fn advance(&mut self) -> bool {
        self.location += self.step;
        self.rect.snap_to(self.location);
        self.rect.left() > SCREEN_WIDTH
            || self.rect.right() < 0.0
            || self.rect.bottom() > SCREEN_HEIGHT
    }
}

/// What the mob should do after its behavior ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Apply the step and check bounds
    Move,
    /// Stay put
    Hold,
    /// Start dying with an explosion
    Detonate,
    /// Leave the playfield
    Leave,
}

/// Result of one behavior update
#[derive(Debug, Clone)]
pub struct Step {
    pub motion: Motion,
    pub event: Option<MobEvent>,
}

impl Step {
    pub fn moving() -> Self {
        Self {
            motion: Motion::Move,
            event: None,
        }
    }

    pub fn holding() -> Self {
        Self {
            motion: Motion::Hold,
            event: None,
        }
    }

    pub fn with_event(mut self, event: Option<MobEvent>) -> Self {
        self.event = event;
        self
    }
}

/// Per-kind behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Behavior {
    Villager(Villager),
    Creeper(Creeper),
    Skeleton(Skeleton),
    Pillager(Pillager),
    Enderman(Enderman),
}

impl Behavior {
    pub fn kind(&self) -> MobKind {
        match self {
            Behavior::Villager(_) => MobKind::Villager,
            Behavior::Creeper(_) => MobKind::Creeper,
            Behavior::Skeleton(_) => MobKind::Skeleton,
            Behavior::Pillager(_) => MobKind::Pillager,
            Behavior::Enderman(_) => MobKind::Enderman,
        }
    }

    fn update(&mut self, body: &mut Body, ctx: &MobContext<'_>, dt: f32) -> Step {
        match self {
            Behavior::Villager(villager) => villager.update(body, dt),
            Behavior::Creeper(creeper) => creeper.update(body, ctx, dt),
            Behavior::Skeleton(skeleton) => skeleton.update(body, dt),
            Behavior::Pillager(pillager) => pillager.update(body, dt),
            Behavior::Enderman(enderman) => enderman.update(body, ctx, dt),
        }
    }
}

/// Health removed by one arrow
#[inline]
pub fn damage_per_hit(damage_buff: bool) -> u32 {
    (damage_buff as u32 * DAMAGE_MULTIPLIER).max(1) * MOB_DAMAGE
}

/// Points awarded for a kill worth `award_points`
#[inline]
pub fn points_for_kill(points_buff: bool, award_points: u32) -> u32 {
    (points_buff as u32 * POINTS_MULTIPLIER).max(1) * award_points
}

/// An enemy on the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mob {
    pub id: u32,
    pub body: Body,
    pub health: u32,
    pub award_points: u32,
    pub state: MobState,
    pub dying_timer: Timer,
    pub dying_rect: Rect,
    pub death_sprite: DeathSprite,
    pub behavior: Behavior,
    /// Signal raised outside `update` (a creeper killed by an arrow), delivered on the next update
    #[serde(skip)]
    pending: Option<MobEvent>,
}

impl Mob {
    pub fn new(id: u32, body: Body, health: u32, award_points: u32, behavior: Behavior) -> Self {
        Self {
            id,
            body,
            health,
            award_points,
            state: MobState::Alive,
            dying_timer: Timer::new(DYING_TIME_MS, false),
            dying_rect: Rect::at(Vec2::ZERO, DYING_SIZE),
            death_sprite: DeathSprite::Remains,
            behavior,
            pending: None,
        }
    }

    pub fn kind(&self) -> MobKind {
        self.behavior.kind()
    }

    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    pub fn is_alive(&self) -> bool {
        self.state == MobState::Alive
    }

    /// Advance the mob by `dt` seconds, returning any signal for the controller
    pub fn update(&mut self, ctx: &MobContext<'_>, dt: f32) -> Option<MobEvent> {
        let pending = self.pending.take();
        let event = match self.state {
            MobState::Alive => self.update_alive(ctx, dt),
            MobState::Dying => {
                self.update_dying(dt);
                None
            }
            MobState::Out | MobState::Dead => None,
        };
        pending.or(event)
    }

    fn update_alive(&mut self, ctx: &MobContext<'_>, dt: f32) -> Option<MobEvent> {
        let Step { motion, event } = self.behavior.update(&mut self.body, ctx, dt);
        match motion {
            Motion::Move => {
                if self.body.advance() {
                    log::debug!("{} #{} left the playfield", self.kind().as_str(), self.id);
                    self.state = MobState::Out;
                }
            }
            Motion::Hold => {}
            Motion::Detonate => self.begin_dying(DeathSprite::Explosion),
            Motion::Leave => self.state = MobState::Out,
        }
        event
    }

    fn update_dying(&mut self, dt: f32) {
        self.dying_timer.update(dt * 1000.0);
        if self.dying_timer.is_finished() {
            self.state = MobState::Dead;
        }
    }

    fn begin_dying(&mut self, sprite: DeathSprite) {
        self.state = MobState::Dying;
        self.dying_timer.activate();
        self.death_sprite = sprite;
        self.dying_rect = Rect::centered_on(self.body.rect.center(), sprite.size());
    }

    /// Take one arrow hit. Returns the points earned, which is non-zero only on the killing blow.
    ///
    /// A shielded pillager loses its shield instead of health.
    pub fn apply_damage(&mut self, damage_buff: bool, points_buff: bool) -> u32 {
        if self.state != MobState::Alive {
            return 0;
        }

        if let Behavior::Pillager(pillager) = &mut self.behavior {
            if pillager.absorb_hit() {
                log::debug!("Pillager #{} shield broken", self.id);
                return 0;
            }
        }

        self.health = self.health.saturating_sub(damage_per_hit(damage_buff));
        if self.health > 0 {
            return 0;
        }

        let sprite = match &self.behavior {
            Behavior::Creeper(creeper) => {
                self.pending = Some(creeper.detonate());
                DeathSprite::Explosion
            }
            _ => DeathSprite::Remains,
        };
        self.begin_dying(sprite);
        points_for_kill(points_buff, self.award_points)
    }
}
