//! Enderman: teleports between preset spots, then appears right above the player
//!
//! The enderman alternates between charging a teleport (a ghost image in the
//! middle of the screen, during which the player is frozen by fear) and
//! standing at a stop. The first stop is fixed, the middle stops are drawn
//! from a route shuffled at spawn, and the last stop is directly above the
//! player. After the last stay it charges once more and leaves.

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::mob::{Behavior, Body, Mob, MobContext, MobEvent, Motion, Step};
use crate::sim::rect::Rect;
use crate::sim::timer::Timer;

pub const HEALTH: u32 = 5;
pub const POINTS: u32 = 100;
/// Number of stops before leaving
pub const NUM_STOPS: u32 = 5;
/// Time spent standing at each stop (ms)
pub const STAY_TIME_MS: f32 = 3000.0;
/// Time spent charging each teleport (ms)
pub const TELEPORT_TIME_MS: f32 = 500.0;
/// Preset stops; the first is always used first
pub const TELEPORT_SPOTS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(300.0, 60.0),
    Vec2::new(80.0, 400.0),
    Vec2::new(600.0, 105.0),
];
/// Where the body waits while charging, out of reach of arrows
pub const HIDDEN_X: f32 = -100.0;
/// Side of the square ghost image shown while charging
pub const GHOST_SIDE: f32 = BLOCK_SIDE * 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Teleporting,
    Stopped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enderman {
    pub phase: Phase,
    /// Stops reached so far
    pub stage: u32,
    pub stop_timer: Timer,
    pub teleport_timer: Timer,
    /// Shuffled indices into `TELEPORT_SPOTS` for the middle stops
    pub route: Vec<usize>,
    /// Fear has been raised for the current charge
    fear_raised: bool,
}

impl Enderman {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut route = vec![1, 2, 3];
        route.shuffle(rng);
        Self {
            phase: Phase::Teleporting,
            stage: 0,
            stop_timer: Timer::new(STAY_TIME_MS, false),
            teleport_timer: Timer::new(TELEPORT_TIME_MS, true),
            route,
            fear_raised: false,
        }
    }

    pub fn update(&mut self, body: &mut Body, ctx: &MobContext<'_>, dt: f32) -> Step {
        match self.phase {
            Phase::Teleporting => self.update_teleporting(body, ctx, dt),
            Phase::Stopped => self.update_stopped(body, dt),
        }
    }

    fn update_teleporting(&mut self, body: &mut Body, ctx: &MobContext<'_>, dt: f32) -> Step {
        let mut event = None;
        if !self.fear_raised {
            self.fear_raised = true;
            event = Some(MobEvent::FearStarted);
        }

        self.teleport_timer.update(dt * 1000.0);
        if !self.teleport_timer.is_finished() {
            return Step::holding().with_event(event);
        }

        // Started and ended within one update: nothing to report
        event = match event {
            Some(_) => None,
            None => Some(MobEvent::FearEnded),
        };
        self.fear_raised = false;

        if self.stage >= NUM_STOPS {
            return Step {
                motion: Motion::Leave,
                event,
            };
        }

        self.teleport(body, ctx);
        self.phase = Phase::Stopped;
        self.stop_timer.reset(true);
        Step::holding().with_event(event)
    }

    fn update_stopped(&mut self, body: &mut Body, dt: f32) -> Step {
        self.stop_timer.update(dt * 1000.0);
        if !self.stop_timer.is_finished() {
            return Step::holding();
        }

        self.teleport_timer.reset(true);
        self.phase = Phase::Teleporting;
        self.stage += 1;
        self.fear_raised = true;
        body.place(Vec2::new(HIDDEN_X, body.location.y));
        Step::holding().with_event(Some(MobEvent::FearStarted))
    }

    /// Pick the stop for the current stage and jump there
    fn teleport(&self, body: &mut Body, ctx: &MobContext<'_>) {
        let spot = match self.stage {
            0 => TELEPORT_SPOTS[0],
            stage if stage < NUM_STOPS - 1 => {
                let leg = (stage as usize - 1) % self.route.len();
                TELEPORT_SPOTS[self.route[leg]]
            }
            _ => {
                log::debug!("Enderman closing in on the player");
                Vec2::new(ctx.player.x, ctx.player.y - body.rect.height)
            }
        };
        body.place(spot);
    }

    /// Ghost image drawn while charging, centered on the screen
    pub fn ghost_rect() -> Rect {
        Rect::new(
            ((SCREEN_WIDTH - GHOST_SIDE) / 2.0).trunc(),
            ((SCREEN_HEIGHT - GHOST_SIDE) / 2.0).trunc(),
            GHOST_SIDE,
            GHOST_SIDE,
        )
    }
}

/// Spawn hidden above and left of the playfield, already charging
pub fn spawn<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Mob {
    let rect = Rect::new(HIDDEN_X, HIDDEN_X, ENDERMAN_SIZE.0, ENDERMAN_SIZE.1);
    let body = Body::new(rect, Vec2::ZERO);
    Mob::new(id, body, HEALTH, POINTS, Behavior::Enderman(Enderman::new(rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::Actor;
    use crate::sim::mob::MobState;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;

    fn enderman_of(mob: &Mob) -> &Enderman {
        match &mob.behavior {
            Behavior::Enderman(enderman) => enderman,
            _ => panic!("not an enderman"),
        }
    }

    #[test]
    fn test_route_is_a_permutation() {
        let mut rng = Pcg32::seed_from_u64(7);
        let enderman = Enderman::new(&mut rng);
        let mut route = enderman.route.clone();
        route.sort();
        assert_eq!(route, vec![1, 2, 3]);
    }

    #[test]
    fn test_full_cycle_visits_stops_then_leaves() {
        let mut rng = Pcg32::seed_from_u64(42);
        let actor = Actor::default();
        let ctx = MobContext {
            player: &actor.rect,
        };
        let mut mob = spawn(1, &mut rng);

        let mut fear_depth: i32 = 0;
        let mut stops = Vec::new();
        let mut frames = 0;
        while mob.state == MobState::Alive {
            let was_stopped = enderman_of(&mob).phase == Phase::Stopped;
            match mob.update(&ctx, DT) {
                Some(MobEvent::FearStarted) => fear_depth += 1,
                Some(MobEvent::FearEnded) => fear_depth -= 1,
                _ => {}
            }
            assert!((0..=1).contains(&fear_depth));

            let now_stopped = enderman_of(&mob).phase == Phase::Stopped;
            if now_stopped && !was_stopped {
                stops.push(mob.body.location);
                assert_eq!(fear_depth, 0, "player is free while the enderman stands");
            }
            frames += 1;
            assert!(frames < 60 * 60);
        }

        assert_eq!(mob.state, MobState::Out);
        assert_eq!(fear_depth, 0, "fear is released on exit");
        assert_eq!(stops.len(), NUM_STOPS as usize);
        assert_eq!(stops[0], TELEPORT_SPOTS[0]);
        for spot in &stops[1..4] {
            assert!(TELEPORT_SPOTS[1..].contains(spot));
        }
        let last = stops[4];
        assert_eq!(last.x, actor.rect.x);
        assert_eq!(last.y, actor.rect.y - ENDERMAN_SIZE.1);
    }

    #[test]
    fn test_hidden_while_charging() {
        let mut rng = Pcg32::seed_from_u64(1);
        let actor = Actor::default();
        let ctx = MobContext {
            player: &actor.rect,
        };
        let mut mob = spawn(1, &mut rng);
        mob.update(&ctx, DT);
        assert!(mob.rect().right() < 0.0);
    }
}
