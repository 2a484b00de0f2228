//! Per-frame controller
//!
//! Advances the archer, both arrow pools and every mob, resolves hits, then
//! runs the spawner and the level-end check. Works with any positive frame
//! delta; all motion and timers are scaled by it.

use super::actor::MoveIntent;
use super::collision::{first_alive_hit, hits_player};
use super::mob::{MobContext, MobEvent};
use super::mobs::creeper::EXPLOSION_PENALTY;
use super::projectile::DAMAGE_TO_PLAYER;
use super::state::{GamePhase, GameState};

/// Input sample for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Fire key is down this frame
    pub fire_held: bool,
    /// Fire key went down this frame
    pub fire_pressed: bool,
}

impl TickInput {
    /// Derive the fire edge from the previous frame's sample
    pub fn with_previous(mut self, previous: &TickInput) -> Self {
        self.fire_pressed = self.fire_held && !previous.fire_held;
        self
    }

    fn intent(&self) -> MoveIntent {
        MoveIntent {
            left: self.move_left,
            right: self.move_right,
        }
    }
}

/// What the frame produced for the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Nothing left to spawn and the field is empty
    pub level_complete: bool,
}

/// Advance the session by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    if state.phase != GamePhase::Playing {
        return TickOutcome {
            level_complete: true,
        };
    }
    state.time_ticks += 1;

    update_actor(state, input, dt);
    update_player_arrows(state, dt);
    update_mob_arrows(state, dt);
    update_mobs(state, dt);

    let level_complete = update_spawner(state, dt);
    if level_complete {
        state.complete_level();
    }
    TickOutcome { level_complete }
}

fn update_actor(state: &mut GameState, input: &TickInput, dt: f32) {
    state.actor.update(input.intent(), dt);
    if !input.fire_pressed {
        return;
    }
    if let Some(arrow) = state.actor.shoot() {
        state.counters.shots_fired += 1;
        state.game_shots_fired += 1;
        state.player_arrows.push(arrow);
    }
}

/// Move player arrows and let each one strike at most one live mob
fn update_player_arrows(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.player_arrows.len() {
        state.player_arrows[i].advance(dt);
        if state.player_arrows[i].is_off_screen() {
            state.player_arrows.remove(i);
            continue;
        }

        let Some(target) = first_alive_hit(&state.player_arrows[i], &state.mobs) else {
            i += 1;
            continue;
        };

        let mob = &mut state.mobs[target];
        let points = mob.apply_damage(state.buffs.damage, state.buffs.points);
        state.counters.hits += 1;
        state.game_hits += 1;
        if points > 0 {
            let kind = mob.kind();
            log::debug!("{} #{} killed for {points}", kind.as_str(), mob.id);
            state.score += points;
            state.counters.kills += 1;
            state.kills_by_type[kind.index()] += 1;
        }
        state.player_arrows.remove(i);
    }
}

/// Move mob arrows; a hit on the archer costs score and every buff
fn update_mob_arrows(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.mob_arrows.len() {
        state.mob_arrows[i].advance(dt);
        if state.mob_arrows[i].is_off_screen() {
            state.mob_arrows.remove(i);
            continue;
        }
        if hits_player(&state.mob_arrows[i], &state.actor.rect) {
            log::debug!("Archer hit, -{DAMAGE_TO_PLAYER}");
            state.deduct(DAMAGE_TO_PLAYER);
            state.clear_buffs();
            state.mob_arrows.remove(i);
            continue;
        }
        i += 1;
    }
}

/// Run mob behaviors, act on their signals and drop terminal mobs
fn update_mobs(state: &mut GameState, dt: f32) {
    let player = state.actor.rect;
    let ctx = MobContext { player: &player };

    let mut i = 0;
    while i < state.mobs.len() {
        match state.mobs[i].update(&ctx, dt) {
            Some(MobEvent::Shoot(arrow)) => state.mob_arrows.push(arrow),
            Some(MobEvent::Exploded { player_caught }) => {
                if player_caught {
                    log::debug!("Archer caught in a blast, -{EXPLOSION_PENALTY}");
                    state.deduct(EXPLOSION_PENALTY);
                }
            }
            Some(MobEvent::FearStarted) => state.fear_holds += 1,
            Some(MobEvent::FearEnded) => state.fear_holds = state.fear_holds.saturating_sub(1),
            None => {}
        }

        if state.mobs[i].state.is_terminal() {
            state.mobs.remove(i);
        } else {
            i += 1;
        }
    }

    state.actor.feared = state.fear_holds > 0;
}

/// Spawn on cadence. Returns true once the level is exhausted.
fn update_spawner(state: &mut GameState, dt: f32) -> bool {
    state.spawn_timer.update(dt * 1000.0);
    let cap = state.level_tuning().max_concurrent;

    if state.spawn_timer.is_finished() && state.mobs.len() < cap && state.mobs_left > 0 {
        state.spawn_random();
        state.spawn_timer.reset(true);
        false
    } else {
        state.mobs_left == 0 && state.mobs.is_empty()
    }
}

impl GameState {
    /// Advance by an arbitrary frame delta
    pub fn advance(&mut self, dt: f32, input: &TickInput) -> TickOutcome {
        tick(self, input, dt)
    }
}
