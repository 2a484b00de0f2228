//! Session and level state
//!
//! `GameState` owns everything the frame controller touches: the archer, the
//! live mobs, both arrow pools, the score economy and the level sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::actor::Actor;
use super::economy::{Buff, Buffs, PurchaseError, check_purchase};
use super::mob::{Mob, MobKind};
use super::mobs::{creeper, enderman, pillager, skeleton, villager};
use super::projectile::Arrow;
use super::timer::Timer;
use crate::consts::*;
use crate::percent;
use crate::stats::LifetimeStats;
use crate::tuning::{LevelTuning, MAX_DRAW, Tuning, TuningError};

/// Where the session is in the level sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// A level is running
    Playing,
    /// Level cleared; the shop is open until the next level starts
    LevelComplete,
    /// Final level cleared
    GameComplete,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("level {0} is still in progress")]
    LevelInProgress(u32),

    #[error("there is no level after {0}")]
    NoMoreLevels(u32),

    #[error("the game is not complete")]
    GameNotComplete,
}

/// Per-level counters, reset when a level starts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounters {
    pub shots_fired: u32,
    pub hits: u32,
    pub kills: u32,
}

/// End-of-level summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReport {
    pub level: u32,
    /// Score earned during this level alone, negative for a losing level
    pub score: i64,
    pub kills: u32,
    pub hits: u32,
    pub shots_fired: u32,
    pub hit_percent: u32,
}

#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed, kept for logging and replays
    pub seed: u64,
    pub tuning: Tuning,
    rng: Pcg32,
    pub phase: GamePhase,
    /// Total score, never negative
    pub score: u32,
    /// Current level (1-based)
    pub level: u32,
    pub counters: LevelCounters,
    /// Kills per kind over the whole game
    pub kills_by_type: [u32; NUM_MOB_KINDS],
    /// Mobs still to spawn this level
    pub mobs_left: u32,
    pub spawn_timer: Timer,
    pub buffs: Buffs,
    pub actor: Actor,
    pub mobs: Vec<Mob>,
    pub player_arrows: Vec<Arrow>,
    pub mob_arrows: Vec<Arrow>,
    /// Score earned in each finished level, net of purchases. Sums to `score`.
    pub level_scores: Vec<i64>,
    pub reports: Vec<LevelReport>,
    /// Shots and hits over the whole game
    pub game_shots_fired: u32,
    pub game_hits: u32,
    /// Number of fear signals currently holding the archer still
    pub fear_holds: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Fresh session with the shipped balance
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default(), Pcg32::seed_from_u64(seed))
    }

    /// Fresh session with external tuning, rejected if the tables are malformed
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning, Pcg32::seed_from_u64(seed)))
    }

    fn build(seed: u64, tuning: Tuning, rng: Pcg32) -> Self {
        let first = tuning.level(1).clone();
        log::info!("Session started (seed {seed}), level 1 with {} mobs", first.mob_quota);
        Self {
            seed,
            tuning,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            level: 1,
            counters: LevelCounters::default(),
            kills_by_type: [0; NUM_MOB_KINDS],
            mobs_left: first.mob_quota,
            spawn_timer: Timer::new(first.spawn_interval_ms, true),
            buffs: Buffs::default(),
            actor: Actor::default(),
            mobs: Vec::new(),
            player_arrows: Vec::new(),
            mob_arrows: Vec::new(),
            level_scores: Vec::new(),
            reports: Vec::new(),
            game_shots_fired: 0,
            game_hits: 0,
            fear_holds: 0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn level_tuning(&self) -> &LevelTuning {
        self.tuning.level(self.level)
    }

    pub fn is_buff_on(&self, buff: Buff) -> bool {
        self.buffs.is_on(buff)
    }

    /// Hit percentage for the running level
    pub fn level_hit_percent(&self) -> u32 {
        percent(self.counters.hits, self.counters.shots_fired)
    }

    /// Hit percentage over every level played so far
    pub fn game_hit_percent(&self) -> u32 {
        percent(self.game_hits, self.game_shots_fired)
    }

    /// Deduct a penalty, stopping at zero
    pub fn deduct(&mut self, amount: u32) {
        self.score = self.score.saturating_sub(amount);
    }

    /// Draw a kind from the level's spawn table and put it on the field
    pub fn spawn_random(&mut self) -> MobKind {
        let draw = self.rng.random_range(1..=MAX_DRAW);
        self.spawn_from_draw(draw)
    }

    /// Spawn the kind a given draw selects. Counts against the level quota.
    pub fn spawn_from_draw(&mut self, draw: u32) -> MobKind {
        let kind = self.level_tuning().spawn_table.pick(draw);
        self.spawn(kind);
        kind
    }

    /// Place a new mob of `kind` at its entry edge
    pub fn spawn(&mut self, kind: MobKind) {
        let id = self.next_entity_id();
        let mob = match kind {
            MobKind::Villager => {
                let y = self.random_coord(villager::max_spawn_y());
                villager::spawn(id, y)
            }
            MobKind::Creeper => {
                let x = self.random_coord(creeper::max_spawn_x());
                creeper::spawn(id, x, &self.actor.rect)
            }
            MobKind::Skeleton => skeleton::spawn(id),
            MobKind::Pillager => {
                let y = self.random_coord(pillager::max_spawn_y());
                pillager::spawn(id, y)
            }
            MobKind::Enderman => enderman::spawn(id, &mut self.rng),
        };
        log::debug!("Spawned {} #{id} at {:?}", kind.as_str(), mob.body.location);
        self.mobs.push(mob);
        self.mobs_left = self.mobs_left.saturating_sub(1);
    }

    /// Whole-pixel coordinate in `[0, max)`
    fn random_coord(&mut self, max: f32) -> f32 {
        let max = max.max(1.0) as u32;
        self.rng.random_range(0..max) as f32
    }

    /// Close the running level and record its report
    pub(super) fn complete_level(&mut self) {
        let earlier: i64 = self.level_scores.iter().sum();
        let level_score = i64::from(self.score) - earlier;
        self.level_scores.push(level_score);

        let report = LevelReport {
            level: self.level,
            score: level_score,
            kills: self.counters.kills,
            hits: self.counters.hits,
            shots_fired: self.counters.shots_fired,
            hit_percent: self.level_hit_percent(),
        };
        log::info!(
            "Level {} complete: {} points, {} kills, {}% accuracy",
            report.level,
            report.score,
            report.kills,
            report.hit_percent
        );
        self.reports.push(report);

        self.phase = if self.level >= self.tuning.levels.len() as u32 {
            log::info!("Game complete with {} points", self.score);
            GamePhase::GameComplete
        } else {
            GamePhase::LevelComplete
        };
    }

    /// Begin the next level, keeping score and buffs
    pub fn start_next_level(&mut self) -> Result<(), SessionError> {
        match self.phase {
            GamePhase::Playing => return Err(SessionError::LevelInProgress(self.level)),
            GamePhase::GameComplete => return Err(SessionError::NoMoreLevels(self.level)),
            GamePhase::LevelComplete => {}
        }

        self.level += 1;
        let tuning = self.level_tuning().clone();
        self.counters = LevelCounters::default();
        self.mobs_left = tuning.mob_quota;
        self.spawn_timer = Timer::new(tuning.spawn_interval_ms, true);
        self.mobs.clear();
        self.player_arrows.clear();
        self.mob_arrows.clear();
        self.fear_holds = 0;
        self.actor.reset(self.buffs.speed, self.buffs.fire_rate);
        self.phase = GamePhase::Playing;

        log::info!("Level {} started with {} mobs", self.level, tuning.mob_quota);
        Ok(())
    }

    /// Buy a buff between levels
    ///
    /// The cost comes out of the total score and out of the score recorded
    /// for the level just finished. Nothing changes on failure.
    pub fn purchase_buff(&mut self, buff: Buff) -> Result<(), PurchaseError> {
        if self.phase == GamePhase::Playing {
            return Err(PurchaseError::LevelInProgress);
        }
        let cost = check_purchase(&self.buffs, &self.tuning.buff_costs, buff, self.score)?;

        self.score -= cost;
        if let Some(level_score) = self.level_scores.last_mut() {
            *level_score -= i64::from(cost);
        }
        self.buffs.set(buff, true);
        match buff {
            Buff::Speed => self.actor.set_speed_buff(true),
            Buff::FireRate => self.actor.set_fire_rate_buff(true),
            Buff::Damage | Buff::Points => {}
        }

        log::debug!("Bought {} buff for {cost}, {} left", buff.as_str(), self.score);
        Ok(())
    }

    /// Strip every buff, as when a mob arrow hits the archer
    pub fn clear_buffs(&mut self) {
        if self.buffs.any() {
            log::debug!("Buffs lost");
        }
        self.buffs.clear_all();
        self.actor.set_speed_buff(false);
        self.actor.set_fire_rate_buff(false);
    }

    /// Fold a finished game into lifetime stats
    pub fn finish_game(&self, stats: &mut LifetimeStats) -> Result<(), SessionError> {
        if self.phase != GamePhase::GameComplete {
            return Err(SessionError::GameNotComplete);
        }
        stats.record_game(&self.summary());
        log::info!("Game recorded: {} points, {} games played", self.score, stats.games_played);
        Ok(())
    }

    pub fn summary(&self) -> crate::stats::GameSummary {
        crate::stats::GameSummary {
            score: self.score,
            shots_fired: self.game_shots_fired,
            hits: self.game_hits,
            kills_by_type: self.kills_by_type,
        }
    }
}
