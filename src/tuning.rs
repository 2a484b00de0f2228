//! Data-driven level balance
//!
//! Every level has a weighted spawn table, a cap on how many mobs may be on
//! screen at once, a spawn cadence and a quota. Tables are checked when a
//! `Tuning` is built from outside data so bad odds fail loudly instead of
//! silently skewing spawns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{NUM_LEVELS, NUM_MOB_KINDS};
use crate::sim::economy::{Buff, BuffCosts};
use crate::sim::mob::MobKind;

/// Highest value a spawn draw can take
pub const MAX_DRAW: u32 = 100;

/// Mobs in the level 1 quota
pub const LEVEL_1_MOBS: u32 = 10;
/// Extra mobs per level after the first
pub const MOB_INCREASE_PER_LEVEL: u32 = 5;

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("expected {expected} levels, found {found}")]
    LevelCount { expected: usize, found: usize },

    #[error("level {level}: spawn threshold for {kind} is {value}, above 100")]
    ThresholdTooHigh {
        level: u32,
        kind: &'static str,
        value: u32,
    },

    #[error("level {level}: {kind} threshold {value} is below the previous {previous}")]
    NotMonotonic {
        level: u32,
        kind: &'static str,
        value: u32,
        previous: u32,
    },

    #[error("level {level}: concurrency cap must be at least 1")]
    ZeroCap { level: u32 },

    #[error("level {level}: spawn interval must be positive, got {value} ms")]
    BadInterval { level: u32, value: f32 },

    #[error("invalid tuning data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Cumulative spawn thresholds in `MobKind` order
///
/// A draw in `1..=100` spawns the first kind whose threshold is at least the
/// draw. Equal neighbouring thresholds give the later kind a zero-width band.
/// The last kind always closes the table at 100 whatever its declared value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTable {
    pub thresholds: [u32; NUM_MOB_KINDS],
}

impl SpawnTable {
    pub fn new(thresholds: [u32; NUM_MOB_KINDS]) -> Self {
        Self { thresholds }
    }

    /// Check the table is cumulative and within range
    pub fn validate(&self, level: u32) -> Result<(), TuningError> {
        let mut previous = 0;
        for (kind, &value) in MobKind::ALL.iter().zip(self.thresholds.iter()) {
            if value > MAX_DRAW {
                return Err(TuningError::ThresholdTooHigh {
                    level,
                    kind: kind.as_str(),
                    value,
                });
            }
            if value < previous {
                return Err(TuningError::NotMonotonic {
                    level,
                    kind: kind.as_str(),
                    value,
                    previous,
                });
            }
            previous = value;
        }
        Ok(())
    }

    /// Kind selected by a draw in `1..=MAX_DRAW`
    pub fn pick(&self, draw: u32) -> MobKind {
        let last = NUM_MOB_KINDS - 1;
        MobKind::ALL[..last]
            .iter()
            .zip(self.thresholds.iter())
            .find(|&(_, &threshold)| draw <= threshold)
            .map(|(&kind, _)| kind)
            .unwrap_or(MobKind::ALL[last])
    }

    /// Chance (in percent) of each kind
    pub fn odds(&self) -> [u32; NUM_MOB_KINDS] {
        let mut odds = [0; NUM_MOB_KINDS];
        let mut previous = 0;
        for (i, slot) in odds.iter_mut().enumerate() {
            let threshold = if i == NUM_MOB_KINDS - 1 {
                MAX_DRAW
            } else {
                self.thresholds[i]
            };
            *slot = threshold.saturating_sub(previous);
            previous = previous.max(threshold);
        }
        odds
    }
}

/// Balance for a single level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTuning {
    pub spawn_table: SpawnTable,
    /// Most mobs allowed on screen at once
    pub max_concurrent: usize,
    /// Time between spawns (ms)
    pub spawn_interval_ms: f32,
    /// Mobs spawned over the whole level
    pub mob_quota: u32,
}

impl LevelTuning {
    fn validate(&self, level: u32) -> Result<(), TuningError> {
        self.spawn_table.validate(level)?;
        if self.max_concurrent == 0 {
            return Err(TuningError::ZeroCap { level });
        }
        if self.spawn_interval_ms.is_nan() || self.spawn_interval_ms <= 0.0 {
            return Err(TuningError::BadInterval {
                level,
                value: self.spawn_interval_ms,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub levels: Vec<LevelTuning>,
    pub buff_costs: BuffCosts,
}

impl Default for Tuning {
    fn default() -> Self {
        const ODDS: [[u32; NUM_MOB_KINDS]; NUM_LEVELS as usize] = [
            [70, 90, 100, 100, 100],
            [50, 80, 100, 100, 100],
            [40, 60, 80, 100, 100],
            [50, 65, 80, 95, 100],
            [10, 30, 55, 80, 100],
        ];
        const CAPS: [usize; NUM_LEVELS as usize] = [2, 3, 3, 5, 3];
        const INTERVALS_MS: [f32; NUM_LEVELS as usize] = [2000.0, 1700.0, 1300.0, 1200.0, 1000.0];

        let levels = (0..NUM_LEVELS as usize)
            .map(|i| LevelTuning {
                spawn_table: SpawnTable::new(ODDS[i]),
                max_concurrent: CAPS[i],
                spawn_interval_ms: INTERVALS_MS[i],
                mob_quota: LEVEL_1_MOBS + MOB_INCREASE_PER_LEVEL * i as u32,
            })
            .collect();

        Self {
            levels,
            buff_costs: BuffCosts::default(),
        }
    }
}

impl Tuning {
    /// Check every level table
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.levels.len() != NUM_LEVELS as usize {
            return Err(TuningError::LevelCount {
                expected: NUM_LEVELS as usize,
                found: self.levels.len(),
            });
        }
        for (i, level) in self.levels.iter().enumerate() {
            level.validate(i as u32 + 1)?;
        }
        Ok(())
    }

    /// Decode and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Balance for a 1-based level, clamped into range
    pub fn level(&self, level: u32) -> &LevelTuning {
        let index = (level.max(1) as usize - 1).min(self.levels.len().saturating_sub(1));
        &self.levels[index]
    }

    pub fn buff_cost(&self, buff: Buff) -> u32 {
        self.buff_costs.cost(buff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        let tuning = Tuning::default();
        tuning.validate().expect("shipped tuning must validate");
        assert_eq!(tuning.level(1).mob_quota, 10);
        assert_eq!(tuning.level(5).mob_quota, 30);
        assert_eq!(tuning.level(4).max_concurrent, 5);
    }

    #[test]
    fn test_level_one_draw_boundaries() {
        let tuning = Tuning::default();
        let table = &tuning.level(1).spawn_table;
        assert_eq!(table.pick(1), MobKind::Villager);
        assert_eq!(table.pick(70), MobKind::Villager);
        assert_eq!(table.pick(71), MobKind::Creeper);
        assert_eq!(table.pick(90), MobKind::Creeper);
        assert_eq!(table.pick(91), MobKind::Skeleton);
        assert_eq!(table.pick(100), MobKind::Skeleton);
    }

    #[test]
    fn test_last_kind_closes_the_table() {
        let table = SpawnTable::new([10, 20, 30, 40, 50]);
        assert_eq!(table.pick(41), MobKind::Enderman);
        assert_eq!(table.pick(100), MobKind::Enderman);
        assert_eq!(table.odds(), [10, 10, 10, 10, 60]);
    }

    #[test]
    fn test_level_five_odds() {
        let tuning = Tuning::default();
        let table = &tuning.level(5).spawn_table;
        assert_eq!(table.odds(), [10, 20, 25, 25, 20]);
        assert_eq!(table.pick(81), MobKind::Enderman);
    }

    #[test]
    fn test_rejects_non_monotonic_table() {
        let mut tuning = Tuning::default();
        tuning.levels[2].spawn_table = SpawnTable::new([40, 30, 80, 100, 100]);
        let err = tuning.validate().unwrap_err();
        assert!(matches!(
            err,
            TuningError::NotMonotonic {
                level: 3,
                kind: "Creeper",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_threshold_over_100() {
        let mut tuning = Tuning::default();
        tuning.levels[0].spawn_table = SpawnTable::new([70, 90, 101, 101, 101]);
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::ThresholdTooHigh { level: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_caps_and_intervals() {
        let mut tuning = Tuning::default();
        tuning.levels[1].max_concurrent = 0;
        assert!(matches!(tuning.validate(), Err(TuningError::ZeroCap { level: 2 })));

        let mut tuning = Tuning::default();
        tuning.levels[1].spawn_interval_ms = 0.0;
        assert!(matches!(tuning.validate(), Err(TuningError::BadInterval { level: 2, .. })));

        let mut tuning = Tuning::default();
        tuning.levels.pop();
        assert!(matches!(tuning.validate(), Err(TuningError::LevelCount { found: 4, .. })));
    }

    #[test]
    fn test_json_round_trip_validates() {
        let json = Tuning::default().to_json().unwrap();
        let tuning = Tuning::from_json(&json).unwrap();
        assert_eq!(tuning, Tuning::default());

        let broken = json.replace("70", "95");
        assert!(Tuning::from_json(&broken).is_err());
        assert!(matches!(Tuning::from_json("{"), Err(TuningError::Json(_))));
    }
}
