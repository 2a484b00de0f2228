//! Buffs bought with score between levels

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Buff {
    /// Double movement speed
    Speed,
    /// Triple damage per arrow
    Damage,
    /// Double fire rate
    FireRate,
    /// Double points per kill
    Points,
}

impl Buff {
    pub const ALL: [Buff; 4] = [Buff::Speed, Buff::Damage, Buff::FireRate, Buff::Points];

    pub fn as_str(&self) -> &'static str {
        match self {
            Buff::Speed => "speed",
            Buff::Damage => "damage",
            Buff::FireRate => "fire rate",
            Buff::Points => "points",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("{0:?} buff is already active")]
    AlreadyActive(Buff),

    #[error("buff costs {cost} but score is {score}")]
    InsufficientScore { cost: u32, score: u32 },

    #[error("buffs can only be bought between levels")]
    LevelInProgress,
}

/// Fixed purchase price of each buff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuffCosts {
    pub speed: u32,
    pub damage: u32,
    pub fire_rate: u32,
    pub points: u32,
}

impl Default for BuffCosts {
    fn default() -> Self {
        Self {
            speed: 100,
            damage: 200,
            fire_rate: 300,
            points: 500,
        }
    }
}

impl BuffCosts {
    pub fn cost(&self, buff: Buff) -> u32 {
        match buff {
            Buff::Speed => self.speed,
            Buff::Damage => self.damage,
            Buff::FireRate => self.fire_rate,
            Buff::Points => self.points,
        }
    }
}

/// On/off flags for the four buffs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffs {
    pub speed: bool,
    pub damage: bool,
    pub fire_rate: bool,
    pub points: bool,
}

impl Buffs {
    pub fn is_on(&self, buff: Buff) -> bool {
        match buff {
            Buff::Speed => self.speed,
            Buff::Damage => self.damage,
            Buff::FireRate => self.fire_rate,
            Buff::Points => self.points,
        }
    }

    pub fn set(&mut self, buff: Buff, on: bool) {
        let flag = match buff {
            Buff::Speed => &mut self.speed,
            Buff::Damage => &mut self.damage,
            Buff::FireRate => &mut self.fire_rate,
            Buff::Points => &mut self.points,
        };
        *flag = on;
    }

    /// Drop every buff at once
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        Buff::ALL.iter().any(|&buff| self.is_on(buff))
    }
}

/// Check a purchase without applying it
pub fn check_purchase(
    buffs: &Buffs,
    costs: &BuffCosts,
    buff: Buff,
    score: u32,
) -> Result<u32, PurchaseError> {
    if buffs.is_on(buff) {
        return Err(PurchaseError::AlreadyActive(buff));
    }
    let cost = costs.cost(buff);
    if score < cost {
        return Err(PurchaseError::InsufficientScore { cost, score });
    }
    Ok(cost)
}
