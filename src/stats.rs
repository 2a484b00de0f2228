//! Lifetime statistics
//!
//! Aggregates carried across games and folded in once per finished game.
//! Rates are derived on demand, never stored, except the best single-game
//! accuracy which has no other source.

use serde::{Deserialize, Serialize};

use crate::consts::NUM_MOB_KINDS;
use crate::{average, percent};

/// What one finished game contributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub kills_by_type: [u32; NUM_MOB_KINDS],
}

impl GameSummary {
    pub fn hit_percent(&self) -> u32 {
        percent(self.hits, self.shots_fired)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub high_score: u32,
    pub games_played: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// Best accuracy achieved in a single game
    pub top_hit_percent: u32,
    pub kills_by_type: [u32; NUM_MOB_KINDS],
}

impl LifetimeStats {
    /// Fold a finished game in
    pub fn record_game(&mut self, game: &GameSummary) {
        self.games_played += 1;
        for (total, kills) in self.kills_by_type.iter_mut().zip(game.kills_by_type) {
            *total += kills;
        }
        if game.score > self.high_score {
            log::info!("New high score: {}", game.score);
            self.high_score = game.score;
        }
        self.shots_fired += game.shots_fired;
        self.shots_hit += game.hits;
        self.top_hit_percent = self.top_hit_percent.max(game.hit_percent());
    }

    pub fn total_kills(&self) -> u32 {
        self.kills_by_type.iter().sum()
    }

    /// All-time accuracy
    pub fn hit_percent(&self) -> u32 {
        percent(self.shots_hit, self.shots_fired)
    }

    pub fn average_shots_per_game(&self) -> f64 {
        average(self.shots_fired, self.games_played)
    }

    pub fn average_kills_per_game(&self) -> f64 {
        average(self.total_kills(), self.games_played)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(score: u32, shots_fired: u32, hits: u32) -> GameSummary {
        GameSummary {
            score,
            shots_fired,
            hits,
            kills_by_type: [3, 2, 1, 0, 1],
        }
    }

    #[test]
    fn test_empty_stats_have_safe_rates() {
        let stats = LifetimeStats::default();
        assert_eq!(stats.hit_percent(), 0);
        assert_eq!(stats.average_shots_per_game(), 0.0);
        assert_eq!(stats.average_kills_per_game(), 0.0);
    }

    #[test]
    fn test_record_game_accumulates() {
        let mut stats = LifetimeStats::default();
        stats.record_game(&game(500, 40, 20));
        stats.record_game(&game(300, 20, 16));

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.high_score, 500);
        assert_eq!(stats.shots_fired, 60);
        assert_eq!(stats.shots_hit, 36);
        assert_eq!(stats.kills_by_type, [6, 4, 2, 0, 2]);
        assert_eq!(stats.total_kills(), 14);
        assert_eq!(stats.hit_percent(), 60);
        assert_eq!(stats.top_hit_percent, 80);
        assert_eq!(stats.average_shots_per_game(), 30.0);
        assert_eq!(stats.average_kills_per_game(), 7.0);
    }

    #[test]
    fn test_top_percent_only_rises() {
        let mut stats = LifetimeStats::default();
        stats.record_game(&game(0, 10, 9));
        stats.record_game(&game(0, 10, 1));
        assert_eq!(stats.top_hit_percent, 90);
    }

    #[test]
    fn test_game_without_shots() {
        let summary = game(0, 0, 0);
        assert_eq!(summary.hit_percent(), 0);
    }
}
