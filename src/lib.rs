//! Mob Volley - a mob-wave archery shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (motion, collisions, enemy behaviors, scoring)
//! - `tuning`: Data-driven level balance
//! - `stats`: Lifetime statistics folded in at the end of each game
//! - `persistence`: Stats storage port and its plain-text format

pub mod persistence;
pub mod sim;
pub mod stats;
pub mod tuning;

pub use stats::LifetimeStats;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed step used by the native driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield is a grid of square blocks
    pub const BLOCK_SIDE: f32 = 64.0;
    pub const NUM_COLS: u32 = 12;
    pub const NUM_ROWS: u32 = 10;
    pub const SCREEN_WIDTH: f32 = NUM_COLS as f32 * BLOCK_SIDE;
    pub const SCREEN_HEIGHT: f32 = NUM_ROWS as f32 * BLOCK_SIDE;

    /// Number of levels in a full game
    pub const NUM_LEVELS: u32 = 5;
    /// Number of enemy kinds
    pub const NUM_MOB_KINDS: usize = 5;

    /// Sprite sizes (pixels)
    pub const PLAYER_SIZE: (f32, f32) = (64.0, 64.0);
    pub const MOB_SIZE: (f32, f32) = (64.0, 64.0);
    pub const ENDERMAN_SIZE: (f32, f32) = (48.0, 128.0);
    pub const ARROW_SIZE: (f32, f32) = (10.0, 40.0);
    pub const SHIELD_SIZE: (f32, f32) = (32.0, 32.0);
    pub const DYING_SIZE: (f32, f32) = (64.0, 64.0);
    pub const EXPLOSION_SIZE: (f32, f32) = (160.0, 160.0);

    /// Death animation length
    pub const DYING_TIME_MS: f32 = 500.0;
}

/// Rounded percentage of `part` over `whole`, with a floor of 1 on the denominator.
///
/// Midpoints round to even so 50.5% reports as 50%.
#[inline]
pub fn percent(part: u32, whole: u32) -> u32 {
    let ratio = part as f64 / whole.max(1) as f64;
    (ratio * 100.0).round_ties_even() as u32
}

/// Mean of `total` over `count` rounded to two decimals (count floored at 1)
#[inline]
pub fn average(total: u32, count: u32) -> f64 {
    let mean = total as f64 / count.max(1) as f64;
    (mean * 100.0).round_ties_even() / 100.0
}

/// Unit vector components for a heading measured from the +y axis
#[inline]
pub fn heading_components(angle: f32) -> Vec2 {
    Vec2::new(angle.sin(), angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_guards_zero_denominator() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(3, 0), 300);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
    }

    #[test]
    fn test_percent_rounds_half_to_even() {
        // 1/8 = 12.5%
        assert_eq!(percent(1, 8), 12);
        // 3/8 = 37.5%
        assert_eq!(percent(3, 8), 38);
    }

    #[test]
    fn test_average_two_decimals() {
        assert_eq!(average(10, 3), 3.33);
        assert_eq!(average(5, 0), 5.0);
    }
}
