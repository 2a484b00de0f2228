//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Frame deltas come from the caller
//! - Randomness comes from the session's seeded RNG
//! - Stable iteration order (spawn order)
//! - No rendering, audio or persistence dependencies

pub mod actor;
pub mod collision;
pub mod economy;
pub mod mob;
pub mod mobs;
pub mod projectile;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod timer;

pub use actor::{Actor, MoveIntent};
pub use economy::{Buff, BuffCosts, Buffs, PurchaseError};
pub use mob::{Behavior, Mob, MobEvent, MobKind, MobState};
pub use projectile::{Arrow, Heading};
pub use rect::Rect;
pub use snapshot::{FrameSnapshot, Sprite, SpriteTag};
pub use state::{GamePhase, GameState, LevelCounters, LevelReport, SessionError};
pub use tick::{TickInput, TickOutcome, tick};
pub use timer::Timer;
