//! The five enemy behaviors
//!
//! Each module owns its kind's constants, its spawn constructor and the
//! per-frame motion rule plugged into `Mob` through `Behavior`.

pub mod creeper;
pub mod enderman;
pub mod pillager;
pub mod skeleton;
pub mod villager;

pub use creeper::Creeper;
pub use enderman::Enderman;
pub use pillager::Pillager;
pub use skeleton::Skeleton;
pub use villager::Villager;
