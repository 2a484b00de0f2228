//! Arrow hit tests
//!
//! Everything is axis-aligned, so a hit is a strict rectangle overlap. The
//! interesting part is the targeting rule: a player arrow only ever hits the
//! first `Alive` mob in list order, so one arrow can never score twice.

use super::mob::Mob;
use super::projectile::{Arrow, Heading};
use super::rect::Rect;

/// Index of the first live mob the arrow overlaps
pub fn first_alive_hit(arrow: &Arrow, mobs: &[Mob]) -> Option<usize> {
    mobs.iter().position(|mob| mob.is_alive() && arrow.hits(mob.rect()))
}

/// A mob arrow striking the player
pub fn hits_player(arrow: &Arrow, player: &Rect) -> bool {
    arrow.heading == Heading::Down && arrow.hits(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::mob::MobState;
    use crate::sim::mobs::villager;
    use glam::Vec2;

    fn villager_at(id: u32, x: f32, y: f32) -> Mob {
        let mut mob = villager::spawn(id, y);
        mob.body.place(Vec2::new(x, y));
        mob
    }

    #[test]
    fn test_first_alive_hit_in_list_order() {
        let mobs = vec![villager_at(1, 100.0, 100.0), villager_at(2, 110.0, 100.0)];
        let arrow = Arrow::new(Vec2::new(120.0, 120.0), Heading::Up);
        assert_eq!(first_alive_hit(&arrow, &mobs), Some(0));
    }

    #[test]
    fn test_dying_mobs_are_skipped() {
        let mut mobs = vec![villager_at(1, 100.0, 100.0), villager_at(2, 110.0, 100.0)];
        mobs[0].apply_damage(false, false);
        assert_eq!(mobs[0].state, MobState::Dying);

        let arrow = Arrow::new(Vec2::new(120.0, 120.0), Heading::Up);
        assert_eq!(first_alive_hit(&arrow, &mobs), Some(1));
    }

    #[test]
    fn test_miss() {
        let mobs = vec![villager_at(1, 100.0, 100.0)];
        let arrow = Arrow::new(Vec2::new(400.0, 400.0), Heading::Up);
        assert_eq!(first_alive_hit(&arrow, &mobs), None);
    }

    #[test]
    fn test_only_mob_arrows_hit_the_player() {
        let player = Rect::new(352.0, 576.0, 64.0, 64.0);
        let down = Arrow::new(Vec2::new(380.0, 560.0), Heading::Down);
        let up = Arrow::new(Vec2::new(380.0, 560.0), Heading::Up);
        assert!(hits_player(&down, &player));
        assert!(!hits_player(&up, &player));
    }
}
