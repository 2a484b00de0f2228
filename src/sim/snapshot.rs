//! Read-only view of a frame for presenters
//!
//! The simulation never draws. A presenter asks for a `FrameSnapshot` after
//! each tick and renders the sprites in list order.

use serde::{Deserialize, Serialize};

use super::economy::Buffs;
use super::mob::{Behavior, DeathSprite, Mob, MobKind, MobState};
use super::mobs::Enderman;
use super::mobs::enderman::Phase as EndermanPhase;
use super::projectile::{Arrow, Heading};
use super::rect::Rect;
use super::state::{GamePhase, GameState};

/// What to draw at a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteTag {
    Player,
    /// The player, frozen by fear
    PlayerFeared,
    Mob(MobKind),
    Shield,
    TeleportGhost,
    Remains,
    Explosion,
    PlayerArrow,
    MobArrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub tag: SpriteTag,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub level: u32,
    pub buffs: Buffs,
    pub mobs_left: u32,
    /// Back to front
    pub sprites: Vec<Sprite>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let capacity =
            1 + state.mobs.len() * 2 + state.player_arrows.len() + state.mob_arrows.len();
        let mut sprites = Vec::with_capacity(capacity);

        let player = if state.actor.feared {
            SpriteTag::PlayerFeared
        } else {
            SpriteTag::Player
        };
        sprites.push(Sprite {
            tag: player,
            rect: state.actor.rect,
        });

        for mob in &state.mobs {
            push_mob(&mut sprites, mob);
        }
        sprites.extend(state.player_arrows.iter().chain(&state.mob_arrows).map(arrow_sprite));

        Self {
            phase: state.phase,
            score: state.score,
            level: state.level,
            buffs: state.buffs,
            mobs_left: state.mobs_left,
            sprites,
        }
    }

    pub fn count(&self, tag: SpriteTag) -> usize {
        self.sprites.iter().filter(|sprite| sprite.tag == tag).count()
    }
}

fn push_mob(sprites: &mut Vec<Sprite>, mob: &Mob) {
    match mob.state {
        MobState::Alive => {}
        MobState::Dying => {
            let tag = match mob.death_sprite {
                DeathSprite::Remains => SpriteTag::Remains,
                DeathSprite::Explosion => SpriteTag::Explosion,
            };
            sprites.push(Sprite {
                tag,
                rect: mob.dying_rect,
            });
            return;
        }
        MobState::Out | MobState::Dead => return,
    }

    match &mob.behavior {
        Behavior::Enderman(enderman) if enderman.phase == EndermanPhase::Teleporting => {
            sprites.push(Sprite {
                tag: SpriteTag::TeleportGhost,
                rect: Enderman::ghost_rect(),
            });
        }
        Behavior::Pillager(pillager) => {
            sprites.push(Sprite {
                tag: SpriteTag::Mob(MobKind::Pillager),
                rect: *mob.rect(),
            });
            if let Some(rect) = pillager.shield_rect(&mob.body) {
                sprites.push(Sprite {
                    tag: SpriteTag::Shield,
                    rect,
                });
            }
        }
        behavior => sprites.push(Sprite {
            tag: SpriteTag::Mob(behavior.kind()),
            rect: *mob.rect(),
        }),
    }
}

fn arrow_sprite(arrow: &Arrow) -> Sprite {
    let tag = match arrow.heading {
        Heading::Up => SpriteTag::PlayerArrow,
        Heading::Down => SpriteTag::MobArrow,
    };
    Sprite {
        tag,
        rect: arrow.rect,
    }
}
