//! Contract with the host's card damage calculation.
//!
//! The host applies every buff and debuff when it computes a card's damage.
//! The forecaster never repeats that math; it asks the resolver and reads
//! back the per-target values.

use serde::{Deserialize, Serialize};

use crate::combat::{Card, CombatState};
use crate::error::{CalcError, Result};

/// Damage a card would deal, as computed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CardDamage {
    /// Damage against the requested target.
    pub damage: i32,
    /// Per-monster damage for cards that hit every enemy, indexed like
    /// [`CombatState::monsters`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_damage: Option<Vec<i32>>,
}

impl CardDamage {
    /// Damage against a single target.
    #[must_use]
    pub const fn single(damage: i32) -> Self {
        Self {
            damage,
            multi_damage: None,
        }
    }

    /// Damage per hit against the monster at `monster_index`.
    pub fn damage_per_hit(&self, monster_index: usize) -> Result<i32> {
        match &self.multi_damage {
            Some(values) => values
                .get(monster_index)
                .copied()
                .ok_or(CalcError::MonsterIndexOutOfRange {
                    index: monster_index,
                    len: values.len(),
                }),
            None => Ok(self.damage),
        }
    }
}

/// Host collaborator that computes a card's final damage.
pub trait CardDamageResolver {
    /// Compute `card`'s damage against the monster at `monster_index`, using
    /// the powers currently present in `combat`.
    fn resolve(&self, card: &Card, monster_index: usize, combat: &CombatState)
        -> Result<CardDamage>;
}

impl<F> CardDamageResolver for F
where
    F: Fn(&Card, usize, &CombatState) -> Result<CardDamage>,
{
    fn resolve(
        &self,
        card: &Card,
        monster_index: usize,
        combat: &CombatState,
    ) -> Result<CardDamage> {
        self(card, monster_index, combat)
    }
}
