//! Immutable start-of-calculation capture of a creature's resources.

use serde::{Deserialize, Serialize};

use crate::combat::{Creature, PowerId, RelicId};
use crate::outcome::Outcome;

/// Relics that modify health loss on their player, in the order they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageRelic {
    /// Every loss is reduced by 1, never below 0.
    TungstenRod,
    /// Unblocked attack damage of 2 to 5 becomes 1.
    Torii,
}

impl DamageRelic {
    fn from_relic(id: &RelicId) -> Option<Self> {
        match id {
            RelicId::TungstenRod => Some(Self::TungstenRod),
            RelicId::Torii => Some(Self::Torii),
            _ => None,
        }
    }
}

/// What the outcome engine knows about its target.
///
/// Built once per calculation and never changed. A second, chained phase
/// gets its own snapshot through [`CreatureSnapshot::following`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CreatureSnapshot {
    /// Remaining health.
    pub health: i32,
    /// Maximum health, the ceiling for healing.
    pub max_health: i32,
    /// Remaining block.
    pub block: i32,
    /// Remaining Buffer stacks.
    pub buffer: i32,
    /// Whether Curl Up is still armed.
    pub has_curl_up: bool,
    /// Block granted when Curl Up fires.
    pub curl_up_amount: i32,
    /// Monster-only intangible: caps attack damage at 1.
    pub intangible: bool,
    /// Player intangible: caps every kind of damage at 1.
    pub intangible_all: bool,
    /// Damage relics in relic order; empty for monsters.
    pub relics: Vec<DamageRelic>,
}

impl CreatureSnapshot {
    /// Read a creature's live resources.
    #[must_use]
    pub fn capture(creature: &Creature) -> Self {
        let relics = if creature.is_player() {
            creature
                .relics
                .iter()
                .filter_map(|relic| DamageRelic::from_relic(&relic.id))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            health: creature.current_health,
            max_health: creature.max_health,
            block: creature.block,
            buffer: creature.power_amount(&PowerId::Buffer),
            has_curl_up: creature.has_power(&PowerId::CurlUp),
            curl_up_amount: creature.power_amount(&PowerId::CurlUp),
            intangible: creature.has_power(&PowerId::Intangible),
            intangible_all: creature.has_power(&PowerId::IntangiblePlayer),
            relics,
        }
    }

    /// Snapshot for a phase that starts where `outcome` ended.
    ///
    /// Health, block, buffer and the Curl Up flag come from the outcome;
    /// everything else carries over unchanged.
    #[must_use]
    pub fn following(&self, outcome: &Outcome) -> Self {
        Self {
            health: outcome.remaining_health,
            block: outcome.remaining_block,
            buffer: outcome.remaining_buffer,
            has_curl_up: outcome.has_curl_up,
            ..self.clone()
        }
    }

    /// Builder method to set health and maximum health.
    #[must_use]
    pub fn with_health(mut self, health: i32, max_health: i32) -> Self {
        self.health = health;
        self.max_health = max_health;
        self
    }

    /// Builder method to set block.
    #[must_use]
    pub fn with_block(mut self, block: i32) -> Self {
        self.block = block;
        self
    }

    /// Builder method to set buffer stacks.
    #[must_use]
    pub fn with_buffer(mut self, buffer: i32) -> Self {
        self.buffer = buffer;
        self
    }

    /// Builder method to arm Curl Up with the given block amount.
    #[must_use]
    pub fn with_curl_up(mut self, amount: i32) -> Self {
        self.has_curl_up = true;
        self.curl_up_amount = amount;
        self
    }

    /// Builder method to set both intangible flags.
    #[must_use]
    pub fn with_intangible(mut self, monster_only: bool, all: bool) -> Self {
        self.intangible = monster_only;
        self.intangible_all = all;
        self
    }

    /// Builder method to append a damage relic.
    #[must_use]
    pub fn with_relic(mut self, relic: DamageRelic) -> Self {
        self.relics.push(relic);
        self
    }
}
