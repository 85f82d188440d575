//! Outcome engine: replays actions against one timeline's resources.
//!
//! Damage-like actions run through a fixed pipeline:
//!
//! ```text
//! magnitude (min or max)
//!   -> intangible cap (all damage, or attack damage on intangible monsters)
//!   -> block absorption (not for LoseHp)
//!   -> buffer (one stack negates the whole hit)
//!   -> damage relics, in relic order (player only)
//!   -> curl up (grants block after the hit, attack damage only)
//!   -> health, floored at 0
//! ```

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::snapshot::{CreatureSnapshot, DamageRelic};

/// Unblocked damage range that Torii reduces to 1.
const TORII_RANGE: std::ops::RangeInclusive<i32> = 2..=5;

/// Accumulated result of one timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Outcome {
    /// Health left after every applied action, never negative.
    pub remaining_health: i32,
    /// Block left.
    pub remaining_block: i32,
    /// Buffer stacks left.
    pub remaining_buffer: i32,
    /// Total damage that got through to health (excluding direct health loss).
    pub damage: i32,
    /// Total damage absorbed by block.
    pub blocked: i32,
    /// Net direct health change: healing minus direct health loss.
    pub adjust_health: i32,
    /// Whether Curl Up is still armed in this timeline.
    pub has_curl_up: bool,
}

impl Outcome {
    /// Fresh outcome seeded from the snapshot's resources.
    #[must_use]
    pub fn seeded(snapshot: &CreatureSnapshot) -> Self {
        Self {
            remaining_health: snapshot.health,
            remaining_block: snapshot.block,
            remaining_buffer: snapshot.buffer,
            damage: 0,
            blocked: 0,
            adjust_health: 0,
            has_curl_up: snapshot.has_curl_up,
        }
    }

    /// Whether the creature ends this timeline dead.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.remaining_health <= 0
    }

    /// Apply one action in place.
    ///
    /// `use_max` picks the action's upper magnitude (best case for the
    /// attacker) instead of the lower one. Composites must be flattened
    /// before they get here; they are treated as no-ops.
    pub fn apply(&mut self, action: &Action, use_max: bool, snapshot: &CreatureSnapshot) -> &mut Self {
        match action {
            Action::GainHp(value) => {
                if self.remaining_health > 0 {
                    self.adjust_health = self.adjust_health.saturating_add(*value);
                    self.remaining_health = self
                        .remaining_health
                        .saturating_add(*value)
                        .min(snapshot.max_health);
                }
            }

            Action::GainBlock(value) => {
                self.remaining_block = self.remaining_block.saturating_add(*value);
            }

            Action::DamageNormal { .. } | Action::DamageThorns { .. } | Action::LoseHp(_) => {
                self.take_hit(action, use_max, snapshot);
            }

            Action::NoAction | Action::RefineStats | Action::Grouped(_) => {}
        }
        self
    }

    fn take_hit(&mut self, action: &Action, use_max: bool, snapshot: &CreatureSnapshot) {
        let is_attack = matches!(action, Action::DamageNormal { .. });
        let is_thorns = matches!(action, Action::DamageThorns { .. });
        let is_hp_loss = matches!(action, Action::LoseHp(_));

        let mut amount = action.magnitude(use_max).max(0);

        if snapshot.intangible_all || (snapshot.intangible && is_attack) {
            amount = amount.min(1);
        }

        if !is_hp_loss {
            let blocked = amount.min(self.remaining_block).max(0);
            let net = amount.saturating_sub(self.remaining_block).max(0);
            self.blocked = self.blocked.saturating_add(blocked);
            self.remaining_block = self.remaining_block.saturating_sub(blocked).max(0);
            amount = net;
        }

        if amount > 0 && self.remaining_buffer > 0 {
            self.remaining_buffer -= 1;
            amount = 0;
        }

        for relic in &snapshot.relics {
            match relic {
                DamageRelic::TungstenRod => amount = (amount - 1).max(0),
                DamageRelic::Torii => {
                    if !is_hp_loss && !is_thorns && TORII_RANGE.contains(&amount) {
                        amount = 1;
                    }
                }
            }
        }

        // The block lands after this hit; it does not shrink `amount`.
        if amount > 0 && is_attack && self.has_curl_up {
            self.remaining_block = self.remaining_block.saturating_add(snapshot.curl_up_amount);
            self.has_curl_up = false;
        }

        if is_hp_loss {
            self.adjust_health = self.adjust_health.saturating_sub(amount);
        } else {
            self.damage = self.damage.saturating_add(amount);
        }
        self.remaining_health = self.remaining_health.saturating_sub(amount).max(0);
    }
}

/// Pure form of [`Outcome::apply`]: consumes an outcome and returns the next one.
#[must_use]
pub fn apply(mut outcome: Outcome, action: &Action, use_max: bool, snapshot: &CreatureSnapshot) -> Outcome {
    outcome.apply(action, use_max, snapshot);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::CreatureId;

    fn snapshot(health: i32) -> CreatureSnapshot {
        CreatureSnapshot::default().with_health(health, health)
    }

    #[test]
    fn test_block_then_damage_is_fully_blocked() {
        let snap = snapshot(30);
        let mut outcome = Outcome::seeded(&snap);
        outcome
            .apply(&Action::GainBlock(8), false, &snap)
            .apply(&Action::damage(8), false, &snap);

        assert_eq!(outcome.blocked, 8);
        assert_eq!(outcome.damage, 0);
        assert_eq!(outcome.remaining_block, 0);
        assert_eq!(outcome.remaining_health, 30);
    }

    #[test]
    fn test_partial_block() {
        let snap = snapshot(20).with_block(5);
        let outcome = apply(Outcome::seeded(&snap), &Action::damage(8), false, &snap);

        assert_eq!(outcome.blocked, 5);
        assert_eq!(outcome.damage, 3);
        assert_eq!(outcome.remaining_block, 0);
        assert_eq!(outcome.remaining_health, 17);
    }

    #[test]
    fn test_buffer_negates_whole_hit() {
        let snap = snapshot(20).with_buffer(1);
        let outcome = apply(Outcome::seeded(&snap), &Action::damage(10), true, &snap);

        assert_eq!(outcome.remaining_buffer, 0);
        assert_eq!(outcome.damage, 0);
        assert_eq!(outcome.remaining_health, 20);
    }

    #[test]
    fn test_buffer_not_spent_on_fully_blocked_hit() {
        let snap = snapshot(20).with_block(10).with_buffer(1);
        let outcome = apply(Outcome::seeded(&snap), &Action::damage(6), true, &snap);

        assert_eq!(outcome.remaining_buffer, 1);
        assert_eq!(outcome.remaining_block, 4);
    }

    #[test]
    fn test_intangible_all_caps_thorns_and_hp_loss() {
        let snap = snapshot(20).with_intangible(false, true);
        let mut outcome = Outcome::seeded(&snap);
        outcome
            .apply(&Action::thorns(9), false, &snap)
            .apply(&Action::LoseHp(9), false, &snap)
            .apply(&Action::damage(9), false, &snap);

        assert_eq!(outcome.damage, 2);
        assert_eq!(outcome.adjust_health, -1);
        assert_eq!(outcome.remaining_health, 17);
    }

    #[test]
    fn test_monster_intangible_only_caps_attacks() {
        let snap = snapshot(20).with_intangible(true, false);
        let mut outcome = Outcome::seeded(&snap);
        outcome
            .apply(&Action::damage(9), false, &snap)
            .apply(&Action::thorns(4), false, &snap)
            .apply(&Action::LoseHp(3), false, &snap);

        assert_eq!(outcome.damage, 5);
        assert_eq!(outcome.adjust_health, -3);
        assert_eq!(outcome.remaining_health, 12);
    }

    #[test]
    fn test_lose_hp_skips_block_but_spends_buffer() {
        let snap = snapshot(20).with_block(10).with_buffer(1);
        let outcome = apply(Outcome::seeded(&snap), &Action::LoseHp(4), false, &snap);

        // Buffer applies to direct loss too.
        assert_eq!(outcome.remaining_block, 10);
        assert_eq!(outcome.remaining_buffer, 0);
        assert_eq!(outcome.remaining_health, 20);
    }

    #[test]
    fn test_tungsten_rod_reduces_every_loss() {
        let snap = snapshot(20).with_relic(DamageRelic::TungstenRod);
        let mut outcome = Outcome::seeded(&snap);
        outcome
            .apply(&Action::damage(5), false, &snap)
            .apply(&Action::LoseHp(1), false, &snap);

        assert_eq!(outcome.damage, 4);
        assert_eq!(outcome.adjust_health, 0);
        assert_eq!(outcome.remaining_health, 16);
    }

    #[test]
    fn test_torii_clamps_small_attack_damage_only() {
        let snap = snapshot(30).with_relic(DamageRelic::Torii);
        for amount in 2..=5 {
            let outcome = apply(Outcome::seeded(&snap), &Action::damage(amount), false, &snap);
            assert_eq!(outcome.damage, 1, "attack of {amount}");
        }

        let big = apply(Outcome::seeded(&snap), &Action::damage(6), false, &snap);
        assert_eq!(big.damage, 6);

        let thorns = apply(Outcome::seeded(&snap), &Action::thorns(4), false, &snap);
        assert_eq!(thorns.damage, 4);

        let loss = apply(Outcome::seeded(&snap), &Action::LoseHp(4), false, &snap);
        assert_eq!(loss.adjust_health, -4);
    }

    #[test]
    fn test_relic_order_matters() {
        let rod_first = snapshot(30)
            .with_relic(DamageRelic::TungstenRod)
            .with_relic(DamageRelic::Torii);
        let torii_first = snapshot(30)
            .with_relic(DamageRelic::Torii)
            .with_relic(DamageRelic::TungstenRod);

        let a = apply(Outcome::seeded(&rod_first), &Action::damage(3), false, &rod_first);
        let b = apply(Outcome::seeded(&torii_first), &Action::damage(3), false, &torii_first);

        assert_eq!(a.damage, 1);
        assert_eq!(b.damage, 0);
    }

    #[test]
    fn test_curl_up_fires_once_after_hit() {
        let snap = snapshot(40).with_curl_up(7);
        let mut outcome = Outcome::seeded(&snap);
        outcome.apply(&Action::damage(5), false, &snap);

        assert_eq!(outcome.damage, 5);
        assert_eq!(outcome.remaining_block, 7);
        assert!(!outcome.has_curl_up);

        outcome.apply(&Action::damage(10), false, &snap);
        assert_eq!(outcome.blocked, 7);
        assert_eq!(outcome.damage, 8);
        assert_eq!(outcome.remaining_block, 0);
    }

    #[test]
    fn test_curl_up_ignores_thorns() {
        let snap = snapshot(40).with_curl_up(7);
        let outcome = apply(Outcome::seeded(&snap), &Action::thorns(5), false, &snap);
        assert!(outcome.has_curl_up);
        assert_eq!(outcome.remaining_block, 0);
    }

    #[test]
    fn test_gain_hp_clamped_and_skipped_when_dead() {
        let snap = CreatureSnapshot::default().with_health(10, 12);
        let mut outcome = Outcome::seeded(&snap);
        outcome.apply(&Action::GainHp(5), false, &snap);
        assert_eq!(outcome.remaining_health, 12);
        assert_eq!(outcome.adjust_health, 5);

        outcome.apply(&Action::damage(40), false, &snap);
        assert!(outcome.is_dead());
        assert_eq!(outcome.remaining_health, 0);

        outcome.apply(&Action::GainHp(5), false, &snap);
        assert_eq!(outcome.remaining_health, 0);
        assert_eq!(outcome.adjust_health, 5);
    }

    #[test]
    fn test_markers_are_inert() {
        let snap = snapshot(10).with_block(3).with_buffer(1);
        let start = Outcome::seeded(&snap);
        let mut outcome = start;
        outcome
            .apply(&Action::NoAction, true, &snap)
            .apply(&Action::RefineStats, true, &snap)
            .apply(
                &Action::Grouped(vec![Action::damage_to(50, CreatureId(1))]),
                true,
                &snap,
            );
        assert_eq!(outcome, start);
    }

    #[test]
    fn test_huge_thorns_saturate() {
        let snap = snapshot(i32::MAX);
        let mut outcome = Outcome::seeded(&snap);
        outcome
            .apply(&Action::thorns(i32::MAX), true, &snap)
            .apply(&Action::thorns(i32::MAX), true, &snap);

        assert_eq!(outcome.damage, i32::MAX);
        assert_eq!(outcome.remaining_health, 0);
        assert!(outcome.is_dead());
    }

    #[test]
    fn test_huge_hp_loss_saturates() {
        let snap = snapshot(i32::MAX);
        let mut outcome = Outcome::seeded(&snap);
        outcome
            .apply(&Action::LoseHp(i32::MAX), false, &snap)
            .apply(&Action::LoseHp(i32::MAX), false, &snap);

        assert_eq!(outcome.adjust_health, -i32::MAX);
        assert_eq!(outcome.remaining_health, 0);
    }

    #[test]
    fn test_negative_block_does_not_overflow() {
        let snap = snapshot(40).with_block(i32::MIN);
        let outcome = apply(Outcome::seeded(&snap), &Action::damage(i32::MAX), false, &snap);

        assert_eq!(outcome.blocked, 0);
        assert_eq!(outcome.remaining_block, 0);
        assert_eq!(outcome.remaining_health, 0);
    }

    #[test]
    fn test_huge_blocked_total_saturates() {
        let snap = snapshot(10);
        let mut outcome = Outcome::seeded(&snap);
        outcome
            .apply(&Action::GainBlock(i32::MAX), false, &snap)
            .apply(&Action::damage(i32::MAX), false, &snap)
            .apply(&Action::GainBlock(i32::MAX), false, &snap)
            .apply(&Action::damage(i32::MAX), false, &snap);

        assert_eq!(outcome.blocked, i32::MAX);
        assert_eq!(outcome.remaining_health, 10);
    }
}
