//! Test fixtures and helpers.
//!
//! Pre-built combats and a host stand-in for consistent testing.

use std::cell::{Cell, RefCell};

use dmgcalc_core::combat::{Card, CardId, CombatState, Creature, CreatureId, Intent, PowerId};
use dmgcalc_core::error::{CalcError, Result};
use dmgcalc_core::resolver::{CardDamage, CardDamageResolver};

/// Id every fixture gives the player.
pub const PLAYER_ID: CreatureId = CreatureId(0);

/// Id of the `n`th fixture monster (0-based).
#[must_use]
pub const fn monster_id(n: u32) -> CreatureId {
    CreatureId(n + 1)
}

/// An 80 HP player alone against nobody.
#[must_use]
pub fn empty_combat() -> CombatState {
    CombatState::new(Creature::player(PLAYER_ID, 80), Vec::new())
}

/// An 80 HP player against monsters with the given maximum health.
#[must_use]
pub fn combat_against(monster_health: &[i32]) -> CombatState {
    let monsters = (0u32..)
        .zip(monster_health)
        .map(|(n, &hp)| Creature::monster(monster_id(n), hp))
        .collect();
    CombatState::new(Creature::player(PLAYER_ID, 80), monsters)
}

/// The common two-monster fight: a 44 HP cultist attacking for 6 and a
/// 12 HP louse attacking twice for 3.
#[must_use]
pub fn cultist_and_louse() -> CombatState {
    let mut combat = combat_against(&[44, 12]);
    combat.monsters[0].intent = Some(Intent::attack(6, 1));
    combat.monsters[1].intent = Some(Intent::attack(3, 2));
    combat.energy = 3;
    combat
}

/// A hand of `n` Strikes.
#[must_use]
pub fn strikes(n: usize) -> Vec<Card> {
    vec![Card::attack(CardId::Strike, 6); n]
}

/// One recorded [`ScriptedResolver`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveCall {
    /// Card resolved.
    pub card: CardId,
    /// Target index.
    pub monster_index: usize,
    /// Whether the target was Vulnerable at call time.
    pub target_vulnerable: bool,
    /// The player's Vigor at call time.
    pub player_vigor: i32,
}

/// Host stand-in computing damage the way the base game does for simple
/// attacks: base + Strength + Vigor, x1.5 on a Vulnerable target, x0.75
/// while Weak, rounded down.
///
/// Every call is recorded. Calls past `fail_after` return
/// [`CalcError::ResolveFailed`].
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    calls: RefCell<Vec<ResolveCall>>,
    fail_after: Option<usize>,
    panic_on_call: Cell<bool>,
}

impl ScriptedResolver {
    /// A resolver that always succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to fail every call after the first `n`.
    #[must_use]
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    /// Builder method to panic once, on the first call after the first.
    ///
    /// With a replay power this is the recomputation under temporary powers.
    #[must_use]
    pub fn panicking_on_recompute(self) -> Self {
        self.panic_on_call.set(true);
        self
    }

    /// Every call made so far.
    pub fn calls(&self) -> Vec<ResolveCall> {
        self.calls.borrow().clone()
    }

    fn damage(card: &Card, target: &Creature, combat: &CombatState) -> i32 {
        let player = &combat.player;
        let mut damage = card.base_damage
            + player.power_amount(&PowerId::Strength)
            + player.power_amount(&PowerId::Vigor);
        if target.has_power(&PowerId::Vulnerable) {
            damage = damage * 3 / 2;
        }
        if player.has_power(&PowerId::Weak) {
            damage = damage * 3 / 4;
        }
        damage.max(0)
    }
}

impl CardDamageResolver for ScriptedResolver {
    fn resolve(&self, card: &Card, monster_index: usize, combat: &CombatState) -> Result<CardDamage> {
        let target = combat
            .monsters
            .get(monster_index)
            .ok_or(CalcError::MonsterIndexOutOfRange {
                index: monster_index,
                len: combat.monsters.len(),
            })?;

        let call_number = {
            let mut calls = self.calls.borrow_mut();
            calls.push(ResolveCall {
                card: card.id.clone(),
                monster_index,
                target_vulnerable: target.has_power(&PowerId::Vulnerable),
                player_vigor: combat.player.power_amount(&PowerId::Vigor),
            });
            calls.len()
        };

        if self.panic_on_call.get() && call_number > 1 {
            self.panic_on_call.set(false);
            panic!("scripted resolver panic");
        }
        if self.fail_after.is_some_and(|n| call_number > n) {
            tracing::debug!(call_number, "Scripted resolver failing");
            return Err(CalcError::resolve_failed(card.id.to_string(), "scripted failure"));
        }

        if card.multi_target {
            let multi = combat
                .monsters
                .iter()
                .map(|monster| Self::damage(card, monster, combat))
                .collect::<Vec<_>>();
            return Ok(CardDamage {
                damage: multi[monster_index],
                multi_damage: Some(multi),
            });
        }
        Ok(CardDamage::single(Self::damage(card, target, combat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmgcalc_core::combat::Power;

    #[test]
    fn test_fixture_ids() {
        let combat = combat_against(&[10, 20, 30]);
        assert_eq!(combat.player.id, PLAYER_ID);
        let ids: Vec<_> = combat.monsters.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![monster_id(0), monster_id(1), monster_id(2)]);
    }

    #[test]
    fn test_scripted_damage_modifiers() {
        let mut combat = combat_against(&[40]);
        combat.player.powers.push(Power::new(PowerId::Strength, 2));
        combat.monsters[0].powers.push(Power::new(PowerId::Vulnerable, 1));
        let resolver = ScriptedResolver::new();

        let damage = resolver
            .resolve(&Card::attack(CardId::Strike, 6), 0, &combat)
            .expect("resolves");

        assert_eq!(damage.damage, 12);
        assert_eq!(resolver.calls().len(), 1);
        assert!(resolver.calls()[0].target_vulnerable);
    }

    #[test]
    fn test_scripted_failure() {
        let combat = combat_against(&[40]);
        let resolver = ScriptedResolver::new().failing_after(1);
        let card = Card::attack(CardId::Strike, 6);
        assert!(resolver.resolve(&card, 0, &combat).is_ok());
        assert!(resolver.resolve(&card, 0, &combat).is_err());
    }

    #[test]
    fn test_multi_target_reports_every_monster() {
        let mut combat = combat_against(&[40, 20]);
        combat.monsters[1].powers.push(Power::new(PowerId::Vulnerable, 2));
        let resolver = ScriptedResolver::new();
        let card = Card::attack(CardId::ThunderClap, 4).hitting_all();

        let damage = resolver.resolve(&card, 0, &combat).expect("resolves");

        assert_eq!(damage.multi_damage, Some(vec![4, 6]));
        assert_eq!(damage.damage_per_hit(1).expect("in range"), 6);
    }
}
