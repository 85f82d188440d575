//! Stand-alone card damage calculation for scenario runs.
//!
//! Inside the game the host computes card damage. Scenario files have no
//! host, so this resolver applies the common modifiers itself.

use dmgcalc_core::combat::{Card, CombatState, Creature, PowerId};
use dmgcalc_core::error::{CalcError, Result};
use dmgcalc_core::resolver::{CardDamage, CardDamageResolver};

/// Base damage plus Strength and Vigor, x1.5 against Vulnerable, x0.75
/// while Weak, rounded down and never negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicDamageResolver;

impl BasicDamageResolver {
    fn damage_against(card: &Card, target: &Creature, combat: &CombatState) -> i32 {
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

impl CardDamageResolver for BasicDamageResolver {
    fn resolve(&self, card: &Card, monster_index: usize, combat: &CombatState) -> Result<CardDamage> {
        if !card.can_deal_damage() {
            return Err(CalcError::resolve_failed(card.id.to_string(), "card has no base damage"));
        }
        let target = combat
            .monsters
            .get(monster_index)
            .ok_or(CalcError::MonsterIndexOutOfRange {
                index: monster_index,
                len: combat.monsters.len(),
            })?;

        if !card.multi_target {
            return Ok(CardDamage::single(Self::damage_against(card, target, combat)));
        }
        let multi_damage: Vec<i32> = combat
            .monsters
            .iter()
            .map(|monster| Self::damage_against(card, monster, combat))
            .collect();
        Ok(CardDamage {
            damage: Self::damage_against(card, target, combat),
            multi_damage: Some(multi_damage),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmgcalc_core::combat::{CardId, CardKind, CreatureId, Power};

    fn combat() -> CombatState {
        CombatState::new(
            Creature::player(CreatureId(0), 80),
            vec![
                Creature::monster(CreatureId(1), 40),
                Creature::monster(CreatureId(2), 40).with_power(Power::new(PowerId::Vulnerable, 2)),
            ],
        )
    }

    #[test]
    fn test_strength_and_vulnerable() {
        let mut state = combat();
        state.player.powers.push(Power::new(PowerId::Strength, 3));
        let strike = Card::attack(CardId::Strike, 6);

        let plain = BasicDamageResolver.resolve(&strike, 0, &state).expect("resolves");
        let vulnerable = BasicDamageResolver.resolve(&strike, 1, &state).expect("resolves");

        assert_eq!(plain.damage, 9);
        assert_eq!(vulnerable.damage, 13);
    }

    #[test]
    fn test_weak_rounds_down() {
        let mut state = combat();
        state.player.powers.push(Power::new(PowerId::Weak, 1));
        let damage = BasicDamageResolver
            .resolve(&Card::attack(CardId::Strike, 6), 0, &state)
            .expect("resolves");
        assert_eq!(damage.damage, 4);
    }

    #[test]
    fn test_negative_strength_floors_at_zero() {
        let mut state = combat();
        state.player.powers.push(Power::new(PowerId::Strength, -10));
        let damage = BasicDamageResolver
            .resolve(&Card::attack(CardId::Strike, 6), 0, &state)
            .expect("resolves");
        assert_eq!(damage.damage, 0);
    }

    #[test]
    fn test_multi_target_per_monster() {
        let card = Card::attack(CardId::Whirlwind, 5).hitting_all();
        let damage = BasicDamageResolver.resolve(&card, 0, &combat()).expect("resolves");
        assert_eq!(damage.multi_damage, Some(vec![5, 7]));
    }

    #[test]
    fn test_non_damaging_card_fails() {
        let card = Card::non_attack(CardId::Defend, CardKind::Skill);
        assert!(BasicDamageResolver.resolve(&card, 0, &combat()).is_err());
        assert!(BasicDamageResolver
            .resolve(&Card::attack(CardId::Strike, 6), 5, &combat())
            .is_err());
    }
}
