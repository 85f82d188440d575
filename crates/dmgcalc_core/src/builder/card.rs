//! Expansion of a hovered card into the actions it inflicts on one monster.
//!
//! The steps, in order:
//!
//! 1. One base action from the host's damage for this target, expanded into
//!    one hit per card hit.
//! 2. Extra copies for each replay power the player holds (Double Tap,
//!    Duplication, Echo Form). Replayed attacks are re-resolved under
//!    temporary powers when the first play would have changed the numbers.
//! 3. Each copy is wrapped with the per-play reactions (Choke on the target,
//!    A Thousand Cuts on the player) and closed by [`Action::RefineStats`].
//! 4. Panache's countdown inserts its burst where it reaches zero.
//! 5. The result is flattened.

use tracing::{debug, warn};

use crate::action::{flatten, group, Action};
use crate::builder::temporary::TemporaryPowers;
use crate::combat::{Card, CardId, CombatState, Power, PowerId, RelicId};
use crate::error::{CalcError, Result};
use crate::resolver::CardDamageResolver;
use crate::rules::Rules;

/// Cards whose hits each pick a random enemy.
pub fn is_random_attack(card: &Card) -> bool {
    matches!(
        card.id,
        CardId::SwordBoomerang | CardId::Ragnarok | CardId::RipAndTear | CardId::ThunderStrike
    )
}

/// Cards whose first play leaves the target Vulnerable.
pub fn applies_vulnerable(card: &Card) -> bool {
    matches!(
        card.id,
        CardId::Bash
            | CardId::ThunderClap
            | CardId::Shockwave
            | CardId::Uppercut
            | CardId::Terror
            | CardId::BeamCell
            | CardId::CrushJoints
            | CardId::Indignation
    )
}

/// Number of times the card hits its target.
pub fn hit_count(card: &Card, combat: &CombatState, rules: &Rules) -> i32 {
    match card.id {
        CardId::TwinStrike | CardId::DaggerSpray => 2,
        CardId::RiddleWithHoles => 5,
        CardId::Eviscerate => 3,
        CardId::Pummel
        | CardId::Tantrum
        | CardId::SwordBoomerang
        | CardId::Ragnarok
        | CardId::RipAndTear => card.magic_number,
        CardId::Whirlwind | CardId::Skewer | CardId::Expunger => {
            let bonus = if combat.player.has_relic(&RelicId::ChemicalX) {
                rules.chemical_x_bonus
            } else {
                0
            };
            combat.energy.saturating_add(bonus)
        }
        CardId::FiendFire => i32::try_from(combat.hand.len()).unwrap_or(i32::MAX) - 1,
        CardId::ThunderStrike => combat.lightning_channeled,
        _ => 1,
    }
}

/// Builds card action sequences against monsters.
#[derive(Debug)]
pub struct CardExpansion<'r, R> {
    resolver: &'r R,
    rules: &'r Rules,
}

impl<'r, R: CardDamageResolver> CardExpansion<'r, R> {
    /// Create an expansion backed by the host's damage resolver.
    pub fn new(resolver: &'r R, rules: &'r Rules) -> Self {
        Self { resolver, rules }
    }

    /// Every action playing `card` inflicts on the monster at `monster_index`,
    /// flattened and in execution order.
    ///
    /// `combat` is borrowed mutably only for temporary power edits; it is
    /// identical to its input when this returns.
    pub fn actions(
        &self,
        card: &Card,
        monster_index: usize,
        combat: &mut CombatState,
    ) -> Vec<Action> {
        let alive = combat.alive_monster_count();
        let base = match self.base_action(card, monster_index, combat, alive) {
            Ok(action) => action,
            Err(e) => {
                warn!(card = %card.id, monster_index, error = %e, "Card damage unavailable");
                Action::NoAction
            }
        };

        let mut actions = vec![base.clone()];

        let player_powers = combat.player.powers.clone();
        for power in &player_powers {
            match power.id {
                PowerId::DoubleTap | PowerId::Duplication => {
                    if card.is_attack() {
                        actions.push(self.extra_attack(card, monster_index, combat, &base, alive));
                    } else if power.id == PowerId::Duplication {
                        actions.push(base.clone());
                    }
                }
                PowerId::EchoForm => {
                    let doubled = power.cards_doubled_this_turn.unwrap_or(0);
                    if power.amount > 0
                        && combat.cards_played_this_turn + 1 - doubled <= power.amount
                    {
                        if card.is_attack() {
                            actions
                                .push(self.extra_attack(card, monster_index, combat, &base, alive));
                        } else {
                            actions.push(base.clone());
                        }
                    }
                }
                _ => {}
            }
        }

        let actions = with_reactions(actions, monster_index, combat);
        let actions = self.with_panache(actions, combat);
        flatten(actions)
    }

    fn base_action(
        &self,
        card: &Card,
        monster_index: usize,
        combat: &CombatState,
        alive: usize,
    ) -> Result<Action> {
        if !card.is_attack() {
            return Ok(Action::NoAction);
        }
        let target = combat
            .monsters
            .get(monster_index)
            .ok_or(CalcError::MonsterIndexOutOfRange {
                index: monster_index,
                len: combat.monsters.len(),
            })?
            .id;

        let damage = self
            .resolver
            .resolve(card, monster_index, combat)?
            .damage_per_hit(monster_index)?;
        let hits = hit_count(card, combat, self.rules);

        let action = match hits {
            1 => Action::damage_to(damage, target),
            n if n > 1 => {
                let n = usize::try_from(n).unwrap_or_default();
                let hit = if is_random_attack(card) && alive > 1 {
                    Action::damage_range_to(0, damage, target)
                } else {
                    Action::damage_to(damage, target)
                };
                group(vec![hit; n])
            }
            _ => Action::NoAction,
        };
        Ok(action)
    }

    /// The replayed attack, re-resolved as the host would see it after the
    /// first play. Falls back to `base` when nothing changes or the
    /// recomputation fails.
    fn extra_attack(
        &self,
        card: &Card,
        monster_index: usize,
        combat: &mut CombatState,
        base: &Action,
        alive: usize,
    ) -> Action {
        let Some(target) = combat.monsters.get(monster_index).map(|m| m.id) else {
            return base.clone();
        };
        let add_vulnerable = applies_vulnerable(card)
            && !combat.monsters[monster_index].has_power(&PowerId::Vulnerable);
        let clear_vigor = combat.player.has_power(&PowerId::Vigor);

        if !add_vulnerable && !clear_vigor {
            return base.clone();
        }

        let player = combat.player.id;
        let recomputed = {
            let mut window = TemporaryPowers::new(combat);
            self.recompute(&mut window, card, monster_index, alive, |window| {
                if add_vulnerable {
                    window.add(target, Power::new(PowerId::Vulnerable, 1))?;
                }
                if clear_vigor {
                    window.zero_amount(player, &PowerId::Vigor)?;
                }
                Ok(())
            })
        };

        match recomputed {
            Ok(action) => action,
            Err(e) => {
                warn!(card = %card.id, monster_index, error = %e, "Replay recomputation failed, reusing base action");
                base.clone()
            }
        }
    }

    /// Apply `edit` inside the window, then resolve the card again.
    fn recompute(
        &self,
        window: &mut TemporaryPowers<'_>,
        card: &Card,
        monster_index: usize,
        alive: usize,
        edit: impl FnOnce(&mut TemporaryPowers<'_>) -> Result<()>,
    ) -> Result<Action> {
        edit(window)?;
        self.base_action(card, monster_index, window, alive)
    }

    fn with_panache(&self, actions: Vec<Action>, combat: &CombatState) -> Vec<Action> {
        let Some(panache) = combat.player.power(&PowerId::Panache) else {
            return actions;
        };
        let Some(damage) = panache.damage else {
            debug!("Panache damage unknown, skipping its burst");
            return actions;
        };

        let mut remaining = panache.amount;
        let mut out = Vec::with_capacity(actions.len() + 1);
        for action in actions {
            out.push(action);
            remaining = remaining.saturating_sub(1);
            if remaining == 0 {
                out.push(Action::thorns(damage));
                remaining = self.rules.panache_card_amount;
            }
        }
        out
    }
}

/// Wrap each play with its per-play reactions and a closing marker.
fn with_reactions(actions: Vec<Action>, monster_index: usize, combat: &CombatState) -> Vec<Action> {
    let mut reactions: Vec<Action> = combat
        .monsters
        .get(monster_index)
        .map(|monster| {
            monster
                .powers
                .iter()
                .filter(|p| p.id == PowerId::Choke)
                .map(|p| Action::LoseHp(p.amount))
                .collect()
        })
        .unwrap_or_default();
    reactions.extend(
        combat
            .player
            .powers
            .iter()
            .filter(|p| p.id == PowerId::ThousandCuts)
            .map(|p| Action::thorns(p.amount)),
    );

    actions
        .into_iter()
        .map(|action| {
            let mut play = Vec::with_capacity(reactions.len() + 2);
            play.push(action);
            play.extend(reactions.iter().cloned());
            play.push(Action::RefineStats);
            group(play)
        })
        .collect()
}
