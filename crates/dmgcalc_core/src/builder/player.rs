//! Everything queued to hit the player before their next turn.

use crate::action::Action;
use crate::builder::intent::all_attack_intent_actions;
use crate::combat::{Card, CardId, CombatState, PowerId, RelicId};
use crate::rules::Rules;

/// Incoming actions for the player, in execution order.
///
/// Concatenates, in this order: the hovered card's effects on its owner,
/// relic triggers, block powers, status and curse cards in hand, the
/// remaining end-of-turn powers, and every living monster's attack.
pub fn incoming_actions(combat: &CombatState, hovered: Option<&Card>, rules: &Rules) -> Vec<Action> {
    let mut actions = hovered.map(card_self_actions).unwrap_or_default();
    actions.extend(relic_actions(combat, rules));
    actions.extend(pre_hand_power_actions(combat));
    actions.extend(hand_actions(combat, rules));
    actions.extend(post_hand_power_actions(combat));
    actions.extend(all_attack_intent_actions(combat));
    actions
}

fn card_self_actions(card: &Card) -> Vec<Action> {
    let mut actions = Vec::new();
    if card.block > 0 {
        actions.push(Action::GainBlock(card.block));
    }
    if card.hp_cost > 0 {
        actions.push(Action::LoseHp(card.hp_cost));
    }
    actions
}

fn relic_actions(combat: &CombatState, rules: &Rules) -> Vec<Action> {
    let player = &combat.player;
    let mut actions = Vec::new();
    for relic in &player.relics {
        match relic.id {
            RelicId::Orichalcum if player.block == 0 || relic.triggered => {
                actions.insert(0, Action::GainBlock(rules.orichalcum_block));
            }
            RelicId::CloakClasp if !combat.hand.is_empty() => {
                let size = i32::try_from(combat.hand.len()).unwrap_or(i32::MAX);
                actions.push(Action::GainBlock(size));
            }
            _ => {}
        }
    }
    actions
}

fn pre_hand_power_actions(combat: &CombatState) -> Vec<Action> {
    combat
        .player
        .powers
        .iter()
        .filter(|p| matches!(p.id, PowerId::PlatedArmor | PowerId::Metallicize))
        .map(|p| Action::GainBlock(p.amount.max(0)))
        .collect()
}

fn hand_actions(combat: &CombatState, rules: &Rules) -> Vec<Action> {
    let hand_size = i32::try_from(combat.hand.len()).unwrap_or(i32::MAX);
    combat
        .hand
        .iter()
        .filter_map(|card| match card.id {
            CardId::Burn => Some(Action::thorns(card.magic_number)),
            CardId::Decay => Some(Action::thorns(rules.decay_damage)),
            CardId::Regret => Some(Action::LoseHp(hand_size)),
            _ => None,
        })
        .collect()
}

fn post_hand_power_actions(combat: &CombatState) -> Vec<Action> {
    let mut actions = Vec::new();
    for power in &combat.player.powers {
        match power.id {
            PowerId::Constricted => actions.push(Action::thorns(power.amount)),
            PowerId::Combust => {
                if let Some(hp_loss) = power.hp_loss {
                    actions.push(Action::LoseHp(hp_loss));
                }
            }
            PowerId::RegenerateMonster => actions.push(Action::GainHp(power.amount)),
            PowerId::Regeneration => actions.insert(0, Action::GainHp(power.amount)),
            _ => {}
        }
    }
    actions
}
