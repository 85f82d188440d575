//! Player effects that damage every enemy when the turn ends.

use crate::action::Action;
use crate::combat::{Creature, PowerId, RelicId};
use crate::rules::Rules;

fn stone_calendar_fires(creature: &Creature, rules: &Rules) -> bool {
    creature.is_player()
        && creature
            .relic(&RelicId::StoneCalendar)
            .is_some_and(|relic| relic.counter == rules.stone_calendar_turn)
}

fn is_bomb_going_off(id: &PowerId, amount: i32) -> bool {
    *id == PowerId::TheBomb && amount == 1
}

/// Whether `creature` will damage enemies when its turn ends.
pub fn has_end_turn_damage(creature: &Creature, rules: &Rules) -> bool {
    let from_powers = creature.powers.iter().any(|p| {
        matches!(p.id, PowerId::Combust | PowerId::Omega) || is_bomb_going_off(&p.id, p.amount)
    });
    from_powers || stone_calendar_fires(creature, rules)
}

/// Damage `creature` deals to every enemy when its turn ends.
pub fn end_turn_actions(creature: &Creature, rules: &Rules) -> Vec<Action> {
    let mut actions = Vec::new();
    if stone_calendar_fires(creature, rules) {
        actions.push(Action::thorns(rules.stone_calendar_damage));
    }
    for power in &creature.powers {
        match power.id {
            PowerId::Combust | PowerId::Omega => actions.push(Action::thorns(power.amount)),
            ref id if is_bomb_going_off(id, power.amount) => {
                if let Some(damage) = power.damage {
                    actions.push(Action::thorns(damage));
                }
            }
            _ => {}
        }
    }
    actions
}
