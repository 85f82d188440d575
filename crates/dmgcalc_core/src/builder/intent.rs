//! Monster intents as incoming actions.

use crate::action::Action;
use crate::combat::{CombatState, Creature};

/// The hits a monster's attacking intent will land on the player.
pub fn attack_intent_actions(monster: &Creature) -> Vec<Action> {
    match &monster.intent {
        Some(intent) if intent.kind.is_attacking() => {
            let hits = usize::try_from(intent.hits()).unwrap_or(1);
            vec![Action::damage(intent.damage); hits]
        }
        _ => Vec::new(),
    }
}

/// Attack intents of every living monster, in monster order.
pub fn all_attack_intent_actions(combat: &CombatState) -> Vec<Action> {
    combat
        .alive_monsters_indexed()
        .flat_map(|(_, monster)| attack_intent_actions(monster))
        .collect()
}
