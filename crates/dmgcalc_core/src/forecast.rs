//! Per-creature forecasts for one render tick.
//!
//! The [`Forecaster`] combines the builders with the dual-pass calculator:
//! it captures a snapshot of each target, builds the actions queued against
//! it, and runs both timelines.

use serde::{Deserialize, Serialize};

use crate::action::retain_reaching;
use crate::builder::{end_turn_actions, has_end_turn_damage, incoming_actions, CardExpansion};
use crate::calculator::{calculate_outcome, OutcomePair};
use crate::combat::{Card, CombatState, CreatureId};
use crate::resolver::CardDamageResolver;
use crate::rules::Rules;
use crate::snapshot::CreatureSnapshot;

/// Forecast for one living monster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterForecast {
    /// Monster this forecast is for.
    pub monster: CreatureId,
    /// Result of playing the hovered card, if one is hovered.
    pub card: Option<OutcomePair>,
    /// Whether the card phase's remaining health is final for this turn.
    pub show_card_remaining_health: bool,
    /// End-of-turn damage, chained after the card phase when there is one.
    pub end_turn: Option<OutcomePair>,
}

/// Everything forecast in one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    /// What the player takes before their next turn.
    pub player: OutcomePair,
    /// One entry per living monster, in monster order.
    pub monsters: Vec<MonsterForecast>,
}

/// Builds forecasts from a combat view and the host's damage resolver.
#[derive(Debug, Clone)]
pub struct Forecaster<R> {
    rules: Rules,
    resolver: R,
}

impl<R: CardDamageResolver> Forecaster<R> {
    /// Create a forecaster with base game rules.
    pub fn new(resolver: R) -> Self {
        Self {
            rules: Rules::default(),
            resolver,
        }
    }

    /// Builder method to use custom rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Rules in use.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The host damage resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Both timelines for the player, with `hovered` as the card about to be
    /// played.
    pub fn player(&self, combat: &CombatState, hovered: Option<&Card>) -> OutcomePair {
        let snapshot = CreatureSnapshot::capture(&combat.player);
        let actions = incoming_actions(combat, hovered, &self.rules);
        calculate_outcome(&actions, &snapshot)
    }

    /// Forecasts for every living monster.
    ///
    /// `combat` is only borrowed mutably so replayed attacks can be
    /// re-resolved under temporary powers; it is unchanged on return.
    pub fn monsters(&self, combat: &mut CombatState, hovered: Option<&Card>) -> Vec<MonsterForecast> {
        let targets: Vec<(usize, CreatureId)> = combat
            .alive_monsters_indexed()
            .map(|(index, monster)| (index, monster.id))
            .collect();
        let end_turn_damage = has_end_turn_damage(&combat.player, &self.rules);
        let end_actions = end_turn_actions(&combat.player, &self.rules);
        let expansion = CardExpansion::new(&self.resolver, &self.rules);

        targets
            .into_iter()
            .map(|(index, monster)| {
                let snapshot = CreatureSnapshot::capture(&combat.monsters[index]);

                let Some(card) = hovered else {
                    return MonsterForecast {
                        monster,
                        card: None,
                        show_card_remaining_health: false,
                        end_turn: end_turn_damage
                            .then(|| calculate_outcome(&end_actions, &snapshot)),
                    };
                };

                let mut actions = expansion.actions(card, index, combat);
                if let Some(focus) = combat.hovered_monster {
                    actions = retain_reaching(actions, focus);
                }
                let card_phase = calculate_outcome(&actions, &snapshot);

                let show_card_remaining_health = card_phase.best.is_dead() || !end_turn_damage;
                let end_turn = (!show_card_remaining_health)
                    .then(|| card_phase.then(&end_actions, &snapshot));

                MonsterForecast {
                    monster,
                    card: Some(card_phase),
                    show_card_remaining_health,
                    end_turn,
                }
            })
            .collect()
    }

    /// Player and monster forecasts together.
    pub fn forecast(&self, combat: &mut CombatState, hovered: Option<&Card>) -> Forecast {
        Forecast {
            player: self.player(combat, hovered),
            monsters: self.monsters(combat, hovered),
        }
    }
}
