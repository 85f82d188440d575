//! Text display adapter.
//!
//! Renders outcome pairs as the short multi-line messages shown above each
//! creature. Ranges read `low~high`; a range of remaining health reads from
//! the best case to the worst case.

use std::fmt;

use dmgcalc_core::action::Range;
use dmgcalc_core::calculator::OutcomePair;
use dmgcalc_core::forecast::MonsterForecast;

/// Header printed above an end-of-turn phase.
pub const END_TURN_HEADER: &str = "--End Turn--";

struct ShownRange {
    range: Range,
    reversed: bool,
}

impl fmt::Display for ShownRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.range.sorted();
        if range.is_constant() {
            write!(f, "{}", range.value())
        } else if self.reversed {
            write!(f, "{}~{}", range.max, range.min)
        } else {
            write!(f, "{}~{}", range.min, range.max)
        }
    }
}

fn shown(min: i32, max: i32) -> ShownRange {
    ShownRange {
        range: Range::new(min, max),
        reversed: false,
    }
}

/// Message for one outcome pair.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeReport<'a> {
    pair: &'a OutcomePair,
    show_remaining_health: bool,
}

impl<'a> OutcomeReport<'a> {
    /// Report including the remaining health line.
    pub fn new(pair: &'a OutcomePair) -> Self {
        Self {
            pair,
            show_remaining_health: true,
        }
    }

    /// Builder method to choose whether the remaining health line is shown.
    #[must_use]
    pub fn showing_remaining_health(mut self, show: bool) -> Self {
        self.show_remaining_health = show;
        self
    }
}

impl fmt::Display for OutcomeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (worst, best) = (&self.pair.worst, &self.pair.best);

        write!(f, "Take {} damage", shown(worst.damage, best.damage))?;

        if worst.blocked != best.blocked {
            write!(f, "\n({} blocked)", shown(worst.blocked, best.blocked))?;
        } else if best.blocked > 0 {
            write!(f, "\n({} blocked)", best.blocked)?;
        }

        if worst.adjust_health == best.adjust_health {
            if best.adjust_health < 0 {
                write!(f, "\nLose extra {} HP", -best.adjust_health)?;
            } else if best.adjust_health > 0 {
                write!(f, "\nGain extra {} HP", best.adjust_health)?;
            }
        }

        if self.show_remaining_health {
            if worst.remaining_health != best.remaining_health {
                let remaining = ShownRange {
                    range: Range::new(worst.remaining_health, best.remaining_health),
                    reversed: true,
                };
                write!(f, "\n{remaining} HP remains")?;
            } else if best.is_dead() {
                write!(f, "\nDEAD")?;
            } else {
                write!(f, "\n{} HP remains", best.remaining_health)?;
            }
        }
        Ok(())
    }
}

/// Full message for one monster, or an empty string when there is nothing
/// to show.
pub fn monster_message(forecast: &MonsterForecast) -> String {
    let mut lines = Vec::new();
    if let Some(card) = &forecast.card {
        lines.push(
            OutcomeReport::new(card)
                .showing_remaining_health(forecast.show_card_remaining_health)
                .to_string(),
        );
    }
    if let Some(end_turn) = &forecast.end_turn {
        lines.push(END_TURN_HEADER.to_string());
        lines.push(OutcomeReport::new(end_turn).to_string());
    }
    lines.join("\n")
}
