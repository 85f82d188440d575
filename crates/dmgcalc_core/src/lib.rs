//! # Damage Calculator Core
//!
//! Turn-scoped damage forecasting for a deck-building card combat.
//!
//! Before a card is played this crate answers: what is the best and worst
//! result for each creature, counting everything else queued to happen this
//! turn and at its end?
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO
//! - No randomness
//!
//! Everything it knows about the fight comes from a [`combat::CombatState`]
//! view filled in by the host, plus a [`resolver::CardDamageResolver`] the
//! host implements to compute card damage.
//!
//! ## Crate Structure
//!
//! - [`action`] - Effect primitives and grouping
//! - [`snapshot`] - Start-of-calculation creature resources
//! - [`outcome`] - Per-action outcome pipeline
//! - [`calculator`] - Worst and best timelines
//! - [`builder`] - Ordered action sequences from cards, relics, powers and intents
//! - [`forecast`] - Per-creature forecasts for one tick

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod action;
pub mod builder;
pub mod calculator;
pub mod combat;
pub mod error;
pub mod forecast;
pub mod outcome;
pub mod resolver;
pub mod rules;
pub mod snapshot;
pub mod turn;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::action::{flatten, group, retain_reaching, Action, ActionTarget, Range};
    pub use crate::calculator::{calculate_outcome, OutcomePair, Timeline};
    pub use crate::combat::{
        Card, CardId, CardKind, CombatState, Creature, CreatureId, CreatureKind, Intent,
        IntentKind, Power, PowerId, Relic, RelicId,
    };
    pub use crate::error::{CalcError, Result};
    pub use crate::forecast::{Forecast, Forecaster, MonsterForecast};
    pub use crate::outcome::Outcome;
    pub use crate::resolver::{CardDamage, CardDamageResolver};
    pub use crate::rules::Rules;
    pub use crate::snapshot::{CreatureSnapshot, DamageRelic};
    pub use crate::turn::{TurnPhase, TurnSignal};
}
