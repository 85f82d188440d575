//! Action sequence builders.
//!
//! Each builder turns one source of pending effects into actions in the
//! order the host would execute them. [`crate::forecast::Forecaster`]
//! stitches them together per target.

pub mod card;
pub mod end_turn;
pub mod intent;
pub mod player;
pub mod temporary;

pub use card::{applies_vulnerable, hit_count, is_random_attack, CardExpansion};
pub use end_turn::{end_turn_actions, has_end_turn_damage};
pub use intent::{all_attack_intent_actions, attack_intent_actions};
pub use player::incoming_actions;
pub use temporary::TemporaryPowers;
