//! Game constants the sequence builder depends on.
//!
//! Pure data, deserializable from RON. Every field defaults to the base
//! game's value, so a rules file only lists what it overrides.
//!
//! **Note:** This module contains no IO. File loading is handled by
//! `dmgcalc_tools`.
//!
//! # Example RON
//!
//! ```ron
//! Rules(
//!     panache_card_amount: 5,
//!     stone_calendar_turn: 7,
//!     stone_calendar_damage: 52,
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Tunable constants for building action sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Cards between Panache triggers; the countdown resets to this.
    pub panache_card_amount: i32,
    /// Stone Calendar counter value on which it fires.
    pub stone_calendar_turn: i32,
    /// Damage Stone Calendar deals to every enemy.
    pub stone_calendar_damage: i32,
    /// Block Orichalcum grants.
    pub orichalcum_block: i32,
    /// Damage a Decay curse deals to its holder.
    pub decay_damage: i32,
    /// Extra hits Chemical X adds to X-cost attacks.
    pub chemical_x_bonus: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            panache_card_amount: 5,
            stone_calendar_turn: 7,
            stone_calendar_damage: 52,
            orichalcum_block: 6,
            decay_damage: 2,
            chemical_x_bonus: 2,
        }
    }
}

impl Rules {
    /// Parse rules from RON source. `origin` names the source in errors.
    pub fn from_ron_str(origin: &str, source: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| CalcError::DataParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }
}
