//! Scoped, fully reversible power changes.
//!
//! Some repeated attacks deal different damage than the first play: the
//! target already carries the Vulnerable the first play applied, and the
//! player's Vigor is already spent. To ask the host for that second number
//! the forecaster briefly edits the live power lists, asks, and puts them
//! back. [`TemporaryPowers`] holds the exclusive borrow for the whole window
//! and restores every touched creature when dropped, whether the
//! recomputation returned normally, returned an error, or panicked.

use std::ops::Deref;

use crate::combat::{CombatState, CreatureId, Power, PowerId};
use crate::error::{CalcError, Result};

/// Exclusive, self-restoring edit window over a combat's power lists.
#[derive(Debug)]
pub struct TemporaryPowers<'a> {
    combat: &'a mut CombatState,
    saved: Vec<(CreatureId, Vec<Power>)>,
}

impl<'a> TemporaryPowers<'a> {
    /// Open an edit window. Nothing changes until a method is called.
    pub fn new(combat: &'a mut CombatState) -> Self {
        Self {
            combat,
            saved: Vec::new(),
        }
    }

    /// Add `power` to a creature, stacking onto an existing instance.
    pub fn add(&mut self, creature: CreatureId, power: Power) -> Result<&mut Self> {
        let powers = self.powers_mut(creature)?;
        match powers.iter_mut().find(|p| p.id == power.id) {
            Some(existing) => existing.amount = existing.amount.saturating_add(power.amount),
            None => powers.push(power),
        }
        Ok(self)
    }

    /// Set the amount of every instance of `id` on a creature to zero.
    pub fn zero_amount(&mut self, creature: CreatureId, id: &PowerId) -> Result<&mut Self> {
        let powers = self.powers_mut(creature)?;
        for power in powers.iter_mut().filter(|p| &p.id == id) {
            power.amount = 0;
        }
        Ok(self)
    }

    /// Whether any creature has been changed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.saved.is_empty()
    }

    fn powers_mut(&mut self, id: CreatureId) -> Result<&mut Vec<Power>> {
        let creature = self
            .combat
            .creature_mut(id)
            .ok_or(CalcError::CreatureNotFound(id.0))?;
        if !self.saved.iter().any(|(saved_id, _)| *saved_id == id) {
            self.saved.push((id, creature.powers.clone()));
        }
        Ok(&mut creature.powers)
    }
}

impl Deref for TemporaryPowers<'_> {
    type Target = CombatState;

    fn deref(&self) -> &CombatState {
        self.combat
    }
}

impl Drop for TemporaryPowers<'_> {
    fn drop(&mut self) {
        if !self.is_dirty() {
            return;
        }
        let restored = self.saved.len();
        for (id, powers) in self.saved.drain(..) {
            if let Some(creature) = self.combat.creature_mut(id) {
                creature.powers = powers;
            }
        }
        tracing::debug!(creatures = restored, "Restored temporary power changes");
    }
}
