//! Action model: atomic and grouped combat effects with min/max magnitudes.
//!
//! An [`Action`] is one queued effect against a creature. Damage actions carry
//! a `(min, max)` pair that the worst and best timelines read independently;
//! nothing here normalizes the pair. [`Range::sorted`] is the display-side
//! normalization.

use serde::{Deserialize, Serialize};

use crate::combat::CreatureId;

/// Who a damage action is addressed to.
///
/// Only used to drop actions aimed at other creatures before simulation; the
/// outcome math never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActionTarget {
    /// A specific creature.
    Single(CreatureId),
    /// Every enemy at once.
    All,
    /// Untargeted.
    #[default]
    None,
}

impl ActionTarget {
    /// Whether an action with this target is kept when only `focus` matters.
    #[must_use]
    pub fn reaches(self, focus: CreatureId) -> bool {
        match self {
            Self::Single(id) => id == focus,
            Self::All | Self::None => true,
        }
    }
}

/// One atomic or grouped combat effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Composite with no magnitude of its own. Flattened before simulation.
    Grouped(Vec<Action>),
    /// Attack damage: block, buffer, intangible, and relics all apply.
    DamageNormal {
        /// Magnitude used by the worst-case timeline.
        min: i32,
        /// Magnitude used by the best-case timeline.
        max: i32,
        /// Addressee, for filtering only.
        target: ActionTarget,
    },
    /// Retaliation-style damage. Ignores monster-only intangible and Torii.
    DamageThorns {
        /// Magnitude used by the worst-case timeline.
        min: i32,
        /// Magnitude used by the best-case timeline.
        max: i32,
        /// Addressee, for filtering only.
        target: ActionTarget,
    },
    /// Direct health loss, bypassing block, buffer, relics, and curl-up.
    LoseHp(i32),
    /// Healing, capped at maximum health, only while still alive.
    GainHp(i32),
    /// Adds block unconditionally.
    GainBlock(i32),
    /// Identity.
    NoAction,
    /// Marks the end of a base action and its reactive consequences.
    RefineStats,
}

impl Action {
    /// Fixed-magnitude untargeted attack damage.
    #[must_use]
    pub const fn damage(value: i32) -> Self {
        Self::DamageNormal {
            min: value,
            max: value,
            target: ActionTarget::None,
        }
    }

    /// Fixed-magnitude attack damage against one creature.
    #[must_use]
    pub const fn damage_to(value: i32, target: CreatureId) -> Self {
        Self::DamageNormal {
            min: value,
            max: value,
            target: ActionTarget::Single(target),
        }
    }

    /// Attack damage against one creature that may land anywhere in `min..=max`.
    #[must_use]
    pub const fn damage_range_to(min: i32, max: i32, target: CreatureId) -> Self {
        Self::DamageNormal {
            min,
            max,
            target: ActionTarget::Single(target),
        }
    }

    /// Fixed-magnitude thorns damage hitting every enemy.
    #[must_use]
    pub const fn thorns(value: i32) -> Self {
        Self::DamageThorns {
            min: value,
            max: value,
            target: ActionTarget::All,
        }
    }

    /// Magnitude read by the worst-case timeline. Zero for composites.
    #[must_use]
    pub fn min(&self) -> i32 {
        match self {
            Self::DamageNormal { min, .. } | Self::DamageThorns { min, .. } => *min,
            Self::LoseHp(v) | Self::GainHp(v) | Self::GainBlock(v) => *v,
            Self::Grouped(_) | Self::NoAction | Self::RefineStats => 0,
        }
    }

    /// Magnitude read by the best-case timeline. Zero for composites.
    #[must_use]
    pub fn max(&self) -> i32 {
        match self {
            Self::DamageNormal { max, .. } | Self::DamageThorns { max, .. } => *max,
            Self::LoseHp(v) | Self::GainHp(v) | Self::GainBlock(v) => *v,
            Self::Grouped(_) | Self::NoAction | Self::RefineStats => 0,
        }
    }

    /// Magnitude for the given timeline.
    #[must_use]
    pub fn magnitude(&self, use_max: bool) -> i32 {
        if use_max {
            self.max()
        } else {
            self.min()
        }
    }

    /// Addressee of a damage action, if it has one.
    #[must_use]
    pub fn target(&self) -> Option<ActionTarget> {
        match self {
            Self::DamageNormal { target, .. } | Self::DamageThorns { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Whether this is the identity action.
    #[must_use]
    pub fn is_no_action(&self) -> bool {
        matches!(self, Self::NoAction)
    }
}

/// Wrap a list of actions into a single composite.
#[must_use]
pub fn group(actions: Vec<Action>) -> Action {
    Action::Grouped(actions)
}

/// Expand every [`Action::Grouped`] recursively, depth-first, keeping order.
#[must_use]
pub fn flatten(actions: Vec<Action>) -> Vec<Action> {
    let mut out = Vec::with_capacity(actions.len());
    flatten_into(actions, &mut out);
    out
}

fn flatten_into(actions: Vec<Action>, out: &mut Vec<Action>) {
    for action in actions {
        match action {
            Action::Grouped(children) => flatten_into(children, out),
            leaf => out.push(leaf),
        }
    }
}

/// Drop single-target damage aimed at anyone other than `focus`.
///
/// Area and untargeted damage, and every non-damage action, are kept.
#[must_use]
pub fn retain_reaching(actions: Vec<Action>, focus: CreatureId) -> Vec<Action> {
    actions
        .into_iter()
        .filter(|action| action.target().map_or(true, |t| t.reaches(focus)))
        .collect()
}

/// A displayed `(min, max)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    /// Lower endpoint as given.
    pub min: i32,
    /// Upper endpoint as given.
    pub max: i32,
}

impl Range {
    /// Create a range from two endpoints without reordering them.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// A range with both endpoints equal to `value`.
    #[must_use]
    pub const fn constant(value: i32) -> Self {
        Self::new(value, value)
    }

    /// Single representative value (the upper endpoint).
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.max
    }

    /// Whether both endpoints agree.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.min == self.max
    }

    /// Same range with endpoints swapped if they were out of order.
    #[must_use]
    pub const fn sorted(self) -> Self {
        if self.min <= self.max {
            self
        } else {
            Self::new(self.max, self.min)
        }
    }
}
