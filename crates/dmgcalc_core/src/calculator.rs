//! Dual-pass calculator: the worst and best timelines of one action sequence.
//!
//! Each pass replays the whole sequence with a fixed magnitude policy. This is
//! not a bound over every combination of per-action choices: a worst-case
//! pass spends buffer and curl-up according to worst-case magnitudes all the
//! way through.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::outcome::Outcome;
use crate::snapshot::CreatureSnapshot;

/// Magnitude-selection policy of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    /// Every action at its minimum magnitude.
    Worst,
    /// Every action at its maximum magnitude.
    Best,
}

impl Timeline {
    /// Whether this pass reads each action's maximum.
    #[must_use]
    pub const fn use_max(self) -> bool {
        matches!(self, Self::Best)
    }
}

/// Terminal outcomes of the two timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutcomePair {
    /// Result with every action at its minimum.
    pub worst: Outcome,
    /// Result with every action at its maximum.
    pub best: Outcome,
}

impl OutcomePair {
    /// Outcome of the requested timeline.
    #[must_use]
    pub const fn get(&self, timeline: Timeline) -> &Outcome {
        match timeline {
            Timeline::Worst => &self.worst,
            Timeline::Best => &self.best,
        }
    }

    /// Run `actions` as a second phase after this pair.
    ///
    /// The worst phase starts from where the worst timeline ended, the best
    /// phase from where the best ended.
    #[must_use]
    pub fn then(&self, actions: &[Action], snapshot: &CreatureSnapshot) -> Self {
        Self {
            worst: run_timeline(actions, &snapshot.following(&self.worst), Timeline::Worst),
            best: run_timeline(actions, &snapshot.following(&self.best), Timeline::Best),
        }
    }
}

/// Replay `actions` from a fresh outcome under one policy.
#[must_use]
pub fn run_timeline(actions: &[Action], snapshot: &CreatureSnapshot, timeline: Timeline) -> Outcome {
    let use_max = timeline.use_max();
    let mut outcome = Outcome::seeded(snapshot);
    for action in actions {
        outcome.apply(action, use_max, snapshot);
    }
    outcome
}

/// Worst-case timeline of `actions`.
#[must_use]
pub fn calculate_worst(actions: &[Action], snapshot: &CreatureSnapshot) -> Outcome {
    run_timeline(actions, snapshot, Timeline::Worst)
}

/// Best-case timeline of `actions`.
#[must_use]
pub fn calculate_best(actions: &[Action], snapshot: &CreatureSnapshot) -> Outcome {
    run_timeline(actions, snapshot, Timeline::Best)
}

/// Both timelines of a flattened sequence, skipping `NoAction` entries.
#[must_use]
pub fn calculate_outcome(actions: &[Action], snapshot: &CreatureSnapshot) -> OutcomePair {
    let actions: Vec<Action> = actions
        .iter()
        .filter(|action| !action.is_no_action())
        .cloned()
        .collect();

    OutcomePair {
        worst: calculate_worst(&actions, snapshot),
        best: calculate_best(&actions, snapshot),
    }
}
