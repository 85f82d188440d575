//! Turn phase tracking.
//!
//! The host signals when the player's turn starts and ends. The forecaster
//! only needs to know which side of that edge it is on: during the player's
//! turn predictions are rebuilt, otherwise the last one is kept on screen.

use serde::{Deserialize, Serialize};

/// Edge-triggered notification from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnSignal {
    /// The player's turn just started.
    Started,
    /// The player just ended their turn.
    Ended,
}

/// Which side of the turn boundary the fight is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TurnPhase {
    /// The player is acting; forecasts are rebuilt every tick.
    Player,
    /// Monsters are acting; the last forecast is reused.
    #[default]
    Enemy,
}

impl TurnPhase {
    /// Phase after receiving `signal`.
    #[must_use]
    pub const fn on_signal(self, signal: TurnSignal) -> Self {
        match signal {
            TurnSignal::Started => Self::Player,
            TurnSignal::Ended => Self::Enemy,
        }
    }

    /// Whether a fresh forecast should be built.
    #[must_use]
    pub const fn is_player_turn(self) -> bool {
        matches!(self, Self::Player)
    }
}
