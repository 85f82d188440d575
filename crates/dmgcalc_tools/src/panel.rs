//! The player's forecast panel.
//!
//! During the player's turn the message is rebuilt every tick. Once the turn
//! ends, the last message stays on screen until the next turn starts.

use dmgcalc_core::turn::{TurnPhase, TurnSignal};
use tracing::debug;

/// Cached player message and the turn phase that governs it.
#[derive(Debug, Default)]
pub struct PlayerPanel {
    phase: TurnPhase,
    cached: Option<String>,
}

impl PlayerPanel {
    /// A panel outside the player's turn with nothing cached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Apply a host turn signal. A new turn drops the cached message.
    pub fn on_signal(&mut self, signal: TurnSignal) {
        if signal == TurnSignal::Started {
            debug!("Player turn started, clearing cached message");
            self.cached = None;
        }
        self.phase = self.phase.on_signal(signal);
    }

    /// Message to show this tick.
    ///
    /// `build` runs only during the player's turn; its result replaces the
    /// cache. Outside the player's turn the cache is returned, or an empty
    /// string when nothing was rendered yet.
    pub fn render(&mut self, build: impl FnOnce() -> String) -> &str {
        if self.phase.is_player_turn() {
            self.cached = Some(build());
        }
        self.cached.as_deref().unwrap_or_default()
    }
}
