//! Error types for the damage forecasting core.

use thiserror::Error;

/// Result type alias using [`CalcError`].
pub type Result<T> = std::result::Result<T, CalcError>;

/// Top-level error type for the forecasting core.
///
/// None of these ever reach the player: the sequence builder catches them
/// and falls back to a less informative action.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The host could not compute a card's damage against a target.
    #[error("Failed to resolve damage for card {card}: {message}")]
    ResolveFailed {
        /// Card that was being resolved.
        card: String,
        /// Reason reported by the resolver.
        message: String,
    },

    /// Per-target damage was requested for a monster the card has no entry for.
    #[error("Monster index {index} out of range for {len} per-target damage values")]
    MonsterIndexOutOfRange {
        /// Requested monster index.
        index: usize,
        /// Number of per-target values the card exposes.
        len: usize,
    },

    /// A creature id did not match any creature in the combat view.
    #[error("Creature not found: {0}")]
    CreatureNotFound(u32),

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path to the file that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },
}

impl CalcError {
    /// Shorthand for a resolver failure on a named card.
    pub fn resolve_failed(card: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ResolveFailed {
            card: card.into(),
            message: message.into(),
        }
    }
}
