//! Scenario loading.
//!
//! A scenario is one frozen moment of a fight: the combat view the host
//! would hand over, the card under the cursor, and optional rule overrides.
//!
//! # Example RON
//!
//! ```ron
//! Scenario(
//!     name: "Bash the cultist",
//!     combat: (
//!         player: (id: 0, kind: Player, current_health: 70, max_health: 80),
//!         monsters: [
//!             (id: 1, kind: Monster, current_health: 48, max_health: 48,
//!              intent: Some((kind: Attack, damage: 6, multi: 1))),
//!         ],
//!         energy: 3,
//!     ),
//!     hovered_card: Some((id: Bash, kind: Attack, base_damage: 8)),
//! )
//! ```

use std::path::Path;

use dmgcalc_core::combat::{Card, CombatState, CreatureKind};
use dmgcalc_core::error::CalcError;
use dmgcalc_core::rules::Rules;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for scenario operations.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// File not found.
    #[error("Scenario file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] ron::error::SpannedError),
    /// Failed to parse a rules file.
    #[error(transparent)]
    Rules(#[from] CalcError),
}

/// One fight, frozen at the moment a card is hovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// What the host would report this tick.
    pub combat: CombatState,
    /// Card under the cursor, if any.
    #[serde(default)]
    pub hovered_card: Option<Card>,
    /// Rule overrides; base game rules when absent.
    #[serde(default)]
    pub rules: Option<Rules>,
}

impl Scenario {
    /// Load a scenario from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let scenario: Scenario = ron::from_str(&contents)?;
        Ok(scenario)
    }

    /// Load from a RON string (useful for embedded scenarios).
    pub fn from_ron_str(ron: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = ron::from_str(ron)?;
        Ok(scenario)
    }

    /// Problems that would make forecasts meaningless.
    ///
    /// An empty list means the scenario is usable.
    pub fn problems(&self) -> Vec<String> {
        let combat = &self.combat;
        let mut problems = Vec::new();

        if combat.player.kind != CreatureKind::Player {
            problems.push(format!("player {} is not marked as Player", combat.player.id));
        }
        let mut ids = vec![combat.player.id];
        for monster in &combat.monsters {
            if monster.kind != CreatureKind::Monster {
                problems.push(format!("monster {} is not marked as Monster", monster.id));
            }
            if ids.contains(&monster.id) {
                problems.push(format!("creature id {} is used twice", monster.id));
            }
            ids.push(monster.id);
        }
        for creature in std::iter::once(&combat.player).chain(&combat.monsters) {
            if creature.current_health > creature.max_health {
                problems.push(format!(
                    "creature {} has {} of {} health",
                    creature.id, creature.current_health, creature.max_health
                ));
            }
        }
        if let Some(hovered) = combat.hovered_monster {
            match combat.creature(hovered) {
                None => problems.push(format!("hovered monster {hovered} is not in the fight")),
                Some(creature) if creature.kind != CreatureKind::Monster => {
                    problems.push(format!("hovered creature {hovered} is not a monster"));
                }
                Some(_) => {}
            }
        }
        problems
    }
}

/// Load a rules file.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<Rules, ScenarioError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ScenarioError::FileNotFound(path.display().to_string()));
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(Rules::from_ron_str(&path.display().to_string(), &contents)?)
}
