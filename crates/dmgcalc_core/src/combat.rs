//! Host-facing combat view.
//!
//! The host game owns the real entities. Every tick it fills these plain data
//! types with the fields the forecaster reads, including the few values the
//! host normally keeps private (a power's stored damage, an Echo Form usage
//! count). Lookups by identifier never fail: anything absent reads as zero,
//! false, or `None`.

use serde::{Deserialize, Serialize};

/// Stable identifier of a creature within one combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(pub u32);

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a creature is player-controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CreatureKind {
    /// The player character. Relic modifiers apply.
    Player,
    /// An enemy.
    #[default]
    Monster,
}

/// Power identifiers the forecaster reasons about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerId {
    /// Negates one incoming hit per stack.
    Buffer,
    /// Grants block the first time the owner takes attack damage.
    CurlUp,
    /// Caps attack damage from monsters at 1.
    Intangible,
    /// Caps all incoming damage at 1.
    IntangiblePlayer,
    /// Owner takes 50% more attack damage.
    Vulnerable,
    /// Adds damage to the next attack, then is consumed.
    Vigor,
    /// Next attack is played twice.
    DoubleTap,
    /// Next card is played twice.
    Duplication,
    /// First cards each turn are played twice.
    EchoForm,
    /// Owner loses health whenever a card is played.
    Choke,
    /// Every card played deals damage to all enemies.
    ThousandCuts,
    /// Every fifth card played deals damage to all enemies.
    Panache,
    /// Block at end of turn, decreasing when hit.
    PlatedArmor,
    /// Block at end of turn.
    Metallicize,
    /// Damage at end of turn.
    Constricted,
    /// Lose health and damage all enemies at end of turn.
    Combust,
    /// Monster-style regeneration at end of turn.
    RegenerateMonster,
    /// Player regeneration at end of turn.
    Regeneration,
    /// Damage all enemies at end of turn.
    Omega,
    /// Explodes for its stored damage when the countdown reaches zero.
    TheBomb,
    /// Flat attack damage bonus.
    Strength,
    /// Owner deals 25% less attack damage.
    Weak,
    /// Anything else the host reports.
    Other(String),
}

/// Relic identifiers the forecaster reasons about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelicId {
    /// Reduces every health loss by 1.
    TungstenRod,
    /// Unblocked attack damage of 2-5 becomes 1.
    Torii,
    /// X-cost cards get two more hits.
    ChemicalX,
    /// Deals heavy damage to all enemies on the seventh turn.
    StoneCalendar,
    /// Grants block at end of turn when the owner has none.
    Orichalcum,
    /// Grants block per card in hand at end of turn.
    CloakClasp,
    /// Anything else the host reports.
    Other(String),
}

/// Card identifiers the forecaster reasons about.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardId {
    Strike,
    Defend,
    Bash,
    ThunderClap,
    Shockwave,
    Uppercut,
    Terror,
    BeamCell,
    CrushJoints,
    Indignation,
    TwinStrike,
    RiddleWithHoles,
    Pummel,
    Tantrum,
    SwordBoomerang,
    Ragnarok,
    RipAndTear,
    ThunderStrike,
    Whirlwind,
    Skewer,
    Expunger,
    Eviscerate,
    FiendFire,
    DaggerSpray,
    Burn,
    Decay,
    Regret,
    /// Anything else the host reports.
    Other(String),
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Other(name) => write!(f, "{name}"),
            known => write!(f, "{known:?}"),
        }
    }
}

/// A power instance on a creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    /// Which power this is.
    pub id: PowerId,
    /// Stack count or countdown.
    pub amount: i32,
    /// Stored damage (Panache, The Bomb).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    /// Stored health loss (Combust).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_loss: Option<i32>,
    /// Cards already doubled this turn (Echo Form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards_doubled_this_turn: Option<i32>,
}

impl Power {
    /// A power with only an amount.
    #[must_use]
    pub const fn new(id: PowerId, amount: i32) -> Self {
        Self {
            id,
            amount,
            damage: None,
            hp_loss: None,
            cards_doubled_this_turn: None,
        }
    }

    /// Builder method to set the stored damage.
    #[must_use]
    pub const fn with_damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Builder method to set the stored health loss.
    #[must_use]
    pub const fn with_hp_loss(mut self, hp_loss: i32) -> Self {
        self.hp_loss = Some(hp_loss);
        self
    }

    /// Builder method to set the Echo Form usage count.
    #[must_use]
    pub const fn with_cards_doubled(mut self, count: i32) -> Self {
        self.cards_doubled_this_turn = Some(count);
        self
    }
}

/// A relic instance on the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relic {
    /// Which relic this is.
    pub id: RelicId,
    /// Relic counter (turn number for Stone Calendar), -1 when unused.
    #[serde(default = "default_counter")]
    pub counter: i32,
    /// Relic-specific pending trigger flag (Orichalcum).
    #[serde(default)]
    pub triggered: bool,
}

const fn default_counter() -> i32 {
    -1
}

impl Relic {
    /// A relic with no counter.
    #[must_use]
    pub const fn new(id: RelicId) -> Self {
        Self {
            id,
            counter: -1,
            triggered: false,
        }
    }

    /// Builder method to set the counter.
    #[must_use]
    pub const fn with_counter(mut self, counter: i32) -> Self {
        self.counter = counter;
        self
    }

    /// Builder method to set the trigger flag.
    #[must_use]
    pub const fn triggered(mut self) -> Self {
        self.triggered = true;
        self
    }
}

/// Kind of a monster's declared next action.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IntentKind {
    Attack,
    AttackBuff,
    AttackDebuff,
    AttackDefend,
    Buff,
    Debuff,
    StrongDebuff,
    Defend,
    DefendBuff,
    DefendDebuff,
    Escape,
    Magic,
    Sleep,
    Stun,
    #[default]
    Unknown,
}

impl IntentKind {
    /// Whether this intent deals damage to the player.
    #[must_use]
    pub const fn is_attacking(self) -> bool {
        matches!(
            self,
            Self::Attack | Self::AttackBuff | Self::AttackDebuff | Self::AttackDefend
        )
    }
}

/// A monster's declared next action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Intent {
    /// What the monster will do.
    pub kind: IntentKind,
    /// Damage per hit, after the host's modifiers.
    #[serde(default)]
    pub damage: i32,
    /// Number of hits as reported by the host; zero or negative means one.
    #[serde(default)]
    pub multi: i32,
}

impl Intent {
    /// An attacking intent of `hits` hits.
    #[must_use]
    pub const fn attack(damage: i32, hits: i32) -> Self {
        Self {
            kind: IntentKind::Attack,
            damage,
            multi: hits,
        }
    }

    /// Number of hits, treating unset counts as a single hit.
    #[must_use]
    pub const fn hits(&self) -> i32 {
        if self.multi > 0 {
            self.multi
        } else {
            1
        }
    }
}

/// A creature as seen by the forecaster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Identifier used for action targeting.
    pub id: CreatureId,
    /// Player or monster.
    pub kind: CreatureKind,
    /// Current health.
    pub current_health: i32,
    /// Maximum health.
    pub max_health: i32,
    /// Current block.
    #[serde(default)]
    pub block: i32,
    /// Powers in the host's order.
    #[serde(default)]
    pub powers: Vec<Power>,
    /// Relics in the host's order (player only).
    #[serde(default)]
    pub relics: Vec<Relic>,
    /// Declared next action (monsters only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Dead or fled; excluded from every forecast.
    #[serde(default)]
    pub dead_or_escaped: bool,
}

impl Creature {
    /// A player at full health.
    #[must_use]
    pub fn player(id: CreatureId, max_health: i32) -> Self {
        Self::new(id, CreatureKind::Player, max_health)
    }

    /// A monster at full health.
    #[must_use]
    pub fn monster(id: CreatureId, max_health: i32) -> Self {
        Self::new(id, CreatureKind::Monster, max_health)
    }

    fn new(id: CreatureId, kind: CreatureKind, max_health: i32) -> Self {
        Self {
            id,
            kind,
            current_health: max_health,
            max_health,
            block: 0,
            powers: Vec::new(),
            relics: Vec::new(),
            intent: None,
            dead_or_escaped: false,
        }
    }

    /// Builder method to set current health.
    #[must_use]
    pub fn with_health(mut self, current_health: i32) -> Self {
        self.current_health = current_health;
        self
    }

    /// Builder method to set block.
    #[must_use]
    pub fn with_block(mut self, block: i32) -> Self {
        self.block = block;
        self
    }

    /// Builder method to append a power.
    #[must_use]
    pub fn with_power(mut self, power: Power) -> Self {
        self.powers.push(power);
        self
    }

    /// Builder method to append a relic.
    #[must_use]
    pub fn with_relic(mut self, relic: Relic) -> Self {
        self.relics.push(relic);
        self
    }

    /// Builder method to set the intent.
    #[must_use]
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    /// Whether relic modifiers apply to this creature.
    #[must_use]
    pub fn is_player(&self) -> bool {
        self.kind == CreatureKind::Player
    }

    /// Whether this creature still takes part in combat.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.dead_or_escaped
    }

    /// First power with the given id.
    #[must_use]
    pub fn power(&self, id: &PowerId) -> Option<&Power> {
        self.powers.iter().find(|p| &p.id == id)
    }

    /// Amount of the given power, zero when absent.
    #[must_use]
    pub fn power_amount(&self, id: &PowerId) -> i32 {
        self.power(id).map_or(0, |p| p.amount)
    }

    /// Whether the creature has the given power.
    #[must_use]
    pub fn has_power(&self, id: &PowerId) -> bool {
        self.power(id).is_some()
    }

    /// First relic with the given id.
    #[must_use]
    pub fn relic(&self, id: &RelicId) -> Option<&Relic> {
        self.relics.iter().find(|r| &r.id == id)
    }

    /// Whether the creature has the given relic.
    #[must_use]
    pub fn has_relic(&self, id: &RelicId) -> bool {
        self.relic(id).is_some()
    }
}

/// Card type as the host classifies it.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CardKind {
    #[default]
    Attack,
    Skill,
    Power,
    Status,
    Curse,
}

/// A card in hand or under the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Which card this is.
    pub id: CardId,
    /// Card type.
    pub kind: CardKind,
    /// Printed damage before modifiers; negative for cards that deal none.
    #[serde(default = "no_damage")]
    pub base_damage: i32,
    /// Card-specific number (hit count, Burn damage, ...).
    #[serde(default)]
    pub magic_number: i32,
    /// Block the card grants its player, after modifiers.
    #[serde(default)]
    pub block: i32,
    /// Health the card costs its player.
    #[serde(default)]
    pub hp_cost: i32,
    /// Whether the card hits every enemy with per-target damage.
    #[serde(default)]
    pub multi_target: bool,
}

const fn no_damage() -> i32 {
    -1
}

impl Card {
    /// A single-target attack.
    #[must_use]
    pub fn attack(id: CardId, base_damage: i32) -> Self {
        Self {
            id,
            kind: CardKind::Attack,
            base_damage,
            magic_number: 0,
            block: 0,
            hp_cost: 0,
            multi_target: false,
        }
    }

    /// A card that is not an attack.
    #[must_use]
    pub fn non_attack(id: CardId, kind: CardKind) -> Self {
        Self {
            id,
            kind,
            base_damage: -1,
            magic_number: 0,
            block: 0,
            hp_cost: 0,
            multi_target: false,
        }
    }

    /// Builder method to set the magic number.
    #[must_use]
    pub fn with_magic_number(mut self, magic_number: i32) -> Self {
        self.magic_number = magic_number;
        self
    }

    /// Builder method to set granted block.
    #[must_use]
    pub fn with_block(mut self, block: i32) -> Self {
        self.block = block;
        self
    }

    /// Builder method to set the health cost.
    #[must_use]
    pub fn with_hp_cost(mut self, hp_cost: i32) -> Self {
        self.hp_cost = hp_cost;
        self
    }

    /// Builder method to mark the card as hitting every enemy.
    #[must_use]
    pub fn hitting_all(mut self) -> Self {
        self.multi_target = true;
        self
    }

    /// Whether this card is an attack.
    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.kind == CardKind::Attack
    }

    /// Whether the card deals damage at all.
    #[must_use]
    pub fn can_deal_damage(&self) -> bool {
        self.base_damage >= 0
    }
}

/// Everything the forecaster reads about the current fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    /// The player.
    pub player: Creature,
    /// Every monster in the encounter, dead ones included, in host order.
    pub monsters: Vec<Creature>,
    /// Cards currently in hand.
    #[serde(default)]
    pub hand: Vec<Card>,
    /// Energy available this turn.
    #[serde(default)]
    pub energy: i32,
    /// Cards already played this turn.
    #[serde(default)]
    pub cards_played_this_turn: i32,
    /// Lightning orbs channeled so far this combat.
    #[serde(default)]
    pub lightning_channeled: i32,
    /// Monster under the cursor, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovered_monster: Option<CreatureId>,
}

impl CombatState {
    /// A fight between `player` and `monsters` with an empty hand.
    #[must_use]
    pub fn new(player: Creature, monsters: Vec<Creature>) -> Self {
        Self {
            player,
            monsters,
            hand: Vec::new(),
            energy: 0,
            cards_played_this_turn: 0,
            lightning_channeled: 0,
            hovered_monster: None,
        }
    }

    /// Alive monsters paired with their index in [`CombatState::monsters`].
    pub fn alive_monsters_indexed(&self) -> impl Iterator<Item = (usize, &Creature)> {
        self.monsters
            .iter()
            .enumerate()
            .filter(|(_, monster)| monster.is_alive())
    }

    /// Number of monsters still in the fight.
    #[must_use]
    pub fn alive_monster_count(&self) -> usize {
        self.alive_monsters_indexed().count()
    }

    /// Creature with the given id, player included.
    #[must_use]
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.monsters.iter().find(|m| m.id == id)
    }

    /// Mutable access to the creature with the given id, player included.
    pub fn creature_mut(&mut self, id: CreatureId) -> Option<&mut Creature> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.monsters.iter_mut().find(|m| m.id == id)
    }
}
