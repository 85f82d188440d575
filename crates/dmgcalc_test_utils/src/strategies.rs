//! Proptest strategies for forecasting properties.
//!
//! Values stay within game-sized bounds so failures shrink to readable
//! cases.

use proptest::prelude::*;

use dmgcalc_core::action::{Action, ActionTarget};
use dmgcalc_core::combat::CreatureId;
use dmgcalc_core::snapshot::{CreatureSnapshot, DamageRelic};

/// Generate a magnitude (0-60).
pub fn arb_magnitude() -> impl Strategy<Value = i32> {
    0i32..60
}

/// Generate a `(min, max)` pair with `min <= max`.
pub fn arb_ordered_range() -> impl Strategy<Value = (i32, i32)> {
    (arb_magnitude(), arb_magnitude()).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

/// Generate a damage target among the first four creatures.
pub fn arb_target() -> impl Strategy<Value = ActionTarget> {
    prop_oneof![
        (0u32..4).prop_map(|id| ActionTarget::Single(CreatureId(id))),
        Just(ActionTarget::All),
        Just(ActionTarget::None),
    ]
}

/// Generate any leaf action, including the no-op markers.
pub fn arb_leaf_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (arb_ordered_range(), arb_target())
            .prop_map(|((min, max), target)| Action::DamageNormal { min, max, target }),
        (arb_ordered_range(), arb_target())
            .prop_map(|((min, max), target)| Action::DamageThorns { min, max, target }),
        arb_magnitude().prop_map(Action::LoseHp),
        arb_magnitude().prop_map(Action::GainHp),
        arb_magnitude().prop_map(Action::GainBlock),
        Just(Action::NoAction),
        Just(Action::RefineStats),
    ]
}

/// Generate an action tree up to three levels of grouping deep.
pub fn arb_action() -> impl Strategy<Value = Action> {
    arb_leaf_action().prop_recursive(3, 24, 4, |inner| {
        proptest::collection::vec(inner, 0..4).prop_map(Action::Grouped)
    })
}

/// Generate a sequence of possibly grouped actions.
pub fn arb_sequence(max_len: usize) -> impl Strategy<Value = Vec<Action>> {
    proptest::collection::vec(arb_action(), 0..max_len)
}

/// Generate a sequence of leaf actions only.
pub fn arb_flat_sequence(max_len: usize) -> impl Strategy<Value = Vec<Action>> {
    proptest::collection::vec(arb_leaf_action(), 0..max_len)
}

/// Generate damage relics in any order.
pub fn arb_relics() -> impl Strategy<Value = Vec<DamageRelic>> {
    proptest::collection::vec(
        prop_oneof![Just(DamageRelic::TungstenRod), Just(DamageRelic::Torii)],
        0..3,
    )
}

/// Generate a living creature's snapshot.
pub fn arb_snapshot() -> impl Strategy<Value = CreatureSnapshot> {
    (
        (1i32..150, 0i32..50),
        0i32..40,
        0i32..3,
        proptest::option::of(1i32..12),
        any::<(bool, bool)>(),
        arb_relics(),
    )
        .prop_map(
            |((health, headroom), block, buffer, curl_up, (intangible, intangible_all), relics)| {
                let mut snapshot = CreatureSnapshot::default()
                    .with_health(health, health + headroom)
                    .with_block(block)
                    .with_buffer(buffer)
                    .with_intangible(intangible, intangible_all);
                if let Some(amount) = curl_up {
                    snapshot = snapshot.with_curl_up(amount);
                }
                snapshot.relics = relics;
                snapshot
            },
        )
}
