//! Property-based tests for the outcome engine and calculator.

use dmgcalc_core::prelude::*;
use dmgcalc_core::outcome;
use dmgcalc_test_utils::fixtures::{combat_against, ScriptedResolver};
use dmgcalc_test_utils::proptest::prelude::*;
use dmgcalc_test_utils::strategies::{
    arb_flat_sequence, arb_magnitude, arb_sequence, arb_snapshot,
};

/// Collapse every range to its upper endpoint.
fn fixed_magnitudes(actions: Vec<Action>) -> Vec<Action> {
    actions
        .into_iter()
        .map(|action| match action {
            Action::DamageNormal { max, target, .. } => Action::DamageNormal { min: max, max, target },
            Action::DamageThorns { max, target, .. } => Action::DamageThorns { min: max, max, target },
            other => other,
        })
        .collect()
}

fn count_leaves(action: &Action) -> usize {
    match action {
        Action::Grouped(children) => children.iter().map(count_leaves).sum(),
        _ => 1,
    }
}

fn bare(health: i32) -> CreatureSnapshot {
    CreatureSnapshot::default().with_health(health, health)
}

#[test]
fn test_nested_groups_flatten_depth_first() {
    let a = Action::damage(1);
    let b = Action::GainBlock(2);
    let c = Action::LoseHp(3);
    let d = Action::RefineStats;
    let nested = vec![
        a.clone(),
        group(vec![b.clone(), c.clone()]),
        d.clone(),
    ];
    assert_eq!(flatten(nested), vec![a, b, c, d]);
}

#[test]
fn test_block_then_equal_hit_is_fully_blocked() {
    let snapshot = bare(30);
    let pair = calculate_outcome(&[Action::GainBlock(9), Action::damage(9)], &snapshot);
    assert_eq!(pair.worst.blocked, 9);
    assert_eq!(pair.worst.damage, 0);
    assert_eq!(pair.worst.remaining_health, 30);
}

#[test]
fn test_block_absorbs_part_of_hit() {
    let snapshot = bare(20).with_block(5);
    let pair = calculate_outcome(&[Action::damage(8)], &snapshot);
    assert_eq!(pair.worst.blocked, 5);
    assert_eq!(pair.worst.damage, 3);
    assert_eq!(pair.worst.remaining_health, 17);
    assert_eq!(pair.worst.remaining_block, 0);
}

#[test]
fn test_buffer_negates_first_hit_only() {
    let snapshot = bare(10).with_buffer(1);
    let pair = calculate_outcome(&[Action::damage(6), Action::damage(6)], &snapshot);
    assert_eq!(pair.worst.remaining_buffer, 0);
    assert_eq!(pair.worst.damage, 6);
    assert_eq!(pair.worst.remaining_health, 4);
}

#[test]
fn test_three_random_hits_span_range() {
    let hit = Action::damage_range_to(0, 4, CreatureId(1));
    let pair = calculate_outcome(&[hit.clone(), hit.clone(), hit], &bare(30));
    assert_eq!(pair.worst.remaining_health, 30);
    assert_eq!(pair.best.damage, 12);
    assert_eq!(pair.best.remaining_health, 18);
}

proptest! {
    /// Fixed magnitudes leave nothing for the two timelines to disagree on.
    #[test]
    fn prop_fixed_magnitudes_give_identical_timelines(
        actions in arb_flat_sequence(24),
        snapshot in arb_snapshot(),
    ) {
        let actions = fixed_magnitudes(actions);
        let pair = calculate_outcome(&actions, &snapshot);
        prop_assert_eq!(pair.worst, pair.best);
    }

    /// Health is floored at zero and death is exactly zero health.
    #[test]
    fn prop_health_never_negative(
        actions in arb_sequence(24),
        snapshot in arb_snapshot(),
    ) {
        let pair = calculate_outcome(&flatten(actions), &snapshot);
        for timeline in [Timeline::Worst, Timeline::Best] {
            let result = pair.get(timeline);
            prop_assert!(result.remaining_health >= 0);
            prop_assert!(result.remaining_health <= snapshot.health.max(snapshot.max_health));
            prop_assert_eq!(result.is_dead(), result.remaining_health == 0);
            prop_assert!(result.remaining_block >= 0);
            prop_assert!(result.remaining_buffer >= 0);
        }
    }

    /// Flattening keeps every leaf, in order, and leaves no groups behind.
    #[test]
    fn prop_flatten_keeps_every_leaf(actions in arb_sequence(12)) {
        let leaves: usize = actions.iter().map(count_leaves).sum();
        let flat = flatten(actions);
        prop_assert_eq!(flat.len(), leaves);
        prop_assert!(flat.iter().all(|a| !matches!(a, Action::Grouped(_))));
    }

    /// All-damage intangible lets exactly one point through per hit.
    #[test]
    fn prop_intangible_caps_every_hit_at_one(
        magnitude in 2i32..200,
        thorns in any::<bool>(),
    ) {
        let snapshot = bare(300).with_intangible(false, true);
        let action = if thorns { Action::thorns(magnitude) } else { Action::damage(magnitude) };
        let result = outcome::apply(Outcome::seeded(&snapshot), &action, true, &snapshot);
        prop_assert_eq!(result.damage, 1);
    }

    /// Torii turns every small unblocked attack into one damage.
    #[test]
    fn prop_torii_clamps_small_attacks(magnitude in 2i32..=5) {
        let snapshot = bare(50).with_relic(DamageRelic::Torii);
        let result = outcome::apply(Outcome::seeded(&snapshot), &Action::damage(magnitude), false, &snapshot);
        prop_assert_eq!(result.damage, 1);
        prop_assert_eq!(result.remaining_health, 49);
    }

    /// Torii never touches a hit block already shrank below two.
    #[test]
    fn prop_torii_ignores_mostly_blocked_attacks(magnitude in 2i32..=5) {
        let snapshot = bare(50).with_block(magnitude).with_relic(DamageRelic::Torii);
        let result = outcome::apply(Outcome::seeded(&snapshot), &Action::damage(magnitude), false, &snapshot);
        prop_assert_eq!(result.damage, 0);
    }

    /// Chaining from a pair equals running the phases back to back.
    #[test]
    fn prop_chaining_matches_concatenation(
        first in arb_flat_sequence(12),
        second in arb_flat_sequence(12),
        snapshot in arb_snapshot(),
    ) {
        let first: Vec<_> = first.into_iter().filter(|a| !a.is_no_action()).collect();
        let second: Vec<_> = second.into_iter().filter(|a| !a.is_no_action()).collect();
        let chained = calculate_outcome(&first, &snapshot).then(&second, &snapshot);
        let mut both = first.clone();
        both.extend(second.iter().cloned());
        let whole = calculate_outcome(&both, &snapshot);

        prop_assert_eq!(chained.worst.remaining_health, whole.worst.remaining_health);
        prop_assert_eq!(chained.worst.remaining_block, whole.worst.remaining_block);
        prop_assert_eq!(chained.best.remaining_health, whole.best.remaining_health);
        prop_assert_eq!(chained.best.remaining_buffer, whole.best.remaining_buffer);
    }

    /// Without buffer or Curl Up, bigger hits never mean less damage.
    #[test]
    fn prop_worst_damage_never_exceeds_best(
        actions in arb_flat_sequence(24),
        snapshot in arb_snapshot(),
    ) {
        let actions: Vec<_> = actions
            .into_iter()
            .filter(|a| matches!(a, Action::DamageNormal { .. } | Action::DamageThorns { .. }))
            .collect();
        let mut snapshot = snapshot.with_buffer(0);
        snapshot.has_curl_up = false;

        let pair = calculate_outcome(&actions, &snapshot);
        prop_assert!(pair.worst.damage <= pair.best.damage);
    }

    /// A forecast never leaves a trace in the combat view.
    #[test]
    fn prop_forecast_leaves_combat_untouched(
        vigor in proptest::option::of(1i32..10),
        vulnerable in any::<bool>(),
        damage in arb_magnitude(),
    ) {
        let mut combat = combat_against(&[40, 25]);
        combat.player.powers.push(Power::new(PowerId::DoubleTap, 1));
        combat.player.powers.push(Power::new(PowerId::Duplication, 1));
        if let Some(amount) = vigor {
            combat.player.powers.push(Power::new(PowerId::Vigor, amount));
        }
        if vulnerable {
            combat.monsters[1].powers.push(Power::new(PowerId::Vulnerable, 2));
        }
        let before = combat.clone();

        let forecaster = Forecaster::new(ScriptedResolver::new());
        let _ = forecaster.forecast(&mut combat, Some(&Card::attack(CardId::Bash, damage)));

        prop_assert_eq!(combat, before);
    }
}
