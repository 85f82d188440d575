//! Forecast benchmarks for dmgcalc_core.
//!
//! Run with: `cargo bench -p dmgcalc_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dmgcalc_core::prelude::*;
use dmgcalc_test_utils::fixtures::{combat_against, strikes};

/// Base damage plus Vigor, doubled on Vulnerable targets.
fn host_damage(card: &Card, index: usize, combat: &CombatState) -> Result<CardDamage> {
    let mut damage = card.base_damage + combat.player.power_amount(&PowerId::Vigor);
    if combat.monsters[index].has_power(&PowerId::Vulnerable) {
        damage *= 2;
    }
    Ok(CardDamage::single(damage))
}

fn busy_combat() -> CombatState {
    let mut combat = combat_against(&[48, 52, 30, 30, 80]);
    for (n, monster) in (0..).zip(combat.monsters.iter_mut()) {
        monster.intent = Some(Intent::attack(5 + n, 2));
    }
    combat.player.powers = vec![
        Power::new(PowerId::Vigor, 4),
        Power::new(PowerId::DoubleTap, 1),
        Power::new(PowerId::EchoForm, 1).with_cards_doubled(0),
        Power::new(PowerId::ThousandCuts, 1),
        Power::new(PowerId::Panache, 2).with_damage(10),
        Power::new(PowerId::Combust, 5).with_hp_loss(1),
    ];
    combat.player.relics = vec![
        Relic::new(RelicId::Torii),
        Relic::new(RelicId::TungstenRod),
        Relic::new(RelicId::Orichalcum),
    ];
    combat.hand = strikes(6);
    combat
}

/// Runs forecast benchmarks for the dmgcalc_core crate.
pub fn forecast_benchmark(c: &mut Criterion) {
    let forecaster = Forecaster::new(host_damage);
    let bash = Card::attack(CardId::Bash, 8);
    let boomerang = Card::attack(CardId::SwordBoomerang, 3).with_magic_number(3);

    c.bench_function("forecast_bash_five_monsters", |b| {
        let mut combat = busy_combat();
        b.iter(|| black_box(forecaster.forecast(&mut combat, Some(black_box(&bash)))));
    });

    c.bench_function("forecast_random_multi_hit", |b| {
        let mut combat = busy_combat();
        b.iter(|| black_box(forecaster.monsters(&mut combat, Some(black_box(&boomerang)))));
    });

    let hit = Action::damage_range_to(0, 7, CreatureId(1));
    let actions = vec![hit; 64];
    let snapshot = CreatureSnapshot::default()
        .with_health(200, 200)
        .with_block(10)
        .with_buffer(2)
        .with_curl_up(6);
    c.bench_function("calculate_outcome_64_hits", |b| {
        b.iter(|| black_box(calculate_outcome(black_box(&actions), &snapshot)));
    });
}

criterion_group!(benches, forecast_benchmark);
criterion_main!(benches);
