//! Benchmarks for the catch calculation pipeline.
//!
//! Run with:
//!   cargo bench --package catch_engine --bench catch_calc

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use catch_engine::{
    calculate_catch_rates, generate_scenarios, par_calculate_catch_rates, BaseStats,
    BattleContext, CatchProfile, CatchRateContext, CatchingPower, GameContext, HpIv, HpPreset,
    Status, Type,
};

/// Level 50 Wobbuffet at 1 HP, asleep
fn setup_wobbuffet() -> (CatchProfile, BattleContext, GameContext) {
    let profile = CatchProfile::new(
        202,
        50,
        BaseStats::new(190, 33, 58, 33, 58, 33),
        &[Type::Psychic],
        45,
        28.5,
        127,
    )
    .expect("valid profile");

    let battle = BattleContext::for_profile(&profile, HpIv::Min, HpPreset::ExactlyOne)
        .status(Some(Status::Asleep));

    (profile, battle, GameContext::default())
}

fn bench_scenario_catalog(c: &mut Criterion) {
    let (profile, _, _) = setup_wobbuffet();

    c.bench_function("generate_scenarios", |b| {
        b.iter(|| generate_scenarios(black_box(&profile)))
    });
}

fn bench_single_rate(c: &mut Criterion) {
    let (profile, battle, game) = setup_wobbuffet();
    let ctx = CatchRateContext::new(&profile, &battle, &game).expect("valid context");
    let scenarios = generate_scenarios(&profile);

    c.bench_function("modified_catch_rate", |b| {
        b.iter(|| ctx.modified_catch_rate(black_box(&scenarios[0])))
    });
}

fn bench_full_calculation(c: &mut Criterion) {
    let (profile, battle, game) = setup_wobbuffet();
    let scenario_count = generate_scenarios(&profile).len() as u64;

    let mut group = c.benchmark_group("calculate_catch_rates");
    group.throughput(Throughput::Elements(scenario_count));

    group.bench_function("serial", |b| {
        b.iter(|| calculate_catch_rates(black_box(&profile), &battle, &game))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| par_calculate_catch_rates(black_box(&profile), &battle, &game))
    });

    group.finish();
}

fn bench_catching_power_levels(c: &mut Criterion) {
    let (profile, battle, game) = setup_wobbuffet();

    let mut group = c.benchmark_group("catching_power");
    for level in 0..=CatchingPower::MAX_LEVEL {
        let power = CatchingPower::new(level).expect("level in table");
        let battle = battle.catching_power(power);

        group.bench_with_input(BenchmarkId::from_parameter(level), &battle, |b, battle| {
            b.iter(|| calculate_catch_rates(&profile, black_box(battle), &game))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scenario_catalog,
    bench_single_rate,
    bench_full_calculation,
    bench_catching_power_levels,
);

criterion_main!(benches);
