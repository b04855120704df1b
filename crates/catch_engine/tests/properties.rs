//! Property tests for the rounding primitive, the odds and the full pipeline.

use catch_engine::formula::{game_round, MAX_MODIFIED_CATCH_RATE};
use catch_engine::probability::{successful_catch_odds, CatchOdds};
use catch_engine::{
    calculate_catch_rates, par_calculate_catch_rates, BaseStats, BattleContext, CatchProfile,
    CatchingPower, GameContext, HpIv, HpPreset, Status, Type,
};
use proptest::prelude::*;

fn any_status() -> impl Strategy<Value = Option<Status>> {
    prop::sample::select(vec![
        None,
        Some(Status::Asleep),
        Some(Status::Frozen),
        Some(Status::Burned),
        Some(Status::Paralyzed),
        Some(Status::Poisoned),
    ])
}

fn any_types() -> impl Strategy<Value = Vec<Type>> {
    prop::sample::subsequence(
        vec![Type::Normal, Type::Water, Type::Bug, Type::Fairy, Type::Steel],
        1..=2,
    )
}

fn any_preset() -> impl Strategy<Value = HpPreset> {
    prop::sample::select(vec![
        HpPreset::ExactlyOne,
        HpPreset::RedBar,
        HpPreset::YellowBar,
        HpPreset::GreenBar,
    ])
}

proptest! {
    /// Property: game rounding never decreases as its input grows
    #[test]
    fn prop_game_round_monotonic(x in 0i64..1_000_000_000_000, step in 0i64..100_000) {
        prop_assert!(game_round(x) <= game_round(x + step));
    }

    /// Property: exact multiples of 4096 round to their quotient
    #[test]
    fn prop_game_round_multiples(k in 0i64..1_000_000_000) {
        prop_assert_eq!(game_round(4096 * k), k);
    }

    /// Property: odds stay in [0, 1] and the outcomes partition the throw
    #[test]
    fn prop_odds_partition(
        rate in 0i64..=MAX_MODIFIED_CATCH_RATE,
        critical_modifier in prop::sample::select(vec![0i64, 2048, 4096, 6144, 8192, 10240]),
        charm in any::<bool>()
    ) {
        let odds = CatchOdds::new(critical_modifier, rate, charm);
        prop_assert!((0.0..=1.0).contains(&odds.critical));
        prop_assert!((0.0..=1.0).contains(&odds.shake));
        prop_assert!((0.0..=1.0).contains(&odds.caught()));
        prop_assert!((odds.caught() + odds.not_caught() - 1.0).abs() < 1e-12);

        let critical_path = successful_catch_odds(true, odds.shake);
        let normal_path = successful_catch_odds(false, odds.shake);
        prop_assert!((normal_path - critical_path.powi(4)).abs() < 1e-12);
        prop_assert!(normal_path <= critical_path);
    }

    /// Property: the full pipeline is bounded and deterministic
    #[test]
    fn prop_pipeline_bounded_and_deterministic(
        (dex_no, level, base_hp, speed) in (1u16..=1025, 1u8..=100, 1u16..=255, 5u16..=200),
        (types, catch_rate, weight, gender_ratio) in (any_types(), 3u8..=255, 0.1f64..999.9, any::<u8>()),
        (max_iv, preset, status, power, backstrike) in (any::<bool>(), any_preset(), any_status(), 0u8..=3, any::<bool>()),
        (badges, registered, charm) in (0u8..=8, 0u16..=1200, any::<bool>())
    ) {
        let profile = CatchProfile::new(
            dex_no,
            level,
            BaseStats::new(base_hp, 50, 50, 50, 50, speed),
            &types,
            catch_rate,
            weight,
            gender_ratio,
        )
        .unwrap();
        let iv = if max_iv { HpIv::Max } else { HpIv::Min };
        let battle = BattleContext::for_profile(&profile, iv, preset)
            .status(status)
            .backstrike(backstrike)
            .catching_power(CatchingPower::new(power).unwrap());
        let game = GameContext::new(badges, registered, charm);

        let first = calculate_catch_rates(&profile, &battle, &game).unwrap();
        let second = calculate_catch_rates(&profile, &battle, &game).unwrap();
        let parallel = par_calculate_catch_rates(&profile, &battle, &game).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &parallel);

        for result in &first {
            prop_assert!((0..=MAX_MODIFIED_CATCH_RATE).contains(&result.modified_catch_rate));
            prop_assert!((0.0..=1.0).contains(&result.catch_probability));
        }
    }
}
