//! Property tests for the greedy constructor and the validator.

use proptest::prelude::*;

use alp_solve::heuristic::GreedyScheduler;
use alp_solve::models::{Aircraft, Instance, ObjectiveVariant, SeparationMatrix, Violation};
use alp_solve::validation;

/// (earliest, target gap, latest gap, early penalty, late penalty) per
/// aircraft; gaps keep earliest ≤ target ≤ latest by construction.
fn aircraft_specs() -> impl Strategy<Value = Vec<(i64, i64, i64, f64, f64)>> {
    prop::collection::vec(
        (0i64..60, 0i64..30, 0i64..40, 0.1f64..10.0, 0.1f64..10.0),
        1..7,
    )
}

fn build_instance(
    specs: &[(i64, i64, i64, f64, f64)],
    gap: i64,
    runways: usize,
) -> Instance {
    let aircraft = specs
        .iter()
        .enumerate()
        .map(|(id, &(earliest, to_target, to_latest, early, late))| {
            Aircraft::new(id, earliest, earliest + to_target, earliest + to_target + to_latest)
                .with_penalties(early, late)
        })
        .collect();
    Instance::new(
        "prop",
        aircraft,
        SeparationMatrix::uniform(specs.len(), gap),
        runways,
    )
}

proptest! {
    #[test]
    fn greedy_is_idempotent(
        specs in aircraft_specs(),
        gap in 0i64..15,
        runways in 1usize..4,
    ) {
        let instance = build_instance(&specs, gap, runways);
        let scheduler = GreedyScheduler::new();
        prop_assert_eq!(scheduler.schedule(&instance), scheduler.schedule(&instance));
    }

    #[test]
    fn greedy_accumulation_matches_validator(
        specs in aircraft_specs(),
        gap in 0i64..15,
        runways in 1usize..4,
    ) {
        let instance = build_instance(&specs, gap, runways);
        for variant in ObjectiveVariant::ALL {
            let (schedule, accumulated) =
                GreedyScheduler::new().schedule_with_objective(&instance, variant);
            let recomputed = validation::objective_value(&instance, &schedule, variant);
            prop_assert!((accumulated - recomputed).abs() < 1e-9);
        }
    }

    #[test]
    fn greedy_respects_time_windows(
        specs in aircraft_specs(),
        gap in 0i64..15,
        runways in 1usize..4,
    ) {
        let instance = build_instance(&specs, gap, runways);
        let schedule = GreedyScheduler::new().schedule(&instance);
        for (i, a) in instance.aircraft().iter().enumerate() {
            prop_assert!(a.window_contains(schedule.landing_time(i)));
        }
    }

    #[test]
    fn reported_violations_have_positive_shortfall(
        specs in aircraft_specs(),
        gap in 0i64..60,
        runways in 1usize..3,
    ) {
        let instance = build_instance(&specs, gap, runways);
        let schedule = GreedyScheduler::new().schedule(&instance);
        let eval = validation::evaluate(
            &instance,
            &schedule,
            ObjectiveVariant::WeightedEarlinessTardiness,
        );
        prop_assert_eq!(eval.feasible, eval.violations.is_empty());
        for violation in &eval.violations {
            prop_assert!(violation.shortfall() > 0);
            if let Violation::Separation { required, actual, .. } = violation {
                prop_assert!(actual < required);
            }
        }
    }

    #[test]
    fn feasible_schedules_separate_every_same_runway_pair(
        specs in aircraft_specs(),
        gap in 0i64..15,
        runways in 1usize..4,
    ) {
        let instance = build_instance(&specs, gap, runways);
        let schedule = GreedyScheduler::new().schedule(&instance);
        let eval = validation::evaluate(
            &instance,
            &schedule,
            ObjectiveVariant::WeightedEarlinessTardiness,
        );
        prop_assume!(eval.feasible);
        let n = instance.aircraft_count();
        for i in 0..n {
            for j in (i + 1)..n {
                if schedule.runway(i) == schedule.runway(j) {
                    let gap_realized =
                        (schedule.landing_time(i) - schedule.landing_time(j)).abs();
                    prop_assert!(gap_realized >= gap);
                }
            }
        }
    }
}
