use std::collections::{HashSet, VecDeque};

use crate::generator::CandidateGenerator;
use crate::solver::{
    ExpressionSolver, SearchParams, SolveResult, SolverConfig, SolverError, Strategy,
};

fn run(
    config: SolverConfig,
    target: i64,
    digit: u8,
    budget: i64,
    strategy: Strategy,
) -> SolveResult {
    let params = SearchParams::new(target, digit, budget);
    assert!(params.is_ok());
    let params = params.unwrap_or_else(|_| unreachable!());
    let result = ExpressionSolver::new(config).solve(&params, strategy);
    assert!(result.is_ok());
    result.unwrap_or_else(|_| unreachable!())
}

fn solve_default(target: i64, digit: u8, budget: i64, strategy: Strategy) -> SolveResult {
    run(SolverConfig::default(), target, digit, budget, strategy)
}

fn assert_exact(result: &SolveResult, expected: &str, digits: usize) {
    assert!(result.best_exact.is_some());
    if let Some(best) = &result.best_exact {
        assert_eq!(format!("{}", best.expression), expected);
        assert_eq!(best.digits, digits);
    }
}

#[test]
fn test_best_first_scenarios() {
    assert_exact(&solve_default(4, 2, 2, Strategy::BestFirst), "(2*2)", 2);
    assert_exact(&solve_default(6, 2, 3, Strategy::BestFirst), "((2*2)+2)", 3);
    assert_exact(&solve_default(5, 5, 1, Strategy::BestFirst), "5", 1);
    assert_exact(&solve_default(0, 3, 2, Strategy::BestFirst), "(3-3)", 2);
}

#[test]
fn test_exhaustive_scenarios() {
    assert_exact(&solve_default(4, 2, 2, Strategy::Exhaustive), "(2*2)", 2);
    assert_exact(&solve_default(6, 2, 3, Strategy::Exhaustive), "((2*2)+2)", 3);
    assert_exact(&solve_default(5, 5, 1, Strategy::Exhaustive), "5", 1);
    assert_exact(&solve_default(0, 3, 2, Strategy::Exhaustive), "(3-3)", 2);
}

#[test]
fn test_sequential_search_is_deterministic() {
    for strategy in [Strategy::BestFirst, Strategy::Exhaustive] {
        let first = solve_default(17, 3, 4, strategy);
        let second = solve_default(17, 3, 4, strategy);

        assert_eq!(first.stats, second.stats);
        assert_eq!(
            first.best_exact.map(|b| b.expression.to_string()),
            second.best_exact.map(|b| b.expression.to_string())
        );
        assert_eq!(
            first.approximation.expression.to_string(),
            second.approximation.expression.to_string()
        );
    }
}

#[test]
fn test_exact_matches_evaluate_to_target_within_budget() {
    for target in 1..=12 {
        let result = solve_default(target, 4, 4, Strategy::BestFirst);
        if let Some(best) = result.best_exact {
            let value = best.expression.evaluate();
            assert!(value.is_ok());
            if let Ok(value) = value {
                assert_eq!(value, target as f64);
            }
            assert!(best.digits <= 4);
            assert_eq!(best.digits, best.expression.digit_count());
        }
    }
}

fn exact_digits(
    config: SolverConfig,
    target: i64,
    digit: u8,
    budget: i64,
    strategy: Strategy,
) -> Option<usize> {
    run(config, target, digit, budget, strategy)
        .best_exact
        .map(|best| best.digits)
}

#[test]
fn test_value_pruning_does_not_change_digit_counts() {
    let mut sweeps: Vec<(u8, Strategy, std::ops::RangeInclusive<i64>)> = vec![
        (3, Strategy::BestFirst, 0..=60),
        (3, Strategy::Exhaustive, 0..=60),
    ];
    for digit in [2, 5] {
        sweeps.push((digit, Strategy::BestFirst, 0..=30));
    }

    for (digit, strategy, targets) in sweeps {
        for target in targets {
            let pruned = exact_digits(SolverConfig::default(), target, digit, 3, strategy);
            let unpruned = exact_digits(
                SolverConfig::default().with_value_pruning(false),
                target,
                digit,
                3,
                strategy,
            );
            assert_eq!(
                pruned, unpruned,
                "target {} digit {} {:?}",
                target, digit, strategy
            );
        }
    }
}

#[test]
fn test_factorial_rewrites_of_equal_values_are_reached() {
    for target in [42, 60] {
        for strategy in [Strategy::BestFirst, Strategy::Exhaustive] {
            let result = solve_default(target, 3, 3, strategy);
            assert!(result.best_exact.is_some(), "target {} {:?}", target, strategy);
            if let Some(best) = result.best_exact {
                assert_eq!(best.value, target as f64);
                assert_eq!(best.digits, 3);
            }
        }
    }
}

#[test]
fn test_zero_prune_slack_finds_the_same_record() {
    let result = run(
        SolverConfig::default().with_prune_slack(0),
        6,
        2,
        3,
        Strategy::BestFirst,
    );
    assert!(result.best_exact.is_some());
    if let Some(best) = result.best_exact {
        assert_eq!(best.value, 6.0);
        assert_eq!(best.digits, 3);
    }
}

#[test]
fn test_no_exact_match_returns_approximation() {
    let result = solve_default(1000, 1, 1, Strategy::BestFirst);
    assert!(result.best_exact.is_none());
    assert_eq!(format!("{}", result.approximation.expression), "1");
    assert_eq!(result.approximation.value, 1.0);
    assert_eq!(result.approximation.digits, 1);
    assert_eq!(result.stats.processed, 1);
}

#[test]
fn test_approximation_is_at_least_as_close_as_exact_match() {
    let result = solve_default(6, 2, 3, Strategy::BestFirst);
    assert_eq!(result.approximation.value, 6.0);
    assert!(result.approximation.digits <= 3);
}

/// Closest distance to `target` over every valid expression within `budget`
fn closest_reachable(target: i64, digit: u8, budget: usize) -> f64 {
    let generator = CandidateGenerator::new(digit, true);
    let target = target as f64;
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([generator.seed()]);
    let mut closest = f64::INFINITY;

    while let Some(candidate) = queue.pop_front() {
        if !seen.insert(candidate.expression.canonical_form()) {
            continue;
        }
        closest = closest.min(candidate.distance(target));
        queue.extend(generator.expand_scored(&candidate.expression, candidate.digits < budget));
    }
    closest
}

#[test]
fn test_approximation_without_exact_match_is_closest() {
    for (target, digit, budget) in [(1000, 4, 2), (777, 3, 2), (12345, 2, 3), (-50, 5, 2)] {
        let closest = closest_reachable(target, digit, budget);
        for strategy in [Strategy::BestFirst, Strategy::Exhaustive] {
            let result = solve_default(target, digit, budget as i64, strategy);
            let approximation = &result.approximation;

            assert!(
                approximation.distance(target as f64) <= closest,
                "target {} digit {} {:?}: {} is not the closest",
                target,
                digit,
                strategy,
                approximation.expression
            );
            assert!(approximation.digits <= budget);
            assert!(matches!(
                approximation.expression.evaluate(),
                Ok(v) if v == approximation.value
            ));
        }
    }
}

#[test]
fn test_node_limit_stops_search() {
    let result = run(
        SolverConfig::default().with_node_limit(1),
        6,
        2,
        3,
        Strategy::BestFirst,
    );
    assert!(result.best_exact.is_none());
    assert_eq!(result.stats.processed, 1);
    assert_eq!(result.approximation.value, 2.0);
}

#[test]
fn test_concurrent_finds_fewest_digits() {
    for workers in [1, 4] {
        let result = solve_default(6, 2, 3, Strategy::Concurrent { workers });
        assert!(result.best_exact.is_some());
        if let Some(best) = result.best_exact {
            assert_eq!(best.value, 6.0);
            assert_eq!(best.digits, 3);
            assert!(matches!(best.expression.evaluate(), Ok(v) if v == 6.0));
        }
    }
}

#[test]
fn test_concurrent_agrees_with_best_first() {
    for target in [6, 12, 17, 42, 60, 100] {
        let sequential = exact_digits(SolverConfig::default(), target, 3, 3, Strategy::BestFirst);
        let parallel = exact_digits(
            SolverConfig::default(),
            target,
            3,
            3,
            Strategy::Concurrent { workers: 4 },
        );
        assert_eq!(sequential, parallel, "target {}", target);
    }

    for _ in 0..5 {
        assert_eq!(
            exact_digits(SolverConfig::default(), 17, 3, 4, Strategy::Concurrent { workers: 4 }),
            exact_digits(SolverConfig::default(), 17, 3, 4, Strategy::BestFirst)
        );
    }
}

#[test]
fn test_concurrent_single_digit_target() {
    let result = solve_default(5, 5, 1, Strategy::Concurrent { workers: 2 });
    assert_exact(&result, "5", 1);
}

#[test]
fn test_concurrent_requires_workers() {
    let params = SearchParams::new(6, 2, 3);
    assert!(params.is_ok());
    if let Ok(params) = params {
        let result =
            ExpressionSolver::default().solve(&params, Strategy::Concurrent { workers: 0 });
        assert!(matches!(result, Err(SolverError::NoWorkers)));
    }
}

#[test]
fn test_divide_and_conquer_uses_neighbours() {
    let result = run(
        SolverConfig::basic().with_direct_cap(2),
        36,
        3,
        5,
        Strategy::DivideAndConquer,
    );
    assert_exact(&result, "(33+3)", 3);
}

#[test]
fn test_divide_and_conquer_small_target() {
    let result = solve_default(4, 2, 2, Strategy::DivideAndConquer);
    assert_exact(&result, "(2*2)", 2);
}

#[test]
fn test_divide_and_conquer_respects_budget() {
    let result = run(
        SolverConfig::basic().with_direct_cap(2),
        36,
        3,
        2,
        Strategy::DivideAndConquer,
    );
    assert!(result.best_exact.is_none());
}

#[test]
fn test_invalid_parameters() {
    assert!(SearchParams::new(4, 10, 2).is_err());
    assert!(SearchParams::new(4, 2, 0).is_err());
    assert!(SearchParams::new(4, 2, -3).is_err());
    assert!(SearchParams::new(-4, 0, 1).is_ok());
}
