use log::{debug, info};
use std::collections::{HashMap, HashSet};

use crate::expression::{BinaryOp, Expression};
use crate::generator::Candidate;
use crate::solver::config::{SearchParams, SolverConfig};
use crate::solver::records::{SearchStats, SolveResult};
use crate::solver::sequential;
use crate::utils::{neighbor_offsets, proper_divisors};

/// Solve the target by factorizing it or one of its neighbours.
///
/// A breadth-first search capped at `direct_cap` digits (and the budget)
/// provides the baseline answer and the approximation; the factorization
/// may replace the exact match if it needs fewer digits and fits the budget.
pub(crate) fn divide_and_conquer(params: &SearchParams, config: &SolverConfig) -> SolveResult {
    let capped = params.with_target(params.target(), params.budget().min(config.direct_cap));
    let baseline = sequential::exhaustive(&capped, config);

    let mut factorizer = Factorizer::new(params, config);
    let record = factorizer.solve_value(params.target());

    let mut stats = baseline.stats;
    stats.merge(&factorizer.stats);

    let mut best_exact = baseline.best_exact;
    if let Some(record) = record.filter(|record| record.digits <= params.budget())
        && best_exact
            .as_ref()
            .is_none_or(|best| record.digits < best.digits)
    {
        info!(
            "Factorization record: {} with {} digits",
            record.expression, record.digits
        );
        best_exact = Some(record);
    }

    let target = params.target_value();
    let mut approximation = baseline.approximation;
    if let Some(best) = &best_exact
        && best.is_better_approximation(&approximation, target)
    {
        approximation = best.clone();
    }

    SolveResult {
        best_exact,
        approximation,
        stats,
    }
}

struct Factorizer<'a> {
    params: SearchParams,
    config: &'a SolverConfig,
    direct: HashMap<i64, Option<Candidate>>,
    solved: HashMap<i64, Option<Candidate>>,
    in_progress: HashSet<i64>,
    stats: SearchStats,
}

impl<'a> Factorizer<'a> {
    fn new(params: &SearchParams, config: &'a SolverConfig) -> Self {
        Self {
            params: *params,
            config,
            direct: HashMap::new(),
            solved: HashMap::new(),
            in_progress: HashSet::new(),
            stats: SearchStats::default(),
        }
    }

    /// Fewest-digit construction of `n` within `direct_cap` digits
    fn direct(&mut self, n: i64) -> Option<Candidate> {
        if let Some(hit) = self.direct.get(&n) {
            return hit.clone();
        }

        let params = self.params.with_target(n, self.config.direct_cap);
        let result = sequential::exhaustive(&params, self.config);
        self.stats.merge(&result.stats);
        self.direct.insert(n, result.best_exact.clone());
        result.best_exact
    }

    /// Fewest-digit construction of `n` found by neighbour factorization.
    /// Values already being solved further up the recursion count as unsolvable.
    fn solve_value(&mut self, n: i64) -> Option<Candidate> {
        if let Some(hit) = self.solved.get(&n) {
            return hit.clone();
        }
        if !self.in_progress.insert(n) {
            debug!("{} is already being solved, skipping", n);
            return None;
        }

        let mut record: Option<Candidate> = None;

        for offset in neighbor_offsets(self.config.neighbor_radius) {
            let Some(neighbor) = n.checked_add(offset) else {
                continue;
            };

            let correction = if offset == 0 {
                None
            } else {
                match self.direct(offset.abs()) {
                    Some(correction) => Some(correction),
                    None => continue,
                }
            };

            if let Some(base) = self.direct(neighbor) {
                if let Some(candidate) = correct(&base.expression, offset, correction.as_ref(), n) {
                    keep_fewer_digits(&mut record, candidate);
                }
                continue;
            }

            for factor in proper_divisors(neighbor) {
                let cofactor = neighbor / factor;
                if factor > cofactor {
                    break;
                }

                let (Some(left), Some(right)) =
                    (self.solve_value(factor), self.solve_value(cofactor))
                else {
                    continue;
                };

                let product = Expression::binary(BinaryOp::Mul, &left.expression, &right.expression);
                if let Some(candidate) = correct(&product, offset, correction.as_ref(), n) {
                    keep_fewer_digits(&mut record, candidate);
                }
            }
        }

        self.in_progress.remove(&n);
        debug!(
            "Solved {}: {}",
            n,
            record
                .as_ref()
                .map_or_else(|| String::from("none"), |r| r.expression.to_string())
        );
        self.solved.insert(n, record.clone());
        record
    }
}

/// Turn a construction of `n + offset` into one of `n`
fn correct(
    base: &Expression,
    offset: i64,
    correction: Option<&Candidate>,
    n: i64,
) -> Option<Candidate> {
    let expression = match correction {
        None if offset == 0 => base.clone(),
        Some(c) if offset > 0 => Expression::binary(BinaryOp::Sub, base, &c.expression),
        Some(c) if offset < 0 => Expression::binary(BinaryOp::Add, base, &c.expression),
        _ => return None,
    };

    Candidate::new(expression)
        .ok()
        .filter(|candidate| candidate.is_exact(n as f64))
}

fn keep_fewer_digits(record: &mut Option<Candidate>, candidate: Candidate) {
    if record
        .as_ref()
        .is_none_or(|best| candidate.digits < best.digits)
    {
        *record = Some(candidate);
    }
}
