use log::{debug, info};
use std::collections::HashMap;

use crate::generator::Candidate;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates taken off the queue
    pub processed: usize,
    /// Candidates whose children were generated
    pub expanded: usize,
    /// Valid children pushed back onto the queue
    pub generated: usize,
    /// Candidates discarded without being expanded
    pub pruned: usize,
}

impl SearchStats {
    pub fn merge(&mut self, other: &SearchStats) {
        self.processed += other.processed;
        self.expanded += other.expanded;
        self.generated += other.generated;
        self.pruned += other.pruned;
    }
}

/// Outcome of a search: the best exact match, if any, and the closest value seen
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub best_exact: Option<Candidate>,
    pub approximation: Candidate,
    pub stats: SearchStats,
}

/// What to do with a candidate taken off the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    Discard,
    Exact,
    Expand,
}

/// Best exact match, approximation and the value pruning table of one search.
///
/// The table is keyed on the value together with the canonical shape of the
/// tree. Trees sharing a value but not a shape have different children (a
/// factorial wrap of an inner literal spends no digit), so only an
/// equivalent tree may stand in for a discarded one.
#[derive(Debug)]
pub(crate) struct SearchRecords {
    target: f64,
    value_pruning: bool,
    reached: HashMap<(u64, String), usize>,
    best_exact: Option<Candidate>,
    approximation: Candidate,
    stats: SearchStats,
}

/// Key for the value table; `-0.0` and `0.0` share one entry
fn value_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl SearchRecords {
    pub(crate) fn new(target: f64, seed: &Candidate, value_pruning: bool) -> Self {
        Self {
            target,
            value_pruning,
            reached: HashMap::new(),
            best_exact: None,
            approximation: seed.clone(),
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn best_digits(&self) -> Option<usize> {
        self.best_exact.as_ref().map(|best| best.digits)
    }

    /// Whether a candidate with `digits` digits could still beat the record
    pub(crate) fn can_improve(&self, digits: usize) -> bool {
        self.best_digits().is_none_or(|best| digits < best)
    }

    /// Whether rewrites that add a digit are still worth generating
    pub(crate) fn may_grow(&self, digits: usize, budget: usize, slack: usize) -> bool {
        digits < budget && self.best_digits().is_none_or(|best| digits + slack < best)
    }

    pub(crate) fn limit_reached(&self, limit: Option<usize>) -> bool {
        limit.is_some_and(|limit| self.stats.processed >= limit)
    }

    /// Process one candidate taken off the queue and update the records
    pub(crate) fn judge(&mut self, candidate: &Candidate) -> Verdict {
        self.stats.processed += 1;

        if !self.can_improve(candidate.digits) {
            self.stats.pruned += 1;
            return Verdict::Discard;
        }

        if self.value_pruning {
            let key = (
                value_key(candidate.value),
                candidate.expression.canonical_form(),
            );
            if self
                .reached
                .get(&key)
                .is_some_and(|&digits| digits <= candidate.digits)
            {
                debug!(
                    "{} = {} already reached, discarding",
                    candidate.expression, candidate.value
                );
                self.stats.pruned += 1;
                return Verdict::Discard;
            }
            self.reached.insert(key, candidate.digits);
        }

        self.offer_approximation(candidate);

        if candidate.is_exact(self.target) {
            info!(
                "Record: {} = {} with {} digits",
                candidate.expression, candidate.value, candidate.digits
            );
            self.best_exact = Some(candidate.clone());
            return Verdict::Exact;
        }

        Verdict::Expand
    }

    pub(crate) fn note_expansion(&mut self, children: usize) {
        self.stats.expanded += 1;
        self.stats.generated += children;
    }

    fn offer_approximation(&mut self, candidate: &Candidate) {
        if candidate.is_better_approximation(&self.approximation, self.target) {
            debug!(
                "Closest so far: {} = {} ({} digits)",
                candidate.expression, candidate.value, candidate.digits
            );
            self.approximation = candidate.clone();
        }
    }

    pub(crate) fn into_result(self) -> SolveResult {
        SolveResult {
            best_exact: self.best_exact,
            approximation: self.approximation,
            stats: self.stats,
        }
    }
}
