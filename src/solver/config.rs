use crate::solver::constants::{
    BASIC_DIRECT_CAP, DEFAULT_DIRECT_CAP, DEFAULT_NEIGHBOR_RADIUS, DEFAULT_PRUNE_SLACK,
};
use crate::utils::{UtilsError, validate_budget, validate_digit};

/// Search strategy used by [`crate::solver::ExpressionSolver::solve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Branch-and-bound, closest value first
    #[default]
    BestFirst,
    /// Breadth-first over the same candidate space
    Exhaustive,
    /// Factorize neighbours of the target and combine small constructions
    DivideAndConquer,
    /// Best-first processing drained from a shared queue by several workers
    Concurrent { workers: usize },
}

/// Validated inputs of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    target: i64,
    digit: u8,
    budget: usize,
}

impl SearchParams {
    /// # Errors
    ///
    /// Returns an error if `digit` is not in `0..=9` or `budget` is below 1.
    pub fn new(target: i64, digit: u8, budget: i64) -> Result<Self, UtilsError> {
        validate_digit(digit)?;
        let budget = validate_budget(budget)?;
        Ok(Self {
            target,
            digit,
            budget,
        })
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn target_value(&self) -> f64 {
        self.target as f64
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub(crate) fn with_target(&self, target: i64, budget: usize) -> Self {
        Self {
            target,
            digit: self.digit,
            budget: budget.max(1),
        }
    }
}

/// Tuning knobs shared by all strategies
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Digit-adding rewrites are only tried while `digits + prune_slack` is
    /// below the best exact digit count. 1 skips children that could at best
    /// tie the record; 0 generates them and lets them be discarded on pop.
    pub prune_slack: usize,
    /// Skip candidates whose value was already reached with no more digits
    pub value_pruning: bool,
    /// Include `^` and `!` in addition to `+ - * /`
    pub extended_operators: bool,
    /// Stop after processing this many candidates
    pub node_limit: Option<usize>,
    /// Digit budget of the direct searches inside divide-and-conquer
    pub direct_cap: usize,
    /// Largest offset from the target tried by divide-and-conquer
    pub neighbor_radius: i64,
}

impl SolverConfig {
    /// Configuration restricted to `+ - * /`
    pub fn basic() -> Self {
        Self {
            extended_operators: false,
            direct_cap: BASIC_DIRECT_CAP,
            ..Self::default()
        }
    }

    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    pub fn with_value_pruning(mut self, enabled: bool) -> Self {
        self.value_pruning = enabled;
        self
    }

    pub fn with_prune_slack(mut self, slack: usize) -> Self {
        self.prune_slack = slack;
        self
    }

    pub fn with_direct_cap(mut self, cap: usize) -> Self {
        self.direct_cap = cap;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            prune_slack: DEFAULT_PRUNE_SLACK,
            value_pruning: true,
            extended_operators: true,
            node_limit: None,
            direct_cap: DEFAULT_DIRECT_CAP,
            neighbor_radius: DEFAULT_NEIGHBOR_RADIUS,
        }
    }
}
