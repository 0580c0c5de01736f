use log::{info, warn};

use crate::generator::CandidateGenerator;
use crate::solver::config::{SearchParams, SolverConfig};
use crate::solver::frontier::{DistanceQueue, FifoQueue, Frontier};
use crate::solver::records::{SearchRecords, SolveResult, Verdict};

/// Best-first branch-and-bound: always process the candidate closest to the target
pub(crate) fn best_first(params: &SearchParams, config: &SolverConfig) -> SolveResult {
    run(DistanceQueue::new(params.target_value()), params, config)
}

/// Breadth-first search over the same space; finds the fewest-digit exact
/// construction within the budget
pub(crate) fn exhaustive(params: &SearchParams, config: &SolverConfig) -> SolveResult {
    run(FifoQueue::default(), params, config)
}

fn run<F: Frontier>(mut frontier: F, params: &SearchParams, config: &SolverConfig) -> SolveResult {
    let generator = CandidateGenerator::new(params.digit(), config.extended_operators);
    let seed = generator.seed();
    let mut records = SearchRecords::new(params.target_value(), &seed, config.value_pruning);
    frontier.push(seed);

    while let Some(candidate) = frontier.pop() {
        if records.limit_reached(config.node_limit) {
            warn!(
                "Node limit reached with {} candidates still queued",
                frontier.len() + 1
            );
            break;
        }

        if records.judge(&candidate) != Verdict::Expand {
            continue;
        }

        let grow = records.may_grow(candidate.digits, params.budget(), config.prune_slack);
        let children = generator.expand_scored(&candidate.expression, grow);
        records.note_expansion(children.len());
        for child in children {
            frontier.push(child);
        }
    }

    let result = records.into_result();
    info!(
        "Search for {} finished after {} candidates",
        params.target(),
        result.stats.processed
    );
    result
}
