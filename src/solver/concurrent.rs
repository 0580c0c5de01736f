use log::{debug, info, warn};
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::generator::{Candidate, CandidateGenerator};
use crate::solver::config::{SearchParams, SolverConfig};
use crate::solver::errors::SolverError;
use crate::solver::records::{SearchRecords, SolveResult, Verdict};

/// Queued candidates plus the number of items not yet fully processed.
///
/// `pending` counts every queued item and every item a worker is still
/// processing, so it only reaches zero once no work exists anywhere.
struct WorkQueue {
    items: VecDeque<Candidate>,
    pending: usize,
}

/// Records and the set of expressions already taken off the queue
struct SharedRecords {
    records: SearchRecords,
    seen: HashSet<String>,
}

struct SharedSearch<'a> {
    queue: Mutex<WorkQueue>,
    work_ready: Condvar,
    state: Mutex<SharedRecords>,
    stop: AtomicBool,
    generator: CandidateGenerator,
    params: &'a SearchParams,
    config: &'a SolverConfig,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Best-first processing spread over `workers` threads sharing one FIFO queue.
///
/// The order in which candidates are processed depends on scheduling, so
/// only the quality of the result is deterministic, not the expression.
///
/// # Errors
///
/// Returns an error if `workers` is zero or the thread pool cannot be built.
pub(crate) fn concurrent(
    params: &SearchParams,
    config: &SolverConfig,
    workers: usize,
) -> Result<SolveResult, SolverError> {
    if workers == 0 {
        warn!("Concurrent search requested without workers");
        return Err(SolverError::NoWorkers);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("monodigit-worker-{}", i))
        .build()?;

    let generator = CandidateGenerator::new(params.digit(), config.extended_operators);
    let seed = generator.seed();
    let records = SearchRecords::new(params.target_value(), &seed, config.value_pruning);

    let shared = SharedSearch {
        queue: Mutex::new(WorkQueue {
            items: VecDeque::from([seed]),
            pending: 1,
        }),
        work_ready: Condvar::new(),
        state: Mutex::new(SharedRecords {
            records,
            seen: HashSet::new(),
        }),
        stop: AtomicBool::new(false),
        generator,
        params,
        config,
    };

    info!("Starting concurrent search with {} workers", workers);
    pool.scope(|scope| {
        for worker in 0..workers {
            let shared = &shared;
            scope.spawn(move |_| shared.run_worker(worker));
        }
    });

    let state = shared
        .state
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);
    let result = state.records.into_result();
    info!(
        "Concurrent search for {} finished after {} candidates",
        params.target(),
        result.stats.processed
    );
    Ok(result)
}

impl SharedSearch<'_> {
    fn run_worker(&self, worker: usize) {
        debug!("Worker {} started", worker);
        while !self.stop.load(Ordering::Acquire) {
            let Some(candidate) = self.next_item() else {
                break;
            };
            let children = self.process(&candidate);
            self.finish_item(children);
        }
        debug!("Worker {} stopped", worker);
    }

    /// Block until an item is available or no work is left anywhere
    fn next_item(&self) -> Option<Candidate> {
        let mut queue = lock(&self.queue);
        loop {
            if self.stop.load(Ordering::Acquire) {
                return None;
            }
            if let Some(item) = queue.items.pop_front() {
                return Some(item);
            }
            if queue.pending == 0 {
                self.stop.store(true, Ordering::Release);
                self.work_ready.notify_all();
                return None;
            }
            queue = self
                .work_ready
                .wait(queue)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Judge one candidate under the records lock and expand it outside of it
    fn process(&self, candidate: &Candidate) -> Vec<Candidate> {
        let (verdict, grow) = {
            let mut state = lock(&self.state);
            if !state.seen.insert(candidate.expression.canonical_form()) {
                return Vec::new();
            }

            if state.records.limit_reached(self.config.node_limit) {
                warn!("Node limit reached, stopping workers");
                self.request_stop();
                return Vec::new();
            }

            let verdict = state.records.judge(candidate);
            let grow = state.records.may_grow(
                candidate.digits,
                self.params.budget(),
                self.config.prune_slack,
            );
            (verdict, grow)
        };

        if verdict != Verdict::Expand {
            return Vec::new();
        }

        let children = self
            .generator
            .expand_scored(&candidate.expression, grow);
        lock(&self.state).records.note_expansion(children.len());
        children
    }

    /// Enqueue the children of a finished item and retire the item itself
    fn finish_item(&self, children: Vec<Candidate>) {
        let mut queue = lock(&self.queue);
        let added = children.len();
        queue.items.extend(children);
        queue.pending = queue.pending + added - 1;

        if queue.pending == 0 {
            self.stop.store(true, Ordering::Release);
            self.work_ready.notify_all();
        } else if added > 0 {
            self.work_ready.notify_all();
        }
    }

    fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
        let _queue = lock(&self.queue);
        self.work_ready.notify_all();
    }
}
