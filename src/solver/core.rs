use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam::channel::{Receiver, Sender, bounded};
use log::{debug, info, warn};

use crate::expression::Expression;
use crate::iterator::iter_candidates;
use crate::solver::constants::{DEFAULT_TOLERANCE, FALLBACK_WORKERS};
use crate::solver::errors::SolverError;
use crate::solver::evaluator::{BestTracker, ProximityFilter};

/// Configuration for the search pipeline
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Number of parallel evaluators draining the candidate stream
    pub workers: usize,
    /// Maximum distance from the target for an answer
    pub tolerance: u64,
    /// Buffer size of every channel in the pipeline
    pub channel_capacity: usize,
}

impl SolverConfig {
    /// # Errors
    ///
    /// Returns an error if no workers are configured.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.workers == 0 {
            return Err(SolverError::NoWorkers);
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(FALLBACK_WORKERS);

        Self {
            workers,
            tolerance: DEFAULT_TOLERANCE,
            channel_capacity: workers,
        }
    }
}

/// Exhaustive solver for the numbers game.
///
/// A single producer thread enumerates candidates and drops those outside the
/// tolerance. The survivors are shared between `workers` evaluator threads,
/// each forwarding its own strict improvements into one intermediate channel.
/// Once every worker has finished a merging evaluator reduces that channel
/// again, since improvements from different workers arrive interleaved.
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Start a search and return the stream of improving answers.
    ///
    /// The stream ends once the search space is exhausted; its last element is
    /// the best answer. Input is not validated here.
    pub fn solve(&self, target: i64, numbers: &[i64]) -> Solutions {
        let workers = self.config.workers.max(1);
        let capacity = self.config.channel_capacity;
        let tolerance = self.config.tolerance;

        info!(
            "Solving for {} with numbers {:?} using {} workers",
            target, numbers, workers
        );

        let (candidate_tx, candidate_rx) = bounded(capacity);
        let (improvement_tx, improvement_rx) = bounded(capacity);
        let (answer_tx, answer_rx) = bounded(capacity);

        let cancelled = Arc::new(AtomicBool::new(false));

        let numbers = numbers.to_vec();
        let producer = {
            let cancelled = Arc::clone(&cancelled);
            thread::spawn(move || produce(target, tolerance, &numbers, candidate_tx, &cancelled))
        };

        let evaluators: Vec<JoinHandle<usize>> = (0..workers)
            .map(|id| {
                let candidates = candidate_rx.clone();
                let improvements = improvement_tx.clone();
                let cancelled = Arc::clone(&cancelled);
                thread::spawn(move || {
                    evaluate(id, target, tolerance, candidates, improvements, &cancelled)
                })
            })
            .collect();
        drop(candidate_rx);

        // Closing the intermediate channel waits for every worker
        let supervisor = thread::spawn(move || {
            let summary = match producer.join() {
                Ok(summary) => {
                    info!(
                        "Generated {} candidates within tolerance",
                        summary.candidates
                    );
                    Some(summary)
                }
                Err(_) => {
                    warn!("Candidate producer panicked");
                    None
                }
            };
            for (id, handle) in evaluators.into_iter().enumerate() {
                if handle.join().is_err() {
                    warn!("Evaluator {} panicked", id);
                }
            }
            drop(improvement_tx);
            summary
        });

        thread::spawn(move || merge(target, tolerance, improvement_rx, answer_tx));

        Solutions {
            answers: answer_rx,
            cancelled,
            supervisor: Some(supervisor),
        }
    }

    /// Run a search to completion and return the best answer, if any
    pub fn best(&self, target: i64, numbers: &[i64]) -> Option<Arc<Expression>> {
        self.solve(target, numbers).last()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// What the candidate producer got through before it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    /// Candidates within tolerance handed to the evaluators
    pub candidates: usize,
    /// Whether every ordering and combination was enumerated
    pub exhausted: bool,
}

/// Improving answers from a running search, best last.
///
/// Dropping the stream before it ends stops the search: the producer and the
/// evaluators check a shared flag before every candidate.
#[derive(Debug)]
pub struct Solutions {
    answers: Receiver<Arc<Expression>>,
    cancelled: Arc<AtomicBool>,
    supervisor: Option<JoinHandle<Option<SearchSummary>>>,
}

impl Solutions {
    /// Stop the search and wait for the producer and every evaluator to exit.
    ///
    /// Returns `None` if the producer panicked.
    pub fn cancel(mut self) -> Option<SearchSummary> {
        self.cancelled.store(true, Ordering::Relaxed);
        let supervisor = self.supervisor.take();
        // The merger may be blocked on a full answer channel until the receiver goes
        drop(self);
        supervisor.and_then(|handle| handle.join().ok().flatten())
    }
}

impl Iterator for Solutions {
    type Item = Arc<Expression>;

    fn next(&mut self) -> Option<Self::Item> {
        self.answers.recv().ok()
    }
}

impl Drop for Solutions {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

fn produce(
    target: i64,
    tolerance: u64,
    numbers: &[i64],
    output: Sender<Arc<Expression>>,
    cancelled: &AtomicBool,
) -> SearchSummary {
    let filter = ProximityFilter::new(target, tolerance);
    let mut summary = SearchSummary {
        candidates: 0,
        exhausted: false,
    };

    for candidate in iter_candidates(numbers) {
        if cancelled.load(Ordering::Relaxed) {
            debug!("Search cancelled after {} candidates", summary.candidates);
            return summary;
        }
        if !filter.accepts(&candidate) {
            continue;
        }
        if output.send(candidate).is_err() {
            debug!(
                "Candidate stream closed early after {} candidates",
                summary.candidates
            );
            return summary;
        }
        summary.candidates += 1;
    }

    summary.exhausted = true;
    summary
}

fn evaluate(
    id: usize,
    target: i64,
    tolerance: u64,
    input: Receiver<Arc<Expression>>,
    output: Sender<Arc<Expression>>,
    cancelled: &AtomicBool,
) -> usize {
    let mut forwarded = 0;
    let candidates = input
        .iter()
        .take_while(|_| !cancelled.load(Ordering::Relaxed));

    for expr in BestTracker::new(target, tolerance).improvements(candidates) {
        if output.send(expr).is_err() {
            debug!("Evaluator {} stopping, merger has gone away", id);
            break;
        }
        forwarded += 1;
    }

    debug!("Evaluator {} forwarded {} improvements", id, forwarded);
    forwarded
}

fn merge(
    target: i64,
    tolerance: u64,
    input: Receiver<Arc<Expression>>,
    output: Sender<Arc<Expression>>,
) {
    let mut improvements = BestTracker::new(target, tolerance).improvements(input);

    for expr in improvements.by_ref() {
        if output.send(expr).is_err() {
            debug!("Answer stream dropped by caller");
            return;
        }
    }

    match improvements.tracker().best() {
        Some(score) => info!("Search finished, best distance {}", score.distance),
        None => info!("Search finished without an answer"),
    }
}
