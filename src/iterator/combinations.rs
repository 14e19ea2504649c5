use std::sync::Arc;

use crate::expression::{Expression, combiners_for};

type CandidateIter = Box<dyn Iterator<Item = Arc<Expression>> + Send>;

/// Lazily yields every expression that keeps the numbers of one ordering in
/// their given left-to-right order.
///
/// Every way of splitting the ordering into a left and a right run is tried,
/// each run is combined recursively, and every accepted operator joins each
/// left candidate with each right candidate. Numbers are never reordered here;
/// [`Permutations`](super::Permutations) supplies the orderings.
pub struct Combinations {
    inner: CandidateIter,
}

impl Combinations {
    pub fn new(ordering: Vec<Arc<Expression>>) -> Self {
        let len = ordering.len();
        let run: Arc<[Arc<Expression>]> = ordering.into();
        Self {
            inner: combine_run(run, 0, len),
        }
    }
}

impl Iterator for Combinations {
    type Item = Arc<Expression>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

fn combine_run(run: Arc<[Arc<Expression>]>, start: usize, end: usize) -> CandidateIter {
    if end - start == 1 {
        return Box::new(run.get(start).cloned().into_iter());
    }

    Box::new((start + 1..end).flat_map(move |split| {
        // The right run is replayed for every left candidate, so build it once per split
        let rights: Vec<Arc<Expression>> = combine_run(Arc::clone(&run), split, end).collect();

        combine_run(Arc::clone(&run), start, split).flat_map(move |left| {
            let combiners = combiners_for(&left);
            rights
                .iter()
                .flat_map(|right| combiners.iter().filter_map(move |c| c.combine(right)))
                .collect::<Vec<_>>()
        })
    }))
}
