use std::sync::Arc;

use crate::expression::Expression;

/// Ranking of a candidate against a target. Lower is better, compared field by
/// field in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    pub distance: u64,
    pub numbers: usize,
    pub parentheses: usize,
}

impl Score {
    pub fn of(expr: &Expression, target: i64) -> Self {
        Self {
            distance: expr.distance_from(target),
            numbers: expr.number_count(),
            parentheses: expr.parentheses(),
        }
    }
}

/// Drops candidates that are too far from the target to ever be an answer
#[derive(Debug, Clone, Copy)]
pub struct ProximityFilter {
    target: i64,
    tolerance: u64,
}

impl ProximityFilter {
    pub fn new(target: i64, tolerance: u64) -> Self {
        Self { target, tolerance }
    }

    pub fn accepts(&self, expr: &Expression) -> bool {
        expr.distance_from(self.target) <= self.tolerance
    }
}

/// Keeps the best candidate seen so far and reports strict improvements.
///
/// Candidates whose [`Score`] only ties the current best are ignored, so the
/// first of several equally good expressions wins.
#[derive(Debug, Clone)]
pub struct BestTracker {
    target: i64,
    filter: ProximityFilter,
    best: Option<Score>,
}

impl BestTracker {
    pub fn new(target: i64, tolerance: u64) -> Self {
        Self {
            target,
            filter: ProximityFilter::new(target, tolerance),
            best: None,
        }
    }

    /// Record `expr`, returning `true` if it is the new best
    pub fn offer(&mut self, expr: &Expression) -> bool {
        if !self.filter.accepts(expr) {
            return false;
        }

        let score = Score::of(expr, self.target);
        match self.best {
            Some(best) if best <= score => false,
            _ => {
                self.best = Some(score);
                true
            }
        }
    }

    pub fn best(&self) -> Option<Score> {
        self.best
    }

    /// Reduce `input` to the subsequence of strict improvements
    pub fn improvements<I>(self, input: I) -> Improvements<I::IntoIter>
    where
        I: IntoIterator<Item = Arc<Expression>>,
    {
        Improvements {
            tracker: self,
            input: input.into_iter(),
        }
    }
}

/// Iterator adapter returned by [`BestTracker::improvements`]
#[derive(Debug)]
pub struct Improvements<I> {
    tracker: BestTracker,
    input: I,
}

impl<I> Improvements<I> {
    pub fn tracker(&self) -> &BestTracker {
        &self.tracker
    }
}

impl<I> Iterator for Improvements<I>
where
    I: Iterator<Item = Arc<Expression>>,
{
    type Item = Arc<Expression>;

    fn next(&mut self) -> Option<Self::Item> {
        self.input.find(|expr| self.tracker.offer(expr))
    }
}
