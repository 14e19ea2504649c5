use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::expression::Expression;

/// One level of the depth-first walk: the ordering chosen so far and the
/// expressions still available to extend it
#[derive(Debug, Clone)]
struct Frame {
    prefix: Vec<Arc<Expression>>,
    remaining: Vec<Arc<Expression>>,
    position: usize,
    seen: HashSet<i64>,
}

impl Frame {
    fn new(prefix: Vec<Arc<Expression>>, remaining: Vec<Arc<Expression>>) -> Self {
        Self {
            prefix,
            remaining,
            position: 0,
            seen: HashSet::new(),
        }
    }

    /// Next element whose value has not been placed at this level yet
    fn next_choice(&mut self) -> Option<(usize, Arc<Expression>)> {
        while let Some(expr) = self.remaining.get(self.position) {
            let index = self.position;
            self.position += 1;
            if self.seen.insert(expr.value()) {
                return Some((index, Arc::clone(expr)));
            }
        }
        None
    }
}

/// Lazily yields every distinct ordering of every non-empty selection of the
/// input, in depth-first order.
///
/// Each ordering is emitted before its extensions: `[1, 2, 3]` produces
/// `[1]`, `[1, 2]`, `[1, 2, 3]`, `[1, 3]`, `[1, 3, 2]`, `[2]`, ... Orderings
/// that differ only by which copy of a repeated value sits at a position are
/// produced once.
#[derive(Debug, Clone)]
pub struct Permutations {
    stack: Vec<Frame>,
}

impl Permutations {
    pub fn new(items: Vec<Arc<Expression>>) -> Self {
        debug!("Initialized permutation generator over {} items", items.len());

        let mut stack = Vec::new();
        if !items.is_empty() {
            stack.push(Frame::new(Vec::new(), items));
        }
        Self { stack }
    }

    /// Permutations of number leaves built from `numbers`
    pub fn from_numbers(numbers: &[i64]) -> Self {
        Self::new(
            numbers
                .iter()
                .map(|&n| Arc::new(Expression::number(n)))
                .collect(),
        )
    }
}

impl Iterator for Permutations {
    type Item = Vec<Arc<Expression>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;

            let Some((index, chosen)) = frame.next_choice() else {
                self.stack.pop();
                continue;
            };

            let mut ordering = Vec::with_capacity(frame.prefix.len() + 1);
            ordering.extend(frame.prefix.iter().cloned());
            ordering.push(chosen);

            let mut remaining = frame.remaining.clone();
            remaining.remove(index);

            if !remaining.is_empty() {
                self.stack.push(Frame::new(ordering.clone(), remaining));
            }

            return Some(ordering);
        }
    }
}
