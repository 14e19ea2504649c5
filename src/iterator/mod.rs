pub mod combinations;
pub mod permutations;

pub use combinations::Combinations;
pub use permutations::Permutations;

use std::sync::Arc;

use crate::expression::Expression;

/// Every candidate expression over `numbers`: each distinct ordering from
/// [`Permutations`] expanded through [`Combinations`]
pub fn iter_candidates(numbers: &[i64]) -> impl Iterator<Item = Arc<Expression>> + Send + use<> {
    Permutations::from_numbers(numbers).flat_map(Combinations::new)
}
