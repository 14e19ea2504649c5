//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod operator;

pub use ast::{Expression, Precedence};
pub use errors::ExpressionError;
pub use operator::{Combiner, OPERATORS, Operator, combiners_for};

#[cfg(test)]
mod tests;
