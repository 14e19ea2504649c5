use std::sync::Arc;

use crate::expression::ast::{Expression, Precedence};
use crate::expression::errors::ExpressionError;

/// The four arithmetic operators of the numbers game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Every operator, in the order combiners are tried
pub const OPERATORS: [Operator; 4] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
];

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Operator::Add | Operator::Subtract => Precedence::Low,
            Operator::Multiply | Operator::Divide => Precedence::High,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }

    /// Apply the operator to two integers.
    ///
    /// Division truncates; callers that need exact division go through the
    /// combiner guards first.
    ///
    /// # Errors
    ///
    /// Returns an error on division by zero or overflow.
    pub fn evaluate(self, left: i64, right: i64) -> Result<i64, ExpressionError> {
        let result = match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right == 0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };

        result.ok_or(ExpressionError::Overflow {
            left,
            symbol: self.symbol(),
            right,
        })
    }

    /// Whether the left operand has to be parenthesized under this operator
    pub fn wraps_left(self, left: &Expression) -> bool {
        left.precedence() < self.precedence()
    }

    /// Whether the right operand has to be parenthesized under this operator.
    ///
    /// Equal precedence only needs parentheses on the right of `-` and `/`.
    pub fn wraps_right(self, right: &Expression) -> bool {
        right.precedence() < self.precedence()
            || (right.precedence() == self.precedence() && !self.is_commutative())
    }

    /// Guard on the left operand alone
    pub fn accepts_left(self, left: i64) -> bool {
        match self {
            Operator::Add => true,
            Operator::Subtract => left >= 3,
            Operator::Multiply | Operator::Divide => left != 1,
        }
    }

    /// Guard on both operands.
    ///
    /// Rejects results that are not positive integers as well as combinations
    /// whose result is already available from fewer numbers: `x * 1`, `x / 1`,
    /// `2y - y` and `y² / y`.
    pub fn accepts(self, left: i64, right: i64) -> bool {
        if !self.accepts_left(left) {
            return false;
        }

        match self {
            Operator::Add => true,
            Operator::Subtract => left > right && Some(left) != right.checked_mul(2),
            Operator::Multiply => right != 1,
            Operator::Divide => {
                right != 1
                    && left.checked_rem(right) == Some(0)
                    && Some(left) != right.checked_mul(right)
            }
        }
    }

    /// A combiner that applies this operator with `left` fixed, or `None`
    /// when no right operand could make the combination useful
    pub fn combiner(self, left: &Arc<Expression>) -> Option<Combiner> {
        self.accepts_left(left.value()).then(|| Combiner {
            operator: self,
            left: Arc::clone(left),
        })
    }
}

/// An operator partially applied to its left operand
#[derive(Debug, Clone)]
pub struct Combiner {
    operator: Operator,
    left: Arc<Expression>,
}

impl Combiner {
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Build `left <op> right`, or `None` if the guards reject `right`
    pub fn combine(&self, right: &Arc<Expression>) -> Option<Arc<Expression>> {
        if !self.operator.accepts(self.left.value(), right.value()) {
            return None;
        }

        Expression::binary(Arc::clone(&self.left), self.operator, Arc::clone(right))
            .ok()
            .map(Arc::new)
    }
}

/// Combiners for every operator that accepts `left`, in catalog order
pub fn combiners_for(left: &Arc<Expression>) -> Vec<Combiner> {
    OPERATORS
        .iter()
        .filter_map(|operator| operator.combiner(left))
        .collect()
}
