use std::sync::Arc;

use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

/// How tightly an expression binds when it appears as an operand.
///
/// The derived ordering is significant: `Low < High < Atomic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Low,
    High,
    Atomic,
}

#[derive(Debug, Clone)]
enum Node {
    Number,
    Binary {
        left: Arc<Expression>,
        operator: Operator,
        right: Arc<Expression>,
    },
}

/// An arithmetic expression built from source numbers.
///
/// Composite expressions share their operands through `Arc`, so a single
/// sub-expression can appear in many candidates and cross thread boundaries.
/// Nothing is mutated after construction and the textual form is only
/// produced when the expression is displayed.
#[derive(Debug, Clone)]
pub struct Expression {
    value: i64,
    precedence: Precedence,
    count: usize,
    parentheses: usize,
    node: Node,
}

impl Expression {
    /// A leaf holding one source number
    pub fn number(n: i64) -> Self {
        Self {
            value: n,
            precedence: Precedence::Atomic,
            count: 1,
            parentheses: 0,
            node: Node::Number,
        }
    }

    /// Combine two expressions with `operator`.
    ///
    /// No redundancy guards are applied here, see [`Operator::combiner`].
    ///
    /// # Errors
    ///
    /// Returns an error on division by zero or when the result does not fit in an `i64`.
    pub fn binary(
        left: Arc<Expression>,
        operator: Operator,
        right: Arc<Expression>,
    ) -> Result<Self, ExpressionError> {
        let value = operator.evaluate(left.value, right.value)?;

        let mut parentheses = left.parentheses + right.parentheses;
        if operator.wraps_left(&left) {
            parentheses += 1;
        }
        if operator.wraps_right(&right) {
            parentheses += 1;
        }

        Ok(Self {
            value,
            precedence: operator.precedence(),
            count: left.count + right.count,
            parentheses,
            node: Node::Binary {
                left,
                operator,
                right,
            },
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Number of source numbers consumed by this expression
    pub fn number_count(&self) -> usize {
        self.count
    }

    /// Number of sub-expressions that are wrapped in parentheses when rendered
    pub fn parentheses(&self) -> usize {
        self.parentheses
    }

    pub fn is_number(&self) -> bool {
        matches!(self.node, Node::Number)
    }

    /// The operator at the root, `None` for a leaf
    pub fn operator(&self) -> Option<Operator> {
        match &self.node {
            Node::Number => None,
            Node::Binary { operator, .. } => Some(*operator),
        }
    }

    /// Left and right operands of the root, `None` for a leaf
    pub fn operands(&self) -> Option<(&Expression, &Expression)> {
        match &self.node {
            Node::Number => None,
            Node::Binary { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// Source numbers used, in left-to-right order
    pub fn numbers(&self) -> Vec<i64> {
        let mut numbers = Vec::with_capacity(self.count);
        let mut stack = vec![self];

        while let Some(expr) = stack.pop() {
            match &expr.node {
                Node::Number => numbers.push(expr.value),
                Node::Binary { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
            }
        }

        numbers
    }

    /// Absolute difference between this expression's value and `target`
    pub fn distance_from(&self, target: i64) -> u64 {
        self.value.abs_diff(target)
    }

    /// Rendered text followed by the value, e.g. `"(3 + 4) * 5 = 35"`
    pub fn summary(&self) -> String {
        format!("{} = {}", self, self.value)
    }
}
