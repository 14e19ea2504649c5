use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Arithmetic overflow evaluating {left} {symbol} {right}")]
    Overflow {
        left: i64,
        symbol: &'static str,
        right: i64,
    },
}
