use std::sync::Arc;

use crate::expression::{
    Expression, ExpressionError, OPERATORS, Operator, Precedence, combiners_for,
};

fn num(n: i64) -> Arc<Expression> {
    Arc::new(Expression::number(n))
}

fn bin(left: Arc<Expression>, operator: Operator, right: Arc<Expression>) -> Arc<Expression> {
    match Expression::binary(left, operator, right) {
        Ok(expr) => Arc::new(expr),
        Err(e) => panic!("failed to build expression: {}", e),
    }
}

#[test]
fn test_number_leaf() {
    let expr = Expression::number(7);
    assert_eq!(expr.value(), 7);
    assert_eq!(expr.precedence(), Precedence::Atomic);
    assert_eq!(expr.number_count(), 1);
    assert_eq!(expr.parentheses(), 0);
    assert_eq!(expr.numbers(), vec![7]);
    assert!(expr.is_number());
    assert!(expr.operator().is_none());
    assert_eq!(format!("{}", expr), "7");
}

#[test]
fn test_left_associative_addition_has_no_parens() {
    let expr = bin(bin(num(2), Operator::Add, num(3)), Operator::Add, num(4));
    assert_eq!(format!("{}", expr), "2 + 3 + 4");
    assert_eq!(expr.parentheses(), 0);
    assert_eq!(expr.value(), 9);
}

#[test]
fn test_right_nested_addition_has_no_parens() {
    let expr = bin(num(2), Operator::Add, bin(num(3), Operator::Add, num(4)));
    assert_eq!(format!("{}", expr), "2 + 3 + 4");
    assert_eq!(expr.parentheses(), 0);
}

#[test]
fn test_right_nested_subtraction_needs_parens() {
    let expr = bin(num(10), Operator::Subtract, bin(num(3), Operator::Subtract, num(2)));
    assert_eq!(format!("{}", expr), "10 - (3 - 2)");
    assert_eq!(expr.parentheses(), 1);
    assert_eq!(expr.value(), 9);
}

#[test]
fn test_left_nested_subtraction_has_no_parens() {
    let expr = bin(bin(num(10), Operator::Subtract, num(3)), Operator::Subtract, num(2));
    assert_eq!(format!("{}", expr), "10 - 3 - 2");
    assert_eq!(expr.parentheses(), 0);
    assert_eq!(expr.value(), 5);
}

#[test]
fn test_low_precedence_operand_of_multiplication() {
    let expr = bin(bin(num(3), Operator::Add, num(4)), Operator::Multiply, num(5));
    assert_eq!(format!("{}", expr), "(3 + 4) * 5");
    assert_eq!(expr.parentheses(), 1);
    assert_eq!(expr.value(), 35);
    assert_eq!(expr.precedence(), Precedence::High);

    let expr = bin(num(5), Operator::Multiply, bin(num(3), Operator::Add, num(4)));
    assert_eq!(format!("{}", expr), "5 * (3 + 4)");
    assert_eq!(expr.parentheses(), 1);
}

#[test]
fn test_division_by_product_needs_parens() {
    let expr = bin(num(100), Operator::Divide, bin(num(5), Operator::Multiply, num(2)));
    assert_eq!(format!("{}", expr), "100 / (5 * 2)");
    assert_eq!(expr.parentheses(), 1);
    assert_eq!(expr.value(), 10);

    let expr = bin(num(6), Operator::Multiply, bin(num(3), Operator::Multiply, num(2)));
    assert_eq!(format!("{}", expr), "6 * 3 * 2");
    assert_eq!(expr.parentheses(), 0);
}

#[test]
fn test_parentheses_accumulate_from_children() {
    let left = bin(num(3), Operator::Add, num(4));
    let right = bin(num(10), Operator::Subtract, bin(num(3), Operator::Subtract, num(2)));
    let expr = bin(left, Operator::Multiply, right);

    assert_eq!(format!("{}", expr), "(3 + 4) * (10 - (3 - 2))");
    assert_eq!(expr.parentheses(), 3);
    assert_eq!(expr.value(), 63);
}

#[test]
fn test_numbers_are_concatenated_in_order() {
    let left = bin(num(50), Operator::Add, num(2));
    let right = bin(num(9), Operator::Subtract, num(4));
    let expr = bin(left, Operator::Multiply, right);

    assert_eq!(expr.numbers(), vec![50, 2, 9, 4]);
    assert_eq!(expr.number_count(), 4);
}

#[test]
fn test_rendering_is_idempotent() {
    let expr = bin(
        bin(num(100), Operator::Subtract, num(7)),
        Operator::Multiply,
        bin(num(8), Operator::Divide, num(2)),
    );
    let first = expr.to_string();
    let second = expr.to_string();
    assert_eq!(first, second);
    assert_eq!(first, "(100 - 7) * (8 / 2)");
}

#[test]
fn test_summary() {
    let expr = bin(num(25), Operator::Multiply, num(4));
    assert_eq!(expr.summary(), "25 * 4 = 100");
}

#[test]
fn test_shared_operand_in_several_parents() {
    let shared = bin(num(3), Operator::Add, num(4));
    let doubled = bin(Arc::clone(&shared), Operator::Multiply, num(2));
    let bigger = bin(Arc::clone(&shared), Operator::Add, num(10));

    assert_eq!(doubled.value(), 14);
    assert_eq!(bigger.value(), 17);
    assert_eq!(format!("{}", shared), "3 + 4");
}

#[test]
fn test_distance_from() {
    let expr = Expression::number(955);
    assert_eq!(expr.distance_from(954), 1);
    assert_eq!(expr.distance_from(960), 5);
    assert_eq!(expr.distance_from(955), 0);
}

#[test]
fn test_binary_division_by_zero() {
    let result = Expression::binary(num(10), Operator::Divide, num(0));
    assert!(matches!(result, Err(ExpressionError::DivisionByZero)));
}

#[test]
fn test_binary_overflow() {
    let result = Expression::binary(num(i64::MAX), Operator::Add, num(1));
    assert!(matches!(result, Err(ExpressionError::Overflow { .. })));
}

#[test]
fn test_operator_catalog() {
    let symbols: Vec<_> = OPERATORS.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, vec!["+", "-", "*", "/"]);

    assert!(Operator::Add.is_commutative());
    assert!(!Operator::Subtract.is_commutative());
    assert!(Operator::Multiply.is_commutative());
    assert!(!Operator::Divide.is_commutative());

    assert_eq!(Operator::Add.precedence(), Precedence::Low);
    assert_eq!(Operator::Divide.precedence(), Precedence::High);
    assert!(Precedence::Low < Precedence::High);
    assert!(Precedence::High < Precedence::Atomic);
}

#[test]
fn test_combiners_for_small_left_operands() {
    let ops = |n| -> Vec<Operator> { combiners_for(&num(n)).iter().map(|c| c.operator()).collect() };

    assert_eq!(ops(1), vec![Operator::Add]);
    assert_eq!(ops(2), vec![Operator::Add, Operator::Multiply, Operator::Divide]);
    assert_eq!(ops(5), OPERATORS.to_vec());
}

#[test]
fn test_subtract_guards() {
    let combine = |l, r| Operator::Subtract.combiner(&num(l)).and_then(|c| c.combine(&num(r)));

    assert!(Operator::Subtract.combiner(&num(2)).is_none());
    assert_eq!(combine(10, 3).map(|e| e.value()), Some(7));
    assert!(combine(10, 10).is_none());
    assert!(combine(3, 10).is_none());
    assert!(combine(10, 5).is_none());
}

#[test]
fn test_multiply_guards() {
    let combine = |l, r| Operator::Multiply.combiner(&num(l)).and_then(|c| c.combine(&num(r)));

    assert!(Operator::Multiply.combiner(&num(1)).is_none());
    assert!(combine(7, 1).is_none());
    assert_eq!(combine(7, 6).map(|e| e.value()), Some(42));
}

#[test]
fn test_divide_guards() {
    let combine = |l, r| Operator::Divide.combiner(&num(l)).and_then(|c| c.combine(&num(r)));

    assert!(Operator::Divide.combiner(&num(1)).is_none());
    assert_eq!(combine(12, 4).map(|e| e.value()), Some(3));
    assert!(combine(12, 5).is_none());
    assert!(combine(12, 1).is_none());
    assert!(combine(16, 4).is_none());
    assert!(combine(12, 0).is_none());
}

#[test]
fn test_guards_never_produce_redundant_results() {
    for left in 0..=60 {
        for right in 0..=60 {
            for operator in OPERATORS {
                let Some(combiner) = operator.combiner(&num(left)) else {
                    continue;
                };
                let Some(expr) = combiner.combine(&num(right)) else {
                    continue;
                };
                let value = expr.value();

                match operator {
                    Operator::Add => assert_eq!(value, left + right),
                    Operator::Subtract => {
                        assert!(value > 0, "{} - {} = {}", left, right, value);
                        assert_ne!(value, right, "{} - {} = {}", left, right, value);
                    }
                    Operator::Multiply => {
                        assert_ne!(left, 1);
                        assert_ne!(right, 1);
                    }
                    Operator::Divide => {
                        assert_ne!(left, 1);
                        assert_ne!(right, 1);
                        assert_eq!(value * right, left);
                        assert_ne!(value, right, "{} / {} = {}", left, right, value);
                    }
                }
            }
        }
    }
}
