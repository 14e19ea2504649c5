use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match (expr.operator(), expr.operands()) {
                (Some(operator), Some((left, right))) => {
                    write_with_parens(f, left, operator.wraps_left(left))?;
                    write!(f, " {} ", operator.symbol())?;
                    write_with_parens(f, right, operator.wraps_right(right))
                }
                _ => write!(f, "{}", expr.value()),
            }
        }

        fmt_expression(f, self)
    }
}
