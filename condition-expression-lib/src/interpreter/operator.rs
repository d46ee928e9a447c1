use crate::interpreter::token::TokenKind;
use std::fmt;
use std::fmt::Formatter;

/// A binary logical or comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Or,
    And,
    Equals,
    NotEquals,
}

/// An unary logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
}

impl UnaryOperator {
    pub fn token(&self) -> TokenKind {
        match self {
            UnaryOperator::Not => TokenKind::Bang,
        }
    }

    pub fn evaluate(&self, x: i32) -> i32 {
        match self {
            UnaryOperator::Not => i32::from(x == 0),
        }
    }
}

impl BinaryOperator {
    pub fn token(&self) -> TokenKind {
        match self {
            BinaryOperator::Or => TokenKind::DoublePipe,
            BinaryOperator::And => TokenKind::DoubleAmpersand,
            BinaryOperator::Equals => TokenKind::DoubleEquals,
            BinaryOperator::NotEquals => TokenKind::BangEquals,
        }
    }

    /// All binary operators are left-associative; a higher precedence binds tighter.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Or => 0,
            BinaryOperator::And => 1,
            BinaryOperator::Equals | BinaryOperator::NotEquals => 2,
        }
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Combines two operand values.
    ///
    /// `&&` and `||` return one of their operands unchanged and only call `right` when the
    /// left value does not already decide the result. `==` and `!=` always yield `0` or `1`.
    pub fn evaluate(&self, left: i32, right: impl FnOnce() -> i32) -> i32 {
        match self {
            BinaryOperator::Or => {
                if left != 0 {
                    left
                } else {
                    right()
                }
            }
            BinaryOperator::And => {
                if left == 0 {
                    left
                } else {
                    right()
                }
            }
            BinaryOperator::Equals => i32::from(left == right()),
            BinaryOperator::NotEquals => i32::from(left != right()),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = BinaryOperator::And;
        let lesser = BinaryOperator::Or;
        assert!(greater.precedence_gt(&lesser))
    }

    #[test]
    fn operator_ge_correspond_with_precedence() {
        let greater = BinaryOperator::Equals;
        let lesser = BinaryOperator::And;
        assert!(greater.precedence_ge(&lesser));
        assert!(greater.precedence_ge(&BinaryOperator::NotEquals))
    }

    #[test]
    fn and_does_not_evaluate_right_operand_when_left_is_falsy() {
        let value = BinaryOperator::And.evaluate(0, || panic!("right operand was evaluated"));
        assert_eq!(value, 0)
    }

    #[test]
    fn or_does_not_evaluate_right_operand_when_left_is_truthy() {
        let value = BinaryOperator::Or.evaluate(-3, || panic!("right operand was evaluated"));
        assert_eq!(value, -3)
    }

    #[test]
    fn and_returns_right_operand_unchanged() {
        assert_eq!(BinaryOperator::And.evaluate(3, || 2), 2)
    }

    #[test]
    fn equality_compares_values_not_truthiness() {
        assert_eq!(BinaryOperator::Equals.evaluate(1, || 12), 0);
        assert_eq!(BinaryOperator::NotEquals.evaluate(1, || 12), 1)
    }

    #[test]
    fn not_normalizes_to_zero_or_one() {
        assert_eq!(UnaryOperator::Not.evaluate(5), 0);
        assert_eq!(UnaryOperator::Not.evaluate(-5), 0);
        assert_eq!(UnaryOperator::Not.evaluate(0), 1)
    }
}
