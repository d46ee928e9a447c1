use crate::interpreter::error::{ParseError, Result};
use crate::interpreter::token::Token;

/// Checks each token against the one before it, in source order.
///
/// Every pair of consecutive tokens must have exactly one of them consume the other side
/// as an operand, and parentheses must balance. A token stream that passes these checks
/// is accepted by the grammar, so all user-facing diagnostics come from here.
pub(super) struct TokenValidator {
    previous: Option<Token>,
    open_parentheses: Vec<usize>,
}

impl TokenValidator {
    pub(super) fn new() -> TokenValidator {
        TokenValidator {
            previous: None,
            open_parentheses: Vec::new(),
        }
    }

    pub(super) fn accept(&mut self, token: &Token) -> Result<()> {
        if token.kind.closes_group() && self.open_parentheses.pop().is_none() {
            return Err(ParseError::UnmatchedClosingParenthesis { index: token.index });
        }
        if token.kind.opens_group() {
            self.open_parentheses.push(token.index);
        }

        match &self.previous {
            None => {
                if token.kind.takes_left_operand() {
                    return Err(ParseError::MissingOperandAtBeginning {
                        symbol: token.kind.to_string(),
                    });
                }
            }
            Some(previous) => {
                if previous.kind.opens_group() && token.kind.closes_group() {
                    return Err(ParseError::EmptyParenthesis {
                        index: previous.index,
                    });
                }
                if previous.kind.takes_right_operand() == token.kind.takes_left_operand() {
                    return Err(if previous.kind.takes_right_operand() {
                        ParseError::MissingOperandOrExtraOperator {
                            first_symbol: previous.kind.to_string(),
                            first_index: previous.index,
                            second_symbol: token.kind.to_string(),
                            second_index: token.index,
                        }
                    } else {
                        ParseError::MissingBinaryOperation {
                            symbol: token.kind.to_string(),
                            index: token.index,
                        }
                    });
                }
            }
        }

        self.previous = Some(token.clone());
        Ok(())
    }

    /// Checks that the expression does not stop halfway.
    pub(super) fn finish(self) -> Result<()> {
        let last = self.previous.ok_or(ParseError::EmptyExpression)?;
        if last.kind.takes_right_operand() {
            return Err(ParseError::MissingOperandAtEnd {
                symbol: last.kind.to_string(),
            });
        }
        match self.open_parentheses.last() {
            Some(&index) => Err(ParseError::UnclosedParenthesis { index }),
            None => Ok(()),
        }
    }
}
