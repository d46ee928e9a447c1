//! Compilation error types

use thiserror::Error;

/// The compilation stage an error was detected in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A malformed token.
    Lexical,
    /// A malformed arrangement of otherwise valid tokens.
    Syntax,
}

/// Reasons an expression could not be compiled.
///
/// The `Display` output is meant to be shown to users as-is; all indices are character
/// offsets into the original expression text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A digit run runs straight into an identifier, e.g. `1a`
    #[error("Number {number} and variable merged at index {index}")]
    NumberAndVariableMerged { number: String, index: usize },

    /// Literal does not fit in a 32-bit signed integer
    #[error("Number {number} at index {index} is out of range")]
    NumberOutOfRange { number: String, index: usize },

    /// First half of a two-character operator on its own, e.g. a single `&`
    #[error("Unexpected character '{character}' at index {index} - should it be `{expected}`?")]
    IncompleteOperator {
        character: char,
        expected: &'static str,
        index: usize,
    },

    #[error("Invalid character '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("Empty expression")]
    EmptyExpression,

    #[error("Empty parenthesis at index {index}")]
    EmptyParenthesis { index: usize },

    #[error("Unclosed opening parenthesis at index {index}")]
    UnclosedParenthesis { index: usize },

    #[error("Unmatched closing parenthesis at index {index}")]
    UnmatchedClosingParenthesis { index: usize },

    /// Two operands next to each other with nothing joining them
    #[error("Missing binary operation before `{symbol}` at index {index}")]
    MissingBinaryOperation { symbol: String, index: usize },

    #[error("Missing value or sub-expression at beginning for `{symbol}` operator")]
    MissingOperandAtBeginning { symbol: String },

    #[error("Missing value or sub-expression at end for `{symbol}` operator")]
    MissingOperandAtEnd { symbol: String },

    /// Two adjacent tokens that both expect an operand between them. Either an operand
    /// is missing or one of the two tokens should not be there, so both are reported.
    #[error(
        "Missing value or sub-expression or there is an extra operator `{first_symbol}` at index {first_index} or `{second_symbol}` at index {second_index}"
    )]
    MissingOperandOrExtraOperator {
        first_symbol: String,
        first_index: usize,
        second_symbol: String,
        second_index: usize,
    },

    /// Too many parentheses and negations open at once
    #[error("Expression exceeds the maximum nesting depth of {limit} at index {index}")]
    NestingTooDeep { limit: usize, index: usize },

    /// A chain of operators that would build an overly deep tree, e.g. `a || a || ...`
    #[error("Operator at index {index} exceeds the maximum of {limit} chained operations")]
    OperationsTooDeep { limit: usize, index: usize },

    /// Internal invariant error. Token sequences are validated before the tree is built,
    /// so compiling never reports this; do not match on it.
    #[doc(hidden)]
    #[error("Unexpected `{symbol}` at index {index}")]
    UnexpectedToken { symbol: String, index: usize },

    /// Internal invariant error, see [`ParseError::UnexpectedToken`].
    #[doc(hidden)]
    #[error("Unexpected end of expression")]
    UnexpectedEndOfInput,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::NumberAndVariableMerged { .. }
            | ParseError::NumberOutOfRange { .. }
            | ParseError::IncompleteOperator { .. }
            | ParseError::InvalidCharacter { .. } => ErrorKind::Lexical,
            _ => ErrorKind::Syntax,
        }
    }

    /// The character offsets cited by the error message, in the order they appear in it.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            ParseError::NumberAndVariableMerged { index, .. }
            | ParseError::NumberOutOfRange { index, .. }
            | ParseError::IncompleteOperator { index, .. }
            | ParseError::InvalidCharacter { index, .. }
            | ParseError::EmptyParenthesis { index }
            | ParseError::UnclosedParenthesis { index }
            | ParseError::UnmatchedClosingParenthesis { index }
            | ParseError::MissingBinaryOperation { index, .. }
            | ParseError::NestingTooDeep { index, .. }
            | ParseError::OperationsTooDeep { index, .. }
            | ParseError::UnexpectedToken { index, .. } => vec![*index],
            ParseError::MissingOperandOrExtraOperator {
                first_index,
                second_index,
                ..
            } => vec![*first_index, *second_index],
            ParseError::EmptyExpression
            | ParseError::MissingOperandAtBeginning { .. }
            | ParseError::MissingOperandAtEnd { .. }
            | ParseError::UnexpectedEndOfInput => vec![],
        }
    }
}

/// Result type for compilation
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_operator_error_cites_both_positions() {
        let error = ParseError::MissingOperandOrExtraOperator {
            first_symbol: "!".into(),
            first_index: 0,
            second_symbol: "&&".into(),
            second_index: 2,
        };

        assert_eq!(error.indices(), vec![0, 2]);
        assert_eq!(error.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn incomplete_operator_is_lexical() {
        let error = ParseError::IncompleteOperator {
            character: '|',
            expected: "||",
            index: 5,
        };

        assert_eq!(error.kind(), ErrorKind::Lexical);
        assert_eq!(
            error.to_string(),
            "Unexpected character '|' at index 5 - should it be `||`?"
        );
    }
}
