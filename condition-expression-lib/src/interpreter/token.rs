use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression, together with where it starts in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Offset, in characters, of the first character of the token.
    pub index: usize,
}

impl Token {
    pub fn new(kind: TokenKind, index: usize) -> Token {
        Token { kind, index }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LiteralInteger(i32),
    Identifier(String),
    DoubleAmpersand,
    DoublePipe,
    DoubleEquals,
    BangEquals,
    Bang,
    LeftParentheses,
    RightParentheses,
}

impl TokenKind {
    /// A 'value' is a token that either represents or contains a numerical value.
    /// E.g. a literal or identifier.
    pub fn is_value(&self) -> bool {
        matches!(self, TokenKind::LiteralInteger(_) | TokenKind::Identifier(_))
    }

    pub fn opens_group(&self) -> bool {
        matches!(self, TokenKind::LeftParentheses)
    }

    pub fn closes_group(&self) -> bool {
        matches!(self, TokenKind::RightParentheses)
    }

    /// Whether the token consumes the sub-expression that precedes it.
    pub fn takes_left_operand(&self) -> bool {
        self.as_binary_operator().is_some() || self.closes_group()
    }

    /// Whether the token consumes the sub-expression that follows it.
    pub fn takes_right_operand(&self) -> bool {
        self.as_binary_operator().is_some()
            || self.as_unary_operator().is_some()
            || self.opens_group()
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            TokenKind::DoubleAmpersand => Some(BinaryOperator::And),
            TokenKind::DoublePipe => Some(BinaryOperator::Or),
            TokenKind::DoubleEquals => Some(BinaryOperator::Equals),
            TokenKind::BangEquals => Some(BinaryOperator::NotEquals),
            _ => None,
        }
    }

    pub fn as_unary_operator(&self) -> Option<UnaryOperator> {
        match self {
            TokenKind::Bang => Some(UnaryOperator::Not),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LiteralInteger(value) => write!(f, "{}", value),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::DoubleAmpersand => write!(f, "&&"),
            TokenKind::DoublePipe => write!(f, "||"),
            TokenKind::DoubleEquals => write!(f, "=="),
            TokenKind::BangEquals => write!(f, "!="),
            TokenKind::Bang => write!(f, "!"),
            TokenKind::LeftParentheses => write!(f, "("),
            TokenKind::RightParentheses => write!(f, ")"),
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
