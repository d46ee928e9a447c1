use crate::interpreter::error::{ParseError, Result};
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::parser::{MAX_NESTING_DEPTH, MAX_OPERATION_DEPTH};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{Token, TokenKind};

/// A parsed node together with the number of operations on its longest branch.
struct Subtree {
    node: Node,
    depth: usize,
}

impl Subtree {
    fn leaf(node: Node) -> Subtree {
        Subtree { node, depth: 0 }
    }
}

/// Pending entries of the operator stack, each with the index of its token.
enum Pending {
    Group(usize),
    Unary(UnaryOperator, usize),
    Binary(BinaryOperator, usize),
}

/// Builds expression trees with an explicit operator stack, so neither deep parentheses
/// nor long operator chains cost any call stack while parsing.
struct TreeBuilder {
    operators: Vec<Pending>,
    operands: Vec<Subtree>,
    /// Open groups and pending negations.
    nesting: usize,
    expects_operand: bool,
}

/// Builds the expression tree of an entire token sequence.
pub(super) fn parse_tokens(tokens: Vec<Token>) -> Result<Node> {
    let mut builder = TreeBuilder {
        operators: Vec::new(),
        operands: Vec::new(),
        nesting: 0,
        expects_operand: true,
    };
    for token in tokens {
        builder.push(token)?;
    }
    builder.finish()
}

impl TreeBuilder {
    fn push(&mut self, token: Token) -> Result<()> {
        let starts_operand = token.kind.is_value()
            || token.kind.opens_group()
            || token.kind == TokenKind::Bang;
        if self.expects_operand != starts_operand {
            return Err(unexpected(token));
        }
        if let Some(operator) = token.kind.as_binary_operator() {
            return self.push_binary(operator, token.index);
        }

        match token.kind {
            TokenKind::LiteralInteger(value) => {
                self.push_operand(Subtree::leaf(Node::new_literal_integer(value)))
            }
            TokenKind::Identifier(name) => {
                self.push_operand(Subtree::leaf(Node::new_identifier(name)))
            }
            TokenKind::Bang => {
                self.open(Pending::Unary(UnaryOperator::Not, token.index), token.index)?
            }
            TokenKind::LeftParentheses => self.open(Pending::Group(token.index), token.index)?,
            TokenKind::RightParentheses => self.close_group(token.index)?,
            _ => return Err(unexpected(token)),
        }
        Ok(())
    }

    fn push_operand(&mut self, operand: Subtree) {
        self.operands.push(operand);
        self.expects_operand = false;
    }

    fn open(&mut self, pending: Pending, index: usize) -> Result<()> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                index,
            });
        }
        self.operators.push(pending);
        Ok(())
    }

    /// Reduces every pending operator that binds at least as tightly as `operator`, which
    /// makes equal precedence left-associative.
    fn push_binary(&mut self, operator: BinaryOperator, index: usize) -> Result<()> {
        loop {
            match self.operators.last() {
                Some(Pending::Unary(..)) => self.reduce()?,
                Some(Pending::Binary(pending, _)) if pending.precedence_ge(&operator) => {
                    self.reduce()?
                }
                _ => break,
            }
        }
        self.operators.push(Pending::Binary(operator, index));
        self.expects_operand = true;
        Ok(())
    }

    fn close_group(&mut self, index: usize) -> Result<()> {
        loop {
            match self.operators.last() {
                Some(Pending::Group(_)) => break,
                Some(_) => self.reduce()?,
                None => return Err(ParseError::UnmatchedClosingParenthesis { index }),
            }
        }
        self.operators.pop();
        self.nesting -= 1;
        Ok(())
    }

    fn finish(mut self) -> Result<Node> {
        if self.expects_operand {
            return Err(ParseError::UnexpectedEndOfInput);
        }
        while let Some(pending) = self.operators.last() {
            if let Pending::Group(index) = pending {
                return Err(ParseError::UnclosedParenthesis { index: *index });
            }
            self.reduce()?;
        }

        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(tree), true) => Ok(tree.node),
            _ => Err(ParseError::UnexpectedEndOfInput),
        }
    }

    /// Replaces the topmost operator and its operands with a single subtree.
    fn reduce(&mut self) -> Result<()> {
        let subtree = match self.operators.pop() {
            Some(Pending::Unary(operator, index)) => {
                let operand = self.pop_operand()?;
                self.nesting -= 1;
                let depth = check_depth(operand.depth + 1, index)?;
                Subtree {
                    node: Node::new_unary_operation(operator, operand.node),
                    depth,
                }
            }
            Some(Pending::Binary(operator, index)) => {
                let right = self.pop_operand()?;
                let left = self.pop_operand()?;
                let depth = check_depth(left.depth.max(right.depth) + 1, index)?;
                Subtree {
                    node: Node::new_binary_operation(operator, left.node, right.node),
                    depth,
                }
            }
            Some(Pending::Group(index)) => {
                return Err(ParseError::UnclosedParenthesis { index });
            }
            None => return Err(ParseError::UnexpectedEndOfInput),
        };
        self.operands.push(subtree);
        Ok(())
    }

    fn pop_operand(&mut self) -> Result<Subtree> {
        self.operands.pop().ok_or(ParseError::UnexpectedEndOfInput)
    }
}

fn check_depth(depth: usize, index: usize) -> Result<usize> {
    if depth > MAX_OPERATION_DEPTH {
        Err(ParseError::OperationsTooDeep {
            limit: MAX_OPERATION_DEPTH,
            index,
        })
    } else {
        Ok(depth)
    }
}

fn unexpected(token: Token) -> ParseError {
    ParseError::UnexpectedToken {
        symbol: token.kind.to_string(),
        index: token.index,
    }
}
