use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, SyntaxVisitor,
};
use crate::interpreter::token::TokenKind;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    LiteralInteger(i32),
    Identifier(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal_integer(value: i32) -> Node {
        Node::LiteralInteger(value)
    }

    pub fn new_identifier(name: String) -> Node {
        Node::Identifier(name)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_unary_operation(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_not(operand: Node) -> Node {
        Self::new_unary_operation(UnaryOperator::Not, operand)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Node::Identifier(_) | Node::LiteralInteger(_))
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Node::BinaryOperation { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::LiteralInteger(value) => visitor.visit_literal_integer(*value),
            Node::Identifier(name) => visitor.visit_identifier(name),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
        }
    }

    /// Regenerates the tokens of the expression, with only the parentheses the
    /// operator precedence requires.
    pub fn to_infix(&self) -> Vec<TokenKind> {
        let mut tokens = Vec::new();
        self.build_expression(&mut tokens);
        tokens
    }

    fn build_expression(&self, tokens: &mut Vec<TokenKind>) {
        match self {
            Node::LiteralInteger(value) => tokens.push(TokenKind::LiteralInteger(*value)),
            Node::Identifier(name) => tokens.push(TokenKind::Identifier(name.to_string())),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                // Operators are left-associative, so a right operand of equal precedence
                // must keep its parentheses.
                let wrap_left = left_operand
                    .as_binary_operator()
                    .map_or(false, |child| operator.precedence_gt(&child));
                let wrap_right = right_operand
                    .as_binary_operator()
                    .map_or(false, |child| operator.precedence_ge(&child));

                parenthesize_if(tokens, wrap_left, |tokens| {
                    left_operand.build_expression(tokens)
                });
                tokens.push(operator.token());
                parenthesize_if(tokens, wrap_right, |tokens| {
                    right_operand.build_expression(tokens)
                });
            }
            Node::UnaryOperation { operator, operand } => {
                tokens.push(operator.token());
                parenthesize_if(tokens, !operand.is_unary_or_value(), |tokens| {
                    operand.build_expression(tokens)
                });
            }
        }
    }

    fn is_unary_or_value(&self) -> bool {
        self.is_value() || matches!(self, Node::UnaryOperation { .. })
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&visitor.builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal_integer(&mut self, value: i32) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_identifier(&mut self, name: &str) {
        self.builder.add_empty_child(name.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
}

fn parenthesize_if(
    tokens: &mut Vec<TokenKind>,
    predicate: bool,
    mut build_interior: impl FnMut(&mut Vec<TokenKind>),
) {
    if predicate {
        tokens.push(TokenKind::LeftParentheses);
    }

    build_interior(tokens);

    if predicate {
        tokens.push(TokenKind::RightParentheses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_tree_converts_back_to_simple_expression() {
        let expected_tokens = vec![
            TokenKind::Identifier("x".to_string()),
            TokenKind::DoubleAmpersand,
            TokenKind::Identifier("y".to_string()),
        ];
        let tree = Node::new_binary_operation(
            BinaryOperator::And,
            Node::new_identifier("x".into()),
            Node::new_identifier("y".into()),
        );

        let actual_tokens = tree.to_infix();

        assert_eq!(actual_tokens, expected_tokens);
    }

    #[test]
    fn lower_precedence_child_is_parenthesized() {
        // x && (y || z)
        let tree = Node::new_binary_operation(
            BinaryOperator::And,
            Node::new_identifier("x".into()),
            Node::new_binary_operation(
                BinaryOperator::Or,
                Node::new_identifier("y".into()),
                Node::new_identifier("z".into()),
            ),
        );
        let expected_tokens = vec![
            TokenKind::Identifier("x".to_string()),
            TokenKind::DoubleAmpersand,
            TokenKind::LeftParentheses,
            TokenKind::Identifier("y".to_string()),
            TokenKind::DoublePipe,
            TokenKind::Identifier("z".to_string()),
            TokenKind::RightParentheses,
        ];

        assert_eq!(tree.to_infix(), expected_tokens);
    }

    #[test]
    fn right_nested_equality_keeps_parentheses() {
        // a == (b == c)
        let tree = Node::new_binary_operation(
            BinaryOperator::Equals,
            Node::new_identifier("a".into()),
            Node::new_binary_operation(
                BinaryOperator::Equals,
                Node::new_identifier("b".into()),
                Node::new_identifier("c".into()),
            ),
        );

        let tokens = tree.to_infix();

        assert_eq!(tokens[2], TokenKind::LeftParentheses);
        assert_eq!(tokens.last(), Some(&TokenKind::RightParentheses));
    }

    #[test]
    fn left_nested_equality_drops_parentheses() {
        // (a == b) != c
        let tree = Node::new_binary_operation(
            BinaryOperator::NotEquals,
            Node::new_binary_operation(
                BinaryOperator::Equals,
                Node::new_identifier("a".into()),
                Node::new_identifier("b".into()),
            ),
            Node::new_identifier("c".into()),
        );

        assert!(!tree.to_infix().contains(&TokenKind::LeftParentheses));
    }

    #[test]
    fn negated_binary_operation_is_parenthesized() {
        let tree = Node::new_not(Node::new_binary_operation(
            BinaryOperator::Or,
            Node::new_identifier("a".into()),
            Node::new_literal_integer(0),
        ));
        let expected_tokens = vec![
            TokenKind::Bang,
            TokenKind::LeftParentheses,
            TokenKind::Identifier("a".to_string()),
            TokenKind::DoublePipe,
            TokenKind::LiteralInteger(0),
            TokenKind::RightParentheses,
        ];

        assert_eq!(tree.to_infix(), expected_tokens);
    }

    #[test]
    fn print_contains_every_node() {
        let tree = Node::new_binary_operation(
            BinaryOperator::Or,
            Node::new_not(Node::new_identifier("cloaked".into())),
            Node::new_literal_integer(-3),
        );

        let printed = tree.to_string();

        for label in ["expression", "||", "!", "cloaked", "-3"] {
            assert!(printed.contains(label), "{} missing from:\n{}", label, printed);
        }
    }
}
