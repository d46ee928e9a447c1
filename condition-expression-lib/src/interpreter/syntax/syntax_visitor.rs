use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::Node;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_literal_integer(&mut self, _value: i32) {}
    fn visit_identifier(&mut self, _name: &str) {}
    fn visit_binary_operation(
        &mut self,
        _operation: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand)
    }
    fn visit_unary_operation(&mut self, _operation: &UnaryOperator, operand: &Node) {
        walk_unary_operation(self, operand)
    }
}

pub(crate) fn walk_binary_operation(
    visitor: &mut impl SyntaxVisitor,
    left_operand: &Node,
    right_operand: &Node,
) {
    left_operand.accept(visitor);
    right_operand.accept(visitor);
}

pub(crate) fn walk_unary_operation(visitor: &mut impl SyntaxVisitor, operand: &Node) {
    operand.accept(visitor);
}

/// Collects the names of all identifiers in the order they are visited.
#[derive(Default)]
pub(crate) struct IdentifierCollector {
    pub(crate) names: Vec<String>,
}

impl SyntaxVisitor for IdentifierCollector {
    fn visit_identifier(&mut self, name: &str) {
        self.names.push(name.to_string())
    }
}
