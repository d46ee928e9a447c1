use crate::interpreter::syntax::expression_tree::Node;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A source of variable values.
///
/// Names the source does not know evaluate as `0`.
pub trait Variables {
    fn get(&self, name: &str) -> Option<i32>;
}

impl<K, S> Variables for HashMap<K, i32, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn get(&self, name: &str) -> Option<i32> {
        HashMap::get(self, name).copied()
    }
}

impl<K> Variables for BTreeMap<K, i32>
where
    K: Borrow<str> + Ord,
{
    fn get(&self, name: &str) -> Option<i32> {
        BTreeMap::get(self, name).copied()
    }
}

impl<T: Variables + ?Sized> Variables for &T {
    fn get(&self, name: &str) -> Option<i32> {
        (**self).get(name)
    }
}

/// Adapts a function to a [`Variables`] source.
///
/// # Examples
///
/// ```
/// use condition_expression::interpreter::evaluator::{Variables, VariablesFn};
///
/// let variables = VariablesFn(|name: &str| -> Option<i32> {
///     name.strip_prefix("level-")?.parse().ok()
/// });
/// assert_eq!(variables.get("level-3"), Some(3));
/// ```
pub struct VariablesFn<F>(pub F);

impl<F> Variables for VariablesFn<F>
where
    F: Fn(&str) -> Option<i32>,
{
    fn get(&self, name: &str) -> Option<i32> {
        (self.0)(name)
    }
}

/// Evaluates the given expression tree.
///
/// Nonzero results are truthy. `&&` and `||` pass through the value of the operand that
/// decided them, while `!`, `==` and `!=` yield `0` or `1`.
///
/// # Arguments
///
/// * `node`: The root of the expression tree.
/// * `variables`: The values of the variables the expression refers to.
///
/// returns: The value of the expression.
pub fn evaluate<V: Variables + ?Sized>(node: &Node, variables: &V) -> i32 {
    match node {
        Node::LiteralInteger(value) => *value,
        Node::Identifier(name) => variables.get(name).unwrap_or(0),
        Node::UnaryOperation { operator, operand } => {
            operator.evaluate(evaluate(operand, variables))
        }
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => operator.evaluate(evaluate(left_operand, variables), || {
            evaluate(right_operand, variables)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BinaryOperator;
    use std::cell::RefCell;

    fn and(left: Node, right: Node) -> Node {
        Node::new_binary_operation(BinaryOperator::And, left, right)
    }

    fn or(left: Node, right: Node) -> Node {
        Node::new_binary_operation(BinaryOperator::Or, left, right)
    }

    #[test]
    fn undefined_variable_evaluates_to_zero() {
        let variables: HashMap<String, i32> = HashMap::new();
        let tree = Node::new_identifier("undefined".into());

        assert_eq!(evaluate(&tree, &variables), 0);
    }

    #[test]
    fn variable_is_looked_up_by_name() {
        let variables: BTreeMap<&str, i32> = [("ammo", 7)].into_iter().collect();
        let tree = Node::new_identifier("ammo".into());

        assert_eq!(evaluate(&tree, &variables), 7);
    }

    #[test]
    fn and_propagates_deciding_value() {
        let variables: HashMap<&str, i32> = [("a", 3), ("b", 2)].into_iter().collect();
        let tree = and(Node::new_identifier("a".into()), Node::new_identifier("b".into()));

        assert_eq!(evaluate(&tree, &variables), 2);
    }

    #[test]
    fn or_propagates_deciding_value() {
        let variables: HashMap<&str, i32> = [("a", 0), ("b", -4)].into_iter().collect();
        let tree = or(Node::new_identifier("a".into()), Node::new_identifier("b".into()));

        assert_eq!(evaluate(&tree, &variables), -4);
    }

    #[test]
    fn short_circuit_skips_lookup_of_untaken_operand() {
        let looked_up = RefCell::new(Vec::new());
        let variables = VariablesFn(|name: &str| {
            looked_up.borrow_mut().push(name.to_string());
            Some(1)
        });
        let tree = or(
            Node::new_identifier("first".into()),
            Node::new_identifier("second".into()),
        );

        assert_eq!(evaluate(&tree, &variables), 1);
        assert_eq!(*looked_up.borrow(), ["first"]);
    }

    #[test]
    fn double_negation_normalizes() {
        let tree = Node::new_not(Node::new_not(Node::new_literal_integer(-7)));

        assert_eq!(evaluate(&tree, &HashMap::<String, i32>::new()), 1);
    }

    #[test]
    fn evaluation_through_trait_object() {
        let variables: HashMap<String, i32> = [("x".to_string(), 5)].into_iter().collect();
        let source: &dyn Variables = &variables;

        assert_eq!(evaluate(&Node::new_identifier("x".into()), source), 5);
    }
}
