pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::error::{ParseError, Result};
use crate::interpreter::evaluator::{evaluate, Variables};
use crate::interpreter::lexer::Lexer;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::syntax_visitor::IdentifierCollector;
use crate::interpreter::token::TokenKind;
use itertools::Itertools;
use log::{debug, trace};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A compiled condition, ready to be evaluated any number of times.
///
/// Compiling either succeeds completely or fails with the first problem found, so an
/// invalid condition text always produces the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionExpression {
    expression: String,
    tree: Node,
    variables: Vec<String>,
}

impl ConditionExpression {
    /// Compiles the given condition text.
    ///
    /// # Examples
    ///
    /// ```
    /// use condition_expression::interpreter::ConditionExpression;
    /// use std::collections::HashMap;
    /// # use condition_expression::interpreter::error::ParseError;
    ///
    /// # fn main() -> Result<(), ParseError> {
    /// let condition = ConditionExpression::new("deployed && !being-captured")?;
    /// let variables: HashMap<&str, i32> = [("deployed", 1)].into_iter().collect();
    ///
    /// assert_eq!(condition.evaluate(&variables), 1);
    /// assert_eq!(condition.variables(), ["deployed", "being-captured"]);
    /// # Ok(()) }
    /// ```
    pub fn new(expression: &str) -> Result<ConditionExpression> {
        let tree = convert(expression)?;

        let mut collector = IdentifierCollector::default();
        tree.accept(&mut collector);
        let variables = collector.names.into_iter().unique().collect();

        Ok(ConditionExpression {
            expression: expression.to_string(),
            tree,
            variables,
        })
    }

    /// The text the expression was compiled from.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// Every distinct variable name the expression refers to, in order of first appearance.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Evaluates the expression. Variables missing from `variables` count as `0`.
    pub fn evaluate<V: Variables + ?Sized>(&self, variables: &V) -> i32 {
        evaluate(&self.tree, variables)
    }
}

impl FromStr for ConditionExpression {
    type Err = ParseError;

    fn from_str(expression: &str) -> Result<Self> {
        ConditionExpression::new(expression)
    }
}

impl Display for ConditionExpression {
    /// Writes the expression in normalized form, which compiles to an equal tree.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&tokens_to_string(&self.tree.to_infix()))
    }
}

/// Compiles the given condition text. Same as [`ConditionExpression::new`].
pub fn compile(expression: &str) -> Result<ConditionExpression> {
    ConditionExpression::new(expression)
}

/// Converts the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `expression`: The text-representation of the condition.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use condition_expression::interpreter::convert;
/// use condition_expression::interpreter::evaluator::evaluate;
/// use std::collections::HashMap;
/// # use condition_expression::interpreter::error::ParseError;
///
/// # fn main() -> Result<(), ParseError> {
/// let tree = convert("3 && 2")?;
/// assert_eq!(evaluate(&tree, &HashMap::<String, i32>::new()), 2);
/// # Ok(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node> {
    trace!("compiling condition `{}`", expression);
    match parser::parse_token_stream(Lexer::new(expression)) {
        Ok(tree) => {
            trace!("compiled condition `{}` into\n{}", expression, tree);
            Ok(tree)
        }
        Err(error) => {
            debug!("condition `{}` is invalid: {}", expression, error);
            Err(error)
        }
    }
}

/// Pretty-prints the given tokens with whitespace around binary operators.
///
/// # Examples
///
/// ```
/// use condition_expression::interpreter::tokens_to_string;
/// use condition_expression::interpreter::token::TokenKind;
///
/// let tokens = vec![
///     TokenKind::Bang,
///     TokenKind::Identifier("x".to_string()),
///     TokenKind::DoublePipe,
///     TokenKind::LiteralInteger(-1),
/// ];
/// assert_eq!(tokens_to_string(&tokens), "!x || -1");
/// ```
pub fn tokens_to_string(tokens: &[TokenKind]) -> String {
    tokens
        .iter()
        .map(|token| match token.as_binary_operator() {
            Some(_) => format!(" {} ", token),
            None => token.to_string(),
        })
        .join("")
}
