mod shunting_yard;
mod token_validator;

use crate::interpreter::error::Result;
use crate::interpreter::parser::shunting_yard::parse_tokens;
use crate::interpreter::parser::token_validator::TokenValidator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// How many parentheses and negations may be open at once.
pub const MAX_NESTING_DEPTH: usize = 256;

/// How many operations may lie on one branch of an expression tree, which bounds the
/// recursion of evaluating, rendering and dropping it.
pub const MAX_OPERATION_DEPTH: usize = 512;

/// Parses the given tokens into an equivalent expression tree.
///
/// # Arguments
///
/// * `tokens`: The tokens to parse, in source order.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use condition_expression::interpreter::error::ParseError;
/// # fn main() -> Result<(), ParseError> {
/// use condition_expression::interpreter::parser::parse;
/// use condition_expression::interpreter::token::{Token, TokenKind};
///
/// let tokens = vec![
///     Token::new(TokenKind::Bang, 0),
///     Token::new(TokenKind::Identifier("cloaked".to_string()), 1),
/// ];
/// let tree = parse(tokens)?;
/// assert!(tree.to_infix().contains(&TokenKind::Bang));
/// # Ok(()) }
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Node> {
    parse_token_stream(tokens.into_iter().map(Ok))
}

/// Parses tokens as they are produced, so an error is reported at the first position
/// where the expression stops making sense, whether that is a malformed token or a
/// malformed arrangement of tokens.
pub fn parse_token_stream(tokens: impl IntoIterator<Item = Result<Token>>) -> Result<Node> {
    let mut validator = TokenValidator::new();
    let mut validated = Vec::new();
    for token in tokens {
        let token = token?;
        validator.accept(&token)?;
        validated.push(token);
    }
    validator.finish()?;

    parse_tokens(validated)
}
