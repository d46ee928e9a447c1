use crate::interpreter::error::{ParseError, Result};
use crate::interpreter::token::{Token, TokenKind};

/// Splits expression text into positioned tokens, one at a time.
///
/// Yields `Err` for the first malformed token and nothing after it.
pub struct Lexer {
    characters: Vec<char>,
    position: usize,
    failed: bool,
}

/// Converts the given expression text into its tokens.
///
/// # Arguments
///
/// * `expression`: The text-representation of the condition.
///
/// returns: The tokens of the expression, in source order.
///
/// # Examples
///
/// ```
/// use condition_expression::interpreter::lexer::tokenize;
/// use condition_expression::interpreter::token::TokenKind;
/// # use condition_expression::interpreter::error::ParseError;
///
/// # fn main() -> Result<(), ParseError> {
/// let tokens = tokenize("!deployed && ammo != 0")?;
/// assert_eq!(tokens[0].kind, TokenKind::Bang);
/// assert_eq!(tokens[3].index, 13);
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    Lexer::new(expression).collect()
}

impl Lexer {
    pub fn new(expression: &str) -> Lexer {
        Lexer {
            characters: expression.chars().collect(),
            position: 0,
            failed: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.characters.get(self.position).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.characters.get(self.position + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().map_or(false, char::is_whitespace) {
            self.position += 1;
        }
    }

    fn next_token(&mut self) -> Option<Result<Token>> {
        self.skip_whitespace();
        let start = self.position;
        let character = self.peek()?;

        let kind = match character {
            '(' => self.single(TokenKind::LeftParentheses),
            ')' => self.single(TokenKind::RightParentheses),
            '!' => {
                if self.peek_next() == Some('=') {
                    self.double(TokenKind::BangEquals)
                } else {
                    self.single(TokenKind::Bang)
                }
            }
            '&' => self.double_or_fail('&', "&&", TokenKind::DoubleAmpersand),
            '|' => self.double_or_fail('|', "||", TokenKind::DoublePipe),
            '=' => self.double_or_fail('=', "==", TokenKind::DoubleEquals),
            '-' if self.peek_next().map_or(false, |next| next.is_ascii_digit()) => {
                self.literal_integer()
            }
            digit if digit.is_ascii_digit() => self.literal_integer(),
            letter if is_identifier_start(letter) => Ok(self.identifier()),
            invalid => Err(ParseError::InvalidCharacter {
                character: invalid,
                index: start,
            }),
        };

        Some(kind.map(|kind| Token::new(kind, start)))
    }

    fn single(&mut self, kind: TokenKind) -> Result<TokenKind> {
        self.position += 1;
        Ok(kind)
    }

    fn double(&mut self, kind: TokenKind) -> Result<TokenKind> {
        self.position += 2;
        Ok(kind)
    }

    fn double_or_fail(
        &mut self,
        character: char,
        expected: &'static str,
        kind: TokenKind,
    ) -> Result<TokenKind> {
        if self.peek_next() == Some(character) {
            self.double(kind)
        } else {
            Err(ParseError::IncompleteOperator {
                character,
                expected,
                index: self.position,
            })
        }
    }

    /// Reads an optionally negative run of digits.
    fn literal_integer(&mut self) -> Result<TokenKind> {
        let start = self.position;
        if self.peek() == Some('-') {
            self.position += 1;
        }
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.position += 1;
        }
        let text: String = self.characters[start..self.position].iter().collect();

        if self.peek().map_or(false, is_identifier_start) {
            let number = text
                .parse::<i32>()
                .map(|value| value.to_string())
                .unwrap_or(text);
            return Err(ParseError::NumberAndVariableMerged {
                number,
                index: start,
            });
        }

        match text.parse::<i32>() {
            Ok(value) => Ok(TokenKind::LiteralInteger(value)),
            Err(_) => Err(ParseError::NumberOutOfRange {
                number: text,
                index: start,
            }),
        }
    }

    fn identifier(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek().map_or(false, is_identifier_part) {
            self.position += 1;
        }
        TokenKind::Identifier(self.characters[start..self.position].iter().collect())
    }
}

impl Iterator for Lexer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.next_token();
        if let Some(Err(_)) = token {
            self.failed = true;
        }
        token
    }
}

fn is_identifier_start(character: char) -> bool {
    character.is_alphabetic() || character == '_'
}

fn is_identifier_part(character: char) -> bool {
    character.is_alphanumeric() || matches!(character, '_' | '-' | '.')
}
