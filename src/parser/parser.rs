//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser is a plain recursive descent over the token stream with one
//! token of lookahead; the grammar rules live in `stmt` and `expr`.

use tracing::{debug, trace};

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// The cursor is owned by the parser; nothing is shared between instances.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing, or `None` at end of input.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Consumes the current token and returns it.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if `matches` accepts it.
    ///
    /// `expected` describes the wanted token in the error raised otherwise:
    /// `UnexpectedEndOfInput` when the stream is exhausted, `UnexpectedToken`
    /// when the token is of the wrong shape.
    pub fn expect_error(
        &mut self,
        expected: &str,
        matches: impl Fn(&Token) -> bool,
    ) -> Result<Token, Error> {
        let position = self.get_position();

        match self.tokens.get(self.pos) {
            None => Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: String::from(expected),
                },
                position,
            )),
            Some(token) if !matches(token) => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: String::from(expected),
                    found: token.kind,
                },
                position,
            )),
            Some(token) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
        }
    }

    /// Expects a token of the specified kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(&expected_kind.to_string(), |token| token.kind == expected_kind)
    }

    /// Expects a PARENTHESIS token holding exactly `symbol`.
    pub fn expect_parenthesis(&mut self, symbol: char) -> Result<Token, Error> {
        let expected = format!("{} '{}'", TokenKind::Parenthesis, symbol);
        self.expect_error(&expected, |token| token.is_parenthesis(symbol))
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Start of the current token, or the end of the last token once the
    /// stream is exhausted.
    pub fn get_position(&self) -> Position {
        match (self.current_token(), self.tokens.last()) {
            (Some(token), _) => token.span.start.clone(),
            (None, Some(last)) => last.span.end.clone(),
            (None, None) => Position::null(),
        }
    }

    /// End of the most recently consumed token.
    pub fn previous_end(&self) -> Position {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .map(|token| token.span.end.clone())
            .unwrap_or_else(Position::null)
    }
}

/// Parses a stream of tokens into a [`Program`].
///
/// Statements are parsed until the tokens run out. The first syntax error
/// aborts the parse; no partial tree is returned.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    let start = parser.get_position();

    let mut body = vec![];

    while parser.has_tokens() {
        match parse_stmt(&mut parser) {
            Ok(stmt) => body.push(stmt),
            Err(error) => {
                debug!(error = %error, "parse failed");
                return Err(error);
            }
        }
    }

    trace!(statements = body.len(), "parsed program");

    Ok(Program {
        body,
        span: Span {
            start,
            end: parser.previous_end(),
        },
    })
}
