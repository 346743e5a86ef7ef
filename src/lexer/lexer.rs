use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue};

/// Handles one matched lexeme; `matched` always starts at the lexer position.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored at the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\p{L}+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]\.[0-9.]*").unwrap(), handler: float_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new(r"^[+\-*/]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator) },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign) },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new(r"^[()]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Parenthesis) },
        RegexPattern { regex: Regex::new(r"^'[^']*'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new(r"^'").unwrap(), handler: unterminated_char_handler },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Arc::new(file.unwrap_or_else(|| String::from("shell")));

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos as u32, Arc::clone(&self.file))
    }

    /// Span covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.get_position(),
            end: Position((self.pos + len) as u32, Arc::clone(&self.file)),
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.push(MK_TOKEN!(
        TokenKind::Variable,
        TokenValue::Text(String::from(matched)),
        lexer.span_of(matched.len())
    ));
    lexer.advance_n(matched.len());
    Ok(())
}

fn integer_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let value = matched.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            lexer.get_position(),
        )
    })?;

    lexer.push(MK_TOKEN!(
        TokenKind::Integer,
        TokenValue::Integer(value),
        lexer.span_of(matched.len())
    ));
    lexer.advance_n(matched.len());
    Ok(())
}

// `1.2.3` reaches here as one lexeme and is rejected by the float parse.
fn float_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let value = matched.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: String::from(matched),
            },
            lexer.get_position(),
        )
    })?;

    lexer.push(MK_TOKEN!(
        TokenKind::Float,
        TokenValue::Float(value),
        lexer.span_of(matched.len())
    ));
    lexer.advance_n(matched.len());
    Ok(())
}

fn char_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let literal = &matched[1..matched.len() - 1];

    lexer.push(MK_TOKEN!(
        TokenKind::Char,
        TokenValue::Text(String::from(literal)),
        lexer.span_of(matched.len())
    ));
    lexer.advance_n(matched.len());
    Ok(())
}

fn unterminated_char_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedChar, lexer.get_position()))
}

/// Splits `source` into tokens, stopping at the first lexical error.
///
/// `file` names the source in error positions and defaults to `"shell"`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, m.as_str().to_string()))
        });

        let Some((handler, matched)) = found else {
            let character = lex.at().unwrap_or_default();
            let error = Error::new(
                ErrorImpl::UnrecognisedCharacter { character },
                lex.get_position(),
            );
            debug!(error = %error, "tokenize failed");
            return Err(error);
        };

        if let Err(error) = handler(&mut lex, &matched) {
            debug!(error = %error, "tokenize failed");
            return Err(error);
        }
    }

    let count = lex.tokens.len();
    trace!(file = %lex.file, count, "tokenized source");
    Ok(lex.tokens)
}
