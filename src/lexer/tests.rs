//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Variables
//! - Numeric literals (integers and floats)
//! - Char literals
//! - Operators and punctuation
//! - Error cases

use pretty_assertions::assert_eq;

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind, TokenValue},
};
use crate::{errors::errors::ErrorImpl, Position, Span};

fn tok(kind: TokenKind, value: TokenValue) -> Token {
    Token::new(
        kind,
        value,
        Span {
            start: Position::null(),
            end: Position::null(),
        },
    )
}

fn text(value: &str) -> TokenValue {
    TokenValue::Text(value.to_string())
}

#[test]
fn test_tokenize_assignment() {
    let tokens = tokenize("a = 5 + 3;".to_string(), None).unwrap();

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Variable, text("a")),
            tok(TokenKind::Assign, TokenValue::Symbol('=')),
            tok(TokenKind::Integer, TokenValue::Integer(5)),
            tok(TokenKind::Operator, TokenValue::Symbol('+')),
            tok(TokenKind::Integer, TokenValue::Integer(3)),
            tok(TokenKind::Semicolon, TokenValue::Symbol(';')),
        ]
    );
}

#[test]
fn test_tokenize_floats_and_chars() {
    let tokens = tokenize("a = 5.23; b = 'c';".to_string(), None).unwrap();

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Variable, text("a")),
            tok(TokenKind::Assign, TokenValue::Symbol('=')),
            tok(TokenKind::Float, TokenValue::Float(5.23)),
            tok(TokenKind::Semicolon, TokenValue::Symbol(';')),
            tok(TokenKind::Variable, text("b")),
            tok(TokenKind::Assign, TokenValue::Symbol('=')),
            tok(TokenKind::Char, text("c")),
            tok(TokenKind::Semicolon, TokenValue::Symbol(';')),
        ]
    );
}

#[test]
fn test_tokenize_variables_stop_at_digits_and_underscores() {
    let error = tokenize("abc1 x_y".to_string(), None).unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: '_' }
    );

    let tokens = tokenize("abc1".to_string(), None).unwrap();
    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Variable, text("abc")),
            tok(TokenKind::Integer, TokenValue::Integer(1)),
        ]
    );
}

#[test]
fn test_tokenize_unicode_letters_and_whitespace() {
    let tokens = tokenize("\u{3000}été\t=\n1;".to_string(), None).unwrap();

    assert_eq!(tokens[0], tok(TokenKind::Variable, text("été")));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_operators_and_parentheses() {
    let tokens = tokenize("+-*/()".to_string(), None).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    let symbols: Vec<char> = tokens.iter().filter_map(|t| t.as_symbol()).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Parenthesis,
            TokenKind::Parenthesis,
        ]
    );
    assert_eq!(symbols, vec!['+', '-', '*', '/', '(', ')']);
    assert!(tokens[4].is_parenthesis('('));
    assert!(tokens[5].is_parenthesis(')'));
}

#[test]
fn test_tokenize_float_lookahead_is_one_character() {
    // Only the character right after the first digit decides FLOAT.
    let error = tokenize("12.5".to_string(), None).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: '.' });
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_tokenize_trailing_dot_float() {
    let tokens = tokenize("5.".to_string(), None).unwrap();

    assert_eq!(tokens, vec![tok(TokenKind::Float, TokenValue::Float(5.0))]);
}

#[test]
fn test_tokenize_malformed_float() {
    let error = tokenize("a = 1.2.3;".to_string(), None).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NumberParseError {
            token: "1.2.3".to_string()
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_integer_overflow() {
    let error = tokenize("99999999999999999999".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_tokenize_char_literal_contents() {
    let tokens = tokenize("'' 'ab' '+'".to_string(), None).unwrap();

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Char, text("")),
            tok(TokenKind::Char, text("ab")),
            tok(TokenKind::Char, text("+")),
        ]
    );
}

#[test]
fn test_tokenize_unterminated_char() {
    let error = tokenize("a = 'c;".to_string(), None).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedChar);
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_invalid_character() {
    let error = tokenize("a = % 5;".to_string(), Some("test.txt".to_string())).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: '%' });
    assert_eq!(error.get_position().0, 4);
    assert_eq!(error.get_position().1.as_str(), "test.txt");
    assert!(error.to_string().contains("invalid character '%'"));
}

#[test]
fn test_tokenize_spans() {
    let tokens = tokenize("ab = 10;".to_string(), None).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 7);
    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_tokenize_empty_source() {
    assert!(tokenize(String::new(), None).unwrap().is_empty());
    assert!(tokenize("  \n\t ".to_string(), None).unwrap().is_empty());
}

#[test]
fn test_token_equality_ignores_span() {
    let a = tokenize("x".to_string(), None).unwrap();
    let b = tokenize("   x".to_string(), Some("other".to_string())).unwrap();

    assert_eq!(a, b);
    assert_ne!(a[0].span, b[0].span);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("a = 5.5;".to_string(), None).unwrap();
    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();

    assert_eq!(
        rendered,
        vec![
            "Token(VARIABLE, a)",
            "Token(ASSIGN, =)",
            "Token(FLOAT, 5.5)",
            "Token(SEMICOLON, ;)"
        ]
    );
}
