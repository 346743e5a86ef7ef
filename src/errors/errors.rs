use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, type_checker::types::ValueType, Position};

/// A fatal error raised by any stage, tagged with where it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_phase(&self) -> ErrorPhase {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::UnterminatedChar => ErrorPhase::Lexical,
            ErrorImpl::InvalidStatement { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::InvalidTerm { .. }
            | ErrorImpl::MissingSemicolon { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. } => ErrorPhase::Syntactic,
            ErrorImpl::Symbol(_)
            | ErrorImpl::UninitializedVariable { .. }
            | ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::IncompatibleOperation { .. } => ErrorPhase::Semantic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedChar => "UnterminatedChar",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidTerm { .. } => "InvalidTerm",
            ErrorImpl::MissingSemicolon { .. } => "MissingSemicolon",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::Symbol(SymbolError::DuplicateDeclaration { .. }) => "DuplicateDeclaration",
            ErrorImpl::Symbol(SymbolError::UndeclaredVariable { .. }) => "UndeclaredVariable",
            ErrorImpl::UninitializedVariable { .. } => "UninitializedVariable",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::IncompatibleOperation { .. } => "IncompatibleOperation",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit or malformed?",
                token
            )),
            ErrorImpl::UnterminatedChar => {
                ErrorTip::Suggestion(String::from("Char literal is missing its closing `'`"))
            }
            ErrorImpl::InvalidStatement { found } => ErrorTip::Suggestion(format!(
                "Statements must start with a variable, found {}",
                found
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected {}, found {}",
                expected, found
            )),
            ErrorImpl::InvalidTerm { found } => ErrorTip::Suggestion(format!(
                "Expected an integer, a variable or `(`, found {}",
                found
            )),
            ErrorImpl::MissingSemicolon { .. } => {
                ErrorTip::Suggestion(String::from("Did you miss a semicolon?"))
            }
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("Input ended while expecting {}", expected))
            }
            ErrorImpl::Symbol(SymbolError::DuplicateDeclaration { variable }) => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::Symbol(SymbolError::UndeclaredVariable { variable }) => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::UninitializedVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is used before it is assigned",
                variable
            )),
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::IncompatibleOperation { left, operator, right } => {
                ErrorTip::Suggestion(format!(
                    "`{}` cannot be applied to `{}` and `{}`",
                    operator, left, right
                ))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.get_phase(), self.internal_error)
    }
}

impl std::error::Error for Error {}

/// The stage an [`Error`] was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Lexical,
    Syntactic,
    Semantic,
}

impl Display for ErrorPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPhase::Lexical => write!(f, "Lexical"),
            ErrorPhase::Syntactic => write!(f, "Syntax"),
            ErrorPhase::Semantic => write!(f, "Semantic"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// What a statement ended on instead of a semicolon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Token(TokenKind),
    EndOfInput,
}

impl Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Found::Token(kind) => write!(f, "{}", kind),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unterminated char literal")]
    UnterminatedChar,
    #[error("invalid statement, expected VARIABLE, got {found}")]
    InvalidStatement { found: TokenKind },
    #[error("expected {expected}, got {found}")]
    UnexpectedToken { expected: String, found: TokenKind },
    #[error("invalid term {found}")]
    InvalidTerm { found: TokenKind },
    #[error("missing SEMICOLON at end of statement, got {found}")]
    MissingSemicolon { found: Found },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    #[error("variable {variable:?} used before initialization")]
    UninitializedVariable { variable: String },
    #[error("type mismatch: expected {expected}, received {received}")]
    TypeMatchError { expected: ValueType, received: ValueType },
    #[error("incompatible types for operation: {left} {operator} {right}")]
    IncompatibleOperation {
        left: ValueType,
        operator: char,
        right: ValueType,
    },
}

/// Failures reported by [`crate::type_checker::symbol_table::SymbolTable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("variable {variable:?} already declared")]
    DuplicateDeclaration { variable: String },
    #[error("undeclared variable {variable:?}")]
    UndeclaredVariable { variable: String },
}
