use crate::{
    ast::statements::AssignmentStmt,
    errors::errors::{Error, ErrorImpl, Found},
    lexer::tokens::TokenKind,
    Span,
};

use super::{expr::parse_expr, parser::Parser};

/// Statement → Assignment. Anything not starting with a VARIABLE is rejected.
pub fn parse_stmt(parser: &mut Parser) -> Result<AssignmentStmt, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Variable) => parse_assignment_stmt(parser),
        Some(found) => Err(Error::new(
            ErrorImpl::InvalidStatement { found },
            parser.get_position(),
        )),
        None => Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("statement"),
            },
            parser.get_position(),
        )),
    }
}

/// Assignment → VARIABLE ASSIGN Expression SEMICOLON
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<AssignmentStmt, Error> {
    let target = parser.expect(TokenKind::Variable)?;
    parser.expect(TokenKind::Assign)?;

    let value = parse_expr(parser)?;

    match parser.current_token_kind() {
        Some(TokenKind::Semicolon) => {
            parser.advance();
        }
        Some(kind) => {
            return Err(Error::new(
                ErrorImpl::MissingSemicolon {
                    found: Found::Token(kind),
                },
                parser.get_position(),
            ))
        }
        None => {
            return Err(Error::new(
                ErrorImpl::MissingSemicolon {
                    found: Found::EndOfInput,
                },
                parser.get_position(),
            ))
        }
    }

    Ok(AssignmentStmt {
        target: target.value.to_string(),
        value,
        span: Span {
            start: target.span.start,
            end: parser.previous_end(),
        },
    })
}
