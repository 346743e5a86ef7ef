use crate::{
    ast::expressions::{BinaryExpr, Expr, Operator, TermExpr, TermValue},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenValue},
    Span,
};

use super::parser::Parser;

/// Expression → Term (OPERATOR Term)*
///
/// Every operator binds equally, so `2 + 3 * 4` groups as `(2 + 3) * 4`.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    while parser.current_token_kind() == Some(TokenKind::Operator) {
        let operator_token = parser.expect(TokenKind::Operator)?;
        let operator = operator_token
            .as_symbol()
            .and_then(Operator::from_symbol)
            .ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: String::from("one of + - * /"),
                        found: operator_token.kind,
                    },
                    operator_token.span.start.clone(),
                )
            })?;

        let right = parse_term(parser)?;

        left = Expr::Binary(BinaryExpr {
            span: Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            },
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

/// Term → INTEGER | VARIABLE | "(" Expression ")"
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(token) = parser.current_token().cloned() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("term"),
            },
            parser.get_position(),
        ));
    };

    match (token.kind, &token.value) {
        (TokenKind::Parenthesis, TokenValue::Symbol('(')) => parse_grouping_expr(parser),
        (TokenKind::Integer, TokenValue::Integer(value)) => {
            parser.advance();
            Ok(Expr::Term(TermExpr {
                value: TermValue::Integer(*value),
                span: token.span.clone(),
            }))
        }
        (TokenKind::Variable, value) => {
            parser.advance();
            Ok(Expr::Term(TermExpr {
                value: TermValue::Variable(value.to_string()),
                span: token.span.clone(),
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::InvalidTerm { found: token.kind },
            token.span.start.clone(),
        )),
    }
}

/// Parenthesised expressions leave no node of their own.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect_parenthesis('(')?;
    let expr = parse_expr(parser)?;
    parser.expect_parenthesis(')')?;

    Ok(expr)
}
