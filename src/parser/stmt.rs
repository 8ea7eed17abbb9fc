use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    // A lone `;` is an empty statement.
    if parser.current_is(TokenKind::Semicolon) {
        return None;
    }

    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    // let x = 5;
    let token = parser.current_token().clone();

    let name = Identifier::new(parser.expect_peek(TokenKind::Identifier)?);
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(StmtWrapper::new(LetStmt { token, name, value }))
}

/// `return [<expr>] [;]`. Without a value the current token stays on
/// `return`, or moves onto the `;` when one follows.
pub fn parse_return_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.current_token().clone();

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
        return Some(StmtWrapper::new(ReturnStmt { token, value: None }));
    }

    if parser.peek_is(TokenKind::CloseCurly) || parser.peek_is(TokenKind::EOF) {
        return Some(StmtWrapper::new(ReturnStmt { token, value: None }));
    }

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(StmtWrapper::new(ReturnStmt {
        token,
        value: Some(value),
    }))
}

/// An expression on its own; the trailing `;` is optional so single
/// expressions typed at a prompt parse without one.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<StmtWrapper> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(StmtWrapper::new(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` with the current token on `{`, leaving it on `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> Option<BlockStmt> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) {
        if parser.current_is(TokenKind::EOF) {
            parser.current_error(TokenKind::CloseCurly);
            return None;
        }

        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    Some(BlockStmt { token, statements })
}
