use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            ArrayLiteral, BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr,
            IndexExpr, InfixExpr, IntegerLiteral, PrefixExpr, StringLiteral,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Parses one expression starting at the current token.
///
/// Infix operators are absorbed for as long as the lookahead binds tighter
/// than `bp`. On return the current token is the last token of the
/// expression. Returns `None` after recording an error.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<ExprWrapper> {
    // First parse NUD
    let Some(nud) = parser.get_nud_lookup().get(&parser.current_token_kind()).copied() else {
        parser.no_prefix_parse_fn_error();
        return None;
    };

    let mut left = nud(parser)?;

    // While the peek token's BP is greater than the current BP, continue parsing lhs
    while bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            break;
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<ExprWrapper> {
    Some(ExprWrapper::new(Identifier::new(parser.current_token().clone())))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(ExprWrapper::new(IntegerLiteral { token, value })),
        Err(_) => {
            let error = Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                token.span.start,
            );
            parser.record_error(error);
            None
        }
    }
}

pub fn parse_string_literal(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();

    Some(ExprWrapper::new(StringLiteral {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_boolean(parser: &mut Parser) -> Option<ExprWrapper> {
    Some(ExprWrapper::new(BooleanLiteral {
        token: parser.current_token().clone(),
        value: parser.current_is(TokenKind::True),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Some(ExprWrapper::new(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    bp: BindingPower,
) -> Option<ExprWrapper> {
    let operator_token = parser.current_token().clone();
    let operand_bp = parser.operand_binding_power(operator_token.kind, bp);
    parser.advance();

    let right = parse_expr(parser, operand_bp)?;

    Some(ExprWrapper::new(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    // if (x < y) { x } else { y }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Some(ExprWrapper::new(IfExpr {
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_fn_literal(parser: &mut Parser) -> Option<ExprWrapper> {
    // fn(x, y) { x + y; }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Some(ExprWrapper::new(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_fn_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut parameters = Vec::new();

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(parameters);
    }

    parameters.push(Identifier::new(parser.expect_peek(TokenKind::Identifier)?));

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parameters.push(Identifier::new(parser.expect_peek(TokenKind::Identifier)?));
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(parameters)
}

pub fn parse_array_literal(parser: &mut Parser) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    let elements = parse_expr_list(parser, TokenKind::CloseBracket)?;

    Some(ExprWrapper::new(ArrayLiteral { token, elements }))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Some(ExprWrapper::new(CallExpr {
        token,
        function: left,
        arguments,
    }))
}

pub fn parse_index_expr(
    parser: &mut Parser,
    left: ExprWrapper,
    _bp: BindingPower,
) -> Option<ExprWrapper> {
    let token = parser.current_token().clone();
    parser.advance();

    let index = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseBracket)?;

    Some(ExprWrapper::new(IndexExpr { token, left, index }))
}

/// Parses comma separated expressions up to and including `end`. The
/// current token is the opening delimiter.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Option<Vec<ExprWrapper>> {
    let mut list = Vec::new();

    if parser.peek_is(end) {
        parser.advance();
        return Some(list);
    }

    parser.advance();
    list.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(end)?;

    Some(list)
}
