use log::debug;

use crate::ast::Expression;
use crate::token::Token;

use super::context::Context;
use super::error::ParseError;
use super::lex::LexItem;

/// Parses a single expression from the front of `items`. Anything left after
/// that expression is ignored.
pub fn parse(items: &[LexItem]) -> Result<Expression, ParseError> {
    let mut state = Context::new(items);
    let expr = parse_expr(&mut state)?;

    let leftover = state.remaining();
    if !leftover.is_empty() {
        debug!(
            "ignoring {} trailing token(s) starting with `{}` at {}",
            leftover.len(),
            leftover[0].describe(),
            leftover[0].span
        );
    }

    Ok(expr)
}

fn parse_expr(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[Token::Plus, Token::Minus], parse_term)
}

fn parse_term(state: &mut Context) -> Result<Expression, ParseError> {
    parse_recursive_binary(state, &[Token::Star, Token::Slash], parse_factor)
}

fn parse_recursive_binary(
    state: &mut Context,
    match_tokens: &'static [Token],
    next_fn: fn(&mut Context) -> Result<Expression, ParseError>,
) -> Result<Expression, ParseError> {
    let mut lhs = next_fn(state)?;

    while state.peek(match_tokens) {
        let op = state.get_curr()?.token;
        state.advance();
        let rhs = next_fn(state)?;
        lhs = Expression::BinaryOp(Box::new(lhs), op, Box::new(rhs));
    }

    Ok(lhs)
}

fn parse_factor(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.get_curr()?;
    match li.token {
        Token::Number => parse_number(state),
        Token::Identifier => parse_identifier_or_assign(state),
        Token::LeftParen => parse_group(state),
        _ => Err(ParseError::UnexpectedToken(li.describe(), li.span)),
    }
}

fn parse_number(state: &mut Context) -> Result<Expression, ParseError> {
    let li = state.get_curr()?;
    state.advance();

    let num = match li.lexeme.parse::<f64>() {
        Err(_) => return Err(ParseError::ParseToNumber(li.lexeme.clone(), li.span)),
        Ok(num) => num,
    };

    // overflow parses as inf, underflow as 0 even though a digit is non-zero
    let underflow = num == 0.0 && li.lexeme.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if !num.is_finite() || underflow {
        return Err(ParseError::NumberOutOfRange(li.lexeme.clone(), li.span));
    }

    Ok(Expression::Number(num))
}

fn parse_identifier_or_assign(state: &mut Context) -> Result<Expression, ParseError> {
    let name = state.get_curr()?.lexeme.clone();
    state.advance();

    if !state.peek(&[Token::Equal]) {
        return Ok(Expression::Identifier(name));
    }
    state.advance();

    let value = parse_expr(state)?;
    Ok(Expression::Assign(name, Box::new(value)))
}

fn parse_group(state: &mut Context) -> Result<Expression, ParseError> {
    let open = state.get_curr()?.span;
    state.advance(); // consume '('
    let expr = parse_expr(state)?;

    // now the current item must be ')'
    let li = state.get_curr()?;
    if li.token != Token::RightParen {
        return Err(ParseError::UnclosedParen(open, li.describe(), li.span));
    }

    state.advance();
    Ok(expr)
}
