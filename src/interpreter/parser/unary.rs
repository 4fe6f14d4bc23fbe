use std::iter::Peekable;

use crate::{
    ast::{Expr, StepOp},
    interpreter::{
        lexer::{Lexed, Token},
        parser::{
            binary::parse_relational,
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, parse_comma_separated, parse_name, unexpected},
        },
    },
};

/// Parses logical negation.
///
/// `!` sits between `&&` and the comparison operators in the precedence
/// table, so its operand is a whole relational expression: `!a < b` negates
/// the comparison, not `a`.
///
/// Grammar: `not := "!" not | relational`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Not`] node or whatever the relational level produces.
pub fn parse_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    if let Some(Lexed { token: Token::Bang, .. }) = tokens.peek() {
        tokens.next();
        let expr = parse_not(tokens)?;
        Ok(Expr::Not(Box::new(expr)))
    } else {
        parse_relational(tokens)
    }
}

/// Parses numeric negation.
///
/// Unary minus binds tighter than `^`, so `-x ^ 2` squares the negated
/// value.
///
/// Grammar: `unary := "-" unary | step`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Neg`] node or whatever the step level produces.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    if let Some(Lexed { token: Token::Minus, .. }) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Neg(Box::new(expr)))
    } else {
        parse_step(tokens)
    }
}

/// Parses pre- and postfix increment/decrement.
///
/// Both forms apply to a bare variable name only: `++x` and `x++` are
/// accepted, `f(x)++` is not.
///
/// Grammar:
/// ```text
///     step := ("++" | "--") NAME
///           | primary ("++" | "--")?
/// ```
fn parse_step<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    match tokens.peek() {
        Some(Lexed { token: Token::Incr, .. }) => {
            tokens.next();
            let (name, _, _) = parse_name(tokens)?;
            return Ok(Expr::PreOp { name,
                                    op: StepOp::Incr, });
        },
        Some(Lexed { token: Token::Decr, .. }) => {
            tokens.next();
            let (name, _, _) = parse_name(tokens)?;
            return Ok(Expr::PreOp { name,
                                    op: StepOp::Decr, });
        },
        _ => {},
    }

    let primary = parse_primary(tokens)?;

    if let Expr::Variable(name) = &primary {
        match tokens.peek() {
            Some(Lexed { token: Token::Incr, .. }) => {
                let name = name.clone();
                tokens.next();
                return Ok(Expr::PostOp { name,
                                         op: StepOp::Incr, });
            },
            Some(Lexed { token: Token::Decr, .. }) => {
                let name = name.clone();
                tokens.next();
                return Ok(Expr::PostOp { name,
                                         op: StepOp::Decr, });
            },
            _ => {},
        }
    }

    Ok(primary)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - variable reads
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | NAME
///              | NAME "(" arguments ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let Some(&lexed) = tokens.peek() else {
        return Err(end_of_input());
    };

    match &lexed.token {
        Token::Number(n) => {
            let n = *n;
            tokens.next();
            Ok(Expr::Number(n))
        },
        Token::Name(_) => parse_variable_or_call(tokens),
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "')'")?;
            Ok(expr)
        },
        _ => Err(unexpected(lexed)),
    }
}

/// Parses a variable read or, when the name is directly followed by `(`, a
/// function call with a comma-separated argument list.
fn parse_variable_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let (name, _, _) = parse_name(tokens)?;

    if let Some(Lexed { token: Token::LParen, .. }) = tokens.peek() {
        tokens.next();
        let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        Ok(Expr::Call { name, args })
    } else {
        Ok(Expr::Variable(name))
    }
}
