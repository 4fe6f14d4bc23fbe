use std::iter::Peekable;

use crate::{
    ast::{ArithOp, CmpOp, Expr},
    interpreter::{
        lexer::{Lexed, Token},
        parser::{
            core::ParseResult,
            unary::{parse_not, parse_unary},
        },
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`. This is the loosest-binding
/// level of the expression grammar. Both operands of a `||` are always
/// evaluated; the operator merely combines their truth values.
///
/// Grammar: `or := and ("||" and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An expression tree using `CmpOp::Or` nodes.
pub fn parse_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut left = parse_and(tokens)?;

    while let Some(Lexed { token: Token::OrOr, .. }) = tokens.peek() {
        tokens.next();

        let right = parse_and(tokens)?;

        left = Expr::Cmp { lhs: Box::new(left),
                           rhs: Box::new(right),
                           op:  CmpOp::Or, };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`. Binds tighter than `||` and
/// looser than `!`.
///
/// Grammar: `and := not ("&&" not)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An expression tree using `CmpOp::And` nodes.
pub fn parse_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut left = parse_not(tokens)?;

    while let Some(Lexed { token: Token::AndAnd, .. }) = tokens.peek() {
        tokens.next();

        let right = parse_not(tokens)?;

        left = Expr::Cmp { lhs: Box::new(left),
                           rhs: Box::new(right),
                           op:  CmpOp::And, };
    }

    Ok(left)
}

/// Parses relational and equality expressions.
///
/// Handles all six comparison operators, left-associatively. Chained
/// comparisons are accepted as written: `a < b < c` parses as
/// `(a < b) < c`, so the right comparison sees a `0` or `1` operand.
///
/// Grammar: `relational := assignment (relop assignment)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A possibly nested `Expr::Cmp` tree.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut left = parse_assignment(tokens)?;

    while let Some(lexed) = tokens.peek() {
        let Some(op) = token_to_relational_op(&lexed.token) else {
            break;
        };
        tokens.next();

        let right = parse_assignment(tokens)?;

        left = Expr::Cmp { lhs: Box::new(left),
                           rhs: Box::new(right),
                           op };
    }

    Ok(left)
}

/// Parses assignment expressions.
///
/// An assignment requires an identifier directly followed by one of the
/// assignment operators; anything else falls through to the additive level.
/// Assignment is right-associative, so `x = y = 3` assigns `3` to both.
///
/// Compound assignments desugar while parsing: `x op= e` becomes
/// `x = x op e`, with a fresh read of `x` on the right-hand side.
///
/// Grammar: `assignment := NAME asgop assignment | additive`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead; a clone is used to peek past
///   the identifier.
///
/// # Returns
/// An `Expr::Assign` node, or whatever the additive level produces.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    if let Some(Lexed { token: Token::Name(_), .. }) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some(op) = lookahead.peek()
                                   .and_then(|next| token_to_assign_op(&next.token))
        {
            let name = match tokens.next() {
                Some(Lexed { token: Token::Name(n), .. }) => n.clone(),
                _ => unreachable!(),
            };
            tokens.next();

            let value = parse_assignment(tokens)?;
            let value = match op {
                Some(op) => Expr::Arith { lhs: Box::new(Expr::Variable(name.clone())),
                                          rhs: Box::new(value),
                                          op },
                None => value,
            };

            return Ok(Expr::Assign { name,
                                     value: Box::new(value), });
        }
    }

    parse_additive(tokens)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::Arith` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut left = parse_multiplicative(tokens)?;

    while let Some(lexed) = tokens.peek() {
        let op = match token_to_arith_op(&lexed.token) {
            Some(op) if matches!(op, ArithOp::Plus | ArithOp::Minus) => op,
            _ => break,
        };
        tokens.next();

        let right = parse_multiplicative(tokens)?;

        left = Expr::Arith { lhs: Box::new(left),
                             rhs: Box::new(right),
                             op };
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative `*`, `/` and `%`.
///
/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut left = parse_power(tokens)?;

    while let Some(lexed) = tokens.peek() {
        let op = match token_to_arith_op(&lexed.token) {
            Some(op) if matches!(op, ArithOp::Mul | ArithOp::Div | ArithOp::Mod) => op,
            _ => break,
        };
        tokens.next();

        let right = parse_power(tokens)?;

        left = Expr::Arith { lhs: Box::new(left),
                             rhs: Box::new(right),
                             op };
    }

    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` is left-associative here, so `2 ^ 3 ^ 2` parses as `(2 ^ 3) ^ 2`.
///
/// Grammar: `power := unary ("^" unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut left = parse_unary(tokens)?;

    while let Some(Lexed { token: Token::Caret, .. }) = tokens.peek() {
        tokens.next();

        let right = parse_unary(tokens)?;

        left = Expr::Arith { lhs: Box::new(left),
                             rhs: Box::new(right),
                             op:  ArithOp::Pow, };
    }

    Ok(left)
}

/// Maps a token to its corresponding arithmetic operator.
///
/// Returns `None` for all tokens that are not `+`, `-`, `*`, `/`, `%` or
/// `^`.
///
/// # Example
/// ```
/// use reckon::{ast::ArithOp, interpreter::{lexer::Token, parser::binary::token_to_arith_op}};
///
/// assert_eq!(token_to_arith_op(&Token::Percent), Some(ArithOp::Mod));
/// assert_eq!(token_to_arith_op(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_arith_op(token: &Token) -> Option<ArithOp> {
    match token {
        Token::Plus => Some(ArithOp::Plus),
        Token::Minus => Some(ArithOp::Minus),
        Token::Star => Some(ArithOp::Mul),
        Token::Slash => Some(ArithOp::Div),
        Token::Percent => Some(ArithOp::Mod),
        Token::Caret => Some(ArithOp::Pow),
        _ => None,
    }
}

/// Maps a token to its corresponding relational operator.
///
/// Covers the six comparison operators only; `&&` and `||` live at their
/// own precedence levels.
#[must_use]
pub const fn token_to_relational_op(token: &Token) -> Option<CmpOp> {
    match token {
        Token::Less => Some(CmpOp::Lt),
        Token::LessEqual => Some(CmpOp::Le),
        Token::Greater => Some(CmpOp::Gt),
        Token::GreaterEqual => Some(CmpOp::Ge),
        Token::EqualEqual => Some(CmpOp::Eq),
        Token::BangEqual => Some(CmpOp::Ne),
        _ => None,
    }
}

/// Maps a token to an assignment operator.
///
/// Returns `Some(None)` for plain `=`, `Some(Some(op))` for the compound
/// forms, and `None` for tokens that are not assignment operators at all.
#[must_use]
pub const fn token_to_assign_op(token: &Token) -> Option<Option<ArithOp>> {
    match token {
        Token::Equals => Some(None),
        Token::PlusAssign => Some(Some(ArithOp::Plus)),
        Token::MinusAssign => Some(Some(ArithOp::Minus)),
        Token::MulAssign => Some(Some(ArithOp::Mul)),
        Token::DivAssign => Some(Some(ArithOp::Div)),
        Token::ModAssign => Some(Some(ArithOp::Mod)),
        Token::PowAssign => Some(Some(ArithOp::Pow)),
        _ => None,
    }
}
