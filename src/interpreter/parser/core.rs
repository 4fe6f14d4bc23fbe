use std::iter::Peekable;

use crate::{
    ast::{Command, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Lexed, Token},
        parser::{
            binary::parse_or,
            statement::{parse_definition, parse_statement_line},
            utils::unexpected,
        },
        semantics::Semantics,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// loosest-binding level, logical OR, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := or`
///
/// # Parameters
/// - `tokens`: Token iterator providing [`Lexed`] records.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    parse_or(tokens)
}

/// Parses one top-level command: a function definition or a statement line.
///
/// The caller is expected to have skipped any leading newline tokens. On
/// success the terminating newline (if any) has been consumed; on error the
/// stream is left wherever parsing stopped, and [`synchronize`] restores it
/// to the next command boundary.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of a command.
/// - `semantics`: A checker in its initial state; it accumulates any
///   semantic diagnostics for this command.
///
/// # Returns
/// The parsed [`Command`].
pub fn parse_command<'a, I>(tokens: &mut Peekable<I>,
                            semantics: &mut Semantics)
                            -> ParseResult<Command>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    if let Some(Lexed { token: Token::Define, .. }) = tokens.peek() {
        let command = parse_definition(tokens, semantics)?;
        terminate_command(tokens)?;
        Ok(command)
    } else {
        parse_statement_line(tokens, semantics)
    }
}

/// Requires a newline (or the end of input) after a completed definition.
fn terminate_command<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Lexed>
{
    match tokens.peek() {
        Some(Lexed { token: Token::Newline, .. }) => {
            tokens.next();
            Ok(())
        },
        None => Ok(()),
        Some(&found) => Err(unexpected(found)),
    }
}

/// Discards tokens up to and including the next newline.
///
/// This is the parser's error recovery: after a syntax error the rest of
/// the line cannot be trusted, so everything through the line terminator is
/// dropped and parsing resumes at the next command.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Lexed>
{
    for lexed in tokens {
        if matches!(lexed.token, Token::Newline) {
            break;
        }
    }
}
