use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexed, Token},
        parser::core::ParseResult,
    },
};

/// Builds the generic syntax-error diagnostic for a token no production
/// accepts.
pub(in crate::interpreter::parser) fn unexpected(found: &Lexed) -> ParseError {
    ParseError::UnexpectedToken { lexeme: found.lexeme.clone(),
                                  line:   found.line,
                                  column: found.column, }
}

/// Builds the diagnostic for a missing required token.
pub(in crate::interpreter::parser) fn expected(what: &'static str, found: &Lexed) -> ParseError {
    ParseError::ExpectedToken { expected: what,
                                lexeme:   found.lexeme.clone(),
                                line:     found.line,
                                column:   found.column, }
}

/// Builds the diagnostic for input that ran out mid-command.
pub(in crate::interpreter::parser) const fn end_of_input() -> ParseError {
    ParseError::UnexpectedEndOfInput { line: 0, column: 0 }
}

/// Consumes the next token, which must equal `token`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `token`: The required token.
/// - `what`: Description used in the diagnostic, e.g. `"')'"`.
///
/// # Errors
/// Returns a `ParseError` if the next token differs or input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    token: &Token,
                                                    what: &'static str)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a Lexed>
{
    match tokens.next() {
        Some(found) if found.token == *token => Ok(()),
        Some(found) => Err(expected(what, found)),
        None => Err(end_of_input()),
    }
}

/// Consumes the next token, which must be an identifier, and returns its
/// name together with its position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or input
/// ends.
pub(in crate::interpreter::parser) fn parse_name<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<(String, usize, usize)>
    where I: Iterator<Item = &'a Lexed>
{
    match tokens.next() {
        Some(Lexed { token: Token::Name(name),
                     line,
                     column,
                     .. }) => Ok((name.clone(), *line, *column)),
        Some(found) => Err(expected("an identifier", found)),
        None => Err(end_of_input()),
    }
}

/// Skips any run of newline tokens.
///
/// Used at the positions where the grammar tolerates line breaks: after an
/// `if (…)` or `while (…)` head, after `else`, and inside braces.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Lexed>
{
    while let Some(Lexed { token: Token::Newline, .. }) = tokens.peek() {
        tokens.next();
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Used for function call argument lists. The parser repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token follows an item,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut items = Vec::new();
    if let Some(lexed) = tokens.peek()
       && lexed.token == *closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some(Lexed { token: Token::Comma, .. }) => {
                tokens.next();
            },
            Some(lexed) if lexed.token == *closing => {
                tokens.next();
                break;
            },
            Some(&found) => return Err(expected("',' or ')'", found)),
            None => return Err(end_of_input()),
        }
    }
    Ok(items)
}
