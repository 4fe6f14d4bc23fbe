use std::iter::Peekable;

use crate::{
    ast::Stmt,
    interpreter::{
        lexer::{Lexed, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{end_of_input, expected, skip_newlines},
        },
        semantics::Semantics,
    },
};

/// Parses the statements of a brace-delimited block.
///
/// The opening `{` has already been consumed by the caller. Statements are
/// separated by newlines or semicolons; blank lines and a trailing separator
/// before the closing `}` are tolerated. Parsing ends when the closing `}`
/// is consumed.
///
/// Grammar: `block := "{" (statement (";" | NEWLINE))* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `semantics`: The checker for the current command.
///
/// # Returns
/// The statements of the block, in source order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          semantics: &mut Semantics)
                          -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_newlines(tokens);

        match tokens.peek() {
            Some(Lexed { token: Token::RBrace, .. }) => {
                tokens.next();
                break;
            },
            Some(_) => {},
            None => return Err(end_of_input()),
        }

        statements.push(parse_statement(tokens, semantics)?);

        match tokens.peek() {
            Some(Lexed { token: Token::Newline | Token::Semicolon, .. }) => {
                tokens.next();
            },
            Some(Lexed { token: Token::RBrace, .. }) => {
                tokens.next();
                break;
            },
            Some(&found) => return Err(expected("';', '}' or a line break", found)),
            None => return Err(end_of_input()),
        }
    }

    Ok(statements)
}
