use std::iter::Peekable;

use crate::{
    ast::{Command, FunctionDef, Stmt},
    interpreter::{
        lexer::{Lexed, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect, expected, parse_name, skip_newlines, unexpected},
        },
        semantics::Semantics,
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if` statement with optional `else`,
/// - a `while` loop,
/// - a brace-delimited block,
/// - one of the transfers `break`, `continue`, `halt`, `return`,
/// - an expression used as a statement.
///
/// The transfers are validated against the semantic checker as they are
/// parsed; a failed check records a diagnostic but still produces the node,
/// so the rest of the command parses normally.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `semantics`: The checker for the current command.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              semantics: &mut Semantics)
                              -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let Some(&lexed) = tokens.peek() else {
        return Err(end_of_input());
    };

    match lexed.token {
        Token::If => parse_if(tokens, semantics),
        Token::While => parse_while(tokens, semantics),
        Token::LBrace => {
            tokens.next();
            Ok(Stmt::Block(parse_block(tokens, semantics)?))
        },
        Token::Break => {
            semantics.check_break(lexed.line, lexed.column);
            tokens.next();
            Ok(Stmt::Break)
        },
        Token::Continue => {
            semantics.check_continue(lexed.line, lexed.column);
            tokens.next();
            Ok(Stmt::Continue)
        },
        Token::Halt => {
            tokens.next();
            Ok(Stmt::Halt)
        },
        Token::Return => {
            semantics.check_return(lexed.line, lexed.column);
            tokens.next();
            parse_return_value(tokens)
        },
        _ => Ok(Stmt::Expr(parse_expression(tokens)?)),
    }
}

/// Parses what follows the `return` keyword.
///
/// The return value is optional: a statement terminator directly after
/// `return` means "return 0".
fn parse_return_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let expr = match tokens.peek() {
        Some(Lexed { token: Token::Newline | Token::Semicolon | Token::RBrace | Token::Else,
                     .. })
        | None => None,
        _ => Some(parse_expression(tokens)?),
    };

    Ok(Stmt::Return(expr))
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if ( <condition> ) <statement>
///     if ( <condition> ) <statement> else <statement>
/// ```
/// Line breaks are allowed between the closing `)` and the branch statement
/// and between `else` and its statement. An `else` binds to the nearest
/// preceding `if`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
/// - `semantics`: The checker for the current command.
///
/// # Returns
/// An [`Stmt::If`] node.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, semantics: &mut Semantics) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    tokens.next();
    expect(tokens, &Token::LParen, "'('")?;
    let cond = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')'")?;

    skip_newlines(tokens);
    let then = parse_statement(tokens, semantics)?;

    let otherwise = if let Some(Lexed { token: Token::Else, .. }) = tokens.peek() {
        tokens.next();
        skip_newlines(tokens);
        Some(Box::new(parse_statement(tokens, semantics)?))
    } else {
        None
    };

    Ok(Stmt::If { cond,
                  then: Box::new(then),
                  otherwise })
}

/// Parses a `while` loop.
///
/// Syntax:
/// ```text
///     while ( <condition> ) <statement>
/// ```
/// A line break is allowed between the closing `)` and the body. The loop
/// depth of the semantic checker is raised for the duration of the body, so
/// `break` and `continue` inside it pass their placement checks.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `while` keyword.
/// - `semantics`: The checker for the current command.
///
/// # Returns
/// An [`Stmt::While`] node.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, semantics: &mut Semantics) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    tokens.next();
    expect(tokens, &Token::LParen, "'('")?;
    let cond = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "')'")?;

    semantics.enter_loop();
    skip_newlines(tokens);
    let body = parse_statement(tokens, semantics)?;
    semantics.leave_loop();

    Ok(Stmt::While { cond,
                     body: Box::new(body), })
}

/// Parses a top-level statement line: one or more statements separated by
/// semicolons and terminated by a newline or the end of input.
///
/// A trailing semicolon before the terminator is tolerated.
///
/// Grammar: `stmtline := statement (";" statement)* ";"? NEWLINE`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first statement.
/// - `semantics`: The checker for the current command.
///
/// # Returns
/// A [`Command::Statements`] holding the parsed statements.
pub fn parse_statement_line<'a, I>(tokens: &mut Peekable<I>,
                                   semantics: &mut Semantics)
                                   -> ParseResult<Command>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut statements = vec![parse_statement(tokens, semantics)?];

    loop {
        match tokens.peek() {
            Some(Lexed { token: Token::Semicolon, .. }) => {
                tokens.next();
                match tokens.peek() {
                    Some(Lexed { token: Token::Newline, .. }) => {
                        tokens.next();
                        break;
                    },
                    None => break,
                    _ => statements.push(parse_statement(tokens, semantics)?),
                }
            },
            Some(Lexed { token: Token::Newline, .. }) => {
                tokens.next();
                break;
            },
            Some(&found) => return Err(unexpected(found)),
            None => break,
        }
    }

    Ok(Command::Statements(statements))
}

/// Parses a function definition command.
///
/// Syntax:
/// ```text
///     define <name> ( <params>? ) <auto-part>? { <body> }
///     auto-part := auto <name> ("," <name>)*
/// ```
/// Parameter names are checked against each other as they are parsed; auto
/// variable names are checked against earlier auto variables and against
/// every parameter. The `in_function` flag of the checker is held for the
/// whole production, so `return` is legal anywhere inside the body.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `define` keyword.
/// - `semantics`: The checker for the current command.
///
/// # Returns
/// A [`Command::Definition`] holding the parsed function.
pub fn parse_definition<'a, I>(tokens: &mut Peekable<I>,
                               semantics: &mut Semantics)
                               -> ParseResult<Command>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    tokens.next();
    semantics.enter_function();

    let (name, _, _) = parse_name(tokens)?;
    expect(tokens, &Token::LParen, "'('")?;
    let params = parse_param_list(tokens, semantics)?;
    semantics.set_params(&params);

    let autos = if let Some(Lexed { token: Token::Auto, .. }) = tokens.peek() {
        tokens.next();
        parse_auto_list(tokens, semantics)?
    } else {
        Vec::new()
    };

    expect(tokens, &Token::LBrace, "'{'")?;
    let body = parse_block(tokens, semantics)?;

    semantics.leave_function();

    Ok(Command::Definition(FunctionDef { name,
                                         params,
                                         autos,
                                         body }))
}

/// Parses the parenthesised parameter list of a definition, consuming the
/// closing `)`.
fn parse_param_list<'a, I>(tokens: &mut Peekable<I>,
                           semantics: &mut Semantics)
                           -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut params = Vec::new();

    if let Some(Lexed { token: Token::RParen, .. }) = tokens.peek() {
        tokens.next();
        return Ok(params);
    }

    loop {
        let (name, line, column) = parse_name(tokens)?;
        semantics.check_param(&params, &name, line, column);
        params.push(name);

        match tokens.peek() {
            Some(Lexed { token: Token::Comma, .. }) => {
                tokens.next();
            },
            Some(Lexed { token: Token::RParen, .. }) => {
                tokens.next();
                break;
            },
            Some(&found) => return Err(expected("',' or ')'", found)),
            None => return Err(end_of_input()),
        }
    }

    Ok(params)
}

/// Parses the auto variable list following the `auto` keyword. The list
/// ends at the first token that is not a comma after a name.
fn parse_auto_list<'a, I>(tokens: &mut Peekable<I>,
                          semantics: &mut Semantics)
                          -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a Lexed> + Clone
{
    let mut autos = Vec::new();

    loop {
        let (name, line, column) = parse_name(tokens)?;
        semantics.check_auto(&autos, &name, line, column);
        autos.push(name);

        if let Some(Lexed { token: Token::Comma, .. }) = tokens.peek() {
            tokens.next();
        } else {
            break;
        }
    }

    Ok(autos)
}
