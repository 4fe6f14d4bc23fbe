//! # reckon
//!
//! reckon is an interactive interpreter for a small bc-style calculator
//! language. It reads commands from its input, checks them syntactically
//! and semantically with source positions on every diagnostic, and either
//! records a function definition or executes a statement line, echoing the
//! value of each displayable expression statement.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Command,
    interpreter::{
        evaluator::core::{Flow, Interrupt, RuntimeContext},
        lexer::{Lexed, Token, scan},
        parser::core::{parse_command, synchronize},
        semantics::Semantics,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and related types that
/// represent commands as trees. The AST is built by the parser, checked by
/// the semantic checker, and walked by the evaluator; its `Display` impls
/// print canonical source text that parses back to the same tree.
///
/// # Responsibilities
/// - Defines expression, statement, definition and command types.
/// - Declares which expressions are displayable as statements.
/// - Prints nodes as re-parseable source.
pub mod ast;
/// Provides unified error types for scanning, parsing, and evaluation.
///
/// This module defines all errors the interpreter can report: illegal
/// characters and syntax errors with positions, the semantic diagnostics,
/// and runtime faults tagged with the function they were raised in. Each
/// type formats itself in the interpreter's published diagnostic format.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source positions and function names for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, semantic checking and
/// evaluation to provide a complete runtime for command execution. It
/// exposes the components the driver and the tests build on.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, semantics, evaluator.
/// - Provides entry points for scanning and parsing commands.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Interprets a complete source text.
///
/// The text is scanned once (illegal characters are reported on `err` and
/// scanning continues), then processed command by command: a function
/// definition is stored in the runtime context, a statement line is
/// executed, and the value of every displayable expression statement is
/// written to `out` followed by a newline. Syntax errors discard the rest
/// of their line, semantic errors discard the whole command unexecuted,
/// and runtime errors abort only the command that raised them. The `halt`
/// statement stops processing; everything after it is ignored.
///
/// All diagnostics are written to `err`, each framed by a leading blank
/// line, in the interpreter's published formats.
///
/// # Parameters
/// - `source`: The program text.
/// - `out`: Stream for evaluation results.
/// - `err`: Stream for diagnostics.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
///
/// reckon::interpret("1 + 2 * 3\n", &mut out, &mut err);
///
/// assert_eq!(out, b"7\n");
/// assert!(err.is_empty());
/// ```
pub fn interpret<O: Write, E: Write>(source: &str, out: &mut O, err: &mut E) {
    let (tokens, faults) = scan(source);
    for fault in &faults {
        let _ = writeln!(err, "\n{fault}");
    }

    let mut context = RuntimeContext::new();
    let mut tokens = tokens.iter().peekable();

    loop {
        while let Some(Lexed { token: Token::Newline, .. }) = tokens.peek() {
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }

        let mut semantics = Semantics::new();
        match parse_command(&mut tokens, &mut semantics) {
            Ok(command) => {
                if semantics.failed() {
                    for diagnostic in semantics.take_diagnostics() {
                        let _ = writeln!(err, "\n{diagnostic}");
                    }
                    continue;
                }
                match command {
                    Command::Definition(def) => context.define_function(def),
                    Command::Statements(statements) => {
                        match context.exec_statements(&statements, out) {
                            Ok(Flow::Normal) => {},
                            // Transfers cannot reach the top level; the
                            // semantic checker rejects them while parsing.
                            Ok(_) => unreachable!(),
                            Err(Interrupt::Halt) => return,
                            Err(Interrupt::Error(error)) => {
                                let _ = writeln!(err, "\n{error}");
                            },
                        }
                    },
                }
            },
            Err(error) => {
                for diagnostic in semantics.take_diagnostics() {
                    let _ = writeln!(err, "\n{diagnostic}");
                }
                let _ = writeln!(err, "\n{error}");
                synchronize(&mut tokens);
            },
        }
    }
}

/// Prints the token stream of a source text, one token per line, as
/// `line:column Kind "lexeme"`.
///
/// Illegal characters appear in the stream as their rendered form, exactly
/// as the parser would see them.
pub fn dump_tokens<W: Write>(source: &str, out: &mut W) {
    let (tokens, _) = scan(source);
    for lexed in &tokens {
        let _ = writeln!(out,
                         "{}:{} {:?} {:?}",
                         lexed.line, lexed.column, lexed.token, lexed.lexeme);
    }
}

/// Parses a source text and prints each command back as canonical source,
/// without executing anything.
///
/// Scanning, syntax and semantic diagnostics are reported on `err` exactly
/// as under [`interpret`]; commands that fail a semantic check are still
/// printed, since the AST is built to completion.
pub fn dump_ast<O: Write, E: Write>(source: &str, out: &mut O, err: &mut E) {
    let (tokens, faults) = scan(source);
    for fault in &faults {
        let _ = writeln!(err, "\n{fault}");
    }

    let mut tokens = tokens.iter().peekable();

    loop {
        while let Some(Lexed { token: Token::Newline, .. }) = tokens.peek() {
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }

        let mut semantics = Semantics::new();
        match parse_command(&mut tokens, &mut semantics) {
            Ok(command) => {
                for diagnostic in semantics.take_diagnostics() {
                    let _ = writeln!(err, "\n{diagnostic}");
                }
                let _ = writeln!(out, "{command}");
            },
            Err(error) => {
                for diagnostic in semantics.take_diagnostics() {
                    let _ = writeln!(err, "\n{diagnostic}");
                }
                let _ = writeln!(err, "\n{error}");
                synchronize(&mut tokens);
            },
        }
    }
}
