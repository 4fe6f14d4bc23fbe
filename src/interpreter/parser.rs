/// Binary operator parsing.
///
/// Implements the precedence ladder for the binary operators: logical OR
/// and AND, comparisons, assignment, additive, multiplicative, and
/// exponentiation, together with the token-to-operator mappings.
pub mod binary;
/// Block parsing.
///
/// Parses brace-delimited statement sequences, the form shared by `if` and
/// `while` bodies and function bodies.
pub mod block;
/// Core parsing entry points.
///
/// Declares the parse result type, the expression and command entry points,
/// and the error-recovery synchronisation.
pub mod core;
/// Statement and command parsing.
///
/// Parses statements, statement lines, and `define` commands, driving the
/// semantic checker along the way.
pub mod statement;
/// Unary and primary expression parsing.
///
/// Implements logical and numeric negation, pre- and postfix
/// increment/decrement, literals, variable reads, calls, and grouping.
pub mod unary;
/// Shared parsing utilities.
///
/// Small helpers for required tokens, identifier parsing, newline skipping,
/// comma-separated lists, and diagnostic construction.
pub mod utils;
