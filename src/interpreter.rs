/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, executes statements and evaluates
/// expressions, maintains the variable and function state, and realises the
/// non-local transfers (`break`, `continue`, `return`, `halt`) as tagged
/// outcomes. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages the runtime context: functions, variable stacks, call stack.
/// - Reports runtime errors such as division by zero or undefined calls.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text and produces a sequence of tokens,
/// each carrying its source text and the line and column of its first
/// character. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Handles numeric literals, identifiers, operators, and both comment
///   forms.
/// - Renders and reports illegal characters without stopping the scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the scanner and
/// constructs an AST for one command at a time. On a syntax error it
/// reports a positioned diagnostic and resynchronises at the next line
/// terminator, so a malformed command never takes the interpreter down.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements,
///   definitions).
/// - Enforces the precedence and associativity of every operator.
/// - Drives the semantic checker while commands are being built.
pub mod parser;
/// The semantics module validates the structure of commands during parsing.
///
/// The checker tracks loop depth and function nesting and validates the
/// placement of the transfer statements as well as the distinctness of
/// parameter and auto variable names. A command with any semantic
/// diagnostic parses to completion but is never executed.
///
/// # Responsibilities
/// - Tracks `in_function`, the loop depth, and the current parameter list.
/// - Produces positioned diagnostics with the exact published messages.
/// - Marks failed commands so the driver can drop them.
pub mod semantics;
