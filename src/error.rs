/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing source
/// text: illegal characters, unexpected tokens, missing delimiters, and
/// premature end of input. Every variant carries the source position of the
/// offending token.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised during evaluation: division by zero,
/// modulo zero, calls of undefined functions, and wrong-arity calls. Each
/// error records the function that was executing when it was raised.
pub mod runtime_error;
/// Semantic errors.
///
/// Contains the diagnostics produced by the structural checks that run
/// alongside parsing: misplaced `break`/`continue`/`return` and duplicate
/// parameter or auto variable names.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, RuntimeErrorKind};
pub use semantic_error::SemanticError;
