#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a violation of the language's structural rules.
///
/// Semantic errors are detected while the command is being parsed. The AST
/// is still built to completion so the parser stays well-formed, but a
/// command with any semantic error is never executed.
pub enum SemanticError {
    /// A `break` statement outside any `while` loop.
    BreakOutsideWhile {
        /// The source line of the `break` token.
        line:   usize,
        /// The column of the `break` token.
        column: usize,
    },
    /// A `continue` statement outside any `while` loop.
    ContinueOutsideWhile {
        /// The source line of the `continue` token.
        line:   usize,
        /// The column of the `continue` token.
        column: usize,
    },
    /// A `return` statement outside a function definition.
    ReturnOutsideFunction {
        /// The source line of the `return` token.
        line:   usize,
        /// The column of the `return` token.
        column: usize,
    },
    /// A parameter repeats an earlier parameter, or an auto variable repeats
    /// an earlier auto variable or any parameter.
    DuplicateName {
        /// The source line of the repeated name.
        line:   usize,
        /// The column of the repeated name.
        column: usize,
    },
}

impl SemanticError {
    const fn message(&self) -> &'static str {
        match self {
            Self::BreakOutsideWhile { .. } => "break outside while",
            Self::ContinueOutsideWhile { .. } => "continue outside while",
            Self::ReturnOutsideFunction { .. } => "return outside function definition",
            Self::DuplicateName { .. } => "duplicate name in parameter or auto variable list",
        }
    }

    const fn position(&self) -> (usize, usize) {
        match self {
            Self::BreakOutsideWhile { line, column }
            | Self::ContinueOutsideWhile { line, column }
            | Self::ReturnOutsideFunction { line, column }
            | Self::DuplicateName { line, column } => (*line, *column),
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, column) = self.position();
        write!(f,
               "semantic error: {} at line {line}, column {column}.",
               self.message())
    }
}

impl std::error::Error for SemanticError {}
