use crate::error::SemanticError;

/// Structural checks that run alongside parsing.
///
/// One checker lives for exactly one command: the driver creates a fresh
/// instance at each command boundary. The parser reports loop and function
/// nesting to the checker and asks it to validate the placement of
/// `break`/`continue`/`return` and the distinctness of parameter and auto
/// variable names. Diagnostics are collected rather than printed, and any
/// diagnostic marks the whole command as failed: the AST still finishes
/// parsing, but it is dropped without being executed.
#[derive(Debug, Default)]
pub struct Semantics {
    /// Whether the parser is currently inside a `define` production.
    in_function: bool,
    /// How many `while` heads enclose the current position.
    loop_depth:  usize,
    /// The parameter list of the definition being parsed, available once the
    /// list has been parsed. Consulted when the auto list is checked.
    params:      Vec<String>,
    /// Everything reported so far for the current command.
    diagnostics: Vec<SemanticError>,
}

impl Semantics {
    /// Creates a checker in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a `define` production.
    pub fn enter_function(&mut self) {
        self.in_function = true;
    }

    /// Marks the close of a `define` production.
    pub fn leave_function(&mut self) {
        self.in_function = false;
        self.params.clear();
    }

    /// Marks the start of a `while` body.
    pub fn enter_loop(&mut self) {
        self.loop_depth += 1;
    }

    /// Marks the end of a `while` body.
    pub fn leave_loop(&mut self) {
        self.loop_depth -= 1;
    }

    /// Validates a `break` at the given token position.
    pub fn check_break(&mut self, line: usize, column: usize) {
        if self.loop_depth == 0 {
            self.diagnostics
                .push(SemanticError::BreakOutsideWhile { line, column });
        }
    }

    /// Validates a `continue` at the given token position.
    pub fn check_continue(&mut self, line: usize, column: usize) {
        if self.loop_depth == 0 {
            self.diagnostics
                .push(SemanticError::ContinueOutsideWhile { line, column });
        }
    }

    /// Validates a `return` at the given token position.
    pub fn check_return(&mut self, line: usize, column: usize) {
        if !self.in_function {
            self.diagnostics
                .push(SemanticError::ReturnOutsideFunction { line, column });
        }
    }

    /// Validates one parameter name against the parameters parsed before it.
    pub fn check_param(&mut self, earlier: &[String], name: &str, line: usize, column: usize) {
        if earlier.iter().any(|p| p == name) {
            self.diagnostics
                .push(SemanticError::DuplicateName { line, column });
        }
    }

    /// Records the completed parameter list of the current definition.
    pub fn set_params(&mut self, params: &[String]) {
        self.params = params.to_vec();
    }

    /// Validates one auto variable name against the auto variables parsed
    /// before it and against every parameter.
    pub fn check_auto(&mut self, earlier: &[String], name: &str, line: usize, column: usize) {
        if earlier.iter().any(|a| a == name) || self.params.iter().any(|p| p == name) {
            self.diagnostics
                .push(SemanticError::DuplicateName { line, column });
        }
    }

    /// Whether the current command has failed one of the checks.
    #[must_use]
    pub fn failed(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Surrenders the collected diagnostics, leaving the checker empty.
    pub fn take_diagnostics(&mut self) -> Vec<SemanticError> {
        std::mem::take(&mut self.diagnostics)
    }
}
