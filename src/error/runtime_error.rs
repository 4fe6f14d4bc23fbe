/// The fault behind a [`RuntimeError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// Division with a zero divisor.
    DivisionByZero,
    /// Modulo with a zero divisor.
    ModuloZero,
    /// A call of a function that was never defined.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// A call whose argument count differs from the parameter count.
    WrongArgumentCount {
        /// The name of the function.
        name: String,
    },
}

impl std::fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloZero => write!(f, "modulo zero"),
            Self::UndefinedFunction { name } => write!(f, "function '{name}' not defined"),
            Self::WrongArgumentCount { name } => {
                write!(f, "wrong number of arguments for function '{name}'")
            },
        }
    }
}

/// Represents a fault raised during evaluation.
///
/// The enclosing function name is captured when the error is raised, because
/// the call frames are unwound while the error propagates to the driver and
/// the call stack no longer names the faulting function by the time the
/// message is printed. Top-level code reports as `(main)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    /// The function that was executing when the fault was raised.
    pub function: String,
    /// What went wrong.
    pub kind:     RuntimeErrorKind,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "runtime error in function {}: {}.", self.function, self.kind)
    }
}

impl std::error::Error for RuntimeError {}
