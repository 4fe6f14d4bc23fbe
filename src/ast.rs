use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every value-producing construct of the language: numeric
/// constants, variable reads, pre- and postfix increment/decrement, binary
/// arithmetic and comparison, logical negation, numeric negation, assignment,
/// and function calls. Expressions are built by the parser and walked by the
/// evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant such as `3`, `2.5` or `.5`.
    Number(f64),
    /// A variable read. Reading a name that was never assigned yields `0`.
    Variable(String),
    /// A prefix increment or decrement, e.g. `++x`. Yields the new value.
    PreOp {
        /// The variable being stepped.
        name: String,
        /// Whether the variable is incremented or decremented.
        op:   StepOp,
    },
    /// A postfix increment or decrement, e.g. `x--`. Yields the old value.
    PostOp {
        /// The variable being stepped.
        name: String,
        /// Whether the variable is incremented or decremented.
        op:   StepOp,
    },
    /// A binary arithmetic operation.
    Arith {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
        /// The operator.
        op:  ArithOp,
    },
    /// A comparison or logical connective. Yields `1` or `0`.
    ///
    /// Logical `&&` and `||` evaluate both operands; the language has no
    /// short-circuit semantics.
    Cmp {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
        /// The operator.
        op:  CmpOp,
    },
    /// Logical negation: `1` if the operand is `0`, else `0`.
    Not(Box<Expr>),
    /// Numeric negation.
    Neg(Box<Expr>),
    /// An assignment. Yields the assigned value but is never displayed when
    /// used as a statement.
    Assign {
        /// The variable being written.
        name:  String,
        /// The value expression.
        value: Box<Expr>,
    },
    /// A call of a user-defined function.
    Call {
        /// Name of the function being called.
        name: String,
        /// Argument expressions, evaluated left to right in the caller's
        /// scope.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Returns whether the value of this expression is echoed when the
    /// expression is used as a statement.
    ///
    /// All expressions are displayable except assignments.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::Expr;
    ///
    /// let read = Expr::Variable("x".to_string());
    /// assert!(read.displayable());
    ///
    /// let write = Expr::Assign { name:  "x".to_string(),
    ///                            value: Box::new(Expr::Number(3.0)), };
    /// assert!(!write.displayable());
    /// ```
    #[must_use]
    pub const fn displayable(&self) -> bool {
        !matches!(self, Self::Assign { .. })
    }
}

/// Represents a statement.
///
/// Statements are evaluated for effect; expression statements additionally
/// print their value when the expression is displayable.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A standalone expression evaluated for its value and side effects.
    Expr(Expr),
    /// A conditional statement with an optional `else` branch.
    If {
        /// The branch condition; any non-zero value selects `then`.
        cond:      Expr,
        /// Statement executed when the condition holds.
        then:      Box<Stmt>,
        /// Statement executed otherwise, if present.
        otherwise: Option<Box<Stmt>>,
    },
    /// A pre-tested loop.
    While {
        /// The loop condition, re-evaluated before every iteration.
        cond: Expr,
        /// The loop body.
        body: Box<Stmt>,
    },
    /// A brace-delimited statement sequence.
    Block(Vec<Stmt>),
    /// Terminates the innermost enclosing `while`.
    Break,
    /// Restarts the innermost enclosing `while` at its condition.
    Continue,
    /// Stops the interpreter.
    Halt,
    /// Returns from the enclosing function, with `0` when no expression is
    /// given.
    Return(Option<Expr>),
}

/// Represents a user-defined function definition.
///
/// Parameters and auto variables are pairwise distinct (enforced by the
/// semantic checker) and shadow any outer bindings of the same names for the
/// duration of a call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names.
    pub params: Vec<String>,
    /// Local variables initialised to `0` on every call.
    pub autos:  Vec<String>,
    /// The statements of the function body.
    pub body:   Vec<Stmt>,
}

/// One top-level unit of input: either a function definition that is stored
/// in the runtime context, or a statement line that is executed once and
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A `define` command.
    Definition(FunctionDef),
    /// A line of semicolon-separated statements.
    Statements(Vec<Stmt>),
}

/// A prefix or postfix step operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOp {
    /// Increment by one (`++`).
    Incr,
    /// Decrement by one (`--`).
    Decr,
}

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithOp {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floored modulo (`%`)
    Mod,
    /// Exponentiation (`^`), exponent clamped to a non-negative integer
    Pow,
}

/// A comparison operator or logical connective.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CmpOp {
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Ge,
    /// Equal (`==`)
    Eq,
    /// Not equal (`!=`)
    Ne,
    /// Logical and (`&&`), both operands always evaluated
    And,
    /// Logical or (`||`), both operands always evaluated
    Or,
}

impl fmt::Display for StepOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incr => write!(f, "++"),
            Self::Decr => write!(f, "--"),
        }
    }
}

impl fmt::Display for ArithOp {
    /// # Example
    /// ```
    /// use reckon::ast::ArithOp;
    ///
    /// assert_eq!(ArithOp::Mod.to_string(), "%");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Expr {
    /// Prints the expression as canonical source text.
    ///
    /// Compound expressions are fully parenthesised, so the printed form
    /// parses back to a structurally identical tree regardless of the
    /// precedence context it is embedded in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::PreOp { name, op } => write!(f, "{op}{name}"),
            Self::PostOp { name, op } => write!(f, "{name}{op}"),
            Self::Arith { lhs, rhs, op } => write!(f, "({lhs} {op} {rhs})"),
            Self::Cmp { lhs, rhs, op } => write!(f, "({lhs} {op} {rhs})"),
            Self::Not(expr) => write!(f, "(!{expr})"),
            Self::Neg(expr) => write!(f, "(-{expr})"),
            Self::Assign { name, value } => write!(f, "({name} = {value})"),
            Self::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr(expr) => write!(f, "{expr}"),
            Self::If { cond,
                       then,
                       otherwise, } => {
                write!(f, "if ({cond}) {then}")?;
                if let Some(otherwise) = otherwise {
                    write!(f, " else {otherwise}")?;
                }
                Ok(())
            },
            Self::While { cond, body } => write!(f, "while ({cond}) {body}"),
            Self::Block(statements) => {
                if statements.is_empty() {
                    return write!(f, "{{ }}");
                }
                write!(f, "{{ ")?;
                for (i, statement) in statements.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{statement}")?;
                }
                write!(f, " }}")
            },
            Self::Break => write!(f, "break"),
            Self::Continue => write!(f, "continue"),
            Self::Halt => write!(f, "halt"),
            Self::Return(None) => write!(f, "return"),
            Self::Return(Some(expr)) => write!(f, "return {expr}"),
        }
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "define {}({})", self.name, self.params.join(", "))?;
        if !self.autos.is_empty() {
            write!(f, " auto {}", self.autos.join(", "))?;
        }
        if self.body.is_empty() {
            return write!(f, " {{ }}");
        }
        write!(f, " {{ ")?;
        for (i, statement) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{statement}")?;
        }
        write!(f, " }}")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definition(def) => write!(f, "{def}"),
            Self::Statements(statements) => {
                for (i, statement) in statements.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{statement}")?;
                }
                Ok(())
            },
        }
    }
}
