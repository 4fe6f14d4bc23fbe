use std::{collections::HashMap, io::Write};

use crate::{
    ast::{Expr, FunctionDef, Stmt},
    error::{RuntimeError, RuntimeErrorKind},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Interrupt`] that unwinds the walk.
pub type EvalResult<T> = Result<T, Interrupt>;

/// An event that unwinds every evaluation frame between its origin and the
/// driver.
///
/// Both variants travel the same path so that the function-call frame
/// cleanup runs exactly once for each of them; only the driver treats them
/// differently.
#[derive(Debug, Clone, PartialEq)]
pub enum Interrupt {
    /// The `halt` statement: stop the interpreter with exit status 0.
    Halt,
    /// A runtime fault, reported at the command boundary.
    Error(RuntimeError),
}

/// How a statement finished.
///
/// `Break` and `Continue` are absorbed by the innermost `while`; `Return`
/// is absorbed by the innermost function call. The semantic checker
/// guarantees none of them can reach the top level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    /// The statement ran to completion.
    Normal,
    /// A `break` is looking for its `while`.
    Break,
    /// A `continue` is looking for its `while`.
    Continue,
    /// A `return` is looking for its call, carrying the return value.
    Return(f64),
}

/// Stores the runtime state of the interpreter.
///
/// This struct holds everything that survives from one command to the next:
/// the table of user-defined functions, the variable bindings, and the call
/// stack used to name the current function in runtime errors.
///
/// ## Scoping
///
/// Each variable name maps to a stack of values. The top of the stack is
/// the current binding; reading a name with no binding yields `0`. A
/// function call pushes one value per parameter and auto variable and pops
/// them on the way out, which makes bindings lexically scoped across
/// recursive calls while keeping lookup O(1).
pub struct RuntimeContext {
    /// A mapping from function names to their definitions. A redefinition
    /// replaces the previous function.
    pub functions:  HashMap<String, FunctionDef>,
    /// A mapping from variable names to their binding stacks.
    pub variables:  HashMap<String, Vec<f64>>,
    /// The names of the currently active function calls, innermost last.
    pub call_stack: Vec<String>,
}

#[allow(clippy::new_without_default)]
impl RuntimeContext {
    /// Creates an empty runtime context: no functions, no variables, no
    /// active calls.
    #[must_use]
    pub fn new() -> Self {
        Self { functions:  HashMap::new(),
               variables:  HashMap::new(),
               call_stack: Vec::new(), }
    }

    /// Reads the current value of a variable.
    ///
    /// Returns the top of the variable's binding stack, or `0` when the
    /// name has no binding.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> f64 {
        self.variables
            .get(name)
            .and_then(|stack| stack.last())
            .copied()
            .unwrap_or(0.0)
    }

    /// Writes a value into a variable.
    ///
    /// Overwrites the top of the binding stack when one exists; otherwise
    /// the value becomes the variable's first (global) binding. Callers can
    /// observe such a binding after the current call returns.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        let stack = self.variables.entry(name.to_string()).or_default();
        if let Some(top) = stack.last_mut() {
            *top = value;
        } else {
            stack.push(value);
        }
    }

    /// Pushes a new binding for `name`, shadowing any outer binding.
    pub(crate) fn push_binding(&mut self, name: &str, value: f64) {
        self.variables.entry(name.to_string()).or_default().push(value);
    }

    /// Removes the innermost binding of `name`.
    pub(crate) fn pop_binding(&mut self, name: &str) {
        if let Some(stack) = self.variables.get_mut(name) {
            stack.pop();
        }
    }

    /// Stores a function definition. The most recent definition of a name
    /// wins.
    pub fn define_function(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.clone(), def);
    }

    /// The name of the function currently executing, or `(main)` at the top
    /// level.
    #[must_use]
    pub fn current_function(&self) -> String {
        self.call_stack
            .last()
            .cloned()
            .unwrap_or_else(|| "(main)".to_string())
    }

    /// Raises a runtime fault, capturing the name of the function that was
    /// executing when it happened.
    pub(crate) fn fault(&self, kind: RuntimeErrorKind) -> Interrupt {
        Interrupt::Error(RuntimeError { function: self.current_function(),
                                        kind })
    }

    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches on the expression variant: constants, variable
    /// reads, increments and decrements, arithmetic, comparisons, logical
    /// operators, negations, assignments and function calls.
    ///
    /// Sub-expressions are evaluated before their parent, and the operands
    /// of `&&` and `||` are both always evaluated.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `out`: Stream for values printed by calls executed inside `expr`.
    ///
    /// # Errors
    /// Propagates any [`Interrupt`] raised while evaluating.
    pub fn eval<W: Write>(&mut self, expr: &Expr, out: &mut W) -> EvalResult<f64> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Variable(name) => Ok(self.get_variable(name)),
            Expr::PreOp { name, op } => Ok(self.eval_prefix(name, *op)),
            Expr::PostOp { name, op } => Ok(self.eval_postfix(name, *op)),
            Expr::Arith { lhs, rhs, op } => {
                let lhs = self.eval(lhs, out)?;
                let rhs = self.eval(rhs, out)?;
                self.eval_arith(*op, lhs, rhs)
            },
            Expr::Cmp { lhs, rhs, op } => {
                let lhs = self.eval(lhs, out)?;
                let rhs = self.eval(rhs, out)?;
                Ok(Self::eval_cmp(*op, lhs, rhs))
            },
            Expr::Not(expr) => {
                let value = self.eval(expr, out)?;
                Ok(f64::from(value == 0.0))
            },
            Expr::Neg(expr) => Ok(-self.eval(expr, out)?),
            Expr::Assign { name, value } => {
                let value = self.eval(value, out)?;
                self.set_variable(name, value);
                Ok(value)
            },
            Expr::Call { name, args } => self.eval_call(name, args, out),
        }
    }

    /// Executes a single statement.
    ///
    /// Expression statements print their value followed by a newline when
    /// the expression is displayable. `break`, `continue` and `return`
    /// surface as [`Flow`] values for the enclosing loop or call to absorb;
    /// `halt` unwinds as an [`Interrupt`].
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `out`: Stream for displayed values.
    ///
    /// # Errors
    /// Propagates any [`Interrupt`] raised while evaluating.
    pub fn exec_statement<W: Write>(&mut self, statement: &Stmt, out: &mut W) -> EvalResult<Flow> {
        match statement {
            Stmt::Expr(expr) => {
                let value = self.eval(expr, out)?;
                if expr.displayable() {
                    let _ = writeln!(out, "{value}");
                }
                Ok(Flow::Normal)
            },
            Stmt::If { cond,
                       then,
                       otherwise, } => {
                if self.eval(cond, out)? != 0.0 {
                    self.exec_statement(then, out)
                } else if let Some(otherwise) = otherwise {
                    self.exec_statement(otherwise, out)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Stmt::While { cond, body } => {
                while self.eval(cond, out)? != 0.0 {
                    match self.exec_statement(body, out)? {
                        Flow::Break => break,
                        Flow::Normal | Flow::Continue => {},
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }
                Ok(Flow::Normal)
            },
            Stmt::Block(statements) => self.exec_statements(statements, out),
            Stmt::Break => Ok(Flow::Break),
            Stmt::Continue => Ok(Flow::Continue),
            Stmt::Halt => Err(Interrupt::Halt),
            Stmt::Return(expr) => {
                let value = match expr {
                    Some(expr) => self.eval(expr, out)?,
                    None => 0.0,
                };
                Ok(Flow::Return(value))
            },
        }
    }

    /// Executes a statement sequence in order.
    ///
    /// The first non-normal [`Flow`] stops the sequence and propagates to
    /// the enclosing construct.
    ///
    /// # Errors
    /// Propagates any [`Interrupt`] raised while evaluating.
    pub fn exec_statements<W: Write>(&mut self,
                                     statements: &[Stmt],
                                     out: &mut W)
                                     -> EvalResult<Flow> {
        for statement in statements {
            match self.exec_statement(statement, out)? {
                Flow::Normal => {},
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }
}
