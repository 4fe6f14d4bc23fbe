use crate::{ast::StepOp, interpreter::evaluator::core::RuntimeContext};

impl RuntimeContext {
    /// Evaluates a prefix increment or decrement.
    ///
    /// The variable is read (an unbound name reads as `0`), stepped,
    /// written back, and the new value is returned.
    pub fn eval_prefix(&mut self, name: &str, op: StepOp) -> f64 {
        let value = match op {
            StepOp::Incr => self.get_variable(name) + 1.0,
            StepOp::Decr => self.get_variable(name) - 1.0,
        };
        self.set_variable(name, value);
        value
    }

    /// Evaluates a postfix increment or decrement.
    ///
    /// The variable is read, the stepped value is written back, and the
    /// original value is returned.
    pub fn eval_postfix(&mut self, name: &str, op: StepOp) -> f64 {
        let old = self.get_variable(name);
        let new = match op {
            StepOp::Incr => old + 1.0,
            StepOp::Decr => old - 1.0,
        };
        self.set_variable(name, new);
        old
    }
}
