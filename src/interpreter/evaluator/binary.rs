use crate::{
    ast::{ArithOp, CmpOp},
    error::RuntimeErrorKind,
    interpreter::evaluator::core::{EvalResult, RuntimeContext},
};

impl RuntimeContext {
    /// Evaluates a binary arithmetic operation on two already-evaluated
    /// operands.
    ///
    /// Addition, subtraction and multiplication are the plain IEEE 754
    /// double operations. Division and modulo fault on a zero divisor.
    /// Modulo is floored: `lhs - floor(lhs / rhs) * rhs`. Exponentiation
    /// clamps its exponent to a non-negative integer, so `2 ^ -3` is `1`
    /// and `2 ^ 2.9` is `4`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `lhs`: Left operand.
    /// - `rhs`: Right operand.
    ///
    /// # Errors
    /// Faults with "division by zero" or "modulo zero" when `rhs` is zero
    /// for the corresponding operators.
    pub fn eval_arith(&self, op: ArithOp, lhs: f64, rhs: f64) -> EvalResult<f64> {
        match op {
            ArithOp::Plus => Ok(lhs + rhs),
            ArithOp::Minus => Ok(lhs - rhs),
            ArithOp::Mul => Ok(lhs * rhs),
            ArithOp::Div => {
                if rhs == 0.0 {
                    return Err(self.fault(RuntimeErrorKind::DivisionByZero));
                }
                Ok(lhs / rhs)
            },
            ArithOp::Mod => {
                if rhs == 0.0 {
                    return Err(self.fault(RuntimeErrorKind::ModuloZero));
                }
                Ok(lhs - (lhs / rhs).floor() * rhs)
            },
            ArithOp::Pow => Ok(lhs.powf(rhs.floor().max(0.0))),
        }
    }

    /// Evaluates a comparison or logical connective on two
    /// already-evaluated operands, yielding `1` for true and `0` for false.
    ///
    /// The comparisons use IEEE semantics, so any comparison involving NaN
    /// is false. `And` and `Or` combine the truth values of operands that
    /// have both been evaluated already; the language has no short-circuit
    /// behaviour to preserve here.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::CmpOp, interpreter::evaluator::core::RuntimeContext};
    ///
    /// assert_eq!(RuntimeContext::eval_cmp(CmpOp::Lt, 1.0, 2.0), 1.0);
    /// assert_eq!(RuntimeContext::eval_cmp(CmpOp::And, 1.0, 0.0), 0.0);
    /// assert_eq!(RuntimeContext::eval_cmp(CmpOp::Eq, f64::NAN, f64::NAN), 0.0);
    /// ```
    #[must_use]
    pub fn eval_cmp(op: CmpOp, lhs: f64, rhs: f64) -> f64 {
        match op {
            CmpOp::Lt => f64::from(lhs < rhs),
            CmpOp::Le => f64::from(lhs <= rhs),
            CmpOp::Gt => f64::from(lhs > rhs),
            CmpOp::Ge => f64::from(lhs >= rhs),
            CmpOp::Eq => f64::from(lhs == rhs),
            CmpOp::Ne => f64::from(lhs != rhs),
            CmpOp::And => f64::from(lhs != 0.0 && rhs != 0.0),
            CmpOp::Or => f64::from(lhs != 0.0 || rhs != 0.0),
        }
    }
}
