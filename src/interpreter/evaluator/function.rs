use std::io::Write;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeErrorKind,
    interpreter::evaluator::core::{EvalResult, Flow, RuntimeContext},
};

impl RuntimeContext {
    /// Evaluates a function call.
    ///
    /// The call protocol:
    /// 1. Look the function up; a missing name faults with
    ///    `function 'f' not defined`.
    /// 2. Check the argument count against the parameter count; a mismatch
    ///    faults with `wrong number of arguments for function 'f'`.
    /// 3. Evaluate the arguments in the caller's scope, left to right.
    /// 4. Push one binding per parameter, one zero binding per auto
    ///    variable, and the function name onto the call stack.
    /// 5. Execute the body. A `return e` becomes the call's value, a bare
    ///    `return` and falling off the body both yield `0`.
    /// 6. Pop the frame again. The pop also runs when the body raised an
    ///    [`Interrupt`], before that interrupt propagates; otherwise the
    ///    variable stacks would fall out of step with the call stack.
    ///
    /// [`Interrupt`]: crate::interpreter::evaluator::core::Interrupt
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Unevaluated argument expressions.
    /// - `out`: Stream for values displayed inside the body.
    ///
    /// # Errors
    /// Faults on unknown names and wrong arities; propagates interrupts
    /// from the body.
    pub(crate) fn eval_call<W: Write>(&mut self,
                                      name: &str,
                                      args: &[Expr],
                                      out: &mut W)
                                      -> EvalResult<f64> {
        let Some(def) = self.functions.get(name).cloned() else {
            return Err(self.fault(RuntimeErrorKind::UndefinedFunction { name: name.to_string() }));
        };

        if args.len() != def.params.len() {
            return Err(self.fault(RuntimeErrorKind::WrongArgumentCount { name:
                                                                             name.to_string(), }));
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg, out)?);
        }

        self.enter_frame(&def, values);
        let outcome = self.exec_statements(&def.body, out);
        self.leave_frame(&def);

        match outcome? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(0.0),
            // The semantic checker rejects break/continue outside a while,
            // so neither can escape a function body.
            Flow::Break | Flow::Continue => unreachable!(),
        }
    }

    /// Pushes the bindings of one call: parameter values, zeroed auto
    /// variables, and the call-stack entry.
    fn enter_frame(&mut self, def: &FunctionDef, values: Vec<f64>) {
        for (param, value) in def.params.iter().zip(values) {
            self.push_binding(param, value);
        }
        for auto in &def.autos {
            self.push_binding(auto, 0.0);
        }
        self.call_stack.push(def.name.clone());
    }

    /// Pops the bindings of one call, restoring whatever the names were
    /// bound to before the call.
    fn leave_frame(&mut self, def: &FunctionDef) {
        self.call_stack.pop();
        for auto in &def.autos {
            self.pop_binding(auto);
        }
        for param in &def.params {
            self.pop_binding(param);
        }
    }
}
