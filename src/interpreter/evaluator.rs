/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: arithmetic with its
/// divide-by-zero checks and clamped exponentiation, comparisons, and the
/// non-short-circuit logical connectives.
pub mod binary;

/// Core evaluation logic and runtime state.
///
/// Contains the runtime context, the tagged control-flow outcomes, and the
/// statement and expression walkers.
pub mod core;

/// Function call evaluation.
///
/// Handles lookup, arity checking, argument evaluation, frame entry and the
/// unconditional frame unwind.
pub mod function;

/// Unary operator evaluation logic.
///
/// Implements the pre- and postfix increment/decrement operators.
pub mod unary;
