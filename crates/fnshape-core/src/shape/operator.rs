//! Operator shapes: transforms whose operand and result types coincide.

use super::function::{BiFunction, Function};

/// A transform whose input and output types match.
///
/// Blanket-implemented: anything that is a `Function<T, T>` is a
/// `UnaryOperator<T>`.
pub trait UnaryOperator<T>: Function<T, T> {}

impl<T, F> UnaryOperator<T> for F where F: Function<T, T> {}

/// A two-operand transform producing the same type as its operands.
///
/// Blanket-implemented: anything that is a `BiFunction<T, T, T>` is a
/// `BinaryOperator<T>`.
pub trait BinaryOperator<T>: BiFunction<T, T, T> {}

impl<T, F> BinaryOperator<T> for F where F: BiFunction<T, T, T> {}
