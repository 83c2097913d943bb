//! Shape contracts: named single-operation callable abstractions.
//!
//! Each shape is one trait declaring exactly one operation. A closure of
//! matching signature is an instance directly (blanket impls), or can be
//! bound under a nameable type via the `Fn*` wrappers. All composition is
//! zero-erasure: combinators nest generic types instead of boxing.
//!
//! The generic shapes pass operands by reference; the [`primitive`]
//! variants pass unboxed numerics by value.

pub mod consumer;
pub mod function;
pub mod operator;
pub mod predicate;
pub mod primitive;
pub mod supplier;


pub use consumer::{
    BiConsumer, ChainedConsumer, Consumer, FnBiConsumer, FnConsumer, NoopConsumer,
};
pub use function::{BiFunction, ComposedFunction, FnBiFunction, FnFunction, Function, Identity};
pub use operator::{BinaryOperator, UnaryOperator};
pub use predicate::{
    AndPredicate, BiPredicate, FalsePredicate, FnBiPredicate, FnPredicate, NotPredicate,
    OrPredicate, Predicate, TruePredicate,
};
pub use primitive::{
    DoubleSupplier, FnDoubleSupplier, FnIntBinaryOperator, FnIntConsumer, FnIntPredicate,
    FnIntSupplier, FnIntUnaryOperator, FnToIntFunction, IntBinaryOperator, IntConsumer,
    IntPredicate, IntSupplier, IntUnaryOperator, ToIntFunction,
};
pub use supplier::{ConstantSupplier, FnSupplier, Supplier};
