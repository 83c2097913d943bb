//! fnshape Core - shape contracts, descriptors, and validation
//!
//! This crate provides the fundamental abstractions for fnshape:
//! - Shape traits: named single-operation callable contracts
//! - Closure wrappers and zero-erasure combinators
//! - Descriptor types for runtime contract metadata
//! - Construction-time structural validation and the shape registry

pub mod descriptor;
pub mod error;
pub mod registry;
pub mod shape;

pub use descriptor::{
    DispatchKind, OperationDescriptor, ReturnKind, ShapeCategory, ShapeDescriptor, ValueKind,
};
pub use error::{Result, ShapeError};
pub use registry::ShapeRegistry;
pub use shape::{
    BiConsumer, BiFunction, BiPredicate, BinaryOperator, Consumer, DoubleSupplier, FnBiConsumer,
    FnBiFunction, FnBiPredicate, FnConsumer, FnDoubleSupplier, FnFunction, FnIntBinaryOperator,
    FnIntConsumer, FnIntPredicate, FnIntSupplier, FnIntUnaryOperator, FnPredicate, FnSupplier,
    FnToIntFunction, Function, IntBinaryOperator, IntConsumer, IntPredicate, IntSupplier,
    IntUnaryOperator, Predicate, Supplier, ToIntFunction, UnaryOperator,
};
