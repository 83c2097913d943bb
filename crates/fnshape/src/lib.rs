//! fnshape - typed functional shapes
//!
//! Named single-operation callable contracts, closure wrappers, a catalog
//! of ready-made bindings, and construction-time structural validation.
//!
//! # Example
//!
//! ```rust
//! use fnshape::prelude::*;
//!
//! let is_even = FnPredicate::new(|n: &i64| n % 2 == 0);
//! assert!(is_even.test(&6));
//!
//! let registry = ShapeRegistry::with_builtins();
//! assert!(registry.contains("Predicate"));
//! ```

// Shape traits and wrappers
pub use fnshape_core::shape;
pub use fnshape_core::shape::{
    BiConsumer, BiFunction, BiPredicate, BinaryOperator, Consumer, DoubleSupplier, FnBiConsumer,
    FnBiFunction, FnBiPredicate, FnConsumer, FnDoubleSupplier, FnFunction, FnIntBinaryOperator,
    FnIntConsumer, FnIntPredicate, FnIntSupplier, FnIntUnaryOperator, FnPredicate, FnSupplier,
    FnToIntFunction, Function, IntBinaryOperator, IntConsumer, IntPredicate, IntSupplier,
    IntUnaryOperator, Predicate, Supplier, ToIntFunction, UnaryOperator,
};

// Descriptors, validation, and the registry
pub use fnshape_core::{
    DispatchKind, OperationDescriptor, Result, ReturnKind, ShapeCategory, ShapeDescriptor,
    ShapeError, ShapeRegistry, ValueKind,
};

// Ready-made bindings
pub use fnshape_catalog::{numeric, random, text};

// Declarative manifests
pub use fnshape_config::{ConfigError, ShapeManifest};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        BiConsumer, BiFunction, BiPredicate, BinaryOperator, Consumer, DoubleSupplier, Function,
        IntConsumer, IntPredicate, IntSupplier, Predicate, Supplier, ToIntFunction, UnaryOperator,
    };
    pub use super::{
        FnBiConsumer, FnBiFunction, FnBiPredicate, FnConsumer, FnDoubleSupplier, FnFunction,
        FnIntConsumer, FnIntPredicate, FnIntSupplier, FnPredicate, FnSupplier, FnToIntFunction,
    };
    pub use super::{numeric, random, text};
    pub use super::{ShapeManifest, ShapeRegistry};
}
