//! Shape contract registry.
//!
//! The registry is the construction-time boundary: every contract passes
//! [`ShapeDescriptor::validate`] before it is admitted, so nothing invalid
//! is reachable at invocation time.

use std::collections::HashMap;

use crate::descriptor::{
    DispatchKind, OperationDescriptor, ShapeCategory, ShapeDescriptor, ValueKind,
};
use crate::error::{Result, ShapeError};

/// A validated collection of shape contracts, keyed by name.
///
/// # Example
///
/// ```
/// use fnshape_core::ShapeRegistry;
///
/// let registry = ShapeRegistry::with_builtins();
/// assert!(registry.contains("Predicate"));
/// assert!(registry.contains("IntSupplier"));
/// ```
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<String, ShapeDescriptor>,
}

impl ShapeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ShapeRegistry {
            shapes: HashMap::new(),
        }
    }

    /// Returns a registry pre-populated with the built-in contracts.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for descriptor in builtin_descriptors() {
            registry
                .register(descriptor)
                .expect("built-in shape contracts are valid");
        }
        registry
    }

    /// Registers a contract after validating it.
    ///
    /// # Errors
    ///
    /// Returns the validation error for a malformed contract, or
    /// [`ShapeError::DuplicateShape`] if the name is already taken.
    pub fn register(&mut self, descriptor: ShapeDescriptor) -> Result<()> {
        descriptor.validate()?;
        if self.shapes.contains_key(&descriptor.name) {
            return Err(ShapeError::DuplicateShape {
                shape: descriptor.name.clone(),
            });
        }
        tracing::debug!(shape = %descriptor.name, category = %descriptor.category, "registered shape contract");
        self.shapes.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Finds a contract by name.
    pub fn get(&self, name: &str) -> Option<&ShapeDescriptor> {
        self.shapes.get(name)
    }

    /// True if a contract with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    /// Number of registered contracts.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True if no contracts are registered.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Registered contract names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.shapes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Descriptors for the built-in shape catalog.
fn builtin_descriptors() -> Vec<ShapeDescriptor> {
    use DispatchKind::Abstract;

    let t0 = ValueKind::Generic(0);
    let t1 = ValueKind::Generic(1);
    let t2 = ValueKind::Generic(2);

    vec![
        ShapeDescriptor::new("Predicate", ShapeCategory::Predicate).with_operation(
            OperationDescriptor::new("test", Abstract)
                .with_param(t0)
                .with_return(ValueKind::Bool),
        ),
        ShapeDescriptor::new("BiPredicate", ShapeCategory::BiPredicate).with_operation(
            OperationDescriptor::new("test", Abstract)
                .with_param(t0)
                .with_param(t1)
                .with_return(ValueKind::Bool),
        ),
        ShapeDescriptor::new("Supplier", ShapeCategory::Supplier)
            .with_operation(OperationDescriptor::new("get", Abstract).with_return(t0)),
        ShapeDescriptor::new("Consumer", ShapeCategory::Consumer)
            .with_operation(OperationDescriptor::new("accept", Abstract).with_param(t0)),
        ShapeDescriptor::new("BiConsumer", ShapeCategory::BiConsumer).with_operation(
            OperationDescriptor::new("accept", Abstract)
                .with_param(t0)
                .with_param(t1),
        ),
        ShapeDescriptor::new("Function", ShapeCategory::Function).with_operation(
            OperationDescriptor::new("apply", Abstract)
                .with_param(t0)
                .with_return(t1),
        ),
        ShapeDescriptor::new("BiFunction", ShapeCategory::BiFunction).with_operation(
            OperationDescriptor::new("apply", Abstract)
                .with_param(t0)
                .with_param(t1)
                .with_return(t2),
        ),
        ShapeDescriptor::new("UnaryOperator", ShapeCategory::UnaryOperator).with_operation(
            OperationDescriptor::new("apply", Abstract)
                .with_param(t0)
                .with_return(t0),
        ),
        ShapeDescriptor::new("BinaryOperator", ShapeCategory::BinaryOperator).with_operation(
            OperationDescriptor::new("apply", Abstract)
                .with_param(t0)
                .with_param(t0)
                .with_return(t0),
        ),
        ShapeDescriptor::new("IntPredicate", ShapeCategory::Predicate).with_operation(
            OperationDescriptor::new("test", Abstract)
                .with_param(ValueKind::Int)
                .with_return(ValueKind::Bool),
        ),
        ShapeDescriptor::new("IntSupplier", ShapeCategory::Supplier)
            .with_operation(OperationDescriptor::new("get", Abstract).with_return(ValueKind::Int)),
        ShapeDescriptor::new("IntConsumer", ShapeCategory::Consumer).with_operation(
            OperationDescriptor::new("accept", Abstract).with_param(ValueKind::Int),
        ),
        ShapeDescriptor::new("IntUnaryOperator", ShapeCategory::UnaryOperator).with_operation(
            OperationDescriptor::new("apply", Abstract)
                .with_param(ValueKind::Int)
                .with_return(ValueKind::Int),
        ),
        ShapeDescriptor::new("IntBinaryOperator", ShapeCategory::BinaryOperator).with_operation(
            OperationDescriptor::new("apply", Abstract)
                .with_param(ValueKind::Int)
                .with_param(ValueKind::Int)
                .with_return(ValueKind::Int),
        ),
        ShapeDescriptor::new("ToIntFunction", ShapeCategory::Function).with_operation(
            OperationDescriptor::new("apply", Abstract)
                .with_param(t0)
                .with_return(ValueKind::Int),
        ),
        ShapeDescriptor::new("DoubleSupplier", ShapeCategory::Supplier).with_operation(
            OperationDescriptor::new("get", Abstract).with_return(ValueKind::Double),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_complete() {
        let registry = ShapeRegistry::with_builtins();
        assert_eq!(registry.len(), 16);
        for name in [
            "Predicate",
            "BiPredicate",
            "Supplier",
            "Consumer",
            "BiConsumer",
            "Function",
            "BiFunction",
            "UnaryOperator",
            "BinaryOperator",
            "IntPredicate",
            "IntSupplier",
            "IntConsumer",
            "IntUnaryOperator",
            "IntBinaryOperator",
            "ToIntFunction",
            "DoubleSupplier",
        ] {
            assert!(registry.contains(name), "missing builtin: {}", name);
        }
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = ShapeRegistry::with_builtins();
        let duplicate = ShapeDescriptor::new("Predicate", ShapeCategory::Predicate)
            .with_operation(
                OperationDescriptor::new("test", DispatchKind::Abstract)
                    .with_param(ValueKind::Text)
                    .with_return(ValueKind::Bool),
            );
        assert!(matches!(
            registry.register(duplicate),
            Err(ShapeError::DuplicateShape { .. })
        ));
    }

    #[test]
    fn test_invalid_contract_rejected_on_register() {
        let mut registry = ShapeRegistry::new();
        let invalid = ShapeDescriptor::new("Broken", ShapeCategory::Supplier).with_operation(
            OperationDescriptor::new("get", DispatchKind::Abstract)
                .with_param(ValueKind::Int)
                .with_return(ValueKind::Int),
        );
        assert!(registry.register(invalid).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_and_names() {
        let mut registry = ShapeRegistry::new();
        registry
            .register(
                ShapeDescriptor::new("LineFilter", ShapeCategory::Predicate).with_operation(
                    OperationDescriptor::new("test", DispatchKind::Abstract)
                        .with_param(ValueKind::Text)
                        .with_return(ValueKind::Bool),
                ),
            )
            .unwrap();

        assert_eq!(
            registry.get("LineFilter").map(|d| d.category),
            Some(ShapeCategory::Predicate)
        );
        assert!(registry.get("Unknown").is_none());
        assert_eq!(registry.names(), ["LineFilter"]);
    }
}
