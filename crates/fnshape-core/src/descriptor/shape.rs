//! Shape descriptors and structural validation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapeError};

use super::operation::{OperationDescriptor, ReturnKind, ValueKind};

/// The built-in shape categories.
///
/// A category fixes the arity and return class of a contract's single
/// abstract operation. Primitive-specialized contracts reuse the generic
/// categories with `Int`/`Double` parameter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeCategory {
    /// One input, boolean result.
    Predicate,
    /// Two inputs, boolean result.
    BiPredicate,
    /// No input, produces a value.
    Supplier,
    /// One input, no result.
    Consumer,
    /// Two inputs, no result.
    BiConsumer,
    /// One input, produces a value.
    Function,
    /// Two inputs, produces a value.
    BiFunction,
    /// One input, result of the same kind.
    UnaryOperator,
    /// Two inputs of one kind, result of that kind.
    BinaryOperator,
}

impl ShapeCategory {
    /// Declared arity of the category's single operation.
    pub fn arity(&self) -> usize {
        match self {
            ShapeCategory::Supplier => 0,
            ShapeCategory::Predicate
            | ShapeCategory::Consumer
            | ShapeCategory::Function
            | ShapeCategory::UnaryOperator => 1,
            ShapeCategory::BiPredicate
            | ShapeCategory::BiConsumer
            | ShapeCategory::BiFunction
            | ShapeCategory::BinaryOperator => 2,
        }
    }

    /// True if the category constrains operand and result to one type.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            ShapeCategory::UnaryOperator | ShapeCategory::BinaryOperator
        )
    }

    /// Return kind the category requires, for diagnostics.
    fn expected_return(&self) -> &'static str {
        match self {
            ShapeCategory::Predicate | ShapeCategory::BiPredicate => "bool",
            ShapeCategory::Consumer | ShapeCategory::BiConsumer => "nothing",
            _ => "a value",
        }
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeCategory::Predicate => "predicate",
            ShapeCategory::BiPredicate => "bi_predicate",
            ShapeCategory::Supplier => "supplier",
            ShapeCategory::Consumer => "consumer",
            ShapeCategory::BiConsumer => "bi_consumer",
            ShapeCategory::Function => "function",
            ShapeCategory::BiFunction => "bi_function",
            ShapeCategory::UnaryOperator => "unary_operator",
            ShapeCategory::BinaryOperator => "binary_operator",
        };
        write!(f, "{}", name)
    }
}

/// Describes a shape contract: a name, a category, and its operations.
///
/// A descriptor is only usable once [`validate`](Self::validate) has
/// accepted it; the registry runs validation on every registration.
///
/// # Example
///
/// ```
/// use fnshape_core::descriptor::{
///     DispatchKind, OperationDescriptor, ShapeCategory, ShapeDescriptor, ValueKind,
/// };
///
/// let descriptor = ShapeDescriptor::new("LineFilter", ShapeCategory::Predicate)
///     .with_operation(
///         OperationDescriptor::new("test", DispatchKind::Abstract)
///             .with_param(ValueKind::Text)
///             .with_return(ValueKind::Bool),
///     );
/// assert!(descriptor.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeDescriptor {
    /// Name of the contract.
    pub name: String,
    /// Category fixing arity and return class.
    pub category: ShapeCategory,
    /// All declared operations, abstract or not.
    #[cfg_attr(feature = "serde", serde(default))]
    pub operations: Vec<OperationDescriptor>,
}

impl ShapeDescriptor {
    /// Creates a descriptor with no operations.
    pub fn new(name: impl Into<String>, category: ShapeCategory) -> Self {
        ShapeDescriptor {
            name: name.into(),
            category,
            operations: Vec::new(),
        }
    }

    /// Adds an operation descriptor.
    pub fn with_operation(mut self, operation: OperationDescriptor) -> Self {
        self.operations.push(operation);
        self
    }

    /// Returns the single abstract operation, if the contract has exactly one.
    pub fn abstract_operation(&self) -> Option<&OperationDescriptor> {
        let mut abstracts = self.operations.iter().filter(|op| op.is_abstract());
        match (abstracts.next(), abstracts.next()) {
            (Some(op), None) => Some(op),
            _ => None,
        }
    }

    /// Checks the contract against the structural rules.
    ///
    /// A contract is valid only if it declares exactly one abstract
    /// operation (`Default`, `Static`, and `BaseObject` operations do not
    /// count), and that operation's arity and return kind match the
    /// category. Operators additionally require operands and result to
    /// share one kind.
    pub fn validate(&self) -> Result<()> {
        let mut abstracts = self.operations.iter().filter(|op| op.is_abstract());
        let operation = match abstracts.next() {
            None => {
                return Err(ShapeError::MissingAbstractOperation {
                    shape: self.name.clone(),
                })
            }
            Some(operation) => {
                let extra = abstracts.count();
                if extra > 0 {
                    return Err(ShapeError::MultipleAbstractOperations {
                        shape: self.name.clone(),
                        count: extra + 1,
                    });
                }
                operation
            }
        };

        let expected = self.category.arity();
        if operation.arity() != expected {
            return Err(ShapeError::ArityMismatch {
                shape: self.name.clone(),
                operation: operation.name.clone(),
                expected,
                found: operation.arity(),
            });
        }

        self.check_return(operation)?;

        if self.category.is_operator() {
            if let ReturnKind::Value(result) = operation.returns {
                if operation.params.iter().any(|&param| param != result) {
                    return Err(ShapeError::OperandMismatch {
                        shape: self.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    fn check_return(&self, operation: &OperationDescriptor) -> Result<()> {
        let ok = match self.category {
            ShapeCategory::Predicate | ShapeCategory::BiPredicate => {
                operation.returns == ReturnKind::Value(ValueKind::Bool)
            }
            ShapeCategory::Consumer | ShapeCategory::BiConsumer => {
                operation.returns == ReturnKind::Nothing
            }
            _ => matches!(operation.returns, ReturnKind::Value(_)),
        };

        if ok {
            Ok(())
        } else {
            Err(ShapeError::ReturnMismatch {
                shape: self.name.clone(),
                operation: operation.name.clone(),
                expected: self.category.expected_return().to_string(),
                found: operation.returns.to_string(),
            })
        }
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}
