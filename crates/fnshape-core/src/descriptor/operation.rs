//! Operation descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic type of an operation parameter or result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    /// A generic type slot, identified by position.
    Generic(u8),
    /// Unboxed 64-bit integer.
    Int,
    /// Unboxed 64-bit float.
    Double,
    /// Boolean.
    Bool,
    /// Text.
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Generic(index) => write!(f, "T{}", index),
            ValueKind::Int => write!(f, "int"),
            ValueKind::Double => write!(f, "double"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

/// Return kind of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReturnKind {
    /// The operation returns nothing (pure effect).
    #[default]
    Nothing,
    /// The operation returns a value of the given kind.
    Value(ValueKind),
}

impl fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnKind::Nothing => write!(f, "nothing"),
            ReturnKind::Value(kind) => kind.fmt(f),
        }
    }
}

/// How an operation is carried by its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DispatchKind {
    /// Truly abstract: the closure bound to the shape provides it.
    #[default]
    Abstract,
    /// Carried with a default body; does not count against the
    /// single-abstract-operation rule.
    Default,
    /// A namespaced helper with no dispatch; never counts as abstract.
    Static,
    /// Inherited from the universal base; never counts as abstract.
    BaseObject,
}

/// Describes one operation of a shape contract.
///
/// # Example
///
/// ```
/// use fnshape_core::descriptor::{DispatchKind, OperationDescriptor, ValueKind};
///
/// let op = OperationDescriptor::new("test", DispatchKind::Abstract)
///     .with_param(ValueKind::Generic(0))
///     .with_return(ValueKind::Bool);
/// assert_eq!(op.arity(), 1);
/// assert!(op.is_abstract());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationDescriptor {
    /// Operation name.
    pub name: String,
    /// Dispatch classification.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dispatch: DispatchKind,
    /// Parameter kinds, in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<ValueKind>,
    /// Return kind.
    #[cfg_attr(feature = "serde", serde(default))]
    pub returns: ReturnKind,
}

impl OperationDescriptor {
    /// Creates an operation with no parameters, returning nothing.
    pub fn new(name: impl Into<String>, dispatch: DispatchKind) -> Self {
        OperationDescriptor {
            name: name.into(),
            dispatch,
            params: Vec::new(),
            returns: ReturnKind::Nothing,
        }
    }

    /// Appends a parameter kind.
    pub fn with_param(mut self, kind: ValueKind) -> Self {
        self.params.push(kind);
        self
    }

    /// Sets the return kind to a value of the given kind.
    pub fn with_return(mut self, kind: ValueKind) -> Self {
        self.returns = ReturnKind::Value(kind);
        self
    }

    /// Returns the number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// True if this operation counts against the single-abstract-operation rule.
    pub fn is_abstract(&self) -> bool {
        self.dispatch == DispatchKind::Abstract
    }
}
