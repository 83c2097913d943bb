//! Error types for fnshape

use thiserror::Error;

/// Main error type for shape contract validation and registration
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Contract declares no abstract operation
    #[error("shape '{shape}' declares no abstract operation")]
    MissingAbstractOperation {
        /// Name of the offending contract.
        shape: String,
    },

    /// Contract declares more than one abstract operation
    #[error("shape '{shape}' declares {count} abstract operations, exactly one is allowed")]
    MultipleAbstractOperations {
        /// Name of the offending contract.
        shape: String,
        /// How many abstract operations were declared.
        count: usize,
    },

    /// Abstract operation arity does not match the shape category
    #[error("shape '{shape}': operation '{operation}' takes {found} parameters, {expected} expected")]
    ArityMismatch {
        /// Name of the offending contract.
        shape: String,
        /// Name of the offending operation.
        operation: String,
        /// Arity declared by the category.
        expected: usize,
        /// Arity found on the operation.
        found: usize,
    },

    /// Abstract operation return kind does not match the shape category
    #[error("shape '{shape}': operation '{operation}' must return {expected}, found {found}")]
    ReturnMismatch {
        /// Name of the offending contract.
        shape: String,
        /// Name of the offending operation.
        operation: String,
        /// Return kind required by the category.
        expected: String,
        /// Return kind found on the operation.
        found: String,
    },

    /// Operator operands and result are not a single type
    #[error("shape '{shape}': operator operands and result must all share one type")]
    OperandMismatch {
        /// Name of the offending contract.
        shape: String,
    },

    /// A shape with this name is already registered
    #[error("shape '{shape}' is already registered")]
    DuplicateShape {
        /// Name of the rejected contract.
        shape: String,
    },
}

/// Result type alias for fnshape operations
pub type Result<T> = std::result::Result<T, ShapeError>;
