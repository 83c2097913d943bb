//! Tests for descriptor validation.

use crate::error::ShapeError;

use super::{DispatchKind, OperationDescriptor, ShapeCategory, ShapeDescriptor, ValueKind};

fn abstract_op(name: &str) -> OperationDescriptor {
    OperationDescriptor::new(name, DispatchKind::Abstract)
}

#[test]
fn test_valid_predicate_contract() {
    let descriptor = ShapeDescriptor::new("LineFilter", ShapeCategory::Predicate).with_operation(
        abstract_op("test")
            .with_param(ValueKind::Text)
            .with_return(ValueKind::Bool),
    );
    assert!(descriptor.validate().is_ok());
    assert_eq!(
        descriptor.abstract_operation().map(|op| op.name.as_str()),
        Some("test")
    );
}

#[test]
fn test_extra_non_abstract_operations_are_allowed() {
    // Default bodies, namespaced helpers, and universal-base operations do
    // not count against the single-abstract-operation rule.
    let descriptor = ShapeDescriptor::new("Renderer", ShapeCategory::Function)
        .with_operation(
            abstract_op("apply")
                .with_param(ValueKind::Generic(0))
                .with_return(ValueKind::Text),
        )
        .with_operation(
            OperationDescriptor::new("describe", DispatchKind::Default)
                .with_return(ValueKind::Text),
        )
        .with_operation(OperationDescriptor::new("helper", DispatchKind::Static))
        .with_operation(
            OperationDescriptor::new("to_text", DispatchKind::BaseObject)
                .with_return(ValueKind::Text),
        );
    assert!(descriptor.validate().is_ok());
}

#[test]
fn test_two_abstract_operations_rejected() {
    let descriptor = ShapeDescriptor::new("Broken", ShapeCategory::Function)
        .with_operation(
            abstract_op("first")
                .with_param(ValueKind::Text)
                .with_return(ValueKind::Text),
        )
        .with_operation(
            abstract_op("second")
                .with_param(ValueKind::Text)
                .with_return(ValueKind::Text),
        );
    assert!(matches!(
        descriptor.validate(),
        Err(ShapeError::MultipleAbstractOperations { count: 2, .. })
    ));
}

#[test]
fn test_no_abstract_operation_rejected() {
    let descriptor = ShapeDescriptor::new("Empty", ShapeCategory::Consumer).with_operation(
        OperationDescriptor::new("helper", DispatchKind::Static),
    );
    assert!(matches!(
        descriptor.validate(),
        Err(ShapeError::MissingAbstractOperation { .. })
    ));
}

#[test]
fn test_supplier_with_parameters_rejected() {
    let descriptor = ShapeDescriptor::new("BadSource", ShapeCategory::Supplier).with_operation(
        abstract_op("get")
            .with_param(ValueKind::Generic(0))
            .with_return(ValueKind::Generic(0)),
    );
    assert!(matches!(
        descriptor.validate(),
        Err(ShapeError::ArityMismatch {
            expected: 0,
            found: 1,
            ..
        })
    ));
}

#[test]
fn test_predicate_returning_int_rejected() {
    let descriptor = ShapeDescriptor::new("BadFilter", ShapeCategory::Predicate).with_operation(
        abstract_op("test")
            .with_param(ValueKind::Text)
            .with_return(ValueKind::Int),
    );
    assert!(matches!(
        descriptor.validate(),
        Err(ShapeError::ReturnMismatch { .. })
    ));
}

#[test]
fn test_consumer_returning_value_rejected() {
    let descriptor = ShapeDescriptor::new("BadSink", ShapeCategory::Consumer).with_operation(
        abstract_op("accept")
            .with_param(ValueKind::Text)
            .with_return(ValueKind::Int),
    );
    assert!(matches!(
        descriptor.validate(),
        Err(ShapeError::ReturnMismatch { .. })
    ));
}

#[test]
fn test_function_returning_nothing_rejected() {
    let descriptor = ShapeDescriptor::new("BadTransform", ShapeCategory::Function)
        .with_operation(abstract_op("apply").with_param(ValueKind::Text));
    assert!(matches!(
        descriptor.validate(),
        Err(ShapeError::ReturnMismatch { .. })
    ));
}

#[test]
fn test_operator_operand_mismatch_rejected() {
    // Mixing an unboxed operand with a generic result is the classic
    // primitive-versus-wrapper mistake.
    let descriptor = ShapeDescriptor::new("BadCombine", ShapeCategory::BinaryOperator)
        .with_operation(
            abstract_op("apply")
                .with_param(ValueKind::Int)
                .with_param(ValueKind::Generic(0))
                .with_return(ValueKind::Int),
        );
    assert!(matches!(
        descriptor.validate(),
        Err(ShapeError::OperandMismatch { .. })
    ));

    let descriptor = ShapeDescriptor::new("BadNegate", ShapeCategory::UnaryOperator)
        .with_operation(
            abstract_op("apply")
                .with_param(ValueKind::Int)
                .with_return(ValueKind::Double),
        );
    assert!(matches!(
        descriptor.validate(),
        Err(ShapeError::OperandMismatch { .. })
    ));
}

#[test]
fn test_abstract_operation_is_none_when_ambiguous() {
    let descriptor = ShapeDescriptor::new("Broken", ShapeCategory::Function)
        .with_operation(abstract_op("first"))
        .with_operation(abstract_op("second"));
    assert!(descriptor.abstract_operation().is_none());
}

#[test]
fn test_display() {
    let descriptor = ShapeDescriptor::new("LineFilter", ShapeCategory::Predicate);
    assert_eq!(descriptor.to_string(), "LineFilter (predicate)");
}
