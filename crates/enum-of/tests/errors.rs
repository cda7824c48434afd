//! Integration tests for the construction error taxonomy.
//!
//! Every failure kind is exercised, and the exact message text per kind is
//! pinned down since callers are allowed to surface it verbatim.

use enum_of::{Descriptor, DescriptorKind, EnumError, Marker, enum_of};
use indexmap::IndexMap;

/// Helper to extract the construction error for a descriptor.
fn construct_err(descriptor: impl Into<Descriptor>) -> EnumError {
    enum_of(descriptor).expect_err("expected construction to fail")
}

// ============================================================================
// Scalar descriptors
// ============================================================================

#[test]
fn int_descriptor_fails_with_its_kind() {
    assert_eq!(
        construct_err(Descriptor::Int(1)),
        EnumError::InvalidDescriptorShape(DescriptorKind::Int)
    );
}

#[test]
fn string_descriptor_fails_with_its_kind() {
    assert_eq!(
        construct_err(Descriptor::Str("100".to_owned())),
        EnumError::InvalidDescriptorShape(DescriptorKind::Str)
    );
}

#[test]
fn bool_null_and_float_descriptors_fail_with_their_kinds() {
    assert_eq!(
        construct_err(Descriptor::Bool(true)),
        EnumError::InvalidDescriptorShape(DescriptorKind::Bool)
    );
    assert_eq!(
        construct_err(Descriptor::Null),
        EnumError::InvalidDescriptorShape(DescriptorKind::Null)
    );
    assert_eq!(
        construct_err(Descriptor::Float(0.5)),
        EnumError::InvalidDescriptorShape(DescriptorKind::Float)
    );
}

// ============================================================================
// Name sequences
// ============================================================================

#[test]
fn empty_sequence_fails() {
    assert_eq!(construct_err(Vec::<&str>::new()), EnumError::InvalidNameSequence);
}

#[test]
fn sequence_of_numbers_fails() {
    let descriptor = Descriptor::Sequence(vec![Descriptor::Int(1), Descriptor::Int(2), Descriptor::Int(3)]);
    assert_eq!(construct_err(descriptor), EnumError::InvalidNameSequence);
}

#[test]
fn sequence_with_one_non_string_element_fails() {
    let descriptor = Descriptor::Sequence(vec![Descriptor::Str("ok".to_owned()), Descriptor::Bool(false)]);
    assert_eq!(construct_err(descriptor), EnumError::InvalidNameSequence);
}

#[test]
fn sequence_with_empty_name_fails() {
    assert_eq!(construct_err(["first", ""]), EnumError::InvalidNameSequence);
}

#[test]
fn sequence_of_sequences_fails() {
    let descriptor = Descriptor::Sequence(vec![Descriptor::Sequence(vec![Descriptor::Str("a".to_owned())])]);
    assert_eq!(construct_err(descriptor), EnumError::InvalidNameSequence);
}

// ============================================================================
// Value mappings
// ============================================================================

#[test]
fn empty_mapping_fails() {
    assert_eq!(
        construct_err(Descriptor::Mapping(IndexMap::new())),
        EnumError::InvalidValueMapping
    );
}

#[test]
fn mapping_with_null_or_bool_value_fails() {
    let descriptor = Descriptor::from_json_value(serde_json::json!({"a": null}));
    assert_eq!(construct_err(descriptor), EnumError::InvalidValueMapping);

    let descriptor = Descriptor::from_json_value(serde_json::json!({"a": true}));
    assert_eq!(construct_err(descriptor), EnumError::InvalidValueMapping);
}

#[test]
fn mapping_with_nested_structure_fails() {
    let descriptor = Descriptor::from_json_value(serde_json::json!({"a": [1, 2]}));
    assert_eq!(construct_err(descriptor), EnumError::InvalidValueMapping);

    let descriptor = Descriptor::from_json_value(serde_json::json!({"a": {"b": 1}}));
    assert_eq!(construct_err(descriptor), EnumError::InvalidValueMapping);
}

#[test]
fn structured_object_is_not_a_value_mapping() {
    // the shape a serialized timestamp or similar host object lands in
    let descriptor = Descriptor::from_json_value(serde_json::json!({
        "timestamp": {"secs": 1_700_000_000, "nanos": 0}
    }));
    assert_eq!(construct_err(descriptor), EnumError::InvalidValueMapping);
}

#[test]
fn mapping_with_empty_key_fails() {
    let descriptor = Descriptor::from_json_value(serde_json::json!({"": 0}));
    assert_eq!(construct_err(descriptor), EnumError::InvalidValueMapping);
}

#[test]
fn a_single_bad_value_rejects_the_whole_mapping() {
    let descriptor = Descriptor::from_json_value(serde_json::json!({"good": 1, "bad": null}));
    assert_eq!(construct_err(descriptor), EnumError::InvalidValueMapping);
}

// ============================================================================
// Message text
// ============================================================================

#[test]
fn shape_error_message_names_the_received_kind() {
    assert_eq!(
        construct_err(Descriptor::Int(42)).to_string(),
        "invalid enum descriptor: expected a sequence of names or a mapping of names to values, got int"
    );
    assert_eq!(
        construct_err(Descriptor::Null).to_string(),
        "invalid enum descriptor: expected a sequence of names or a mapping of names to values, got null"
    );
}

#[test]
fn sequence_error_message_is_exact() {
    assert_eq!(
        construct_err(Vec::<&str>::new()).to_string(),
        "invalid enum descriptor: a name sequence must be non-empty and contain only non-empty strings"
    );
}

#[test]
fn mapping_error_message_is_exact() {
    assert_eq!(
        construct_err(Descriptor::Mapping(IndexMap::new())).to_string(),
        "invalid enum descriptor: a value mapping must be non-empty with non-empty string keys and string or number values"
    );
}

#[test]
fn type_marker_error_message_is_exact() {
    let e = enum_of(["a"]).unwrap();
    let err = e.marker(Marker::Type).expect_err("type marker reads must fail");
    assert_eq!(
        err.to_string(),
        "the type marker has no runtime value: it names the member value type for static use; read the keys or values markers to inspect an enum"
    );
}

#[test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(construct_err(Descriptor::Null));
    assert!(err.source().is_none());
}
