//! Integration tests for accessor and custom-sequence arguments
//!
//! Uses the fixtures from `test_helpers`, enabled by the `test-helpers` feature.

use std::borrow::Cow;

use lifeguard_qp::test_helpers::{Blob, NullString, OffsetIds, Unloaded};
use lifeguard_qp::{expand, ExpandError};
use sea_query::Value;

// ============================================================================
// Accessors and custom sequences
// ============================================================================

#[test]
fn test_sequence_of_nullable_wrappers() {
    let names = vec![NullString::valid("1"), NullString::null()];
    let (sql, values) = expand!("id IN (?)", names).unwrap();
    assert_eq!(sql, "id IN (?, ?)");
    assert_eq!(values, vec![Value::from("1"), Value::String(None)]);
}

#[test]
fn test_sequence_of_failing_accessors_binds_nulls() {
    let (sql, values) = expand!("id IN (?) AND x = ?", [Unloaded, Unloaded], 1i32).unwrap();
    assert_eq!(sql, "id IN (?, ?) AND x = ?");
    assert_eq!(
        values,
        vec![
            lifeguard_qp::value::null_value(),
            lifeguard_qp::value::null_value(),
            Value::from(1i32)
        ]
    );
}

#[test]
fn test_accessor_alone_uses_fast_path() {
    let (sql, values) = expand!("id IN (?)", NullString::valid("NULL")).unwrap();
    assert!(matches!(sql, Cow::Borrowed("id IN (?)")));
    assert_eq!(values, vec![Value::from("NULL")]);
}

#[test]
fn test_accessor_producing_bytes_stays_scalar() {
    let (sql, values) = expand!("a = ? AND b IN (?)", Blob(vec![9, 9]), [1i64, 2]).unwrap();
    assert_eq!(sql, "a = ? AND b IN (?, ?)");
    assert_eq!(values[0], Value::from(vec![9u8, 9]));
}

#[test]
fn test_failing_accessor_binds_null() {
    let (sql, values) = expand!("a = ? AND b IN (?)", Unloaded, [1i64]).unwrap();
    assert_eq!(sql, "a = ? AND b IN (?)");
    assert_eq!(values[0], lifeguard_qp::value::null_value());
}

#[test]
fn test_custom_sequence() {
    let ids = OffsetIds {
        base: 100,
        offsets: vec![1, 2, 3],
    };
    let (sql, values) = expand!("id IN (?)", ids).unwrap();
    assert_eq!(sql, "id IN (?, ?, ?)");
    assert_eq!(
        values,
        vec![Value::from(101), Value::from(102), Value::from(103)]
    );
}

#[test]
fn test_empty_custom_sequence() {
    let ids = OffsetIds {
        base: 0,
        offsets: vec![],
    };
    assert_eq!(
        expand!("x = ? AND id IN (?)", 1i32, ids).unwrap_err(),
        ExpandError::EmptySequence { position: 1 }
    );
}
