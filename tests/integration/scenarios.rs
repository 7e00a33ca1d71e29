//! Integration tests for `IN (?)` expansion
//!
//! These cover the public surface end to end: the `expand!` macro, the free
//! function, the configured `Expander`, conversion of the expanded values into
//! bind parameters, and randomized shape checks.

use lifeguard_qp::{expand, with_converted_params, ExpandConfig, ExpandError, Expander};
use rand::Rng;
use sea_query::Value;

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scalar_only_query_is_untouched() {
    let (sql, values) = expand!("id = ?", "1").unwrap();
    assert_eq!(sql, "id = ?");
    assert_eq!(values, vec![Value::from("1")]);
}

#[test]
fn test_slice_of_strings() {
    let (sql, values) = expand!("id IN (?)", vec!["1".to_string(), "2".to_string()]).unwrap();
    assert_eq!(sql, "id IN (?, ?)");
    assert_eq!(values, vec![Value::from("1"), Value::from("2")]);
}

#[test]
fn test_slice_then_scalar() {
    let (sql, values) = expand!("id IN (?) AND status = ?", ["1", "2"], "active").unwrap();
    assert_eq!(sql, "id IN (?, ?) AND status = ?");
    assert_eq!(
        values,
        vec![Value::from("1"), Value::from("2"), Value::from("active")]
    );
}

#[test]
fn test_empty_slice() {
    let empty: Vec<&str> = vec![];
    let err = expand!("id IN (?)", empty).unwrap_err();
    assert_eq!(err, ExpandError::EmptySequence { position: 0 });
}

#[test]
fn test_more_placeholders_than_arguments() {
    let err = expand!("id IN (?), id2 = ?", ["1", "2"]).unwrap_err();
    assert!(matches!(err, ExpandError::TooManyPlaceholders { .. }));
    assert_eq!(err.to_string(), "number of placeholders exceeds arguments (1)");
}

#[test]
fn test_fewer_placeholders_than_arguments() {
    let s = String::from("2");
    let by_ref = &s;
    let err = expand!("id = ?", ["1", "2"], by_ref).unwrap_err();
    assert!(matches!(err, ExpandError::TooFewPlaceholders { .. }));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_strict_expander() {
    let expander = Expander::new(ExpandConfig {
        strict_placeholders: true,
        ..ExpandConfig::default()
    });
    assert!(expander.config().strict_placeholders);
    assert!(matches!(
        expander.expand("a = ? AND b = ? AND c = ?", &[&1i32, &2i32]),
        Err(ExpandError::TooManyPlaceholders { arguments: 2 })
    ));
}

// ============================================================================
// Bind parameters
// ============================================================================

#[test]
fn test_expanded_values_convert_to_params() {
    let ids = vec![uuid::Uuid::nil(), uuid::Uuid::new_v4()];
    let (sql, values) = expand!("owner IN (?) AND active = ?", ids, true).unwrap();
    assert_eq!(sql, "owner IN (?, ?) AND active = ?");
    let bound = with_converted_params(&values, |params| params.len()).unwrap();
    assert_eq!(bound, 3);
}

// ============================================================================
// Properties
// ============================================================================

fn random_query(rng: &mut impl Rng, placeholders: usize) -> String {
    let mut sql = String::from("SELECT * FROM t WHERE ");
    for i in 0..placeholders {
        if i > 0 {
            sql.push_str(if rng.gen_bool(0.5) { " AND " } else { " OR " });
        }
        sql.push_str(&format!("c{i} IN (?)"));
    }
    sql
}

#[test]
fn test_property_scalars_return_input_unchanged() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let n = rng.gen_range(0..8);
        let query = random_query(&mut rng, n);
        let scalars: Vec<i64> = (0..n).map(|_| rng.gen()).collect();
        let args: Vec<&dyn lifeguard_qp::Argument> =
            scalars.iter().map(|s| s as &dyn lifeguard_qp::Argument).collect();

        let (sql, values) = expand(&query, &args).unwrap();
        assert_eq!(sql, query.as_str());
        assert_eq!(values, scalars.iter().map(|&s| Value::from(s)).collect::<Vec<_>>());
    }
}

#[test]
fn test_property_sequence_expands_in_place_and_is_idempotent() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let len = rng.gen_range(1..20);
        let elements: Vec<i64> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
        let tag: i32 = rng.gen();

        let (sql, values) = expand!("x = ? AND id IN (?) AND y = ?", "a", elements, tag).unwrap();

        let expected_group = vec!["?"; len].join(", ");
        assert_eq!(sql, format!("x = ? AND id IN ({expected_group}) AND y = ?"));
        assert_eq!(values.len(), len + 2);
        assert_eq!(sql.matches('?').count(), values.len());
        assert_eq!(values[0], Value::from("a"));
        for (i, e) in elements.iter().enumerate() {
            assert_eq!(values[i + 1], Value::from(*e));
        }
        assert_eq!(values[len + 1], Value::from(tag));

        // Re-expanding the output with the flattened scalars changes nothing
        let args: Vec<&dyn lifeguard_qp::Argument> =
            values.iter().map(|v| v as &dyn lifeguard_qp::Argument).collect();
        let (again, again_values) = expand(&sql, &args).unwrap();
        assert_eq!(again, sql);
        assert_eq!(again_values, values);
    }
}
