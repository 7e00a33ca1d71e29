//! Integration tests for validators and the string helpers used by filter builders.

use lifeguard_qp::utils::{clean_list, contains_str};
use lifeguard_qp::validation::{is_in, max, min, min_max, multi, not_empty, validate};
use lifeguard_qp::{ValidationError, Validations};
use sea_query::Value;

#[test]
fn test_multi_min_max() {
    let limit = multi([min(10), max(100)]);
    assert!(matches!(
        limit(&Value::from(5)),
        Err(ValidationError::NotInScope(_))
    ));
    assert!(limit(&Value::from(50)).is_ok());
}

#[test]
fn test_validators_by_field() {
    let mut validations = Validations::new();
    validations.insert("limit".into(), min_max(1, 100));
    validations.insert("sort".into(), is_in(["asc", "desc"]));
    validations.insert("name".into(), multi([not_empty()]));

    assert!(validate(&validations, "limit", &Value::from(20)).is_ok());
    assert!(validate(&validations, "limit", &Value::from(0)).is_err());
    assert!(validate(&validations, "sort", &Value::from("desc")).is_ok());
    assert!(validate(&validations, "sort", &Value::from("random")).is_err());
    assert!(validate(&validations, "name", &Value::from("")).is_err());
    assert!(validate(&validations, "offset", &Value::from(-1)).is_ok());
}

#[test]
fn test_validators_are_shareable_across_threads() {
    let limit = min_max(1, 10);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let limit = limit.clone();
            std::thread::spawn(move || limit(&Value::from(i * 5)).is_ok())
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true, true, false]);
}

#[test]
fn test_field_list_helpers() {
    let fields = clean_list(&["id ", "\tname", " ", "created_at"]);
    assert_eq!(fields, vec!["id", "name", "created_at"]);
    assert!(contains_str("name", &fields));
    assert!(!contains_str("email", &fields));
}
