//! Validators for filter values
//!
//! A validator takes one `sea_query::Value` and either accepts it or fails with
//! [`ValidationError::NotInScope`]. They compose with [`multi`] and are looked up by
//! field name through [`Validations`].
//!
//! ## Usage
//!
//! ```rust
//! use lifeguard_qp::validation::{max, min, multi};
//! use sea_query::Value;
//!
//! let limit = multi([min(10), max(100)]);
//! assert!(limit(&Value::from(5)).is_err());
//! assert!(limit(&Value::from(50)).is_ok());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use sea_query::Value;

/// Validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is outside what the validator allows
    NotInScope(String),
}

impl ValidationError {
    fn not_in_scope(value: &Value) -> Self {
        ValidationError::NotInScope(format!("{value:?}"))
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotInScope(value) => write!(f, "{value}: not in scope"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validator for one filter value.
pub type ValidationFunc = Arc<dyn Fn(&Value) -> Result<(), ValidationError> + Send + Sync>;

/// Validators keyed by field name.
pub type Validations = HashMap<String, ValidationFunc>;

/// Run the validator registered for `field`, if any. Unregistered fields pass.
pub fn validate(validations: &Validations, field: &str, value: &Value) -> Result<(), ValidationError> {
    match validations.get(field) {
        Some(validator) => validator(value),
        None => Ok(()),
    }
}

/// Run `validators` in order and return the first failure.
pub fn multi<I>(validators: I) -> ValidationFunc
where
    I: IntoIterator<Item = ValidationFunc>,
{
    let validators: Vec<ValidationFunc> = validators.into_iter().collect();
    Arc::new(move |value: &Value| -> Result<(), ValidationError> {
        for validator in &validators {
            validator(value)?;
        }
        Ok(())
    })
}

/// Accept values equal to one of `allowed`.
///
/// Equality is per `Value` variant: `Value::Int(Some(1))` does not match
/// `Value::BigInt(Some(1))`. The candidates are kept in their own type and turned
/// into `Value`s per call, since `Value` itself is not `Send`.
pub fn is_in<I, V>(allowed: I) -> ValidationFunc
where
    I: IntoIterator<Item = V>,
    V: Clone + Send + Sync + 'static,
    Value: From<V>,
{
    let allowed: Vec<V> = allowed.into_iter().collect();
    Arc::new(move |value: &Value| -> Result<(), ValidationError> {
        if allowed.iter().any(|candidate| Value::from(candidate.clone()) == *value) {
            Ok(())
        } else {
            Err(ValidationError::not_in_scope(value))
        }
    })
}

/// Accept integers `>= min`.
pub fn min(min: i64) -> ValidationFunc {
    integer_in(move |i| i >= i128::from(min))
}

/// Accept integers `<= max`.
pub fn max(max: i64) -> ValidationFunc {
    integer_in(move |i| i <= i128::from(max))
}

/// Accept integers in `min..=max`.
pub fn min_max(min: i64, max: i64) -> ValidationFunc {
    integer_in(move |i| i128::from(min) <= i && i <= i128::from(max))
}

/// Accept non-empty strings.
pub fn not_empty() -> ValidationFunc {
    Arc::new(|value: &Value| -> Result<(), ValidationError> {
        match value {
            Value::String(Some(s)) if !s.is_empty() => Ok(()),
            _ => Err(ValidationError::not_in_scope(value)),
        }
    })
}

fn integer_in<P>(predicate: P) -> ValidationFunc
where
    P: Fn(i128) -> bool + Send + Sync + 'static,
{
    Arc::new(move |value: &Value| -> Result<(), ValidationError> {
        match as_integer(value) {
            Some(i) if predicate(i) => Ok(()),
            _ => Err(ValidationError::not_in_scope(value)),
        }
    })
}

/// Any non-null integer variant, widened so unsigned 64-bit values compare correctly.
fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::TinyInt(Some(i)) => Some(i128::from(*i)),
        Value::SmallInt(Some(i)) => Some(i128::from(*i)),
        Value::Int(Some(i)) => Some(i128::from(*i)),
        Value::BigInt(Some(i)) => Some(i128::from(*i)),
        Value::TinyUnsigned(Some(u)) => Some(i128::from(*u)),
        Value::SmallUnsigned(Some(u)) => Some(i128::from(*u)),
        Value::Unsigned(Some(u)) => Some(i128::from(*u)),
        Value::BigUnsigned(Some(u)) => Some(i128::from(*u)),
        _ => None,
    }
}
